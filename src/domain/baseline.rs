// ==========================================
// 铝制品 LCA 看板 - 基线实体
// ==========================================
// 职责: 基线表行、指标集合、解析后的中位数基线
// 红线: 基线表列名与指标字段之间是显式的类型契约，不做无类型列查找
// ==========================================

use crate::domain::types::{BauxiteGrade, EnergySource, Product, RouteType};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Metric - 可加和指标
// ==========================================

/// 基线/阶段表中的六个可加和指标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    ManufacturingCost,
    Electricity,
    Carbon,
    NaturalGas,
    Wastewater,
    TransportCost,
}

impl Metric {
    /// 固定顺序（输出/配置均按此顺序）
    pub const ALL: [Metric; 6] = [
        Metric::ManufacturingCost,
        Metric::Electricity,
        Metric::Carbon,
        Metric::NaturalGas,
        Metric::Wastewater,
        Metric::TransportCost,
    ];

    /// 基线表中的标准列名（已规范化为小写）
    pub fn column_name(&self) -> &'static str {
        match self {
            Metric::ManufacturingCost => "manufacturing_cost_per_unit",
            Metric::Electricity => "electricity_kwh",
            Metric::Carbon => "carbon_kgco2e",
            Metric::NaturalGas => "naturalgas_nm3",
            Metric::Wastewater => "wastewater_l",
            Metric::TransportCost => "transport_cost_usd",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

// ==========================================
// MetricSet - 指标值集合
// ==========================================

/// 六项指标的数值集合（单位: 每 kg 或每件，视上下文而定）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub manufacturing_cost_per_unit: f64,
    pub electricity_kwh: f64,
    pub carbon_kgco2e: f64,
    #[serde(rename = "naturalGas_nm3")]
    pub natural_gas_nm3: f64,
    pub wastewater_l: f64,
    pub transport_cost_usd: f64,
}

impl MetricSet {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::ManufacturingCost => self.manufacturing_cost_per_unit,
            Metric::Electricity => self.electricity_kwh,
            Metric::Carbon => self.carbon_kgco2e,
            Metric::NaturalGas => self.natural_gas_nm3,
            Metric::Wastewater => self.wastewater_l,
            Metric::TransportCost => self.transport_cost_usd,
        }
    }

    pub fn set(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::ManufacturingCost => self.manufacturing_cost_per_unit = value,
            Metric::Electricity => self.electricity_kwh = value,
            Metric::Carbon => self.carbon_kgco2e = value,
            Metric::NaturalGas => self.natural_gas_nm3 = value,
            Metric::Wastewater => self.wastewater_l = value,
            Metric::TransportCost => self.transport_cost_usd = value,
        }
    }

    /// 由逐指标函数构造
    pub fn from_fn(mut f: impl FnMut(Metric) -> f64) -> Self {
        let mut out = MetricSet::default();
        for metric in Metric::ALL {
            out.set(metric, f(metric));
        }
        out
    }

    /// 所有指标同乘一个系数
    pub fn scaled(&self, factor: f64) -> Self {
        MetricSet::from_fn(|m| self.get(m) * factor)
    }

    /// 逐项相加
    pub fn plus(&self, other: &MetricSet) -> Self {
        MetricSet::from_fn(|m| self.get(m) + other.get(m))
    }
}

// ==========================================
// BaselineKey / BaselineRow - 基线表行
// ==========================================

/// 基线行的上下文键（已规范化的字符串取值）
///
/// 保留字符串而非枚举：历史数据里存在 "na" 等非请求枚举取值。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaselineKey {
    pub product: String,
    pub route_type: String,
    pub energy_source: String,
    pub bauxite_grade: String,
}

/// 基线表中的一行历史记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineRow {
    pub key: BaselineKey,
    /// 指标值（缺失单元格为 None，中位数计算时跳过）
    pub manufacturing_cost_per_unit: Option<f64>,
    pub electricity_kwh: Option<f64>,
    pub carbon_kgco2e: Option<f64>,
    pub natural_gas_nm3: Option<f64>,
    pub wastewater_l: Option<f64>,
    pub transport_cost_usd: Option<f64>,
    pub quality_score: Option<f64>,
    /// 源文件行号（不含表头，从 1 开始）
    pub row_number: usize,
}

impl BaselineRow {
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::ManufacturingCost => self.manufacturing_cost_per_unit,
            Metric::Electricity => self.electricity_kwh,
            Metric::Carbon => self.carbon_kgco2e,
            Metric::NaturalGas => self.natural_gas_nm3,
            Metric::Wastewater => self.wastewater_l,
            Metric::TransportCost => self.transport_cost_usd,
        }
    }
}

/// 内存基线表（每次请求重新加载）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaselineTable {
    /// 数据来源描述（文件路径）
    pub source: String,
    pub rows: Vec<BaselineRow>,
}

impl BaselineTable {
    pub fn new(source: impl Into<String>, rows: Vec<BaselineRow>) -> Self {
        Self {
            source: source.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ==========================================
// BaselineRecord - 解析后的基线
// ==========================================

/// 回退层级（从最精确到最宽松）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackLevel {
    Exact,         // 四键精确匹配
    GradeRelaxed,  // 放宽品位
    EnergyRelaxed, // 放宽能源
    ProductOnly,   // 仅按产品
}

impl FallbackLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackLevel::Exact => "exact",
            FallbackLevel::GradeRelaxed => "grade_relaxed",
            FallbackLevel::EnergyRelaxed => "energy_relaxed",
            FallbackLevel::ProductOnly => "product_only",
        }
    }
}

impl fmt::Display for FallbackLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 基线查询上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineQuery {
    pub product: Product,
    pub route_type: RouteType,
    pub energy_source: EnergySource,
    pub bauxite_grade: BauxiteGrade,
}

/// 中位数基线（每 kg）+ 回退元信息
///
/// 序列化后即响应中的 `baselines_used`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineRecord {
    #[serde(flatten)]
    pub metrics: MetricSet,
    pub quality_score: Option<f64>,
    pub fallback_level: FallbackLevel,
    /// 实际参与匹配的键名
    pub matched_keys: Vec<String>,
    /// 命中行数
    pub matched_rows: usize,
    pub query: BaselineQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_set_scaled_and_plus() {
        let a = MetricSet::from_fn(|_| 2.0);
        let b = a.scaled(3.0);
        assert_eq!(b.carbon_kgco2e, 6.0);
        let c = a.plus(&b);
        assert_eq!(c.transport_cost_usd, 8.0);
    }

    #[test]
    fn test_metric_set_wire_names() {
        let json = serde_json::to_value(MetricSet::default()).unwrap();
        assert!(json.get("naturalGas_nm3").is_some());
        assert!(json.get("manufacturing_cost_per_unit").is_some());
    }

    #[test]
    fn test_fallback_level_order() {
        assert!(FallbackLevel::Exact < FallbackLevel::GradeRelaxed);
        assert!(FallbackLevel::EnergyRelaxed < FallbackLevel::ProductOnly);
    }
}

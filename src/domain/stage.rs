// ==========================================
// 铝制品 LCA 看板 - 阶段明细与汇总
// ==========================================

use crate::domain::baseline::MetricSet;
use crate::domain::types::Scope;
use serde::{Deserialize, Serialize};

/// 单个生命周期阶段在某一口径下的指标行
///
/// 字段名与看板前端约定一致（扁平记录）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageRow {
    pub stage: String,
    pub quality_score: Option<f64>,
    pub electricity_kwh: f64,
    pub carbon_kgco2e: f64,
    #[serde(rename = "naturalGas_nm3")]
    pub natural_gas_nm3: f64,
    pub wastewater_l: f64,
    pub manufacturing_cost_per_unit_usd: f64,
    pub transport_cost_usd: f64,
    pub per_unit: bool,
    pub units: u32,
    pub scope: Scope,
}

impl StageRow {
    /// 由单件口径指标构造单件行
    pub fn per_unit_row(stage: &str, metrics: &MetricSet, quality_score: Option<f64>) -> Self {
        Self {
            stage: stage.to_string(),
            quality_score,
            electricity_kwh: metrics.electricity_kwh,
            carbon_kgco2e: metrics.carbon_kgco2e,
            natural_gas_nm3: metrics.natural_gas_nm3,
            wastewater_l: metrics.wastewater_l,
            manufacturing_cost_per_unit_usd: metrics.manufacturing_cost_per_unit,
            transport_cost_usd: metrics.transport_cost_usd,
            per_unit: true,
            units: 1,
            scope: Scope::PerUnit,
        }
    }

    /// 按批量放大为整批行（units 只承载，不再相乘）
    pub fn to_total(&self, units: u32) -> Self {
        let scaled = self.metrics().scaled(f64::from(units));
        Self {
            stage: self.stage.clone(),
            quality_score: self.quality_score,
            electricity_kwh: scaled.electricity_kwh,
            carbon_kgco2e: scaled.carbon_kgco2e,
            natural_gas_nm3: scaled.natural_gas_nm3,
            wastewater_l: scaled.wastewater_l,
            manufacturing_cost_per_unit_usd: scaled.manufacturing_cost_per_unit,
            transport_cost_usd: scaled.transport_cost_usd,
            per_unit: false,
            units,
            scope: Scope::Total,
        }
    }

    pub fn metrics(&self) -> MetricSet {
        MetricSet {
            manufacturing_cost_per_unit: self.manufacturing_cost_per_unit_usd,
            electricity_kwh: self.electricity_kwh,
            carbon_kgco2e: self.carbon_kgco2e,
            natural_gas_nm3: self.natural_gas_nm3,
            wastewater_l: self.wastewater_l,
            transport_cost_usd: self.transport_cost_usd,
        }
    }
}

/// 单一口径的汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsSummary {
    pub scope: Scope,
    pub units: u32,
    #[serde(flatten)]
    pub metrics: MetricSet,
    #[serde(rename = "Quality_Score")]
    pub quality_score: Option<f64>,
}

impl TotalsSummary {
    /// 全零汇总（空阶段集合时使用）
    pub fn empty(scope: Scope, units: u32) -> Self {
        Self {
            scope,
            units,
            metrics: MetricSet::default(),
            quality_score: None,
        }
    }
}

/// 两种口径的汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeTotals {
    pub per_unit: TotalsSummary,
    pub total: TotalsSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_total_multiplies_metrics_not_units() {
        let metrics = MetricSet::from_fn(|_| 1.5);
        let row = StageRow::per_unit_row("Extrusion", &metrics, Some(0.9));
        let total = row.to_total(4);
        assert_eq!(total.units, 4);
        assert_eq!(total.scope, Scope::Total);
        assert!(!total.per_unit);
        assert_eq!(total.electricity_kwh, 6.0);
        assert_eq!(total.quality_score, Some(0.9));
    }

    #[test]
    fn test_totals_summary_wire_names() {
        let json = serde_json::to_value(TotalsSummary::empty(Scope::Total, 7)).unwrap();
        assert_eq!(json["scope"], "total");
        assert_eq!(json["units"], 7);
        assert!(json["Quality_Score"].is_null());
        assert_eq!(json["naturalGas_nm3"], 0.0);
    }
}

// ==========================================
// 基线表 CSV 构建器 - 用于集成测试
// ==========================================

use std::io::Write;
use tempfile::{Builder, NamedTempFile};

pub const HEADER: &str = "product,route_type,energy_source,bauxite_grade,manufacturing_cost_per_unit,electricity_kwh,carbon_kgco2e,naturalGas_nm3,wastewater_l,transport_cost_usd,quality_score";

// ==========================================
// 单行构建器
// ==========================================

#[derive(Debug, Clone)]
pub struct BaselineRowBuilder {
    product: String,
    route_type: String,
    energy_source: String,
    bauxite_grade: String,
    manufacturing_cost_per_unit: String,
    electricity_kwh: String,
    carbon_kgco2e: String,
    natural_gas_nm3: String,
    wastewater_l: String,
    transport_cost_usd: String,
    quality_score: String,
}

impl BaselineRowBuilder {
    pub fn new(product: &str, route_type: &str, energy_source: &str, bauxite_grade: &str) -> Self {
        Self {
            product: product.to_string(),
            route_type: route_type.to_string(),
            energy_source: energy_source.to_string(),
            bauxite_grade: bauxite_grade.to_string(),
            manufacturing_cost_per_unit: "0.6".to_string(),
            electricity_kwh: "12".to_string(),
            carbon_kgco2e: "8".to_string(),
            natural_gas_nm3: "0.05".to_string(),
            wastewater_l: "1.5".to_string(),
            transport_cost_usd: "0.1".to_string(),
            quality_score: String::new(),
        }
    }

    pub fn cost(mut self, v: f64) -> Self {
        self.manufacturing_cost_per_unit = v.to_string();
        self
    }

    pub fn electricity(mut self, v: f64) -> Self {
        self.electricity_kwh = v.to_string();
        self
    }

    pub fn carbon(mut self, v: f64) -> Self {
        self.carbon_kgco2e = v.to_string();
        self
    }

    pub fn transport(mut self, v: f64) -> Self {
        self.transport_cost_usd = v.to_string();
        self
    }

    pub fn quality(mut self, v: f64) -> Self {
        self.quality_score = v.to_string();
        self
    }

    /// 原样写入某个指标单元格（用于空值/非法值场景）
    pub fn raw_carbon(mut self, raw: &str) -> Self {
        self.carbon_kgco2e = raw.to_string();
        self
    }

    pub fn to_csv_line(&self) -> String {
        [
            &self.product,
            &self.route_type,
            &self.energy_source,
            &self.bauxite_grade,
            &self.manufacturing_cost_per_unit,
            &self.electricity_kwh,
            &self.carbon_kgco2e,
            &self.natural_gas_nm3,
            &self.wastewater_l,
            &self.transport_cost_usd,
            &self.quality_score,
        ]
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(",")
    }
}

// ==========================================
// 整表构建器
// ==========================================

#[derive(Debug, Clone)]
pub struct BaselineCsvBuilder {
    header: String,
    rows: Vec<BaselineRowBuilder>,
}

impl Default for BaselineCsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BaselineCsvBuilder {
    pub fn new() -> Self {
        Self {
            header: HEADER.to_string(),
            rows: Vec::new(),
        }
    }

    /// 替换表头（用于缺列/别名场景）
    pub fn header(mut self, header: &str) -> Self {
        self.header = header.to_string();
        self
    }

    pub fn row(mut self, row: BaselineRowBuilder) -> Self {
        self.rows.push(row);
        self
    }

    /// 写入临时 CSV 文件（文件随返回值销毁）
    pub fn write(&self) -> NamedTempFile {
        let mut file = Builder::new()
            .prefix("baseline_")
            .suffix(".csv")
            .tempfile()
            .expect("无法创建临时文件");
        writeln!(file, "{}", self.header).expect("写入表头失败");
        for row in &self.rows {
            writeln!(file, "{}", row.to_csv_line()).expect("写入数据行失败");
        }
        file.flush().expect("刷新文件失败");
        file
    }
}

/// 覆盖管材/板材常见上下文的标准基线表
pub fn standard_table() -> BaselineCsvBuilder {
    BaselineCsvBuilder::new()
        .row(
            BaselineRowBuilder::new("pipe", "conventional", "renewable", "high")
                .carbon(10.0)
                .quality(0.9),
        )
        .row(
            BaselineRowBuilder::new("pipe", "conventional", "renewable", "high")
                .carbon(20.0)
                .quality(0.8),
        )
        .row(BaselineRowBuilder::new("pipe", "recycle", "renewable", "na").carbon(4.0))
        .row(BaselineRowBuilder::new("sheet", "conventional", "non_renewable", "medium").carbon(9.0))
        .row(BaselineRowBuilder::new("sheet", "recycle", "non_renewable", "").carbon(3.0))
}

// ==========================================
// 铝制品 LCA 看板 - 阶段分摊配置表
// ==========================================
// 职责: 阶段清单、逐指标分摊权重、工况修正系数、报废抵扣、默认质量分、材料密度
// 说明: 分摊规则是领域输入而非引擎逻辑，集中在此以便审计与单独测试
// 加载: 内置默认值，可由 JSON 文件整体覆盖
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::baseline::Metric;
use crate::domain::types::{BauxiteGrade, EnergySource, EolOption, Product, RouteType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 铝材密度 (kg/m³)
pub const ALUMINIUM_DENSITY_KG_M3: f64 = 2700.0;

// ==========================================
// MetricSplits - 逐指标分摊权重
// ==========================================

/// 每个指标一组权重，长度与阶段数一致（使用前归一化）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSplits {
    pub manufacturing_cost_per_unit: Vec<f64>,
    pub electricity_kwh: Vec<f64>,
    pub carbon_kgco2e: Vec<f64>,
    #[serde(rename = "naturalGas_nm3")]
    pub natural_gas_nm3: Vec<f64>,
    pub wastewater_l: Vec<f64>,
    pub transport_cost_usd: Vec<f64>,
}

impl MetricSplits {
    pub fn get(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::ManufacturingCost => &self.manufacturing_cost_per_unit,
            Metric::Electricity => &self.electricity_kwh,
            Metric::Carbon => &self.carbon_kgco2e,
            Metric::NaturalGas => &self.natural_gas_nm3,
            Metric::Wastewater => &self.wastewater_l,
            Metric::TransportCost => &self.transport_cost_usd,
        }
    }

    /// 归一化后的权重；总和为 0 时全部记 0
    pub fn normalized(&self, metric: Metric) -> Vec<f64> {
        let weights = self.get(metric);
        let sum: f64 = weights.iter().sum();
        weights
            .iter()
            .map(|w| if sum != 0.0 { w / sum } else { 0.0 })
            .collect()
    }
}

/// 单个产品形态的阶段定义
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductAllocation {
    /// 阶段名（输出顺序即此顺序）
    pub stages: Vec<String>,
    pub splits: MetricSplits,
}

// ==========================================
// 修正系数表
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeTable {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
    pub na: f64,
}

impl GradeTable {
    pub fn get(&self, grade: BauxiteGrade) -> f64 {
        match grade {
            BauxiteGrade::High => self.high,
            BauxiteGrade::Medium => self.medium,
            BauxiteGrade::Low => self.low,
            BauxiteGrade::Na => self.na,
        }
    }

    fn values(&self) -> [f64; 4] {
        [self.high, self.medium, self.low, self.na]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteTable {
    pub conventional: f64,
    pub recycle: f64,
}

impl RouteTable {
    pub fn get(&self, route_type: RouteType) -> f64 {
        match route_type {
            RouteType::Conventional => self.conventional,
            RouteType::Recycle => self.recycle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyTable {
    pub renewable: f64,
    pub non_renewable: f64,
}

impl EnergyTable {
    pub fn get(&self, energy_source: EnergySource) -> f64 {
        match energy_source {
            EnergySource::Renewable => self.renewable,
            EnergySource::NonRenewable => self.non_renewable,
        }
    }
}

/// 报废处置抵扣比例（负值为抵扣）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EolTable {
    pub recycle: f64,
    pub reuse: f64,
    pub landfill: f64,
}

impl EolTable {
    pub fn get(&self, eol_option: EolOption) -> f64 {
        match eol_option {
            EolOption::Recycle => self.recycle,
            EolOption::Reuse => self.reuse,
            EolOption::Landfill => self.landfill,
        }
    }
}

// ==========================================
// AllocationProfile - 分摊配置总表
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationProfile {
    /// 材料密度 (kg/m³)
    pub density_kg_per_m3: f64,
    pub pipe: ProductAllocation,
    pub sheet: ProductAllocation,
    /// 品位修正系数
    pub grade_factors: GradeTable,
    /// 工艺路线修正系数
    pub route_factors: RouteTable,
    /// 能源修正系数
    pub energy_factors: EnergyTable,
    /// 报废抵扣比例（作用于碳排）
    pub eol_credits: EolTable,
    /// 报废抵扣传导到制造成本的比例
    pub eol_cost_share: f64,
    /// 基线无质量分时按品位取的默认质量分；None 表示不输出质量分
    #[serde(default)]
    pub default_quality: Option<GradeTable>,
}

impl Default for AllocationProfile {
    fn default() -> Self {
        let strings = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            density_kg_per_m3: ALUMINIUM_DENSITY_KG_M3,
            pipe: ProductAllocation {
                stages: strings(&[
                    "Casting primary aluminium",
                    "Extrusion",
                    "Quench",
                    "Hot shear",
                    "Finish saw: cut to final lengths for downstream processing",
                    "Aging/heat treat",
                ]),
                splits: MetricSplits {
                    manufacturing_cost_per_unit: vec![0.22, 0.28, 0.06, 0.06, 0.10, 0.28],
                    electricity_kwh: vec![0.18, 0.35, 0.08, 0.06, 0.08, 0.25],
                    carbon_kgco2e: vec![0.20, 0.32, 0.07, 0.06, 0.08, 0.27],
                    natural_gas_nm3: vec![0.10, 0.20, 0.05, 0.05, 0.10, 0.50],
                    wastewater_l: vec![0.15, 0.40, 0.05, 0.05, 0.15, 0.20],
                    transport_cost_usd: vec![0.35, 0.25, 0.05, 0.05, 0.10, 0.20],
                },
            },
            sheet: ProductAllocation {
                stages: strings(&[
                    "Casting primary aluminium",
                    "Hot rolling",
                    "Cold rolling",
                    "Heat treatment and tempers",
                    "Finishing and surface treatment",
                ]),
                splits: MetricSplits {
                    manufacturing_cost_per_unit: vec![0.22, 0.30, 0.18, 0.15, 0.15],
                    electricity_kwh: vec![0.25, 0.35, 0.20, 0.10, 0.10],
                    carbon_kgco2e: vec![0.23, 0.37, 0.18, 0.12, 0.10],
                    natural_gas_nm3: vec![0.10, 0.30, 0.20, 0.25, 0.15],
                    wastewater_l: vec![0.20, 0.30, 0.20, 0.15, 0.15],
                    transport_cost_usd: vec![0.40, 0.25, 0.15, 0.10, 0.10],
                },
            },
            grade_factors: GradeTable {
                high: 0.95,
                medium: 1.00,
                low: 1.10,
                na: 1.00,
            },
            route_factors: RouteTable {
                conventional: 1.00,
                recycle: 0.65,
            },
            energy_factors: EnergyTable {
                renewable: 0.85,
                non_renewable: 1.00,
            },
            eol_credits: EolTable {
                recycle: -0.15,
                reuse: -0.10,
                landfill: 0.0,
            },
            eol_cost_share: 0.5,
            default_quality: Some(GradeTable {
                high: 0.92,
                medium: 0.85,
                low: 0.78,
                na: 0.80,
            }),
        }
    }
}

impl AllocationProfile {
    /// 从 JSON 文件加载并校验
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let profile: AllocationProfile =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn product(&self, product: Product) -> &ProductAllocation {
        match product {
            Product::Pipe => &self.pipe,
            Product::Sheet => &self.sheet,
        }
    }

    /// 工况修正系数 = 品位 × 路线 × 能源
    ///
    /// 品位须为有效品位（非 conventional 路线已折算为 na）。
    pub fn adjust_factor(
        &self,
        route_type: RouteType,
        grade: BauxiteGrade,
        energy_source: EnergySource,
    ) -> f64 {
        self.grade_factors.get(grade)
            * self.route_factors.get(route_type)
            * self.energy_factors.get(energy_source)
    }

    /// 校验配置自洽
    ///
    /// - 密度必须为正
    /// - 每个指标的权重数 = 阶段数，且权重非负
    /// - 修正系数非负
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.density_kg_per_m3.is_finite() && self.density_kg_per_m3 > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "density_kg_per_m3".to_string(),
                message: format!("密度必须为正数: {}", self.density_kg_per_m3),
            });
        }

        for product in [Product::Pipe, Product::Sheet] {
            let allocation = self.product(product);
            let stage_count = allocation.stages.len();
            for metric in Metric::ALL {
                let weights = allocation.splits.get(metric);
                if weights.len() != stage_count {
                    return Err(ConfigError::InvalidValue {
                        key: format!("{}.splits.{}", product, metric),
                        message: format!(
                            "权重数 {} 与阶段数 {} 不一致",
                            weights.len(),
                            stage_count
                        ),
                    });
                }
                if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                    return Err(ConfigError::InvalidValue {
                        key: format!("{}.splits.{}", product, metric),
                        message: "权重必须为非负有限数".to_string(),
                    });
                }
            }
        }

        let factors = self
            .grade_factors
            .values()
            .into_iter()
            .chain([
                self.route_factors.conventional,
                self.route_factors.recycle,
                self.energy_factors.renewable,
                self.energy_factors.non_renewable,
            ]);
        for factor in factors {
            if !factor.is_finite() || factor < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: "factors".to_string(),
                    message: format!("修正系数必须为非负有限数: {}", factor),
                });
            }
        }

        Ok(())
    }
}

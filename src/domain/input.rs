// ==========================================
// 铝制品 LCA 看板 - 看板输入上下文
// ==========================================
// 职责: 校验后的请求上下文（每次请求构造一次，只读）
// 红线: route_type != conventional 时 bauxite_grade 必须为 na
// ==========================================

use crate::domain::baseline::BaselineQuery;
use crate::domain::types::{BauxiteGrade, EnergySource, EolOption, Product, RouteType};
use serde::{Deserialize, Serialize};

/// 产品几何尺寸（米）
///
/// 尺寸按产品形态取用：
/// - pipe: outer_radius_m / inner_radius_m / length_m
/// - sheet: thickness_m / width_m / sheet_length_m
///
/// 缺失或非法尺寸在质量推导阶段才报错（InvalidGeometry），这里只做承载。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub outer_radius_m: Option<f64>,
    pub inner_radius_m: Option<f64>,
    pub length_m: Option<f64>,
    pub thickness_m: Option<f64>,
    pub width_m: Option<f64>,
    pub sheet_length_m: Option<f64>,
}

impl Dimensions {
    pub fn pipe(outer_radius_m: f64, inner_radius_m: f64, length_m: f64) -> Self {
        Self {
            outer_radius_m: Some(outer_radius_m),
            inner_radius_m: Some(inner_radius_m),
            length_m: Some(length_m),
            ..Default::default()
        }
    }

    pub fn sheet(thickness_m: f64, width_m: f64, sheet_length_m: f64) -> Self {
        Self {
            thickness_m: Some(thickness_m),
            width_m: Some(width_m),
            sheet_length_m: Some(sheet_length_m),
            ..Default::default()
        }
    }
}

/// 看板输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardInput {
    pub product: Product,
    /// 批量件数（>= 1）
    pub units: u32,
    pub route_type: RouteType,
    /// 有效品位（已按工艺路线折算）
    pub bauxite_grade: BauxiteGrade,
    pub energy_source: EnergySource,
    pub eol_option: EolOption,
    pub dimensions: Dimensions,
}

impl DashboardInput {
    /// 构造看板输入
    ///
    /// 品位按工艺路线强制折算：非 conventional 路线一律记为 na。
    pub fn new(
        product: Product,
        units: u32,
        route_type: RouteType,
        bauxite_grade: BauxiteGrade,
        energy_source: EnergySource,
        eol_option: EolOption,
        dimensions: Dimensions,
    ) -> Self {
        Self {
            product,
            units,
            route_type,
            bauxite_grade: bauxite_grade.effective_for(route_type),
            energy_source,
            eol_option,
            dimensions,
        }
    }

    /// 有效品位（即便字段被直接改写，也保证红线成立）
    pub fn effective_grade(&self) -> BauxiteGrade {
        self.bauxite_grade.effective_for(self.route_type)
    }

    /// 基线查询上下文
    pub fn baseline_query(&self) -> BaselineQuery {
        BaselineQuery {
            product: self.product,
            route_type: self.route_type,
            energy_source: self.energy_source,
            bauxite_grade: self.effective_grade(),
        }
    }
}

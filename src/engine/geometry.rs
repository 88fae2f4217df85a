// ==========================================
// 铝制品 LCA 看板 - 几何质量推导
// ==========================================
// 管材: V = π × (R² − r²) × L
// 板材: V = t × w × L
// 质量 = V × 密度
// ==========================================

use crate::domain::input::Dimensions;
use crate::domain::types::Product;
use crate::engine::error::{EngineError, EngineResult};
use std::f64::consts::PI;

/// 管材单件质量 (kg)
pub fn pipe_mass_kg(outer_radius_m: f64, inner_radius_m: f64, length_m: f64, density: f64) -> f64 {
    PI * (outer_radius_m.powi(2) - inner_radius_m.powi(2)) * length_m * density
}

/// 板材单件质量 (kg)
pub fn sheet_mass_kg(thickness_m: f64, width_m: f64, length_m: f64, density: f64) -> f64 {
    thickness_m * width_m * length_m * density
}

fn require_positive(name: &str, value: Option<f64>) -> EngineResult<f64> {
    match value {
        None => Err(EngineError::InvalidGeometry(format!("缺少尺寸 {}", name))),
        Some(v) if !v.is_finite() || v <= 0.0 => Err(EngineError::InvalidGeometry(format!(
            "尺寸 {} 必须为正数: {}",
            name, v
        ))),
        Some(v) => Ok(v),
    }
}

/// 推导结果必须为有限正数（极端尺寸可能上溢为 inf/NaN 或下溢为 0）
fn finite_positive_mass(product: Product, mass: f64) -> EngineResult<f64> {
    if mass.is_finite() && mass > 0.0 {
        Ok(mass)
    } else {
        Err(EngineError::InvalidGeometry(format!(
            "{} 尺寸推导的质量无效: {}",
            product, mass
        )))
    }
}

/// 由产品形态与尺寸推导单件质量
///
/// # 规则
/// - pipe: outer_radius_m > 0, length_m > 0, inner_radius_m 缺省为 0（实心棒）且 0 <= inner < outer
/// - sheet: thickness_m / width_m / sheet_length_m 均 > 0
///
/// # 返回
/// - Err(InvalidGeometry): 尺寸缺失/非正/不一致，或质量非有限正数
pub fn derive_mass_kg(product: Product, dims: &Dimensions, density: f64) -> EngineResult<f64> {
    match product {
        Product::Pipe => {
            let outer = require_positive("outer_radius_m", dims.outer_radius_m)?;
            let length = require_positive("length_m", dims.length_m)?;
            let inner = dims.inner_radius_m.unwrap_or(0.0);
            if !inner.is_finite() || inner < 0.0 {
                return Err(EngineError::InvalidGeometry(format!(
                    "尺寸 inner_radius_m 不能为负: {}",
                    inner
                )));
            }
            if outer <= inner {
                return Err(EngineError::InvalidGeometry(format!(
                    "外径必须大于内径: outer_radius_m={}, inner_radius_m={}",
                    outer, inner
                )));
            }
            finite_positive_mass(product, pipe_mass_kg(outer, inner, length, density))
        }
        Product::Sheet => {
            let thickness = require_positive("thickness_m", dims.thickness_m)?;
            let width = require_positive("width_m", dims.width_m)?;
            let length = require_positive("sheet_length_m", dims.sheet_length_m)?;
            finite_positive_mass(product, sheet_mass_kg(thickness, width, length, density))
        }
    }
}

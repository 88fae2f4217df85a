// ==========================================
// 铝制品 LCA 看板 - 引擎层错误类型
// ==========================================

use crate::domain::baseline::{BaselineQuery, FallbackLevel};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// 回退链耗尽，最宽松层级也无匹配行
    #[error("无可用基线数据: product={product}, route_type={route_type}, energy_source={energy_source}, bauxite_grade={bauxite_grade}")]
    NoBaselineFound {
        product: String,
        route_type: String,
        energy_source: String,
        bauxite_grade: String,
    },

    /// 几何尺寸缺失/非正/不一致
    #[error("几何尺寸非法: {0}")]
    InvalidGeometry(String),

    /// 命中行中某必需指标全部缺失（源数据不满足表契约）
    #[error("基线指标无有效值: column={column}, fallback_level={level}, matched_rows={matched_rows}")]
    MissingMetricValues {
        column: String,
        level: FallbackLevel,
        matched_rows: usize,
    },
}

impl EngineError {
    pub fn no_baseline(query: &BaselineQuery) -> Self {
        EngineError::NoBaselineFound {
            product: query.product.to_string(),
            route_type: query.route_type.to_string(),
            energy_source: query.energy_source.to_string(),
            bauxite_grade: query.bauxite_grade.to_string(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

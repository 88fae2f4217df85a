// ==========================================
// 铝制品 LCA 看板 - API层错误类型
// ==========================================
// 职责: 统一对外错误分类，把导入层/引擎层错误转换为稳定的错误码
// 分类: ValidationError / DataUnavailable / NoBaselineFound / InvalidGeometry
// 红线: 请求要么完整成功，要么以单一类型化错误失败，不重试
// ==========================================

use crate::engine::error::EngineError;
use crate::i18n::t_with_args;
use crate::importer::error::ImportError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 请求字段缺失/取值非法
    #[error("请求校验失败: {0}")]
    ValidationError(String),

    /// 基线源不可读或不满足表契约
    #[error("基线数据不可用: {0}")]
    DataUnavailable(String),

    /// 回退链耗尽
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

    /// 运行时内部错误（如后台任务中断）
    #[error("内部错误: {0}")]
    InternalError(String),
}

impl ApiError {
    /// 稳定错误码（前端按此分支）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::DataUnavailable(_) => "DATA_UNAVAILABLE",
            ApiError::NoBaselineFound { .. } => "NO_BASELINE_FOUND",
            ApiError::InvalidGeometry(_) => "INVALID_GEOMETRY",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// 按当前语言渲染的错误消息
    pub fn localized_message(&self) -> String {
        match self {
            ApiError::ValidationError(msg) => {
                t_with_args("error.validation", &[("message", msg.as_str())])
            }
            ApiError::DataUnavailable(msg) => {
                t_with_args("error.data_unavailable", &[("message", msg.as_str())])
            }
            ApiError::NoBaselineFound {
                product,
                route_type,
                energy_source,
                bauxite_grade,
            } => t_with_args(
                "error.no_baseline_found",
                &[
                    ("product", product.as_str()),
                    ("route_type", route_type.as_str()),
                    ("energy_source", energy_source.as_str()),
                    ("bauxite_grade", bauxite_grade.as_str()),
                ],
            ),
            ApiError::InvalidGeometry(msg) => {
                t_with_args("error.invalid_geometry", &[("message", msg.as_str())])
            }
            ApiError::InternalError(msg) => t_with_args("error.internal", &[("message", msg.as_str())]),
        }
    }

    /// 结构化详情（仅部分错误携带）
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::NoBaselineFound {
                product,
                route_type,
                energy_source,
                bauxite_grade,
            } => Some(serde_json::json!({
                "product": product,
                "route_type": route_type,
                "energy_source": energy_source,
                "bauxite_grade": bauxite_grade,
            })),
            _ => None,
        }
    }
}

// ==========================================
// 从 ImportError 转换
// ==========================================
// 源文件缺失、格式不支持、缺列、单元格非数值 → 一律 DataUnavailable
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::DataUnavailable(err.to_string())
    }
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NoBaselineFound {
                product,
                route_type,
                energy_source,
                bauxite_grade,
            } => ApiError::NoBaselineFound {
                product,
                route_type,
                energy_source,
                bauxite_grade,
            },
            EngineError::InvalidGeometry(msg) => ApiError::InvalidGeometry(msg),
            // 命中行无有效指标值属于源数据问题
            err @ EngineError::MissingMetricValues { .. } => {
                ApiError::DataUnavailable(err.to_string())
            }
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// ErrorResponse - 错误响应体
// ==========================================

/// 错误响应结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误码
    pub code: String,
    /// 错误消息（已本地化）
    pub message: String,
    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        ErrorResponse {
            code: err.code().to_string(),
            message: err.localized_message(),
            details: err.details(),
        }
    }
}

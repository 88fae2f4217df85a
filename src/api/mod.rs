// ==========================================
// 铝制品 LCA 看板 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 HTTP 路由与命令行调用
// ==========================================

pub mod dashboard_api;
pub mod dto;
pub mod error;
pub mod validator;

// 重导出核心类型
pub use dashboard_api::DashboardApi;
pub use dto::{DashboardRequest, DashboardResponse, HealthResponse};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use validator::validate_request;

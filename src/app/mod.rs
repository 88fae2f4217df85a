// ==========================================
// 铝制品 LCA 看板 - 应用层
// ==========================================
// 职责: 数据源选择、共享状态、HTTP 集成
// ==========================================

pub mod state;

#[cfg(feature = "http-app")]
pub mod http_routes;

// 重导出
pub use state::{select_data_source, AppState};

#[cfg(feature = "http-app")]
pub use http_routes::{build_router, start_server, status_for};

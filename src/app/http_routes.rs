// ==========================================
// 铝制品 LCA 看板 - HTTP 路由
// ==========================================
// 端点:
// - GET  /health            → {"status": "ok", "data_csv": "<path>"}
// - POST /dashboard/stages  → 阶段明细 + 两种口径汇总 + 所用基线
// 错误: {code, message, details}，状态码按错误分类映射
// 说明: 基线加载与计算为阻塞操作，放到 spawn_blocking 中执行
// ==========================================

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, info_span, warn};
use uuid::Uuid;

use crate::api::{ApiError, DashboardRequest, DashboardResponse, ErrorResponse, HealthResponse};
use crate::app::state::AppState;

// ==========================================
// 错误 → HTTP 响应
// ==========================================

/// 错误分类对应的 HTTP 状态码
pub fn status_for(err: &ApiError) -> StatusCode {
    match err {
        ApiError::ValidationError(_) | ApiError::InvalidGeometry(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ApiError::NoBaselineFound { .. } => StatusCode::NOT_FOUND,
        ApiError::DataUnavailable(_) | ApiError::InternalError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            error!(code = self.code(), error = %self, "请求处理失败");
        } else {
            warn!(code = self.code(), error = %self, "请求被拒绝");
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

// ==========================================
// 路由
// ==========================================

/// 构建看板路由（CORS 全放开，供本地前端直接调用）
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/dashboard/stages", post(dashboard_stages))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// 启动 HTTP 服务（阻塞直到服务退出）
pub async fn start_server(state: Arc<AppState>, bind_addr: &str) -> std::io::Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    info!("看板服务监听于 {}", listener.local_addr()?);

    axum::serve(listener, app).await
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(state.dashboard_api.health(state.data_csv()))
}

async fn dashboard_stages(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DashboardRequest>, JsonRejection>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let Json(req) = payload.map_err(|rejection| ApiError::ValidationError(rejection.body_text()))?;

    let span = info_span!("dashboard_stages", %request_id);
    let api = Arc::clone(&state.dashboard_api);
    let data_csv = state.data_csv.clone();

    let result = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        api.get_stages(&req, &data_csv)
    })
    .await
    .map_err(|e| ApiError::InternalError(format!("后台计算任务中断: {}", e)))?;

    result.map(Json)
}

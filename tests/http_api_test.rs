// ==========================================
// HTTP 路由集成测试
// ==========================================
// 通过 tower::ServiceExt::oneshot 直接驱动 axum 路由，不监听端口
// ==========================================

#![cfg(feature = "http-app")]

mod helpers;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use helpers::baseline_csv_builder::standard_table;
use lca_dashboard::api::DashboardApi;
use lca_dashboard::app::{build_router, AppState};
use lca_dashboard::config::ServiceConfig;
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

fn app_with_source(path: &std::path::Path) -> axum::Router {
    let state = AppState::with_data_source(
        ServiceConfig::default(),
        path,
        Arc::new(DashboardApi::default()),
    );
    build_router(Arc::new(state))
}

async fn post_json(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/dashboard/stages")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_返回数据源() {
    let file = standard_table().write();
    let app = app_with_source(file.path());

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["data_csv"], file.path().display().to_string());
}

#[tokio::test]
async fn test_dashboard_stages_成功响应结构() {
    let file = standard_table().write();
    let app = app_with_source(file.path());

    let (status, body) = post_json(
        app,
        json!({
            "product": "pipe",
            "units": 3,
            "route_type": "conventional",
            "bauxite_grade": "high",
            "energy_source": "renewable",
            "outer_radius_m": 0.05,
            "inner_radius_m": 0.04,
            "length_m": 2.0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let stages = body["stages"].as_array().unwrap();
    assert_eq!(stages.len(), 12);
    assert_eq!(stages[0]["scope"], "per_unit");
    assert_eq!(stages[0]["per_unit"], true);
    assert!(stages[0].get("naturalGas_nm3").is_some());
    assert!(stages[0].get("manufacturing_cost_per_unit_usd").is_some());
    assert_eq!(stages[6]["scope"], "total");
    assert_eq!(stages[6]["units"], 3);

    assert_eq!(body["totals"]["per_unit"]["scope"], "per_unit");
    assert_eq!(body["totals"]["total"]["units"], 3);
    assert!(body["totals"]["total"].get("Quality_Score").is_some());
    assert!(body["totals"]["total"].get("manufacturing_cost_per_unit").is_some());

    assert_eq!(body["baselines_used"]["fallback_level"], "exact");
    assert_eq!(body["baselines_used"]["carbon_kgco2e"], 15.0);
    assert_eq!(body["data_csv"], file.path().display().to_string());
}

#[tokio::test]
async fn test_dashboard_stages_缺字段返回422() {
    let file = standard_table().write();
    let app = app_with_source(file.path());

    let (status, body) = post_json(app, json!({"product": "pipe", "units": 1})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_dashboard_stages_批量为零返回422() {
    let file = standard_table().write();
    let app = app_with_source(file.path());

    let (status, body) = post_json(
        app,
        json!({
            "product": "sheet",
            "units": 0,
            "route_type": "recycle",
            "energy_source": "renewable",
            "thickness_m": 0.002,
            "width_m": 1.0,
            "sheet_length_m": 2.0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_dashboard_stages_几何非法返回422() {
    let file = standard_table().write();
    let app = app_with_source(file.path());

    let (status, body) = post_json(
        app,
        json!({
            "product": "sheet",
            "units": 1,
            "route_type": "recycle",
            "energy_source": "renewable",
            "thickness_m": 0.002,
            "sheet_length_m": 2.0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_GEOMETRY");
}

#[tokio::test]
async fn test_dashboard_stages_无基线返回404() {
    let file = helpers::baseline_csv_builder::BaselineCsvBuilder::new()
        .row(helpers::baseline_csv_builder::BaselineRowBuilder::new(
            "sheet",
            "conventional",
            "renewable",
            "high",
        ))
        .write();
    let app = app_with_source(file.path());

    let (status, body) = post_json(
        app,
        json!({
            "product": "pipe",
            "units": 1,
            "route_type": "recycle",
            "energy_source": "renewable",
            "outer_radius_m": 0.05,
            "length_m": 1.0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NO_BASELINE_FOUND");
    assert_eq!(body["details"]["product"], "pipe");
}

#[tokio::test]
async fn test_dashboard_stages_数据源缺失返回500() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_source(&dir.path().join("missing.csv"));

    let (status, body) = post_json(
        app,
        json!({
            "product": "pipe",
            "units": 1,
            "route_type": "conventional",
            "energy_source": "renewable",
            "outer_radius_m": 0.05,
            "inner_radius_m": 0.01,
            "length_m": 1.0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "DATA_UNAVAILABLE");
}

#[tokio::test]
async fn test_cors_预检请求() {
    let file = standard_table().write();
    let app = app_with_source(file.path());

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/dashboard/stages")
        .header(header::ORIGIN, "http://127.0.0.1:5500")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

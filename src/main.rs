// ==========================================
// 铝制品 LCA 看板 - HTTP 服务主入口
// ==========================================
// 配置: 见 ServiceConfig（配置文件 + LCA_DASHBOARD_* 环境变量）
// 日志: RUST_LOG（默认 info）
// ==========================================

use std::sync::Arc;

use anyhow::Context;
use lca_dashboard::app::{start_server, AppState};
use lca_dashboard::config::ServiceConfig;
use lca_dashboard::{i18n, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", lca_dashboard::APP_NAME);
    tracing::info!("系统版本: {}", lca_dashboard::VERSION);
    tracing::info!("==================================================");

    // 加载服务配置
    let config = ServiceConfig::load().context("加载服务配置失败")?;
    i18n::set_locale(&config.locale);
    tracing::info!("界面语言: {}", i18n::current_locale());

    // 创建AppState
    let state = AppState::new(config).context("初始化应用状态失败")?;
    tracing::info!("使用基线数据: {}", state.data_csv.display());
    let bind_addr = state.config.bind_addr.clone();

    start_server(Arc::new(state), &bind_addr)
        .await
        .with_context(|| format!("HTTP 服务异常退出 (bind={})", bind_addr))?;

    Ok(())
}

// ==========================================
// 铝制品 LCA 看板 - 核心库
// ==========================================
// 技术栈: Rust + axum + CSV/Excel 基线表
// 系统定位: 按生命周期阶段估算单件/整批的能耗、碳排与成本
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 基线表加载
pub mod importer;

// 引擎层 - 基线解析 / 阶段分解 / 汇总
pub mod engine;

// 配置层 - 服务配置与分摊配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 数据源选择与 HTTP 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{BauxiteGrade, EnergySource, EolOption, Product, RouteType, Scope};

// 领域实体
pub use domain::{
    BaselineRecord, BaselineTable, DashboardInput, Dimensions, ScopeTotals, StageRow,
    TotalsSummary,
};

// 引擎
pub use engine::{BaselineResolver, StageBreakdownEngine, TotalsAggregator};

// 配置
pub use config::{AllocationProfile, ServiceConfig};

// API
pub use api::{ApiError, DashboardApi, DashboardRequest, DashboardResponse};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "铝制品 LCA 看板";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

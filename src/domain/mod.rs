// ==========================================
// 铝制品 LCA 看板 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod baseline;
pub mod input;
pub mod stage;
pub mod types;

// 重导出核心类型
pub use baseline::{
    BaselineKey, BaselineQuery, BaselineRecord, BaselineRow, BaselineTable, FallbackLevel, Metric,
    MetricSet,
};
pub use input::{DashboardInput, Dimensions};
pub use stage::{ScopeTotals, StageRow, TotalsSummary};
pub use types::{BauxiteGrade, EnergySource, EolOption, Product, RouteType, Scope};

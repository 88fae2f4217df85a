// ==========================================
// 铝制品 LCA 看板 - 配置层
// ==========================================
// 职责: 服务配置 + 阶段分摊配置表
// 存储: JSON 文件（可选）+ 环境变量 + 内置默认
// ==========================================

pub mod allocation_profile;
pub mod error;
pub mod service_config;

// 重导出
pub use allocation_profile::{
    AllocationProfile, EnergyTable, EolTable, GradeTable, MetricSplits, ProductAllocation,
    RouteTable, ALUMINIUM_DENSITY_KG_M3,
};
pub use error::{ConfigError, ConfigResult};
pub use service_config::{default_config_path, env_keys, ServiceConfig};

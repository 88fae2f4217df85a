// ==========================================
// 铝制品 LCA 看板 - 引擎层
// ==========================================
// 职责: 基线解析、几何质量、阶段分解、口径汇总
// 红线: 引擎不做文件 IO，只消费已加载的基线表与分摊配置
// ==========================================

pub mod baseline_resolver;
pub mod error;
pub mod geometry;
pub mod stage_breakdown;
pub mod totals;

// 重导出核心引擎
pub use baseline_resolver::{median, BaselineResolver, KeyMatcher, MatchKey, FALLBACK_CHAIN};
pub use error::{EngineError, EngineResult};
pub use geometry::{derive_mass_kg, pipe_mass_kg, sheet_mass_kg};
pub use stage_breakdown::StageBreakdownEngine;
pub use totals::TotalsAggregator;

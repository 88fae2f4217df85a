// ==========================================
// 铝制品 LCA 看板 - 看板 API
// ==========================================
// 职责: 编排单次看板请求的完整流水线
// 流程: 请求校验 → 基线表加载 → 基线解析 → 阶段分解 → 口径汇总 → 响应组装
// 红线: 每次请求重新加载基线表，不跨请求缓存；不含 HTTP 类型
// ==========================================

use crate::api::dto::{DashboardRequest, DashboardResponse, HealthResponse};
use crate::api::error::ApiResult;
use crate::api::validator::validate_request;
use crate::config::allocation_profile::AllocationProfile;
use crate::engine::baseline_resolver::BaselineResolver;
use crate::engine::stage_breakdown::StageBreakdownEngine;
use crate::engine::totals::TotalsAggregator;
use crate::importer::baseline_store::BaselineStore;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

// ==========================================
// DashboardApi - 看板 API
// ==========================================

/// 看板API
///
/// 组件均无可变状态，可在多个请求间共享（`Arc<DashboardApi>`）。
pub struct DashboardApi {
    store: BaselineStore,
    resolver: BaselineResolver,
    engine: StageBreakdownEngine,
    aggregator: TotalsAggregator,
}

impl Default for DashboardApi {
    fn default() -> Self {
        Self::new(Arc::new(AllocationProfile::default()))
    }
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    ///
    /// # 参数
    /// - profile: 阶段分摊配置表
    pub fn new(profile: Arc<AllocationProfile>) -> Self {
        Self {
            store: BaselineStore::new(),
            resolver: BaselineResolver::new(),
            engine: StageBreakdownEngine::new(profile),
            aggregator: TotalsAggregator::new(),
        }
    }

    /// 健康检查
    pub fn health(&self, data_csv: &Path) -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            data_csv: data_csv.display().to_string(),
        }
    }

    /// 计算阶段明细与汇总
    ///
    /// # 参数
    /// - req: 看板请求
    /// - data_csv: 已选定的基线源文件
    ///
    /// # 返回
    /// - Ok(DashboardResponse): stages（per_unit 在前）、两种口径汇总、所用基线
    /// - Err(ValidationError / DataUnavailable / NoBaselineFound / InvalidGeometry)
    #[instrument(skip(self, req), fields(product = %req.product, units = req.units))]
    pub fn get_stages(
        &self,
        req: &DashboardRequest,
        data_csv: &Path,
    ) -> ApiResult<DashboardResponse> {
        // 1. 请求校验（品位按路线折算）
        let input = validate_request(req)?;

        // 2. 加载基线表
        let table = self.store.load(data_csv)?;

        // 3. 解析中位数基线
        let baseline = self.resolver.resolve(&table, &input.baseline_query())?;

        // 4. 阶段分解
        let stages = self.engine.build(&input, &baseline)?;

        // 5. 口径汇总
        let totals = self.aggregator.both(&stages, input.units);

        info!(
            fallback_level = %baseline.fallback_level,
            matched_rows = baseline.matched_rows,
            stages = stages.len(),
            "看板计算完成"
        );

        Ok(DashboardResponse {
            stages,
            totals,
            baselines_used: baseline,
            data_csv: data_csv.display().to_string(),
        })
    }
}

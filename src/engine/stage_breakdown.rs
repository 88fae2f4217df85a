// ==========================================
// 铝制品 LCA 看板 - 阶段分解引擎
// ==========================================
// 输入: 看板输入 + 中位数基线（每 kg）
// 输出: 有序阶段行，先全部 per_unit 行，再按同序全部 total 行
// 流程:
// 1. 几何 → 单件质量
// 2. 单件指标 = 基线 × 工况系数 × 质量（运输不做工况修正）
// 3. 报废抵扣: 碳排 × (1 + credit)，制造成本 × (1 + cost_share × credit)
// 4. 按分摊配置的归一化权重拆到各阶段
// 5. total 行 = per_unit 行 × units
// 红线: 全部成功或整体失败，不输出部分结果
// ==========================================

use crate::config::allocation_profile::AllocationProfile;
use crate::domain::baseline::{BaselineRecord, Metric, MetricSet};
use crate::domain::input::DashboardInput;
use crate::domain::stage::StageRow;
use crate::engine::error::EngineResult;
use crate::engine::geometry::derive_mass_kg;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

// ==========================================
// StageBreakdownEngine - 阶段分解引擎
// ==========================================
pub struct StageBreakdownEngine {
    profile: Arc<AllocationProfile>,
}

impl Default for StageBreakdownEngine {
    fn default() -> Self {
        Self::new(Arc::new(AllocationProfile::default()))
    }
}

impl StageBreakdownEngine {
    pub fn new(profile: Arc<AllocationProfile>) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &AllocationProfile {
        &self.profile
    }

    /// 单件质量 (kg)
    pub fn mass_per_unit_kg(&self, input: &DashboardInput) -> EngineResult<f64> {
        derive_mass_kg(
            input.product,
            &input.dimensions,
            self.profile.density_kg_per_m3,
        )
    }

    /// 单件整体指标（拆分到阶段之前）
    pub fn item_metrics(&self, input: &DashboardInput, baseline: &BaselineRecord, mass_kg: f64) -> MetricSet {
        let factor = self.profile.adjust_factor(
            input.route_type,
            input.effective_grade(),
            input.energy_source,
        );

        let mut item = MetricSet::from_fn(|metric| {
            let adjust = match metric {
                Metric::TransportCost => 1.0,
                _ => factor,
            };
            baseline.metrics.get(metric) * adjust * mass_kg
        });

        // 报废抵扣
        let credit = self.profile.eol_credits.get(input.eol_option);
        item.carbon_kgco2e *= 1.0 + credit;
        item.manufacturing_cost_per_unit *= 1.0 + self.profile.eol_cost_share * credit;

        item
    }

    /// 构建阶段明细
    ///
    /// # 返回
    /// - Ok(Vec<StageRow>): 阶段数 × 2 行（per_unit 在前，total 在后，阶段顺序固定）
    /// - Err(InvalidGeometry): 尺寸非法
    #[instrument(skip(self, input, baseline), fields(product = %input.product, units = input.units))]
    pub fn build(
        &self,
        input: &DashboardInput,
        baseline: &BaselineRecord,
    ) -> EngineResult<Vec<StageRow>> {
        let mass_kg = self.mass_per_unit_kg(input)?;
        let item = self.item_metrics(input, baseline, mass_kg);

        let allocation = self.profile.product(input.product);
        let weights: HashMap<Metric, Vec<f64>> = Metric::ALL
            .iter()
            .map(|m| (*m, allocation.splits.normalized(*m)))
            .collect();

        // 质量分: 基线中位数优先，其次按品位默认值
        let quality_score = baseline.quality_score.or_else(|| {
            self.profile
                .default_quality
                .map(|table| table.get(input.effective_grade()))
        });

        let per_unit_rows: Vec<StageRow> = allocation
            .stages
            .iter()
            .enumerate()
            .map(|(idx, stage)| {
                let metrics = MetricSet::from_fn(|metric| {
                    let share = weights
                        .get(&metric)
                        .and_then(|w| w.get(idx))
                        .copied()
                        .unwrap_or(0.0);
                    item.get(metric) * share
                });
                StageRow::per_unit_row(stage, &metrics, quality_score)
            })
            .collect();

        let total_rows: Vec<StageRow> = per_unit_rows
            .iter()
            .map(|row| row.to_total(input.units))
            .collect();

        debug!(
            mass_kg,
            stages = per_unit_rows.len(),
            "阶段分解完成"
        );

        let mut rows = per_unit_rows;
        rows.extend(total_rows);
        Ok(rows)
    }
}

// ==========================================
// 铝制品 LCA 看板 - 口径汇总
// ==========================================
// 规则:
// - 数值指标按口径逐列求和
// - 质量分取该口径下非空质量分的算术平均，全空则为 None
// - units 取该口径第一行的 units；无行时取请求的 units
// ==========================================

use crate::domain::baseline::MetricSet;
use crate::domain::stage::{ScopeTotals, StageRow, TotalsSummary};
use crate::domain::types::Scope;

#[derive(Debug, Default, Clone, Copy)]
pub struct TotalsAggregator;

impl TotalsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 单一口径汇总
    pub fn totals(&self, rows: &[StageRow], scope: Scope, requested_units: u32) -> TotalsSummary {
        let scoped: Vec<&StageRow> = rows.iter().filter(|r| r.scope == scope).collect();

        let Some(first) = scoped.first() else {
            return TotalsSummary::empty(scope, requested_units);
        };

        let metrics = scoped
            .iter()
            .fold(MetricSet::default(), |acc, row| acc.plus(&row.metrics()));

        let qualities: Vec<f64> = scoped.iter().filter_map(|r| r.quality_score).collect();
        let quality_score = if qualities.is_empty() {
            None
        } else {
            Some(qualities.iter().sum::<f64>() / qualities.len() as f64)
        };

        TotalsSummary {
            scope,
            units: first.units,
            metrics,
            quality_score,
        }
    }

    /// 同时给出 per_unit 与 total 两种口径
    pub fn both(&self, rows: &[StageRow], requested_units: u32) -> ScopeTotals {
        ScopeTotals {
            // 单件口径的 units 恒为 1
            per_unit: self.totals(rows, Scope::PerUnit, 1),
            total: self.totals(rows, Scope::Total, requested_units),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(units: u32) -> Vec<StageRow> {
        let a = StageRow::per_unit_row("Casting primary aluminium", &MetricSet::from_fn(|_| 1.0), Some(0.8));
        let b = StageRow::per_unit_row("Hot rolling", &MetricSet::from_fn(|_| 3.0), None);
        let c = StageRow::per_unit_row("Cold rolling", &MetricSet::from_fn(|_| 0.5), Some(0.6));
        let totals: Vec<StageRow> = [&a, &b, &c].iter().map(|r| r.to_total(units)).collect();
        let mut all = vec![a, b, c];
        all.extend(totals);
        all
    }

    #[test]
    fn test_totals_sum_per_scope() {
        let aggregator = TotalsAggregator::new();
        let rows = rows(4);

        let per_unit = aggregator.totals(&rows, Scope::PerUnit, 1);
        assert_eq!(per_unit.metrics.carbon_kgco2e, 4.5);
        assert_eq!(per_unit.units, 1);

        let total = aggregator.totals(&rows, Scope::Total, 4);
        assert_eq!(total.metrics.carbon_kgco2e, 18.0);
        assert_eq!(total.metrics.manufacturing_cost_per_unit, 18.0);
        assert_eq!(total.units, 4);
    }

    #[test]
    fn test_quality_is_mean_of_present_scores() {
        let summary = TotalsAggregator::new().totals(&rows(2), Scope::Total, 2);
        let quality = summary.quality_score.unwrap();
        assert!((quality - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_quality_none_when_all_missing() {
        let rows = vec![StageRow::per_unit_row("Extrusion", &MetricSet::from_fn(|_| 1.0), None)];
        let summary = TotalsAggregator::new().totals(&rows, Scope::PerUnit, 1);
        assert!(summary.quality_score.is_none());
    }

    #[test]
    fn test_empty_rows_yield_zero_summary() {
        let summary = TotalsAggregator::new().totals(&[], Scope::Total, 9);
        assert_eq!(summary, TotalsSummary::empty(Scope::Total, 9));
        assert_eq!(summary.metrics.electricity_kwh, 0.0);
    }

    #[test]
    fn test_both_scopes() {
        let scopes = TotalsAggregator::new().both(&rows(5), 5);
        assert_eq!(scopes.per_unit.scope, Scope::PerUnit);
        assert_eq!(scopes.total.scope, Scope::Total);
        assert_eq!(scopes.total.units, 5);
        assert_eq!(scopes.total.metrics.wastewater_l, scopes.per_unit.metrics.wastewater_l * 5.0);
    }
}

// ==========================================
// 铝制品 LCA 看板 - 基线解析引擎
// ==========================================
// 职责: 按上下文在基线表中找到最匹配的历史记录，取各指标中位数
// 回退链（顺序执行，首个有命中的层级即返回）:
// 1) 精确匹配 (product, route_type, energy_source, bauxite_grade)
// 2) 品位 != na 时放宽品位 (product, route_type, energy_source)
// 3) 放宽能源 (product, route_type)
// 4) 仅按产品 (product)
// 5) 以上均无 → NoBaselineFound
// 红线: 回退层级只用于诊断输出，不影响计算口径
// ==========================================

use crate::domain::baseline::{
    BaselineQuery, BaselineRecord, BaselineRow, BaselineTable, FallbackLevel, Metric, MetricSet,
};
use crate::domain::types::BauxiteGrade;
use crate::engine::error::{EngineError, EngineResult};
use tracing::{debug, instrument, warn};

// ==========================================
// MatchKey / KeyMatcher - 键子集匹配器
// ==========================================

/// 参与匹配的上下文键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKey {
    Product,
    RouteType,
    EnergySource,
    BauxiteGrade,
}

impl MatchKey {
    pub fn name(&self) -> &'static str {
        match self {
            MatchKey::Product => "product",
            MatchKey::RouteType => "route_type",
            MatchKey::EnergySource => "energy_source",
            MatchKey::BauxiteGrade => "bauxite_grade",
        }
    }

    fn matches(&self, row: &BaselineRow, query: &BaselineQuery) -> bool {
        match self {
            MatchKey::Product => row.key.product == query.product.as_str(),
            MatchKey::RouteType => row.key.route_type == query.route_type.as_str(),
            MatchKey::EnergySource => row.key.energy_source == query.energy_source.as_str(),
            MatchKey::BauxiteGrade => row.key.bauxite_grade == query.bauxite_grade.as_str(),
        }
    }
}

/// 回退链中的一个层级
#[derive(Debug, Clone, Copy)]
pub struct KeyMatcher {
    pub level: FallbackLevel,
    pub keys: &'static [MatchKey],
    /// 该层级是否适用于当前查询
    pub applies: fn(&BaselineQuery) -> bool,
}

impl KeyMatcher {
    pub fn matches(&self, row: &BaselineRow, query: &BaselineQuery) -> bool {
        self.keys.iter().all(|k| k.matches(row, query))
    }

    pub fn key_names(&self) -> Vec<String> {
        self.keys.iter().map(|k| k.name().to_string()).collect()
    }
}

fn always(_: &BaselineQuery) -> bool {
    true
}

fn grade_is_specific(query: &BaselineQuery) -> bool {
    query.bauxite_grade != BauxiteGrade::Na
}

/// 回退链（最精确在前）
pub const FALLBACK_CHAIN: [KeyMatcher; 4] = [
    KeyMatcher {
        level: FallbackLevel::Exact,
        keys: &[
            MatchKey::Product,
            MatchKey::RouteType,
            MatchKey::EnergySource,
            MatchKey::BauxiteGrade,
        ],
        applies: always,
    },
    KeyMatcher {
        level: FallbackLevel::GradeRelaxed,
        keys: &[MatchKey::Product, MatchKey::RouteType, MatchKey::EnergySource],
        applies: grade_is_specific,
    },
    KeyMatcher {
        level: FallbackLevel::EnergyRelaxed,
        keys: &[MatchKey::Product, MatchKey::RouteType],
        applies: always,
    },
    KeyMatcher {
        level: FallbackLevel::ProductOnly,
        keys: &[MatchKey::Product],
        applies: always,
    },
];

// ==========================================
// 中位数
// ==========================================

/// 中位数（偶数个取中间两数均值）；空集合返回 None
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

// ==========================================
// BaselineResolver - 基线解析引擎
// ==========================================
pub struct BaselineResolver {
    chain: Vec<KeyMatcher>,
}

impl Default for BaselineResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BaselineResolver {
    /// 使用标准回退链创建
    pub fn new() -> Self {
        Self {
            chain: FALLBACK_CHAIN.to_vec(),
        }
    }

    /// 使用自定义回退链创建（按顺序尝试）
    pub fn with_chain(chain: Vec<KeyMatcher>) -> Self {
        Self { chain }
    }

    /// 解析基线
    ///
    /// # 参数
    /// - table: 已加载的基线表
    /// - query: 查询上下文（非 conventional 路线的品位须已折算为 na）
    ///
    /// # 返回
    /// - Ok(BaselineRecord): 首个有命中层级的中位数基线
    /// - Err(NoBaselineFound): 回退链耗尽
    /// - Err(MissingMetricValues): 命中行中某必需指标全部缺失
    #[instrument(skip(self, table), fields(rows = table.len()))]
    pub fn resolve(
        &self,
        table: &BaselineTable,
        query: &BaselineQuery,
    ) -> EngineResult<BaselineRecord> {
        for matcher in &self.chain {
            if !(matcher.applies)(query) {
                continue;
            }

            let rows: Vec<&BaselineRow> = table
                .rows
                .iter()
                .filter(|row| matcher.matches(row, query))
                .collect();

            if rows.is_empty() {
                debug!(level = %matcher.level, "层级无命中，继续回退");
                continue;
            }

            if matcher.level != FallbackLevel::Exact {
                warn!(
                    level = %matcher.level,
                    matched_rows = rows.len(),
                    "基线未精确命中，使用回退层级"
                );
            }

            return Self::summarize(matcher, &rows, query);
        }

        Err(EngineError::no_baseline(query))
    }

    /// 各适用层级的候选行数（诊断用）
    pub fn candidate_counts(
        &self,
        table: &BaselineTable,
        query: &BaselineQuery,
    ) -> Vec<(FallbackLevel, usize)> {
        self.chain
            .iter()
            .filter(|m| (m.applies)(query))
            .map(|m| {
                let count = table.rows.iter().filter(|r| m.matches(r, query)).count();
                (m.level, count)
            })
            .collect()
    }

    fn summarize(
        matcher: &KeyMatcher,
        rows: &[&BaselineRow],
        query: &BaselineQuery,
    ) -> EngineResult<BaselineRecord> {
        let mut metrics = MetricSet::default();
        for metric in Metric::ALL {
            let mut values: Vec<f64> = rows.iter().filter_map(|r| r.value(metric)).collect();
            let value = median(&mut values).ok_or_else(|| EngineError::MissingMetricValues {
                column: metric.column_name().to_string(),
                level: matcher.level,
                matched_rows: rows.len(),
            })?;
            metrics.set(metric, value);
        }

        let mut quality: Vec<f64> = rows.iter().filter_map(|r| r.quality_score).collect();

        Ok(BaselineRecord {
            metrics,
            quality_score: median(&mut quality),
            fallback_level: matcher.level,
            matched_keys: matcher.key_names(),
            matched_rows: rows.len(),
            query: *query,
        })
    }
}

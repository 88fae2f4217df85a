// ==========================================
// 铝制品 LCA 看板 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 红线: 启动后只读，通过 Arc 在请求间共享
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::DashboardApi;
use crate::config::{ConfigResult, ServiceConfig};

/// 应用状态
pub struct AppState {
    /// 服务配置
    pub config: ServiceConfig,

    /// 已选定的基线数据源
    pub data_csv: PathBuf,

    /// 看板API
    pub dashboard_api: Arc<DashboardApi>,
}

impl AppState {
    /// 由服务配置构造应用状态
    ///
    /// # 步骤
    /// 1. 加载（并校验）分摊配置
    /// 2. 按候选顺序选定基线数据源
    pub fn new(config: ServiceConfig) -> ConfigResult<Self> {
        let profile = Arc::new(config.load_allocation_profile()?);
        let data_csv = select_data_source(&config.data_csv_candidates);

        info!(data_csv = %data_csv.display(), "基线数据源已选定");

        Ok(Self {
            config,
            data_csv,
            dashboard_api: Arc::new(DashboardApi::new(profile)),
        })
    }

    /// 使用指定数据源与现成 API 构造（测试与嵌入场景）
    pub fn with_data_source(
        config: ServiceConfig,
        data_csv: impl Into<PathBuf>,
        dashboard_api: Arc<DashboardApi>,
    ) -> Self {
        Self {
            config,
            data_csv: data_csv.into(),
            dashboard_api,
        }
    }

    pub fn data_csv(&self) -> &Path {
        &self.data_csv
    }
}

/// 按顺序选定基线数据源
///
/// 首个存在的路径生效；都不存在时返回最后一个候选（后续加载会报 DataUnavailable）。
/// 候选为空时回落到内置默认列表。
pub fn select_data_source(candidates: &[PathBuf]) -> PathBuf {
    let defaults;
    let candidates = if candidates.is_empty() {
        defaults = ServiceConfig::default().data_csv_candidates;
        defaults.as_slice()
    } else {
        candidates
    };

    if let Some(found) = candidates.iter().find(|p| p.exists()) {
        return found.clone();
    }

    let fallback = candidates.last().cloned().unwrap_or_default();
    warn!(path = %fallback.display(), "候选基线数据源均不存在");
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_existing_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("train_1.csv");
        let second = dir.path().join("train.csv");
        std::fs::write(&second, "x").unwrap();

        let selected = select_data_source(&[first.clone(), second.clone()]);
        assert_eq!(selected, second);

        std::fs::write(&first, "x").unwrap();
        let selected = select_data_source(&[first.clone(), second]);
        assert_eq!(selected, first);
    }

    #[test]
    fn test_last_candidate_reported_when_none_exist() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        assert_eq!(select_data_source(&[a, b.clone()]), b);
    }

    #[test]
    fn test_new_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("train.csv");
        std::fs::write(&csv, "x").unwrap();

        let config = ServiceConfig {
            bind_addr: "0.0.0.0:9000".to_string(),
            data_csv_candidates: vec![dir.path().join("train_1.csv"), csv.clone()],
            ..ServiceConfig::default()
        };
        let state = AppState::new(config).unwrap();

        assert_eq!(state.data_csv(), csv.as_path());
        assert_eq!(state.config.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn test_new_rejects_missing_allocation_profile() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServiceConfig {
            allocation_profile_path: Some(dir.path().join("missing.json")),
            ..ServiceConfig::default()
        };
        assert!(AppState::new(config).is_err());
    }

    #[test]
    fn test_empty_candidates_use_defaults() {
        let selected = select_data_source(&[]);
        let defaults = ServiceConfig::default().data_csv_candidates;
        assert!(defaults.contains(&selected));
    }
}

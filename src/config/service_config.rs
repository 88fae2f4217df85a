// ==========================================
// 铝制品 LCA 看板 - 服务配置
// ==========================================
// 职责: 监听地址、基线数据候选路径、界面语言、分摊配置文件
// 优先级: 环境变量 > 配置文件 > 内置默认
// ==========================================

use crate::config::allocation_profile::AllocationProfile;
use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 配置项对应的环境变量
pub mod env_keys {
    /// 配置文件路径
    pub const CONFIG_PATH: &str = "LCA_DASHBOARD_CONFIG";
    /// 监听地址，如 0.0.0.0:8000
    pub const BIND_ADDR: &str = "LCA_DASHBOARD_BIND";
    /// 基线数据路径，多个候选用 ';' 分隔（按顺序尝试）
    pub const DATA_CSV: &str = "LCA_DASHBOARD_DATA_CSV";
    /// 界面语言（zh-CN / en）
    pub const LOCALE: &str = "LCA_DASHBOARD_LOCALE";
    /// 分摊配置 JSON 文件路径
    pub const ALLOCATION_PROFILE: &str = "LCA_DASHBOARD_ALLOCATION_PROFILE";
}

/// 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub bind_addr: String,
    /// 基线数据候选路径（按顺序，首个存在者生效）
    pub data_csv_candidates: Vec<PathBuf>,
    pub locale: String,
    /// 分摊配置文件；None 使用内置默认
    pub allocation_profile_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            data_csv_candidates: vec![
                PathBuf::from("data/processed/train_1.csv"),
                PathBuf::from("data/processed/train.csv"),
            ],
            locale: "zh-CN".to_string(),
            allocation_profile_path: None,
        }
    }
}

impl ServiceConfig {
    /// 加载服务配置
    ///
    /// 1. 配置文件: $LCA_DASHBOARD_CONFIG，否则用户配置目录下的 lca-dashboard/config.json（存在才读）
    /// 2. 环境变量覆写
    pub fn load() -> ConfigResult<Self> {
        let config_path = std::env::var(env_keys::CONFIG_PATH)
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| default_config_path().filter(|p| p.exists()));

        let mut config = match config_path {
            Some(path) => {
                tracing::info!("读取服务配置文件: {}", path.display());
                Self::from_json_file(&path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// 从 JSON 文件读取（缺省字段取默认值）
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 应用环境变量覆写（lookup 注入便于测试）
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(bind) = non_empty(env_keys::BIND_ADDR) {
            self.bind_addr = bind;
        }
        if let Some(paths) = non_empty(env_keys::DATA_CSV) {
            let candidates: Vec<PathBuf> = paths
                .split(';')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .collect();
            if !candidates.is_empty() {
                self.data_csv_candidates = candidates;
            }
        }
        if let Some(locale) = non_empty(env_keys::LOCALE) {
            self.locale = locale;
        }
        if let Some(profile) = non_empty(env_keys::ALLOCATION_PROFILE) {
            self.allocation_profile_path = Some(PathBuf::from(profile));
        }
    }

    /// 加载分摊配置（未配置文件时使用内置默认）
    pub fn load_allocation_profile(&self) -> ConfigResult<AllocationProfile> {
        match &self.allocation_profile_path {
            Some(path) => AllocationProfile::from_json_file(path),
            None => Ok(AllocationProfile::default()),
        }
    }
}

/// 默认配置文件位置: <用户配置目录>/lca-dashboard/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lca-dashboard").join("config.json"))
}

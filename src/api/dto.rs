// ==========================================
// 铝制品 LCA 看板 - 请求/响应 DTO
// ==========================================
// 请求保持字符串形态，取值校验在 validator 中完成，便于给出统一的 VALIDATION_ERROR
// ==========================================

use crate::domain::baseline::BaselineRecord;
use crate::domain::stage::{ScopeTotals, StageRow};
use serde::{Deserialize, Serialize};

fn default_bauxite_grade() -> String {
    "na".to_string()
}

fn default_eol_option() -> String {
    "recycle".to_string()
}

/// POST /dashboard/stages 请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub product: String,
    pub units: i64,
    pub route_type: String,
    #[serde(default = "default_bauxite_grade")]
    pub bauxite_grade: String,
    pub energy_source: String,
    #[serde(default = "default_eol_option")]
    pub eol_option: String,

    // 管材尺寸（米）
    #[serde(default)]
    pub outer_radius_m: Option<f64>,
    #[serde(default)]
    pub inner_radius_m: Option<f64>,
    #[serde(default)]
    pub length_m: Option<f64>,

    // 板材尺寸（米）
    #[serde(default)]
    pub thickness_m: Option<f64>,
    #[serde(default)]
    pub width_m: Option<f64>,
    #[serde(default)]
    pub sheet_length_m: Option<f64>,
}

/// POST /dashboard/stages 响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub stages: Vec<StageRow>,
    pub totals: ScopeTotals,
    pub baselines_used: BaselineRecord,
    pub data_csv: String,
}

/// GET /health 响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub data_csv: String,
}

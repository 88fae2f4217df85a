// ==========================================
// 看板请求构建器 - 用于集成测试
// ==========================================

use lca_dashboard::api::DashboardRequest;

/// 管材请求: 外径 0.05 m, 内径 0.04 m, 长 2 m
pub fn pipe_request(route_type: &str, energy_source: &str, bauxite_grade: &str) -> DashboardRequest {
    DashboardRequest {
        product: "pipe".to_string(),
        units: 1,
        route_type: route_type.to_string(),
        bauxite_grade: bauxite_grade.to_string(),
        energy_source: energy_source.to_string(),
        eol_option: "landfill".to_string(),
        outer_radius_m: Some(0.05),
        inner_radius_m: Some(0.04),
        length_m: Some(2.0),
        thickness_m: None,
        width_m: None,
        sheet_length_m: None,
    }
}

/// 板材请求: 厚 0.002 m, 宽 1 m, 长 2 m（10.8 kg）
pub fn sheet_request(route_type: &str, energy_source: &str, bauxite_grade: &str) -> DashboardRequest {
    DashboardRequest {
        product: "sheet".to_string(),
        units: 1,
        route_type: route_type.to_string(),
        bauxite_grade: bauxite_grade.to_string(),
        energy_source: energy_source.to_string(),
        eol_option: "landfill".to_string(),
        outer_radius_m: None,
        inner_radius_m: None,
        length_m: None,
        thickness_m: Some(0.002),
        width_m: Some(1.0),
        sheet_length_m: Some(2.0),
    }
}

pub fn with_units(mut req: DashboardRequest, units: i64) -> DashboardRequest {
    req.units = units;
    req
}

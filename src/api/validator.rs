// ==========================================
// 铝制品 LCA 看板 - 请求校验器
// ==========================================
// 职责: DashboardRequest → DashboardInput
// 规则:
// - 枚举字段按允许值精确匹配（区分大小写，不做空白/连字符规范化）
// - units >= 1
// - 非 conventional 路线的品位强制折算为 na
// 说明: 尺寸合法性在质量推导时校验（InvalidGeometry），这里不重复
// ==========================================

use crate::api::dto::DashboardRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::input::{DashboardInput, Dimensions};
use crate::domain::types::{BauxiteGrade, EnergySource, EolOption, Product, RouteType};
use std::str::FromStr;

fn parse_field<T: FromStr<Err = String>>(value: &str) -> ApiResult<T> {
    T::from_str(value).map_err(ApiError::ValidationError)
}

/// 校验请求并构造看板输入
pub fn validate_request(req: &DashboardRequest) -> ApiResult<DashboardInput> {
    let product: Product = parse_field(&req.product)?;
    let route_type: RouteType = parse_field(&req.route_type)?;
    let bauxite_grade: BauxiteGrade = parse_field(&req.bauxite_grade)?;
    let energy_source: EnergySource = parse_field(&req.energy_source)?;
    let eol_option: EolOption = parse_field(&req.eol_option)?;

    if req.units < 1 {
        return Err(ApiError::ValidationError(format!(
            "units 必须 >= 1: {}",
            req.units
        )));
    }
    let units = u32::try_from(req.units).map_err(|_| {
        ApiError::ValidationError(format!("units 超出允许范围: {}", req.units))
    })?;

    let dimensions = Dimensions {
        outer_radius_m: req.outer_radius_m,
        inner_radius_m: req.inner_radius_m,
        length_m: req.length_m,
        thickness_m: req.thickness_m,
        width_m: req.width_m,
        sheet_length_m: req.sheet_length_m,
    };

    Ok(DashboardInput::new(
        product,
        units,
        route_type,
        bauxite_grade,
        energy_source,
        eol_option,
        dimensions,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> DashboardRequest {
        DashboardRequest {
            product: "pipe".to_string(),
            units: 10,
            route_type: "recycle".to_string(),
            bauxite_grade: "high".to_string(),
            energy_source: "renewable".to_string(),
            eol_option: "reuse".to_string(),
            outer_radius_m: Some(0.05),
            inner_radius_m: Some(0.04),
            length_m: Some(2.0),
            thickness_m: None,
            width_m: None,
            sheet_length_m: None,
        }
    }

    #[test]
    fn test_valid_request() {
        let input = validate_request(&request()).unwrap();
        assert_eq!(input.product, Product::Pipe);
        assert_eq!(input.units, 10);
        assert_eq!(input.eol_option, EolOption::Reuse);
        // recycle 路线品位折算为 na
        assert_eq!(input.bauxite_grade, BauxiteGrade::Na);
        assert_eq!(input.dimensions.outer_radius_m, Some(0.05));
    }

    #[test]
    fn test_units_must_be_positive() {
        let mut req = request();
        req.units = 0;
        let err = validate_request(&req).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_units_overflow() {
        let mut req = request();
        req.units = i64::from(u32::MAX) + 1;
        assert!(matches!(
            validate_request(&req),
            Err(ApiError::ValidationError(_))
        ));
    }

    #[test]
    fn test_unknown_enum_value() {
        let mut req = request();
        req.product = "rod".to_string();
        match validate_request(&req) {
            Err(ApiError::ValidationError(msg)) => assert!(msg.contains("product")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }

        let mut req = request();
        req.eol_option = "incinerate".to_string();
        assert!(validate_request(&req).is_err());
    }

    #[test]
    fn test_enum_values_case_sensitive() {
        let mut req = request();
        req.product = "PIPE".to_string();
        assert_eq!(validate_request(&req).unwrap_err().code(), "VALIDATION_ERROR");

        let mut req = request();
        req.product = "  pipe ".to_string();
        assert_eq!(validate_request(&req).unwrap_err().code(), "VALIDATION_ERROR");

        let mut req = request();
        req.route_type = "Conventional".to_string();
        assert_eq!(validate_request(&req).unwrap_err().code(), "VALIDATION_ERROR");

        let mut req = request();
        req.energy_source = "Non Renewable".to_string();
        assert_eq!(validate_request(&req).unwrap_err().code(), "VALIDATION_ERROR");
    }
}

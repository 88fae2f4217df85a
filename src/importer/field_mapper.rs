// ==========================================
// 铝制品 LCA 看板 - 基线字段映射器实现
// ==========================================
// 职责: 源列 → 标准列映射 + 类型转换
// 契约: 四个上下文键 + 六个指标为必需列；quality_score 可选
// ==========================================

use crate::domain::baseline::{BaselineKey, BaselineRow, Metric};
use crate::domain::types::normalize_token;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{FieldMapper, RawRecord};

/// 上下文键列
pub const KEY_PRODUCT: &str = "product";
pub const KEY_ROUTE_TYPE: &str = "route_type";
pub const KEY_ENERGY_SOURCE: &str = "energy_source";
pub const KEY_BAUXITE_GRADE: &str = "bauxite_grade";
pub const COL_QUALITY_SCORE: &str = "quality_score";

/// 缺失上下文键的占位取值
const NA: &str = "na";

/// 列名别名表（均为规范化后的小写形式）
///
/// 历史数据集里同一指标存在多种列名（汇总列、旧版导出列）。
fn column_aliases(canonical: &str) -> &'static [&'static str] {
    match canonical {
        "product" => &["product", "product_type"],
        "route_type" => &["route_type", "route"],
        "energy_source" => &["energy_source", "energy"],
        "bauxite_grade" => &["bauxite_grade", "grade"],
        "manufacturing_cost_per_unit" => &[
            "manufacturing_cost_per_unit",
            "manufacturingcostperunit",
            "manufacturing_cost_usd",
        ],
        "electricity_kwh" => &["electricity_kwh", "totalelectricitykwh"],
        "carbon_kgco2e" => &["carbon_kgco2e", "totalcarbonkgco2e"],
        "naturalgas_nm3" => &["naturalgas_nm3", "natural_gas_nm3", "totalnaturalgasnm3"],
        "wastewater_l" => &["wastewater_l", "totalwastewaterl"],
        "transport_cost_usd" => &["transport_cost_usd", "transportcost", "transport_usd"],
        "quality_score" => &["quality_score", "qualityscore"],
        _ => &[],
    }
}

/// 必需列（标准名）
fn required_columns() -> Vec<&'static str> {
    let mut cols = vec![
        KEY_PRODUCT,
        KEY_ROUTE_TYPE,
        KEY_ENERGY_SOURCE,
        KEY_BAUXITE_GRADE,
    ];
    cols.extend(Metric::ALL.iter().map(|m| m.column_name()));
    cols
}

pub struct BaselineFieldMapper;

impl FieldMapper for BaselineFieldMapper {
    fn check_schema(&self, headers: &[String]) -> ImportResult<()> {
        for canonical in required_columns() {
            let present = column_aliases(canonical)
                .iter()
                .any(|alias| headers.iter().any(|h| h == alias));
            if !present {
                return Err(ImportError::MissingColumn {
                    column: canonical.to_string(),
                });
            }
        }
        Ok(())
    }

    fn map_to_baseline_row(&self, record: &RawRecord) -> ImportResult<BaselineRow> {
        let row = record.row_number;

        Ok(BaselineRow {
            key: BaselineKey {
                product: self.get_key(record, KEY_PRODUCT),
                route_type: self.get_route(record),
                energy_source: self.get_key(record, KEY_ENERGY_SOURCE),
                bauxite_grade: self.get_key(record, KEY_BAUXITE_GRADE),
            },
            manufacturing_cost_per_unit: self
                .parse_f64(record, Metric::ManufacturingCost.column_name(), row)?,
            electricity_kwh: self.parse_f64(record, Metric::Electricity.column_name(), row)?,
            carbon_kgco2e: self.parse_f64(record, Metric::Carbon.column_name(), row)?,
            natural_gas_nm3: self.parse_f64(record, Metric::NaturalGas.column_name(), row)?,
            wastewater_l: self.parse_f64(record, Metric::Wastewater.column_name(), row)?,
            transport_cost_usd: self
                .parse_f64(record, Metric::TransportCost.column_name(), row)?,
            quality_score: self.parse_f64(record, COL_QUALITY_SCORE, row)?,
            row_number: row,
        })
    }
}

impl BaselineFieldMapper {
    /// 提取字符串字段，支持多个可能的列名（别名）
    fn get_string<'a>(&self, record: &'a RawRecord, canonical: &str) -> Option<&'a str> {
        for alias in column_aliases(canonical) {
            if let Some(v) = record.cells.get(*alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed);
                }
            }
        }
        None
    }

    /// 上下文键：规范化，空值记为 na
    fn get_key(&self, record: &RawRecord, canonical: &str) -> String {
        self.get_string(record, canonical)
            .map(normalize_token)
            .unwrap_or_else(|| NA.to_string())
    }

    /// 工艺路线：历史数据中 bauxite/primary 即原生路线
    fn get_route(&self, record: &RawRecord) -> String {
        let route = self.get_key(record, KEY_ROUTE_TYPE);
        match route.as_str() {
            "bauxite" | "primary" => "conventional".to_string(),
            "recycled" => "recycle".to_string(),
            _ => route,
        }
    }

    /// 解析浮点数（空值/NaN/null 视为缺失）
    fn parse_f64(
        &self,
        record: &RawRecord,
        canonical: &str,
        row_number: usize,
    ) -> ImportResult<Option<f64>> {
        let value = match self.get_string(record, canonical) {
            None => return Ok(None),
            Some(v) => v,
        };

        match value.to_lowercase().as_str() {
            "nan" | "na" | "null" | "none" => return Ok(None),
            _ => {}
        }

        let parsed = value
            .parse::<f64>()
            .map_err(|_| ImportError::TypeConversionError {
                row: row_number,
                field: canonical.to_string(),
                message: format!("无法解析为浮点数: {}", value),
            })?;

        if !parsed.is_finite() {
            return Err(ImportError::TypeConversionError {
                row: row_number,
                field: canonical.to_string(),
                message: format!("数值非有限: {}", value),
            });
        }

        Ok(Some(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        RawRecord {
            row_number: 1,
            cells: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    fn full_headers() -> Vec<String> {
        required_columns().iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_check_schema_accepts_aliases() {
        let headers: Vec<String> = [
            "product_type",
            "route_type",
            "energy_source",
            "grade",
            "manufacturingcostperunit",
            "totalelectricitykwh",
            "totalcarbonkgco2e",
            "totalnaturalgasnm3",
            "totalwastewaterl",
            "transportcost",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert!(BaselineFieldMapper.check_schema(&headers).is_ok());
    }

    #[test]
    fn test_check_schema_missing_column() {
        let mut headers = full_headers();
        headers.retain(|h| h != "wastewater_l");
        match BaselineFieldMapper.check_schema(&headers) {
            Err(ImportError::MissingColumn { column }) => assert_eq!(column, "wastewater_l"),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_map_row_normalizes_keys() {
        let row = BaselineFieldMapper
            .map_to_baseline_row(&record(&[
                ("product", "Pipe"),
                ("route_type", "bauxite"),
                ("energy_source", "Non-Renewable"),
                ("bauxite_grade", ""),
                ("electricity_kwh", "14.2"),
                ("carbon_kgco2e", "NaN"),
            ]))
            .unwrap();

        assert_eq!(row.key.product, "pipe");
        assert_eq!(row.key.route_type, "conventional");
        assert_eq!(row.key.energy_source, "non_renewable");
        assert_eq!(row.key.bauxite_grade, "na");
        assert_eq!(row.electricity_kwh, Some(14.2));
        assert_eq!(row.carbon_kgco2e, None);
        assert_eq!(row.quality_score, None);
    }

    #[test]
    fn test_map_row_rejects_garbage_number() {
        let result = BaselineFieldMapper.map_to_baseline_row(&record(&[
            ("product", "sheet"),
            ("electricity_kwh", "twelve"),
        ]));
        match result {
            Err(ImportError::TypeConversionError { field, row, .. }) => {
                assert_eq!(field, "electricity_kwh");
                assert_eq!(row, 1);
            }
            other => panic!("Expected TypeConversionError, got {:?}", other),
        }
    }
}

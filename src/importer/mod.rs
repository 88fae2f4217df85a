// ==========================================
// 铝制品 LCA 看板 - 导入层（基线数据仓）
// ==========================================
// 职责: 外部表格数据 → 内存基线表
// 支持: CSV, Excel
// ==========================================

// 模块声明
pub mod baseline_store;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;

// 重导出核心类型
pub use baseline_store::BaselineStore;
pub use error::{ImportError, ImportResult};
pub use field_mapper::BaselineFieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};

// 重导出 Trait 接口
pub use importer_trait::{FieldMapper, FileParser, RawRecord, RawTable};

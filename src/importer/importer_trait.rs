// ==========================================
// 铝制品 LCA 看板 - 基线导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 管道: 文件解析 → 字段映射 → 内存基线表
// ==========================================

use crate::domain::baseline::BaselineRow;
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

/// 解析后的原始行（列名已规范化）
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// 数据行号（不含表头，从 1 开始）
    pub row_number: usize,
    pub cells: HashMap<String, String>,
}

/// 解析后的原始表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// 规范化后的表头（保持原顺序）
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 将文件解析为原始表
    ///
    /// # 返回
    /// - Ok(RawTable): 规范化表头 + 非空行
    /// - Err: 文件不存在、格式不支持、解析失败
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 原始行 → 基线行（显式列契约）
// 实现者: BaselineFieldMapper
pub trait FieldMapper: Send + Sync {
    /// 校验表头满足基线表契约（缺列即失败）
    fn check_schema(&self, headers: &[String]) -> ImportResult<()>;

    /// 映射单行
    fn map_to_baseline_row(&self, record: &RawRecord) -> ImportResult<BaselineRow>;
}

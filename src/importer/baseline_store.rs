// ==========================================
// 铝制品 LCA 看板 - 基线数据仓
// ==========================================
// 职责: 从表格文件加载基线表到内存（每次调用重新读取，不缓存）
// 红线: 不做源文件回退选择，路径由调用方决定
// ==========================================

use crate::domain::baseline::BaselineTable;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::BaselineFieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::FieldMapper;
use std::path::Path;
use tracing::{debug, instrument};

/// 基线数据仓
pub struct BaselineStore {
    parser: UniversalFileParser,
    mapper: BaselineFieldMapper,
}

impl Default for BaselineStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BaselineStore {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            mapper: BaselineFieldMapper,
        }
    }

    /// 加载基线表
    ///
    /// # 参数
    /// - source: 已由调用方选定的数据文件路径（.csv/.xlsx/.xls）
    ///
    /// # 返回
    /// - Ok(BaselineTable): 全部非空行
    /// - Err(ImportError): 文件缺失/不可读/缺必需列/数值非法
    #[instrument(skip(self, source), fields(source = %source.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(&self, source: P) -> ImportResult<BaselineTable> {
        let path = source.as_ref();

        // 1. 文件解析
        let raw = self.parser.parse(path)?;

        // 2. 表结构契约校验（先于逐行映射，快速失败）
        self.mapper.check_schema(&raw.headers)?;

        // 3. 逐行映射
        let rows = raw
            .records
            .iter()
            .map(|record| self.mapper.map_to_baseline_row(record))
            .collect::<ImportResult<Vec<_>>>()?;

        debug!(rows = rows.len(), "基线表加载完成");
        Ok(BaselineTable::new(path.display().to_string(), rows))
    }
}

// ==========================================
// 集成测试辅助工具
// ==========================================
// 各测试文件只用到其中一部分
#![allow(dead_code)]

pub mod baseline_csv_builder;
pub mod request_builder;

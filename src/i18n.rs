// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文，语言由服务配置 locale 选定
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 已提供翻译的语言
pub const SUPPORTED_LOCALES: &[&str] = &["zh-CN", "en"];

/// 默认语言
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" 或 "en"），大小写不敏感；未知语言回落为默认语言
pub fn set_locale(locale: &str) {
    let resolved = SUPPORTED_LOCALES
        .iter()
        .find(|l| l.eq_ignore_ascii_case(locale.trim()))
        .copied()
        .unwrap_or_else(|| {
            tracing::warn!(locale, "不支持的语言，使用默认语言 {}", DEFAULT_LOCALE);
            DEFAULT_LOCALE
        });
    rust_i18n::set_locale(resolved);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use lca_dashboard::i18n::t;
/// let msg = t("common.ok");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use lca_dashboard::i18n::t_with_args;
/// let msg = t_with_args("error.data_unavailable", &[("message", "/tmp/test.csv")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

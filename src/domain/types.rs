// ==========================================
// 铝制品 LCA 看板 - 领域类型定义
// ==========================================
// 职责: 请求上下文中的枚举维度（产品/工艺路线/品位/能源/报废处置/口径）
// 序列化格式: snake_case (与请求体、基线表取值一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 基线表键值规范化：去空白、小写、空格/连字符转下划线
///
/// 仅用于导入表格的键列；请求枚举按 FromStr 精确匹配
pub fn normalize_token(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

// ==========================================
// 产品形态 (Product)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Pipe,  // 管材
    Sheet, // 板材
}

impl Product {
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Pipe => "pipe",
            Product::Sheet => "sheet",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Product {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pipe" => Ok(Product::Pipe),
            "sheet" => Ok(Product::Sheet),
            other => Err(format!("product 取值非法: {} (允许: pipe|sheet)", other)),
        }
    }
}

// ==========================================
// 工艺路线 (Route Type)
// ==========================================
// conventional: 铝土矿原生路线; recycle: 废铝再生路线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    Conventional,
    Recycle,
}

impl RouteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Conventional => "conventional",
            RouteType::Recycle => "recycle",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RouteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conventional" => Ok(RouteType::Conventional),
            "recycle" => Ok(RouteType::Recycle),
            other => Err(format!(
                "route_type 取值非法: {} (允许: conventional|recycle)",
                other
            )),
        }
    }
}

// ==========================================
// 铝土矿品位 (Bauxite Grade)
// ==========================================
// 红线: 仅 conventional 路线有意义，其余路线一律为 Na
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BauxiteGrade {
    High,
    Medium,
    Low,
    Na,
}

impl BauxiteGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            BauxiteGrade::High => "high",
            BauxiteGrade::Medium => "medium",
            BauxiteGrade::Low => "low",
            BauxiteGrade::Na => "na",
        }
    }

    /// 按工艺路线折算有效品位（非 conventional 路线强制为 Na）
    pub fn effective_for(self, route_type: RouteType) -> Self {
        match route_type {
            RouteType::Conventional => self,
            RouteType::Recycle => BauxiteGrade::Na,
        }
    }
}

impl Default for BauxiteGrade {
    fn default() -> Self {
        BauxiteGrade::Na
    }
}

impl fmt::Display for BauxiteGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BauxiteGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(BauxiteGrade::High),
            "medium" => Ok(BauxiteGrade::Medium),
            "low" => Ok(BauxiteGrade::Low),
            "na" => Ok(BauxiteGrade::Na),
            other => Err(format!(
                "bauxite_grade 取值非法: {} (允许: high|medium|low|na)",
                other
            )),
        }
    }
}

// ==========================================
// 能源类型 (Energy Source)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    Renewable,
    NonRenewable,
}

impl EnergySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergySource::Renewable => "renewable",
            EnergySource::NonRenewable => "non_renewable",
        }
    }
}

impl fmt::Display for EnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EnergySource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "renewable" => Ok(EnergySource::Renewable),
            "non_renewable" => Ok(EnergySource::NonRenewable),
            other => Err(format!(
                "energy_source 取值非法: {} (允许: renewable|non_renewable)",
                other
            )),
        }
    }
}

// ==========================================
// 报废处置方式 (End-of-Life Option)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EolOption {
    Recycle,  // 回收再熔
    Reuse,    // 直接复用
    Landfill, // 填埋
}

impl EolOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            EolOption::Recycle => "recycle",
            EolOption::Reuse => "reuse",
            EolOption::Landfill => "landfill",
        }
    }
}

impl Default for EolOption {
    fn default() -> Self {
        EolOption::Recycle
    }
}

impl fmt::Display for EolOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EolOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recycle" => Ok(EolOption::Recycle),
            "reuse" => Ok(EolOption::Reuse),
            "landfill" => Ok(EolOption::Landfill),
            other => Err(format!(
                "eol_option 取值非法: {} (允许: recycle|reuse|landfill)",
                other
            )),
        }
    }
}

// ==========================================
// 统计口径 (Scope)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    PerUnit, // 单件
    Total,   // 整批
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::PerUnit => "per_unit",
            Scope::Total => "total",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  Non-Renewable "), "non_renewable");
        assert_eq!(normalize_token("non renewable"), "non_renewable");
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("pipe".parse::<Product>().unwrap(), Product::Pipe);
        assert_eq!(
            "non_renewable".parse::<EnergySource>().unwrap(),
            EnergySource::NonRenewable
        );
        assert_eq!("na".parse::<BauxiteGrade>().unwrap(), BauxiteGrade::Na);
        assert!("rod".parse::<Product>().is_err());
        assert!("virgin".parse::<RouteType>().is_err());
    }

    #[test]
    fn test_parse_enums_exact_token() {
        assert!("PIPE".parse::<Product>().is_err());
        assert!("  pipe ".parse::<Product>().is_err());
        assert!("Conventional".parse::<RouteType>().is_err());
        assert!("non-renewable".parse::<EnergySource>().is_err());
        assert!("Non Renewable".parse::<EnergySource>().is_err());
        assert!("HIGH".parse::<BauxiteGrade>().is_err());
        assert!("Landfill".parse::<EolOption>().is_err());
    }

    #[test]
    fn test_effective_grade() {
        assert_eq!(
            BauxiteGrade::High.effective_for(RouteType::Recycle),
            BauxiteGrade::Na
        );
        assert_eq!(
            BauxiteGrade::Low.effective_for(RouteType::Conventional),
            BauxiteGrade::Low
        );
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&EnergySource::NonRenewable).unwrap();
        assert_eq!(json, "\"non_renewable\"");
        let scope: Scope = serde_json::from_str("\"per_unit\"").unwrap();
        assert_eq!(scope, Scope::PerUnit);
    }
}

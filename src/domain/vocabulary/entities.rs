//! Vocabulary Context - Entities

use serde::{Deserialize, Serialize};

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 从字符串解析难度等级
    ///
    /// 验证边界处理的是松散类型数据，只接受三个小写取值
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 词汇条目
///
/// 不变量:
/// - id / spanish / english 非空且已去除首尾空白
/// - 通过验证后不可变，核心层从不修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyWord {
    /// 唯一标识
    pub id: String,
    /// 西班牙语原文
    pub spanish: String,
    /// 英语释义
    pub english: String,
    /// 分类（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// 难度（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("extreme"), None);
        assert_eq!(Difficulty::parse("Easy"), None);
    }

    #[test]
    fn test_difficulty_serde_roundtrip() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}

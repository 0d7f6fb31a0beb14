//! Vocabulary Context - Errors

use thiserror::Error;

/// 单条词汇数据的验证错误
///
/// 每个出错下标只保留第一个错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("词汇数据必须是数组")]
    NotAnArray,

    #[error("第 {index} 项不是对象")]
    NotAnObject { index: usize },

    #[error("第 {index} 项缺少有效的 id")]
    InvalidId { index: usize },

    #[error("第 {index} 项缺少有效的西班牙语原文")]
    InvalidSpanish { index: usize },

    #[error("第 {index} 项缺少有效的英语释义")]
    InvalidEnglish { index: usize },

    #[error("第 {index} 项的难度等级无效: {value}，必须是 easy / medium / hard")]
    InvalidDifficulty { index: usize, value: String },
}

/// 一批词汇数据的验证失败结果
///
/// 整批拒绝，调用方应保留上一份有效词表
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("词汇数据验证失败: {}", join_messages(.errors))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

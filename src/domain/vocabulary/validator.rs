//! 词汇数据验证边界
//!
//! 词表来源（fetch / 文件上传）产出松散类型的 JSON 记录，
//! 这里是它们进入核心层的唯一入口：
//! - 顶层必须是数组
//! - 每项必须是对象，id / spanish / english 为非空字符串
//! - difficulty 若存在必须是 easy / medium / hard
//! - 字符串字段接受前先去除首尾空白
//!
//! 每个出错下标只记录第一个错误；任何错误都导致整批拒绝。

use serde_json::Value;

use super::entities::{Difficulty, VocabularyWord};
use super::errors::{ValidationError, ValidationErrors};

/// 验证一批松散类型的词汇记录
pub fn validate_vocabulary(data: &Value) -> Result<Vec<VocabularyWord>, ValidationErrors> {
    let items = match data.as_array() {
        Some(items) => items,
        None => return Err(ValidationErrors::new(vec![ValidationError::NotAnArray])),
    };

    let mut words = Vec::with_capacity(items.len());
    let mut errors = Vec::new();

    for (index, item) in items.iter().enumerate() {
        match validate_item(index, item) {
            Ok(word) => words.push(word),
            Err(error) => errors.push(error),
        }
    }

    if errors.is_empty() {
        Ok(words)
    } else {
        Err(ValidationErrors::new(errors))
    }
}

/// 验证单条记录，返回该下标的第一个错误
fn validate_item(index: usize, item: &Value) -> Result<VocabularyWord, ValidationError> {
    let obj = item
        .as_object()
        .ok_or(ValidationError::NotAnObject { index })?;

    let id = required_string(obj.get("id")).ok_or(ValidationError::InvalidId { index })?;
    let spanish =
        required_string(obj.get("spanish")).ok_or(ValidationError::InvalidSpanish { index })?;
    let english =
        required_string(obj.get("english")).ok_or(ValidationError::InvalidEnglish { index })?;

    let category = obj
        .get("category")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let difficulty = match obj.get("difficulty") {
        None | Some(Value::Null) => None,
        Some(value) => {
            let raw = match value.as_str() {
                Some(s) => s.to_string(),
                None => value.to_string(),
            };
            match Difficulty::parse(raw.trim()) {
                Some(level) => Some(level),
                None => return Err(ValidationError::InvalidDifficulty { index, value: raw }),
            }
        }
    };

    Ok(VocabularyWord {
        id,
        spanish,
        english,
        category,
        difficulty,
    })
}

/// 提取必填字符串字段：必须存在、是字符串、去除空白后非空
fn required_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

//! Quiz Context - 测验题目

use serde::{Deserialize, Serialize};

use crate::domain::vocabulary::VocabularyWord;

/// 一道四选一的测验题
///
/// 不变量:
/// - correct_answer 一定出现在 options 中（构造保证，从不被过滤）
/// - 正常词表下 options 无重复（干扰项取自不同的英语释义）
/// - 小词表时 options 可能少于 4 个，属于文档化边界情况而非错误
///
/// 生命周期: 测验开始时一次性生成，只读，会话结束或重开时丢弃
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// 被考察的词
    pub word: VocabularyWord,
    /// 候选项（正确释义 + 干扰项，顺序已随机化）
    pub options: Vec<String>,
    /// 正确答案，等于 word.english
    pub correct_answer: String,
}

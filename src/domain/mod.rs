//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Vocabulary Context: 词汇与验证边界
//! - Quiz Context: 题目生成与成绩统计
//! - Voice Context: 语音描述与挑选

pub mod quiz;
pub mod vocabulary;
pub mod voice;

//! Quiz Context - 测验限界上下文
//!
//! 职责:
//! - 题目生成（洗牌、干扰项、组题、批量出题）
//! - 成绩统计辅助
//!
//! 本上下文只生成初始题目序列；答题进度和得分由调用方持有。

mod generator;
mod question;
mod scoring;

pub use generator::{
    build_question, build_question_with, generate_questions, generate_questions_with,
    pick_distractors, pick_distractors_with, shuffle, shuffle_with, DEFAULT_DISTRACTOR_COUNT,
};
pub use question::QuizQuestion;
pub use scoring::{accuracy, format_elapsed};

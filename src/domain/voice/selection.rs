//! 西班牙语语音挑选
//!
//! 宿主暴露的语音元数据没有可靠的结构化语系字段，
//! 因此过滤与打分都依赖语言标签前缀加名称模糊匹配：
//! - 候选 = 语言标签以 es- 开头，或名称命中已知西语语音名单
//! - 已持久化的偏好语音命中候选时直接短路返回
//! - 否则按有序 (正则, 优先级) 表取每个候选的最高命中分，
//!   名称命中女声名单再加固定分，取最高分者；
//!   同分时保持枚举顺序（先出现者胜）

use std::sync::LazyLock;

use regex::Regex;

use super::value_objects::VoiceDescriptor;

/// 已知西语语音名称/品牌串（小写），用于模糊匹配
const SPANISH_VOICE_NAMES: &[&str] = &[
    "spanish", "español", "espanol",
    "diego", "monica", "jorge", "paloma", "carlos", "lucia",
    "miguel", "esperanza", "enrique", "marisol", "alejandro",
    "carmen", "fernando", "isabella", "ricardo", "sofia",
    "antonio", "maria", "juan", "ana", "pablo", "elena",
    "google español", "microsoft helena", "microsoft pablo",
    "sabina", "tessa", "alvaro", "elvira", "dalia",
    "neural", "premium",
];

/// 有序打分表：区域标签高于笼统的 "spanish" 提及，
/// neural/premium 修饰加分，具名语音有固定优先级
static VOICE_PRIORITIES: LazyLock<Vec<(Regex, i32)>> = LazyLock::new(|| {
    [
        (r"es-es.*neural", 15),
        (r"es-mx.*neural", 14),
        (r"es-es", 12),
        (r"es-mx", 11),
        (r"es-ar", 10),
        (r"es-co", 9),
        (r"es-cl", 8),
        (r"es-pe", 7),
        (r"alvaro|elvira", 13),
        (r"diego|monica|jorge|paloma", 12),
        (r"carlos|lucia|miguel|esperanza", 11),
        (r"google.*español", 10),
        (r"microsoft.*helena|microsoft.*pablo", 9),
        (r"sabina|tessa|dalia", 8),
        (r"neural", 5),
        (r"premium|enhanced|natural", 4),
        (r"español|espanol", 6),
        (r"spanish", 5),
        (r"^es-", 3),
    ]
    .iter()
    .map(|(pattern, priority)| (Regex::new(pattern).expect("invalid voice priority pattern"), *priority))
    .collect()
});

/// 女声名单（启发式加分，并非真实性别元数据）
static FEMALE_NAME_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)female|mujer|monica|lucia|paloma|helena|sabina|tessa|esperanza|marisol|isabella|sofia|carmen|maria|ana|elena|elvira|dalia",
    )
    .expect("invalid female name pattern")
});

/// 女声名单命中的固定加分
const FEMALE_NAME_BONUS: i32 = 2;

/// 过滤出西语候选语音
pub fn spanish_candidates(voices: &[VoiceDescriptor]) -> Vec<&VoiceDescriptor> {
    voices.iter().filter(|v| is_spanish_capable(v)).collect()
}

fn is_spanish_capable(voice: &VoiceDescriptor) -> bool {
    let lang = voice.language_tag.to_lowercase();
    if lang.starts_with("es-") {
        return true;
    }

    let name = voice.name.to_lowercase();
    SPANISH_VOICE_NAMES.iter().any(|known| name.contains(known))
}

/// 给单个语音打分：打分表取最高命中 + 女声加分
pub fn score_voice(voice: &VoiceDescriptor) -> i32 {
    let search_text = format!("{} {}", voice.language_tag, voice.name).to_lowercase();

    let mut score = 0;
    for (pattern, priority) in VOICE_PRIORITIES.iter() {
        if pattern.is_match(&search_text) {
            score = score.max(*priority);
        }
    }

    if FEMALE_NAME_HINT.is_match(&voice.name) {
        score += FEMALE_NAME_BONUS;
    }

    score
}

/// 挑选最佳西语语音
///
/// preferred 为已持久化的偏好语音名，命中候选时直接返回；
/// 没有西语候选时返回 None。
/// 相同输入下结果确定（同分保持枚举顺序）。
pub fn best_spanish_voice<'a>(
    voices: &'a [VoiceDescriptor],
    preferred: Option<&str>,
) -> Option<&'a VoiceDescriptor> {
    let candidates = spanish_candidates(voices);
    if candidates.is_empty() {
        return None;
    }

    if let Some(name) = preferred {
        if let Some(voice) = candidates.iter().copied().find(|v| v.name == name) {
            return Some(voice);
        }
    }

    let mut best: Option<(&VoiceDescriptor, i32)> = None;
    for voice in candidates {
        let score = score_voice(voice);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((voice, score)),
        }
    }

    best.map(|(voice, _)| voice)
}

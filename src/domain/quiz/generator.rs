//! 题目生成器
//!
//! 把词汇池转换成随机化的可作答选择题序列：
//! - 洗牌采用 Fisher-Yates 反向遍历交换，保证排列无偏
//! - 干扰项取自 id 与英语释义都不同的词条，避免同义词误判
//! - 所有退化输入（空词表、数量为零、干扰项不足）都产出
//!   偏小但合法的结果，从不报错

use rand::Rng;

use super::question::QuizQuestion;
use crate::domain::vocabulary::VocabularyWord;

/// 每道题的默认干扰项数量
pub const DEFAULT_DISTRACTOR_COUNT: usize = 3;

/// 均匀洗牌，返回新序列，不修改输入
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// 使用指定随机源洗牌（可注入种子，便于测试）
///
/// Fisher-Yates: i 从末尾递减到 1，在 [0, i] 内取均匀随机 j 并交换
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// 为一个词挑选干扰项
///
/// 候选 = 词汇池中 id 不同且英语释义也不同的词条。
/// 候选不足 count 个时返回较少的干扰项，由出题方容忍短选项列表。
pub fn pick_distractors(
    correct: &VocabularyWord,
    pool: &[VocabularyWord],
    count: usize,
) -> Vec<String> {
    pick_distractors_with(correct, pool, count, &mut rand::rng())
}

pub fn pick_distractors_with<R: Rng + ?Sized>(
    correct: &VocabularyWord,
    pool: &[VocabularyWord],
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let candidates: Vec<String> = pool
        .iter()
        .filter(|word| word.id != correct.id && word.english != correct.english)
        .map(|word| word.english.clone())
        .collect();

    let mut shuffled = shuffle_with(&candidates, rng);
    shuffled.truncate(count);
    shuffled
}

/// 组装一道题：正确释义 + 干扰项，整体洗牌
pub fn build_question(word: &VocabularyWord, pool: &[VocabularyWord]) -> QuizQuestion {
    build_question_with(word, pool, &mut rand::rng())
}

pub fn build_question_with<R: Rng + ?Sized>(
    word: &VocabularyWord,
    pool: &[VocabularyWord],
    rng: &mut R,
) -> QuizQuestion {
    let mut options = vec![word.english.clone()];
    options.extend(pick_distractors_with(word, pool, DEFAULT_DISTRACTOR_COUNT, rng));

    QuizQuestion {
        word: word.clone(),
        options: shuffle_with(&options, rng),
        correct_answer: word.english.clone(),
    }
}

/// 生成一次测验的题目序列
///
/// 先洗牌整个词表以随机化出题顺序，再取前
/// min(count, 词表长度) 个词出题；干扰项池始终是原始完整词表，
/// 因此干扰项可能跨题重复（可接受）。
pub fn generate_questions(words: &[VocabularyWord], count: Option<usize>) -> Vec<QuizQuestion> {
    generate_questions_with(words, count, &mut rand::rng())
}

pub fn generate_questions_with<R: Rng + ?Sized>(
    words: &[VocabularyWord],
    count: Option<usize>,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let selected = count.unwrap_or(words.len()).min(words.len());

    shuffle_with(words, rng)
        .iter()
        .take(selected)
        .map(|word| build_question_with(word, words, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word(id: &str, spanish: &str, english: &str) -> VocabularyWord {
        VocabularyWord {
            id: id.to_string(),
            spanish: spanish.to_string(),
            english: english.to_string(),
            category: None,
            difficulty: None,
        }
    }

    fn sample_pool() -> Vec<VocabularyWord> {
        vec![
            word("1", "hola", "hello"),
            word("2", "adiós", "goodbye"),
            word("3", "gato", "cat"),
            word("4", "perro", "dog"),
            word("5", "casa", "house"),
        ]
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let input: Vec<u32> = (0..50).collect();
        let mut shuffled = shuffle_with(&input, &mut rng);

        shuffled.sort_unstable();
        assert_eq!(shuffled, input);
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = vec![1, 2, 3, 4];
        let _ = shuffle_with(&input, &mut rng);
        assert_eq!(input, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_shuffle_not_always_identity() {
        // 统计性检查：多次洗牌不可能总是恒等排列
        let mut rng = StdRng::seed_from_u64(42);
        let input: Vec<u32> = (0..10).collect();

        let changed = (0..50).any(|_| shuffle_with(&input, &mut rng) != input);
        assert!(changed);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffle_with(&Vec::<u32>::new(), &mut rng).is_empty());
        assert_eq!(shuffle_with(&[9], &mut rng), vec![9]);
    }

    #[test]
    fn test_distractors_exclude_correct_word() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = sample_pool();
        let distractors = pick_distractors_with(&pool[0], &pool, 3, &mut rng);

        assert_eq!(distractors.len(), 3);
        assert!(!distractors.contains(&"hello".to_string()));
    }

    #[test]
    fn test_distractors_exclude_same_english() {
        // 另一个 id 但释义相同的词不能作为干扰项
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = sample_pool();
        pool.push(word("6", "buenas", "hello"));

        for _ in 0..20 {
            let distractors = pick_distractors_with(&pool[0], &pool, 3, &mut rng);
            assert!(!distractors.contains(&"hello".to_string()));
        }
    }

    #[test]
    fn test_distractors_short_pool_returns_fewer() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = vec![word("1", "hola", "hello"), word("2", "adiós", "goodbye")];
        let distractors = pick_distractors_with(&pool[0], &pool, 3, &mut rng);
        assert_eq!(distractors, vec!["goodbye".to_string()]);
    }

    #[test]
    fn test_question_invariants() {
        let mut rng = StdRng::seed_from_u64(11);
        let pool = sample_pool();

        for _ in 0..50 {
            let question = build_question_with(&pool[2], &pool, &mut rng);

            assert_eq!(question.options.len(), 4);
            assert_eq!(question.correct_answer, "cat");
            assert_eq!(
                question
                    .options
                    .iter()
                    .filter(|o| *o == &question.correct_answer)
                    .count(),
                1
            );

            let mut unique = question.options.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn test_generate_questions_empty_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(generate_questions_with(&[], Some(10), &mut rng).is_empty());
        assert!(generate_questions_with(&[], None, &mut rng).is_empty());
    }

    #[test]
    fn test_generate_questions_zero_count() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool = sample_pool();
        assert!(generate_questions_with(&pool, Some(0), &mut rng).is_empty());
    }

    #[test]
    fn test_generate_questions_capped_not_padded() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool = sample_pool();
        let questions = generate_questions_with(&pool, Some(1000), &mut rng);
        assert_eq!(questions.len(), 5);
    }

    #[test]
    fn test_generate_questions_default_uses_whole_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool = sample_pool();
        let questions = generate_questions_with(&pool, None, &mut rng);

        assert_eq!(questions.len(), 5);

        // 每个词恰好出一道题
        let mut ids: Vec<&str> = questions.iter().map(|q| q.word.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_generate_questions_every_question_answerable() {
        let mut rng = StdRng::seed_from_u64(17);
        let pool = sample_pool();

        for question in generate_questions_with(&pool, None, &mut rng) {
            assert!(question.options.contains(&question.correct_answer));
            assert_eq!(question.correct_answer, question.word.english);
        }
    }
}

//! 成绩统计辅助函数

/// 正确率（四舍五入到整数百分比）
///
/// total 为 0 时返回 0，避免除零
pub fn accuracy(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

/// 把秒数格式化为 "M:SS"，秒数补零
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_zero_total() {
        assert_eq!(accuracy(0, 0), 0);
    }

    #[test]
    fn test_accuracy_exact() {
        assert_eq!(accuracy(7, 10), 70);
        assert_eq!(accuracy(10, 10), 100);
        assert_eq!(accuracy(0, 10), 0);
    }

    #[test]
    fn test_accuracy_rounds_to_nearest() {
        assert_eq!(accuracy(2, 3), 67);
        assert_eq!(accuracy(1, 3), 33);
        assert_eq!(accuracy(1, 8), 13);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(5), "0:05");
        assert_eq!(format_elapsed(59), "0:59");
        assert_eq!(format_elapsed(60), "1:00");
        assert_eq!(format_elapsed(125), "2:05");
        assert_eq!(format_elapsed(0), "0:00");
    }
}

//! 剩余时间格式化
//! Remaining-time formatting

use std::time::Duration;

/// Formats a remaining duration as `{hours}h {minutes:02}m {seconds:02}s`.
///
/// Sub-second remainders are floored. Hours are not padded and never wrap.
///
/// 将剩余时长格式化为 `{hours}h {minutes:02}m {seconds:02}s`。
/// 不足一秒的部分向下取整；小时数不补零，也不回绕。
pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.as_secs();
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    format!("{hours}h {minutes:02}m {seconds:02}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours_minutes_seconds() {
        assert_eq!(format_remaining(Duration::from_secs(3661)), "1h 01m 01s");
    }

    #[test]
    fn test_format_under_a_minute() {
        assert_eq!(format_remaining(Duration::from_secs(59)), "0h 00m 59s");
    }

    #[test]
    fn test_format_floors_subsecond_remainder() {
        assert_eq!(format_remaining(Duration::from_millis(1_999)), "0h 00m 01s");
        assert_eq!(format_remaining(Duration::from_millis(400)), "0h 00m 00s");
    }

    #[test]
    fn test_format_hours_are_not_wrapped() {
        // 3 天零 2 秒
        // 3 days and 2 seconds
        assert_eq!(format_remaining(Duration::from_secs(3 * 86_400 + 2)), "72h 00m 02s");
    }
}

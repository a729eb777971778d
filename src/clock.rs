//! 时钟抽象
//! Clock abstraction
//!
//! 剩余时间总是根据挂钟时间点重新计算，而不是累加计数器。
//! Remaining time is always recomputed from wall-clock instants rather than
//! from an accumulated counter.

use time::OffsetDateTime;
use tokio::time::Instant;

/// A source of the current wall-clock time.
///
/// 当前挂钟时间的来源。
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> OffsetDateTime;
}

/// The operating system's wall clock.
/// 操作系统挂钟。
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Wall-clock time derived from tokio's monotonic clock, anchored once.
///
/// Later adjustments of the system clock do not move it, and it follows tokio's
/// paused time in tests (`tokio::time::advance`).
///
/// 从 tokio 单调时钟推导的挂钟时间，只锚定一次。
/// 系统时钟之后的调整不会影响它；在测试中它跟随 tokio 的暂停时间。
#[derive(Debug, Clone, Copy)]
pub struct AnchoredClock {
    wall: OffsetDateTime,
    mono: Instant,
}

impl AnchoredClock {
    /// Anchors at the current system time.
    pub fn new() -> Self {
        Self::at(OffsetDateTime::now_utc())
    }

    /// Anchors `wall` to the current tokio instant.
    /// 将 `wall` 锚定到当前的 tokio 时刻。
    pub fn at(wall: OffsetDateTime) -> Self {
        Self {
            wall,
            mono: Instant::now(),
        }
    }
}

impl Default for AnchoredClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for AnchoredClock {
    fn now(&self) -> OffsetDateTime {
        self.wall + self.mono.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use time::macros::datetime;

    #[tokio::test(start_paused = true)]
    async fn test_anchored_clock_follows_paused_time() {
        let clock = AnchoredClock::at(datetime!(2025-01-01 12:00:00 UTC));
        assert_eq!(clock.now(), datetime!(2025-01-01 12:00:00 UTC));

        tokio::time::advance(Duration::from_secs(90)).await;
        assert_eq!(clock.now(), datetime!(2025-01-01 12:01:30 UTC));
    }
}

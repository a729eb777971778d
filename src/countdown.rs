//! 倒计时的纯逻辑部分：过期时间解析、状态和剩余时间格式化。
//! Pure countdown logic: expiry parsing, status and remaining-time formatting.
//!
//! 这些函数不接触显示表面，也不调度任何任务。
//! None of these functions touch the display surface or schedule anything.

pub mod expiry;
pub mod format;
pub mod status;

pub use expiry::{Expiry, parse_expiry};
pub use format::format_remaining;
pub use status::TimerStatus;

#![deny(clippy::expect_used, clippy::unwrap_used)]

//! Live countdown timers for dynamically replaced display fragments.
//! 为动态替换的显示片段提供实时倒计时。
//!
//! A [`registry::TimerRegistry`] keeps exactly one periodic countdown per
//! display target. It is driven by content-replaced notifications
//! ([`notifier::SwapNotifier`]) and writes through a
//! [`surface::DisplaySurface`].

pub mod clock;
pub mod config;
pub mod countdown;
pub mod error;
pub mod fragment;
pub mod notifier;
pub mod registry;
pub mod surface;

mod testing;

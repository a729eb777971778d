//! 倒计时定时器注册表模块
//! Countdown Timer Registry Module
//!
//! 该模块为每个显示目标维护恰好一个活跃的周期性倒计时。注册表本身
//! 是一个普通的同步结构 [`TimerRegistry`]，由单个 tokio 任务
//! （[`RegistryActor`]）独占拥有；周期任务只向该任务投递 `Tick` 命令，
//! 因此所有显示写入都发生在同一个任务上。
//!
//! This module maintains exactly one live periodic countdown per display
//! target. The registry itself is a plain synchronous [`TimerRegistry`],
//! exclusively owned by a single tokio task ([`RegistryActor`]); periodic
//! tasks only post `Tick` commands to that task, so every display write happens
//! on it.

pub mod actor;
pub mod commands;
pub mod core;
pub mod entry;
pub mod handle;
pub mod scan;
pub mod scheduler;


pub use actor::RegistryActor;
pub use commands::{RegistryCommand, RegistryStats};
pub use self::core::{RegisterOutcome, ScanSummary, TickOutcome, TimerRegistry};
pub use entry::{EntryState, TimerEntry};
pub use handle::{RegistryHandle, start_registry};
pub use scan::{CountdownTarget, ScanResult, scan_targets};
pub use scheduler::{TickHandle, TickScheduler, TokioTickScheduler};

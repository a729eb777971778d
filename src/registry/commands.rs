//! 注册表命令定义
//! Registry command definitions
//!
//! 本模块定义了客户端、周期任务与注册表 actor 之间的通信协议，
//! 以及注册表的统计信息。
//!
//! This module defines the communication protocol between clients, periodic
//! tasks and the registry actor, along with the registry statistics.

use super::core::RegisterOutcome;
use crate::countdown::{Expiry, TimerStatus};
use crate::fragment::Element;
use tokio::sync::oneshot;

/// 注册表命令
/// Registry commands
#[derive(Debug)]
pub enum RegistryCommand {
    /// 某个显示区域已被替换
    /// A region of the display was replaced
    ContentReplaced { root: Element },
    /// 显式注册一个倒计时
    /// Register a countdown explicitly
    Register {
        element_id: String,
        expiry: Expiry,
        status: TimerStatus,
        response_tx: oneshot::Sender<RegisterOutcome>,
    },
    /// 周期任务的一次 tick
    /// One tick of a periodic task
    Tick { element_id: String, generation: u64 },
    /// 获取统计信息
    /// Get statistics
    GetStats {
        response_tx: oneshot::Sender<RegistryStats>,
    },
    /// 关闭注册表
    /// Shutdown the registry
    Shutdown,
}

/// 注册表统计信息
/// Registry statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// 映射中的条目数（包括惰性条目）
    /// Entries in the mapping, inert ones included
    pub entries: usize,
    /// 活跃周期任务数
    /// Live periodic tasks
    pub active_timers: usize,
    /// 已执行的注册数
    /// Registrations performed
    pub registrations: u64,
    /// 因重新注册而被取消的任务数
    /// Tasks cancelled because their id was registered again
    pub superseded: u64,
    /// 进入过期状态的条目数
    /// Entries that reached the expired state
    pub expired: u64,
    /// 因节点消失而被拆除的条目数
    /// Entries torn down because their node disappeared
    pub detached: u64,
}

impl std::fmt::Display for RegistryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RegistryStats {{ entries: {}, active: {}, registrations: {}, superseded: {}, expired: {}, detached: {} }}",
            self.entries,
            self.active_timers,
            self.registrations,
            self.superseded,
            self.expired,
            self.detached
        )
    }
}

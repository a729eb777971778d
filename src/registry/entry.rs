//! 注册表条目
//! Registry entry

use super::scheduler::TickHandle;
use crate::countdown::{Expiry, TimerStatus};

/// Lifecycle state of a [`TimerEntry`].
/// [`TimerEntry`] 的生命周期状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// 正在倒计时，持有一个活跃的周期任务
    /// Counting down with one live periodic task
    Counting,
    /// 已渲染终止文本，不再处理 tick
    /// Terminal text rendered, no further ticks processed
    Expired,
    /// 目标节点已从显示表面消失
    /// The target node disappeared from the display surface
    Detached,
}

/// One countdown target known to the registry.
///
/// 注册表已知的一个倒计时目标。
#[derive(Debug)]
pub struct TimerEntry {
    pub(super) element_id: String,
    pub(super) expiry: Expiry,
    pub(super) status: TimerStatus,
    pub(super) generation: u64,
    pub(super) state: EntryState,
    pub(super) handle: Option<TickHandle>,
}

impl TimerEntry {
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn expiry(&self) -> &Expiry {
        &self.expiry
    }

    pub fn status(&self) -> &TimerStatus {
        &self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    /// Whether a periodic task is currently live for this entry.
    /// 该条目当前是否有活跃的周期任务。
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_cancelled())
    }

    /// Cancels the periodic task, if any, and moves to `state`.
    /// Returns whether a live task was cancelled.
    ///
    /// 取消周期任务（如果存在）并转入 `state`。返回是否取消了活跃任务。
    pub(super) fn finish(&mut self, state: EntryState) -> bool {
        self.state = state;
        match self.handle.take() {
            Some(handle) => {
                let was_live = !handle.is_cancelled();
                handle.cancel();
                was_live
            }
            None => false,
        }
    }
}

//! 周期任务调度与取消句柄
//! Periodic task scheduling and cancellation handles

use super::commands::RegistryCommand;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::AbortHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};
use tracing::trace;

/// Handle to one scheduled periodic countdown task.
///
/// Cancelling is synchronous, unconditional and idempotent.
///
/// 一个已调度的周期性倒计时任务的句柄。取消是同步的、无条件的且幂等的。
#[derive(Debug)]
pub struct TickHandle {
    generation: u64,
    cancelled: Arc<AtomicBool>,
    task: Option<AbortHandle>,
}

impl TickHandle {
    /// 创建新的句柄
    /// Create new handle
    pub fn new(generation: u64, cancelled: Arc<AtomicBool>, task: Option<AbortHandle>) -> Self {
        Self {
            generation,
            cancelled,
            task,
        }
    }

    /// The registration generation this task ticks for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 取消周期任务
    /// Cancel the periodic task
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Schedules the repeating tick of a countdown entry.
///
/// 为倒计时条目调度重复的 tick。
pub trait TickScheduler: Send + 'static {
    /// Starts a periodic task that ticks `element_id` for `generation` every
    /// `period`, first firing one `period` from now.
    ///
    /// 启动一个周期任务，每隔 `period` 为 `generation` 对 `element_id`
    /// 触发一次 tick，首次触发在一个 `period` 之后。
    fn schedule(&mut self, element_id: &str, generation: u64, period: Duration) -> TickHandle;
}

/// Spawns one tokio task per countdown; each task posts
/// [`RegistryCommand::Tick`] back to the registry actor.
///
/// The tasks hold only a weak sender, so they never keep the actor alive.
///
/// 为每个倒计时生成一个 tokio 任务；每个任务向注册表 actor 回投
/// [`RegistryCommand::Tick`]。任务只持有弱发送端，不会使 actor 保持存活。
#[derive(Debug, Clone)]
pub struct TokioTickScheduler {
    command_tx: mpsc::WeakSender<RegistryCommand>,
}

impl TokioTickScheduler {
    pub fn new(command_tx: mpsc::WeakSender<RegistryCommand>) -> Self {
        Self { command_tx }
    }
}

impl TickScheduler for TokioTickScheduler {
    fn schedule(&mut self, element_id: &str, generation: u64, period: Duration) -> TickHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();
        let command_tx = self.command_tx.clone();
        let element_id = element_id.to_string();

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            // 剩余时间按挂钟重新计算，错过的 tick 无需补发
            // Remaining time is recomputed from the wall clock, missed ticks need no catch-up
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                if flag.load(Ordering::Acquire) {
                    break;
                }
                let Some(command_tx) = command_tx.upgrade() else {
                    break;
                };
                let command = RegistryCommand::Tick {
                    element_id: element_id.clone(),
                    generation,
                };
                match command_tx.try_send(command) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        trace!(element_id, generation, "Registry busy, skipping tick");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
            }
        });

        TickHandle::new(generation, cancelled, Some(task.abort_handle()))
    }
}

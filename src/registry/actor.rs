//! 注册表 actor
//! Registry actor
//!
//! 单个 tokio 任务独占拥有 [`TimerRegistry`]，按接收顺序处理命令。
//! 因为所有变更都在这个任务上发生，"先取消再启动" 的顺序不会与同一
//! 标识符的其他调用交错。
//!
//! A single tokio task exclusively owns the [`TimerRegistry`] and processes
//! commands in arrival order. Because every mutation happens on this task, the
//! cancel-then-start sequence never interleaves with another call for the same
//! identifier.

use super::commands::RegistryCommand;
use super::core::TimerRegistry;
use super::scheduler::TokioTickScheduler;
use crate::clock::Clock;
use crate::surface::DisplaySurface;
use tokio::sync::mpsc;
use tracing::{info, warn};

pub struct RegistryActor<S, C> {
    registry: TimerRegistry<S, C, TokioTickScheduler>,
    command_rx: mpsc::Receiver<RegistryCommand>,
}

impl<S, C> RegistryActor<S, C>
where
    S: DisplaySurface,
    C: Clock,
{
    pub fn new(
        registry: TimerRegistry<S, C, TokioTickScheduler>,
        command_rx: mpsc::Receiver<RegistryCommand>,
    ) -> Self {
        Self {
            registry,
            command_rx,
        }
    }

    /// 运行 actor 主循环，直到收到关闭命令或所有句柄被丢弃
    /// Run the actor main loop until shutdown or until every handle is dropped
    pub async fn run(mut self) {
        info!("Countdown registry started");

        while let Some(command) = self.command_rx.recv().await {
            if !self.handle_command(command) {
                break;
            }
        }

        let cancelled = self.registry.cancel_all();
        info!(cancelled, stats = %self.registry.stats(), "Countdown registry shutdown completed");
    }

    /// 处理命令
    /// Handle command
    ///
    /// # Returns
    /// 返回false表示应该关闭
    /// Returns false if the actor should shut down
    fn handle_command(&mut self, command: RegistryCommand) -> bool {
        match command {
            RegistryCommand::ContentReplaced { root } => {
                self.registry.on_content_replaced(&root);
            }

            RegistryCommand::Register {
                element_id,
                expiry,
                status,
                response_tx,
            } => {
                let outcome = self.registry.register(&element_id, expiry, status);
                if let Err(outcome) = response_tx.send(outcome) {
                    warn!(element_id, ?outcome, "Failed to send register response");
                }
            }

            RegistryCommand::Tick {
                element_id,
                generation,
            } => {
                self.registry.tick(&element_id, generation);
            }

            RegistryCommand::GetStats { response_tx } => {
                if let Err(err) = response_tx.send(self.registry.stats()) {
                    warn!(error = ?err, "Failed to send stats response");
                }
            }

            RegistryCommand::Shutdown => {
                info!("Received shutdown command");
                return false;
            }
        }

        true
    }
}

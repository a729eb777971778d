//! 注册表句柄
//! Registry handle
//!
//! 本模块包含注册表 actor 的客户端句柄，以及启动 actor 的便捷函数。
//! 句柄同时实现了 [`ContentSwapListener`]，可以直接订阅内容替换通知。
//!
//! This module contains the client handle of the registry actor and a
//! convenient function for starting it. The handle also implements
//! [`ContentSwapListener`], so it can subscribe to content-swap notifications
//! directly.

use super::actor::RegistryActor;
use super::commands::{RegistryCommand, RegistryStats};
use super::core::{RegisterOutcome, TimerRegistry};
use super::scheduler::TokioTickScheduler;
use crate::clock::Clock;
use crate::config::Config;
use crate::countdown::{Expiry, TimerStatus};
use crate::error::{Error, Result};
use crate::fragment::Element;
use crate::notifier::ContentSwapListener;
use crate::surface::DisplaySurface;
use tokio::sync::{
    mpsc::{self, error::TrySendError},
    oneshot,
};
use tracing::{info, warn};

/// Handle to a running registry actor.
///
/// 运行中的注册表 actor 的句柄。
#[derive(Debug, Clone)]
pub struct RegistryHandle {
    command_tx: mpsc::Sender<RegistryCommand>,
}

impl RegistryHandle {
    pub fn new(command_tx: mpsc::Sender<RegistryCommand>) -> Self {
        Self { command_tx }
    }

    /// Queues a content-replaced notification without waiting.
    ///
    /// Never fails into the caller: a full or closed channel is logged and the
    /// notification dropped. Returns whether it was queued.
    ///
    /// 非阻塞地投递内容替换通知。不会向调用方报错：通道已满或已关闭时
    /// 记录日志并丢弃通知。返回是否成功投递。
    pub fn content_replaced(&self, root: Element) -> bool {
        match self.command_tx.try_send(RegistryCommand::ContentReplaced { root }) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!("Registry command channel full, dropping content-replaced notification");
                false
            }
            Err(TrySendError::Closed(_)) => {
                warn!("Registry stopped, dropping content-replaced notification");
                false
            }
        }
    }

    /// 注册倒计时
    /// Register countdown
    pub async fn register(
        &self,
        element_id: impl Into<String>,
        expiry: Expiry,
        status: TimerStatus,
    ) -> Result<RegisterOutcome> {
        let (response_tx, response_rx) = oneshot::channel();

        let command = RegistryCommand::Register {
            element_id: element_id.into(),
            expiry,
            status,
            response_tx,
        };

        self.command_tx
            .send(command)
            .await
            .map_err(|_| Error::ChannelClosed)?;

        response_rx.await.map_err(|_| Error::RegistryShutdown)
    }

    /// 获取统计信息
    /// Get statistics
    pub async fn stats(&self) -> Result<RegistryStats> {
        let (response_tx, response_rx) = oneshot::channel();

        self.command_tx
            .send(RegistryCommand::GetStats { response_tx })
            .await
            .map_err(|_| Error::ChannelClosed)?;

        response_rx.await.map_err(|_| Error::RegistryShutdown)
    }

    /// 关闭注册表，取消所有周期任务
    /// Shutdown the registry, cancelling every periodic task
    pub async fn shutdown(&self) -> Result<()> {
        self.command_tx
            .send(RegistryCommand::Shutdown)
            .await
            .map_err(|_| Error::ChannelClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.command_tx.is_closed()
    }
}

impl ContentSwapListener for RegistryHandle {
    fn on_content_replaced(&self, root: &Element) {
        self.content_replaced(root.clone());
    }
}

/// 启动注册表 actor
/// Start the registry actor
pub fn start_registry<S, C>(surface: S, clock: C, config: Config) -> RegistryHandle
where
    S: DisplaySurface,
    C: Clock,
{
    let (command_tx, command_rx) = mpsc::channel(config.command_buffer_size);
    let scheduler = TokioTickScheduler::new(command_tx.downgrade());
    let registry = TimerRegistry::new(surface, clock, scheduler, config);
    let actor = RegistryActor::new(registry, command_rx);

    tokio::spawn(actor.run());

    info!("Countdown registry task spawned");
    RegistryHandle::new(command_tx)
}

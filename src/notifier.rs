//! 内容替换通知器
//! Content-swap notifier
//!
//! 宿主在完成一次局部替换后调用 [`SwapNotifier::notify`]，
//! 所有订阅者按订阅顺序收到被替换的子树。订阅是进程级的，没有取消订阅。
//!
//! The host calls [`SwapNotifier::notify`] after finishing a partial swap and
//! every subscriber receives the replaced subtree in subscription order.
//! Subscriptions are process-wide; there is no unsubscribe.

use crate::fragment::Element;
use tracing::trace;

/// Receives content-replaced notifications.
///
/// Implementations must not block or panic: they run inside the host's event
/// dispatch.
///
/// 接收内容替换通知。实现不得阻塞或 panic：它们运行在宿主的事件分发中。
pub trait ContentSwapListener: Send + Sync {
    fn on_content_replaced(&self, root: &Element);
}

/// Host-side event source for replaced display regions.
/// 宿主侧的显示区域替换事件源。
#[derive(Default)]
pub struct SwapNotifier {
    listeners: Vec<Box<dyn ContentSwapListener>>,
}

impl SwapNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl ContentSwapListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Delivers `root` to every listener.
    pub fn notify(&self, root: &Element) {
        trace!(listeners = self.listeners.len(), "Dispatching content-replaced notification");
        for listener in &self.listeners {
            listener.on_content_replaced(root);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for SwapNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorder {
        seen: Arc<Mutex<Vec<Option<String>>>>,
    }

    impl ContentSwapListener for Recorder {
        fn on_content_replaced(&self, root: &Element) {
            self.seen.lock().unwrap().push(root.id().map(str::to_string));
        }
    }

    #[test]
    fn test_notify_reaches_every_listener() {
        let first = Recorder::default();
        let second = Recorder::default();
        let mut notifier = SwapNotifier::new();
        notifier.subscribe(first.clone());
        notifier.subscribe(second.clone());

        notifier.notify(&Element::with_id("card-1"));
        notifier.notify(&Element::with_id("card-2"));

        let expected = vec![Some("card-1".to_string()), Some("card-2".to_string())];
        assert_eq!(*first.seen.lock().unwrap(), expected);
        assert_eq!(*second.seen.lock().unwrap(), expected);
        assert_eq!(notifier.listener_count(), 2);
    }
}

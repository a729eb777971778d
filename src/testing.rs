//! 测试辅助工具模块
//! Test utilities module

#![cfg(test)]

use crate::clock::Clock;
use crate::registry::{TickHandle, TickScheduler};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use time::OffsetDateTime;

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<OffsetDateTime>>,
}

impl ManualClock {
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock().unwrap()
    }
}

/// A scheduled task as seen by [`RecordingScheduler`].
#[derive(Debug, Clone)]
pub struct ScheduledTick {
    pub element_id: String,
    pub generation: u64,
    pub period: Duration,
    cancelled: Arc<AtomicBool>,
}

impl ScheduledTick {
    pub fn is_live(&self) -> bool {
        !self.cancelled.load(Ordering::Acquire)
    }
}

/// Records every schedule instead of spawning, so tests drive ticks by hand.
#[derive(Debug, Clone, Default)]
pub struct RecordingScheduler {
    scheduled: Arc<Mutex<Vec<ScheduledTick>>>,
}

impl RecordingScheduler {
    pub fn scheduled(&self) -> Vec<ScheduledTick> {
        self.scheduled.lock().unwrap().clone()
    }

    /// Live tasks targeting `element_id`.
    pub fn live_for(&self, element_id: &str) -> usize {
        self.scheduled
            .lock()
            .unwrap()
            .iter()
            .filter(|tick| tick.element_id == element_id && tick.is_live())
            .count()
    }

    pub fn live(&self) -> usize {
        self.scheduled
            .lock()
            .unwrap()
            .iter()
            .filter(|tick| tick.is_live())
            .count()
    }
}

impl TickScheduler for RecordingScheduler {
    fn schedule(&mut self, element_id: &str, generation: u64, period: Duration) -> TickHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.scheduled.lock().unwrap().push(ScheduledTick {
            element_id: element_id.to_string(),
            generation,
            period,
            cancelled: cancelled.clone(),
        });
        TickHandle::new(generation, cancelled, None)
    }
}

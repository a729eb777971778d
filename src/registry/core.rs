//! 倒计时注册表核心实现
//! Countdown registry core implementation
//!
//! 本模块包含注册表的同步核心：注册、tick 处理和内容替换扫描。
//! 它不自己运行任何东西，调度交给 [`TickScheduler`]，时间来自 [`Clock`]，
//! 显示写入通过 [`DisplaySurface`]。
//!
//! This module contains the synchronous core of the registry: registration,
//! tick processing and content-replaced scanning. It runs nothing by itself;
//! scheduling goes through a [`TickScheduler`], time comes from a [`Clock`]
//! and display writes go through a [`DisplaySurface`].

use super::commands::RegistryStats;
use super::entry::{EntryState, TimerEntry};
use super::scan::scan_targets;
use super::scheduler::TickScheduler;
use crate::clock::Clock;
use crate::config::Config;
use crate::countdown::{Expiry, TimerStatus, format_remaining};
use crate::fragment::Element;
use crate::surface::DisplaySurface;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, trace};

/// Result of [`TimerRegistry::register`].
/// [`TimerRegistry::register`] 的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// 倒计时已启动
    /// Countdown started
    Started { generation: u64 },
    /// 过期时间已过或无效，已写入终止文本，没有调度任务
    /// Expiry passed or invalid, terminal text written, nothing scheduled
    Expired,
    /// 资源仍在开通中，未做任何操作
    /// Resource still provisioning, nothing done
    Provisioning,
    /// 目标节点不在显示表面上，未做任何操作
    /// Target node not on the display surface, nothing done
    MissingNode,
}

/// Result of [`TimerRegistry::tick`].
/// [`TimerRegistry::tick`] 的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// 已渲染新的剩余时间
    /// New remaining time rendered
    Rendered(Duration),
    /// 倒计时刚刚归零，任务已取消
    /// Countdown just reached zero, task cancelled
    Expired,
    /// 节点已消失，任务已取消
    /// Node vanished, task cancelled
    Detached,
    /// 条目已处于终止状态，什么也没写
    /// Entry already terminal, nothing written
    Inert,
    /// tick 来自已被取代的注册，被丢弃
    /// Tick belongs to a superseded registration and was dropped
    Stale,
}

/// Summary of one [`TimerRegistry::on_content_replaced`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Fully specified targets found.
    pub matched: usize,
    /// Prefixed nodes without expiry or status.
    pub skipped: usize,
    /// Targets that got a live countdown.
    pub started: usize,
}

/// The per-element countdown registry.
///
/// 按元素管理的倒计时注册表。
pub struct TimerRegistry<S, C, T> {
    surface: S,
    clock: C,
    scheduler: T,
    config: Config,
    entries: HashMap<String, TimerEntry>,
    next_generation: u64,
    stats: RegistryStats,
}

impl<S, C, T> TimerRegistry<S, C, T>
where
    S: DisplaySurface,
    C: Clock,
    T: TickScheduler,
{
    /// 创建新的注册表
    /// Create new registry
    pub fn new(surface: S, clock: C, scheduler: T, config: Config) -> Self {
        Self {
            surface,
            clock,
            scheduler,
            config,
            entries: HashMap::new(),
            next_generation: 1,
            stats: RegistryStats::default(),
        }
    }

    /// Starts or refreshes the countdown bound to `element_id`.
    ///
    /// Missing nodes and provisioning resources are no-ops that leave any
    /// prior timer untouched. Otherwise the previous task is cancelled before
    /// anything else, the remaining time is rendered immediately and a new
    /// periodic task is scheduled unless the expiry already passed.
    ///
    /// 启动或刷新绑定到 `element_id` 的倒计时。
    /// 节点缺失或资源仍在开通时不做任何操作，也不影响已有的定时器。
    /// 否则先取消旧任务，立即渲染剩余时间，并在未过期时调度新的周期任务。
    pub fn register(&mut self, element_id: &str, expiry: Expiry, status: TimerStatus) -> RegisterOutcome {
        let Some(node) = self.surface.node(element_id) else {
            debug!(element_id, "Countdown target not on display, ignoring");
            return RegisterOutcome::MissingNode;
        };
        if status.is_provisioning() {
            debug!(element_id, "Countdown target still provisioning, ignoring");
            return RegisterOutcome::Provisioning;
        }

        // 必须先取消旧任务，再调度新任务
        // The old task must be cancelled before the new one is scheduled
        if let Some(previous) = self.entries.get_mut(element_id) {
            if previous.finish(EntryState::Expired) {
                self.stats.superseded += 1;
                trace!(element_id, generation = previous.generation, "Superseded countdown cancelled");
            }
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        self.stats.registrations += 1;

        let (state, handle, outcome) = match expiry.remaining(self.clock.now()) {
            Some(remaining) => {
                self.surface.set_text(&node, &format_remaining(remaining));
                let handle = self
                    .scheduler
                    .schedule(element_id, generation, self.config.tick_interval);
                (EntryState::Counting, Some(handle), RegisterOutcome::Started { generation })
            }
            None => {
                self.surface.set_text(&node, &self.config.expired_text);
                self.stats.expired += 1;
                (EntryState::Expired, None, RegisterOutcome::Expired)
            }
        };

        debug!(element_id, generation, %status, ?outcome, "Countdown registered");

        self.entries.insert(
            element_id.to_string(),
            TimerEntry {
                element_id: element_id.to_string(),
                expiry,
                status,
                generation,
                state,
                handle,
            },
        );
        outcome
    }

    /// Processes one tick of the periodic task registered as `generation`.
    ///
    /// The remaining time is recomputed from the clock on every tick, so missed
    /// or delayed ticks cause no drift. Once terminal, further ticks write
    /// nothing.
    ///
    /// 处理以 `generation` 注册的周期任务的一次 tick。
    /// 每次 tick 都根据时钟重新计算剩余时间，错过或延迟的 tick 不会造成漂移。
    /// 进入终止状态后，后续 tick 不再写入任何内容。
    pub fn tick(&mut self, element_id: &str, generation: u64) -> TickOutcome {
        let Some(entry) = self.entries.get_mut(element_id) else {
            return TickOutcome::Stale;
        };
        if entry.generation != generation {
            trace!(element_id, generation, current = entry.generation, "Dropping stale tick");
            return TickOutcome::Stale;
        }
        if entry.state != EntryState::Counting {
            return TickOutcome::Inert;
        }

        let Some(node) = self.surface.node(element_id) else {
            entry.finish(EntryState::Detached);
            self.stats.detached += 1;
            debug!(element_id, generation, "Countdown target vanished, cancelling");
            return TickOutcome::Detached;
        };

        match entry.expiry.remaining(self.clock.now()) {
            Some(remaining) => {
                self.surface.set_text(&node, &format_remaining(remaining));
                trace!(element_id, remaining_secs = remaining.as_secs(), "Countdown tick");
                TickOutcome::Rendered(remaining)
            }
            None => {
                self.surface.set_text(&node, &self.config.expired_text);
                entry.finish(EntryState::Expired);
                self.stats.expired += 1;
                debug!(element_id, generation, "Countdown expired");
                TickOutcome::Expired
            }
        }
    }

    /// Scans a replaced fragment and (re)registers every countdown target in
    /// document order. Scanning the same fragment twice leaves one live task
    /// per id.
    ///
    /// 扫描被替换的片段，并按文档顺序（重新）注册每个倒计时目标。
    /// 重复扫描同一片段后，每个标识符仍只有一个活跃任务。
    pub fn on_content_replaced(&mut self, root: &Element) -> ScanSummary {
        let scan = scan_targets(root, &self.config.scan);
        let mut summary = ScanSummary {
            matched: scan.targets.len(),
            skipped: scan.skipped,
            started: 0,
        };

        for target in scan.targets {
            let outcome = self.register(
                target.element_id,
                Expiry::parse(target.expiry),
                TimerStatus::from(target.status),
            );
            if matches!(outcome, RegisterOutcome::Started { .. }) {
                summary.started += 1;
            }
        }

        debug!(?summary, "Content replaced");
        summary
    }

    /// Cancels every live task. Entries stay in place, inert.
    /// 取消所有活跃任务。条目保留为惰性状态。
    pub fn cancel_all(&mut self) -> usize {
        self.entries
            .values_mut()
            .filter(|entry| entry.state == EntryState::Counting)
            .map(|entry| entry.finish(EntryState::Expired))
            .filter(|cancelled| *cancelled)
            .count()
    }

    pub fn entry(&self, element_id: &str) -> Option<&TimerEntry> {
        self.entries.get(element_id)
    }

    /// Number of entries with a live periodic task.
    /// 拥有活跃周期任务的条目数。
    pub fn active_timers(&self) -> usize {
        self.entries.values().filter(|entry| entry.is_active()).count()
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            entries: self.entries.len(),
            active_timers: self.active_timers(),
            ..self.stats.clone()
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

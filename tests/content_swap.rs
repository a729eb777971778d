//! 内容替换通知集成测试
//! Content-swap notification integration tests

pub mod common;

use common::harness::{START, TestHarness, countdown};
use countdown_registry::{
    countdown::{Expiry, TimerStatus},
    fragment::Element,
};
use futures::future::join_all;
use tokio::time::{Duration, sleep};

#[tokio::test(start_paused = true)]
async fn test_swap_rebinds_fresh_data() {
    let harness = TestHarness::new();

    harness
        .swap_in(&Element::with_id("card-1").child(countdown("countdown-1", 60, "active")))
        .await;
    // 宿主用新的过期时间重新渲染了同一张卡片
    // The host re-rendered the same card with a fresh expiry
    harness
        .swap_in(&Element::with_id("card-1").child(countdown("countdown-1", 7200, "active")))
        .await;

    sleep(Duration::from_millis(1500)).await;

    assert_eq!(
        harness.surface.writes("countdown-1"),
        vec!["0h 01m 00s", "2h 00m 00s", "1h 59m 59s"]
    );
    assert_eq!(harness.handle.stats().await.unwrap().active_timers, 1);
}

#[tokio::test(start_paused = true)]
async fn test_swap_only_touches_targets_in_fragment() {
    let harness = TestHarness::new();

    harness
        .swap_in(&Element::with_id("card-1").child(countdown("countdown-1", 60, "active")))
        .await;
    harness
        .swap_in(&Element::with_id("card-2").child(countdown("countdown-2", 30, "active")))
        .await;

    let stats = harness.handle.stats().await.unwrap();
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.active_timers, 2);
    assert_eq!(stats.superseded, 0);
}

#[tokio::test(start_paused = true)]
async fn test_nodes_without_metadata_are_ignored() {
    let harness = TestHarness::new();
    let fragment = Element::new()
        .child(Element::with_id("countdown-1").attr("data-status", "active"))
        .child(Element::with_id("countdown-2"))
        .child(Element::with_id("server-3").attr("data-expires-at", "2030-01-01T00:00:00Z"));

    harness.swap_in(&fragment).await;

    assert!(harness.surface.writes("countdown-1").is_empty());
    assert!(harness.surface.writes("countdown-2").is_empty());
    assert_eq!(harness.handle.stats().await.unwrap().entries, 0);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_registrations_for_one_id() {
    let harness = TestHarness::new();
    harness.surface.insert("countdown-1");

    let handles: Vec<_> = (0..8).map(|_| harness.handle.clone()).collect();
    let outcomes = join_all(handles.iter().enumerate().map(|(i, handle)| {
        handle.register(
            "countdown-1",
            Expiry::from(START + time::Duration::minutes(i as i64 + 1)),
            TimerStatus::from("active"),
        )
    }))
    .await;

    assert!(outcomes.iter().all(Result::is_ok));

    let stats = harness.handle.stats().await.unwrap();
    assert_eq!(stats.active_timers, 1);
    assert_eq!(stats.registrations, 8);
    assert_eq!(stats.superseded, 7);
}

#[tokio::test(start_paused = true)]
async fn test_notification_after_shutdown_is_dropped() {
    let harness = TestHarness::new();
    harness.handle.shutdown().await.unwrap();
    harness.handle.stats().await.unwrap_err();

    let fragment = Element::new().child(countdown("countdown-1", 60, "active"));
    harness.surface.mount(&fragment);

    // 不能向宿主抛出错误
    // Must not fail into the host
    harness.notifier.notify(&fragment);
    assert!(!harness.handle.content_replaced(fragment));
    assert!(harness.surface.writes("countdown-1").is_empty());
}

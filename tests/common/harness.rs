//! tests/common/harness.rs
use countdown_registry::{
    clock::AnchoredClock,
    config::Config,
    fragment::Element,
    notifier::SwapNotifier,
    registry::{RegistryHandle, start_registry},
    surface::MemorySurface,
};
use std::sync::{Arc, Once};
use time::OffsetDateTime;
use time::macros::datetime;

/// Wall-clock time every harness is anchored at.
pub const START: OffsetDateTime = datetime!(2025-06-01 12:00:00 UTC);

/// Initializes tracing for tests, ensuring it's only done once.
pub fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "countdown_registry=debug".to_string());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// A running registry subscribed to a notifier, writing to an in-memory surface.
///
/// Must be created inside a runtime with paused time so the anchored clock and
/// the tick tasks move together.
pub struct TestHarness {
    pub surface: Arc<MemorySurface>,
    pub handle: RegistryHandle,
    pub notifier: SwapNotifier,
}

impl TestHarness {
    pub fn new() -> Self {
        init_tracing();

        let surface = Arc::new(MemorySurface::new());
        let handle = start_registry(
            surface.clone(),
            AnchoredClock::at(START),
            Config::default(),
        );
        let mut notifier = SwapNotifier::new();
        notifier.subscribe(handle.clone());

        Self {
            surface,
            handle,
            notifier,
        }
    }

    /// Mounts `fragment` on the surface and notifies the registry, the way a
    /// host finishes a partial swap. Waits until the registry processed it.
    pub async fn swap_in(&self, fragment: &Element) {
        self.surface.mount(fragment);
        self.notifier.notify(fragment);
        self.handle.stats().await.unwrap();
    }
}

/// A countdown node expiring `secs` seconds after [`START`].
pub fn countdown(id: &str, secs: i64, status: &str) -> Element {
    let expiry = START + time::Duration::seconds(secs);
    Element::with_id(id)
        .attr(
            "data-expires-at",
            expiry
                .format(&time::format_description::well_known::Rfc3339)
                .unwrap(),
        )
        .attr("data-status", status)
}

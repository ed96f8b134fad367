//! Bus diagnostics.

use park_domain::events::{KeyPressed, KeyReleased, MouseClick, MouseMoved, WindowResized};
use park_event_bus::{Event, EventBus, SubscriptionHandle};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

/// Logs every input and window event that crosses the bus.
///
/// The logger owns one [`SubscriptionHandle`] per event type, so dropping it
/// (or calling [`EventLogger::detach`]) stops all logging at once. It does not
/// keep the bus alive.
#[derive(Debug)]
pub struct EventLogger {
    subscriptions: Vec<SubscriptionHandle>,
    observed: Arc<AtomicU64>,
}

impl EventLogger {
    /// Subscribes to all known input and window events on `bus`.
    #[must_use = "dropping the EventLogger immediately detaches it from the bus"]
    pub fn attach(bus: &EventBus) -> Self {
        let observed = Arc::new(AtomicU64::new(0));

        let subscriptions = vec![
            watch(bus, &observed, |e: &KeyPressed| debug!(key = e.key, "Key pressed")),
            watch(bus, &observed, |e: &KeyReleased| debug!(key = e.key, "Key released")),
            watch(bus, &observed, |e: &MouseMoved| {
                trace!(x = e.position.x, y = e.position.y, "Mouse moved");
            }),
            watch(bus, &observed, |e: &MouseClick| {
                debug!(
                    button = e.button,
                    x = e.position.x,
                    y = e.position.y,
                    down = e.down,
                    "Mouse button {}",
                    if e.down { "pressed" } else { "released" }
                );
            }),
            watch(bus, &observed, |e: &WindowResized| {
                debug!(width = e.width, height = e.height, "Window resized");
            }),
        ];

        Self { subscriptions, observed }
    }

    /// Number of events observed since attaching.
    #[must_use]
    pub fn observed(&self) -> u64 {
        self.observed.load(Ordering::Relaxed)
    }

    /// Returns `true` while the logger is still subscribed.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscriptions.iter().any(SubscriptionHandle::is_active)
    }

    /// Releases every subscription now. Idempotent.
    pub fn detach(&mut self) {
        if !self.subscriptions.is_empty() {
            debug!(subscriptions = self.subscriptions.len(), "Event logger detached");
        }
        self.subscriptions.clear();
    }
}

fn watch<T: Event>(
    bus: &EventBus,
    observed: &Arc<AtomicU64>,
    log: fn(&T),
) -> SubscriptionHandle {
    let observed = observed.clone();
    bus.subscribe(move |event: &T| {
        observed.fetch_add(1, Ordering::Relaxed);
        log(event);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_domain::events::Vec2;

    #[test]
    fn counts_every_supported_event() {
        let bus = EventBus::new();
        let logger = EventLogger::attach(&bus);

        bus.publish(KeyPressed { key: 32 });
        bus.publish(KeyReleased { key: 32 });
        bus.publish(MouseMoved { position: Vec2::new(1.0, 2.0) });
        bus.publish(MouseClick { button: 0, position: Vec2::default(), down: true });
        bus.publish(WindowResized { width: 800, height: 600 });

        assert_eq!(logger.observed(), 5);
        assert_eq!(bus.event_type_count(), 5);
    }

    #[test]
    fn ignores_unrelated_events() {
        struct Unrelated;

        let bus = EventBus::new();
        let logger = EventLogger::attach(&bus);
        assert_eq!(bus.publish(Unrelated), 0);
        assert_eq!(logger.observed(), 0);
    }

    #[test]
    fn detach_and_drop_release_subscriptions() {
        let bus = EventBus::new();
        let mut logger = EventLogger::attach(&bus);
        assert!(logger.is_attached());

        logger.detach();
        logger.detach();
        assert!(!logger.is_attached());
        assert!(bus.is_empty());

        let other = EventLogger::attach(&bus);
        drop(other);
        assert!(bus.is_empty());
    }

    #[test]
    fn outliving_the_bus_is_harmless() {
        let bus = EventBus::new();
        let logger = EventLogger::attach(&bus);
        drop(bus);
        assert!(!logger.is_attached());
        drop(logger);
    }
}

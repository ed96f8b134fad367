use crate::registry::Registry;
use crate::subscription::SubscriptionHandle;
use parking_lot::RwLock;
use std::any::{Any, TypeId, type_name};
use std::sync::Arc;
use tracing::{trace, warn};

/// Marker trait for types that can be published on the [`EventBus`].
///
/// Any type that is `Send + Sync + 'static` automatically implements this trait.
pub trait Event: Any + Send + Sync + 'static {}
impl<T: Any + Send + Sync + 'static> Event for T {}

/// A synchronous, thread-safe Event Bus.
///
/// Callbacks are indexed by the [`TypeId`] of the event they accept. Cloning the
/// bus is cheap and every clone shares the same registry; the registry is torn
/// down when the last clone is dropped.
///
/// # Concurrency
/// * [`EventBus::publish`] takes the read lock only long enough to copy the
///   list of callbacks, then dispatches outside of any lock. Publishers on
///   different threads never wait on each other's callbacks.
/// * [`EventBus::subscribe`] and releasing a [`SubscriptionHandle`] take the
///   write lock. Both are safe to call from inside a callback.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    registry: Arc<RwLock<Registry>>,
}

impl EventBus {
    /// Creates a new, empty `EventBus`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for events of type `T`.
    ///
    /// The callback stays registered for as long as the returned
    /// [`SubscriptionHandle`] is alive. Callbacks registered while a publish of
    /// `T` is in progress only see subsequent publishes.
    ///
    /// # Examples
    /// ```rust
    /// use park_event_bus::EventBus;
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicU32, Ordering};
    ///
    /// struct Tick(u32);
    ///
    /// let bus = EventBus::new();
    /// let total = Arc::new(AtomicU32::new(0));
    /// let sink = total.clone();
    /// let _handle = bus.subscribe(move |tick: &Tick| {
    ///     sink.fetch_add(tick.0, Ordering::Relaxed);
    /// });
    ///
    /// bus.publish(Tick(2));
    /// bus.publish(Tick(3));
    /// assert_eq!(total.load(Ordering::Relaxed), 5);
    /// ```
    pub fn subscribe<T, F>(&self, callback: F) -> SubscriptionHandle
    where
        T: Event,
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.registry.write().insert::<T>(Box::new(callback));
        trace!(event = type_name::<T>(), %id, "Subscriber registered");

        SubscriptionHandle::new(Arc::downgrade(&self.registry), TypeId::of::<T>(), type_name::<T>(), id)
    }

    /// Publishes `event` to every callback registered for exactly `T`.
    ///
    /// Returns the number of callbacks that were invoked. Publishing a type
    /// nobody listens to is a cheap no-op returning `0`.
    ///
    /// # Examples
    /// ```rust
    /// use park_event_bus::EventBus;
    ///
    /// struct Ping;
    ///
    /// let bus = EventBus::new();
    /// assert_eq!(bus.publish(Ping), 0);
    ///
    /// let _handle = bus.subscribe(|_: &Ping| {});
    /// assert_eq!(bus.publish(Ping), 1);
    /// ```
    pub fn publish<T: Event>(&self, event: T) -> usize {
        self.publish_ref(&event)
    }

    /// Publishes a borrowed event without taking ownership of it.
    ///
    /// Dispatch happens on the calling thread, in subscription order, against a
    /// snapshot taken before the first callback runs. Callbacks removed during
    /// dispatch still complete this round; callbacks added during dispatch do not
    /// take part in it.
    pub fn publish_ref<T: Event>(&self, event: &T) -> usize {
        let snapshot = {
            let registry = self.registry.read();
            registry.snapshot(TypeId::of::<T>())
        };

        let Some(snapshot) = snapshot else {
            trace!(event = type_name::<T>(), "Event dropped: no active subscribers");
            return 0;
        };

        let mut delivered = 0;
        for registration in &snapshot {
            if registration.invoke(event) {
                delivered += 1;
            } else {
                warn!(
                    event = type_name::<T>(),
                    id = %registration.id(),
                    "Registration does not accept the published event type"
                );
            }
        }

        trace!(event = type_name::<T>(), count = delivered, "Event dispatched");
        delivered
    }

    /// Returns the number of callbacks currently registered for `T`.
    #[must_use]
    pub fn listener_count<T: Event>(&self) -> usize {
        self.registry.read().listener_count(TypeId::of::<T>())
    }

    /// Returns the number of distinct event types with at least one callback.
    #[must_use]
    pub fn event_type_count(&self) -> usize {
        self.registry.read().type_count()
    }

    /// Returns `true` when no callback is registered for any event type.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.event_type_count() == 0
    }

    /// Detaches every callback from the bus.
    ///
    /// Outstanding [`SubscriptionHandle`]s stay valid values; releasing them
    /// afterwards is a no-op. Returns the number of event types that were cleared.
    #[must_use]
    pub fn clear(&self) -> usize {
        let drained = {
            let mut registry = self.registry.write();
            registry.drain()
        };

        let count = drained.len();
        trace!(event_types = count, "Event bus cleared");
        count
    }
}

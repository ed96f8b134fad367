use crate::registry::{Registry, SubscriptionId};
use parking_lot::RwLock;
use std::any::TypeId;
use std::sync::Weak;
use tracing::trace;

#[derive(Debug)]
struct Binding {
    registry: Weak<RwLock<Registry>>,
    key: TypeId,
    event: &'static str,
    id: SubscriptionId,
}

/// RAII token for one registration on an [`EventBus`](crate::EventBus).
///
/// The callback stays registered while the handle is alive. Dropping the handle,
/// or calling [`SubscriptionHandle::release`], unsubscribes it. The handle holds
/// only a weak reference to the bus, so it never keeps the bus alive and
/// releasing after the bus is gone is a no-op.
///
/// Handles cannot be cloned: there is exactly one owner of each unsubscribe
/// right. Moving a handle transfers that right; assigning over a live handle
/// drops, and therefore releases, the previous value.
///
/// The [`Default`] value is an already-released handle, useful as a placeholder
/// in structs that subscribe later.
#[derive(Debug, Default)]
#[must_use = "dropping a SubscriptionHandle immediately unsubscribes its callback"]
pub struct SubscriptionHandle {
    binding: Option<Binding>,
}

impl SubscriptionHandle {
    pub(crate) const fn new(
        registry: Weak<RwLock<Registry>>,
        key: TypeId,
        event: &'static str,
        id: SubscriptionId,
    ) -> Self {
        Self { binding: Some(Binding { registry, key, event, id }) }
    }

    /// Unsubscribes the callback now instead of waiting for the drop.
    ///
    /// Idempotent: the first call gives up the unsubscribe right, any further
    /// call does nothing.
    pub fn release(&mut self) {
        let Some(binding) = self.binding.take() else {
            return;
        };

        let Some(registry) = binding.registry.upgrade() else {
            trace!(event = binding.event, id = %binding.id, "Event bus already dropped");
            return;
        };

        let removed = {
            let mut registry = registry.write();
            registry.remove(binding.key, binding.id)
        };
        trace!(
            event = binding.event,
            id = %binding.id,
            removed = removed.is_some(),
            "Subscriber released"
        );

        // Dropped outside the lock: the callback may own handles of its own.
        drop(removed);
    }

    /// Returns `true` while the callback is still registered on a live bus.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.binding.as_ref().is_some_and(|binding| {
            binding
                .registry
                .upgrade()
                .is_some_and(|registry| registry.read().contains(binding.key, binding.id))
        })
    }

    /// Returns the registration id, or `None` once the handle was released.
    #[must_use]
    pub fn id(&self) -> Option<SubscriptionId> {
        self.binding.as_ref().map(|binding| binding.id)
    }

    /// Returns the type name of the subscribed event, or `None` once released.
    #[must_use]
    pub fn event_name(&self) -> Option<&'static str> {
        self.binding.as_ref().map(|binding| binding.event)
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use crate::EventBus;

    struct Ping;

    #[test]
    fn default_handle_is_released() {
        let mut handle = super::SubscriptionHandle::default();
        assert!(!handle.is_active());
        assert!(handle.id().is_none());
        handle.release();
    }

    #[test]
    fn release_is_idempotent() {
        let bus = EventBus::new();
        let mut handle = bus.subscribe(|_: &Ping| {});
        let _other = bus.subscribe(|_: &Ping| {});

        handle.release();
        handle.release();
        drop(handle);

        assert_eq!(bus.listener_count::<Ping>(), 1);
    }

    #[test]
    fn handle_reports_id_and_event_name() {
        let bus = EventBus::new();
        let mut handle = bus.subscribe(|_: &Ping| {});

        assert!(handle.is_active());
        assert_eq!(handle.id().map(super::SubscriptionId::get), Some(1));
        assert!(handle.event_name().is_some_and(|name| name.ends_with("Ping")));

        handle.release();
        assert!(handle.event_name().is_none());
    }

    #[test]
    fn handle_outliving_bus_is_harmless() {
        let bus = EventBus::new();
        let mut handle = bus.subscribe(|_: &Ping| {});
        drop(bus);

        assert!(!handle.is_active());
        assert!(handle.id().is_some());
        handle.release();
        assert!(handle.id().is_none());
    }

    #[test]
    fn assigning_over_a_handle_releases_the_old_one() {
        let bus = EventBus::new();
        let mut handle = bus.subscribe(|_: &Ping| {});
        let first = handle.id();

        handle = bus.subscribe(|_: &Ping| {});
        assert_eq!(bus.listener_count::<Ping>(), 1);
        assert_ne!(handle.id(), first);
    }

    #[test]
    fn moving_a_handle_keeps_a_single_owner() {
        let bus = EventBus::new();
        let handle = bus.subscribe(|_: &Ping| {});
        let mut holder = Vec::new();
        holder.push(handle);

        assert_eq!(bus.listener_count::<Ping>(), 1);
        holder.clear();
        assert_eq!(bus.listener_count::<Ping>(), 0);
    }
}

use crate::bus::Event;
use fxhash::FxHashMap;
use std::any::{Any, TypeId};
use std::fmt;
use std::num::NonZeroU64;
use std::sync::Arc;

/// Identifier of a single registration on an [`EventBus`](crate::EventBus).
///
/// Ids are assigned monotonically starting from `1` and are never reused for
/// the lifetime of the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(NonZeroU64);

impl SubscriptionId {
    /// Returns the raw numeric value of this id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Strongly-typed callback as stored behind the type-erased registration.
pub(crate) type Callback<T> = Box<dyn Fn(&T) + Send + Sync>;

/// One active callback. Shared between the registry and any in-flight
/// publish snapshot, so it outlives removal while it is still being invoked.
#[derive(Debug)]
pub(crate) struct Registration {
    id: SubscriptionId,
    callback: Box<dyn Any + Send + Sync>,
}

impl Registration {
    fn new<T: Event>(id: SubscriptionId, callback: Callback<T>) -> Self {
        Self { id, callback: Box::new(callback) }
    }

    pub(crate) const fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Invokes the callback with `event`.
    ///
    /// Returns `false` if the stored callback does not accept `T`, which means
    /// the registration was filed under the wrong key.
    pub(crate) fn invoke<T: Event>(&self, event: &T) -> bool {
        self.callback.downcast_ref::<Callback<T>>().map(|callback| callback(event)).is_some()
    }
}

/// Event type key -> registrations, in subscription order.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    issued: u64,
    listeners: FxHashMap<TypeId, Vec<Arc<Registration>>>,
}

impl Registry {
    pub(crate) fn insert<T: Event>(&mut self, callback: Callback<T>) -> SubscriptionId {
        let id = SubscriptionId(NonZeroU64::MIN.saturating_add(self.issued));
        self.issued += 1;

        self.listeners
            .entry(TypeId::of::<T>())
            .or_default()
            .push(Arc::new(Registration::new(id, callback)));
        id
    }

    /// Copies the shared references registered for `key`.
    ///
    /// Returns `None` when nothing is registered, so the caller can skip
    /// dispatch without allocating.
    pub(crate) fn snapshot(&self, key: TypeId) -> Option<Vec<Arc<Registration>>> {
        self.listeners.get(&key).filter(|listeners| !listeners.is_empty()).cloned()
    }

    /// Removes the registration `id` filed under `key`, dropping the map entry
    /// once the last registration for that type is gone.
    ///
    /// The removed registration is handed back so the caller can drop it after
    /// releasing the lock: its callback may own other handles whose release
    /// needs the lock again.
    pub(crate) fn remove(&mut self, key: TypeId, id: SubscriptionId) -> Option<Arc<Registration>> {
        let listeners = self.listeners.get_mut(&key)?;
        let removed = listeners
            .iter()
            .position(|registration| registration.id() == id)
            .map(|index| listeners.remove(index));

        if listeners.is_empty() {
            self.listeners.remove(&key);
        }
        removed
    }

    pub(crate) fn contains(&self, key: TypeId, id: SubscriptionId) -> bool {
        self.listeners
            .get(&key)
            .is_some_and(|listeners| listeners.iter().any(|registration| registration.id() == id))
    }

    pub(crate) fn listener_count(&self, key: TypeId) -> usize {
        self.listeners.get(&key).map_or(0, Vec::len)
    }

    pub(crate) fn type_count(&self) -> usize {
        self.listeners.len()
    }

    /// Detaches every registration. Same drop discipline as [`Registry::remove`].
    pub(crate) fn drain(&mut self) -> FxHashMap<TypeId, Vec<Arc<Registration>>> {
        std::mem::take(&mut self.listeners)
    }
}

//! # Event Bus
//!
//! An in-process, thread-safe, type-safe publish/subscribe hub. Independently
//! owned components exchange strongly-typed event values through one shared
//! [`EventBus`] without holding references to each other.
//!
//! ## Overview
//!
//! * **Type-Safe**: Events are identified by their Rust type; a publish of `T`
//!   reaches only callbacks registered for exactly `T`.
//! * **Synchronous**: Callbacks run on the publishing thread, in subscription
//!   order, before `publish` returns. There is no queue and no backpressure.
//! * **Snapshot dispatch**: The registry lock is held only to copy the callback
//!   list. Callbacks may subscribe, unsubscribe (themselves included) or publish
//!   again without deadlocking.
//! * **RAII**: [`EventBus::subscribe`] returns a [`SubscriptionHandle`]; dropping
//!   it unsubscribes. Handles hold a weak reference, so they never keep the bus
//!   alive and are harmless after it is gone.
//! * **High Performance**: `FxHashMap` + `parking_lot::RwLock`.
//!
//! # Example
//!
//! ```rust
//! use park_event_bus::EventBus;
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct KeyPressed { key: i32 }
//!
//! let bus = EventBus::new();
//! let pressed = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = pressed.clone();
//! let handle = bus.subscribe(move |event: &KeyPressed| {
//!     sink.lock().unwrap().push(event.key);
//! });
//!
//! bus.publish(KeyPressed { key: 32 });
//! drop(handle);
//! bus.publish(KeyPressed { key: 65 });
//!
//! assert_eq!(*pressed.lock().unwrap(), vec![32]);
//! ```

mod bus;
mod registry;
mod subscription;

pub use bus::{Event, EventBus};
pub use registry::SubscriptionId;
pub use subscription::SubscriptionHandle;

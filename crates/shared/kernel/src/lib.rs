//! Kernel utilities shared by the applications.
//! Keep this crate lightweight: configuration loading and bus-level diagnostics.
//!
//! ## Config loading
//! ```rust,no_run
//! use park_domain::config::AppConfig;
//! use park_kernel::config::load_config_or_default;
//!
//! let cfg: AppConfig = load_config_or_default(None::<&str>).unwrap();
//! assert!(cfg.replay.frames > 0);
//! ```
//!
//! ## Event logging
//! ```rust
//! use park_domain::events::KeyPressed;
//! use park_event_bus::EventBus;
//! use park_kernel::diagnostics::EventLogger;
//!
//! let bus = EventBus::new();
//! let logger = EventLogger::attach(&bus);
//! bus.publish(KeyPressed { key: 32 });
//! assert_eq!(logger.observed(), 1);
//! ```
pub mod config;
pub mod diagnostics;

pub use park_domain as domain;
pub use park_event_bus as events;

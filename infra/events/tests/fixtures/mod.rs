#![allow(dead_code, unreachable_pub)]

use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ping;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counted(pub usize);

/// Shared, ordered log of labels appended by callbacks.
#[derive(Clone, Debug, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn record(&self, label: impl Into<String>) {
        self.0.lock().push(label.into());
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock())
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }
}

//! Notification event bus.
//!
//! An explicit, injectable object instead of module-level globals: construct
//! one [`Notifier`] at application start, hand an `Arc` of it to whatever
//! publishes or displays toasts, and abort the auto-close driver on shutdown.
//! Subscribers receive the full toast sequence on every change. Auto-expiry
//! is sequential - a single timer dismisses the oldest toast, then re-arms
//! for the next one.

use crate::entities::{Severity, Toast};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

/// Default display duration before the oldest toast auto-expires.
pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_millis(3000);

type Listener = Arc<dyn Fn(&[Toast]) + Send + Sync>;

/// Handle for unregistering a subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Inner {
    toasts: Vec<Toast>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

/// Process-wide toast queue with subscriber callbacks.
#[derive(Default)]
pub struct Notifier {
    inner: Mutex<Inner>,
    /// Wakes the auto-close driver when a toast arrives.
    arrival: Notify,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and notifies subscribers. Returns the toast id for
    /// later dismissal.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> String {
        let toast = Toast {
            id: Uuid::new_v4().simple().to_string(),
            severity,
            message: message.into(),
        };
        let id = toast.id.clone();
        {
            let mut inner = self.lock();
            inner.toasts.push(toast);
        }
        self.arrival.notify_one();
        self.broadcast();
        id
    }

    pub fn success(&self, message: impl Into<String>) -> String {
        self.show(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> String {
        self.show(message, Severity::Error)
    }

    pub fn info(&self, message: impl Into<String>) -> String {
        self.show(message, Severity::Info)
    }

    /// Dismisses the toast with the given id, wherever it sits in the queue.
    /// Unknown ids are a no-op.
    pub fn remove(&self, id: &str) {
        let changed = {
            let mut inner = self.lock();
            let before = inner.toasts.len();
            inner.toasts.retain(|t| t.id != id);
            inner.toasts.len() != before
        };
        if changed {
            self.broadcast();
        }
    }

    /// Drops every queued toast.
    pub fn clear(&self) {
        {
            let mut inner = self.lock();
            inner.toasts.clear();
        }
        self.broadcast();
    }

    /// Snapshot of the current queue, oldest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().toasts.clone()
    }

    /// The oldest queued toast, if any.
    #[must_use]
    pub fn oldest(&self) -> Option<Toast> {
        self.lock().toasts.first().cloned()
    }

    /// Registers a callback invoked with the full toast sequence on every
    /// change.
    pub fn subscribe(&self, listener: impl Fn(&[Toast]) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        inner.next_subscription += 1;
        let id = SubscriptionId(inner.next_subscription);
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Unregisters a subscriber; unknown ids are a no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut inner = self.lock();
        inner.listeners.retain(|(sub, _)| *sub != id);
    }

    fn broadcast(&self) {
        // Snapshot under the lock, invoke callbacks outside it so a listener
        // may call back into the notifier.
        let (toasts, listeners): (Vec<Toast>, Vec<Listener>) = {
            let inner = self.lock();
            (
                inner.toasts.clone(),
                inner
                    .listeners
                    .iter()
                    .map(|(_, listener)| Arc::clone(listener))
                    .collect(),
            )
        };
        for listener in listeners {
            listener(&toasts);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Spawns the sequential auto-close driver: waits for a toast, lets the
/// oldest one linger for `auto_close`, dismisses it, and re-arms for the next
/// head. One timer runs at a time. Abort the returned handle on shutdown.
pub fn spawn_auto_close(notifier: Arc<Notifier>, auto_close: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let head = loop {
                if let Some(toast) = notifier.oldest() {
                    break toast;
                }
                notifier.arrival.notified().await;
            };
            tokio::time::sleep(auto_close).await;
            debug!(id = %head.id, "toast auto-closed");
            notifier.remove(&head.id);
        }
    })
}

/// Cart store - line-item merging, totals, checkout summary
pub mod cart;

/// Process-wide notification event bus
pub mod notify;

/// Identity/session store - simulated login, register, logout
pub mod session;

pub use cart::{CartStore, CheckoutSummary};
pub use notify::{Notifier, spawn_auto_close};
pub use session::SessionStore;

/// Cart line items and variant identity
pub mod cart;

/// Catalog product records, drafts, and patches
pub mod product;

/// Ephemeral notification toasts
pub mod toast;

/// Authenticated principals
pub mod user;

pub use cart::CartLine;
pub use product::{Product, ProductDraft, ProductPatch};
pub use toast::{Severity, Toast};
pub use user::Principal;

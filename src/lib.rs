//! `ShopCart` - A client-side storefront state core
//!
//! This crate provides the state-synchronization layer of a storefront:
//! catalog browsing with derived views, cart line-item merging with totals,
//! a simulated identity/session store, and a process-wide notification
//! channel - all backed by durable key/value snapshots so state survives
//! reloads. There is no backend server: authentication, payment, and
//! inventory are simulated locally.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Application context - explicit construction and wiring of the stores
pub mod app;
/// Catalog store and the built-in seed catalog
pub mod catalog;
/// Configuration loading from file and environment
pub mod config;
/// Cart, session, and notification stores
pub mod core;
/// Plain data types: products, cart lines, principals, toasts
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Navigable surface and route access gating
pub mod routes;
/// Durable key/value persistence adapters
pub mod storage;

#[cfg(test)]
pub mod test_utils;

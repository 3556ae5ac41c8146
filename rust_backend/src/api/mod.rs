//! # API Module
//!
//! This module is the sole entry point for the dashboard renderer. It
//! provides a stable boundary that isolates rendering concerns from internal
//! Rust implementations, allowing free evolution of:
//!
//! - Internal models and data structures
//! - The Polars pipeline and its column machinery
//! - Service-layer algorithms
//!
//! ## Architecture
//!
//! - [`types`]: renderer-facing DTOs (flat, serializable primitives only)
//! - [`views`]: the [`views::DashboardViews`] bundle computed in one call
//!
//! ## Design Principles
//!
//! 1. **Isolation**: Polars types stop at this module's inputs
//! 2. **Conversion**: tables become typed records once, at the boundary
//! 3. **Simplicity**: DTOs mirror what the dashboard actually needs, not
//!    internal complexity

pub mod types;
pub mod views;

// Re-export for convenience
pub use types::*;
pub use views::DashboardViews;

//! Notespace UI Components
//!
//! Reusable Dioxus components for the Notespace desktop shell. Everything
//! here is presentational: components take values and `EventHandler`
//! props and never touch the workspace store, so the shell stays the only
//! place where state changes happen.
//!
//! ## Palette
//!
//! Styling comes from the shell's global stylesheet. Class names follow
//! the shared design system:
//! - `btn-*` button variants
//! - `input-field` / `form-field` inputs
//! - `breadcrumb` / `crumb-*` navigation trail
//! - `image-indicator` attachment badge

pub mod components;

pub use components::*;

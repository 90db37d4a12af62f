//! ScholarLink UI Components
//!
//! Dioxus primitives for the ScholarLink academic collaboration app.
//!
//! ## Design
//!
//! Each primitive is a thin shell around a resolver in
//! `scholarlink_core::style`: props go in, a style record comes out, and the
//! record is rendered as the element's inline style. Colors are CSS custom
//! properties, so the host application's stylesheet decides the palette:
//!
//! - `--primary` / `--secondary`: brand actions
//! - `--surface` / `--surface-muted`: cards, modals, fields
//! - `--success`, `--warning`, `--danger`, `--info`: status tones
//!
//! Unknown variant names (for example from JSON) are parsed with
//! `Variant::from_name` and land on the default style.

pub mod components;

pub use components::*;

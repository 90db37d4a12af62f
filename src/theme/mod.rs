//! Theme for ScholarLink.
//!
//! Colors live only in CSS custom properties. Style records resolved in
//! `scholarlink_core::style` reference them with `var(--name)`.

mod styles;

pub use styles::GLOBAL_STYLES;

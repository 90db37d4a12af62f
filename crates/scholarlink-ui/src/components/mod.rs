//! Reusable UI primitives
//!
//! All components take enumerated variant/size props and render the style
//! record resolved by `scholarlink_core::style`.

mod avatar;
mod badge;
mod button;
mod card;
mod image;
mod input;
mod layout;
mod modal;
mod select;
mod tabs;
mod toast;
mod tooltip;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use image::*;
pub use input::*;
pub use layout::*;
pub use modal::*;
pub use select::*;
pub use tabs::*;
pub use toast::*;
pub use tooltip::*;

use std::sync::atomic::{AtomicUsize, Ordering};

/// Append caller-supplied classes to a primitive's base class list
pub(crate) fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Unique id for label/field association, e.g. `input-3`
pub(crate) fn next_element_id(prefix: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!("{}-{}", prefix, COUNTER.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_class_ignores_blank_extra() {
        assert_eq!(join_class("btn", None), "btn");
        assert_eq!(join_class("btn", Some("  ")), "btn");
        assert_eq!(join_class("btn", Some("wide")), "btn wide");
    }

    #[test]
    fn element_ids_are_unique() {
        let a = next_element_id("input");
        let b = next_element_id("input");
        assert_ne!(a, b);
        assert!(a.starts_with("input-"));
    }
}

//! Deferred Image Loader
//!
//! The `<img>` is only created once its frame intersects the viewport, so
//! off-screen lists do not fetch every source up front. The fallback stays
//! visible underneath until the image has loaded, and for good if it fails.

use dioxus::prelude::*;
use scholarlink_core::ImageLoad;

/// Image that loads after mount and falls back on error
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LazyImage {
///         src: url,
///         alt: applicant.name.clone(),
///         fallback: rsx! { span { "AL" } },
///     }
/// }
/// ```
#[component]
pub fn LazyImage(
    src: String,
    /// Alt text for accessibility
    alt: String,
    /// Shown until the image loads, and after a failed load
    fallback: Element,
    #[props(default = None)] class: Option<String>,
) -> Element {
    let mut state = use_signal(ImageLoad::default);
    let css_class = class.unwrap_or_else(|| "lazy-image".to_string());
    let current = state();
    // Hidden but present while loading so onload/onerror can fire
    let img_style = if current == ImageLoad::Loaded {
        ""
    } else {
        "position: absolute; inset: 0; opacity: 0;"
    };

    rsx! {
        span {
            class: "lazy-image-frame",
            style: "position: relative; display: inline-flex;",
            onvisible: move |e: VisibleEvent| {
                if let Ok(true) = e.data().is_intersecting() {
                    state.set(state().entered_view());
                }
            },
            if current.shows_image() {
                img {
                    class: "{css_class}",
                    style: "{img_style}",
                    src: "{src}",
                    alt: "{alt}",
                    onload: move |_| state.set(state().loaded()),
                    onerror: move |_| {
                        tracing::debug!("image failed to load, showing fallback");
                        state.set(state().failed());
                    },
                }
            }
            if current.shows_fallback() {
                {fallback}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offscreen_image_renders_only_fallback() {
        let html = dioxus_ssr::render_element(rsx! {
            LazyImage {
                src: "https://example.invalid/a.png".to_string(),
                alt: "A".to_string(),
                fallback: rsx! { span { "placeholder" } },
            }
        });
        assert!(html.contains("placeholder"), "{html}");
        assert!(!html.contains("<img"), "{html}");
        assert!(!html.contains("example.invalid"), "{html}");
    }
}

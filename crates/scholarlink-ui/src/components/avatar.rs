//! Avatar Component
//!
//! Profile picture with an initials placeholder. The placeholder shows until
//! the image loads and stays if the image fails.

use dioxus::prelude::*;
use scholarlink_core::style::{initials, AvatarShape, AvatarStyle, Size, Variant};

use super::LazyImage;

#[derive(Clone, PartialEq, Props)]
pub struct AvatarProps {
    /// Display name, used for initials, color and the accessible label
    pub name: String,
    #[props(default)]
    pub src: Option<String>,
    #[props(default)]
    pub size: Size,
    #[props(default)]
    pub shape: AvatarShape,
}

#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let css = AvatarStyle::resolve(props.size, props.shape, &props.name).to_css();
    let class = format!("avatar avatar-{}", props.size.name());
    let letters = initials(&props.name);

    rsx! {
        span {
            class: "{class}",
            style: "{css}",
            role: "img",
            "aria-label": "{props.name}",
            title: "{props.name}",
            if let Some(src) = props.src.clone() {
                LazyImage {
                    src: src,
                    alt: props.name.clone(),
                    class: "avatar-img".to_string(),
                    fallback: rsx! { span { class: "avatar-initials", "{letters}" } },
                }
            } else {
                span { class: "avatar-initials", "{letters}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_without_image_shows_initials() {
        let html = dioxus_ssr::render_element(rsx! {
            Avatar { name: "Grace Hopper".to_string(), size: Size::Lg }
        });
        assert!(html.contains("GH"), "{html}");
        assert!(html.contains("avatar avatar-lg"), "{html}");
    }

    #[test]
    fn avatar_image_is_deferred_until_visible() {
        // Server rendering never reports visibility, so only the placeholder renders
        let html = dioxus_ssr::render_element(rsx! {
            Avatar {
                name: "Alan Turing".to_string(),
                src: "https://example.invalid/alan.png".to_string(),
            }
        });
        assert!(html.contains("AT"), "{html}");
        assert!(!html.contains("<img"), "{html}");
    }
}

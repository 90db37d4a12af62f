//! Deferred image loading state.
//!
//! An image does not request its source until its element intersects the
//! viewport. The placeholder stays up until the image has loaded, and stays
//! for good if the load fails; the failure never reaches the caller.

/// Load state of one deferred image
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ImageLoad {
    /// Not scrolled into view yet, no request made
    #[default]
    Deferred,
    Loading,
    Loaded,
    Failed,
}

impl ImageLoad {
    /// Element intersected the viewport; start loading
    pub fn entered_view(self) -> Self {
        match self {
            ImageLoad::Deferred => ImageLoad::Loading,
            other => other,
        }
    }

    pub fn loaded(self) -> Self {
        match self {
            ImageLoad::Loading => ImageLoad::Loaded,
            other => other,
        }
    }

    pub fn failed(self) -> Self {
        match self {
            ImageLoad::Loading => ImageLoad::Failed,
            other => other,
        }
    }

    /// Render the `<img>` (it must exist while loading to fire events)
    pub fn shows_image(self) -> bool {
        matches!(self, ImageLoad::Loading | ImageLoad::Loaded)
    }

    /// Placeholder is up until the image has actually loaded
    pub fn shows_fallback(self) -> bool {
        self != ImageLoad::Loaded
    }
}

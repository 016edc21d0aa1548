//! # Image Resources
//!
//! Car images are ASCII-art drawings bundled at compile time. `build.rs`
//! turns every `assets/<id>.txt` into an entry of `IMAGE_ASSETS`, so an
//! image is referenced by nothing more than its file stem.
//!
//! Resolution never fails: an id without a bundled drawing resolves to the
//! `default_img` placeholder, and if even that is missing, to a one-line
//! fallback.

use serde::Serialize;

include!(concat!(env!("OUT_DIR"), "/car_images.rs"));

/// Shown when neither the requested image nor `default_img` is bundled.
const MISSING_ART: &str = "[no image]";

/// Opaque reference to a bundled image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRef(&'static str);

impl ImageRef {
    /// The placeholder used when a record has no usable image.
    pub const DEFAULT: ImageRef = ImageRef("default_img");

    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// True if `build.rs` bundled a drawing under this id.
    pub fn is_bundled(&self) -> bool {
        lookup(self.0).is_some()
    }

    /// Resolve to a drawing, substituting the placeholder when missing.
    pub fn resolve(&self) -> Art {
        lookup(self.0)
            .or_else(|| {
                log::warn!("Image '{}' is not bundled, using placeholder", self.0);
                lookup(Self::DEFAULT.0)
            })
            .unwrap_or(Art {
                text: MISSING_ART,
                width: MISSING_ART.len() as u16,
                height: 1,
            })
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A resolved drawing plus its bounding box in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Art {
    pub text: &'static str,
    pub width: u16,
    pub height: u16,
}

impl Art {
    pub fn lines(&self) -> impl Iterator<Item = &'static str> {
        self.text.lines()
    }
}

fn lookup(id: &str) -> Option<Art> {
    IMAGE_ASSETS
        .iter()
        .find(|(asset_id, ..)| *asset_id == id)
        .map(|&(_, text, width, height)| Art {
            text,
            width,
            height,
        })
}

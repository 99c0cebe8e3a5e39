use image::RgbaImage;
use image::imageops::{self, FilterType};
use textshot_types::CapturedImage;

use crate::viewport::{self, ViewportFit};

/// Bitmap rescaled for the current viewport
pub struct ScaledBitmap {
    pub fit: ViewportFit,
    pub pixels: RgbaImage,
}

/// State behind the two-pane viewer: the published image, the text produced
/// for it, and the bitmap derived for the current viewport.
///
/// The image and text are only ever replaced together, so the viewer never
/// shows text belonging to a different image than the one displayed.
pub struct Viewer {
    image: CapturedImage,
    text: String,
    viewport: Option<(u32, u32)>,
    scaled: Option<ScaledBitmap>,
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            image: CapturedImage::placeholder(),
            text: String::new(),
            viewport: None,
            scaled: None,
        }
    }

    pub fn image(&self) -> &CapturedImage {
        &self.image
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn scaled(&self) -> Option<&ScaledBitmap> {
        self.scaled.as_ref()
    }

    /// Replace the displayed image and text atomically
    pub fn publish(&mut self, image: CapturedImage, text: String) {
        self.image = image;
        self.text = text;
        self.rescale();
    }

    /// Recompute the scaled bitmap for a new viewport size.
    ///
    /// Safe to call before the first publish (scales the placeholder) and
    /// with a viewport that is not laid out yet (recomputation is deferred).
    pub fn on_viewport_resized(&mut self, width: u32, height: u32) {
        self.viewport = Some((width, height));
        self.rescale();
    }

    fn rescale(&mut self) {
        let Some((vp_w, vp_h)) = self.viewport else {
            self.scaled = None;
            return;
        };
        let Some(fit) = viewport::fit(self.image.width, self.image.height, vp_w, vp_h) else {
            self.scaled = None;
            return;
        };

        let Some(source) = RgbaImage::from_raw(self.image.width, self.image.height, self.image.rgba.clone())
        else {
            // from_rgba validates the buffer length, so this is unreachable
            self.scaled = None;
            return;
        };

        let pixels = imageops::resize(&source, fit.width, fit.height, FilterType::Lanczos3);
        self.scaled = Some(ScaledBitmap { fit, pixels });
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

/// Viewports smaller than this on either axis are considered not laid out yet
pub const MIN_VIEWPORT: u32 = 10;

/// Aspect-preserving scale and centering offsets for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportFit {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

/// Fit an image into a viewport without cropping or distortion.
///
/// Returns `None` when the viewport is below [`MIN_VIEWPORT`] so callers
/// defer instead of scaling against near-zero dimensions.
pub fn fit(img_w: u32, img_h: u32, vp_w: u32, vp_h: u32) -> Option<ViewportFit> {
    if vp_w < MIN_VIEWPORT || vp_h < MIN_VIEWPORT || img_w == 0 || img_h == 0 {
        return None;
    }

    // Exact comparison: img_w/img_h > vp_w/vp_h without float rounding.
    let (width, height) = if img_w as u64 * vp_h as u64 > vp_w as u64 * img_h as u64 {
        // width-constrained
        let height = (vp_w as u64 * img_h as u64 / img_w as u64) as u32;
        (vp_w, height.max(1))
    } else {
        // height-constrained
        let width = (vp_h as u64 * img_w as u64 / img_h as u64) as u32;
        (width.max(1), vp_h)
    };

    Some(ViewportFit {
        width,
        height,
        x: (vp_w - width) / 2,
        y: (vp_h - height) / 2,
    })
}

//! Screen templates: transparency masks cut from halftone planes.
//!
//! A template is opaque exactly where the dot pattern put ink down, so
//! overlaying the four channel templates reproduces the separation.

use image::{GrayAlphaImage, GrayImage, LumaA};
use tracing::debug;

use crate::{Error, Result};

/// Convert the four halftone planes into transparency masks.
///
/// All planes must share the same dimensions. Channels are independent
/// and processed in parallel; output order matches input order
/// (C, M, Y, K). Pass [`crate::DEFAULT_THRESHOLD`] for the standard cut.
pub fn screen_templates(
    planes: &[GrayImage; 4],
    threshold: u8,
) -> Result<[GrayAlphaImage; 4]> {
    let expected = planes[0].dimensions();
    for plane in &planes[1..] {
        if plane.dimensions() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: plane.dimensions(),
            });
        }
    }

    debug!(
        width = expected.0,
        height = expected.1,
        threshold,
        "Building screen templates"
    );

    let ((c, m), (y, k)) = rayon::join(
        || {
            rayon::join(
                || screen_template(&planes[0], threshold),
                || screen_template(&planes[1], threshold),
            )
        },
        || {
            rayon::join(
                || screen_template(&planes[2], threshold),
                || screen_template(&planes[3], threshold),
            )
        },
    );

    Ok([c, m, y, k])
}

/// Mask a single halftone plane.
///
/// Each pixel becomes `(255 - v, alpha)`: inverted intensity with
/// binary alpha. Dark source pixels (ink) invert to low values, stay at
/// or below the threshold, and come out opaque; light background
/// inverts high and comes out transparent. The inverted value is kept
/// as the intensity component in both cases.
pub fn screen_template(plane: &GrayImage, threshold: u8) -> GrayAlphaImage {
    let (width, height) = plane.dimensions();
    let mut template = GrayAlphaImage::new(width, height);

    for (x, y, pixel) in template.enumerate_pixels_mut() {
        let gray = 255 - plane.get_pixel(x, y).0[0];
        let alpha = if gray > threshold { 0 } else { 255 };
        *pixel = LumaA([gray, alpha]);
    }

    template
}

//! Angled halftone dot rendering.
//!
//! Each ink plane is rotated to its screen angle, sampled in
//! `sample × sample` boxes, and rebuilt as a grid of filled dots whose
//! area tracks the local mean intensity. De-rotating and center-cropping
//! brings the dot pattern back into the source frame at `scale` times
//! the original resolution.

use image::{GrayImage, Luma, imageops};
use imageproc::geometric_transformations::{Interpolation, rotate};
use tracing::debug;

use crate::cmyk::{Channel, CmykImage};
use crate::{Error, Result};

/// Placement of one halftone dot, in scaled output coordinates.
///
/// `left`/`top` is the corner of the dot's bounding box; the box is
/// square with side `diameter`. A diameter of zero means no dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub left: f32,
    pub top: f32,
    pub diameter: f32,
}

/// Render all four ink planes as halftone dot patterns.
///
/// Every output plane measures `(width * scale, height * scale)`.
/// Channels are independent and rendered in parallel; each uses its own
/// screen angle (0°, 15°, 30°, 45° in C, M, Y, K order).
pub fn halftone(cmyk: &CmykImage, sample: u32, scale: u32) -> Result<[GrayImage; 4]> {
    if sample < 1 {
        return Err(Error::SampleOutOfRange(sample));
    }
    if scale < 1 {
        return Err(Error::ScaleOutOfRange(scale));
    }

    let (width, height) = cmyk.dimensions();
    debug!(width, height, sample, scale, "Rendering halftone planes");

    let render = |channel: Channel| {
        render_plane(cmyk.plane(channel), channel.screen_angle(), sample, scale)
    };
    let ((c, m), (y, k)) = rayon::join(
        || rayon::join(|| render(Channel::Cyan), || render(Channel::Magenta)),
        || rayon::join(|| render(Channel::Yellow), || render(Channel::Black)),
    );

    Ok([c, m, y, k])
}

/// Render a single intensity plane at the given screen angle.
///
/// The plane is rotated with canvas expansion, sampled box by box into
/// dots on a `scale`-times larger canvas, rotated back, and
/// center-cropped to `(width * scale, height * scale)`.
pub fn render_plane(plane: &GrayImage, angle: f32, sample: u32, scale: u32) -> GrayImage {
    let (width, height) = plane.dimensions();

    let rotated = rotate_expand(plane, angle);
    let (rot_w, rot_h) = rotated.dimensions();
    let mut dots = GrayImage::new(rot_w * scale, rot_h * scale);

    for box_y in (0..rot_h).step_by(sample as usize) {
        for box_x in (0..rot_w).step_by(sample as usize) {
            let mean = box_mean(&rotated, box_x, box_y, sample);
            draw_dot(&mut dots, dot_geometry(mean, box_x, box_y, sample, scale));
        }
    }

    let derotated = rotate_expand(&dots, -angle);
    center_crop(&derotated, width * scale, height * scale)
}

/// Dot placement for one sample box with the given mean intensity.
///
/// The square-root mapping makes dot *area* vary roughly linearly with
/// ink coverage: `mean = 0` yields no dot, `mean = 255` a dot spanning
/// the whole `sample * scale` box. The dot is centered in its box.
pub fn dot_geometry(mean: f32, box_x: u32, box_y: u32, sample: u32, scale: u32) -> Dot {
    let normalized = (mean / 255.0).sqrt();
    let edge = 0.5 * (1.0 - normalized);

    Dot {
        left: (box_x as f32 + edge * sample as f32) * scale as f32,
        top: (box_y as f32 + edge * sample as f32) * scale as f32,
        diameter: sample as f32 * normalized * scale as f32,
    }
}

/// Mean intensity over the `sample × sample` box at `(box_x, box_y)`,
/// clipped to the plane's bounds.
fn box_mean(plane: &GrayImage, box_x: u32, box_y: u32, sample: u32) -> f32 {
    let x_end = (box_x + sample).min(plane.width());
    let y_end = (box_y + sample).min(plane.height());

    let mut sum = 0u64;
    for y in box_y..y_end {
        for x in box_x..x_end {
            sum += u64::from(plane.get_pixel(x, y).0[0]);
        }
    }

    let count = u64::from(x_end - box_x) * u64::from(y_end - box_y);
    sum as f32 / count as f32
}

/// Fill a circular dot with full intensity.
///
/// A pixel is inked when its center lies inside the circle, so the
/// sub-pixel bounding box produced by [`dot_geometry`] is honored
/// without quantizing the diameter to whole pixels.
fn draw_dot(target: &mut GrayImage, dot: Dot) {
    if dot.diameter <= 0.0 {
        return;
    }

    let radius = dot.diameter / 2.0;
    let center_x = dot.left + radius;
    let center_y = dot.top + radius;
    let radius_sq = radius * radius;

    let x0 = dot.left.floor().max(0.0) as u32;
    let y0 = dot.top.floor().max(0.0) as u32;
    let x1 = ((dot.left + dot.diameter).ceil().max(0.0) as u32).min(target.width());
    let y1 = ((dot.top + dot.diameter).ceil().max(0.0) as u32).min(target.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - center_x;
            let dy = y as f32 + 0.5 - center_y;
            if dx * dx + dy * dy <= radius_sq {
                target.put_pixel(x, y, Luma([255]));
            }
        }
    }
}

/// Rotate a plane about its center, expanding the canvas so no content
/// is clipped. Background fills with 0 (no ink). Nearest-neighbor
/// resampling keeps intensity values exact away from rotated edges.
fn rotate_expand(plane: &GrayImage, degrees: f32) -> GrayImage {
    if degrees == 0.0 {
        return plane.clone();
    }

    let (width, height) = plane.dimensions();
    let theta = degrees.to_radians();
    let (sin, cos) = (
        f64::from(theta.sin()).abs(),
        f64::from(theta.cos()).abs(),
    );
    let expanded_w = expanded_extent(f64::from(width) * cos + f64::from(height) * sin);
    let expanded_h = expanded_extent(f64::from(width) * sin + f64::from(height) * cos);

    // Rotate inside a canvas sized to the diagonal (which contains the
    // plane at any angle), then crop down to the rotated bounding box.
    let diagonal =
        (f64::from(width) * f64::from(width) + f64::from(height) * f64::from(height)).sqrt();
    let side = expanded_extent(diagonal).max(expanded_w).max(expanded_h);

    let mut canvas = GrayImage::new(side, side);
    imageops::replace(
        &mut canvas,
        plane,
        i64::from((side - width) / 2),
        i64::from((side - height) / 2),
    );

    // Pivot on the pixel-grid center (side-1)/2, not the geometric
    // center side/2: the warp samples pixel centers at integer
    // coordinates, so only this pivot makes the theta and -theta passes
    // cancel instead of drifting half a pixel per rotation.
    let pivot = (side - 1) as f32 / 2.0;
    let rotated = rotate(
        &canvas,
        (pivot, pivot),
        theta,
        Interpolation::Nearest,
        Luma([0]),
    );
    center_crop(&rotated, expanded_w, expanded_h)
}

/// Extent of a rotated bounding box, rounded up. The epsilon stops
/// floating-point residue at multiples of 90° from adding a spurious
/// pixel.
fn expanded_extent(value: f64) -> u32 {
    (value - 1e-6).ceil().max(1.0) as u32
}

/// Crop the centered `width × height` window out of a plane.
fn center_crop(plane: &GrayImage, width: u32, height: u32) -> GrayImage {
    let x = plane.width().saturating_sub(width) / 2;
    let y = plane.height().saturating_sub(height) / 2;
    imageops::crop_imm(plane, x, y, width, height).to_image()
}

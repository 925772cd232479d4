//! CMYK halftone screen generation.
//!
//! Converts a continuous-tone color image into four angled halftone
//! screens, one per ink channel, suitable for simulated or real print
//! reproduction:
//!
//! 1. [`separate`] splits the source into C/M/Y/K intensity planes
//!    using gray component replacement (GCR).
//! 2. [`halftone`] renders each plane as a rotated grid of
//!    variable-diameter dots (0°, 15°, 30°, 45° across the channels,
//!    to avoid moiré between overlaid inks).
//! 3. [`screen_templates`] turns each dot pattern into a transparency
//!    mask that is opaque only where ink should be deposited.

pub mod cmyk;
pub mod export;
pub mod gcr;
pub mod render;
pub mod template;

// Re-exports for convenience
pub use cmyk::{Channel, CmykImage};
pub use export::{composite, save_screens};
pub use gcr::{gray_component_replacement, separate};
pub use render::halftone;
pub use template::{screen_template, screen_templates};

/// Default binarization threshold for screen templates.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Errors that can occur while building halftone screens.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("GCR percentage must be in 0..=100, got {0}")]
    PercentageOutOfRange(u8),

    #[error("Sample box size must be at least 1, got {0}")]
    SampleOutOfRange(u32),

    #[error("Scale factor must be at least 1, got {0}")]
    ScaleOutOfRange(u32),

    #[error("Image has zero width or height")]
    EmptyImage,

    #[error("Plane dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for halftone operations.
pub type Result<T> = std::result::Result<T, Error>;

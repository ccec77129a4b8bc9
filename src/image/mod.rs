//! Image loading utilities.

mod load;

pub use load::load_image;

/// Number of channels in RGB images.
pub const RGB_CHANNELS: usize = 3;

//! # ssimcheck
//!
//! Validate the output of an external noise-injection step by measuring the
//! structural similarity (SSIM) between an original image and its
//! noise-injected counterpart. A score of 1.0 means the injector changed
//! nothing; a score below 0.90 means the noise is likely visible to humans.
//!
//! ## Example
//!
//! ```no_run
//! use ssimcheck::{compare, load_image, CANDIDATE_FILENAME, ORIGINAL_FILENAME};
//!
//! # fn main() -> ssimcheck::Result<()> {
//! let original = load_image("test-data", ORIGINAL_FILENAME)?;
//! let noisy = load_image("test-data", CANDIDATE_FILENAME)?;
//! compare(&original, &noisy)?.print();
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod error;
pub mod image;

pub use compare::{compare, Report, Tier};
pub use error::{Error, Result};
pub use image::load_image;

/// Fixed filename of the original image.
pub const ORIGINAL_FILENAME: &str = "input.jpg";

/// Fixed filename of the noise-injected candidate.
pub const CANDIDATE_FILENAME: &str = "input_noisy.jpg";

//! Image comparison: SSIM scoring, tier classification, and the report.

use image::RgbImage;
use image_compare::Algorithm;

use crate::error::{Error, Result};
use crate::image::RGB_CHANNELS;

/// Quality tier assigned to a similarity score.
///
/// The score ranges are not disjoint at their boundaries; [`Tier::classify`]
/// walks the guards top to bottom and the first match wins, so a score of
/// exactly 1.0 is `IdenticalWarning` rather than `Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Images are identical; the noise injection likely failed.
    IdenticalWarning,
    /// Noise is imperceptible to humans but present.
    Excellent,
    /// Noise is subtle and effective.
    Good,
    /// Noise may be slightly visible but is still effective.
    Acceptable,
    /// Noise is likely detectable by eye.
    TooStrong,
}

impl Tier {
    /// Classify a similarity score. Scores below 0.90, including negative
    /// ones, are all `TooStrong`.
    pub fn classify(score: f64) -> Self {
        if score == 1.0 {
            Self::IdenticalWarning
        } else if score >= 0.99 {
            Self::Excellent
        } else if score >= 0.95 {
            Self::Good
        } else if score >= 0.90 {
            Self::Acceptable
        } else {
            Self::TooStrong
        }
    }

    /// Human-readable interpretation printed in the report.
    pub fn message(self) -> &'static str {
        match self {
            Self::IdenticalWarning => {
                "WARNING: images are identical - noise injection may have failed!"
            }
            Self::Excellent => "EXCELLENT: noise is imperceptible to humans but present",
            Self::Good => "GOOD: noise is subtle and effective",
            Self::Acceptable => "ACCEPTABLE: noise may be slightly visible but still effective",
            Self::TooStrong => "WARNING: noise is too strong and may be easily detectable",
        }
    }
}

/// Result of comparing a candidate image against the original.
///
/// Created fresh per comparison and never mutated afterwards.
#[derive(Debug)]
pub struct Report {
    /// SSIM score in [-1.0, 1.0]; 1.0 means identical.
    pub score: f64,
    /// `(1.0 - score) * 100`.
    pub difference_pct: f64,
    pub tier: Tier,
    pub width: u32,
    pub height: u32,
    /// Minimum and maximum sample value of the original image.
    pub original_range: (u8, u8),
    /// Minimum and maximum sample value of the candidate image.
    pub candidate_range: (u8, u8),
    /// Mean absolute per-sample difference over the 0-255 range.
    pub mean_abs_diff: f64,
}

impl Report {
    /// Print the line-oriented report to stdout.
    pub fn print(&self) {
        println!("SSIM (noisy vs original): {:.6}", self.score);
        println!("Difference: {:.4}%", self.difference_pct);
        println!("{}", self.tier.message());
        println!();
        println!(
            "Image dimensions: {}x{}x{}",
            self.height, self.width, RGB_CHANNELS
        );
        println!(
            "Pixel value range - original: [{}, {}]",
            self.original_range.0, self.original_range.1
        );
        println!(
            "Pixel value range - noisy: [{}, {}]",
            self.candidate_range.0, self.candidate_range.1
        );
        println!(
            "Mean absolute difference: {:.4} (lower is more imperceptible)",
            self.mean_abs_diff
        );
    }
}

/// Compare two same-shaped RGB images and build the report.
///
/// The SSIM score itself is delegated to `image-compare`, declaring the
/// full u8 sample range and treating the last axis as color channels. A
/// shape mismatch surfaces as [`Error::Similarity`]; no partial report is
/// produced in that case.
///
/// # Errors
///
/// Returns [`Error::Similarity`] when the metric rejects the input pair.
pub fn compare(original: &RgbImage, candidate: &RgbImage) -> Result<Report> {
    let similarity =
        image_compare::rgb_similarity_structure(&Algorithm::MSSIMSimple, original, candidate)
            .map_err(|source| Error::Similarity { source })?;
    let score = similarity.score;

    Ok(Report {
        score,
        difference_pct: (1.0 - score) * 100.0,
        tier: Tier::classify(score),
        width: original.width(),
        height: original.height(),
        original_range: sample_range(original),
        candidate_range: sample_range(candidate),
        mean_abs_diff: mean_abs_diff(original, candidate),
    })
}

/// Minimum and maximum sample value over all channels of an image.
fn sample_range(img: &RgbImage) -> (u8, u8) {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for &sample in img.as_raw() {
        min = min.min(sample);
        max = max.max(sample);
    }
    (min, max)
}

/// Mean absolute difference over all sample positions and channels.
///
/// Samples are widened to f64 before subtracting so the unsigned values
/// cannot wrap around.
fn mean_abs_diff(a: &RgbImage, b: &RgbImage) -> f64 {
    let total: f64 = a
        .as_raw()
        .iter()
        .zip(b.as_raw())
        .map(|(&x, &y)| (f64::from(x) - f64::from(y)).abs())
        .sum();
    total / a.as_raw().len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn uniform(width: u32, height: u32, value: u8) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([value, value, value]))
    }

    #[test]
    fn identical_images_are_flagged() {
        let img = uniform(16, 16, 128);
        let report = compare(&img, &img).unwrap();

        assert_eq!(report.score, 1.0);
        assert_eq!(report.tier, Tier::IdenticalWarning);
        assert_eq!(report.difference_pct, 0.0);
        assert_eq!(report.mean_abs_diff, 0.0);
        assert_eq!((report.width, report.height), (16, 16));
        assert_eq!(report.original_range, (128, 128));
    }

    #[test]
    fn single_sample_change_is_excellent() {
        let original = uniform(16, 16, 128);
        let mut noisy = original.clone();
        noisy.put_pixel(3, 2, Rgb([129, 128, 128]));

        let report = compare(&original, &noisy).unwrap();

        assert!(report.score < 1.0);
        assert!(report.score >= 0.99);
        assert_eq!(report.tier, Tier::Excellent);

        let expected_mad = 1.0 / (16.0 * 16.0 * 3.0);
        assert!((report.mean_abs_diff - expected_mad).abs() < 1e-12);
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        let a = uniform(16, 16, 128);
        let b = uniform(8, 16, 128);

        let err = compare(&a, &b).unwrap_err();
        assert!(matches!(err, Error::Similarity { .. }));
    }

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(Tier::classify(1.0), Tier::IdenticalWarning);
        assert_eq!(Tier::classify(0.999), Tier::Excellent);
        assert_eq!(Tier::classify(0.99), Tier::Excellent);
        assert_eq!(Tier::classify(0.98), Tier::Good);
        assert_eq!(Tier::classify(0.95), Tier::Good);
        assert_eq!(Tier::classify(0.93), Tier::Acceptable);
        assert_eq!(Tier::classify(0.90), Tier::Acceptable);
        assert_eq!(Tier::classify(0.899_999_9), Tier::TooStrong);
        assert_eq!(Tier::classify(0.0), Tier::TooStrong);
        assert_eq!(Tier::classify(-0.5), Tier::TooStrong);
    }

    #[test]
    fn mean_abs_diff_is_symmetric() {
        let a = uniform(4, 4, 10);
        let b = uniform(4, 4, 250);

        assert_eq!(mean_abs_diff(&a, &b), mean_abs_diff(&b, &a));
        assert_eq!(mean_abs_diff(&a, &b), 240.0);
    }

    #[test]
    fn sample_range_spans_extremes() {
        let mut img = uniform(4, 4, 128);
        img.put_pixel(0, 0, Rgb([0, 128, 255]));

        assert_eq!(sample_range(&img), (0, 255));
    }
}

//! Image loading utilities.

use std::path::Path;

use image::RgbImage;

use crate::error::{Error, Result};

/// Load an image from `base_dir` and convert it to RGB8.
///
/// Both input images go through this routine so the comparator always sees
/// u8 samples in red-green-blue order, regardless of the on-disk format.
/// A single synchronous attempt; no retries.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] carrying the resolved path when the file is
/// missing or cannot be decoded.
pub fn load_image<P: AsRef<Path>>(base_dir: P, filename: &str) -> Result<RgbImage> {
    let path = base_dir.as_ref().join(filename);

    let img = image::open(&path).map_err(|source| Error::ImageLoad {
        path: path.clone(),
        source,
    })?;

    let rgb = img.into_rgb8();
    tracing::debug!(
        "decoded {} as {}x{} RGB",
        path.display(),
        rgb.width(),
        rgb.height()
    );

    Ok(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn missing_file_names_resolved_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(dir.path(), "input.jpg").unwrap_err();
        match err {
            Error::ImageLoad { path, .. } => {
                assert_eq!(path, dir.path().join("input.jpg"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn undecodable_file_fails_like_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("input.jpg"), b"not an image").unwrap();

        let err = load_image(dir.path(), "input.jpg").unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }

    #[test]
    fn decodable_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::from_pixel(5, 3, Rgb([10, 20, 30]));
        img.save(dir.path().join("input.png")).unwrap();

        let loaded = load_image(dir.path(), "input.png").unwrap();
        assert_eq!(loaded.dimensions(), (5, 3));
        assert_eq!(loaded.get_pixel(0, 0), &Rgb([10, 20, 30]));
    }
}

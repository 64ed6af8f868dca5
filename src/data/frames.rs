//! Image frame loading and binarization.
//!
//! A frame becomes one sample: each pixel, scanned row by row and left to
//! right, maps to 1.0 if it is opaque pure black and 0.0 otherwise.

use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgba};
use log::trace;

use crate::error::Result;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// `<dir>/frame-<index>.png`
pub fn frame_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("frame-{index}.png"))
}

pub fn binarize(img: &DynamicImage) -> Vec<f64> {
    img.to_rgba8()
        .pixels()
        .map(|p| if *p == BLACK { 1.0 } else { 0.0 })
        .collect()
}

/// Decodes the image at `path` and binarizes it.
pub fn load_frame(path: &Path) -> Result<Vec<f64>> {
    let img = image::open(path)?;
    let sample = binarize(&img);
    trace!("loaded {}: {:?}", path.display(), sample);
    Ok(sample)
}

pub fn black_pixel_count(sample: &[f64]) -> usize {
    sample.iter().filter(|&&x| x >= 0.5).count()
}

/// Black-pixel count written in `bits` binary digits, most significant first,
/// saturating at 2^bits − 1.
pub fn pixel_count_target(sample: &[f64], bits: usize) -> Vec<f64> {
    let max = u32::try_from(bits)
        .ok()
        .and_then(|b| 1usize.checked_shl(b))
        .map_or(usize::MAX, |m| m - 1);
    let count = black_pixel_count(sample).min(max);
    (0..bits)
        .rev()
        .map(|bit| {
            let set = u32::try_from(bit)
                .ok()
                .and_then(|b| count.checked_shr(b))
                .is_some_and(|c| c & 1 == 1);
            if set { 1.0 } else { 0.0 }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn binarize_scans_rows_then_columns() {
        // Black at (x=1, y=0) and (x=0, y=1).
        let img = RgbaImage::from_fn(2, 2, |x, y| if x != y { BLACK } else { WHITE });
        assert_eq!(binarize(&DynamicImage::ImageRgba8(img)), vec![0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn only_opaque_pure_black_counts() {
        let img = RgbaImage::from_fn(3, 1, |x, _| match x {
            0 => Rgba([0, 0, 0, 128]),
            1 => Rgba([1, 0, 0, 255]),
            _ => BLACK,
        });
        assert_eq!(binarize(&DynamicImage::ImageRgba8(img)), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn load_frame_reads_png_from_disk() {
        let dir = std::env::temp_dir().join(format!("ferrite_mlp_frames_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = frame_path(&dir, 3);
        RgbaImage::from_fn(2, 2, |x, _| if x == 0 { BLACK } else { WHITE })
            .save(&path)
            .unwrap();

        let sample = load_frame(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();
        assert_eq!(sample, vec![1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn missing_frame_is_an_error() {
        assert!(load_frame(Path::new("/nonexistent/frame-0.png")).is_err());
    }

    #[test]
    fn frame_path_naming() {
        assert_eq!(frame_path(Path::new("imgs"), 14), PathBuf::from("imgs/frame-14.png"));
    }

    #[test]
    fn pixel_count_target_is_msb_first() {
        assert_eq!(pixel_count_target(&[0.0, 0.0, 0.0, 0.0], 2), vec![0.0, 0.0]);
        assert_eq!(pixel_count_target(&[1.0, 0.0, 0.0, 0.0], 2), vec![0.0, 1.0]);
        assert_eq!(pixel_count_target(&[1.0, 1.0, 0.0, 0.0], 2), vec![1.0, 0.0]);
        assert_eq!(pixel_count_target(&[1.0, 1.0, 1.0, 0.0], 2), vec![1.0, 1.0]);
    }

    #[test]
    fn pixel_count_target_saturates() {
        assert_eq!(pixel_count_target(&[1.0; 4], 2), vec![1.0, 1.0]);
        assert_eq!(pixel_count_target(&[1.0; 4], 3), vec![1.0, 0.0, 0.0]);
    }
}

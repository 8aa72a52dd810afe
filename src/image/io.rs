//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `load_grayscale_resized`: same, resampled to an exact `n × n` square.
//! - `save_grayscale_u8`: write an owned 8-bit gray buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageU8, ImageView};
use image::imageops::FilterType;
use image::GrayImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer, stored row-major in one contiguous `Vec`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    ///
    /// `data` is expected to hold `width * height` samples; a shorter buffer
    /// is caught by [`ImageView::square_dimension`] before any processing.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Build a buffer by evaluating `f(row, col)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self::new(width, height, data)
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.data[row * self.width + col] = value;
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8::packed(self.width, self.height, &self.data)
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn stride(&self) -> usize {
        self.width
    }
    fn row(&self, y: usize) -> &[u8] {
        let start = (y * self.width).min(self.data.len());
        let end = (start + self.width).min(self.data.len());
        &self.data[start..end]
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayImageU8::new(width, height, img.into_raw()))
}

/// Load an image, convert it to grayscale and resample it to `dimension²`
/// pixels, ignoring the source aspect ratio.
pub fn load_grayscale_resized(path: &Path, dimension: usize) -> Result<GrayImageU8, String> {
    let side = u32::try_from(dimension)
        .map_err(|_| format!("Target dimension {dimension} is too large"))?;
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    log::debug!(
        "resizing {} from {}x{} to {side}x{side}",
        path.display(),
        img.width(),
        img.height()
    );
    let gray = img.resize_exact(side, side, FilterType::Triangle).into_luma8();
    Ok(GrayImageU8::new(dimension, dimension, gray.into_raw()))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(
        buffer.width as u32,
        buffer.height as u32,
        buffer.data.clone(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    create_parent_dir(path).map_err(|e| {
        let parent = path.parent().unwrap_or(path);
        format!("Failed to create {}: {e}", parent.display())
    })
}

/// Create the directory that will hold `path`, if it has one.
pub(crate) fn create_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_is_row_major() {
        let img = GrayImageU8::from_fn(3, 2, |row, col| (row * 10 + col) as u8);
        assert_eq!(img.data(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(img.get(1, 2), 12);
        assert_eq!(img.row(1), &[10, 11, 12]);
    }

    #[test]
    fn png_roundtrip_and_resize() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ramp.png");
        let img = GrayImageU8::from_fn(8, 4, |row, col| (row * 32 + col * 4) as u8);

        save_grayscale_u8(&img, &path).unwrap();
        let loaded = load_grayscale_image(&path).unwrap();
        assert_eq!(loaded, img);

        let square = load_grayscale_resized(&path, 4).unwrap();
        assert_eq!((square.width(), square.height()), (4, 4));
        assert_eq!(square.data().len(), 16);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_grayscale_image(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(err.contains("/definitely/not/here.png"), "{err}");
    }
}

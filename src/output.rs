use anyhow::Result;
use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder};
use std::fmt;
use std::path::{Path, PathBuf};

/// Encode `canvas` as JPEG at `path` with optimized Huffman tables,
/// replacing any existing file. Returns the number of bytes on disk.
pub fn save_jpeg(canvas: &RgbImage, path: &Path, quality: u8) -> Result<u64> {
    let width = u16::try_from(canvas.width())?;
    let height = u16::try_from(canvas.height())?;

    let mut encoder = Encoder::new_file(path, quality)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;
    encoder.set_optimized_huffman_tables(true);
    encoder
        .encode(canvas.as_raw(), width, height, ColorType::Rgb)
        .map_err(|e| anyhow::anyhow!("Failed to encode JPEG: {}", e))?;

    Ok(std::fs::metadata(path)?.len())
}

/// Success summary printed after the image is written
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Report {
    pub fn new(path: &Path, width: u32, height: u32) -> Self {
        Self {
            path: path.to_path_buf(),
            width,
            height,
        }
    }

    /// Uncompressed RGB size in KB, not the encoded size
    pub fn estimated_kb(&self) -> f64 {
        (self.width as f64 * self.height as f64 * 3.0) / 1024.0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ OG image created: {}", self.path.display())?;
        writeln!(f, "   Dimensions: {}x{}px", self.width, self.height)?;
        write!(f, "   File size: {:.1} KB (estimated)", self.estimated_kb())
    }
}

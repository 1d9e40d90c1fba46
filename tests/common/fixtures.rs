use image::{DynamicImage, ImageFormat, ImageReader};
use og_image::{GraphicsBackend, OgImageConfig};
use std::path::Path;
use tempfile::TempDir;

/// Default config writing into a fresh temp directory.
/// Returns both the config and the directory (which must be kept alive).
pub fn config_in_temp_dir() -> (OgImageConfig, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = OgImageConfig {
        output_path: dir.path().join("og-image.jpg"),
        ..OgImageConfig::default()
    };
    (config, dir)
}

/// Same as `config_in_temp_dir`, but forces the built-in bitmap font
pub fn bitmap_config_in_temp_dir() -> (OgImageConfig, TempDir) {
    let (config, dir) = config_in_temp_dir();
    let config = OgImageConfig {
        font_candidates: vec![],
        ..config
    };
    (config, dir)
}

/// Opens `path`, checks it sniffs as JPEG and decodes it
pub fn decode_jpeg(path: &Path) -> anyhow::Result<DynamicImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    anyhow::ensure!(
        reader.format() == Some(ImageFormat::Jpeg),
        "{} is not a JPEG",
        path.display()
    );
    Ok(reader.decode()?)
}

/// Backend that pretends the JPEG encoder was compiled out
pub struct NoJpegBackend;

impl GraphicsBackend for NoJpegBackend {
    fn jpeg_encoding(&self) -> bool {
        false
    }
}

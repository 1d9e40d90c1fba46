use jpeg_encoder::{ColorType, Encoder};

use crate::error::OgImageError;

/// What the composer needs from the graphics stack before it draws anything
pub trait GraphicsBackend {
    /// Whether canvases can be encoded as JPEG
    fn jpeg_encoding(&self) -> bool;
}

/// The encoder stack linked into this build
pub struct ImageBackend;

impl GraphicsBackend for ImageBackend {
    /// Encodes a single pixel with the settings used for the real image
    fn jpeg_encoding(&self) -> bool {
        let mut probe = Vec::new();
        let mut encoder = Encoder::new(&mut probe, 85);
        encoder.set_optimized_huffman_tables(true);
        encoder.encode(&[0, 0, 0], 1, 1, ColorType::Rgb).is_ok() && !probe.is_empty()
    }
}

/// Fail fast when a required capability is missing
pub fn require(backend: &dyn GraphicsBackend) -> Result<(), OgImageError> {
    if !backend.jpeg_encoding() {
        return Err(OgImageError::MissingCapability {
            capability: "JPEG encoder",
            guidance: "Install it with: cargo add jpeg-encoder",
        });
    }
    Ok(())
}

use ab_glyph::{Font, FontVec, PxScale};
use anyhow::Result;
use embedded_graphics::Pixel;
use embedded_graphics::geometry::{Dimensions, OriginDimensions, Point, Size};
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::{DrawTarget, Drawable};
use embedded_graphics::text::{Baseline, Text};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use log::{debug, info, warn};
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Bitmap font used when no outline font can be loaded
pub const BUILTIN_FONT: &MonoFont<'static> = &FONT_10X20;

/// A font file on disk, with the face index for collections (.ttc)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSource {
    pub path: PathBuf,
    pub index: u32,
}

impl FontSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::collection(path, 0)
    }

    pub fn collection(path: impl Into<PathBuf>, index: u32) -> Self {
        Self {
            path: path.into(),
            index,
        }
    }

    /// Well-known sans-serif locations, macOS first
    pub fn system_defaults() -> Vec<Self> {
        vec![
            Self::collection("/System/Library/Fonts/Helvetica.ttc", 0),
            Self::new("/System/Library/Fonts/Arial.ttf"),
            Self::new("/System/Library/Fonts/Supplemental/Arial.ttf"),
            Self::new("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            Self::new("/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf"),
            Self::new(r"C:\Windows\Fonts\arial.ttf"),
        ]
    }

    fn load(&self) -> Result<FontVec> {
        let data = std::fs::read(&self.path)?;
        FontVec::try_from_vec_and_index(data, self.index)
            .map_err(|e| anyhow::anyhow!("Failed to parse font: {}", e))
    }
}

/// Outcome of font resolution, not yet sized
#[derive(Clone)]
pub enum LoadedFont {
    Scalable { font: Arc<FontVec>, source: PathBuf },
    Builtin,
}

impl LoadedFont {
    /// Size the font; `size` is pixels per em and is ignored by the bitmap font
    pub fn sized(&self, size: f32) -> FontHandle {
        match self {
            LoadedFont::Scalable { font, .. } => FontHandle::Scalable {
                scale: em_scale(font, size),
                font: font.clone(),
            },
            LoadedFont::Builtin => FontHandle::Bitmap(BUILTIN_FONT),
        }
    }

    pub fn source(&self) -> Option<&Path> {
        match self {
            LoadedFont::Scalable { source, .. } => Some(source),
            LoadedFont::Builtin => None,
        }
    }
}

/// ab_glyph scales by line height (ascent - descent), not by em
fn em_scale(font: &FontVec, size: f32) -> PxScale {
    match font.units_per_em() {
        Some(units_per_em) => PxScale::from(size * font.height_unscaled() / units_per_em),
        None => PxScale::from(size),
    }
}

/// Tries each font source in order, falling back to the built-in font
pub struct FontResolver {
    candidates: Vec<FontSource>,
}

impl FontResolver {
    pub fn new(candidates: Vec<FontSource>) -> Self {
        Self { candidates }
    }

    pub fn resolve(&self) -> LoadedFont {
        for source in &self.candidates {
            match source.load() {
                Ok(font) => {
                    info!("Using font {}", source.path.display());
                    return LoadedFont::Scalable {
                        font: Arc::new(font),
                        source: source.path.clone(),
                    };
                }
                Err(e) => debug!("Font {} unavailable: {}", source.path.display(), e),
            }
        }

        warn!("No system font found, falling back to the built-in bitmap font");
        LoadedFont::Builtin
    }
}

/// A sized font that can measure and draw text onto an RGB canvas
#[derive(Clone)]
pub enum FontHandle {
    Scalable { font: Arc<FontVec>, scale: PxScale },
    Bitmap(&'static MonoFont<'static>),
}

impl FontHandle {
    /// Rendered (width, height) of `text` in pixels
    pub fn measure(&self, text: &str) -> (u32, u32) {
        match self {
            FontHandle::Scalable { font, scale } => text_size(*scale, &**font, text),
            FontHandle::Bitmap(font) => {
                let style = MonoTextStyle::new(*font, Rgb888::WHITE);
                let bbox = Text::with_baseline(text, Point::zero(), style, Baseline::Top)
                    .bounding_box();
                (bbox.size.width, bbox.size.height)
            }
        }
    }

    /// Draw `text` with its top-left corner at (x, y)
    pub fn draw(
        &self,
        canvas: &mut RgbImage,
        text: &str,
        x: i32,
        y: i32,
        color: Rgb<u8>,
    ) -> Result<()> {
        match self {
            FontHandle::Scalable { font, scale } => {
                draw_text_mut(canvas, color, x, y, *scale, &**font, text);
            }
            FontHandle::Bitmap(font) => {
                let style = MonoTextStyle::new(*font, Rgb888::new(color[0], color[1], color[2]));
                Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
                    .draw(&mut BitmapTarget(canvas))?;
            }
        }
        Ok(())
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, FontHandle::Bitmap(_))
    }
}

/// Lets embedded-graphics text render into an `RgbImage`
struct BitmapTarget<'a>(&'a mut RgbImage);

impl OriginDimensions for BitmapTarget<'_> {
    fn size(&self) -> Size {
        Size::new(self.0.width(), self.0.height())
    }
}

impl DrawTarget for BitmapTarget<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.0.dimensions();
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x < width && y < height {
                self.0.put_pixel(x, y, Rgb([color.r(), color.g(), color.b()]));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_chain_falls_back_to_builtin() {
        let loaded = FontResolver::new(vec![]).resolve();
        assert!(loaded.source().is_none());
        assert!(loaded.sized(72.0).is_bitmap());
        assert!(loaded.sized(36.0).is_bitmap());
    }

    #[test]
    fn test_missing_and_corrupt_files_are_skipped() -> anyhow::Result<()> {
        let mut corrupt = tempfile::Builder::new().suffix(".ttf").tempfile()?;
        corrupt.write_all(b"definitely not a font")?;

        let resolver = FontResolver::new(vec![
            FontSource::new("/nonexistent/font.ttf"),
            FontSource::new(corrupt.path()),
        ]);
        assert!(resolver.resolve().source().is_none());
        Ok(())
    }

    #[test]
    fn test_bitmap_measure_is_cell_based() {
        let handle = LoadedFont::Builtin.sized(72.0);
        assert_eq!(handle.measure("abc"), (30, 20));
        assert_eq!(handle.measure("CardRoots"), (90, 20));
    }

    #[test]
    fn test_bitmap_draw_paints_and_clips() -> anyhow::Result<()> {
        let background = Rgb([0u8, 0, 0]);
        let mut canvas = RgbImage::from_pixel(40, 20, background);
        let handle = LoadedFont::Builtin.sized(12.0);

        // Partly off-canvas on purpose
        handle.draw(&mut canvas, "XX", -5, 0, Rgb([255, 255, 255]))?;

        assert!(canvas.pixels().any(|p| *p == Rgb([255, 255, 255])));
        assert!(canvas.pixels().all(|p| *p == background || *p == Rgb([255, 255, 255])));
        Ok(())
    }

    #[test]
    fn test_system_font_measures_when_present() {
        let loaded = FontResolver::new(FontSource::system_defaults()).resolve();
        if loaded.source().is_none() {
            return;
        }

        let title = loaded.sized(72.0);
        let subtitle = loaded.sized(36.0);
        let (title_width, _) = title.measure("CardRoots");
        let (subtitle_width, _) = subtitle.measure("CardRoots");
        assert!(title_width > subtitle_width);
        assert!(title_width < 1200);
    }
}

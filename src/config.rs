use image::Rgb;
use imageproc::point::Point;
use std::path::PathBuf;

use crate::fonts::FontSource;

/// Colors used across the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Dark slate, also the base of the gradient
    pub background: Rgb<u8>,
    /// Amber, used for the title
    pub accent: Rgb<u8>,
    /// White, used for the subtitle
    pub text: Rgb<u8>,
    /// Slate gray
    pub muted: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb([0x0f, 0x17, 0x24]),
            accent: Rgb([0xf5, 0x9e, 0x0b]),
            text: Rgb([0xff, 0xff, 0xff]),
            muted: Rgb([0x94, 0xa3, 0xb8]),
        }
    }
}

/// Filled triangle anchored relative to the top-right corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    /// Distance of the anchor from the right edge
    pub inset_right: u32,
    /// Distance of the anchor from the top edge
    pub inset_top: u32,
    /// Vertex offsets from the anchor
    pub offsets: [(i32, i32); 3],
    pub fill: Rgb<u8>,
}

impl Decoration {
    /// Absolute vertex positions on a canvas of the given width
    pub fn vertices(&self, canvas_width: u32) -> [Point<i32>; 3] {
        let anchor_x = canvas_width as i32 - self.inset_right as i32;
        let anchor_y = self.inset_top as i32;
        self.offsets
            .map(|(dx, dy)| Point::new(anchor_x + dx, anchor_y + dy))
    }
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            inset_right: 150,
            inset_top: 50,
            // bottom, left, right
            offsets: [(0, 80), (-30, 40), (30, 40)],
            fill: Rgb([0x22, 0xc5, 0x5e]),
        }
    }
}

/// Everything the composer needs, fixed at authoring time
#[derive(Debug, Clone)]
pub struct OgImageConfig {
    pub width: u32,
    pub height: u32,
    pub palette: Palette,
    pub title: String,
    pub subtitle: String,
    /// Pixels per em
    pub title_size: f32,
    pub subtitle_size: f32,
    /// Title offset above the vertical midpoint
    pub title_rise: u32,
    /// Subtitle offset below the vertical midpoint
    pub subtitle_drop: u32,
    pub decoration: Decoration,
    pub jpeg_quality: u8,
    pub output_path: PathBuf,
    /// Tried in order; the built-in bitmap font follows the last one
    pub font_candidates: Vec<FontSource>,
}

impl Default for OgImageConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            palette: Palette::default(),
            title: "CardRoots".to_string(),
            subtitle: "Send a Christmas card that plants a real tree 🌱".to_string(),
            title_size: 72.0,
            subtitle_size: 36.0,
            title_rise: 60,
            subtitle_drop: 40,
            decoration: Decoration::default(),
            jpeg_quality: 85,
            output_path: PathBuf::from("public/og-image.jpg"),
            font_candidates: FontSource::system_defaults(),
        }
    }
}

impl OgImageConfig {
    pub fn title_y(&self) -> i32 {
        (self.height / 2) as i32 - self.title_rise as i32
    }

    pub fn subtitle_y(&self) -> i32 {
        (self.height / 2 + self.subtitle_drop) as i32
    }
}

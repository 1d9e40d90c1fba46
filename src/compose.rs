use anyhow::Result;
use image::{Rgb, RgbImage};
use log::{debug, info};
use std::sync::Arc;

use crate::capability::{self, GraphicsBackend};
use crate::config::{Decoration, OgImageConfig};
use crate::fonts::{FontHandle, FontResolver, LoadedFont};
use crate::output::{self, Report};
use crate::render;

/// One drawing stage applied to the canvas in place
pub trait ComposeStep {
    fn apply(&self, canvas: &mut RgbImage) -> Result<()>;

    /// Human-readable name, used in log output
    fn name(&self) -> &str;
}

/// Darkening gradient over the background color
pub struct GradientStep {
    pub base: Rgb<u8>,
}

impl ComposeStep for GradientStep {
    fn apply(&self, canvas: &mut RgbImage) -> Result<()> {
        render::paint_vertical_gradient(canvas, self.base);
        Ok(())
    }

    fn name(&self) -> &str {
        "Gradient"
    }
}

/// A line of text, horizontally centered at a fixed vertical offset
pub struct TextStep {
    pub label: String,
    pub text: String,
    pub font: FontHandle,
    pub y: i32,
    pub color: Rgb<u8>,
}

impl TextStep {
    /// Top-left corner of the text on a canvas of the given width
    pub fn position(&self, canvas_width: u32) -> (i32, i32) {
        let (text_width, _) = self.font.measure(&self.text);
        (render::centered_x(canvas_width, text_width), self.y)
    }
}

impl ComposeStep for TextStep {
    fn apply(&self, canvas: &mut RgbImage) -> Result<()> {
        let (x, y) = self.position(canvas.width());
        debug!("{} at ({}, {}): {:?}", self.label, x, y, self.text);
        self.font.draw(canvas, &self.text, x, y, self.color)
    }

    fn name(&self) -> &str {
        &self.label
    }
}

/// Filled triangle near the top-right corner
pub struct DecorationStep {
    pub decoration: Decoration,
}

impl ComposeStep for DecorationStep {
    fn apply(&self, canvas: &mut RgbImage) -> Result<()> {
        render::draw_decoration(canvas, &self.decoration);
        Ok(())
    }

    fn name(&self) -> &str {
        "Decoration"
    }
}

/// Ordered list of compose steps run over a single canvas
pub struct Composer {
    steps: Vec<Arc<dyn ComposeStep>>,
}

impl Composer {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn add_step(mut self, step: Arc<dyn ComposeStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[Arc<dyn ComposeStep>] {
        &self.steps
    }

    /// Run every step in order over `canvas`
    pub fn run(&self, mut canvas: RgbImage) -> Result<RgbImage> {
        for step in &self.steps {
            debug!("Running step: {}", step.name());
            step.apply(&mut canvas)?;
        }

        Ok(canvas)
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the standard gradient, title, subtitle, decoration sequence
pub fn build_standard_composer(config: &OgImageConfig, font: &LoadedFont) -> Composer {
    Composer::new()
        .add_step(Arc::new(GradientStep {
            base: config.palette.background,
        }))
        .add_step(Arc::new(TextStep {
            label: "Title".to_string(),
            text: config.title.clone(),
            font: font.sized(config.title_size),
            y: config.title_y(),
            color: config.palette.accent,
        }))
        .add_step(Arc::new(TextStep {
            label: "Subtitle".to_string(),
            text: config.subtitle.clone(),
            font: font.sized(config.subtitle_size),
            y: config.subtitle_y(),
            color: config.palette.text,
        }))
        .add_step(Arc::new(DecorationStep {
            decoration: config.decoration.clone(),
        }))
}

/// Blank canvas in the background color
pub fn blank_canvas(config: &OgImageConfig) -> RgbImage {
    RgbImage::from_pixel(config.width, config.height, config.palette.background)
}

/// Check capabilities, draw the image and write it to `config.output_path`
pub fn compose_and_save(
    config: &OgImageConfig,
    backend: &dyn GraphicsBackend,
) -> Result<Report> {
    capability::require(backend)?;

    let font = FontResolver::new(config.font_candidates.clone()).resolve();
    let composer = build_standard_composer(config, &font);

    let canvas = composer.run(blank_canvas(config))?;
    let written = output::save_jpeg(&canvas, &config.output_path, config.jpeg_quality)?;
    info!("Wrote {} bytes to {}", written, config.output_path.display());

    Ok(Report::new(&config.output_path, canvas.width(), canvas.height()))
}

pub mod capability;
pub mod compose;
pub mod config;
pub mod error;
pub mod fonts;
pub mod output;
pub mod render;

pub use capability::{GraphicsBackend, ImageBackend};
pub use compose::{
    ComposeStep, Composer, DecorationStep, GradientStep, TextStep, build_standard_composer,
    compose_and_save,
};
pub use config::{Decoration, OgImageConfig, Palette};
pub use error::OgImageError;
pub use fonts::{FontHandle, FontResolver, FontSource, LoadedFont};
pub use output::Report;

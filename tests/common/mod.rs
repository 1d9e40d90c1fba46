#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from og_image for tests
pub use og_image::{ImageBackend, OgImageConfig, OgImageError, Report, compose_and_save};

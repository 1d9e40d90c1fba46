use thiserror::Error;

/// Errors the composer classifies itself.
/// Anything else travels as `anyhow::Error`.
#[derive(Error, Debug)]
pub enum OgImageError {
    /// A graphics capability required at startup is not available
    #[error("{capability} not available. {guidance}")]
    MissingCapability {
        capability: &'static str,
        guidance: &'static str,
    },
}

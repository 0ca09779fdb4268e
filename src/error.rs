use std::io;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, OverlayError>;

/// Errors surfaced by edge states and their supporting types.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// The operation has no meaning for this kind of edge (e.g. shortcut
    /// metadata on a virtual edge). Callers probing the hierarchy should read
    /// this as a definitive "no".
    #[error("capability not supported: {0}")]
    CapabilityNotSupported(&'static str),
    /// A caller-supplied value is out of range, e.g. an unknown geometry mode.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Options could not be parsed or failed validation.
    #[error("configuration error: {0}")]
    Config(String),
    /// Reading an options file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl OverlayError {
    /// Returns `true` for [`OverlayError::CapabilityNotSupported`].
    pub fn is_capability_not_supported(&self) -> bool {
        matches!(self, OverlayError::CapabilityNotSupported(_))
    }
}

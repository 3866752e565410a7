//! # Error Types for Rollup Pubdata

use crate::config::ConfigError;
use crate::digest::OperationDigest;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PubdataError {
    // Configuration errors
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    // Value errors
    #[error("Width violation: {value} does not fit in {width} bits")]
    WidthViolation { value: String, width: u32 },

    // Layout errors
    #[error("Layout violation: {width}-bit field at position {position} exceeds {container}-bit accumulator")]
    OutOfBounds { position: u32, width: u32, container: u32 },

    #[error("Layout violation: field bits [{start}, {end}) overlap field bits [{other_start}, {other_end})")]
    FieldOverlap {
        start: u32,
        end: u32,
        other_start: u32,
        other_end: u32,
    },

    #[error("Layout violation: {bits}-bit field does not fit a {container}-bit container")]
    ContainerTooNarrow { bits: u32, container: u32 },

    #[error("Layout violation: no slot named {0}")]
    MissingSlot(String),

    // Conformance errors
    #[error("Digest mismatch: expected {expected}, computed {computed}")]
    DigestMismatch {
        expected: OperationDigest,
        computed: OperationDigest,
    },

    // Input errors
    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid length: expected {expected} bytes, found {found} bytes")]
    InvalidLength { expected: usize, found: usize },
}

/// Coarse classification of [`PubdataError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value does not fit its declared width (caller bug)
    Width,
    /// Field placement is inconsistent with the accumulator (configuration defect)
    Layout,
    /// Encoder and circuit disagree
    Digest,
    /// Malformed external input
    Input,
}

impl PubdataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PubdataError::WidthViolation { .. } => ErrorKind::Width,
            PubdataError::InvalidConfig(_)
            | PubdataError::OutOfBounds { .. }
            | PubdataError::FieldOverlap { .. }
            | PubdataError::ContainerTooNarrow { .. }
            | PubdataError::MissingSlot(_) => ErrorKind::Layout,
            PubdataError::DigestMismatch { .. } => ErrorKind::Digest,
            PubdataError::InvalidHex(_) | PubdataError::InvalidLength { .. } => ErrorKind::Input,
        }
    }

    /// Check if this error means the field layout itself is broken
    pub fn is_layout_violation(&self) -> bool {
        self.kind() == ErrorKind::Layout
    }
}

pub type Result<T> = std::result::Result<T, PubdataError>;

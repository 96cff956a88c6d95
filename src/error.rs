//! This module defines the single, unified error type for the entire lamina
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.
//!
//! Every variant carries the offending type/kind/value in the error itself:
//! the encoder never logs failures, it hands the detail back to the caller.

use thiserror::Error;

use crate::types::ValueKind;

#[derive(Error, Debug)]
pub enum LaminaError {
    // =========================================================================
    // === Contract Errors (caller/schema disagreement, never retried)
    // =========================================================================
    /// The physical-type tag has no PLAIN encoder (unknown wire tag).
    #[error("Unsupported physical type for PLAIN encoding: {0}")]
    UnsupportedType(String),

    /// The byte-array encoder was handed a value kind it cannot classify.
    #[error("Byte-array encoder cannot handle values of kind '{0}'")]
    UnsupportedElementKind(ValueKind),

    /// The value sequence's actual representation disagrees with the kind or
    /// fixed length the selected encoder expects.
    #[error("Type mismatch: encoder expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    // =========================================================================
    // === Value-Range Errors
    // =========================================================================
    /// A normalized temporal value does not fit its physical representation.
    #[error("Temporal value out of range for encoding: {0}")]
    TemporalOutOfRange(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers
    // =========================================================================
    /// An error from a safe byte-casting operation failing.
    #[error("Byte slice casting error: {0}")]
    PodCast(String), // Manual `From` impl is needed as bytemuck::PodCastError doesn't impl Error
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<bytemuck::PodCastError> for LaminaError {
    fn from(err: bytemuck::PodCastError) -> Self {
        LaminaError::PodCast(err.to_string())
    }
}

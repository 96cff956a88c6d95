// In: src/config.rs

//! The single source of truth for all lamina writer configuration.
//!
//! This module defines the unified `LaminaConfig` struct, which is designed to
//! be created once at the application boundary (e.g., from a user's JSON file
//! or CLI flags) and then passed down through the system as a shared,
//! read-only reference. The encoder never mutates it; one instance may back
//! any number of concurrent encode calls.

use serde::{Deserialize, Serialize};

use crate::error::LaminaError;

//==================================================================================
// I. Core Configuration Struct
//==================================================================================

/// Per-call options that change how a physical type's bytes are derived.
///
/// Both options exist for compatibility with files produced by older writers;
/// both default to `false`, the modern behavior.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LaminaConfig {
    /// When `true`, INT96 columns are interpreted as legacy high-precision
    /// timestamps and decomposed into (nanos-of-day, Julian day) on write.
    /// When `false`, INT96 values are opaque 12-byte buffers copied verbatim.
    #[serde(default)]
    pub treat_wide_integer_as_timestamp: bool,

    /// When `true`, raw byte-array values are revalidated as UTF-8 text and
    /// written exactly as text values are. When `false`, they are
    /// length-prefixed and copied with no interpretation.
    #[serde(default)]
    pub treat_byte_array_as_text: bool,
}

impl LaminaConfig {
    /// Hydrates a config from its JSON representation at the application
    /// boundary.
    pub fn from_json(json: &str) -> Result<Self, LaminaError> {
        serde_json::from_str(json)
            .map_err(|e| LaminaError::InternalError(format!("Config deserialization failed: {e}")))
    }
}

//==================================================================================
// II. Unit Tests
//==================================================================================

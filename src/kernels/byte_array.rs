//! This module contains the pure, stateless kernels for variable-length
//! byte-array encoding.
//!
//! Text and raw buffers are framed as a 4-byte little-endian byte-length
//! prefix followed by the payload. Intervals are the odd one out: a
//! fixed-width 12-byte record masquerading as a byte-array physical type,
//! with no prefix at all.

use crate::error::LaminaError;
use crate::types::Interval;

//==================================================================================
// 1. Private Core Logic
//==================================================================================

/// Frames one payload: 4-byte little-endian byte length, then the bytes.
fn write_framed(payload: &[u8], output_buf: &mut Vec<u8>) -> Result<(), LaminaError> {
    let length = u32::try_from(payload.len()).map_err(|_| {
        LaminaError::InternalError(format!(
            "payload of {} bytes cannot be represented by a 4-byte length prefix",
            payload.len()
        ))
    })?;
    output_buf.extend_from_slice(&length.to_le_bytes());
    output_buf.extend_from_slice(payload);
    Ok(())
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Encodes text values as length-prefixed UTF-8. The prefix is the byte
/// length, not the character count; an empty string emits length 0 and no
/// payload bytes.
pub fn encode_text(values: &[&str], output_buf: &mut Vec<u8>) -> Result<(), LaminaError> {
    for text in values {
        write_framed(text.as_bytes(), output_buf)?;
    }
    Ok(())
}

/// Encodes raw buffers length-prefixed, with no transformation.
pub fn encode_raw(values: &[&[u8]], output_buf: &mut Vec<u8>) -> Result<(), LaminaError> {
    for buffer in values {
        write_framed(buffer, output_buf)?;
    }
    Ok(())
}

/// Encodes raw buffers reinterpreted as UTF-8 text: each buffer is validated
/// and then framed exactly as [`encode_text`] frames it, so the two paths
/// are byte-identical for valid input.
pub fn encode_raw_as_text(values: &[&[u8]], output_buf: &mut Vec<u8>) -> Result<(), LaminaError> {
    for buffer in values {
        let text = std::str::from_utf8(buffer).map_err(|e| LaminaError::TypeMismatch {
            expected: "UTF-8 text bytes".to_string(),
            actual: format!("non-UTF-8 buffer ({e})"),
        })?;
        write_framed(text.as_bytes(), output_buf)?;
    }
    Ok(())
}

/// Encodes intervals as three consecutive 4-byte little-endian signed
/// integers (months, days, millis): a fixed 12 bytes per value, no prefix.
pub fn encode_intervals(values: &[Interval], output_buf: &mut Vec<u8>) {
    output_buf.reserve(values.len() * 12);
    for interval in values {
        output_buf.extend_from_slice(&interval.months.to_le_bytes());
        output_buf.extend_from_slice(&interval.days.to_le_bytes());
        output_buf.extend_from_slice(&interval.millis.to_le_bytes());
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

//! This module contains the pure, stateless kernel for the legacy 12-byte
//! wide-integer layout.
//!
//! Two mutually exclusive modes exist, selected by configuration at the
//! dispatcher: timestamp mode decomposes each instant into the NanoTime
//! record (nanoseconds-of-day, then Julian day); raw mode copies 12-byte
//! buffers verbatim. The field order and Julian epoch of the timestamp
//! record are a pinned bit-format contract shared with every reader of the
//! format's legacy timestamps.

use chrono::NaiveDateTime;

use crate::error::LaminaError;
use crate::kernels::temporal;

/// On-disk width of one wide-integer value.
pub const WIDTH: usize = 12;

//==================================================================================
// 1. Public API
//==================================================================================

/// Encodes instants as NanoTime records: 8 bytes little-endian nanoseconds
/// since local midnight, then 4 bytes little-endian Julian day. 12 bytes per
/// value.
pub fn encode_timestamps(
    values: &[NaiveDateTime],
    output_buf: &mut Vec<u8>,
) -> Result<(), LaminaError> {
    output_buf.reserve(values.len() * WIDTH);
    for &ts in values {
        let (julian_day, nanos_of_day) = temporal::timestamp_to_julian(ts)?;
        output_buf.extend_from_slice(&nanos_of_day.to_le_bytes());
        output_buf.extend_from_slice(&julian_day.to_le_bytes());
    }
    Ok(())
}

/// Copies externally-computed 12-byte values verbatim, with no
/// interpretation. A buffer of any other length is a caller contract
/// violation.
pub fn encode_raw(values: &[&[u8]], output_buf: &mut Vec<u8>) -> Result<(), LaminaError> {
    output_buf.reserve(values.len() * WIDTH);
    for buffer in values {
        if buffer.len() != WIDTH {
            return Err(LaminaError::TypeMismatch {
                expected: format!("{WIDTH}-byte wide-integer buffer"),
                actual: format!("{}-byte buffer", buffer.len()),
            });
        }
        output_buf.extend_from_slice(buffer);
    }
    Ok(())
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_epoch_instant_layout_is_pinned() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut buf = Vec::new();
        encode_timestamps(&[epoch], &mut buf).unwrap();

        // Nanos-of-day first (zero), Julian day 2_440_588 second.
        let mut expected = Vec::new();
        expected.extend_from_slice(&0i64.to_le_bytes());
        expected.extend_from_slice(&2_440_588i32.to_le_bytes());
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_each_timestamp_is_exactly_twelve_bytes() {
        let base = NaiveDate::from_ymd_opt(2023, 7, 14).unwrap();
        let values = [
            base.and_hms_opt(0, 0, 0).unwrap(),
            base.and_hms_nano_opt(23, 59, 59, 999_999_999).unwrap(),
        ];
        let mut buf = Vec::new();
        encode_timestamps(&values, &mut buf).unwrap();
        assert_eq!(buf.len(), values.len() * WIDTH);
    }

    #[test]
    fn test_raw_mode_is_verbatim_passthrough() {
        let first: [u8; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        let second: [u8; 12] = [0xFF; 12];
        let mut buf = Vec::new();
        encode_raw(&[&first, &second], &mut buf).unwrap();
        assert_eq!(&buf[..12], &first);
        assert_eq!(&buf[12..], &second);
    }

    #[test]
    fn test_raw_mode_rejects_wrong_length() {
        let short: [u8; 11] = [0; 11];
        let mut buf = Vec::new();
        let err = encode_raw(&[&short], &mut buf).unwrap_err();
        match err {
            LaminaError::TypeMismatch { actual, .. } => assert!(actual.contains("11")),
            other => panic!("Expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        let mut buf = Vec::new();
        encode_timestamps(&[], &mut buf).unwrap();
        encode_raw(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}

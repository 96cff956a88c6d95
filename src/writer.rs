//! The PLAIN-encoding type dispatcher.
//!
//! `encode_plain` selects exactly one kernel from a column's physical type
//! and streams the values through it into the caller-owned sink. The
//! dispatcher holds no state of its own: a failed call leaves nothing behind
//! to corrupt later calls, and concurrent calls against independent sinks
//! need no locking even when they share one configuration instance.
//!
//! Failure atomicity is the caller's job. The encoder appends to the sink as
//! it goes and does not roll back bytes written before an error, so callers
//! that need all-or-nothing output should encode into a scratch buffer and
//! discard it on error.

use crate::config::LaminaConfig;
use crate::error::LaminaError;
use crate::kernels::fixed::FixedWidthEncode;
use crate::kernels::{boolean, byte_array, fixed, int96, temporal};
use crate::types::{ColumnDescriptor, ColumnValues, LogicalAnnotation, PhysicalType};

//==================================================================================
// 1. Public API
//==================================================================================

/// Encodes one column's value sequence in PLAIN layout, appending to
/// `output_buf`.
///
/// The values variant must match the physical/logical type combination the
/// descriptor announces; a disagreement fails with
/// [`LaminaError::TypeMismatch`] (or, on the byte-array branch, with
/// [`LaminaError::UnsupportedElementKind`]). The input is never mutated and
/// the sink is never read or rewound.
pub fn encode_plain(
    descr: &ColumnDescriptor,
    config: &LaminaConfig,
    values: &ColumnValues<'_>,
    output_buf: &mut Vec<u8>,
) -> Result<(), LaminaError> {
    log::trace!(
        "PLAIN encode: physical_type={} values={}",
        descr.physical_type(),
        values.len()
    );

    match descr.physical_type() {
        PhysicalType::Boolean => match values {
            ColumnValues::Boolean(v) => {
                boolean::encode(v, output_buf);
                Ok(())
            }
            other => Err(mismatch("boolean values", other)),
        },

        PhysicalType::Int32 => match (descr.logical_annotation(), values) {
            (Some(LogicalAnnotation::Date), ColumnValues::Date(v)) => {
                for &date in *v {
                    let days = temporal::date_to_encoded_days(date)?;
                    days.write_le(output_buf);
                }
                Ok(())
            }
            (Some(LogicalAnnotation::Date), other) => Err(mismatch("date values", other)),
            (_, ColumnValues::Int32(v)) => {
                fixed::encode(v, output_buf);
                Ok(())
            }
            (_, other) => Err(mismatch("int32 values", other)),
        },

        PhysicalType::Int64 => match (descr.logical_annotation(), values) {
            (Some(LogicalAnnotation::TimestampMillis), ColumnValues::Timestamp(v)) => {
                for &ts in *v {
                    temporal::timestamp_to_millis(ts).write_le(output_buf);
                }
                Ok(())
            }
            (Some(LogicalAnnotation::TimestampMillis), other) => {
                Err(mismatch("timestamp values", other))
            }
            (_, ColumnValues::Int64(v)) => {
                fixed::encode(v, output_buf);
                Ok(())
            }
            (_, other) => Err(mismatch("int64 values", other)),
        },

        PhysicalType::Float => match values {
            ColumnValues::Float32(v) => {
                fixed::encode(v, output_buf);
                Ok(())
            }
            other => Err(mismatch("float32 values", other)),
        },

        PhysicalType::Double => match values {
            ColumnValues::Float64(v) => {
                fixed::encode(v, output_buf);
                Ok(())
            }
            other => Err(mismatch("float64 values", other)),
        },

        PhysicalType::Int96 => {
            if config.treat_wide_integer_as_timestamp {
                match values {
                    ColumnValues::Timestamp(v) => int96::encode_timestamps(v, output_buf),
                    other => Err(mismatch("timestamp values", other)),
                }
            } else {
                match values {
                    ColumnValues::Bytes(v) => int96::encode_raw(v, output_buf),
                    other => Err(mismatch("12-byte buffers", other)),
                }
            }
        }

        PhysicalType::ByteArray | PhysicalType::FixedLenByteArray => {
            encode_byte_array(descr, config, values, output_buf)
        }
    }
}

//==================================================================================
// 2. Private Helpers
//==================================================================================

/// The variable-length branch, shared by BYTE_ARRAY and FIXED_LEN_BYTE_ARRAY.
///
/// Branching happens on the values variant the caller tagged, never on the
/// runtime kind of a first element, so empty sequences fall through every
/// path and emit nothing.
fn encode_byte_array(
    descr: &ColumnDescriptor,
    config: &LaminaConfig,
    values: &ColumnValues<'_>,
    output_buf: &mut Vec<u8>,
) -> Result<(), LaminaError> {
    match values {
        ColumnValues::Text(v) => byte_array::encode_text(v, output_buf),
        ColumnValues::Interval(v) => {
            byte_array::encode_intervals(v, output_buf);
            Ok(())
        }
        ColumnValues::Bytes(v) => {
            if descr.physical_type() == PhysicalType::FixedLenByteArray {
                if let Some(expected_len) = descr.type_length() {
                    for buffer in *v {
                        if buffer.len() != expected_len {
                            return Err(LaminaError::TypeMismatch {
                                expected: format!("{expected_len}-byte fixed-length buffer"),
                                actual: format!("{}-byte buffer", buffer.len()),
                            });
                        }
                    }
                }
            }
            if config.treat_byte_array_as_text {
                byte_array::encode_raw_as_text(v, output_buf)
            } else {
                byte_array::encode_raw(v, output_buf)
            }
        }
        other => Err(LaminaError::UnsupportedElementKind(other.kind())),
    }
}

fn mismatch(expected: &str, actual: &ColumnValues<'_>) -> LaminaError {
    LaminaError::TypeMismatch {
        expected: expected.to_string(),
        actual: format!("{} values", actual.kind()),
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

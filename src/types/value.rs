//! This module defines the tagged value sequences the caller hands to the
//! encoder.
//!
//! The writer takes an explicit tagged union decided by the caller/schema
//! rather than inspecting the runtime kind of the first element of an
//! untyped collection. That makes two historical failure modes
//! unrepresentable: an empty sequence has no first element to sniff, and a
//! mixed-kind sequence cannot be constructed at all.

use bytemuck::{Pod, Zeroable};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// A calendar-relative duration with no fixed absolute length.
///
/// On disk this is always exactly 12 bytes: three little-endian signed
/// 32-bit components, in this field order.
#[derive(Pod, Zeroable, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Interval {
    pub months: i32,
    pub days: i32,
    pub millis: i32,
}

impl Interval {
    pub fn new(months: i32, days: i32, millis: i32) -> Self {
        Self {
            months,
            days,
            millis,
        }
    }
}

/// An ordered, homogeneously-typed sequence of column values, borrowed from
/// the caller for the duration of one encode call. The encoder never mutates
/// or retains it.
#[derive(Debug, Clone, Copy)]
pub enum ColumnValues<'a> {
    Boolean(&'a [bool]),
    Int32(&'a [i32]),
    Int64(&'a [i64]),
    Float32(&'a [f32]),
    Float64(&'a [f64]),
    /// Calendar dates, for INT32 columns annotated `Date`.
    Date(&'a [NaiveDate]),
    /// Instants, for INT64 `TimestampMillis` columns and INT96 timestamp mode.
    Timestamp(&'a [NaiveDateTime]),
    /// UTF-8 text, for BYTE_ARRAY columns.
    Text(&'a [&'a str]),
    /// Opaque byte buffers, for BYTE_ARRAY / FIXED_LEN_BYTE_ARRAY columns and
    /// INT96 raw mode.
    Bytes(&'a [&'a [u8]]),
    /// Calendar durations, for BYTE_ARRAY interval columns.
    Interval(&'a [Interval]),
}

impl ColumnValues<'_> {
    /// Names the variant, for error reporting.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::Float32(_) => ValueKind::Float32,
            Self::Float64(_) => ValueKind::Float64,
            Self::Date(_) => ValueKind::Date,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::Text(_) => ValueKind::Text,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Interval(_) => ValueKind::Interval,
        }
    }

    /// Number of elements in the sequence.
    pub fn len(&self) -> usize {
        match self {
            Self::Boolean(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Int64(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
            Self::Date(v) => v.len(),
            Self::Timestamp(v) => v.len(),
            Self::Text(v) => v.len(),
            Self::Bytes(v) => v.len(),
            Self::Interval(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The kind of a `ColumnValues` sequence, detached from its payload so error
/// values can carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Boolean,
    Int32,
    Int64,
    Float32,
    Float64,
    Date,
    Timestamp,
    Text,
    Bytes,
    Interval,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boolean => "boolean",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Interval => "interval",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_len() {
        let values = ColumnValues::Int32(&[1, 2, 3]);
        assert_eq!(values.kind(), ValueKind::Int32);
        assert_eq!(values.len(), 3);
        assert!(!values.is_empty());

        let empty = ColumnValues::Text(&[]);
        assert_eq!(empty.kind(), ValueKind::Text);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_interval_is_twelve_bytes() {
        // The on-disk contract leans on this exact in-memory width.
        assert_eq!(std::mem::size_of::<Interval>(), 12);
    }
}

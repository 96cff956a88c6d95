//! This module defines the canonical, type-safe representation of column
//! types used throughout the lamina writer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LaminaError;

/// The on-disk primitive representation of a column.
///
/// This enum replaces the format's fragile numeric wire tags with a closed,
/// compile-time-checked set. It determines byte layout only, not semantics;
/// semantics come from the optional [`LogicalAnnotation`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhysicalType {
    Boolean,
    Int32,
    Int64,
    /// Legacy 12-byte wide integer, historically used to pack a timestamp
    /// with higher precision than a 64-bit millisecond count allows.
    Int96,
    Float,
    Double,
    ByteArray,
    FixedLenByteArray,
}

impl PhysicalType {
    /// Converts one of the format's numeric wire tags into a `PhysicalType`.
    ///
    /// This is the boundary where unknown tags die: a tag outside the
    /// documented 0..=7 range has no PLAIN encoder and is rejected before a
    /// column descriptor can exist, so nothing is ever written for it.
    pub fn from_wire(tag: i32) -> Result<Self, LaminaError> {
        match tag {
            0 => Ok(Self::Boolean),
            1 => Ok(Self::Int32),
            2 => Ok(Self::Int64),
            3 => Ok(Self::Int96),
            4 => Ok(Self::Float),
            5 => Ok(Self::Double),
            6 => Ok(Self::ByteArray),
            7 => Ok(Self::FixedLenByteArray),
            other => Err(LaminaError::UnsupportedType(format!(
                "unknown physical type wire tag {other}"
            ))),
        }
    }

    /// Converts a `PhysicalType` back into its numeric wire tag.
    pub fn to_wire(&self) -> i32 {
        match self {
            Self::Boolean => 0,
            Self::Int32 => 1,
            Self::Int64 => 2,
            Self::Int96 => 3,
            Self::Float => 4,
            Self::Double => 5,
            Self::ByteArray => 6,
            Self::FixedLenByteArray => 7,
        }
    }
}

/// Provides the canonical string representation for a `PhysicalType`.
impl fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // These string representations are part of the public contract.
        write!(f, "{:?}", self)
    }
}

/// A semantic type layered on a physical type. It changes how values are
/// derived to the physical bytes, never the physical layout itself.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalAnnotation {
    /// INT32 column holding calendar dates (encoded as a day count).
    Date,
    /// INT64 column holding instants (encoded as millis since the epoch).
    TimestampMillis,
}

/// What a schema exposes to the encoder for one column: the physical type,
/// the optional logical annotation, and the fixed-length hint for
/// `FixedLenByteArray` columns.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    physical_type: PhysicalType,
    logical_annotation: Option<LogicalAnnotation>,
    type_length: Option<usize>,
}

impl ColumnDescriptor {
    pub fn new(physical_type: PhysicalType) -> Self {
        Self {
            physical_type,
            logical_annotation: None,
            type_length: None,
        }
    }

    pub fn with_annotation(mut self, annotation: LogicalAnnotation) -> Self {
        self.logical_annotation = Some(annotation);
        self
    }

    pub fn with_type_length(mut self, length: usize) -> Self {
        self.type_length = Some(length);
        self
    }

    pub fn physical_type(&self) -> PhysicalType {
        self.physical_type
    }

    pub fn logical_annotation(&self) -> Option<LogicalAnnotation> {
        self.logical_annotation
    }

    pub fn type_length(&self) -> Option<usize> {
        self.type_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tags_roundtrip() {
        for tag in 0..=7 {
            let ty = PhysicalType::from_wire(tag).unwrap();
            assert_eq!(ty.to_wire(), tag);
        }
    }

    #[test]
    fn test_unknown_wire_tag_is_rejected() {
        let err = PhysicalType::from_wire(11).unwrap_err();
        match err {
            LaminaError::UnsupportedType(msg) => assert!(msg.contains("11")),
            other => panic!("Expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn test_descriptor_builder() {
        let descr = ColumnDescriptor::new(PhysicalType::FixedLenByteArray).with_type_length(16);
        assert_eq!(descr.physical_type(), PhysicalType::FixedLenByteArray);
        assert_eq!(descr.type_length(), Some(16));
        assert_eq!(descr.logical_annotation(), None);
    }
}

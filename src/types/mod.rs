//! This module defines the core, strongly-typed data representations used
//! throughout the lamina writer.
//!
//! It includes the canonical `PhysicalType` enum (the on-disk primitive
//! representation, entered from the format's numeric wire tags), the optional
//! `LogicalAnnotation` layered on top of it, the `ColumnDescriptor` a schema
//! exposes for a column, and the tagged `ColumnValues` union the caller hands
//! to the encoder.

pub mod physical_type;
pub mod value;

// Re-export the main types for easier access.
pub use physical_type::{ColumnDescriptor, LogicalAnnotation, PhysicalType};
pub use value::{ColumnValues, Interval, ValueKind};

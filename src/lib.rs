//! This file is the root of the `lamina` Rust crate.
//!
//! lamina-core is the PLAIN-encoding value writer of the lamina columnar file
//! format: it turns an ordered, homogeneously-typed sequence of column values
//! into the flat, type-specific byte layout every reader of the format must
//! be able to decode. Dictionary/RLE encodings, page compression, and file
//! layout live in the surrounding stages and consume this crate's output.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod config;
pub mod error;
pub mod kernels;
pub mod types;
pub mod writer;

pub mod utils;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use config::LaminaConfig;
pub use error::LaminaError;
pub use types::{
    ColumnDescriptor, ColumnValues, Interval, LogicalAnnotation, PhysicalType, ValueKind,
};
pub use writer::encode_plain;

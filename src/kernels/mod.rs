//! This module serves as the public API for the collection of all pure,
//! stateless PLAIN-encoding kernels.
//!
//! Each sub-module owns one byte layout of the format. The `writer`
//! dispatcher is the designated consumer and calls them via their full path
//! (e.g., `kernels::boolean::encode`). This is the "toolbox" of the lamina
//! writer.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Bit-packed booleans, 8 values per byte, LSB-first.
pub mod boolean;

/// Fixed-width little-endian primitives (i32/i64/f32/f64).
pub mod fixed;

/// Legacy 12-byte wide integers: NanoTime timestamps or raw buffers.
pub mod int96;

/// Length-prefixed text/raw payloads and the fixed-width interval sub-format.
pub mod byte_array;

/// Logical-type normalizers: date, millisecond, and Julian-day conversions.
pub mod temporal;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
// We do not re-export individual functions here. The `writer` dispatcher
// calls each kernel via its full path, which keeps the dependency graph
// explicit and prevents polluting the namespace.

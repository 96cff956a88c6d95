//! This module contains the pure, stateless kernel for fixed-width
//! primitive encoding.
//!
//! The layout is simply each value's little-endian byte representation,
//! back to back: 4 bytes for i32/f32, 8 bytes for i64/f64, two's complement
//! for integers and IEEE-754 for floats. The emission goes through
//! `to_le_bytes` per value so the layout is exact on any host endianness.

//==================================================================================
// 1. The Fixed-Width Seam
//==================================================================================

/// A primitive that knows its own PLAIN byte layout.
pub trait FixedWidthEncode: Copy {
    /// On-disk width in bytes.
    const WIDTH: usize;

    /// Appends this value's little-endian bytes to the buffer.
    fn write_le(&self, output_buf: &mut Vec<u8>);
}

macro_rules! impl_fixed_width_encode {
    ($T:ty, $width:expr) => {
        impl FixedWidthEncode for $T {
            const WIDTH: usize = $width;

            fn write_le(&self, output_buf: &mut Vec<u8>) {
                output_buf.extend_from_slice(&self.to_le_bytes());
            }
        }
    };
}

impl_fixed_width_encode!(i32, 4);
impl_fixed_width_encode!(i64, 8);
impl_fixed_width_encode!(f32, 4);
impl_fixed_width_encode!(f64, 8);

//==================================================================================
// 2. Public API
//==================================================================================

/// Appends each value's little-endian bytes to `output_buf`, in order.
pub fn encode<T: FixedWidthEncode>(values: &[T], output_buf: &mut Vec<u8>) {
    output_buf.reserve(values.len() * T::WIDTH);
    for value in values {
        value.write_le(output_buf);
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

//! Safe byte-casting helpers shared by the crate's decode-side tests and any
//! caller that needs to view an emitted buffer as typed values again.

use bytemuck::Pod;

use crate::error::LaminaError;

/// Converts a slice of primitives into a `Vec<u8>`. This involves a copy.
/// Assumes Little-Endian.
pub fn typed_slice_to_bytes<T: Pod>(data: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(data).to_vec()
}

/// Reinterprets a byte buffer as a vector of primitives, copying element by
/// element so alignment of the source buffer never matters.
pub fn safe_bytes_to_typed_slice<T: Pod>(bytes: &[u8]) -> Result<Vec<T>, LaminaError> {
    let size = std::mem::size_of::<T>();
    if size == 0 || bytes.len() % size != 0 {
        return Err(LaminaError::PodCast(format!(
            "buffer of {} bytes is not a whole number of {}-byte elements",
            bytes.len(),
            size
        )));
    }
    Ok(bytes
        .chunks_exact(size)
        .map(bytemuck::pod_read_unaligned)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_bytes() {
        let original = vec![1i32, -7, 300];
        let bytes = typed_slice_to_bytes(&original);
        let back: Vec<i32> = safe_bytes_to_typed_slice(&bytes).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_ragged_buffer_is_rejected() {
        let result: Result<Vec<i32>, _> = safe_bytes_to_typed_slice(&[0u8; 7]);
        assert!(matches!(result, Err(LaminaError::PodCast(_))));
    }
}

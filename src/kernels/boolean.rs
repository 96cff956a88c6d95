//! This module contains the pure, stateless kernel for bit-packed boolean
//! encoding.
//!
//! Booleans are packed 8 to a byte, least-significant bit first: the i-th
//! value within a byte sets bit `i` when true. The output is `ceil(n/8)`
//! bytes for `n` input values, with the unused high bits of a final partial
//! byte zeroed. This module is PURE RUST and panic-free.

use bitvec::prelude::*;

//==================================================================================
// 1. Public API
//==================================================================================

/// Packs a boolean slice into `output_buf`, appending `ceil(n/8)` bytes.
///
/// An input that is an exact multiple of 8 values emits no trailing padding
/// byte; an empty input emits nothing at all.
pub fn encode(values: &[bool], output_buf: &mut Vec<u8>) {
    if values.is_empty() {
        return;
    }

    let mut bits = BitVec::<u8, Lsb0>::with_capacity(values.len());
    for &value in values {
        bits.push(value);
    }
    // `as_raw_slice` exposes exactly ceil(n/8) storage bytes; bits past the
    // logical length were zero-initialized by the BitVec.
    output_buf.extend_from_slice(bits.as_raw_slice());
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8], num_values: usize) -> Vec<bool> {
        let bits = BitSlice::<u8, Lsb0>::from_slice(bytes);
        bits.iter().by_vals().take(num_values).collect()
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        let mut buf = Vec::new();
        encode(&[], &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_output_length_is_ceil_n_over_8() {
        for n in 0..=25 {
            let values = vec![true; n];
            let mut buf = Vec::new();
            encode(&values, &mut buf);
            assert_eq!(buf.len(), (n + 7) / 8, "wrong byte count for n={n}");
        }
    }

    #[test]
    fn test_exact_multiple_of_8_has_no_trailing_byte() {
        let values = [true; 16];
        let mut buf = Vec::new();
        encode(&values, &mut buf);
        assert_eq!(buf, vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_lsb_first_bit_order() {
        // Only value 0 set -> bit 0 of byte 0.
        let mut buf = Vec::new();
        encode(&[true, false, false, false, false, false, false, false], &mut buf);
        assert_eq!(buf, vec![0b0000_0001]);

        // Values 1 and 6 set -> bits 1 and 6.
        buf.clear();
        encode(&[false, true, false, false, false, false, true, false], &mut buf);
        assert_eq!(buf, vec![0b0100_0010]);
    }

    #[test]
    fn test_partial_tail_is_zero_padded() {
        // 9 values: second byte holds one bit, seven zero pad bits.
        let mut values = vec![false; 9];
        values[8] = true;
        let mut buf = Vec::new();
        encode(&values, &mut buf);
        assert_eq!(buf, vec![0x00, 0b0000_0001]);
    }

    #[test]
    fn test_pad_bits_are_zero_for_every_tail_length() {
        // All-true input makes any stray pad bit visible: every byte must be
        // 0xFF except a partial tail, whose high bits must stay zero.
        for n in 1..=64 {
            let values = vec![true; n];
            let mut buf = Vec::new();
            encode(&values, &mut buf);
            let full_bytes = n / 8;
            for byte in &buf[..full_bytes] {
                assert_eq!(*byte, 0xFF, "corrupt full byte for n={n}");
            }
            if n % 8 != 0 {
                assert_eq!(
                    buf[full_bytes],
                    (1u8 << (n % 8)) - 1,
                    "pad bits not zero for n={n}"
                );
            }
        }
    }

    #[test]
    fn test_roundtrip_recovers_original() {
        let values: Vec<bool> = (0..37).map(|i| i % 3 == 0).collect();
        let mut buf = Vec::new();
        encode(&values, &mut buf);
        assert_eq!(decode(&buf, values.len()), values);
    }

    #[test]
    fn test_appends_rather_than_clearing_the_sink() {
        let mut buf = vec![0xAB];
        encode(&[true], &mut buf);
        assert_eq!(buf, vec![0xAB, 0x01]);
    }
}

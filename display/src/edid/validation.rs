// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Header and checksum validation for 128-byte EDID blocks.
//!
//! The scalar functions define correctness. The `_simd` functions are the ones the rest
//! of the crate calls. On `x86_64` with SSE2 (every `x86_64` target) they use 128-bit
//! lanes, everywhere else they forward to the scalar code. Both paths must return the
//! same answer for every input, which the tests below check over adversarial buffers.
//!
//! ```text
//! checksum (SSE2):  8 x 16 byte loads ─► _mm_sad_epu8 vs 0 ─► two u64 partial sums
//!                                        ─► add lanes ─► low byte == 0 ?
//! header   (SSE2):  8 byte load ─► _mm_cmpeq_epi8 vs magic ─► movemask & 0xFF == 0xFF ?
//! ```

use super::{EDID_BLOCK_SIZE, EDID_HEADER};

/// Byte sum of the block mod 256. A valid block sums to zero.
#[must_use]
pub fn checksum_sum_scalar(block: &[u8; EDID_BLOCK_SIZE]) -> u8 {
    block.iter().fold(0_u8, |acc, byte| acc.wrapping_add(*byte))
}

#[must_use]
pub fn validate_checksum_scalar(block: &[u8; EDID_BLOCK_SIZE]) -> bool {
    checksum_sum_scalar(block) == 0
}

#[must_use]
pub fn validate_header_scalar(block: &[u8; EDID_BLOCK_SIZE]) -> bool {
    block.starts_with(&EDID_HEADER)
}

/// `true` when the `_simd` functions use vector instructions on this target.
#[must_use]
pub const fn simd_available() -> bool {
    cfg!(all(target_arch = "x86_64", target_feature = "sse2"))
}

#[must_use]
pub fn checksum_sum_simd(block: &[u8; EDID_BLOCK_SIZE]) -> u8 {
    #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
    {
        sse2::checksum_sum(block)
    }
    #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
    {
        checksum_sum_scalar(block)
    }
}

#[must_use]
pub fn validate_checksum_simd(block: &[u8; EDID_BLOCK_SIZE]) -> bool {
    checksum_sum_simd(block) == 0
}

#[must_use]
pub fn validate_header_simd(block: &[u8; EDID_BLOCK_SIZE]) -> bool {
    #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
    {
        sse2::header_matches(block)
    }
    #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
    {
        validate_header_scalar(block)
    }
}

#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
mod sse2 {
    use super::{EDID_BLOCK_SIZE, EDID_HEADER};
    use std::arch::x86_64::{__m128i, _mm_add_epi64, _mm_cmpeq_epi8, _mm_cvtsi128_si64,
                            _mm_loadl_epi64, _mm_loadu_si128, _mm_movemask_epi8,
                            _mm_sad_epu8, _mm_setzero_si128, _mm_unpackhi_epi64};

    const LANE_WIDTH: usize = 16;

    pub fn checksum_sum(block: &[u8; EDID_BLOCK_SIZE]) -> u8 {
        // SAFETY: SSE2 is statically enabled (cfg above). Every load is unaligned
        // (`loadu`) and reads exactly 16 bytes from a 16-byte chunk of `block`.
        let total = unsafe {
            let zero = _mm_setzero_si128();
            let mut acc = _mm_setzero_si128();
            for chunk in block.chunks_exact(LANE_WIDTH) {
                let lanes = _mm_loadu_si128(chunk.as_ptr().cast::<__m128i>());
                // Sum of absolute differences against zero is a horizontal byte sum
                // into two 64-bit halves.
                acc = _mm_add_epi64(acc, _mm_sad_epu8(lanes, zero));
            }
            let low = _mm_cvtsi128_si64(acc);
            let high = _mm_cvtsi128_si64(_mm_unpackhi_epi64(acc, acc));
            low.wrapping_add(high)
        };
        total.to_le_bytes()[0]
    }

    pub fn header_matches(block: &[u8; EDID_BLOCK_SIZE]) -> bool {
        // SAFETY: SSE2 is statically enabled. `_mm_loadl_epi64` reads 8 bytes, and both
        // `block` and `EDID_HEADER` are at least 8 bytes long.
        let mask = unsafe {
            let actual = _mm_loadl_epi64(block.as_ptr().cast::<__m128i>());
            let expected = _mm_loadl_epi64(EDID_HEADER.as_ptr().cast::<__m128i>());
            _mm_movemask_epi8(_mm_cmpeq_epi8(actual, expected))
        };
        // Upper 8 lanes are zero on both sides and always compare equal.
        mask & 0xFF == 0xFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, test_fixtures::EdidBuilder};
    use test_case::test_case;

    fn adversarial_blocks() -> Vec<[u8; EDID_BLOCK_SIZE]> {
        let mut blocks = vec![[0x00; EDID_BLOCK_SIZE], [0xFF; EDID_BLOCK_SIZE]];

        let mut ramp = [0_u8; EDID_BLOCK_SIZE];
        for (index, byte) in ramp.iter_mut().enumerate() {
            *byte = u8::try_from(index).unwrap();
        }
        blocks.push(ramp);

        // Cheap LCG so the sweep is deterministic.
        let mut state = 0x2545_F491_u32;
        for _ in 0..64 {
            let mut block = [0_u8; EDID_BLOCK_SIZE];
            for byte in &mut block {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                *byte = state.to_le_bytes()[3];
            }
            blocks.push(block);
        }

        let valid = EdidBuilder::new().build_block();
        blocks.push(valid);
        let mut header_only = [0_u8; EDID_BLOCK_SIZE];
        header_only[..8].copy_from_slice(&EDID_HEADER);
        blocks.push(header_only);
        blocks
    }

    #[test]
    fn test_simd_and_scalar_agree() {
        for block in adversarial_blocks() {
            assert_eq2!(checksum_sum_simd(&block), checksum_sum_scalar(&block));
            assert_eq2!(validate_checksum_simd(&block), validate_checksum_scalar(&block));
            assert_eq2!(validate_header_simd(&block), validate_header_scalar(&block));
        }
    }

    #[test]
    fn test_valid_block_passes_both_checks() {
        let block = EdidBuilder::new().build_block();
        assert!(validate_header_scalar(&block));
        assert!(validate_header_simd(&block));
        assert!(validate_checksum_scalar(&block));
        assert!(validate_checksum_simd(&block));
    }

    #[test]
    fn test_single_byte_flip_breaks_checksum() {
        let valid = EdidBuilder::new().build_block();
        for index in 0..EDID_BLOCK_SIZE {
            let mut block = valid;
            block[index] = block[index].wrapping_add(1);
            assert!(!validate_checksum_scalar(&block), "flip at {index}");
            assert!(!validate_checksum_simd(&block), "flip at {index}");
        }
    }

    #[test]
    fn test_compensated_flip_keeps_checksum() {
        let mut block = EdidBuilder::new().build_block();
        block[20] = block[20].wrapping_add(7);
        block[127] = block[127].wrapping_sub(7);
        assert!(validate_checksum_simd(&block));
    }

    #[test_case(0, 0x01)]
    #[test_case(1, 0x00)]
    #[test_case(6, 0xFE)]
    #[test_case(7, 0xFF)]
    fn test_header_byte_mismatch(index: usize, value: u8) {
        let mut block = EdidBuilder::new().build_block();
        block[index] = value;
        assert!(!validate_header_scalar(&block));
        assert!(!validate_header_simd(&block));
    }

    #[test]
    fn test_all_ff_checksum_sum() {
        // 128 * 0xFF = 0x7F80.
        assert_eq2!(checksum_sum_scalar(&[0xFF; EDID_BLOCK_SIZE]), 0x80);
        assert_eq2!(checksum_sum_simd(&[0xFF; EDID_BLOCK_SIZE]), 0x80);
    }
}

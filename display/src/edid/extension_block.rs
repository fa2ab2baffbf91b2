// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! 128-byte extension blocks chained after the base block, discriminated by byte 0.

use super::{EDID_BLOCK_SIZE, validate_checksum_simd};
use crate::{CTA_EXTENSION_TAG, CtaExtensionBlock};
use std::{iter::Take, slice::ChunksExact};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionBlock<'a> {
    Cta(CtaExtensionBlock<'a>),
    /// DisplayID, block map, VTB, and anything else this crate does not decode.
    Other {
        tag: u8,
        bytes: &'a [u8; EDID_BLOCK_SIZE],
    },
}

impl<'a> ExtensionBlock<'a> {
    #[must_use]
    pub fn from_bytes(bytes: &'a [u8; EDID_BLOCK_SIZE]) -> Self {
        match bytes[0] {
            CTA_EXTENSION_TAG => Self::Cta(CtaExtensionBlock::from_bytes(bytes)),
            tag => Self::Other { tag, bytes },
        }
    }

    #[must_use]
    pub fn tag(&self) -> u8 { self.bytes()[0] }

    #[must_use]
    pub fn bytes(&self) -> &'a [u8; EDID_BLOCK_SIZE] {
        match self {
            Self::Cta(cta) => cta.bytes(),
            Self::Other { bytes, .. } => bytes,
        }
    }

    /// Extension checksums are reported, never enforced by [`crate::Edid::parse`].
    #[must_use]
    pub fn has_valid_checksum(&self) -> bool { validate_checksum_simd(self.bytes()) }
}

/// Yields the extension blocks that are actually present in the caller's buffer, up to
/// the count in byte 126. A trailing partial block is ignored.
#[derive(Debug, Clone)]
pub struct ExtensionIter<'a> {
    chunks: Take<ChunksExact<'a, u8>>,
}

impl<'a> ExtensionIter<'a> {
    #[must_use]
    pub fn new(after_base_block: &'a [u8], extension_count: u8) -> Self {
        Self {
            chunks: after_base_block
                .chunks_exact(EDID_BLOCK_SIZE)
                .take(usize::from(extension_count)),
        }
    }
}

impl<'a> Iterator for ExtensionIter<'a> {
    type Item = ExtensionBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        let bytes = chunk.first_chunk::<EDID_BLOCK_SIZE>()?;
        Some(ExtensionBlock::from_bytes(bytes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.chunks.size_hint() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, test_fixtures::{CtaBlockBuilder, fix_checksum}};

    #[test]
    fn test_discrimination_by_tag() {
        let cta = CtaBlockBuilder::new().build();
        let mut display_id = [0_u8; EDID_BLOCK_SIZE];
        display_id[0] = 0x70;
        fix_checksum(&mut display_id);

        let mut bytes = cta.to_vec();
        bytes.extend_from_slice(&display_id);
        let blocks: Vec<_> = ExtensionIter::new(&bytes, 2).collect();

        assert_eq2!(blocks.len(), 2);
        assert!(matches!(blocks[0], ExtensionBlock::Cta(_)));
        assert_eq2!(blocks[0].tag(), 0x02);
        assert_eq2!(blocks[1].tag(), 0x70);
        assert!(matches!(blocks[1], ExtensionBlock::Other { tag: 0x70, .. }));
        assert!(blocks.iter().all(ExtensionBlock::has_valid_checksum));
    }

    #[test]
    fn test_bounded_by_count_and_buffer() {
        let cta = CtaBlockBuilder::new().build();
        let mut bytes = cta.to_vec();
        bytes.extend_from_slice(&cta);
        bytes.extend_from_slice(&[0_u8; 40]);

        assert_eq2!(ExtensionIter::new(&bytes, 1).count(), 1);
        // Count says 5 but only 2 whole blocks are present.
        assert_eq2!(ExtensionIter::new(&bytes, 5).count(), 2);
        assert_eq2!(ExtensionIter::new(&[], 3).count(), 0);
    }

    #[test]
    fn test_bad_extension_checksum_is_reported() {
        let mut cta = CtaBlockBuilder::new().build();
        cta[127] = cta[127].wrapping_add(1);
        let block = ExtensionIter::new(&cta, 1).next().unwrap();
        assert!(!block.has_valid_checksum());
    }
}

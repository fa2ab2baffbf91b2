// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::fix_checksum;
use crate::{CTA_BLOCK_SIZE, CTA_CHECKSUM_OFFSET, CTA_DATA_BLOCK_START, CTA_EXTENSION_TAG,
            DESCRIPTOR_SIZE, cta_offsets};

const EXTENDED_TAG_CODE: u8 = 7;

/// Assembles a CTA-861 extension block. Data blocks are laid out in call order starting
/// at byte 4, the DTD offset points right after them, and DTDs follow.
#[derive(Debug, Clone)]
pub struct CtaBlockBuilder {
    revision: u8,
    flags: u8,
    data_blocks: Vec<u8>,
    dtds: Vec<[u8; DESCRIPTOR_SIZE]>,
}

impl Default for CtaBlockBuilder {
    fn default() -> Self { Self::new() }
}

impl CtaBlockBuilder {
    pub fn new() -> Self {
        Self {
            revision: 3,
            flags: 0,
            data_blocks: Vec::new(),
            dtds: Vec::new(),
        }
    }

    #[must_use]
    pub fn revision(mut self, revision: u8) -> Self {
        self.revision = revision;
        self
    }

    /// Raw byte 3: support flags in the high nibble, native DTD count in the low one.
    #[must_use]
    pub fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn data_block(mut self, tag: u8, payload: &[u8]) -> Self {
        let len = u8::try_from(payload.len()).unwrap();
        assert!(len <= 31, "data block payload too long");
        self.data_blocks.push(tag << 5 | len);
        self.data_blocks.extend_from_slice(payload);
        self
    }

    /// A tag 7 block whose first payload byte is the extended tag.
    #[must_use]
    pub fn extended_block(self, extended_tag: u8, payload: &[u8]) -> Self {
        let mut body = vec![extended_tag];
        body.extend_from_slice(payload);
        self.data_block(EXTENDED_TAG_CODE, &body)
    }

    #[must_use]
    pub fn dtd(mut self, dtd: [u8; DESCRIPTOR_SIZE]) -> Self {
        self.dtds.push(dtd);
        self
    }

    pub fn build(&self) -> [u8; CTA_BLOCK_SIZE] {
        let mut block = [0_u8; CTA_BLOCK_SIZE];
        let dtd_offset = CTA_DATA_BLOCK_START + self.data_blocks.len();
        let end = dtd_offset + self.dtds.len() * DESCRIPTOR_SIZE;
        assert!(end <= CTA_CHECKSUM_OFFSET, "CTA block overflow");

        block[cta_offsets::TAG] = CTA_EXTENSION_TAG;
        block[cta_offsets::REVISION] = self.revision;
        block[cta_offsets::DTD_OFFSET] = u8::try_from(dtd_offset).unwrap();
        block[cta_offsets::FLAGS] = self.flags;
        block[CTA_DATA_BLOCK_START..dtd_offset].copy_from_slice(&self.data_blocks);
        for (index, dtd) in self.dtds.iter().enumerate() {
            let start = dtd_offset + index * DESCRIPTOR_SIZE;
            block[start..start + DESCRIPTOR_SIZE].copy_from_slice(dtd);
        }
        fix_checksum(&mut block);
        block
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Builders for synthetic base blocks. Every byte the tests do not care about gets a
//! plausible default, and the checksum is always recomputed on the way out, so a test
//! only spells out the fields it asserts on.

use crate::{DESCRIPTOR_PAYLOAD_SIZE, DESCRIPTOR_SIZE, EDID_BLOCK_SIZE, EDID_HEADER,
            ManufacturerId, STANDARD_TIMING_SIZE, edid_offsets};

/// 1920x1080 @ 60 Hz, 148.5 MHz, digital separate sync with both polarities positive.
/// Lifted from a real monitor.
pub const DTD_1920X1080_60: [u8; DESCRIPTOR_SIZE] = [
    0x02, 0x3A, 0x80, 0x18, 0x71, 0x38, 0x2D, 0x40, 0x58, 0x2C, 0x45, 0x00, 0x13, 0x2B,
    0x21, 0x00, 0x00, 0x1E,
];

/// sRGB-ish primaries, the bytes most desktop panels ship.
const DEFAULT_CHROMATICITY: [u8; 10] =
    [0xEE, 0x91, 0xA3, 0x54, 0x4C, 0x99, 0x26, 0x0F, 0x50, 0x54];

const UNUSED_STANDARD_TIMING: [u8; STANDARD_TIMING_SIZE] = [0x01, 0x01];

/// Rewrites the last byte so the block sums to zero mod 256.
pub fn fix_checksum(block: &mut [u8; EDID_BLOCK_SIZE]) {
    let sum = block[..edid_offsets::CHECKSUM]
        .iter()
        .fold(0_u8, |acc, byte| acc.wrapping_add(*byte));
    block[edid_offsets::CHECKSUM] = 0_u8.wrapping_sub(sum);
}

/// An 18 byte display descriptor with the zero preamble and the given tag.
pub fn descriptor_bytes(
    tag: u8,
    byte4: u8,
    payload: &[u8; DESCRIPTOR_PAYLOAD_SIZE],
) -> [u8; DESCRIPTOR_SIZE] {
    let mut bytes = [0_u8; DESCRIPTOR_SIZE];
    bytes[3] = tag;
    bytes[4] = byte4;
    bytes[5..].copy_from_slice(payload);
    bytes
}

/// A string descriptor encoded the way monitors do it: text, one `\n` if there is
/// room, then space padding.
pub fn text_descriptor(tag: u8, text: &[u8]) -> [u8; DESCRIPTOR_SIZE] {
    assert!(text.len() <= DESCRIPTOR_PAYLOAD_SIZE, "descriptor text too long");
    let mut payload = [b' '; DESCRIPTOR_PAYLOAD_SIZE];
    payload[..text.len()].copy_from_slice(text);
    if let Some(terminator) = payload.get_mut(text.len()) {
        *terminator = b'\n';
    }
    descriptor_bytes(tag, 0, &payload)
}

/// 48-75 Hz vertical, 30-83 kHz horizontal, 170 MHz, default GTF.
pub fn range_limits_payload() -> [u8; DESCRIPTOR_PAYLOAD_SIZE] {
    [48, 75, 30, 83, 17, 0x00, 0x0A, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20]
}

fn dummy_descriptor() -> [u8; DESCRIPTOR_SIZE] {
    descriptor_bytes(0x10, 0, &[0; DESCRIPTOR_PAYLOAD_SIZE])
}

#[derive(Debug, Clone)]
pub struct EdidBuilder {
    block: [u8; EDID_BLOCK_SIZE],
    extensions: Vec<[u8; EDID_BLOCK_SIZE]>,
}

impl Default for EdidBuilder {
    fn default() -> Self { Self::new() }
}

impl EdidBuilder {
    /// A valid EDID 1.4 block for a digital panel with no timings and four dummy
    /// descriptors.
    pub fn new() -> Self {
        let mut block = [0_u8; EDID_BLOCK_SIZE];
        block[..EDID_HEADER.len()].copy_from_slice(&EDID_HEADER);
        let mut it = Self {
            block,
            extensions: Vec::new(),
        };
        it = it
            .manufacturer(*b"RBL")
            .manufacture_date(1, 30)
            .version(1, 4)
            .video_input(0x80)
            .screen_size(52, 29)
            .gamma(120)
            .feature_support(0x0A);
        it.block[edid_offsets::CHROMATICITY..edid_offsets::ESTABLISHED_TIMINGS]
            .copy_from_slice(&DEFAULT_CHROMATICITY);
        for index in 0..8 {
            it = it.standard_timing(index, UNUSED_STANDARD_TIMING);
        }
        for index in 0..4 {
            it = it.descriptor(index, dummy_descriptor());
        }
        it
    }

    #[must_use]
    pub fn manufacturer(self, letters: [u8; 3]) -> Self {
        let raw = ManufacturerId::from_letters(letters).unwrap().to_raw();
        self.set(edid_offsets::MANUFACTURER_ID, &raw)
    }

    #[must_use]
    pub fn product_code(self, code: u16) -> Self {
        self.set(edid_offsets::PRODUCT_CODE, &code.to_le_bytes())
    }

    #[must_use]
    pub fn serial_number(self, serial: u32) -> Self {
        self.set(edid_offsets::SERIAL_NUMBER, &serial.to_le_bytes())
    }

    #[must_use]
    pub fn manufacture_date(self, week: u8, year_byte: u8) -> Self {
        self.set(edid_offsets::MANUFACTURE_WEEK, &[week, year_byte])
    }

    #[must_use]
    pub fn version(self, version: u8, revision: u8) -> Self {
        self.set(edid_offsets::VERSION, &[version, revision])
    }

    #[must_use]
    pub fn video_input(self, byte: u8) -> Self {
        self.set(edid_offsets::VIDEO_INPUT, &[byte])
    }

    #[must_use]
    pub fn screen_size(self, width: u8, height: u8) -> Self {
        self.set(edid_offsets::SCREEN_WIDTH_CM, &[width, height])
    }

    #[must_use]
    pub fn gamma(self, byte: u8) -> Self { self.set(edid_offsets::GAMMA, &[byte]) }

    #[must_use]
    pub fn feature_support(self, byte: u8) -> Self {
        self.set(edid_offsets::FEATURE_SUPPORT, &[byte])
    }

    #[must_use]
    pub fn established_timings(self, bytes: [u8; 3]) -> Self {
        self.set(edid_offsets::ESTABLISHED_TIMINGS, &bytes)
    }

    #[must_use]
    pub fn standard_timing(self, index: usize, bytes: [u8; STANDARD_TIMING_SIZE]) -> Self {
        let offset = edid_offsets::STANDARD_TIMINGS + index * STANDARD_TIMING_SIZE;
        self.set(offset, &bytes)
    }

    #[must_use]
    pub fn descriptor(self, index: usize, bytes: [u8; DESCRIPTOR_SIZE]) -> Self {
        let offset = edid_offsets::DESCRIPTORS + index * DESCRIPTOR_SIZE;
        self.set(offset, &bytes)
    }

    /// Appends an extension block verbatim. The extension count byte follows the number
    /// of appended blocks.
    #[must_use]
    pub fn extension(mut self, block: [u8; EDID_BLOCK_SIZE]) -> Self {
        self.extensions.push(block);
        self
    }

    /// The base block with its extension count and checksum filled in.
    pub fn build_block(&self) -> [u8; EDID_BLOCK_SIZE] {
        let mut block = self.block;
        block[edid_offsets::EXTENSION_COUNT] = u8::try_from(self.extensions.len()).unwrap();
        fix_checksum(&mut block);
        block
    }

    pub fn build(&self) -> Vec<u8> {
        let mut bytes = self.build_block().to_vec();
        for extension in &self.extensions {
            bytes.extend_from_slice(extension);
        }
        bytes
    }

    fn set(mut self, offset: usize, bytes: &[u8]) -> Self {
        self.block[offset..offset + bytes.len()].copy_from_slice(bytes);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edid, assert_eq2};

    #[test]
    fn test_default_block_is_accepted() {
        let bytes = EdidBuilder::new().build();
        assert_eq2!(bytes.len(), EDID_BLOCK_SIZE);
        let edid = Edid::parse(&bytes).unwrap();
        assert_eq2!(edid.version(), (1, 4));
        assert_eq2!(edid.detailed_timings().iter().flatten().count(), 0);
        assert!(edid.standard_timings().is_empty());
    }

    #[test]
    fn test_text_descriptor_padding() {
        let bytes = text_descriptor(0xFC, b"ABC");
        assert_eq2!(&bytes[..5], &[0, 0, 0, 0xFC, 0]);
        assert_eq2!(&bytes[5..10], b"ABC\n ");
        assert_eq2!(bytes[17], b' ');
    }
}

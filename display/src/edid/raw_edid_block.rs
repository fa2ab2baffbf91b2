// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Zero-copy structural view of the 128-byte EDID base block.
//!
//! [`RawEdidBlock`] is a `#[repr(C)]` struct made only of `u8` and `[u8; N]` fields, so
//! it has alignment 1, no padding, and every bit pattern is a valid value. That makes
//! reinterpreting a borrowed `[u8; 128]` as a `&RawEdidBlock` sound, and the field
//! layout below *is* the EDID byte layout:
//!
//! ```text
//! 0x00 header[8]            0x14 video_input         0x23 established_timings[3]
//! 0x08 manufacturer_id[2]   0x15 screen_width_cm     0x26 standard_timings[8][2]
//! 0x0A product_code[2]      0x16 screen_height_cm    0x36 descriptors[4][18]
//! 0x0C serial_number[4]     0x17 gamma               0x7E extension_count
//! 0x10 week, year           0x18 feature_support     0x7F checksum
//! 0x12 version, revision    0x19 chromaticity[10]
//! ```
//!
//! [`RawEdidBlock::from_bytes`] performs no validation at all. Call
//! [`RawEdidBlock::has_valid_header`] and [`RawEdidBlock::has_valid_checksum`] (or go
//! through [`crate::Edid::parse`]) before trusting any field.

use super::{
    CHROMATICITY_SIZE, DESCRIPTOR_COUNT, DESCRIPTOR_SIZE, EDID_BLOCK_SIZE,
    ESTABLISHED_TIMINGS_SIZE, ManufacturerId, STANDARD_TIMING_COUNT, STANDARD_TIMING_SIZE,
    validate_checksum_simd, validate_header_simd,
};

#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub struct RawEdidBlock {
    pub header: [u8; 8],
    /// Big-endian, unlike every other multi-byte field in the block.
    pub manufacturer_id: [u8; 2],
    pub product_code: [u8; 2],
    pub serial_number: [u8; 4],
    pub manufacture_week: u8,
    pub manufacture_year: u8,
    pub version: u8,
    pub revision: u8,
    pub video_input: u8,
    pub screen_width_cm: u8,
    pub screen_height_cm: u8,
    pub gamma: u8,
    pub feature_support: u8,
    pub chromaticity: [u8; CHROMATICITY_SIZE],
    pub established_timings: [u8; ESTABLISHED_TIMINGS_SIZE],
    pub standard_timings: [[u8; STANDARD_TIMING_SIZE]; STANDARD_TIMING_COUNT],
    pub descriptors: [[u8; DESCRIPTOR_SIZE]; DESCRIPTOR_COUNT],
    pub extension_count: u8,
    pub checksum: u8,
}

const _: () = assert!(size_of::<RawEdidBlock>() == EDID_BLOCK_SIZE);
const _: () = assert!(align_of::<RawEdidBlock>() == 1);

impl RawEdidBlock {
    /// Reinterprets the caller's bytes as a base block. No validation, no copy.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; EDID_BLOCK_SIZE]) -> &Self {
        // SAFETY: `RawEdidBlock` is `repr(C)`, 128 bytes, alignment 1 (checked above),
        // and consists only of `u8` arrays, so every `[u8; 128]` is a valid value and
        // the returned reference inherits the borrow of `bytes`.
        unsafe { &*bytes.as_ptr().cast::<Self>() }
    }

    /// Same as [`Self::from_bytes`] for the first 128 bytes of a longer slice. Returns
    /// `None` when the slice is shorter than one block.
    #[must_use]
    pub fn try_from_slice(bytes: &[u8]) -> Option<&Self> {
        bytes.first_chunk::<EDID_BLOCK_SIZE>().map(Self::from_bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; EDID_BLOCK_SIZE] {
        // SAFETY: inverse of `from_bytes`; same size and alignment, plain bytes.
        unsafe { &*std::ptr::from_ref(self).cast::<[u8; EDID_BLOCK_SIZE]>() }
    }

    #[must_use]
    pub fn has_valid_header(&self) -> bool { validate_header_simd(self.as_bytes()) }

    #[must_use]
    pub fn has_valid_checksum(&self) -> bool { validate_checksum_simd(self.as_bytes()) }

    #[must_use]
    pub fn manufacturer_id_raw(&self) -> u16 { u16::from_be_bytes(self.manufacturer_id) }

    /// Decodes the packed PNP ID. `None` when any of the three letters is out of range.
    #[must_use]
    pub fn decoded_manufacturer_id(&self) -> Option<ManufacturerId> {
        ManufacturerId::from_packed(self.manufacturer_id_raw())
    }

    #[must_use]
    pub fn product_code(&self) -> u16 { u16::from_le_bytes(self.product_code) }

    #[must_use]
    pub fn serial_number(&self) -> u32 { u32::from_le_bytes(self.serial_number) }

    /// Display gamma. `0xFF` means the value lives in an extension block, and is
    /// reported as the sentinel `0.0`.
    #[must_use]
    pub fn gamma(&self) -> f32 {
        match self.gamma {
            0xFF => 0.0,
            raw => (f32::from(raw) + 100.0) / 100.0,
        }
    }

    #[must_use]
    pub fn is_digital_input(&self) -> bool { self.video_input & 0x80 != 0 }

    #[must_use]
    pub fn descriptor(&self, index: usize) -> Option<&[u8; DESCRIPTOR_SIZE]> {
        self.descriptors.get(index)
    }

    #[must_use]
    pub fn standard_timing(&self, index: usize) -> Option<&[u8; STANDARD_TIMING_SIZE]> {
        self.standard_timings.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, edid_offsets, test_fixtures::EdidBuilder};

    #[test]
    fn test_field_offsets_match_layout() {
        let mut bytes = [0_u8; EDID_BLOCK_SIZE];
        for (index, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::try_from(index).unwrap();
        }
        let raw = RawEdidBlock::from_bytes(&bytes);

        assert_eq2!(raw.manufacturer_id[0], edid_offsets::MANUFACTURER_ID as u8);
        assert_eq2!(raw.product_code[0], edid_offsets::PRODUCT_CODE as u8);
        assert_eq2!(raw.serial_number[0], edid_offsets::SERIAL_NUMBER as u8);
        assert_eq2!(raw.manufacture_week, edid_offsets::MANUFACTURE_WEEK as u8);
        assert_eq2!(raw.version, edid_offsets::VERSION as u8);
        assert_eq2!(raw.video_input, edid_offsets::VIDEO_INPUT as u8);
        assert_eq2!(raw.gamma, edid_offsets::GAMMA as u8);
        assert_eq2!(raw.feature_support, edid_offsets::FEATURE_SUPPORT as u8);
        assert_eq2!(raw.chromaticity[0], edid_offsets::CHROMATICITY as u8);
        assert_eq2!(raw.established_timings[0], edid_offsets::ESTABLISHED_TIMINGS as u8);
        assert_eq2!(raw.standard_timings[0][0], edid_offsets::STANDARD_TIMINGS as u8);
        assert_eq2!(raw.descriptors[0][0], edid_offsets::DESCRIPTORS as u8);
        assert_eq2!(raw.descriptors[3][17], 125);
        assert_eq2!(raw.extension_count, edid_offsets::EXTENSION_COUNT as u8);
        assert_eq2!(raw.checksum, edid_offsets::CHECKSUM as u8);
        assert_eq2!(raw.as_bytes(), &bytes);
    }

    #[test]
    fn test_from_bytes_does_not_validate() {
        let bytes = [0xAB_u8; EDID_BLOCK_SIZE];
        let raw = RawEdidBlock::from_bytes(&bytes);
        assert!(!raw.has_valid_header());
        assert!(!raw.has_valid_checksum());
        assert_eq2!(raw.version, 0xAB);
    }

    #[test]
    fn test_multi_byte_fields_endianness() {
        let bytes = EdidBuilder::new()
            .manufacturer(*b"DEL")
            .product_code(0xA0B1)
            .serial_number(0x0102_0304)
            .build();
        let raw = RawEdidBlock::try_from_slice(&bytes).unwrap();

        // PNP ID is big-endian: 'D'=4, 'E'=5, 'L'=12 -> 0b0_00100_00101_01100.
        assert_eq2!(raw.manufacturer_id, [0x10, 0xAC]);
        assert_eq2!(raw.manufacturer_id_raw(), 0x10AC);
        assert_eq2!(raw.decoded_manufacturer_id().unwrap().as_str(), "DEL");
        assert_eq2!(raw.product_code, [0xB1, 0xA0]);
        assert_eq2!(raw.product_code(), 0xA0B1);
        assert_eq2!(raw.serial_number(), 0x0102_0304);
    }

    #[test]
    fn test_gamma_decoding() {
        let mut bytes = EdidBuilder::new().gamma(120).build();
        let raw = RawEdidBlock::try_from_slice(&bytes).unwrap();
        assert!((raw.gamma() - 2.2).abs() < 1e-6);

        bytes[edid_offsets::GAMMA] = 0xFF;
        let raw = RawEdidBlock::try_from_slice(&bytes).unwrap();
        assert_eq2!(raw.gamma(), 0.0);
    }

    #[test]
    fn test_try_from_slice_rejects_short_input() {
        assert!(RawEdidBlock::try_from_slice(&[0_u8; 127]).is_none());
        assert!(RawEdidBlock::try_from_slice(&[0_u8; 256]).is_some());
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bit and byte extraction helpers shared by the EDID and CTA-861 decoders.
//!
//! EDID packs most quantities as a low byte plus a few high bits borrowed from a byte
//! that is shared with neighbouring fields. The decoders name every field with a
//! [`BitRange`] constant and read it through these helpers, so the extraction formula
//! sits next to the field name.
//!
//! ```text
//! byte:   7   6   5   4   3   2   1   0
//!       ┌───┬───┬───┬───┬───┬───┬───┬───┐
//!       │ x │ x │ ■ │ ■ │ ■ │ x │ x │ x │   BitRange::new(2, 3) → bits 4..=2
//!       └───┴───┴───┴───┴───┴───┴───┴───┘
//! ```
//!
//! Multi-byte reads are little-endian (the EDID default) and return `None` instead of
//! panicking when the slice is too short.

/// A contiguous run of `width` bits inside one byte, starting at bit `shift` (LSB = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    pub shift: u8,
    pub width: u8,
}

impl BitRange {
    #[must_use]
    pub const fn new(shift: u8, width: u8) -> Self { Self { shift, width } }

    /// Mask for the field after it has been shifted down to bit 0.
    #[must_use]
    pub const fn mask(self) -> u8 {
        match self.width {
            0 => 0,
            8.. => u8::MAX,
            width => (1 << width) - 1,
        }
    }

    #[must_use]
    pub const fn extract(self, byte: u8) -> u8 { (byte >> self.shift) & self.mask() }
}

#[must_use]
pub const fn bit_is_set(byte: u8, bit: u8) -> bool { byte & (1 << bit) != 0 }

/// Joins a low byte with high bits that were extracted from a shared byte. The result
/// is `high << 8 | low`, which is how every 10 and 12 bit EDID field is assembled.
#[must_use]
pub fn join_low_high(low: u8, high: u8) -> u16 { u16::from(high) << 8 | u16::from(low) }

#[must_use]
pub fn read_u16_le(bytes: &[u8], offset: usize) -> Option<u16> {
    let chunk = bytes.get(offset..)?.first_chunk::<2>()?;
    Some(u16::from_le_bytes(*chunk))
}

/// Reads a 24-bit little-endian value, the layout of IEEE OUIs in CTA-861 blocks.
#[must_use]
pub fn read_u24_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let [b0, b1, b2] = *bytes.get(offset..)?.first_chunk::<3>()?;
    Some(u32::from_le_bytes([b0, b1, b2, 0]))
}

#[must_use]
pub fn read_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let chunk = bytes.get(offset..)?.first_chunk::<4>()?;
    Some(u32::from_le_bytes(*chunk))
}

/// Borrows `N` bytes starting at `offset` as a fixed-size array.
#[must_use]
pub fn sub_array<const N: usize>(bytes: &[u8], offset: usize) -> Option<&[u8; N]> {
    bytes.get(offset..)?.first_chunk::<N>()
}

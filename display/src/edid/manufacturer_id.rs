// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Three letter PNP manufacturer ID.
//!
//! ```text
//! byte 8            byte 9
//! 7 6 5 4 3 2 1 0   7 6 5 4 3 2 1 0
//! 0 └─letter 1─┘└──letter 2──┘└letter 3┘     letter = 'A' + value - 1
//! ```
//!
//! The two bytes are big-endian, every other multi-byte EDID field is little-endian.

use super::lookup_pnp_id;
use crate::BitRange;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

const LETTER_WIDTH: u8 = 5;
const LETTER_SHIFTS: [u8; 3] = [10, 5, 0];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ManufacturerId([u8; 3]);

impl ManufacturerId {
    /// Decodes the two bytes as they appear in the EDID stream.
    #[must_use]
    pub fn from_raw(bytes: [u8; 2]) -> Option<Self> {
        Self::from_packed(u16::from_be_bytes(bytes))
    }

    /// Decodes an already byte-swapped 16-bit value. A letter value of 0 (blank) or
    /// 27..=31 makes the whole ID invalid.
    #[must_use]
    pub fn from_packed(packed: u16) -> Option<Self> {
        let [first, second, third] = LETTER_SHIFTS.map(|shift| {
            let low_byte = (packed >> shift).to_le_bytes()[0];
            let value = BitRange::new(0, LETTER_WIDTH).extract(low_byte);
            matches!(value, 1..=26).then(|| b'A' + value - 1)
        });
        Some(Self([first?, second?, third?]))
    }

    /// Builds an ID from three ASCII uppercase letters.
    #[must_use]
    pub fn from_letters(letters: [u8; 3]) -> Option<Self> {
        letters
            .iter()
            .all(u8::is_ascii_uppercase)
            .then_some(Self(letters))
    }

    #[must_use]
    pub fn to_packed(self) -> u16 {
        self.0
            .iter()
            .zip(LETTER_SHIFTS)
            .fold(0, |acc, (letter, shift)| acc | u16::from(letter - b'A' + 1) << shift)
    }

    /// Inverse of [`Self::from_raw`].
    #[must_use]
    pub fn to_raw(self) -> [u8; 2] { self.to_packed().to_be_bytes() }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 3] { &self.0 }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Construction only admits 'A'..='Z'.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Registered vendor name, if the ID is in the built-in PNP table.
    #[must_use]
    pub fn vendor_name(self) -> Option<&'static str> { lookup_pnp_id(self.0) }
}

impl Display for ManufacturerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { f.write_str(self.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case([0x10, 0xAC], "DEL")]
    #[test_case([0x4C, 0x2D], "SAM")]
    #[test_case([0x1E, 0x6D], "GSM")]
    #[test_case([0x04, 0x21], "AAA")]
    #[test_case([0x6B, 0x5A], "ZZZ")]
    fn test_from_raw(bytes: [u8; 2], expected: &str) {
        let id = ManufacturerId::from_raw(bytes).unwrap();
        assert_eq2!(id.as_str(), expected);
        assert_eq2!(id.to_raw(), bytes);
        assert_eq2!(id.to_string(), expected);
    }

    #[test_case(0x0000; "all blank")]
    #[test_case(0b0_00000_00001_00001; "first letter blank")]
    #[test_case(0b0_11011_00001_00001; "first letter out of range")]
    #[test_case(0b0_00001_00001_11111; "third letter out of range")]
    fn test_from_packed_invalid(packed: u16) {
        assert_eq2!(ManufacturerId::from_packed(packed), None);
    }

    #[test]
    fn test_reserved_bit_is_ignored() {
        let with_reserved = ManufacturerId::from_packed(0x8000 | 0x10AC).unwrap();
        assert_eq2!(with_reserved.as_str(), "DEL");
    }

    #[test]
    fn test_every_letter_combination_round_trips() {
        for a in b'A'..=b'Z' {
            for b in b'A'..=b'Z' {
                for c in b'A'..=b'Z' {
                    let id = ManufacturerId::from_letters([a, b, c]).unwrap();
                    let decoded = ManufacturerId::from_packed(id.to_packed()).unwrap();
                    assert_eq2!(decoded.as_bytes(), &[a, b, c]);
                }
            }
        }
    }

    #[test]
    fn test_from_letters_rejects_non_uppercase() {
        assert_eq2!(ManufacturerId::from_letters(*b"DeL"), None);
        assert_eq2!(ManufacturerId::from_letters(*b"D1L"), None);
    }

    #[test]
    fn test_vendor_name() {
        let id = ManufacturerId::from_letters(*b"DEL").unwrap();
        assert_eq2!(id.vendor_name(), Some("Dell Inc."));
    }
}

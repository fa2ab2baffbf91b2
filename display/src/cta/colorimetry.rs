// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Colorimetry data block (extended tag 5): two bytes of supported colorimetry
//! standards, with gamut metadata profile bits in the low nibble of the second.

use crate::BitRange;
use serde::{Deserialize, Serialize};

pub const COLORIMETRY_MIN_SIZE: usize = 2;

const METADATA_PROFILES: BitRange = BitRange::new(0, 4);

bitflags::bitflags! {
    /// First payload byte in the low 8 bits, high bits of the second above it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Colorimetry: u16 {
        const XV_YCC_601 = 1 << 0;
        const XV_YCC_709 = 1 << 1;
        const S_YCC_601 = 1 << 2;
        const OP_YCC_601 = 1 << 3;
        const OP_RGB = 1 << 4;
        const BT2020_CYCC = 1 << 5;
        const BT2020_YCC = 1 << 6;
        const BT2020_RGB = 1 << 7;

        const ST2113_RGB = 1 << 13;
        const ICTCP = 1 << 14;
        const DCI_P3 = 1 << 15;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorimetryBlock {
    pub colorimetry: Colorimetry,
    /// Gamut metadata profiles MD0 to MD3, one bit each.
    pub metadata_profiles: u8,
}

#[must_use]
pub fn parse_colorimetry(payload: &[u8]) -> Option<ColorimetryBlock> {
    let &[low, high] = payload.first_chunk::<COLORIMETRY_MIN_SIZE>()?;
    Some(ColorimetryBlock {
        colorimetry: Colorimetry::from_bits_truncate(u16::from_le_bytes([low, high])),
        metadata_profiles: METADATA_PROFILES.extract(high),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_bt2020_and_dci_p3() {
        let block = parse_colorimetry(&[0xE0, 0x81]).unwrap();
        assert_eq2!(
            block.colorimetry,
            Colorimetry::BT2020_RGB
                | Colorimetry::BT2020_YCC
                | Colorimetry::BT2020_CYCC
                | Colorimetry::DCI_P3
        );
        assert_eq2!(block.metadata_profiles, 0b0001);
    }

    #[test]
    fn test_second_byte_flags() {
        let block = parse_colorimetry(&[0x03, 0x60]).unwrap();
        assert!(block.colorimetry.contains(Colorimetry::ICTCP));
        assert!(block.colorimetry.contains(Colorimetry::ST2113_RGB));
        assert!(block.colorimetry.contains(Colorimetry::XV_YCC_709));
        assert!(!block.colorimetry.contains(Colorimetry::DCI_P3));
    }

    #[test]
    fn test_too_short() {
        assert_eq2!(parse_colorimetry(&[0xE0]), None);
    }
}

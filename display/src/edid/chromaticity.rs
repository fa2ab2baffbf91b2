// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CIE 1931 chromaticity coordinates of the display primaries and white point.
//!
//! Each coordinate is a 10-bit fraction of 1024. The 8 high bits have a byte each, the
//! 2 low bits are packed four to a byte in the first two bytes of the region:
//!
//! ```text
//! byte 0:  red_x  red_y  green_x green_y   (2 bits each, MSB first)
//! byte 1:  blue_x blue_y white_x white_y
//! byte 2..=9: red_x red_y green_x green_y blue_x blue_y white_x white_y (high 8 bits)
//! ```

use super::CHROMATICITY_SIZE;
use crate::BitRange;
use serde::{Deserialize, Serialize};

const LOW_BITS: [BitRange; 4] = [
    BitRange::new(6, 2),
    BitRange::new(4, 2),
    BitRange::new(2, 2),
    BitRange::new(0, 2),
];

/// A point in CIE 1931 xy space, kept as the raw 10-bit values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CiePoint {
    pub x_raw: u16,
    pub y_raw: u16,
}

impl CiePoint {
    #[must_use]
    pub fn new(x_raw: u16, y_raw: u16) -> Self { Self { x_raw, y_raw } }

    #[must_use]
    pub fn x(&self) -> f32 { f32::from(self.x_raw) / 1024.0 }

    #[must_use]
    pub fn y(&self) -> f32 { f32::from(self.y_raw) / 1024.0 }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chromaticity {
    pub red: CiePoint,
    pub green: CiePoint,
    pub blue: CiePoint,
    pub white: CiePoint,
}

/// Assembles a 10-bit coordinate from its high byte and a 2-bit low field.
#[must_use]
pub fn cie_coordinate(high: u8, low_bits: u8) -> u16 {
    u16::from(high) << 2 | u16::from(low_bits & 0b11)
}

/// Decodes the 10-byte chromaticity region. Every bit pattern is a valid result.
#[must_use]
pub fn parse_chromaticity_coords(bytes: &[u8; CHROMATICITY_SIZE]) -> Chromaticity {
    let [low_rg, low_bw, red_x, red_y, green_x, green_y, blue_x, blue_y, white_x, white_y] =
        *bytes;
    let [rx, ry, gx, gy] = LOW_BITS.map(|range| range.extract(low_rg));
    let [bx, by, wx, wy] = LOW_BITS.map(|range| range.extract(low_bw));

    Chromaticity {
        red: CiePoint::new(cie_coordinate(red_x, rx), cie_coordinate(red_y, ry)),
        green: CiePoint::new(cie_coordinate(green_x, gx), cie_coordinate(green_y, gy)),
        blue: CiePoint::new(cie_coordinate(blue_x, bx), cie_coordinate(blue_y, by)),
        white: CiePoint::new(cie_coordinate(white_x, wx), cie_coordinate(white_y, wy)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(0x00, 0b00, 0.0)]
    #[test_case(0x80, 0b00, 0.5)]
    #[test_case(0x40, 0b10, 0.251_953_13)]
    fn test_coordinate_value(high: u8, low: u8, expected: f32) {
        let point = CiePoint::new(cie_coordinate(high, low), 0);
        assert!((point.x() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_coordinate_upper_bound() {
        let value = CiePoint::new(cie_coordinate(0xFF, 0b11), 0).x();
        assert!(value > 0.998 && value < 1.0);
    }

    #[test]
    fn test_low_bits_are_routed_to_the_right_coordinate() {
        // Only one low-bit field set per coordinate, all high bytes zero.
        let bytes = [0b1000_0000, 0b0000_0001, 0, 0, 0, 0, 0, 0, 0, 0];
        let chroma = parse_chromaticity_coords(&bytes);
        assert_eq2!(chroma.red, CiePoint::new(2, 0));
        assert_eq2!(chroma.green, CiePoint::new(0, 0));
        assert_eq2!(chroma.blue, CiePoint::new(0, 0));
        assert_eq2!(chroma.white, CiePoint::new(0, 1));
    }

    #[test]
    fn test_srgb_primaries() {
        // sRGB-ish panel as commonly found in the wild.
        let bytes = [0xEE, 0x91, 0xA3, 0x54, 0x4C, 0x99, 0x26, 0x0F, 0x50, 0x54];
        let chroma = parse_chromaticity_coords(&bytes);
        assert_eq2!(chroma.red, CiePoint::new(0x28F, 0x152));
        assert_eq2!(chroma.green, CiePoint::new(0x133, 0x266));
        assert_eq2!(chroma.blue, CiePoint::new(0x09A, 0x03D));
        assert_eq2!(chroma.white, CiePoint::new(0x140, 0x151));
        assert!((chroma.white.x() - 0.3125).abs() < 1e-6);
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Feature support byte (24): DPMS states, color type or encodings, and three flags.

use crate::{BitRange, bit_is_set};
use serde::{Deserialize, Serialize};

const COLOR_FIELD: BitRange = BitRange::new(3, 2);
const SRGB_DEFAULT_BIT: u8 = 2;
const PREFERRED_TIMING_NATIVE_BIT: u8 = 1;
const CONTINUOUS_FREQUENCY_BIT: u8 = 0;
const DIGITAL_ENCODINGS_REVISION: u8 = 4;

bitflags::bitflags! {
    /// Display Power Management Signaling states the display supports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DpmsSupport: u8 {
        const STANDBY = 0b1000_0000;
        const SUSPEND = 0b0100_0000;
        const ACTIVE_OFF = 0b0010_0000;
    }
}

/// Analog displays (and digital ones before EDID 1.4) report a color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayColorType {
    MonochromeOrGrayscale,
    RgbColor,
    NonRgbColor,
    Undefined,
}

/// Digital EDID 1.4 displays report the color encodings they accept instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorEncodings {
    Rgb444,
    Rgb444YCbCr444,
    Rgb444YCbCr422,
    Rgb444YCbCr444YCbCr422,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSupport {
    ColorType(DisplayColorType),
    Encodings(ColorEncodings),
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSupport {
    pub dpms: DpmsSupport,
    pub color: ColorSupport,
    pub srgb_default: bool,
    /// EDID 1.4: the preferred timing carries the native pixel format and rate.
    pub preferred_timing_is_native: bool,
    /// EDID 1.4: continuous frequency (GTF or CVT) display. EDID 1.3: default GTF.
    pub continuous_frequency: bool,
}

#[must_use]
pub fn parse_feature_support(byte: u8, is_digital: bool, revision: u8) -> FeatureSupport {
    let color_bits = COLOR_FIELD.extract(byte);
    let color = if is_digital && revision >= DIGITAL_ENCODINGS_REVISION {
        ColorSupport::Encodings(match color_bits {
            0 => ColorEncodings::Rgb444,
            1 => ColorEncodings::Rgb444YCbCr444,
            2 => ColorEncodings::Rgb444YCbCr422,
            _ => ColorEncodings::Rgb444YCbCr444YCbCr422,
        })
    } else {
        ColorSupport::ColorType(match color_bits {
            0 => DisplayColorType::MonochromeOrGrayscale,
            1 => DisplayColorType::RgbColor,
            2 => DisplayColorType::NonRgbColor,
            _ => DisplayColorType::Undefined,
        })
    };

    FeatureSupport {
        dpms: DpmsSupport::from_bits_truncate(byte),
        color,
        srgb_default: bit_is_set(byte, SRGB_DEFAULT_BIT),
        preferred_timing_is_native: bit_is_set(byte, PREFERRED_TIMING_NATIVE_BIT),
        continuous_frequency: bit_is_set(byte, CONTINUOUS_FREQUENCY_BIT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(0x08, true, 4, ColorSupport::Encodings(ColorEncodings::Rgb444YCbCr444))]
    #[test_case(0x18, true, 4, ColorSupport::Encodings(ColorEncodings::Rgb444YCbCr444YCbCr422))]
    #[test_case(0x08, true, 3, ColorSupport::ColorType(DisplayColorType::RgbColor))]
    #[test_case(0x10, false, 4, ColorSupport::ColorType(DisplayColorType::NonRgbColor))]
    #[test_case(0x00, false, 4, ColorSupport::ColorType(DisplayColorType::MonochromeOrGrayscale))]
    fn test_color_support(byte: u8, is_digital: bool, revision: u8, expected: ColorSupport) {
        assert_eq2!(parse_feature_support(byte, is_digital, revision).color, expected);
    }

    #[test]
    fn test_flags() {
        let features = parse_feature_support(0b1010_0111, true, 4);
        assert_eq2!(features.dpms, DpmsSupport::STANDBY | DpmsSupport::ACTIVE_OFF);
        assert!(features.srgb_default);
        assert!(features.preferred_timing_is_native);
        assert!(features.continuous_frequency);

        let features = parse_feature_support(0b0100_0010, true, 4);
        assert_eq2!(features.dpms, DpmsSupport::SUSPEND);
        assert!(!features.srgb_default);
        assert!(features.preferred_timing_is_native);
        assert!(!features.continuous_frequency);
    }
}

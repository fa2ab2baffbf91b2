// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Payload decoders for the smaller display descriptor types: color point data (0xFB),
//! standard timing identifiers (0xFA) and CVT 3-byte timing codes (0xF8).
//!
//! Each takes the 13-byte payload (descriptor bytes 5 to 17) and skips unused entries.

use super::{CiePoint, DESCRIPTOR_PAYLOAD_SIZE, StandardTiming, cie_coordinate,
            parse_standard_timing};
use crate::{BitRange, join_low_high, sub_array};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// Color point.

const COLOR_POINT_ENTRY_SIZE: usize = 5;
const COLOR_POINT_ENTRY_COUNT: usize = 2;
const COLOR_POINT_X_LOW: BitRange = BitRange::new(2, 2);
const COLOR_POINT_Y_LOW: BitRange = BitRange::new(0, 2);
const GAMMA_IN_EXTENSION: u8 = 0xFF;

/// An additional white point. `index` 0 marks an unused entry and is never yielded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPoint {
    pub index: u8,
    pub white: CiePoint,
    /// `None` when the gamma byte is 0xFF (defined elsewhere).
    pub gamma: Option<f32>,
}

pub type ColorPoints = SmallVec<[ColorPoint; COLOR_POINT_ENTRY_COUNT]>;

#[must_use]
pub fn parse_color_points(payload: &[u8; DESCRIPTOR_PAYLOAD_SIZE]) -> ColorPoints {
    (0..COLOR_POINT_ENTRY_COUNT)
        .filter_map(|entry| {
            let [index, low_bits, x_high, y_high, gamma] =
                *sub_array::<COLOR_POINT_ENTRY_SIZE>(payload, entry * COLOR_POINT_ENTRY_SIZE)?;
            if index == 0 {
                return None;
            }
            Some(ColorPoint {
                index,
                white: CiePoint::new(
                    cie_coordinate(x_high, COLOR_POINT_X_LOW.extract(low_bits)),
                    cie_coordinate(y_high, COLOR_POINT_Y_LOW.extract(low_bits)),
                ),
                gamma: (gamma != GAMMA_IN_EXTENSION)
                    .then(|| (f32::from(gamma) + 100.0) / 100.0),
            })
        })
        .collect()
}

// Standard timing identifiers.

const STANDARD_TIMING_ID_COUNT: usize = 6;

pub type StandardTimings = SmallVec<[StandardTiming; 8]>;

#[must_use]
pub fn parse_standard_timing_ids(payload: &[u8; DESCRIPTOR_PAYLOAD_SIZE]) -> StandardTimings {
    (0..STANDARD_TIMING_ID_COUNT)
        .filter_map(|entry| sub_array::<2>(payload, entry * 2))
        .filter_map(parse_standard_timing)
        .collect()
}

// CVT 3-byte timing codes.

const CVT_CODE_SIZE: usize = 3;
const CVT_CODE_COUNT: usize = 4;
const CVT_CODES_OFFSET: usize = 1;
const CVT_LINES_HI: BitRange = BitRange::new(4, 4);
const CVT_CODE_ASPECT: BitRange = BitRange::new(2, 2);
const CVT_PREFERRED_RATE: BitRange = BitRange::new(5, 2);

/// Aspect ratios used by the CVT descriptor and the range limits CVT block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CvtAspectRatio {
    Ratio4x3,
    Ratio16x9,
    Ratio16x10,
    Ratio5x4,
    Ratio15x9,
}

impl CvtAspectRatio {
    #[must_use]
    pub fn parts(self) -> (u32, u32) {
        match self {
            Self::Ratio4x3 => (4, 3),
            Self::Ratio16x9 => (16, 9),
            Self::Ratio16x10 => (16, 10),
            Self::Ratio5x4 => (5, 4),
            Self::Ratio15x9 => (15, 9),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CvtPreferredRate {
    Hz50,
    Hz60,
    Hz75,
    Hz85,
}

impl CvtPreferredRate {
    #[must_use]
    pub fn hz(self) -> u8 {
        match self {
            Self::Hz50 => 50,
            Self::Hz60 => 60,
            Self::Hz75 => 75,
            Self::Hz85 => 85,
        }
    }
}

bitflags::bitflags! {
    /// Vertical rates a CVT timing code is supported at.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CvtSupportedRates: u8 {
        const HZ_50 = 0b1_0000;
        const HZ_60 = 0b0_1000;
        const HZ_75 = 0b0_0100;
        const HZ_85 = 0b0_0010;
        const HZ_60_REDUCED_BLANKING = 0b0_0001;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CvtTimingCode {
    pub v_lines: u16,
    pub aspect_ratio: CvtAspectRatio,
    pub preferred_rate: CvtPreferredRate,
    pub supported_rates: CvtSupportedRates,
}

impl CvtTimingCode {
    /// `8 * floor(v_lines * aspect / 8)`.
    #[must_use]
    pub fn h_pixels(&self) -> u32 {
        let (ratio_w, ratio_h) = self.aspect_ratio.parts();
        u32::from(self.v_lines) * ratio_w / ratio_h / 8 * 8
    }
}

pub type CvtTimingCodes = SmallVec<[CvtTimingCode; CVT_CODE_COUNT]>;

/// Decodes one 3-byte code. An all-zero code is an unused slot.
#[must_use]
pub fn parse_cvt_timing_code(bytes: &[u8; CVT_CODE_SIZE]) -> Option<CvtTimingCode> {
    if *bytes == [0; CVT_CODE_SIZE] {
        return None;
    }
    let [lines_lo, lines_hi_aspect, rates] = *bytes;
    let lines_raw = join_low_high(lines_lo, CVT_LINES_HI.extract(lines_hi_aspect));
    let aspect_ratio = match CVT_CODE_ASPECT.extract(lines_hi_aspect) {
        0 => CvtAspectRatio::Ratio4x3,
        1 => CvtAspectRatio::Ratio16x9,
        2 => CvtAspectRatio::Ratio16x10,
        _ => CvtAspectRatio::Ratio15x9,
    };
    let preferred_rate = match CVT_PREFERRED_RATE.extract(rates) {
        0 => CvtPreferredRate::Hz50,
        1 => CvtPreferredRate::Hz60,
        2 => CvtPreferredRate::Hz75,
        _ => CvtPreferredRate::Hz85,
    };
    Some(CvtTimingCode {
        v_lines: (lines_raw + 1) * 2,
        aspect_ratio,
        preferred_rate,
        supported_rates: CvtSupportedRates::from_bits_truncate(rates),
    })
}

#[must_use]
pub fn parse_cvt_timing_codes(payload: &[u8; DESCRIPTOR_PAYLOAD_SIZE]) -> CvtTimingCodes {
    (0..CVT_CODE_COUNT)
        .filter_map(|entry| {
            sub_array::<CVT_CODE_SIZE>(payload, CVT_CODES_OFFSET + entry * CVT_CODE_SIZE)
        })
        .filter_map(parse_cvt_timing_code)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StandardAspectRatio, assert_eq2};
    use test_case::test_case;

    #[test]
    fn test_color_points() {
        let payload = [
            0x01, 0b0000_1001, 0x50, 0x54, 0x78, // index 1, gamma 2.2
            0x00, 0x00, 0x00, 0x00, 0x00, // unused
            0x0A, 0x20, 0x20,
        ];
        let points = parse_color_points(&payload);
        assert_eq2!(points.len(), 1);
        assert_eq2!(points[0].index, 1);
        assert_eq2!(points[0].white, CiePoint::new(0x142, 0x151));
        assert!((points[0].gamma.unwrap() - 2.2).abs() < 1e-6);
    }

    #[test]
    fn test_color_point_gamma_sentinel() {
        let mut payload = [0_u8; DESCRIPTOR_PAYLOAD_SIZE];
        payload[5..10].copy_from_slice(&[0x02, 0, 0x80, 0x80, 0xFF]);
        let points = parse_color_points(&payload);
        assert_eq2!(points.len(), 1);
        assert_eq2!(points[0].index, 2);
        assert_eq2!(points[0].gamma, None);
    }

    #[test]
    fn test_standard_timing_ids() {
        let payload = [
            0xD1, 0xC0, 0x01, 0x01, 0x81, 0x80, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x0A,
        ];
        let timings = parse_standard_timing_ids(&payload);
        assert_eq2!(timings.len(), 2);
        assert_eq2!(timings[0].aspect_ratio, StandardAspectRatio::Ratio16x9);
        assert_eq2!((timings[1].h_active, timings[1].v_active), (1280, 1024));
    }

    #[test_case([0x1B, 0x24, 0x2A], 1080, CvtAspectRatio::Ratio16x9, 1920)]
    #[test_case([0x7F, 0x11, 0x2A], 768, CvtAspectRatio::Ratio4x3, 1024)]
    #[test_case([0x7F, 0x1C, 0x2A], 768, CvtAspectRatio::Ratio15x9, 1280)]
    #[test_case([0x57, 0x28, 0x2A], 1200, CvtAspectRatio::Ratio16x10, 1920)]
    fn test_cvt_timing_code(bytes: [u8; 3], v_lines: u16, aspect: CvtAspectRatio, h_pixels: u32) {
        let code = parse_cvt_timing_code(&bytes).unwrap();
        assert_eq2!(code.v_lines, v_lines);
        assert_eq2!(code.aspect_ratio, aspect);
        assert_eq2!(code.h_pixels(), h_pixels);
        assert_eq2!(code.preferred_rate, CvtPreferredRate::Hz60);
        assert_eq2!(code.preferred_rate.hz(), 60);
        assert_eq2!(
            code.supported_rates,
            CvtSupportedRates::HZ_60 | CvtSupportedRates::HZ_85
        );
    }

    #[test]
    fn test_cvt_timing_codes_skip_unused() {
        let mut payload = [0_u8; DESCRIPTOR_PAYLOAD_SIZE];
        payload[0] = 0x01;
        payload[4..7].copy_from_slice(&[0x1B, 0x24, 0x2A]);
        let codes = parse_cvt_timing_codes(&payload);
        assert_eq2!(codes.len(), 1);
        assert_eq2!(codes[0].v_lines, 1080);
    }
}

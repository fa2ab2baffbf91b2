// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Display range limits descriptor (tag 0xFD).
//!
//! ```text
//! byte 4      rate offsets (EDID 1.4): bits 3-2 horizontal, bits 1-0 vertical
//!               0b10 = max + 255, 0b11 = min + 255 and max + 255
//! byte 5..=8  min V Hz, max V Hz, min H kHz, max H kHz
//! byte 9      max pixel clock / 10 MHz
//! byte 10     timing support: 0x00 default GTF, 0x01 range limits only,
//!             0x02 secondary GTF curve, 0x04 CVT
//! byte 11..   7 bytes of secondary GTF or CVT data, depending on byte 10
//! ```

use super::{CvtAspectRatio, DESCRIPTOR_PAYLOAD_SIZE};
use crate::{BitRange, GtfCurve, bit_is_set, join_low_high};
use serde::{Deserialize, Serialize};

const RATE_OFFSET: u16 = 255;
const H_OFFSET_BITS: BitRange = BitRange::new(2, 2);
const V_OFFSET_BITS: BitRange = BitRange::new(0, 2);
const PIXEL_CLOCK_STEP_MHZ: u16 = 10;

const TIMING_DEFAULT_GTF: u8 = 0x00;
const TIMING_RANGE_LIMITS_ONLY: u8 = 0x01;
const TIMING_SECONDARY_GTF: u8 = 0x02;
const TIMING_CVT: u8 = 0x04;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeLimits {
    pub min_v_rate_hz: u16,
    pub max_v_rate_hz: u16,
    pub min_h_rate_khz: u16,
    pub max_h_rate_khz: u16,
    /// `None` when the byte is 0.
    pub max_pixel_clock_mhz: Option<u16>,
    pub timing_support: TimingSupport,
}

impl RangeLimits {
    /// Max pixel clock refined by the CVT block's 0.25 MHz precision bits, when present.
    #[must_use]
    pub fn max_pixel_clock_precise_mhz(&self) -> Option<f64> {
        let coarse = f64::from(self.max_pixel_clock_mhz?);
        match self.timing_support {
            TimingSupport::Cvt(cvt) => {
                Some(coarse - f64::from(cvt.pixel_clock_precision_quarter_mhz) * 0.25)
            }
            _ => Some(coarse),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimingSupport {
    DefaultGtf,
    RangeLimitsOnly,
    SecondaryGtf(SecondaryGtfCurve),
    Cvt(CvtSupport),
    Reserved(u8),
}

/// Secondary GTF curve, used above `start_break_khz`. `c` and `j` are stored doubled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryGtfCurve {
    pub start_break_khz: u16,
    pub c_x2: u8,
    pub m: u16,
    pub k: u8,
    pub j_x2: u8,
}

impl SecondaryGtfCurve {
    #[must_use]
    pub fn c(&self) -> f64 { f64::from(self.c_x2) / 2.0 }

    #[must_use]
    pub fn j(&self) -> f64 { f64::from(self.j_x2) / 2.0 }
}

impl From<SecondaryGtfCurve> for GtfCurve {
    fn from(curve: SecondaryGtfCurve) -> Self {
        GtfCurve {
            m: f64::from(curve.m),
            c: curve.c(),
            k: f64::from(curve.k),
            j: curve.j(),
        }
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CvtAspectRatios: u8 {
        const RATIO_4X3 = 0b1000_0000;
        const RATIO_16X9 = 0b0100_0000;
        const RATIO_16X10 = 0b0010_0000;
        const RATIO_5X4 = 0b0001_0000;
        const RATIO_15X9 = 0b0000_1000;
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CvtScaling: u8 {
        const HORIZONTAL_SHRINK = 0b1000_0000;
        const HORIZONTAL_STRETCH = 0b0100_0000;
        const VERTICAL_SHRINK = 0b0010_0000;
        const VERTICAL_STRETCH = 0b0001_0000;
    }
}

const CVT_PRECISION: BitRange = BitRange::new(2, 6);
const CVT_MAX_PIXELS_HI: BitRange = BitRange::new(0, 2);
const CVT_PREFERRED_ASPECT: BitRange = BitRange::new(5, 3);
const CVT_REDUCED_BLANKING_BIT: u8 = 4;
const CVT_STANDARD_BLANKING_BIT: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvtSupport {
    pub version_major: u8,
    pub version_minor: u8,
    /// Quarter-MHz steps subtracted from the coarse max pixel clock.
    pub pixel_clock_precision_quarter_mhz: u8,
    /// `None` means no limit.
    pub max_active_pixels_per_line: Option<u16>,
    pub supported_aspect_ratios: CvtAspectRatios,
    pub preferred_aspect_ratio: Option<CvtAspectRatio>,
    pub reduced_blanking: bool,
    pub standard_blanking: bool,
    pub scaling: CvtScaling,
    pub preferred_v_rate_hz: u8,
}

fn apply_offsets(min: u8, max: u8, offset_bits: u8) -> (u16, u16) {
    let max_offset = if offset_bits & 0b10 != 0 { RATE_OFFSET } else { 0 };
    let min_offset = if offset_bits == 0b11 { RATE_OFFSET } else { 0 };
    (u16::from(min) + min_offset, u16::from(max) + max_offset)
}

fn parse_cvt_support(extra: &[u8; 7]) -> CvtSupport {
    let [version, precision, max_pixels_lo, aspects, preferences, scaling, v_rate] = *extra;
    let max_pixels = join_low_high(max_pixels_lo, CVT_MAX_PIXELS_HI.extract(precision));
    CvtSupport {
        version_major: version >> 4,
        version_minor: version & 0x0F,
        pixel_clock_precision_quarter_mhz: CVT_PRECISION.extract(precision),
        max_active_pixels_per_line: (max_pixels != 0).then_some(max_pixels * 8),
        supported_aspect_ratios: CvtAspectRatios::from_bits_truncate(aspects),
        preferred_aspect_ratio: match CVT_PREFERRED_ASPECT.extract(preferences) {
            0 => Some(CvtAspectRatio::Ratio4x3),
            1 => Some(CvtAspectRatio::Ratio16x9),
            2 => Some(CvtAspectRatio::Ratio16x10),
            3 => Some(CvtAspectRatio::Ratio5x4),
            4 => Some(CvtAspectRatio::Ratio15x9),
            _ => None,
        },
        reduced_blanking: bit_is_set(preferences, CVT_REDUCED_BLANKING_BIT),
        standard_blanking: bit_is_set(preferences, CVT_STANDARD_BLANKING_BIT),
        scaling: CvtScaling::from_bits_truncate(scaling),
        preferred_v_rate_hz: v_rate,
    }
}

/// Decodes a range limits payload. `rate_offsets` is descriptor byte 4, which is only
/// meaningful in EDID 1.4 and is 0 otherwise.
#[must_use]
pub fn parse_range_limits(
    rate_offsets: u8,
    payload: &[u8; DESCRIPTOR_PAYLOAD_SIZE],
) -> RangeLimits {
    let [
        min_v_rate,
        max_v_rate,
        min_h_rate,
        max_h_rate,
        max_pixel_clock,
        support,
        extra @ ..,
    ] = *payload;

    let (min_v_rate_hz, max_v_rate_hz) =
        apply_offsets(min_v_rate, max_v_rate, V_OFFSET_BITS.extract(rate_offsets));
    let (min_h_rate_khz, max_h_rate_khz) =
        apply_offsets(min_h_rate, max_h_rate, H_OFFSET_BITS.extract(rate_offsets));

    let timing_support = match support {
        TIMING_DEFAULT_GTF => TimingSupport::DefaultGtf,
        TIMING_RANGE_LIMITS_ONLY => TimingSupport::RangeLimitsOnly,
        TIMING_SECONDARY_GTF => {
            let [_reserved, start_break, c_x2, m_lo, m_hi, k, j_x2] = extra;
            TimingSupport::SecondaryGtf(SecondaryGtfCurve {
                start_break_khz: u16::from(start_break) * 2,
                c_x2,
                m: u16::from_le_bytes([m_lo, m_hi]),
                k,
                j_x2,
            })
        }
        TIMING_CVT => TimingSupport::Cvt(parse_cvt_support(&extra)),
        other => TimingSupport::Reserved(other),
    };

    RangeLimits {
        min_v_rate_hz,
        max_v_rate_hz,
        min_h_rate_khz,
        max_h_rate_khz,
        max_pixel_clock_mhz: (max_pixel_clock != 0)
            .then(|| u16::from(max_pixel_clock) * PIXEL_CLOCK_STEP_MHZ),
        timing_support,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn payload(support: u8, extra: [u8; 7]) -> [u8; DESCRIPTOR_PAYLOAD_SIZE] {
        let mut bytes = [0_u8; DESCRIPTOR_PAYLOAD_SIZE];
        bytes[..6].copy_from_slice(&[48, 75, 30, 83, 17, support]);
        bytes[6..].copy_from_slice(&extra);
        bytes
    }

    #[test]
    fn test_default_gtf() {
        let padding = [0x0A, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20];
        let limits = parse_range_limits(0, &payload(0x00, padding));
        assert_eq2!(
            limits,
            RangeLimits {
                min_v_rate_hz: 48,
                max_v_rate_hz: 75,
                min_h_rate_khz: 30,
                max_h_rate_khz: 83,
                max_pixel_clock_mhz: Some(170),
                timing_support: TimingSupport::DefaultGtf,
            }
        );
        assert_eq2!(limits.max_pixel_clock_precise_mhz(), Some(170.0));
    }

    #[test_case(0b0000, (48, 75), (30, 83))]
    #[test_case(0b0010, (48, 330), (30, 83))]
    #[test_case(0b0011, (303, 330), (30, 83))]
    #[test_case(0b1000, (48, 75), (30, 338))]
    #[test_case(0b1100, (48, 75), (285, 338))]
    #[test_case(0b0001, (48, 75), (30, 83))]
    fn test_rate_offsets(offsets: u8, v: (u16, u16), h: (u16, u16)) {
        let limits = parse_range_limits(offsets, &payload(0x01, [0; 7]));
        assert_eq2!((limits.min_v_rate_hz, limits.max_v_rate_hz), v);
        assert_eq2!((limits.min_h_rate_khz, limits.max_h_rate_khz), h);
        assert_eq2!(limits.timing_support, TimingSupport::RangeLimitsOnly);
    }

    #[test]
    fn test_secondary_gtf_curve() {
        let extra = [0x00, 0x3C, 0x50, 0x58, 0x02, 0x80, 0x28];
        let limits = parse_range_limits(0, &payload(0x02, extra));
        let TimingSupport::SecondaryGtf(curve) = limits.timing_support else {
            panic!("expected secondary GTF");
        };
        assert_eq2!(curve.start_break_khz, 120);
        assert_eq2!(curve.m, 600);
        assert_eq2!(curve.c(), 40.0);
        assert_eq2!(curve.j(), 20.0);
        assert_eq2!(GtfCurve::from(curve), GtfCurve::default());
    }

    #[test]
    fn test_cvt_support() {
        let limits = parse_range_limits(
            0,
            &payload(0x04, [0x11, 0b0000_1001, 0x40, 0b1110_0000, 0b0011_1000, 0x90, 60]),
        );
        let TimingSupport::Cvt(cvt) = limits.timing_support else {
            panic!("expected CVT");
        };
        assert_eq2!(
            cvt,
            CvtSupport {
                version_major: 1,
                version_minor: 1,
                pixel_clock_precision_quarter_mhz: 2,
                max_active_pixels_per_line: Some(2560),
                supported_aspect_ratios: CvtAspectRatios::RATIO_4X3
                    | CvtAspectRatios::RATIO_16X9
                    | CvtAspectRatios::RATIO_16X10,
                preferred_aspect_ratio: Some(CvtAspectRatio::Ratio16x9),
                reduced_blanking: true,
                standard_blanking: true,
                scaling: CvtScaling::HORIZONTAL_SHRINK | CvtScaling::VERTICAL_STRETCH,
                preferred_v_rate_hz: 60,
            }
        );
        assert_eq2!(limits.max_pixel_clock_precise_mhz(), Some(169.5));
    }

    #[test]
    fn test_reserved_support_and_missing_clock() {
        let mut bytes = payload(0x07, [0; 7]);
        bytes[4] = 0;
        let limits = parse_range_limits(0, &bytes);
        assert_eq2!(limits.timing_support, TimingSupport::Reserved(0x07));
        assert_eq2!(limits.max_pixel_clock_mhz, None);
        assert_eq2!(limits.max_pixel_clock_precise_mhz(), None);
    }
}

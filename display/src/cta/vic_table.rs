// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CTA-861 Video Identification Codes 1 to 127.
//!
//! `h_active` counts samples on the wire, so pixel-repeated formats (VIC 6, 7, 21, ...)
//! report 1440 and 2880. `refresh_hz` is the nominal field rate. The 1000/1001
//! variants (59.94, 23.976, ...) share the VIC of their integer rate.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum PictureAspectRatio {
    #[strum(serialize = "4:3")]
    R4x3,
    #[strum(serialize = "16:9")]
    R16x9,
    #[strum(serialize = "64:27")]
    R64x27,
    #[strum(serialize = "256:135")]
    R256x135,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VicTiming {
    pub vic: u8,
    pub h_active: u16,
    pub v_active: u16,
    pub interlaced: bool,
    pub refresh_hz: u16,
    pub aspect_ratio: PictureAspectRatio,
    pub pixel_clock_khz: u32,
}

impl VicTiming {
    const fn progressive(
        vic: u8,
        h_active: u16,
        v_active: u16,
        refresh_hz: u16,
        aspect_ratio: PictureAspectRatio,
        pixel_clock_khz: u32,
    ) -> Self {
        Self {
            vic,
            h_active,
            v_active,
            interlaced: false,
            refresh_hz,
            aspect_ratio,
            pixel_clock_khz,
        }
    }

    const fn interlaced(
        vic: u8,
        h_active: u16,
        v_active: u16,
        refresh_hz: u16,
        aspect_ratio: PictureAspectRatio,
        pixel_clock_khz: u32,
    ) -> Self {
        Self {
            interlaced: true,
            ..Self::progressive(vic, h_active, v_active, refresh_hz, aspect_ratio, pixel_clock_khz)
        }
    }
}

/// Indexed by `vic - 1`.
pub static VIC_TABLE: [VicTiming; 127] = [
    VicTiming::progressive(1, 640, 480, 60, PictureAspectRatio::R4x3, 25_175),
    VicTiming::progressive(2, 720, 480, 60, PictureAspectRatio::R4x3, 27_000),
    VicTiming::progressive(3, 720, 480, 60, PictureAspectRatio::R16x9, 27_000),
    VicTiming::progressive(4, 1280, 720, 60, PictureAspectRatio::R16x9, 74_250),
    VicTiming::interlaced(5, 1920, 1080, 60, PictureAspectRatio::R16x9, 74_250),
    VicTiming::interlaced(6, 1440, 480, 60, PictureAspectRatio::R4x3, 27_000),
    VicTiming::interlaced(7, 1440, 480, 60, PictureAspectRatio::R16x9, 27_000),
    VicTiming::progressive(8, 1440, 240, 60, PictureAspectRatio::R4x3, 27_000),
    VicTiming::progressive(9, 1440, 240, 60, PictureAspectRatio::R16x9, 27_000),
    VicTiming::interlaced(10, 2880, 480, 60, PictureAspectRatio::R4x3, 54_000),
    VicTiming::interlaced(11, 2880, 480, 60, PictureAspectRatio::R16x9, 54_000),
    VicTiming::progressive(12, 2880, 240, 60, PictureAspectRatio::R4x3, 54_000),
    VicTiming::progressive(13, 2880, 240, 60, PictureAspectRatio::R16x9, 54_000),
    VicTiming::progressive(14, 1440, 480, 60, PictureAspectRatio::R4x3, 54_000),
    VicTiming::progressive(15, 1440, 480, 60, PictureAspectRatio::R16x9, 54_000),
    VicTiming::progressive(16, 1920, 1080, 60, PictureAspectRatio::R16x9, 148_500),
    VicTiming::progressive(17, 720, 576, 50, PictureAspectRatio::R4x3, 27_000),
    VicTiming::progressive(18, 720, 576, 50, PictureAspectRatio::R16x9, 27_000),
    VicTiming::progressive(19, 1280, 720, 50, PictureAspectRatio::R16x9, 74_250),
    VicTiming::interlaced(20, 1920, 1080, 50, PictureAspectRatio::R16x9, 74_250),
    VicTiming::interlaced(21, 1440, 576, 50, PictureAspectRatio::R4x3, 27_000),
    VicTiming::interlaced(22, 1440, 576, 50, PictureAspectRatio::R16x9, 27_000),
    VicTiming::progressive(23, 1440, 288, 50, PictureAspectRatio::R4x3, 27_000),
    VicTiming::progressive(24, 1440, 288, 50, PictureAspectRatio::R16x9, 27_000),
    VicTiming::interlaced(25, 2880, 576, 50, PictureAspectRatio::R4x3, 54_000),
    VicTiming::interlaced(26, 2880, 576, 50, PictureAspectRatio::R16x9, 54_000),
    VicTiming::progressive(27, 2880, 288, 50, PictureAspectRatio::R4x3, 54_000),
    VicTiming::progressive(28, 2880, 288, 50, PictureAspectRatio::R16x9, 54_000),
    VicTiming::progressive(29, 1440, 576, 50, PictureAspectRatio::R4x3, 54_000),
    VicTiming::progressive(30, 1440, 576, 50, PictureAspectRatio::R16x9, 54_000),
    VicTiming::progressive(31, 1920, 1080, 50, PictureAspectRatio::R16x9, 148_500),
    VicTiming::progressive(32, 1920, 1080, 24, PictureAspectRatio::R16x9, 74_250),
    VicTiming::progressive(33, 1920, 1080, 25, PictureAspectRatio::R16x9, 74_250),
    VicTiming::progressive(34, 1920, 1080, 30, PictureAspectRatio::R16x9, 74_250),
    VicTiming::progressive(35, 2880, 480, 60, PictureAspectRatio::R4x3, 108_000),
    VicTiming::progressive(36, 2880, 480, 60, PictureAspectRatio::R16x9, 108_000),
    VicTiming::progressive(37, 2880, 576, 50, PictureAspectRatio::R4x3, 108_000),
    VicTiming::progressive(38, 2880, 576, 50, PictureAspectRatio::R16x9, 108_000),
    VicTiming::interlaced(39, 1920, 1080, 50, PictureAspectRatio::R16x9, 72_000),
    VicTiming::interlaced(40, 1920, 1080, 100, PictureAspectRatio::R16x9, 148_500),
    VicTiming::progressive(41, 1280, 720, 100, PictureAspectRatio::R16x9, 148_500),
    VicTiming::progressive(42, 720, 576, 100, PictureAspectRatio::R4x3, 54_000),
    VicTiming::progressive(43, 720, 576, 100, PictureAspectRatio::R16x9, 54_000),
    VicTiming::interlaced(44, 1440, 576, 100, PictureAspectRatio::R4x3, 54_000),
    VicTiming::interlaced(45, 1440, 576, 100, PictureAspectRatio::R16x9, 54_000),
    VicTiming::interlaced(46, 1920, 1080, 120, PictureAspectRatio::R16x9, 148_500),
    VicTiming::progressive(47, 1280, 720, 120, PictureAspectRatio::R16x9, 148_500),
    VicTiming::progressive(48, 720, 480, 120, PictureAspectRatio::R4x3, 54_000),
    VicTiming::progressive(49, 720, 480, 120, PictureAspectRatio::R16x9, 54_000),
    VicTiming::interlaced(50, 1440, 480, 120, PictureAspectRatio::R4x3, 54_000),
    VicTiming::interlaced(51, 1440, 480, 120, PictureAspectRatio::R16x9, 54_000),
    VicTiming::progressive(52, 720, 576, 200, PictureAspectRatio::R4x3, 108_000),
    VicTiming::progressive(53, 720, 576, 200, PictureAspectRatio::R16x9, 108_000),
    VicTiming::interlaced(54, 1440, 576, 200, PictureAspectRatio::R4x3, 108_000),
    VicTiming::interlaced(55, 1440, 576, 200, PictureAspectRatio::R16x9, 108_000),
    VicTiming::progressive(56, 720, 480, 240, PictureAspectRatio::R4x3, 108_000),
    VicTiming::progressive(57, 720, 480, 240, PictureAspectRatio::R16x9, 108_000),
    VicTiming::interlaced(58, 1440, 480, 240, PictureAspectRatio::R4x3, 108_000),
    VicTiming::interlaced(59, 1440, 480, 240, PictureAspectRatio::R16x9, 108_000),
    VicTiming::progressive(60, 1280, 720, 24, PictureAspectRatio::R16x9, 59_400),
    VicTiming::progressive(61, 1280, 720, 25, PictureAspectRatio::R16x9, 74_250),
    VicTiming::progressive(62, 1280, 720, 30, PictureAspectRatio::R16x9, 74_250),
    VicTiming::progressive(63, 1920, 1080, 120, PictureAspectRatio::R16x9, 297_000),
    VicTiming::progressive(64, 1920, 1080, 100, PictureAspectRatio::R16x9, 297_000),
    VicTiming::progressive(65, 1280, 720, 24, PictureAspectRatio::R64x27, 59_400),
    VicTiming::progressive(66, 1280, 720, 25, PictureAspectRatio::R64x27, 74_250),
    VicTiming::progressive(67, 1280, 720, 30, PictureAspectRatio::R64x27, 74_250),
    VicTiming::progressive(68, 1280, 720, 50, PictureAspectRatio::R64x27, 74_250),
    VicTiming::progressive(69, 1280, 720, 60, PictureAspectRatio::R64x27, 74_250),
    VicTiming::progressive(70, 1280, 720, 100, PictureAspectRatio::R64x27, 148_500),
    VicTiming::progressive(71, 1280, 720, 120, PictureAspectRatio::R64x27, 148_500),
    VicTiming::progressive(72, 1920, 1080, 24, PictureAspectRatio::R64x27, 74_250),
    VicTiming::progressive(73, 1920, 1080, 25, PictureAspectRatio::R64x27, 74_250),
    VicTiming::progressive(74, 1920, 1080, 30, PictureAspectRatio::R64x27, 74_250),
    VicTiming::progressive(75, 1920, 1080, 50, PictureAspectRatio::R64x27, 148_500),
    VicTiming::progressive(76, 1920, 1080, 60, PictureAspectRatio::R64x27, 148_500),
    VicTiming::progressive(77, 1920, 1080, 100, PictureAspectRatio::R64x27, 297_000),
    VicTiming::progressive(78, 1920, 1080, 120, PictureAspectRatio::R64x27, 297_000),
    VicTiming::progressive(79, 1680, 720, 24, PictureAspectRatio::R64x27, 59_400),
    VicTiming::progressive(80, 1680, 720, 25, PictureAspectRatio::R64x27, 59_400),
    VicTiming::progressive(81, 1680, 720, 30, PictureAspectRatio::R64x27, 59_400),
    VicTiming::progressive(82, 1680, 720, 50, PictureAspectRatio::R64x27, 82_500),
    VicTiming::progressive(83, 1680, 720, 60, PictureAspectRatio::R64x27, 99_000),
    VicTiming::progressive(84, 1680, 720, 100, PictureAspectRatio::R64x27, 165_000),
    VicTiming::progressive(85, 1680, 720, 120, PictureAspectRatio::R64x27, 198_000),
    VicTiming::progressive(86, 2560, 1080, 24, PictureAspectRatio::R64x27, 99_000),
    VicTiming::progressive(87, 2560, 1080, 25, PictureAspectRatio::R64x27, 90_000),
    VicTiming::progressive(88, 2560, 1080, 30, PictureAspectRatio::R64x27, 118_800),
    VicTiming::progressive(89, 2560, 1080, 50, PictureAspectRatio::R64x27, 185_625),
    VicTiming::progressive(90, 2560, 1080, 60, PictureAspectRatio::R64x27, 198_000),
    VicTiming::progressive(91, 2560, 1080, 100, PictureAspectRatio::R64x27, 371_250),
    VicTiming::progressive(92, 2560, 1080, 120, PictureAspectRatio::R64x27, 495_000),
    VicTiming::progressive(93, 3840, 2160, 24, PictureAspectRatio::R16x9, 297_000),
    VicTiming::progressive(94, 3840, 2160, 25, PictureAspectRatio::R16x9, 297_000),
    VicTiming::progressive(95, 3840, 2160, 30, PictureAspectRatio::R16x9, 297_000),
    VicTiming::progressive(96, 3840, 2160, 50, PictureAspectRatio::R16x9, 594_000),
    VicTiming::progressive(97, 3840, 2160, 60, PictureAspectRatio::R16x9, 594_000),
    VicTiming::progressive(98, 4096, 2160, 24, PictureAspectRatio::R256x135, 297_000),
    VicTiming::progressive(99, 4096, 2160, 25, PictureAspectRatio::R256x135, 297_000),
    VicTiming::progressive(100, 4096, 2160, 30, PictureAspectRatio::R256x135, 297_000),
    VicTiming::progressive(101, 4096, 2160, 50, PictureAspectRatio::R256x135, 594_000),
    VicTiming::progressive(102, 4096, 2160, 60, PictureAspectRatio::R256x135, 594_000),
    VicTiming::progressive(103, 3840, 2160, 24, PictureAspectRatio::R64x27, 297_000),
    VicTiming::progressive(104, 3840, 2160, 25, PictureAspectRatio::R64x27, 297_000),
    VicTiming::progressive(105, 3840, 2160, 30, PictureAspectRatio::R64x27, 297_000),
    VicTiming::progressive(106, 3840, 2160, 50, PictureAspectRatio::R64x27, 594_000),
    VicTiming::progressive(107, 3840, 2160, 60, PictureAspectRatio::R64x27, 594_000),
    VicTiming::progressive(108, 1280, 720, 48, PictureAspectRatio::R16x9, 90_000),
    VicTiming::progressive(109, 1280, 720, 48, PictureAspectRatio::R64x27, 90_000),
    VicTiming::progressive(110, 1680, 720, 48, PictureAspectRatio::R64x27, 99_000),
    VicTiming::progressive(111, 1920, 1080, 48, PictureAspectRatio::R16x9, 148_500),
    VicTiming::progressive(112, 1920, 1080, 48, PictureAspectRatio::R64x27, 148_500),
    VicTiming::progressive(113, 2560, 1080, 48, PictureAspectRatio::R64x27, 198_000),
    VicTiming::progressive(114, 3840, 2160, 48, PictureAspectRatio::R16x9, 594_000),
    VicTiming::progressive(115, 4096, 2160, 48, PictureAspectRatio::R256x135, 594_000),
    VicTiming::progressive(116, 3840, 2160, 48, PictureAspectRatio::R64x27, 594_000),
    VicTiming::progressive(117, 3840, 2160, 100, PictureAspectRatio::R16x9, 1_188_000),
    VicTiming::progressive(118, 3840, 2160, 120, PictureAspectRatio::R16x9, 1_188_000),
    VicTiming::progressive(119, 3840, 2160, 100, PictureAspectRatio::R64x27, 1_188_000),
    VicTiming::progressive(120, 3840, 2160, 120, PictureAspectRatio::R64x27, 1_188_000),
    VicTiming::progressive(121, 5120, 2160, 24, PictureAspectRatio::R64x27, 396_000),
    VicTiming::progressive(122, 5120, 2160, 25, PictureAspectRatio::R64x27, 396_000),
    VicTiming::progressive(123, 5120, 2160, 30, PictureAspectRatio::R64x27, 396_000),
    VicTiming::progressive(124, 5120, 2160, 48, PictureAspectRatio::R64x27, 742_500),
    VicTiming::progressive(125, 5120, 2160, 50, PictureAspectRatio::R64x27, 742_500),
    VicTiming::progressive(126, 5120, 2160, 60, PictureAspectRatio::R64x27, 742_500),
    VicTiming::progressive(127, 5120, 2160, 100, PictureAspectRatio::R64x27, 1_485_000),
];

/// `None` for VIC 0 and for VICs above 127 (the 193 to 253 range is not tabulated).
#[must_use]
pub fn lookup_vic(vic: u8) -> Option<&'static VicTiming> {
    VIC_TABLE.get(usize::from(vic).checked_sub(1)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_table_is_indexed_by_vic() {
        for (index, timing) in VIC_TABLE.iter().enumerate() {
            assert_eq2!(usize::from(timing.vic), index + 1);
        }
    }

    #[test_case(1, 640, 480, false, 60, PictureAspectRatio::R4x3)]
    #[test_case(5, 1920, 1080, true, 60, PictureAspectRatio::R16x9)]
    #[test_case(16, 1920, 1080, false, 60, PictureAspectRatio::R16x9)]
    #[test_case(31, 1920, 1080, false, 50, PictureAspectRatio::R16x9)]
    #[test_case(97, 3840, 2160, false, 60, PictureAspectRatio::R16x9)]
    #[test_case(102, 4096, 2160, false, 60, PictureAspectRatio::R256x135)]
    #[test_case(127, 5120, 2160, false, 100, PictureAspectRatio::R64x27)]
    fn test_lookup(
        vic: u8,
        h_active: u16,
        v_active: u16,
        interlaced: bool,
        refresh_hz: u16,
        aspect_ratio: PictureAspectRatio,
    ) {
        let timing = lookup_vic(vic).unwrap();
        assert_eq2!(
            (timing.h_active, timing.v_active, timing.interlaced, timing.refresh_hz),
            (h_active, v_active, interlaced, refresh_hz)
        );
        assert_eq2!(timing.aspect_ratio, aspect_ratio);
    }

    #[test_case(0)]
    #[test_case(128)]
    #[test_case(193)]
    fn test_lookup_out_of_table(vic: u8) {
        assert_eq2!(lookup_vic(vic), None);
    }

    #[test]
    fn test_aspect_ratio_display() {
        assert_eq2!(PictureAspectRatio::R64x27.to_string(), "64:27");
    }

    #[test]
    fn test_every_aspect_ratio_has_a_vic() {
        use strum::IntoEnumIterator;
        let labels: Vec<_> = PictureAspectRatio::iter()
            .inspect(|ratio| {
                assert!(
                    VIC_TABLE.iter().any(|timing| timing.aspect_ratio == *ratio),
                    "{ratio} has no VIC"
                );
            })
            .map(|ratio| ratio.to_string())
            .collect();
        assert_eq2!(labels, vec!["4:3", "16:9", "64:27", "256:135"]);
    }
}

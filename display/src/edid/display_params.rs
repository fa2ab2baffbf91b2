// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Manufacture date (bytes 16 and 17) and physical screen size (bytes 21 and 22).

use super::EDID_YEAR_BASE;
use serde::{Deserialize, Serialize};

const MODEL_YEAR_WEEK: u8 = 0xFF;
const SCREEN_SIZE_REVISION_1_4: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManufactureDate {
    /// `week` is `None` when the week byte is 0 (not specified).
    Manufactured { week: Option<u8>, year: u16 },
    /// Week byte 0xFF: the year is a model year, not a manufacture date.
    ModelYear { year: u16 },
}

impl ManufactureDate {
    #[must_use]
    pub fn year(&self) -> u16 {
        match self {
            Self::Manufactured { year, .. } | Self::ModelYear { year } => *year,
        }
    }
}

#[must_use]
pub fn parse_manufacture_date(week: u8, year: u8) -> ManufactureDate {
    let year = EDID_YEAR_BASE + u16::from(year);
    match week {
        MODEL_YEAR_WEEK => ManufactureDate::ModelYear { year },
        0 => ManufactureDate::Manufactured { week: None, year },
        week => ManufactureDate::Manufactured {
            week: Some(week),
            year,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScreenSize {
    Dimensions { width_cm: u8, height_cm: u8 },
    /// Width over height, EDID 1.4 only. Range 1.00 to 3.54.
    LandscapeAspectRatio(f32),
    /// Width over height, EDID 1.4 only. Range 0.28 to 0.99.
    PortraitAspectRatio(f32),
    /// Projector, or size varies.
    Undefined,
}

/// EDID 1.4 lets a zero in one of the two bytes turn the other into an aspect ratio.
/// Earlier revisions treat any zero as "undefined".
#[must_use]
pub fn parse_screen_size(width: u8, height: u8, revision: u8) -> ScreenSize {
    match (width, height) {
        (0, 0) => ScreenSize::Undefined,
        (width_cm, height_cm) if width_cm != 0 && height_cm != 0 => {
            ScreenSize::Dimensions {
                width_cm,
                height_cm,
            }
        }
        _ if revision < SCREEN_SIZE_REVISION_1_4 => ScreenSize::Undefined,
        (landscape, 0) => {
            ScreenSize::LandscapeAspectRatio((f32::from(landscape) + 99.0) / 100.0)
        }
        (_, portrait) => {
            ScreenSize::PortraitAspectRatio(100.0 / (f32::from(portrait) + 99.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(0, 30, ManufactureDate::Manufactured { week: None, year: 2020 })]
    #[test_case(12, 34, ManufactureDate::Manufactured { week: Some(12), year: 2024 })]
    #[test_case(0xFF, 35, ManufactureDate::ModelYear { year: 2025 })]
    fn test_manufacture_date(week: u8, year: u8, expected: ManufactureDate) {
        assert_eq2!(parse_manufacture_date(week, year), expected);
        assert_eq2!(expected.year(), 1990 + u16::from(year));
    }

    #[test]
    fn test_screen_size_dimensions() {
        assert_eq2!(
            parse_screen_size(60, 34, 3),
            ScreenSize::Dimensions {
                width_cm: 60,
                height_cm: 34
            }
        );
    }

    #[test]
    fn test_screen_size_aspect_ratios_1_4() {
        // 16:9 landscape is stored as 79, (79 + 99) / 100 = 1.78.
        let ScreenSize::LandscapeAspectRatio(ratio) = parse_screen_size(79, 0, 4) else {
            panic!("expected landscape");
        };
        assert!((ratio - 1.78).abs() < 1e-6);

        // 9:16 portrait is stored as 79, 100 / (79 + 99) = 0.5618.
        let ScreenSize::PortraitAspectRatio(ratio) = parse_screen_size(0, 79, 4) else {
            panic!("expected portrait");
        };
        assert!((ratio - 0.561_797_8).abs() < 1e-6);
    }

    #[test_case(0, 0, 4)]
    #[test_case(79, 0, 3)]
    #[test_case(0, 79, 3)]
    fn test_screen_size_undefined(width: u8, height: u8, revision: u8) {
        assert_eq2!(parse_screen_size(width, height, revision), ScreenSize::Undefined);
    }
}

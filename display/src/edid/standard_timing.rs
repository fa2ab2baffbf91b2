// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Two byte standard timing entries (bytes 38 to 53, and descriptor tag 0xFA).
//!
//! ```text
//! byte 0: (h_active / 8) - 31
//! byte 1: bits 7-6 aspect ratio, bits 5-0 refresh rate - 60
//! ```

use super::STANDARD_TIMING_SIZE;
use crate::BitRange;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

const UNUSED_SLOT: [u8; STANDARD_TIMING_SIZE] = [0x01, 0x01];
const ASPECT_RATIO: BitRange = BitRange::new(6, 2);
const REFRESH_OFFSET: BitRange = BitRange::new(0, 6);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum StandardAspectRatio {
    #[strum(serialize = "16:10")]
    Ratio16x10,
    #[strum(serialize = "4:3")]
    Ratio4x3,
    #[strum(serialize = "5:4")]
    Ratio5x4,
    #[strum(serialize = "16:9")]
    Ratio16x9,
}

impl StandardAspectRatio {
    /// `(width, height)` parts of the ratio.
    #[must_use]
    pub fn parts(self) -> (u32, u32) {
        match self {
            Self::Ratio16x10 => (16, 10),
            Self::Ratio4x3 => (4, 3),
            Self::Ratio5x4 => (5, 4),
            Self::Ratio16x9 => (16, 9),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StandardTiming {
    pub h_active: u16,
    pub v_active: u16,
    pub refresh_hz: u8,
    pub aspect_ratio: StandardAspectRatio,
}

/// Decodes one entry. `{0x01, 0x01}` marks an unused slot. A zero first byte is not a
/// valid width either (it would mean 248 pixels) and is treated as unused too.
#[must_use]
pub fn parse_standard_timing(bytes: &[u8; STANDARD_TIMING_SIZE]) -> Option<StandardTiming> {
    if *bytes == UNUSED_SLOT {
        return None;
    }
    let [width_code, mode] = *bytes;
    if width_code == 0 {
        return None;
    }

    let h_active = (u16::from(width_code) + 31) * 8;
    let aspect_ratio = match ASPECT_RATIO.extract(mode) {
        0 => StandardAspectRatio::Ratio16x10,
        1 => StandardAspectRatio::Ratio4x3,
        2 => StandardAspectRatio::Ratio5x4,
        _ => StandardAspectRatio::Ratio16x9,
    };
    let (ratio_w, ratio_h) = aspect_ratio.parts();
    let v_active = u16::try_from(u32::from(h_active) * ratio_h / ratio_w).ok()?;

    Some(StandardTiming {
        h_active,
        v_active,
        refresh_hz: REFRESH_OFFSET.extract(mode) + 60,
        aspect_ratio,
    })
}

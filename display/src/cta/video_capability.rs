// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Video capability data block (extended tag 0): quantization range selectability and
//! overscan behavior for preferred (PT), IT and CE formats.

use crate::{BitRange, bit_is_set};
use serde::{Deserialize, Serialize};

const QY_BIT: u8 = 7;
const QS_BIT: u8 = 6;
const S_PT: BitRange = BitRange::new(4, 2);
const S_IT: BitRange = BitRange::new(2, 2);
const S_CE: BitRange = BitRange::new(0, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverscanBehavior {
    /// For PT this means "see the IT and CE fields".
    NotSupported,
    AlwaysOverscanned,
    AlwaysUnderscanned,
    Selectable,
}

impl From<u8> for OverscanBehavior {
    fn from(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::NotSupported,
            1 => Self::AlwaysOverscanned,
            2 => Self::AlwaysUnderscanned,
            _ => Self::Selectable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoCapability {
    /// YCC quantization range is selectable.
    pub ycc_quantization_selectable: bool,
    /// RGB quantization range is selectable.
    pub rgb_quantization_selectable: bool,
    pub preferred_overscan: OverscanBehavior,
    pub it_overscan: OverscanBehavior,
    pub ce_overscan: OverscanBehavior,
}

#[must_use]
pub fn parse_video_capability(payload: &[u8]) -> Option<VideoCapability> {
    let &byte = payload.first()?;
    Some(VideoCapability {
        ycc_quantization_selectable: bit_is_set(byte, QY_BIT),
        rgb_quantization_selectable: bit_is_set(byte, QS_BIT),
        preferred_overscan: OverscanBehavior::from(S_PT.extract(byte)),
        it_overscan: OverscanBehavior::from(S_IT.extract(byte)),
        ce_overscan: OverscanBehavior::from(S_CE.extract(byte)),
    })
}

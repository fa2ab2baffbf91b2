// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HDR static metadata data block (extended tag 6).
//!
//! ```text
//! 0  supported EOTFs
//! 1  supported static metadata descriptor types
//! 2  desired content max luminance            (optional code value)
//! 3  desired content max frame-average lum.   (optional code value)
//! 4  desired content min luminance            (optional code value)
//! ```
//!
//! Code values convert to cd/m² with `50 * 2^(cv / 32)` for the two maxima and
//! `max * (cv / 255)^2 / 100` for the minimum.

use serde::{Deserialize, Serialize};

pub const HDR_STATIC_METADATA_MIN_SIZE: usize = 2;

const LUMINANCE_BASE_CD_M2: f64 = 50.0;
const LUMINANCE_EXPONENT_DIVISOR: f64 = 32.0;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HdrEotfs: u8 {
        const TRADITIONAL_SDR = 0b0000_0001;
        const TRADITIONAL_HDR = 0b0000_0010;
        /// SMPTE ST 2084, also known as PQ.
        const SMPTE_ST2084 = 0b0000_0100;
        const HLG = 0b0000_1000;
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HdrMetadataDescriptors: u8 {
        const STATIC_TYPE_1 = 0b0000_0001;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdrStaticMetadata {
    pub eotfs: HdrEotfs,
    pub descriptors: HdrMetadataDescriptors,
    pub max_luminance_cv: Option<u8>,
    pub max_frame_average_luminance_cv: Option<u8>,
    pub min_luminance_cv: Option<u8>,
}

#[must_use]
pub fn max_luminance_from_code(cv: u8) -> f64 {
    LUMINANCE_BASE_CD_M2 * 2_f64.powf(f64::from(cv) / LUMINANCE_EXPONENT_DIVISOR)
}

#[must_use]
pub fn min_luminance_from_code(max_cd_m2: f64, cv: u8) -> f64 {
    let ratio = f64::from(cv) / 255.0;
    max_cd_m2 * ratio * ratio / 100.0
}

impl HdrStaticMetadata {
    /// Desired content max luminance in cd/m².
    #[must_use]
    pub fn max_luminance(&self) -> Option<f64> {
        self.max_luminance_cv.map(max_luminance_from_code)
    }

    #[must_use]
    pub fn max_frame_average_luminance(&self) -> Option<f64> {
        self.max_frame_average_luminance_cv
            .map(max_luminance_from_code)
    }

    /// Needs the max luminance code value too, the minimum is relative to it.
    #[must_use]
    pub fn min_luminance(&self) -> Option<f64> {
        Some(min_luminance_from_code(
            self.max_luminance()?,
            self.min_luminance_cv?,
        ))
    }

    #[must_use]
    pub fn supports_pq(&self) -> bool { self.eotfs.contains(HdrEotfs::SMPTE_ST2084) }

    #[must_use]
    pub fn supports_hlg(&self) -> bool { self.eotfs.contains(HdrEotfs::HLG) }
}

/// `None` when the payload is shorter than the two mandatory bytes.
#[must_use]
pub fn parse_hdr_static_metadata(payload: &[u8]) -> Option<HdrStaticMetadata> {
    let &[eotfs, descriptors] = payload.first_chunk::<HDR_STATIC_METADATA_MIN_SIZE>()?;
    Some(HdrStaticMetadata {
        eotfs: HdrEotfs::from_bits_truncate(eotfs),
        descriptors: HdrMetadataDescriptors::from_bits_truncate(descriptors),
        max_luminance_cv: payload.get(2).copied(),
        max_frame_average_luminance_cv: payload.get(3).copied(),
        min_luminance_cv: payload.get(4).copied(),
    })
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HDMI Forum capability fields. The same layout is carried by two containers:
//!
//! - the HDMI Forum vendor-specific data block (OUI C4-5D-D8), fields after the OUI
//! - the HDMI Forum sink capability data block (extended tag 0x79), fields after two
//!   reserved bytes
//!
//! ```text
//! 0     version
//! 1     max TMDS character rate / 5 Mcsc (0: no rate above 340 Mcsc)
//! 2     SCDC present │ RR capable │ cable status │ CCBPCI │ LTE 340 scramble │ 3D flags
//! 3     max FRL rate (7-4) │ 4:2:0 deep color 48 │ 36 │ 30
//! 4     gaming flags                     (optional)
//! 5..7  VRR min │ VRR max                (optional)
//! ```

use crate::{BitRange, join_low_high};
use serde::{Deserialize, Serialize};

pub const HDMI_FORUM_MIN_FIELDS: usize = 4;
/// Reserved bytes in front of the fields inside the sink capability data block.
pub const SCDB_RESERVED_PREFIX: usize = 2;

const TMDS_RATE_STEP_MHZ: u16 = 5;
const MAX_FRL_RATE: BitRange = BitRange::new(4, 4);
const DEEP_COLOR_420: BitRange = BitRange::new(0, 3);
const VRR_MIN: BitRange = BitRange::new(0, 6);
const VRR_MAX_HIGH: BitRange = BitRange::new(6, 2);

mod field_offsets {
    pub const VERSION: usize = 0;
    pub const MAX_TMDS_RATE: usize = 1;
    pub const FEATURES: usize = 2;
    pub const FRL_AND_DEEP_COLOR: usize = 3;
    pub const GAMING: usize = 4;
    pub const VRR_MIN: usize = 5;
    pub const VRR_MAX_LOW: usize = 6;
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HdmiForumFeatures: u8 {
        const SCDC_PRESENT = 0b1000_0000;
        const RR_CAPABLE = 0b0100_0000;
        const CABLE_STATUS = 0b0010_0000;
        const CCBPCI = 0b0001_0000;
        const LTE_340MCSC_SCRAMBLE = 0b0000_1000;
        const INDEPENDENT_VIEW_3D = 0b0000_0100;
        const DUAL_VIEW_3D = 0b0000_0010;
        const OSD_DISPARITY_3D = 0b0000_0001;
    }
}

bitflags::bitflags! {
    /// Deep color depths supported with YCbCr 4:2:0.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DeepColor420: u8 {
        const DC_48BIT = 0b100;
        const DC_36BIT = 0b010;
        const DC_30BIT = 0b001;
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HdmiGamingFeatures: u8 {
        const FAPA_END_EXTENDED = 0b1000_0000;
        const QMS = 0b0100_0000;
        const M_DELTA = 0b0010_0000;
        const CINEMA_VRR = 0b0001_0000;
        const NEGATIVE_MVRR = 0b0000_1000;
        const FVA = 0b0000_0100;
        const ALLM = 0b0000_0010;
        const FAPA_START_LOCATION = 0b0000_0001;
    }
}

/// Fixed rate link capability, lanes times per-lane rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaxFrlRate {
    NotSupported,
    Gbps3Lanes3,
    Gbps6Lanes3,
    Gbps6Lanes4,
    Gbps8Lanes4,
    Gbps10Lanes4,
    Gbps12Lanes4,
    Reserved(u8),
}

impl MaxFrlRate {
    /// Aggregate link rate, `None` for reserved codes.
    #[must_use]
    pub fn total_gbps(self) -> Option<u8> {
        match self {
            Self::NotSupported => Some(0),
            Self::Gbps3Lanes3 => Some(9),
            Self::Gbps6Lanes3 => Some(18),
            Self::Gbps6Lanes4 => Some(24),
            Self::Gbps8Lanes4 => Some(32),
            Self::Gbps10Lanes4 => Some(40),
            Self::Gbps12Lanes4 => Some(48),
            Self::Reserved(_) => None,
        }
    }
}

impl From<u8> for MaxFrlRate {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::NotSupported,
            1 => Self::Gbps3Lanes3,
            2 => Self::Gbps6Lanes3,
            3 => Self::Gbps6Lanes4,
            4 => Self::Gbps8Lanes4,
            5 => Self::Gbps10Lanes4,
            6 => Self::Gbps12Lanes4,
            other => Self::Reserved(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrrRange {
    pub min_hz: u8,
    /// 0 means the sink did not state a maximum.
    pub max_hz: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdmiForumCapabilities {
    pub version: u8,
    /// `None` when the sink does not go above 340 Mcsc.
    pub max_tmds_character_rate_mhz: Option<u16>,
    pub features: HdmiForumFeatures,
    pub max_frl_rate: MaxFrlRate,
    pub deep_color_420: DeepColor420,
    pub gaming: Option<HdmiGamingFeatures>,
    pub vrr: Option<VrrRange>,
}

/// Decodes the shared field layout. `None` when the four mandatory bytes are missing.
#[must_use]
pub fn parse_hdmi_forum_fields(fields: &[u8]) -> Option<HdmiForumCapabilities> {
    use field_offsets::{
        FEATURES, FRL_AND_DEEP_COLOR, GAMING, MAX_TMDS_RATE, VERSION, VRR_MAX_LOW,
    };

    let mandatory = fields.first_chunk::<HDMI_FORUM_MIN_FIELDS>()?;
    let frl_and_deep_color = mandatory[FRL_AND_DEEP_COLOR];
    let max_tmds_character_rate_mhz = match mandatory[MAX_TMDS_RATE] {
        0 => None,
        rate => Some(u16::from(rate) * TMDS_RATE_STEP_MHZ),
    };

    let vrr = fields.get(field_offsets::VRR_MIN).map(|&min_byte| VrrRange {
        min_hz: VRR_MIN.extract(min_byte),
        max_hz: join_low_high(
            fields.get(VRR_MAX_LOW).copied().unwrap_or_default(),
            VRR_MAX_HIGH.extract(min_byte),
        ),
    });

    Some(HdmiForumCapabilities {
        version: mandatory[VERSION],
        max_tmds_character_rate_mhz,
        features: HdmiForumFeatures::from_bits_truncate(mandatory[FEATURES]),
        max_frl_rate: MaxFrlRate::from(MAX_FRL_RATE.extract(frl_and_deep_color)),
        deep_color_420: DeepColor420::from_bits_truncate(
            DEEP_COLOR_420.extract(frl_and_deep_color),
        ),
        gaming: fields
            .get(GAMING)
            .map(|byte| HdmiGamingFeatures::from_bits_truncate(*byte)),
        vrr,
    })
}

/// Vendor-specific form. `body` is the payload after the OUI.
#[must_use]
pub fn parse_hdmi_forum_vsdb(body: &[u8]) -> Option<HdmiForumCapabilities> {
    parse_hdmi_forum_fields(body)
}

/// Sink capability data block form. `payload` is the data block payload after the
/// extended tag.
#[must_use]
pub fn parse_hdmi_forum_scdb(payload: &[u8]) -> Option<HdmiForumCapabilities> {
    parse_hdmi_forum_fields(payload.get(SCDB_RESERVED_PREFIX..)?)
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HDMI 1.x vendor-specific data block (OUI 00-0C-03). Offsets below are into the body
//! that follows the OUI.
//!
//! ```text
//! 0..2  physical address A.B.C.D, one nibble each
//! 2     deep color and feature flags            (optional)
//! 3     max TMDS clock / 5 MHz                  (optional)
//! 4     latency presence flags, CNC bits        (optional)
//! 5..7  progressive video / audio latency       (if flagged)
//! 7..9  interlaced video / audio latency        (if flagged)
//! ```

use crate::{BitRange, bit_is_set};
use serde::{Deserialize, Serialize};

const HIGH_NIBBLE: BitRange = BitRange::new(4, 4);
const LOW_NIBBLE: BitRange = BitRange::new(0, 4);
const TMDS_CLOCK_STEP_MHZ: u16 = 5;
const LATENCY_PRESENT_BIT: u8 = 7;
const INTERLACED_LATENCY_PRESENT_BIT: u8 = 6;
const HDMI_VIDEO_PRESENT_BIT: u8 = 5;
const CONTENT_TYPES: BitRange = BitRange::new(0, 4);

mod body_offsets {
    pub const PHYSICAL_ADDRESS: usize = 0;
    pub const FLAGS: usize = 2;
    pub const MAX_TMDS_CLOCK: usize = 3;
    pub const LATENCY_FLAGS: usize = 4;
    pub const VIDEO_LATENCY: usize = 5;
    pub const AUDIO_LATENCY: usize = 6;
    pub const INTERLACED_VIDEO_LATENCY: usize = 7;
    pub const INTERLACED_AUDIO_LATENCY: usize = 8;
}

/// CEC physical address `a.b.c.d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhysicalAddress {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
}

impl std::fmt::Display for PhysicalAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}.{}", self.a, self.b, self.c, self.d)
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HdmiDeepColor: u8 {
        const SUPPORTS_AI = 0b1000_0000;
        const DC_48BIT = 0b0100_0000;
        const DC_36BIT = 0b0010_0000;
        const DC_30BIT = 0b0001_0000;
        const DC_Y444 = 0b0000_1000;
        const DVI_DUAL = 0b0000_0001;
    }
}

bitflags::bitflags! {
    /// Content types for which the sink honors the ITC bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ContentTypes: u8 {
        const GRAPHICS = 0b0001;
        const PHOTO = 0b0010;
        const CINEMA = 0b0100;
        const GAME = 0b1000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvLatency {
    Unknown,
    NotSupported,
    Milliseconds(u16),
}

impl From<u8> for AvLatency {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Unknown,
            255 => Self::NotSupported,
            value => Self::Milliseconds((u16::from(value) - 1) * 2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyPair {
    pub video: AvLatency,
    pub audio: AvLatency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdmiVsdb {
    pub physical_address: PhysicalAddress,
    pub deep_color: HdmiDeepColor,
    /// `None` when absent or zero.
    pub max_tmds_clock_mhz: Option<u16>,
    pub hdmi_video_present: bool,
    pub content_types: ContentTypes,
    pub latency: Option<LatencyPair>,
    pub interlaced_latency: Option<LatencyPair>,
}

fn latency_pair(body: &[u8], video: usize, audio: usize) -> Option<LatencyPair> {
    Some(LatencyPair {
        video: AvLatency::from(*body.get(video)?),
        audio: AvLatency::from(*body.get(audio)?),
    })
}

/// `body` is the vendor-specific payload after the OUI. `None` when even the physical
/// address is missing; every later field is optional.
#[must_use]
pub fn parse_hdmi_vsdb(body: &[u8]) -> Option<HdmiVsdb> {
    use body_offsets::{
        AUDIO_LATENCY, FLAGS, INTERLACED_AUDIO_LATENCY, INTERLACED_VIDEO_LATENCY,
        LATENCY_FLAGS, MAX_TMDS_CLOCK, PHYSICAL_ADDRESS, VIDEO_LATENCY,
    };

    let &[ab, cd] = body.get(PHYSICAL_ADDRESS..)?.first_chunk::<2>()?;
    let physical_address = PhysicalAddress {
        a: HIGH_NIBBLE.extract(ab),
        b: LOW_NIBBLE.extract(ab),
        c: HIGH_NIBBLE.extract(cd),
        d: LOW_NIBBLE.extract(cd),
    };

    let deep_color = body.get(FLAGS).map_or(HdmiDeepColor::empty(), |byte| {
        HdmiDeepColor::from_bits_truncate(*byte)
    });
    let max_tmds_clock_mhz = body
        .get(MAX_TMDS_CLOCK)
        .filter(|byte| **byte != 0)
        .map(|byte| u16::from(*byte) * TMDS_CLOCK_STEP_MHZ);

    let latency_flags = body.get(LATENCY_FLAGS).copied().unwrap_or_default();
    let latency_present = bit_is_set(latency_flags, LATENCY_PRESENT_BIT);
    let latency = latency_present
        .then(|| latency_pair(body, VIDEO_LATENCY, AUDIO_LATENCY))
        .flatten();
    // Without progressive latency fields the interlaced ones sit at the earlier offsets.
    let (i_video, i_audio) = if latency_present {
        (INTERLACED_VIDEO_LATENCY, INTERLACED_AUDIO_LATENCY)
    } else {
        (VIDEO_LATENCY, AUDIO_LATENCY)
    };
    let interlaced_latency = bit_is_set(latency_flags, INTERLACED_LATENCY_PRESENT_BIT)
        .then(|| latency_pair(body, i_video, i_audio))
        .flatten();

    Some(HdmiVsdb {
        physical_address,
        deep_color,
        max_tmds_clock_mhz,
        hdmi_video_present: bit_is_set(latency_flags, HDMI_VIDEO_PRESENT_BIT),
        content_types: ContentTypes::from_bits_truncate(CONTENT_TYPES.extract(latency_flags)),
        latency,
        interlaced_latency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_address_only() {
        let vsdb = parse_hdmi_vsdb(&[0x10, 0x00]).unwrap();
        assert_eq2!(vsdb.physical_address.to_string(), "1.0.0.0");
        assert_eq2!(vsdb.deep_color, HdmiDeepColor::empty());
        assert_eq2!(vsdb.max_tmds_clock_mhz, None);
        assert_eq2!(vsdb.latency, None);
    }

    #[test]
    fn test_full_block() {
        let body = [0x21, 0x00, 0xB8, 0x3C, 0xE3, 0x0B, 0x0B, 0x15, 0x15];
        let vsdb = parse_hdmi_vsdb(&body).unwrap();
        assert_eq2!(
            vsdb.physical_address,
            PhysicalAddress {
                a: 2,
                b: 1,
                c: 0,
                d: 0
            }
        );
        assert_eq2!(
            vsdb.deep_color,
            HdmiDeepColor::SUPPORTS_AI
                | HdmiDeepColor::DC_36BIT
                | HdmiDeepColor::DC_30BIT
                | HdmiDeepColor::DC_Y444
        );
        assert_eq2!(vsdb.max_tmds_clock_mhz, Some(300));
        assert!(vsdb.hdmi_video_present);
        assert_eq2!(vsdb.content_types, ContentTypes::GRAPHICS | ContentTypes::PHOTO);
        assert_eq2!(
            vsdb.latency,
            Some(LatencyPair {
                video: AvLatency::Milliseconds(20),
                audio: AvLatency::Milliseconds(20)
            })
        );
        assert_eq2!(
            vsdb.interlaced_latency,
            Some(LatencyPair {
                video: AvLatency::Milliseconds(40),
                audio: AvLatency::Milliseconds(40)
            })
        );
    }

    #[test]
    fn test_interlaced_latency_without_progressive() {
        let vsdb = parse_hdmi_vsdb(&[0x10, 0x00, 0x00, 0x00, 0x40, 0x15, 0xFF]).unwrap();
        assert_eq2!(vsdb.latency, None);
        assert_eq2!(
            vsdb.interlaced_latency,
            Some(LatencyPair {
                video: AvLatency::Milliseconds(40),
                audio: AvLatency::NotSupported
            })
        );
    }

    #[test]
    fn test_flagged_latency_missing_bytes() {
        let vsdb = parse_hdmi_vsdb(&[0x10, 0x00, 0x00, 0x00, 0x80, 0x0B]).unwrap();
        assert_eq2!(vsdb.latency, None);
    }

    #[test_case(0, AvLatency::Unknown)]
    #[test_case(1, AvLatency::Milliseconds(0))]
    #[test_case(11, AvLatency::Milliseconds(20))]
    #[test_case(251, AvLatency::Milliseconds(500))]
    #[test_case(255, AvLatency::NotSupported)]
    fn test_latency_encoding(value: u8, expected: AvLatency) {
        assert_eq2!(AvLatency::from(value), expected);
    }

    #[test]
    fn test_too_short() {
        assert_eq2!(parse_hdmi_vsdb(&[0x10]), None);
    }
}

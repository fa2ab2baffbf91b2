// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Video input definition (byte 20). Bit 7 selects analog or digital, and the meaning
//! of the remaining bits depends on it and on the EDID revision.

use crate::{BitRange, bit_is_set};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

const DIGITAL_BIT: u8 = 7;
const ANALOG_SIGNAL_LEVEL: BitRange = BitRange::new(5, 2);
const DIGITAL_BIT_DEPTH: BitRange = BitRange::new(4, 3);
const DIGITAL_INTERFACE: BitRange = BitRange::new(0, 4);

/// Revision from which bit depth and interface are encoded in the digital case.
pub const VIDEO_INPUT_REVISION_1_4: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoInput {
    Analog(AnalogInput),
    Digital(DigitalInput),
}

impl VideoInput {
    #[must_use]
    pub fn is_digital(&self) -> bool { matches!(self, Self::Digital(_)) }
}

/// Video / sync voltage levels, in volts relative to blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum AnalogSignalLevel {
    #[strum(serialize = "0.700 / 0.300")]
    V0700S0300,
    #[strum(serialize = "0.714 / 0.286")]
    V0714S0286,
    #[strum(serialize = "1.000 / 0.400")]
    V1000S0400,
    #[strum(serialize = "0.700 / 0.000")]
    V0700S0000,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalogInput {
    pub signal_level: AnalogSignalLevel,
    pub blank_to_black_setup: bool,
    pub separate_sync: bool,
    pub composite_sync_on_hsync: bool,
    pub sync_on_green: bool,
    pub serrated_vsync: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalInput {
    /// Bits per primary color. `None` when undefined, reserved, or before EDID 1.4.
    pub bit_depth: Option<u8>,
    pub interface: Option<DigitalInterface>,
    /// EDID 1.3 "DFP 1.x compatible" bit. Always `false` for 1.4.
    pub dfp_compatible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum DigitalInterface {
    Dvi,
    HdmiA,
    HdmiB,
    Mddi,
    DisplayPort,
}

/// Decodes the video input byte. `revision` is the EDID revision byte (19).
#[must_use]
pub fn parse_video_input(byte: u8, revision: u8) -> VideoInput {
    if !bit_is_set(byte, DIGITAL_BIT) {
        let signal_level = match ANALOG_SIGNAL_LEVEL.extract(byte) {
            0 => AnalogSignalLevel::V0700S0300,
            1 => AnalogSignalLevel::V0714S0286,
            2 => AnalogSignalLevel::V1000S0400,
            _ => AnalogSignalLevel::V0700S0000,
        };
        return VideoInput::Analog(AnalogInput {
            signal_level,
            blank_to_black_setup: bit_is_set(byte, 4),
            separate_sync: bit_is_set(byte, 3),
            composite_sync_on_hsync: bit_is_set(byte, 2),
            sync_on_green: bit_is_set(byte, 1),
            serrated_vsync: bit_is_set(byte, 0),
        });
    }

    if revision < VIDEO_INPUT_REVISION_1_4 {
        return VideoInput::Digital(DigitalInput {
            bit_depth: None,
            interface: None,
            dfp_compatible: bit_is_set(byte, 0),
        });
    }

    let bit_depth = match DIGITAL_BIT_DEPTH.extract(byte) {
        raw @ 1..=6 => Some(4 + raw * 2),
        _ => None,
    };
    let interface = match DIGITAL_INTERFACE.extract(byte) {
        1 => Some(DigitalInterface::Dvi),
        2 => Some(DigitalInterface::HdmiA),
        3 => Some(DigitalInterface::HdmiB),
        4 => Some(DigitalInterface::Mddi),
        5 => Some(DigitalInterface::DisplayPort),
        _ => None,
    };
    VideoInput::Digital(DigitalInput {
        bit_depth,
        interface,
        dfp_compatible: false,
    })
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Legacy mode bitmaps: the 3-byte established timings in the base block (bytes 35
//! to 37) and the 6-byte Established Timings III display descriptor (tag 0xF7).
//!
//! Both are pure bit-to-mode tables. Nothing is computed and nothing can fail.

use super::ESTABLISHED_TIMINGS_SIZE;
use serde::{Deserialize, Serialize};

/// Geometry of one fixed legacy mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegacyMode {
    pub h_active: u16,
    pub v_active: u16,
    pub refresh_hz: u8,
    pub interlaced: bool,
    pub reduced_blanking: bool,
}

impl LegacyMode {
    const fn new(h_active: u16, v_active: u16, refresh_hz: u8) -> Self {
        Self {
            h_active,
            v_active,
            refresh_hz,
            interlaced: false,
            reduced_blanking: false,
        }
    }

    const fn interlaced(mut self) -> Self {
        self.interlaced = true;
        self
    }

    const fn reduced_blanking(mut self) -> Self {
        self.reduced_blanking = true;
        self
    }
}

bitflags::bitflags! {
    /// Established timings I and II. Bit 23 is byte 35 bit 7, bit 0 is byte 37 bit 0.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct EstablishedTimings: u32 {
        const M720X400_70 = 1 << 23;
        const M720X400_88 = 1 << 22;
        const M640X480_60 = 1 << 21;
        const M640X480_67 = 1 << 20;
        const M640X480_72 = 1 << 19;
        const M640X480_75 = 1 << 18;
        const M800X600_56 = 1 << 17;
        const M800X600_60 = 1 << 16;
        const M800X600_72 = 1 << 15;
        const M800X600_75 = 1 << 14;
        const M832X624_75 = 1 << 13;
        const M1024X768_87I = 1 << 12;
        const M1024X768_60 = 1 << 11;
        const M1024X768_70 = 1 << 10;
        const M1024X768_75 = 1 << 9;
        const M1280X1024_75 = 1 << 8;
        const M1152X870_75 = 1 << 7;
        /// Bits 6..=0 of byte 37, meaning defined by the manufacturer.
        const MANUFACTURER_SPECIFIC = 0x7F;
    }
}

const ESTABLISHED_MODES: [(EstablishedTimings, LegacyMode); 17] = [
    (EstablishedTimings::M720X400_70, LegacyMode::new(720, 400, 70)),
    (EstablishedTimings::M720X400_88, LegacyMode::new(720, 400, 88)),
    (EstablishedTimings::M640X480_60, LegacyMode::new(640, 480, 60)),
    (EstablishedTimings::M640X480_67, LegacyMode::new(640, 480, 67)),
    (EstablishedTimings::M640X480_72, LegacyMode::new(640, 480, 72)),
    (EstablishedTimings::M640X480_75, LegacyMode::new(640, 480, 75)),
    (EstablishedTimings::M800X600_56, LegacyMode::new(800, 600, 56)),
    (EstablishedTimings::M800X600_60, LegacyMode::new(800, 600, 60)),
    (EstablishedTimings::M800X600_72, LegacyMode::new(800, 600, 72)),
    (EstablishedTimings::M800X600_75, LegacyMode::new(800, 600, 75)),
    (EstablishedTimings::M832X624_75, LegacyMode::new(832, 624, 75)),
    (EstablishedTimings::M1024X768_87I, LegacyMode::new(1024, 768, 87).interlaced()),
    (EstablishedTimings::M1024X768_60, LegacyMode::new(1024, 768, 60)),
    (EstablishedTimings::M1024X768_70, LegacyMode::new(1024, 768, 70)),
    (EstablishedTimings::M1024X768_75, LegacyMode::new(1024, 768, 75)),
    (EstablishedTimings::M1280X1024_75, LegacyMode::new(1280, 1024, 75)),
    (EstablishedTimings::M1152X870_75, LegacyMode::new(1152, 870, 75)),
];

#[must_use]
pub fn parse_established_timings(bytes: &[u8; ESTABLISHED_TIMINGS_SIZE]) -> EstablishedTimings {
    let [b0, b1, b2] = *bytes;
    EstablishedTimings::from_bits_truncate(u32::from_be_bytes([0, b0, b1, b2]))
}

impl EstablishedTimings {
    /// The fixed modes that are set, in table order. Manufacturer bits are skipped.
    pub fn modes(self) -> impl Iterator<Item = LegacyMode> {
        ESTABLISHED_MODES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, mode)| mode)
    }

    /// Raw value of the 7 manufacturer-specific bits.
    #[must_use]
    pub fn manufacturer_bits(self) -> u8 {
        (self & Self::MANUFACTURER_SPECIFIC).bits().to_le_bytes()[0]
    }
}

pub const ESTABLISHED_TIMINGS_III_SIZE: usize = 6;

/// Established Timings III, in bitmap order (byte 6 bit 7 first).
const ESTABLISHED_III_MODES: [LegacyMode; 44] = [
    LegacyMode::new(640, 350, 85),
    LegacyMode::new(640, 400, 85),
    LegacyMode::new(720, 400, 85),
    LegacyMode::new(640, 480, 85),
    LegacyMode::new(848, 480, 60),
    LegacyMode::new(800, 600, 85),
    LegacyMode::new(1024, 768, 85),
    LegacyMode::new(1152, 864, 75),
    LegacyMode::new(1280, 768, 60).reduced_blanking(),
    LegacyMode::new(1280, 768, 60),
    LegacyMode::new(1280, 768, 75),
    LegacyMode::new(1280, 768, 85),
    LegacyMode::new(1280, 960, 60),
    LegacyMode::new(1280, 960, 85),
    LegacyMode::new(1280, 1024, 60),
    LegacyMode::new(1280, 1024, 85),
    LegacyMode::new(1360, 768, 60),
    LegacyMode::new(1440, 900, 60).reduced_blanking(),
    LegacyMode::new(1440, 900, 60),
    LegacyMode::new(1440, 900, 75),
    LegacyMode::new(1440, 900, 85),
    LegacyMode::new(1400, 1050, 60).reduced_blanking(),
    LegacyMode::new(1400, 1050, 60),
    LegacyMode::new(1400, 1050, 75),
    LegacyMode::new(1400, 1050, 85),
    LegacyMode::new(1680, 1050, 60).reduced_blanking(),
    LegacyMode::new(1680, 1050, 60),
    LegacyMode::new(1680, 1050, 75),
    LegacyMode::new(1680, 1050, 85),
    LegacyMode::new(1600, 1200, 60),
    LegacyMode::new(1600, 1200, 65),
    LegacyMode::new(1600, 1200, 70),
    LegacyMode::new(1600, 1200, 75),
    LegacyMode::new(1600, 1200, 85),
    LegacyMode::new(1792, 1344, 60),
    LegacyMode::new(1792, 1344, 75),
    LegacyMode::new(1856, 1392, 60),
    LegacyMode::new(1856, 1392, 75),
    LegacyMode::new(1920, 1200, 60).reduced_blanking(),
    LegacyMode::new(1920, 1200, 60),
    LegacyMode::new(1920, 1200, 75),
    LegacyMode::new(1920, 1200, 85),
    LegacyMode::new(1920, 1440, 60),
    LegacyMode::new(1920, 1440, 75),
];

/// Borrowed bitmap from an Established Timings III descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstablishedTimingsIII<'a> {
    bits: &'a [u8; ESTABLISHED_TIMINGS_III_SIZE],
}

impl<'a> EstablishedTimingsIII<'a> {
    #[must_use]
    pub fn new(bits: &'a [u8; ESTABLISHED_TIMINGS_III_SIZE]) -> Self { Self { bits } }

    #[must_use]
    pub fn raw(&self) -> &'a [u8; ESTABLISHED_TIMINGS_III_SIZE] { self.bits }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        let Some(byte) = self.bits.get(index / 8) else {
            return false;
        };
        index < ESTABLISHED_III_MODES.len() && byte & (0x80 >> (index % 8)) != 0
    }

    pub fn modes(self) -> impl Iterator<Item = LegacyMode> + 'a {
        ESTABLISHED_III_MODES
            .into_iter()
            .enumerate()
            .filter(move |(index, _)| self.contains(*index))
            .map(|(_, mode)| mode)
    }
}

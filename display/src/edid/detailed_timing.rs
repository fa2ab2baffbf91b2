// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! 18-byte detailed timing descriptor (DTD).
//!
//! Most counts are 12 bits, split into a low byte and a nibble of a shared byte. The
//! porch and sync widths are split across three bytes:
//!
//! ```text
//! off  field                          off  field
//! 0-1  pixel clock, 10 kHz units, LE   8   h front porch, low 8
//!  2   h active, low 8                 9   h sync width, low 8
//!  3   h blank, low 8                 10   v front porch low 4 | v sync low 4
//!  4   h active hi 4 | h blank hi 4   11   hfp hi 2 | hsync hi 2 | vfp hi 2 | vsync hi 2
//!  5   v active, low 8                12   h image size mm, low 8
//!  6   v blank, low 8                 13   v image size mm, low 8
//!  7   v active hi 4 | v blank hi 4   14   h size hi 4 | v size hi 4
//!                                   15-16  h border, v border
//!                                     17   flags
//! ```
//!
//! Flags byte 17:
//!
//! ```text
//!  7    interlaced
//!  6-5  stereo, high bits ┐
//!  0    stereo, low bit   ┘ non-contiguous 3-bit value
//!  4-3  sync signal type
//!  2-1  sync details (meaning depends on the type)
//! ```

use super::DESCRIPTOR_SIZE;
use crate::{BitRange, bit_is_set, join_low_high};
use serde::{Deserialize, Serialize};

const HIGH_NIBBLE: BitRange = BitRange::new(4, 4);
const LOW_NIBBLE: BitRange = BitRange::new(0, 4);
const H_FRONT_PORCH_HI: BitRange = BitRange::new(6, 2);
const H_SYNC_WIDTH_HI: BitRange = BitRange::new(4, 2);
const V_FRONT_PORCH_HI: BitRange = BitRange::new(2, 2);
const V_SYNC_WIDTH_HI: BitRange = BitRange::new(0, 2);

const INTERLACED_BIT: u8 = 7;
const STEREO_HIGH: BitRange = BitRange::new(5, 2);
const STEREO_LOW: BitRange = BitRange::new(0, 1);
const SYNC_TYPE: BitRange = BitRange::new(3, 2);
const SYNC_DETAIL_HIGH_BIT: u8 = 2;
const SYNC_DETAIL_LOW_BIT: u8 = 1;

const PIXEL_CLOCK_UNIT_HZ: u32 = 10_000;

/// Sync signal definition, bits 4-3 of the flags byte plus their detail bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyncSignal {
    AnalogComposite {
        serrations: bool,
        /// Sync on all three RGB lines, otherwise on green only.
        sync_on_all_rgb: bool,
    },
    BipolarAnalogComposite {
        serrations: bool,
        sync_on_all_rgb: bool,
    },
    DigitalComposite {
        serrations: bool,
        hsync_positive: bool,
    },
    DigitalSeparate {
        vsync_positive: bool,
        hsync_positive: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StereoMode {
    None,
    FieldSequentialRightOnSync,
    FieldSequentialLeftOnSync,
    TwoWayInterleavedRightOnEven,
    TwoWayInterleavedLeftOnEven,
    FourWayInterleaved,
    SideBySideInterleaved,
}

impl StereoMode {
    /// Decodes the reassembled 3-bit value (bit 6, bit 5, bit 0). `0b00x` is always
    /// "no stereo" whatever the low bit says.
    #[must_use]
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 | 0b001 => Self::None,
            0b010 => Self::FieldSequentialRightOnSync,
            0b100 => Self::FieldSequentialLeftOnSync,
            0b011 => Self::TwoWayInterleavedRightOnEven,
            0b101 => Self::TwoWayInterleavedLeftOnEven,
            0b110 => Self::FourWayInterleaved,
            _ => Self::SideBySideInterleaved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DetailedTiming {
    pub pixel_clock_hz: u32,
    pub h_active: u16,
    pub h_blank: u16,
    pub v_active: u16,
    pub v_blank: u16,
    pub h_front_porch: u16,
    pub h_sync_width: u16,
    pub v_front_porch: u16,
    pub v_sync_width: u16,
    pub h_image_size_mm: u16,
    pub v_image_size_mm: u16,
    pub h_border: u8,
    pub v_border: u8,
    pub interlaced: bool,
    /// Reassembled stereo bits, kept raw so that reserved encodings round-trip.
    pub stereo_bits: u8,
    pub sync: SyncSignal,
}

impl DetailedTiming {
    #[must_use]
    pub fn h_total(&self) -> u32 { u32::from(self.h_active) + u32::from(self.h_blank) }

    #[must_use]
    pub fn v_total(&self) -> u32 { u32::from(self.v_active) + u32::from(self.v_blank) }

    /// Back porch is whatever blanking is left after the front porch and sync pulse.
    #[must_use]
    pub fn h_back_porch(&self) -> u16 {
        self.h_blank
            .saturating_sub(self.h_front_porch)
            .saturating_sub(self.h_sync_width)
    }

    #[must_use]
    pub fn v_back_porch(&self) -> u16 {
        self.v_blank
            .saturating_sub(self.v_front_porch)
            .saturating_sub(self.v_sync_width)
    }

    #[must_use]
    pub fn stereo_mode(&self) -> StereoMode { StereoMode::from_bits(self.stereo_bits) }

    /// Pixel clock over total pixels per frame. Returns 0 instead of dividing by zero.
    #[must_use]
    pub fn refresh_rate_hz(&self) -> f64 {
        let total_pixels = u64::from(self.h_total()) * u64::from(self.v_total());
        if total_pixels == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let total_pixels = total_pixels as f64;
        f64::from(self.pixel_clock_hz) / total_pixels
    }
}

/// Decodes an 18-byte slot as a timing. A zero pixel clock means the slot is a display
/// descriptor, and `None` is returned.
#[must_use]
pub fn parse_detailed_timing(bytes: &[u8; DESCRIPTOR_SIZE]) -> Option<DetailedTiming> {
    let [
        clock_lo,
        clock_hi,
        h_active_lo,
        h_blank_lo,
        h_hi,
        v_active_lo,
        v_blank_lo,
        v_hi,
        h_front_porch_lo,
        h_sync_lo,
        v_porch_sync_lo,
        porch_sync_hi,
        h_size_lo,
        v_size_lo,
        size_hi,
        h_border,
        v_border,
        flags,
    ] = *bytes;

    let pixel_clock_10khz = u16::from_le_bytes([clock_lo, clock_hi]);
    if pixel_clock_10khz == 0 {
        return None;
    }

    let sync_detail_high = bit_is_set(flags, SYNC_DETAIL_HIGH_BIT);
    let sync_detail_low = bit_is_set(flags, SYNC_DETAIL_LOW_BIT);
    let sync = match SYNC_TYPE.extract(flags) {
        0 => SyncSignal::AnalogComposite {
            serrations: sync_detail_high,
            sync_on_all_rgb: sync_detail_low,
        },
        1 => SyncSignal::BipolarAnalogComposite {
            serrations: sync_detail_high,
            sync_on_all_rgb: sync_detail_low,
        },
        2 => SyncSignal::DigitalComposite {
            serrations: sync_detail_high,
            hsync_positive: sync_detail_low,
        },
        _ => SyncSignal::DigitalSeparate {
            vsync_positive: sync_detail_high,
            hsync_positive: sync_detail_low,
        },
    };

    Some(DetailedTiming {
        pixel_clock_hz: u32::from(pixel_clock_10khz) * PIXEL_CLOCK_UNIT_HZ,
        h_active: join_low_high(h_active_lo, HIGH_NIBBLE.extract(h_hi)),
        h_blank: join_low_high(h_blank_lo, LOW_NIBBLE.extract(h_hi)),
        v_active: join_low_high(v_active_lo, HIGH_NIBBLE.extract(v_hi)),
        v_blank: join_low_high(v_blank_lo, LOW_NIBBLE.extract(v_hi)),
        h_front_porch: join_low_high(h_front_porch_lo, H_FRONT_PORCH_HI.extract(porch_sync_hi)),
        h_sync_width: join_low_high(h_sync_lo, H_SYNC_WIDTH_HI.extract(porch_sync_hi)),
        v_front_porch: u16::from(V_FRONT_PORCH_HI.extract(porch_sync_hi)) << 4
            | u16::from(HIGH_NIBBLE.extract(v_porch_sync_lo)),
        v_sync_width: u16::from(V_SYNC_WIDTH_HI.extract(porch_sync_hi)) << 4
            | u16::from(LOW_NIBBLE.extract(v_porch_sync_lo)),
        h_image_size_mm: join_low_high(h_size_lo, HIGH_NIBBLE.extract(size_hi)),
        v_image_size_mm: join_low_high(v_size_lo, LOW_NIBBLE.extract(size_hi)),
        h_border,
        v_border,
        interlaced: bit_is_set(flags, INTERLACED_BIT),
        stereo_bits: STEREO_HIGH.extract(flags) << 1 | STEREO_LOW.extract(flags),
        sync,
    })
}

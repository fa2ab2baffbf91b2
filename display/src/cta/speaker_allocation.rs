// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Speaker allocation data block: 3 bytes of speaker-pair presence bits. CTA-861-F and
//! earlier only define the first byte (and two bits of the second), so a short payload
//! is zero-extended.

use serde::{Deserialize, Serialize};

pub const SPEAKER_ALLOCATION_SIZE: usize = 3;

bitflags::bitflags! {
    /// Bit positions follow the little-endian 24-bit value of the payload.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SpeakerAllocation: u32 {
        const FRONT_LEFT_RIGHT = 1 << 0;
        const LFE1 = 1 << 1;
        const FRONT_CENTER = 1 << 2;
        const BACK_LEFT_RIGHT = 1 << 3;
        const BACK_CENTER = 1 << 4;
        const FRONT_LEFT_RIGHT_CENTER = 1 << 5;
        const REAR_LEFT_RIGHT_CENTER = 1 << 6;
        const FRONT_LEFT_RIGHT_WIDE = 1 << 7;

        const TOP_FRONT_LEFT_RIGHT = 1 << 8;
        const TOP_CENTER = 1 << 9;
        const TOP_FRONT_CENTER = 1 << 10;
        const LEFT_RIGHT_SURROUND = 1 << 11;
        const LFE2 = 1 << 12;
        const TOP_BACK_CENTER = 1 << 13;
        const SIDE_LEFT_RIGHT = 1 << 14;
        const TOP_SIDE_LEFT_RIGHT = 1 << 15;

        const TOP_BACK_LEFT_RIGHT = 1 << 16;
        const BOTTOM_FRONT_CENTER = 1 << 17;
        const BOTTOM_FRONT_LEFT_RIGHT = 1 << 18;
        const TOP_LEFT_RIGHT_SURROUND = 1 << 19;
    }
}

impl SpeakerAllocation {
    /// Counts speakers, two per pair flag.
    #[must_use]
    pub fn speaker_count(self) -> u32 {
        const SINGLES: SpeakerAllocation = SpeakerAllocation::LFE1
            .union(SpeakerAllocation::FRONT_CENTER)
            .union(SpeakerAllocation::BACK_CENTER)
            .union(SpeakerAllocation::TOP_CENTER)
            .union(SpeakerAllocation::TOP_FRONT_CENTER)
            .union(SpeakerAllocation::LFE2)
            .union(SpeakerAllocation::TOP_BACK_CENTER)
            .union(SpeakerAllocation::BOTTOM_FRONT_CENTER);
        let singles = self.intersection(SINGLES).bits().count_ones();
        let pairs = self.difference(SINGLES).bits().count_ones();
        singles + pairs * 2
    }
}

/// `None` for an empty payload.
#[must_use]
pub fn parse_speaker_allocation(payload: &[u8]) -> Option<SpeakerAllocation> {
    if payload.is_empty() {
        return None;
    }
    let mut bytes = [0_u8; 4];
    for (dst, src) in bytes.iter_mut().zip(payload.iter().take(SPEAKER_ALLOCATION_SIZE)) {
        *dst = *src;
    }
    Some(SpeakerAllocation::from_bits_truncate(u32::from_le_bytes(bytes)))
}

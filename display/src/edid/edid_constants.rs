// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bit-exact layout constants for the 128-byte EDID base block.

pub const EDID_BLOCK_SIZE: usize = 128;
pub const EDID_HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];
pub const SUPPORTED_EDID_VERSION: u8 = 1;

pub const DESCRIPTOR_SIZE: usize = 18;
pub const DESCRIPTOR_COUNT: usize = 4;
pub const DESCRIPTOR_PAYLOAD_SIZE: usize = 13;
pub const STANDARD_TIMING_SIZE: usize = 2;
pub const STANDARD_TIMING_COUNT: usize = 8;
pub const ESTABLISHED_TIMINGS_SIZE: usize = 3;
pub const CHROMATICITY_SIZE: usize = 10;

/// Manufacture year and EDID 1.4 model year are stored as an offset from this year.
pub const EDID_YEAR_BASE: u16 = 1990;

/// Byte offsets of each field inside the base block.
pub mod edid_offsets {
    pub const HEADER: usize = 0;
    pub const MANUFACTURER_ID: usize = 8;
    pub const PRODUCT_CODE: usize = 10;
    pub const SERIAL_NUMBER: usize = 12;
    pub const MANUFACTURE_WEEK: usize = 16;
    pub const MANUFACTURE_YEAR: usize = 17;
    pub const VERSION: usize = 18;
    pub const REVISION: usize = 19;
    pub const VIDEO_INPUT: usize = 20;
    pub const SCREEN_WIDTH_CM: usize = 21;
    pub const SCREEN_HEIGHT_CM: usize = 22;
    pub const GAMMA: usize = 23;
    pub const FEATURE_SUPPORT: usize = 24;
    pub const CHROMATICITY: usize = 25;
    pub const ESTABLISHED_TIMINGS: usize = 35;
    pub const STANDARD_TIMINGS: usize = 38;
    pub const DESCRIPTORS: usize = 54;
    pub const EXTENSION_COUNT: usize = 126;
    pub const CHECKSUM: usize = 127;
}

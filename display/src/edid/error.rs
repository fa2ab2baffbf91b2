// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The only hard errors in the crate. See [`EdidParseError`].

use super::EDID_BLOCK_SIZE;

/// Errors from [`Edid::parse()`].
///
/// The checks run in the order of the variants below and the first failure wins, so a
/// buffer that is both too short and has a bad header reports [`TooSmall`].
///
/// | Variant                | Cause                                         |
/// | :--------------------- | :-------------------------------------------- |
/// | [`TooSmall`]           | Fewer than 128 bytes                          |
/// | [`InvalidHeader`]      | First 8 bytes are not `00 FF FF FF FF FF FF 00` |
/// | [`InvalidChecksum`]    | Base block bytes do not sum to 0 mod 256      |
/// | [`UnsupportedVersion`] | Version byte is not 1                         |
///
/// Nothing below this gate produces an error. Malformed sub-structures decode to `None`.
///
/// [`Edid::parse()`]: super::Edid::parse
/// [`TooSmall`]: Self::TooSmall
/// [`InvalidHeader`]: Self::InvalidHeader
/// [`InvalidChecksum`]: Self::InvalidChecksum
/// [`UnsupportedVersion`]: Self::UnsupportedVersion
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum EdidParseError {
    #[error("EDID buffer is {len} bytes, at least {EDID_BLOCK_SIZE} are required")]
    #[diagnostic(
        code(r3bl_display::edid::too_small),
        help("Pass the whole base block, e.g. the full contents of the sysfs `edid` file")
    )]
    TooSmall { len: usize },

    #[error("EDID header magic is missing")]
    #[diagnostic(
        code(r3bl_display::edid::invalid_header),
        help("The buffer does not start with an EDID base block (00 FF FF FF FF FF FF 00)")
    )]
    InvalidHeader,

    /// `sum` is the byte sum of the block mod 256. A valid block sums to 0.
    #[error("EDID base block checksum mismatch (byte sum mod 256 is {sum:#04x})")]
    #[diagnostic(
        code(r3bl_display::edid::invalid_checksum),
        help("The block was corrupted in transit or truncated by the driver, re-read it")
    )]
    InvalidChecksum { sum: u8 },

    #[error("EDID version {version} is not supported")]
    #[diagnostic(
        code(r3bl_display::edid::unsupported_version),
        help("Only EDID 1.x base blocks are decoded. DisplayID 2.x is a different format")
    )]
    UnsupportedVersion { version: u8 },
}

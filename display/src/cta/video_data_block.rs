// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Video data block: one short video descriptor (SVD) byte per supported format.
//!
//! CTA-861-F SVD encoding:
//!
//! | byte        | VIC          | native |
//! | :---------- | :----------- | :----- |
//! | 1 ..= 64    | byte         | no     |
//! | 65 ..= 127  | byte         | no     |
//! | 129 ..= 192 | byte & 0x7F  | yes    |
//! | 193 ..= 253 | byte         | no     |
//! | 0, 128, 254, 255 | reserved | -    |

use super::{VicTiming, lookup_vic};
use serde::{Deserialize, Serialize};

const NATIVE_FLAG: u8 = 0x80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortVideoDescriptor {
    pub vic: u8,
    pub native: bool,
}

impl ShortVideoDescriptor {
    /// Timing of the VIC, for the VICs in the built-in table (1 to 127).
    #[must_use]
    pub fn timing(&self) -> Option<&'static VicTiming> { lookup_vic(self.vic) }
}

#[must_use]
pub fn parse_short_video_descriptor(byte: u8) -> Option<ShortVideoDescriptor> {
    match byte {
        1..=127 | 193..=253 => Some(ShortVideoDescriptor {
            vic: byte,
            native: false,
        }),
        129..=192 => Some(ShortVideoDescriptor {
            vic: byte & !NATIVE_FLAG,
            native: true,
        }),
        _ => None,
    }
}

/// Borrowed SVD list, shared by the video and the YCbCr 4:2:0 video data blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoDataBlock<'a> {
    svds: &'a [u8],
}

impl<'a> VideoDataBlock<'a> {
    #[must_use]
    pub fn new(svds: &'a [u8]) -> Self { Self { svds } }

    #[must_use]
    pub fn raw(&self) -> &'a [u8] { self.svds }

    /// Number of SVD bytes, reserved ones included. SVD indices used by the 4:2:0
    /// capability map count every byte.
    #[must_use]
    pub fn len(&self) -> usize { self.svds.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.svds.is_empty() }

    /// Decoded SVDs, reserved bytes skipped.
    pub fn descriptors(&self) -> impl Iterator<Item = ShortVideoDescriptor> + use<'a> {
        self.svds
            .iter()
            .filter_map(|byte| parse_short_video_descriptor(*byte))
    }

    /// The SVD at raw byte `index`, or `None` when the index is out of range or the
    /// byte is reserved.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ShortVideoDescriptor> {
        parse_short_video_descriptor(*self.svds.get(index)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(1, Some((1, false)))]
    #[test_case(16, Some((16, false)))]
    #[test_case(64, Some((64, false)))]
    #[test_case(65, Some((65, false)))]
    #[test_case(127, Some((127, false)))]
    #[test_case(129, Some((1, true)))]
    #[test_case(144, Some((16, true)))]
    #[test_case(192, Some((64, true)))]
    #[test_case(193, Some((193, false)))]
    #[test_case(253, Some((253, false)))]
    #[test_case(0, None)]
    #[test_case(128, None)]
    #[test_case(254, None)]
    #[test_case(255, None)]
    fn test_svd_encoding(byte: u8, expected: Option<(u8, bool)>) {
        let decoded = parse_short_video_descriptor(byte).map(|svd| (svd.vic, svd.native));
        assert_eq2!(decoded, expected);
    }

    #[test]
    fn test_block_skips_reserved_bytes() {
        let block = VideoDataBlock::new(&[0x90, 0x00, 0x04, 0x1F]);
        let svds: Vec<_> = block.descriptors().collect();
        assert_eq2!(
            svds,
            vec![
                ShortVideoDescriptor {
                    vic: 16,
                    native: true
                },
                ShortVideoDescriptor {
                    vic: 4,
                    native: false
                },
                ShortVideoDescriptor {
                    vic: 31,
                    native: false
                },
            ]
        );
        assert_eq2!(block.len(), 4);
        assert_eq2!(block.get(1), None);
        assert_eq2!(block.get(2).map(|svd| svd.vic), Some(4));
        assert_eq2!(block.get(9), None);
    }

    #[test]
    fn test_svd_timing_lookup() {
        let svd = parse_short_video_descriptor(0x90).unwrap();
        let timing = svd.timing().unwrap();
        assert_eq2!((timing.h_active, timing.v_active, timing.refresh_hz), (1920, 1080, 60));
        assert_eq2!(parse_short_video_descriptor(200).unwrap().timing(), None);
    }
}

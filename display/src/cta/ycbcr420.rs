// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! YCbCr 4:2:0 support comes in two extended data blocks:
//!
//! - YCbCr 4:2:0 video data block (tag 14): SVDs of formats that the sink accepts
//!   *only* as 4:2:0. Decoded with [`super::VideoDataBlock`].
//! - YCbCr 4:2:0 capability map (tag 15): a bitmap over the SVDs of the regular video
//!   data block. Bit `i` (LSB first within each byte) marks the `i`-th SVD byte as also
//!   accepting 4:2:0. An empty map means every SVD does.

use super::VideoDataBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YCbCr420CapabilityMap<'a> {
    bitmap: &'a [u8],
}

impl<'a> YCbCr420CapabilityMap<'a> {
    #[must_use]
    pub fn new(bitmap: &'a [u8]) -> Self { Self { bitmap } }

    #[must_use]
    pub fn raw(&self) -> &'a [u8] { self.bitmap }

    #[must_use]
    pub fn covers_all(&self) -> bool { self.bitmap.is_empty() }

    /// Whether the SVD at raw byte `index` of the video data block accepts 4:2:0.
    /// Indices past the end of a non-empty map are unsupported.
    #[must_use]
    pub fn supports_svd_index(&self, index: usize) -> bool {
        if self.covers_all() {
            return true;
        }
        self.bitmap
            .get(index / 8)
            .is_some_and(|byte| byte & (1 << (index % 8)) != 0)
    }

    /// VICs of the SVDs in `video` that accept 4:2:0.
    pub fn supported_vics(self, video: VideoDataBlock<'a>) -> impl Iterator<Item = u8> {
        (0..video.len())
            .filter(move |index| self.supports_svd_index(*index))
            .filter_map(move |index| video.get(index))
            .map(|svd| svd.vic)
    }
}

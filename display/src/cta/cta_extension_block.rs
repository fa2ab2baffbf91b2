// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CTA-861 extension block (tag 0x02), a zero-copy view in the same manner as
//! [`crate::RawEdidBlock`].
//!
//! ```text
//! 0        tag (0x02)
//! 1        revision
//! 2        d: offset of the first DTD (0: no DTDs, no data blocks)
//! 3        underscan │ basic audio │ YCbCr 4:4:4 │ YCbCr 4:2:2 │ native DTD count (4)
//! 4..d     data block collection
//! d..127   18-byte DTDs, zero padded
//! 127      checksum
//! ```

use super::{
    AudioDataBlock, ColorimetryBlock, DataBlock, DataBlockIter, DataBlockTag,
    DecodedDataBlock, ExtendedTag, HdmiForumCapabilities, HdmiVsdb, HdrStaticMetadata,
    ShortVideoDescriptor, SpeakerAllocation, StrictDataBlockIter, VendorSpecificData,
    VideoCapability, VideoDataBlock, YCbCr420CapabilityMap, parse_short_video_descriptor,
};
use crate::{
    BitRange, DESCRIPTOR_SIZE, DetailedTiming, EDID_BLOCK_SIZE, parse_detailed_timing,
    validate_checksum_simd,
};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub const CTA_EXTENSION_TAG: u8 = 0x02;
pub const CTA_BLOCK_SIZE: usize = EDID_BLOCK_SIZE;
/// First byte of the data block collection.
pub const CTA_DATA_BLOCK_START: usize = 4;
/// The checksum byte, the region and DTD walks stop before it.
pub const CTA_CHECKSUM_OFFSET: usize = CTA_BLOCK_SIZE - 1;

const NATIVE_DTD_COUNT: BitRange = BitRange::new(0, 4);

pub mod cta_offsets {
    pub const TAG: usize = 0;
    pub const REVISION: usize = 1;
    pub const DTD_OFFSET: usize = 2;
    pub const FLAGS: usize = 3;
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CtaFlags: u8 {
        const UNDERSCAN = 0b1000_0000;
        const BASIC_AUDIO = 0b0100_0000;
        const YCBCR_444 = 0b0010_0000;
        const YCBCR_422 = 0b0001_0000;
    }
}

/// VIC lists collected across data blocks. Sinks rarely list more than a couple dozen.
pub type VicList = SmallVec<[u8; 32]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaExtensionBlock<'a> {
    bytes: &'a [u8; CTA_BLOCK_SIZE],
}

impl<'a> CtaExtensionBlock<'a> {
    /// Pure reinterpretation, the tag is not checked. See [`Self::try_from_bytes`].
    #[must_use]
    pub fn from_bytes(bytes: &'a [u8; CTA_BLOCK_SIZE]) -> Self { Self { bytes } }

    /// `None` when `bytes` is shorter than a block or does not carry the CTA tag.
    #[must_use]
    pub fn try_from_bytes(bytes: &'a [u8]) -> Option<Self> {
        let block = bytes.first_chunk::<CTA_BLOCK_SIZE>()?;
        (block[cta_offsets::TAG] == CTA_EXTENSION_TAG).then_some(Self { bytes: block })
    }

    #[must_use]
    pub fn bytes(&self) -> &'a [u8; CTA_BLOCK_SIZE] { self.bytes }

    #[must_use]
    pub fn tag(&self) -> u8 { self.bytes[cta_offsets::TAG] }

    #[must_use]
    pub fn revision(&self) -> u8 { self.bytes[cta_offsets::REVISION] }

    #[must_use]
    pub fn dtd_offset(&self) -> u8 { self.bytes[cta_offsets::DTD_OFFSET] }

    #[must_use]
    pub fn flags(&self) -> CtaFlags {
        CtaFlags::from_bits_truncate(self.bytes[cta_offsets::FLAGS])
    }

    /// Number of DTDs, counted from the first, that describe native formats.
    #[must_use]
    pub fn native_dtd_count(&self) -> u8 {
        NATIVE_DTD_COUNT.extract(self.bytes[cta_offsets::FLAGS])
    }

    #[must_use]
    pub fn has_valid_checksum(&self) -> bool { validate_checksum_simd(self.bytes) }

    /// Bytes `4..d`. Empty when `d` is below 4 (0 means "absent"), and clamped so the
    /// checksum byte is never part of it.
    #[must_use]
    pub fn data_block_region(&self) -> &'a [u8] {
        let end = usize::from(self.dtd_offset()).min(CTA_CHECKSUM_OFFSET);
        self.bytes.get(CTA_DATA_BLOCK_START..end).unwrap_or_default()
    }

    /// Lenient walk: a zero-length or truncated block ends iteration quietly.
    #[must_use]
    pub fn data_blocks(&self) -> DataBlockIter<'a> {
        DataBlockIter::new(self.data_block_region())
    }

    /// Same walk, with a final error instead of a quiet stop.
    #[must_use]
    pub fn data_blocks_strict(&self) -> StrictDataBlockIter<'a> {
        StrictDataBlockIter::new(self.data_block_region())
    }

    /// Timings stored after the data block collection, up to the first zero pixel
    /// clock.
    pub fn detailed_timings(&self) -> impl Iterator<Item = DetailedTiming> + use<'a> {
        let start = usize::from(self.dtd_offset());
        let dtd_area: &'a [u8] = if start < CTA_DATA_BLOCK_START {
            &[]
        } else {
            self.bytes.get(start..CTA_CHECKSUM_OFFSET).unwrap_or_default()
        };
        dtd_area
            .chunks_exact(DESCRIPTOR_SIZE)
            .map_while(|chunk| parse_detailed_timing(chunk.first_chunk::<DESCRIPTOR_SIZE>()?))
    }

    fn decoded_blocks(&self) -> impl Iterator<Item = DecodedDataBlock<'a>> + use<'a> {
        self.data_blocks().map(|block| block.decode())
    }

    fn find_extended(&self, tag: ExtendedTag) -> Option<DataBlock<'a>> {
        self.data_blocks().find(|block| block.is_extended(tag))
    }

    /// Every video data block, in order.
    pub fn video_data_blocks(&self) -> impl Iterator<Item = VideoDataBlock<'a>> + use<'a> {
        self.data_blocks()
            .filter(|block| block.tag() == DataBlockTag::Video)
            .map(|block| VideoDataBlock::new(block.payload()))
    }

    /// SVDs of every video data block, reserved bytes skipped.
    pub fn short_video_descriptors(
        &self,
    ) -> impl Iterator<Item = ShortVideoDescriptor> + use<'a> {
        self.video_data_blocks().flat_map(|video| video.descriptors())
    }

    /// Every audio data block, in order.
    pub fn audio_data_blocks(&self) -> impl Iterator<Item = AudioDataBlock<'a>> + use<'a> {
        self.data_blocks()
            .filter(|block| block.tag() == DataBlockTag::Audio)
            .map(|block| AudioDataBlock::new(block.payload()))
    }

    #[must_use]
    pub fn speaker_allocation(&self) -> Option<SpeakerAllocation> {
        self.decoded_blocks().find_map(|decoded| match decoded {
            DecodedDataBlock::SpeakerAllocation(allocation) => Some(allocation),
            _ => None,
        })
    }

    #[must_use]
    pub fn hdmi_vsdb(&self) -> Option<HdmiVsdb> {
        self.decoded_blocks().find_map(|decoded| match decoded {
            DecodedDataBlock::VendorSpecific(VendorSpecificData::Hdmi(vsdb)) => Some(vsdb),
            _ => None,
        })
    }

    /// From the HDMI Forum VSDB, or the sink capability data block when the VSDB is
    /// absent.
    #[must_use]
    pub fn hdmi_forum_capabilities(&self) -> Option<HdmiForumCapabilities> {
        self.decoded_blocks().find_map(|decoded| match decoded {
            DecodedDataBlock::VendorSpecific(VendorSpecificData::HdmiForum(caps))
            | DecodedDataBlock::HdmiForumSinkCapability(caps) => Some(caps),
            _ => None,
        })
    }

    #[must_use]
    pub fn hdr_static_metadata(&self) -> Option<HdrStaticMetadata> {
        self.decoded_blocks().find_map(|decoded| match decoded {
            DecodedDataBlock::HdrStaticMetadata(hdr) => Some(hdr),
            _ => None,
        })
    }

    #[must_use]
    pub fn colorimetry(&self) -> Option<ColorimetryBlock> {
        self.decoded_blocks().find_map(|decoded| match decoded {
            DecodedDataBlock::Colorimetry(colorimetry) => Some(colorimetry),
            _ => None,
        })
    }

    #[must_use]
    pub fn video_capability(&self) -> Option<VideoCapability> {
        self.decoded_blocks().find_map(|decoded| match decoded {
            DecodedDataBlock::VideoCapability(capability) => Some(capability),
            _ => None,
        })
    }

    #[must_use]
    pub fn ycbcr420_capability_map(&self) -> Option<YCbCr420CapabilityMap<'a>> {
        self.find_extended(ExtendedTag::YCbCr420CapabilityMap)
            .map(|block| YCbCr420CapabilityMap::new(block.payload()))
    }

    /// VICs the sink accepts as YCbCr 4:2:0: the 4:2:0-only VICs, then the regular SVDs
    /// selected by the capability map. SVD indices in the map run across all video data
    /// blocks in order.
    #[must_use]
    pub fn ycbcr420_capable_vics(&self) -> VicList {
        let mut vics: VicList = self
            .data_blocks()
            .filter(|block| block.is_extended(ExtendedTag::YCbCr420Video))
            .flat_map(|block| VideoDataBlock::new(block.payload()).descriptors())
            .map(|svd| svd.vic)
            .collect();

        if let Some(map) = self.ycbcr420_capability_map() {
            let svd_bytes = self.video_data_blocks().flat_map(|video| video.raw().iter());
            for (index, byte) in svd_bytes.enumerate() {
                if !map.supports_svd_index(index) {
                    continue;
                }
                if let Some(svd) = parse_short_video_descriptor(*byte) {
                    vics.push(svd.vic);
                }
            }
        }
        vics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Colorimetry, IterTermination, assert_eq2,
        test_fixtures::{CtaBlockBuilder, DTD_1920X1080_60, fix_checksum},
    };
    use test_case::test_case;

    #[test]
    fn test_header_fields() {
        let bytes = CtaBlockBuilder::new().revision(3).flags(0xF1).build();
        let cta = CtaExtensionBlock::from_bytes(&bytes);
        assert_eq2!(cta.tag(), CTA_EXTENSION_TAG);
        assert_eq2!(cta.revision(), 3);
        assert_eq2!(
            cta.flags(),
            CtaFlags::UNDERSCAN
                | CtaFlags::BASIC_AUDIO
                | CtaFlags::YCBCR_444
                | CtaFlags::YCBCR_422
        );
        assert_eq2!(cta.native_dtd_count(), 1);
        assert!(cta.has_valid_checksum());
    }

    #[test]
    fn test_try_from_bytes() {
        let bytes = CtaBlockBuilder::new().build();
        assert!(CtaExtensionBlock::try_from_bytes(&bytes).is_some());
        assert!(CtaExtensionBlock::try_from_bytes(&bytes[..100]).is_none());
        let mut other = bytes;
        other[0] = 0x70;
        assert!(CtaExtensionBlock::try_from_bytes(&other).is_none());
    }

    #[test]
    fn test_data_block_region_bounds() {
        let bytes = CtaBlockBuilder::new().data_block(2, &[0x90, 0x04]).build();
        let cta = CtaExtensionBlock::from_bytes(&bytes);
        assert_eq2!(cta.dtd_offset(), 7);
        assert_eq2!(cta.data_block_region(), &[0x42, 0x90, 0x04]);
    }

    #[test_case(0 ; "absent")]
    #[test_case(2 ; "below header")]
    #[test_case(4 ; "no data blocks")]
    fn test_empty_region(dtd_offset: u8) {
        let mut bytes = CtaBlockBuilder::new().data_block(2, &[0x90]).build();
        bytes[2] = dtd_offset;
        fix_checksum(&mut bytes);
        let cta = CtaExtensionBlock::from_bytes(&bytes);
        assert!(cta.data_block_region().is_empty());
        assert_eq2!(cta.data_blocks().count(), 0);
    }

    #[test]
    fn test_region_never_includes_checksum() {
        let mut bytes = CtaBlockBuilder::new().build();
        bytes[2] = 0xFF;
        let cta = CtaExtensionBlock::from_bytes(&bytes);
        assert_eq2!(
            cta.data_block_region().len(),
            CTA_CHECKSUM_OFFSET - CTA_DATA_BLOCK_START
        );
        assert_eq2!(cta.detailed_timings().count(), 0);
    }

    #[test]
    fn test_detailed_timings_stop_at_padding() {
        let bytes = CtaBlockBuilder::new()
            .data_block(2, &[0x90])
            .dtd(DTD_1920X1080_60)
            .dtd(DTD_1920X1080_60)
            .build();
        let cta = CtaExtensionBlock::from_bytes(&bytes);
        let timings: Vec<_> = cta.detailed_timings().collect();
        assert_eq2!(timings.len(), 2);
        assert_eq2!((timings[0].h_active, timings[0].v_active), (1920, 1080));
    }

    #[test]
    fn test_lenient_and_strict_walks_agree_on_blocks() {
        let mut bytes = CtaBlockBuilder::new()
            .data_block(2, &[0x90, 0x04])
            .data_block(1, &[0x09, 0x07, 0x07])
            .build();
        // Second header now claims 31 bytes.
        bytes[7] = 0x3F;
        fix_checksum(&mut bytes);
        let cta = CtaExtensionBlock::from_bytes(&bytes);

        let mut lenient = cta.data_blocks();
        assert_eq2!(lenient.by_ref().count(), 1);
        assert_eq2!(
            lenient.termination(),
            Some(IterTermination::Truncated {
                offset: 3,
                declared: 31,
                available: 3
            })
        );

        let strict: Vec<_> = cta.data_blocks_strict().collect();
        assert_eq2!(strict.len(), 2);
        assert!(strict[1].is_err());
    }

    #[test]
    fn test_short_video_descriptors_across_blocks() {
        let bytes = CtaBlockBuilder::new()
            .data_block(2, &[0x90, 0x04])
            .data_block(1, &[0x09, 0x07, 0x07])
            .data_block(2, &[0x5F])
            .build();
        let cta = CtaExtensionBlock::from_bytes(&bytes);
        let vics: Vec<_> = cta.short_video_descriptors().map(|svd| svd.vic).collect();
        assert_eq2!(vics, vec![16, 4, 95]);
        assert_eq2!(cta.audio_data_blocks().count(), 1);
    }

    #[test]
    fn test_ycbcr420_capable_vics() {
        let bytes = CtaBlockBuilder::new()
            .data_block(2, &[0x90, 0x04])
            .data_block(2, &[0x61])
            .extended_block(14, &[0x66])
            .extended_block(15, &[0b0000_0101])
            .build();
        let cta = CtaExtensionBlock::from_bytes(&bytes);
        assert_eq2!(cta.ycbcr420_capable_vics().as_slice(), &[102, 16, 97]);
    }

    #[test]
    fn test_ycbcr420_empty_map_covers_all() {
        let bytes = CtaBlockBuilder::new()
            .data_block(2, &[0x90, 0x04])
            .extended_block(15, &[])
            .build();
        let cta = CtaExtensionBlock::from_bytes(&bytes);
        assert_eq2!(cta.ycbcr420_capable_vics().as_slice(), &[16, 4]);
    }

    #[test]
    fn test_ycbcr420_without_blocks() {
        let bytes = CtaBlockBuilder::new().data_block(2, &[0x90]).build();
        let cta = CtaExtensionBlock::from_bytes(&bytes);
        assert!(cta.ycbcr420_capable_vics().is_empty());
        assert_eq2!(cta.ycbcr420_capability_map(), None);
    }

    #[test]
    fn test_finders() {
        let bytes = CtaBlockBuilder::new()
            .data_block(3, &[0x03, 0x0C, 0x00, 0x10, 0x00, 0x00, 0x3C])
            .data_block(3, &[0xD8, 0x5D, 0xC4, 0x01, 0x78, 0x80, 0x00])
            .data_block(4, &[0x0F, 0x00, 0x00])
            .extended_block(0, &[0xCB])
            .extended_block(5, &[0xE0, 0x80])
            .extended_block(6, &[0x05, 0x01, 0x60])
            .build();
        let cta = CtaExtensionBlock::from_bytes(&bytes);

        assert_eq2!(cta.hdmi_vsdb().unwrap().max_tmds_clock_mhz, Some(300));
        assert_eq2!(
            cta.hdmi_forum_capabilities()
                .unwrap()
                .max_tmds_character_rate_mhz,
            Some(600)
        );
        assert_eq2!(cta.speaker_allocation().unwrap().speaker_count(), 6);
        assert!(cta.video_capability().unwrap().rgb_quantization_selectable);
        assert!(
            cta.colorimetry()
                .unwrap()
                .colorimetry
                .contains(Colorimetry::DCI_P3)
        );
        assert!(cta.hdr_static_metadata().unwrap().supports_pq());
    }

    #[test]
    fn test_finders_on_empty_block() {
        let bytes = CtaBlockBuilder::new().build();
        let cta = CtaExtensionBlock::from_bytes(&bytes);
        assert_eq2!(cta.hdmi_vsdb(), None);
        assert_eq2!(cta.hdr_static_metadata(), None);
        assert_eq2!(cta.colorimetry(), None);
        assert_eq2!(cta.speaker_allocation(), None);
        assert_eq2!(cta.short_video_descriptors().count(), 0);
    }
}

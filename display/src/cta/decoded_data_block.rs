// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Dispatch from a raw [`DataBlock`] to the decoder for its tag.

use super::{
    AudioDataBlock, ColorimetryBlock, DataBlock, DataBlockTag, ExtendedTag,
    HdmiForumCapabilities, HdmiVsdb, HdrStaticMetadata, SpeakerAllocation,
    VendorSpecificBlock, VideoCapability, VideoDataBlock, YCbCr420CapabilityMap,
    parse_colorimetry, parse_hdmi_forum_scdb, parse_hdmi_forum_vsdb, parse_hdmi_vsdb,
    parse_hdr_static_metadata, parse_speaker_allocation, parse_vendor_specific,
    parse_video_capability,
};

/// Vendor-specific blocks with a decoder for their OUI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VendorSpecificData<'a> {
    Hdmi(HdmiVsdb),
    HdmiForum(HdmiForumCapabilities),
    Other(VendorSpecificBlock<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecodedDataBlock<'a> {
    Audio(AudioDataBlock<'a>),
    Video(VideoDataBlock<'a>),
    VendorSpecific(VendorSpecificData<'a>),
    SpeakerAllocation(SpeakerAllocation),
    VideoCapability(VideoCapability),
    Colorimetry(ColorimetryBlock),
    HdrStaticMetadata(HdrStaticMetadata),
    /// SVDs the sink accepts only as YCbCr 4:2:0.
    YCbCr420Video(VideoDataBlock<'a>),
    YCbCr420CapabilityMap(YCbCr420CapabilityMap<'a>),
    HdmiForumSinkCapability(HdmiForumCapabilities),
    /// No decoder for this tag.
    Unknown(DataBlock<'a>),
    /// A decoder exists but the payload is too short for it.
    Malformed(DataBlock<'a>),
}

impl<'a> DataBlock<'a> {
    /// Decodes the payload according to the tag. Never fails: blocks without a decoder
    /// come back as [`DecodedDataBlock::Unknown`] and short payloads as
    /// [`DecodedDataBlock::Malformed`].
    #[must_use]
    pub fn decode(&self) -> DecodedDataBlock<'a> {
        let payload = self.payload();
        let decoded = match (self.tag(), self.extended_tag()) {
            (DataBlockTag::Audio, _) => {
                Some(DecodedDataBlock::Audio(AudioDataBlock::new(payload)))
            }
            (DataBlockTag::Video, _) => {
                Some(DecodedDataBlock::Video(VideoDataBlock::new(payload)))
            }
            (DataBlockTag::VendorSpecific, _) => {
                decode_vendor_specific(payload).map(DecodedDataBlock::VendorSpecific)
            }
            (DataBlockTag::SpeakerAllocation, _) => {
                parse_speaker_allocation(payload).map(DecodedDataBlock::SpeakerAllocation)
            }
            (DataBlockTag::Extended, Some(ExtendedTag::VideoCapability)) => {
                parse_video_capability(payload).map(DecodedDataBlock::VideoCapability)
            }
            (DataBlockTag::Extended, Some(ExtendedTag::Colorimetry)) => {
                parse_colorimetry(payload).map(DecodedDataBlock::Colorimetry)
            }
            (DataBlockTag::Extended, Some(ExtendedTag::HdrStaticMetadata)) => {
                parse_hdr_static_metadata(payload).map(DecodedDataBlock::HdrStaticMetadata)
            }
            (DataBlockTag::Extended, Some(ExtendedTag::YCbCr420Video)) => Some(
                DecodedDataBlock::YCbCr420Video(VideoDataBlock::new(payload)),
            ),
            (DataBlockTag::Extended, Some(ExtendedTag::YCbCr420CapabilityMap)) => Some(
                DecodedDataBlock::YCbCr420CapabilityMap(YCbCr420CapabilityMap::new(payload)),
            ),
            (DataBlockTag::Extended, Some(ExtendedTag::HdmiForumSinkCapability)) => {
                parse_hdmi_forum_scdb(payload).map(DecodedDataBlock::HdmiForumSinkCapability)
            }
            _ => return DecodedDataBlock::Unknown(*self),
        };

        decoded.unwrap_or_else(|| {
            tracing::trace!(
                message = "CTA data block too short for its decoder",
                tag = ?self.tag(),
                extended_tag = ?self.extended_tag(),
                len = payload.len()
            );
            DecodedDataBlock::Malformed(*self)
        })
    }
}

fn decode_vendor_specific(payload: &[u8]) -> Option<VendorSpecificData<'_>> {
    let block = parse_vendor_specific(payload)?;
    if block.is_hdmi_llc() {
        parse_hdmi_vsdb(block.body).map(VendorSpecificData::Hdmi)
    } else if block.is_hdmi_forum() {
        parse_hdmi_forum_vsdb(block.body).map(VendorSpecificData::HdmiForum)
    } else {
        Some(VendorSpecificData::Other(block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataBlockIter, HdrEotfs, PhysicalAddress, assert_eq2};

    fn decode_first(region: &[u8]) -> DecodedDataBlock<'_> {
        DataBlockIter::new(region).next().unwrap().decode()
    }

    #[test]
    fn test_video() {
        let DecodedDataBlock::Video(video) = decode_first(&[0x42, 0x90, 0x04]) else {
            panic!("expected a video data block");
        };
        let vics: Vec<_> = video.descriptors().map(|svd| svd.vic).collect();
        assert_eq2!(vics, vec![16, 4]);
    }

    #[test]
    fn test_hdmi_vsdb() {
        let decoded = decode_first(&[0x65, 0x03, 0x0C, 0x00, 0x10, 0x00]);
        let DecodedDataBlock::VendorSpecific(VendorSpecificData::Hdmi(vsdb)) = decoded else {
            panic!("expected an HDMI VSDB, got {decoded:?}");
        };
        assert_eq2!(
            vsdb.physical_address,
            PhysicalAddress {
                a: 1,
                b: 0,
                c: 0,
                d: 0
            }
        );
    }

    #[test]
    fn test_hdmi_forum_vsdb() {
        let decoded = decode_first(&[0x67, 0xD8, 0x5D, 0xC4, 0x01, 0x78, 0x80, 0x00]);
        let DecodedDataBlock::VendorSpecific(VendorSpecificData::HdmiForum(caps)) = decoded
        else {
            panic!("expected an HDMI Forum VSDB, got {decoded:?}");
        };
        assert_eq2!(caps.max_tmds_character_rate_mhz, Some(600));
    }

    #[test]
    fn test_unknown_vendor() {
        let decoded = decode_first(&[0x63, 0x1A, 0x00, 0x00]);
        let DecodedDataBlock::VendorSpecific(VendorSpecificData::Other(block)) = decoded else {
            panic!("expected an opaque vendor block, got {decoded:?}");
        };
        assert_eq2!(block.oui, 0x00_001A);
    }

    #[test]
    fn test_hdr_static_metadata() {
        let decoded = decode_first(&[0xE3, 0x06, 0x05, 0x01]);
        let DecodedDataBlock::HdrStaticMetadata(hdr) = decoded else {
            panic!("expected HDR static metadata, got {decoded:?}");
        };
        assert_eq2!(hdr.eotfs, HdrEotfs::TRADITIONAL_SDR | HdrEotfs::SMPTE_ST2084);
    }

    #[test]
    fn test_short_payload_is_malformed() {
        let decoded = decode_first(&[0xE2, 0x06, 0x05]);
        assert!(matches!(decoded, DecodedDataBlock::Malformed(_)));
        let decoded = decode_first(&[0x62, 0x03, 0x0C]);
        assert!(matches!(decoded, DecodedDataBlock::Malformed(_)));
    }

    #[test]
    fn test_unknown_tags() {
        assert!(matches!(
            decode_first(&[0xA1, 0x00]),
            DecodedDataBlock::Unknown(_)
        ));
        assert!(matches!(
            decode_first(&[0xE2, 0x07, 0x00]),
            DecodedDataBlock::Unknown(_)
        ));
    }

    #[test]
    fn test_capability_map() {
        let decoded = decode_first(&[0xE2, 0x0F, 0x01]);
        let DecodedDataBlock::YCbCr420CapabilityMap(map) = decoded else {
            panic!("expected a capability map, got {decoded:?}");
        };
        assert!(map.supports_svd_index(0));
        assert!(!map.supports_svd_index(1));
    }
}

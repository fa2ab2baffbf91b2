// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tag and length prefixed data blocks in the CTA-861 data block collection.
//!
//! ```text
//!   7   6   5   4   3   2   1   0
//! ┌───────────┬───────────────────┐
//! │    tag    │      length       │  header byte, length excludes the header
//! └───────────┴───────────────────┘
//! tag 7 (extended): the first payload byte is the extended tag and is not part of
//! DataBlock::payload()
//! ```
//!
//! Two walks over the same bytes are offered:
//!
//! - [`DataBlockIter`] is lenient. A zero length header or a block that runs past the
//!   end of the region ends iteration like the end of the region does. Afterwards
//!   [`DataBlockIter::termination`] tells the three cases apart.
//! - [`StrictDataBlockIter`] yields `Result`s and reports the first two cases as a
//!   final [`DataBlockError`].

use crate::BitRange;

const HEADER_TAG: BitRange = BitRange::new(5, 3);
const HEADER_LENGTH: BitRange = BitRange::new(0, 5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataBlockTag {
    Audio,
    Video,
    VendorSpecific,
    SpeakerAllocation,
    VesaDisplayTransferCharacteristic,
    Extended,
    /// Tags 0 and 6.
    Reserved(u8),
}

impl From<u8> for DataBlockTag {
    fn from(tag: u8) -> Self {
        match tag {
            1 => Self::Audio,
            2 => Self::Video,
            3 => Self::VendorSpecific,
            4 => Self::SpeakerAllocation,
            5 => Self::VesaDisplayTransferCharacteristic,
            7 => Self::Extended,
            other => Self::Reserved(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtendedTag {
    VideoCapability,
    VendorSpecificVideo,
    VesaDisplayDevice,
    VesaVideoTimingBlock,
    Colorimetry,
    HdrStaticMetadata,
    HdrDynamicMetadata,
    NativeVideoResolution,
    VideoFormatPreference,
    YCbCr420Video,
    YCbCr420CapabilityMap,
    VendorSpecificAudio,
    RoomConfiguration,
    SpeakerLocation,
    InfoFrame,
    HdmiForumEdidExtensionOverride,
    HdmiForumSinkCapability,
    Unknown(u8),
}

impl From<u8> for ExtendedTag {
    fn from(tag: u8) -> Self {
        match tag {
            0 => Self::VideoCapability,
            1 => Self::VendorSpecificVideo,
            2 => Self::VesaDisplayDevice,
            3 => Self::VesaVideoTimingBlock,
            5 => Self::Colorimetry,
            6 => Self::HdrStaticMetadata,
            7 => Self::HdrDynamicMetadata,
            8 => Self::NativeVideoResolution,
            13 => Self::VideoFormatPreference,
            14 => Self::YCbCr420Video,
            15 => Self::YCbCr420CapabilityMap,
            17 => Self::VendorSpecificAudio,
            19 => Self::RoomConfiguration,
            20 => Self::SpeakerLocation,
            32 => Self::InfoFrame,
            0x78 => Self::HdmiForumEdidExtensionOverride,
            0x79 => Self::HdmiForumSinkCapability,
            other => Self::Unknown(other),
        }
    }
}

/// One data block, borrowed from the extension block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataBlock<'a> {
    tag: DataBlockTag,
    extended_tag: Option<ExtendedTag>,
    payload: &'a [u8],
    offset: usize,
}

impl<'a> DataBlock<'a> {
    #[must_use]
    pub fn tag(&self) -> DataBlockTag { self.tag }

    /// `Some` only when [`Self::tag`] is [`DataBlockTag::Extended`].
    #[must_use]
    pub fn extended_tag(&self) -> Option<ExtendedTag> { self.extended_tag }

    /// Payload after the header byte, and after the extended tag byte if there is one.
    #[must_use]
    pub fn payload(&self) -> &'a [u8] { self.payload }

    /// Offset of the header byte inside the data block region.
    #[must_use]
    pub fn offset(&self) -> usize { self.offset }

    #[must_use]
    pub fn is_extended(&self, tag: ExtendedTag) -> bool { self.extended_tag == Some(tag) }
}

/// How a [`DataBlockIter`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IterTermination {
    /// Every byte of the region was consumed by whole blocks.
    Exhausted,
    /// The header at `offset` declares a length of 0.
    ZeroLength { offset: usize },
    /// The block at `offset` declares more payload than the region has left.
    Truncated {
        offset: usize,
        declared: usize,
        available: usize,
    },
}

/// Reported by [`StrictDataBlockIter`] where [`DataBlockIter`] would just stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum DataBlockError {
    #[error("CTA data block at offset {offset} has length 0")]
    #[diagnostic(
        code(r3bl_display::cta::zero_length),
        help("The data block collection is malformed past this point")
    )]
    ZeroLength { offset: usize },

    #[error(
        "CTA data block at offset {offset} declares {declared} bytes, only {available} remain"
    )]
    #[diagnostic(
        code(r3bl_display::cta::truncated),
        help("Check the detailed timing offset in byte 2 of the extension block")
    )]
    Truncated {
        offset: usize,
        declared: usize,
        available: usize,
    },
}

/// Lenient walk over a data block region. Never reads past `region`.
#[derive(Debug, Clone)]
pub struct DataBlockIter<'a> {
    region: &'a [u8],
    position: usize,
    termination: Option<IterTermination>,
}

impl<'a> DataBlockIter<'a> {
    #[must_use]
    pub fn new(region: &'a [u8]) -> Self {
        Self {
            region,
            position: 0,
            termination: None,
        }
    }

    /// `None` while iteration is still in progress.
    #[must_use]
    pub fn termination(&self) -> Option<IterTermination> { self.termination }

    fn stop(&mut self, termination: IterTermination) -> Option<DataBlock<'a>> {
        match termination {
            IterTermination::Exhausted => {}
            IterTermination::ZeroLength { offset } => {
                tracing::trace!(message = "CTA data block with zero length", offset);
            }
            IterTermination::Truncated {
                offset,
                declared,
                available,
            } => {
                tracing::trace!(
                    message = "CTA data block truncated",
                    offset,
                    declared,
                    available
                );
            }
        }
        self.termination = Some(termination);
        None
    }
}

impl<'a> Iterator for DataBlockIter<'a> {
    type Item = DataBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.termination.is_some() {
            return None;
        }

        let offset = self.position;
        let remaining = self.region.get(offset..).unwrap_or_default();
        let Some((&header, rest)) = remaining.split_first() else {
            return self.stop(IterTermination::Exhausted);
        };

        let declared = usize::from(HEADER_LENGTH.extract(header));
        if declared == 0 {
            return self.stop(IterTermination::ZeroLength { offset });
        }
        let Some(block_bytes) = rest.get(..declared) else {
            return self.stop(IterTermination::Truncated {
                offset,
                declared,
                available: rest.len(),
            });
        };
        self.position = offset + 1 + declared;

        let tag = DataBlockTag::from(HEADER_TAG.extract(header));
        let (extended_tag, payload) = match (tag, block_bytes.split_first()) {
            (DataBlockTag::Extended, Some((&extended, payload))) => {
                (Some(ExtendedTag::from(extended)), payload)
            }
            _ => (None, block_bytes),
        };

        Some(DataBlock {
            tag,
            extended_tag,
            payload,
            offset,
        })
    }
}

impl std::iter::FusedIterator for DataBlockIter<'_> {}

/// Same walk as [`DataBlockIter`], with the abnormal stops surfaced as errors.
#[derive(Debug, Clone)]
pub struct StrictDataBlockIter<'a> {
    inner: DataBlockIter<'a>,
    reported: bool,
}

impl<'a> StrictDataBlockIter<'a> {
    #[must_use]
    pub fn new(region: &'a [u8]) -> Self {
        Self {
            inner: DataBlockIter::new(region),
            reported: false,
        }
    }
}

impl<'a> Iterator for StrictDataBlockIter<'a> {
    type Item = Result<DataBlock<'a>, DataBlockError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(block) = self.inner.next() {
            return Some(Ok(block));
        }
        if self.reported {
            return None;
        }
        self.reported = true;
        match self.inner.termination()? {
            IterTermination::Exhausted => None,
            IterTermination::ZeroLength { offset } => {
                Some(Err(DataBlockError::ZeroLength { offset }))
            }
            IterTermination::Truncated {
                offset,
                declared,
                available,
            } => Some(Err(DataBlockError::Truncated {
                offset,
                declared,
                available,
            })),
        }
    }
}

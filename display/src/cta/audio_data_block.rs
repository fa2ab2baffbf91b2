// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Audio data block: a run of 3-byte short audio descriptors (SAD).
//!
//! ```text
//! byte 0: ─ │ format code (4) │ channels - 1 (3)
//! byte 1: ─ │ 192 │ 176.4 │ 96 │ 88.2 │ 48 │ 44.1 │ 32 kHz
//! byte 2: depends on the format code
//!         LPCM        → bit depths (24 │ 20 │ 16)
//!         codes 2..=8 → max bitrate / 8 kbps
//!         code 15     → extension type code in bits 7-3
//! ```

use crate::BitRange;
use serde::{Deserialize, Serialize};

pub const SHORT_AUDIO_DESCRIPTOR_SIZE: usize = 3;

const FORMAT_CODE: BitRange = BitRange::new(3, 4);
const CHANNELS_MINUS_ONE: BitRange = BitRange::new(0, 3);
const EXTENSION_TYPE_CODE: BitRange = BitRange::new(3, 5);
const BITRATE_UNIT_KBPS: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioFormat {
    Lpcm,
    Ac3,
    Mpeg1,
    Mp3,
    Mpeg2Multichannel,
    AacLc,
    Dts,
    Atrac,
    OneBitAudio,
    EnhancedAc3,
    DtsHd,
    MatMlp,
    Dst,
    WmaPro,
    Extended,
    Reserved,
}

impl From<u8> for AudioFormat {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Lpcm,
            2 => Self::Ac3,
            3 => Self::Mpeg1,
            4 => Self::Mp3,
            5 => Self::Mpeg2Multichannel,
            6 => Self::AacLc,
            7 => Self::Dts,
            8 => Self::Atrac,
            9 => Self::OneBitAudio,
            10 => Self::EnhancedAc3,
            11 => Self::DtsHd,
            12 => Self::MatMlp,
            13 => Self::Dst,
            14 => Self::WmaPro,
            15 => Self::Extended,
            _ => Self::Reserved,
        }
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SampleRates: u8 {
        const KHZ_32 = 0b0000_0001;
        const KHZ_44_1 = 0b0000_0010;
        const KHZ_48 = 0b0000_0100;
        const KHZ_88_2 = 0b0000_1000;
        const KHZ_96 = 0b0001_0000;
        const KHZ_176_4 = 0b0010_0000;
        const KHZ_192 = 0b0100_0000;
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct LpcmBitDepths: u8 {
        const BITS_16 = 0b0000_0001;
        const BITS_20 = 0b0000_0010;
        const BITS_24 = 0b0000_0100;
    }
}

/// Meaning of the third SAD byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioFormatDetail {
    LpcmBitDepths(LpcmBitDepths),
    MaxBitrateKbps(u16),
    ExtensionTypeCode(u8),
    /// Codes 9 to 14 define the byte per format.
    FormatDependent(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortAudioDescriptor {
    pub format: AudioFormat,
    pub max_channels: u8,
    pub sample_rates: SampleRates,
    pub detail: AudioFormatDetail,
}

#[must_use]
pub fn parse_short_audio_descriptor(bytes: &[u8; 3]) -> ShortAudioDescriptor {
    let [format_byte, rates_byte, detail_byte] = *bytes;
    let format = AudioFormat::from(FORMAT_CODE.extract(format_byte));
    let detail = match format {
        AudioFormat::Lpcm => {
            AudioFormatDetail::LpcmBitDepths(LpcmBitDepths::from_bits_truncate(detail_byte))
        }
        AudioFormat::Ac3
        | AudioFormat::Mpeg1
        | AudioFormat::Mp3
        | AudioFormat::Mpeg2Multichannel
        | AudioFormat::AacLc
        | AudioFormat::Dts
        | AudioFormat::Atrac => {
            AudioFormatDetail::MaxBitrateKbps(u16::from(detail_byte) * BITRATE_UNIT_KBPS)
        }
        AudioFormat::Extended => {
            AudioFormatDetail::ExtensionTypeCode(EXTENSION_TYPE_CODE.extract(detail_byte))
        }
        _ => AudioFormatDetail::FormatDependent(detail_byte),
    };

    ShortAudioDescriptor {
        format,
        max_channels: CHANNELS_MINUS_ONE.extract(format_byte) + 1,
        sample_rates: SampleRates::from_bits_truncate(rates_byte),
        detail,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioDataBlock<'a> {
    bytes: &'a [u8],
}

impl<'a> AudioDataBlock<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self { Self { bytes } }

    /// Trailing bytes that do not fill a whole descriptor are ignored.
    pub fn descriptors(&self) -> impl Iterator<Item = ShortAudioDescriptor> + use<'a> {
        self.bytes
            .chunks_exact(SHORT_AUDIO_DESCRIPTOR_SIZE)
            .filter_map(|chunk| chunk.first_chunk::<SHORT_AUDIO_DESCRIPTOR_SIZE>())
            .map(parse_short_audio_descriptor)
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Edid`] is the entry point: a validated, zero-copy view over caller-owned bytes.
//!
//! [`Edid::parse`] is the only strict step. Once it succeeds every accessor decodes
//! lazily from the borrowed bytes on each call, never allocates on the heap, and
//! reports a malformed sub-structure as `None` instead of failing.

use super::{Chromaticity, DESCRIPTOR_COUNT, DetailedTiming, DisplayDescriptor,
            DisplayDescriptorContent, DisplayDescriptorTag, EDID_BLOCK_SIZE,
            EdidParseError, EstablishedTimings, ExtensionBlock, ExtensionIter,
            FeatureSupport, ManufactureDate, ManufacturerId, RangeLimits, RawEdidBlock,
            SUPPORTED_EDID_VERSION, ScreenSize, StandardTimings, VideoInput,
            checksum_sum_simd, parse_chromaticity_coords, parse_detailed_timing,
            parse_display_descriptor, parse_established_timings, parse_feature_support,
            parse_manufacture_date, parse_screen_size, parse_standard_timing,
            parse_video_input, validate_checksum_simd, validate_header_simd};
use crate::CtaExtensionBlock;

/// Borrowing view over a validated EDID.
///
/// The lifetime `'a` ties the view to the caller's buffer: the buffer cannot be mutated
/// or dropped while the view (or anything derived from it) is alive. The view is
/// `Copy`, and it is `Send + Sync` because it only holds shared references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edid<'a> {
    raw: &'a RawEdidBlock,
    /// Whole caller buffer, base block included, for the extension blocks.
    bytes: &'a [u8],
}

impl<'a> Edid<'a> {
    /// Validates the base block and returns a view over `data`.
    ///
    /// Checks run in this order and the first failure is returned: length, header,
    /// checksum, version. Extension blocks are not validated here.
    ///
    /// # Errors
    ///
    /// Returns an [`EdidParseError`] when any of the checks above fails.
    pub fn parse(data: &'a [u8]) -> Result<Self, EdidParseError> {
        let Some(block) = data.first_chunk::<EDID_BLOCK_SIZE>() else {
            tracing::debug!(message = "EDID rejected: buffer too small", len = data.len());
            return Err(EdidParseError::TooSmall { len: data.len() });
        };

        if !validate_header_simd(block) {
            tracing::debug!(message = "EDID rejected: invalid header", header = ?&block[..8]);
            return Err(EdidParseError::InvalidHeader);
        }

        if !validate_checksum_simd(block) {
            let sum = checksum_sum_simd(block);
            tracing::debug!(message = "EDID rejected: invalid checksum", sum);
            return Err(EdidParseError::InvalidChecksum { sum });
        }

        let raw = RawEdidBlock::from_bytes(block);
        if raw.version != SUPPORTED_EDID_VERSION {
            tracing::debug!(
                message = "EDID rejected: unsupported version",
                version = raw.version
            );
            return Err(EdidParseError::UnsupportedVersion {
                version: raw.version,
            });
        }

        Ok(Self { raw, bytes: data })
    }

    #[must_use]
    pub fn raw(&self) -> &'a RawEdidBlock { self.raw }

    /// The caller's buffer, including any extension blocks.
    #[must_use]
    pub fn bytes(&self) -> &'a [u8] { self.bytes }

    /// `(version, revision)`, e.g. `(1, 4)`.
    #[must_use]
    pub fn version(&self) -> (u8, u8) { (self.raw.version, self.raw.revision) }

    #[must_use]
    pub fn revision(&self) -> u8 { self.raw.revision }

    #[must_use]
    pub fn manufacturer_id(&self) -> Option<ManufacturerId> {
        self.raw.decoded_manufacturer_id()
    }

    /// Vendor name from the built-in PNP table.
    #[must_use]
    pub fn manufacturer_name(&self) -> Option<&'static str> {
        self.manufacturer_id()?.vendor_name()
    }

    #[must_use]
    pub fn product_code(&self) -> u16 { self.raw.product_code() }

    #[must_use]
    pub fn serial_number(&self) -> u32 { self.raw.serial_number() }

    #[must_use]
    pub fn manufacture_date(&self) -> ManufactureDate {
        parse_manufacture_date(self.raw.manufacture_week, self.raw.manufacture_year)
    }

    #[must_use]
    pub fn video_input(&self) -> VideoInput {
        parse_video_input(self.raw.video_input, self.raw.revision)
    }

    #[must_use]
    pub fn screen_size(&self) -> ScreenSize {
        parse_screen_size(
            self.raw.screen_width_cm,
            self.raw.screen_height_cm,
            self.raw.revision,
        )
    }

    /// `0.0` means the gamma is defined in an extension block.
    #[must_use]
    pub fn gamma(&self) -> f32 { self.raw.gamma() }

    #[must_use]
    pub fn feature_support(&self) -> FeatureSupport {
        parse_feature_support(
            self.raw.feature_support,
            self.raw.is_digital_input(),
            self.raw.revision,
        )
    }

    #[must_use]
    pub fn chromaticity(&self) -> Chromaticity {
        parse_chromaticity_coords(&self.raw.chromaticity)
    }

    #[must_use]
    pub fn established_timings(&self) -> EstablishedTimings {
        parse_established_timings(&self.raw.established_timings)
    }

    /// The used entries of the 8 standard timing slots, in slot order.
    #[must_use]
    pub fn standard_timings(&self) -> StandardTimings {
        self.raw
            .standard_timings
            .iter()
            .filter_map(parse_standard_timing)
            .collect()
    }

    /// One entry per descriptor slot. A slot holding a display descriptor is `None`.
    #[must_use]
    pub fn detailed_timings(&self) -> [Option<DetailedTiming>; DESCRIPTOR_COUNT] {
        self.raw.descriptors.each_ref().map(parse_detailed_timing)
    }

    /// The first slot that holds a timing. EDID requires it to be slot 0.
    #[must_use]
    pub fn preferred_timing(&self) -> Option<DetailedTiming> {
        self.raw.descriptors.iter().find_map(parse_detailed_timing)
    }

    /// Every slot that holds a display descriptor, in slot order.
    pub fn display_descriptors(&self) -> impl Iterator<Item = DisplayDescriptor<'a>> + use<'a> {
        self.raw.descriptors.iter().filter_map(parse_display_descriptor)
    }

    fn find_descriptor(&self, tag: DisplayDescriptorTag) -> Option<DisplayDescriptor<'a>> {
        self.display_descriptors()
            .find(|descriptor| descriptor.tag() == tag)
    }

    /// Text of the first product name descriptor (0xFC).
    #[must_use]
    pub fn product_name(&self) -> Option<&'a str> {
        self.find_descriptor(DisplayDescriptorTag::ProductName)?
            .text()
    }

    /// Text of the first product serial descriptor (0xFF).
    #[must_use]
    pub fn serial_string(&self) -> Option<&'a str> {
        self.find_descriptor(DisplayDescriptorTag::ProductSerial)?
            .text()
    }

    /// Text of the first alphanumeric data string descriptor (0xFE).
    #[must_use]
    pub fn data_string(&self) -> Option<&'a str> {
        self.find_descriptor(DisplayDescriptorTag::DataString)?
            .text()
    }

    #[must_use]
    pub fn range_limits(&self) -> Option<RangeLimits> {
        match self.find_descriptor(DisplayDescriptorTag::RangeLimits)?.content() {
            DisplayDescriptorContent::RangeLimits(limits) => Some(limits),
            _ => None,
        }
    }

    /// Value of byte 126. The buffer may hold fewer blocks than this.
    #[must_use]
    pub fn extension_count(&self) -> u8 { self.raw.extension_count }

    pub fn extensions(&self) -> ExtensionIter<'a> {
        let after_base_block = self.bytes.get(EDID_BLOCK_SIZE..).unwrap_or_default();
        ExtensionIter::new(after_base_block, self.raw.extension_count)
    }

    /// The first CTA-861 extension block, if there is one.
    #[must_use]
    pub fn cta_extension(&self) -> Option<CtaExtensionBlock<'a>> {
        self.extensions().find_map(|block| match block {
            ExtensionBlock::Cta(cta) => Some(cta),
            ExtensionBlock::Other { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorSupport, DigitalInput, DigitalInterface, DisplayColorType,
                DpmsSupport, StandardAspectRatio, StandardTiming, SyncSignal, TimingSupport,
                assert_eq2,
                test_fixtures::{CtaBlockBuilder, DTD_1920X1080_60, EdidBuilder,
                                descriptor_bytes, init_test_tracing, range_limits_payload,
                                text_descriptor}};
    use test_case::test_case;

    fn monitor_edid() -> Vec<u8> {
        EdidBuilder::new()
            .manufacturer(*b"DEL")
            .product_code(0xA0B1)
            .serial_number(0x3033_4C4A)
            .manufacture_date(12, 33)
            .version(1, 4)
            .video_input(0xA5)
            .screen_size(60, 34)
            .gamma(120)
            .feature_support(0x1A)
            .established_timings([0x21, 0x08, 0x00])
            .standard_timing(0, [0xD1, 0xC0])
            .standard_timing(1, [0x81, 0x80])
            .descriptor(0, DTD_1920X1080_60)
            .descriptor(1, text_descriptor(0xFF, b"SN0001"))
            .descriptor(2, descriptor_bytes(0xFD, 0, &range_limits_payload()))
            .descriptor(3, text_descriptor(0xFC, b"DELL U2720Q"))
            .build()
    }

    #[test]
    fn test_parse_and_read_every_accessor() {
        init_test_tracing();
        let bytes = monitor_edid();
        let edid = Edid::parse(&bytes).unwrap();

        assert_eq2!(edid.version(), (1, 4));
        assert_eq2!(edid.manufacturer_id().unwrap().as_str(), "DEL");
        assert_eq2!(edid.manufacturer_name(), Some("Dell Inc."));
        assert_eq2!(edid.product_code(), 0xA0B1);
        assert_eq2!(edid.serial_number(), 0x3033_4C4A);
        assert_eq2!(
            edid.manufacture_date(),
            ManufactureDate::Manufactured {
                week: Some(12),
                year: 2023
            }
        );
        assert_eq2!(
            edid.video_input(),
            VideoInput::Digital(DigitalInput {
                bit_depth: Some(8),
                interface: Some(DigitalInterface::DisplayPort),
                dfp_compatible: false
            })
        );
        assert_eq2!(
            edid.screen_size(),
            ScreenSize::Dimensions {
                width_cm: 60,
                height_cm: 34
            }
        );
        assert!((edid.gamma() - 2.2).abs() < 1e-6);

        let features = edid.feature_support();
        assert_eq2!(features.dpms, DpmsSupport::empty());
        assert!(matches!(features.color, ColorSupport::Encodings(_)));
        assert!(features.preferred_timing_is_native);

        assert_eq2!(edid.established_timings().modes().count(), 3);
        assert_eq2!(
            edid.standard_timings().as_slice(),
            &[
                StandardTiming {
                    h_active: 1920,
                    v_active: 1080,
                    refresh_hz: 60,
                    aspect_ratio: StandardAspectRatio::Ratio16x9
                },
                StandardTiming {
                    h_active: 1280,
                    v_active: 1024,
                    refresh_hz: 60,
                    aspect_ratio: StandardAspectRatio::Ratio5x4
                },
            ]
        );

        let timings = edid.detailed_timings();
        assert!(timings[0].is_some());
        assert!(timings[1..].iter().all(Option::is_none));
        let preferred = edid.preferred_timing().unwrap();
        assert_eq2!((preferred.h_active, preferred.v_active), (1920, 1080));
        assert!(matches!(preferred.sync, SyncSignal::DigitalSeparate { .. }));

        assert_eq2!(edid.display_descriptors().count(), 3);
        assert_eq2!(edid.product_name(), Some("DELL U2720Q"));
        assert_eq2!(edid.serial_string(), Some("SN0001"));
        assert_eq2!(edid.data_string(), None);

        let limits = edid.range_limits().unwrap();
        assert_eq2!((limits.min_v_rate_hz, limits.max_v_rate_hz), (48, 75));
        assert_eq2!(limits.timing_support, TimingSupport::DefaultGtf);

        assert_eq2!(edid.extension_count(), 0);
        assert_eq2!(edid.extensions().count(), 0);
        assert_eq2!(edid.cta_extension(), None);
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let bytes = monitor_edid();
        let edid = Edid::parse(&bytes).unwrap();
        assert_eq2!(edid.detailed_timings(), edid.detailed_timings());
        assert_eq2!(edid.product_name(), edid.product_name());
        assert_eq2!(edid.chromaticity(), edid.chromaticity());
        assert_eq2!(edid.standard_timings(), edid.standard_timings());
        assert_eq2!(edid.range_limits(), edid.range_limits());
    }

    #[test]
    fn test_error_order() {
        init_test_tracing();
        assert_eq2!(
            Edid::parse(&[0_u8; 127]),
            Err(EdidParseError::TooSmall { len: 127 })
        );

        // Bad header and bad checksum: header wins.
        let mut bytes = monitor_edid();
        bytes[0] = 0x01;
        bytes[50] = bytes[50].wrapping_add(1);
        assert_eq2!(Edid::parse(&bytes), Err(EdidParseError::InvalidHeader));

        // Bad checksum and bad version: checksum wins.
        let mut bytes = monitor_edid();
        bytes[18] = 2;
        assert_eq2!(
            Edid::parse(&bytes),
            Err(EdidParseError::InvalidChecksum { sum: 1 })
        );

        let bytes = EdidBuilder::new().version(2, 0).build();
        assert_eq2!(
            Edid::parse(&bytes),
            Err(EdidParseError::UnsupportedVersion { version: 2 })
        );
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(64)]
    #[test_case(126)]
    fn test_any_flipped_byte_fails_checksum(index: usize) {
        let mut bytes = monitor_edid();
        bytes[index] ^= 0x40;
        let result = Edid::parse(&bytes);
        assert!(matches!(
            result,
            Err(EdidParseError::InvalidHeader | EdidParseError::InvalidChecksum { .. })
        ));
    }

    #[test]
    fn test_parse_never_mutates_input() {
        let bytes = monitor_edid();
        let before = bytes.clone();
        let edid = Edid::parse(&bytes).unwrap();
        let _unused = (edid.product_name(), edid.detailed_timings(), edid.extensions().count());
        assert_eq2!(bytes, before);
    }

    #[test]
    fn test_mixed_slots_and_analog_input() {
        let bytes = EdidBuilder::new()
            .version(1, 3)
            .video_input(0x0E)
            .feature_support(0xEA)
            .descriptor(0, text_descriptor(0xFC, b"CRT"))
            .descriptor(2, DTD_1920X1080_60)
            .build();
        let edid = Edid::parse(&bytes).unwrap();

        assert!(!edid.video_input().is_digital());
        assert_eq2!(
            edid.feature_support().color,
            ColorSupport::ColorType(DisplayColorType::RgbColor)
        );
        assert_eq2!(edid.feature_support().dpms, DpmsSupport::all());
        let timings = edid.detailed_timings();
        assert_eq2!(timings.iter().filter(|it| it.is_some()).count(), 1);
        assert!(timings[2].is_some());
        assert_eq2!(edid.preferred_timing(), timings[2]);
        assert_eq2!(edid.product_name(), Some("CRT"));
    }

    #[test]
    fn test_extensions_and_cta() {
        let cta = CtaBlockBuilder::new().revision(3).build();
        let bytes = EdidBuilder::new().extension(cta).build();
        let edid = Edid::parse(&bytes).unwrap();

        assert_eq2!(edid.extension_count(), 1);
        assert_eq2!(edid.extensions().count(), 1);
        assert_eq2!(edid.cta_extension().unwrap().revision(), 3);
    }

    #[test]
    fn test_bad_extension_does_not_fail_base_parse() {
        let mut cta = CtaBlockBuilder::new().build();
        cta[100] ^= 0xFF;
        let bytes = EdidBuilder::new().extension(cta).build();
        let edid = Edid::parse(&bytes).unwrap();
        let extension = edid.extensions().next().unwrap();
        assert!(!extension.has_valid_checksum());
    }
}

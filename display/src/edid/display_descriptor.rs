// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! 18-byte descriptor slots that are not timings.
//!
//! ```text
//! 0-1  0x0000 (a nonzero pixel clock would make this a detailed timing)
//!  2   0x00 reserved
//!  3   tag
//!  4   0x00, except range limits (0xFD) where EDID 1.4 stores rate offsets
//! 5-17 13 payload bytes
//! ```

use super::{ColorPoints, CvtTimingCodes, DESCRIPTOR_PAYLOAD_SIZE, DESCRIPTOR_SIZE,
            EstablishedTimingsIII, RangeLimits, StandardTimings, parse_color_points,
            parse_cvt_timing_codes, parse_range_limits, parse_standard_timing_ids};

const TAG_PRODUCT_SERIAL: u8 = 0xFF;
const TAG_DATA_STRING: u8 = 0xFE;
const TAG_RANGE_LIMITS: u8 = 0xFD;
const TAG_PRODUCT_NAME: u8 = 0xFC;
const TAG_COLOR_POINT: u8 = 0xFB;
const TAG_STANDARD_TIMING_IDS: u8 = 0xFA;
const TAG_DCM_DATA: u8 = 0xF9;
const TAG_CVT_TIMING_CODES: u8 = 0xF8;
const TAG_ESTABLISHED_TIMINGS_III: u8 = 0xF7;
const TAG_DUMMY: u8 = 0x10;
const MANUFACTURER_SPECIFIC_MAX: u8 = 0x0F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayDescriptorTag {
    ProductSerial,
    DataString,
    RangeLimits,
    ProductName,
    ColorPoint,
    StandardTimingIds,
    DcmData,
    CvtTimingCodes,
    EstablishedTimingsIII,
    Dummy,
    /// 0x00 to 0x0F.
    ManufacturerSpecific(u8),
    Reserved(u8),
}

impl From<u8> for DisplayDescriptorTag {
    fn from(tag: u8) -> Self {
        match tag {
            TAG_PRODUCT_SERIAL => Self::ProductSerial,
            TAG_DATA_STRING => Self::DataString,
            TAG_RANGE_LIMITS => Self::RangeLimits,
            TAG_PRODUCT_NAME => Self::ProductName,
            TAG_COLOR_POINT => Self::ColorPoint,
            TAG_STANDARD_TIMING_IDS => Self::StandardTimingIds,
            TAG_DCM_DATA => Self::DcmData,
            TAG_CVT_TIMING_CODES => Self::CvtTimingCodes,
            TAG_ESTABLISHED_TIMINGS_III => Self::EstablishedTimingsIII,
            TAG_DUMMY => Self::Dummy,
            0..=MANUFACTURER_SPECIFIC_MAX => Self::ManufacturerSpecific(tag),
            _ => Self::Reserved(tag),
        }
    }
}

impl From<DisplayDescriptorTag> for u8 {
    fn from(tag: DisplayDescriptorTag) -> Self {
        match tag {
            DisplayDescriptorTag::ProductSerial => TAG_PRODUCT_SERIAL,
            DisplayDescriptorTag::DataString => TAG_DATA_STRING,
            DisplayDescriptorTag::RangeLimits => TAG_RANGE_LIMITS,
            DisplayDescriptorTag::ProductName => TAG_PRODUCT_NAME,
            DisplayDescriptorTag::ColorPoint => TAG_COLOR_POINT,
            DisplayDescriptorTag::StandardTimingIds => TAG_STANDARD_TIMING_IDS,
            DisplayDescriptorTag::DcmData => TAG_DCM_DATA,
            DisplayDescriptorTag::CvtTimingCodes => TAG_CVT_TIMING_CODES,
            DisplayDescriptorTag::EstablishedTimingsIII => TAG_ESTABLISHED_TIMINGS_III,
            DisplayDescriptorTag::Dummy => TAG_DUMMY,
            DisplayDescriptorTag::ManufacturerSpecific(tag)
            | DisplayDescriptorTag::Reserved(tag) => tag,
        }
    }
}

/// Borrowed view of a display descriptor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayDescriptor<'a> {
    tag: u8,
    rate_offsets: u8,
    payload: &'a [u8; DESCRIPTOR_PAYLOAD_SIZE],
}

/// Decoded payload of a [`DisplayDescriptor`].
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayDescriptorContent<'a> {
    /// String tags decode to `None` when the payload is blank or not valid UTF-8.
    ProductSerial(Option<&'a str>),
    DataString(Option<&'a str>),
    ProductName(Option<&'a str>),
    RangeLimits(RangeLimits),
    ColorPoints(ColorPoints),
    StandardTimings(StandardTimings),
    CvtTimingCodes(CvtTimingCodes),
    EstablishedTimingsIII(EstablishedTimingsIII<'a>),
    DcmData(&'a [u8; DESCRIPTOR_PAYLOAD_SIZE]),
    Dummy,
    ManufacturerSpecific {
        tag: u8,
        payload: &'a [u8; DESCRIPTOR_PAYLOAD_SIZE],
    },
    Reserved {
        tag: u8,
        payload: &'a [u8; DESCRIPTOR_PAYLOAD_SIZE],
    },
}

/// Reinterprets an 18-byte slot as a display descriptor. `None` when the slot holds a
/// timing (nonzero pixel clock) or a reserved byte is not zero.
#[must_use]
pub fn parse_display_descriptor(
    bytes: &[u8; DESCRIPTOR_SIZE],
) -> Option<DisplayDescriptor<'_>> {
    let [clock_lo, clock_hi, reserved, tag, rate_offsets, payload @ ..] = bytes;
    if *clock_lo != 0 || *clock_hi != 0 || *reserved != 0 {
        return None;
    }
    if *rate_offsets != 0 && *tag != TAG_RANGE_LIMITS {
        return None;
    }
    Some(DisplayDescriptor {
        tag: *tag,
        rate_offsets: *rate_offsets,
        payload,
    })
}

/// EDID strings are cut at the first `\n` and padded with spaces, not NUL terminated.
/// Returns the text with trailing spaces and NULs removed, or `None` when nothing is
/// left or the bytes are not UTF-8.
#[must_use]
pub fn extract_descriptor_string(payload: &[u8; DESCRIPTOR_PAYLOAD_SIZE]) -> Option<&str> {
    let line = payload
        .split(|byte| *byte == b'\n')
        .next()
        .unwrap_or_default();
    let end = line
        .iter()
        .rposition(|byte| !matches!(byte, b' ' | b'\0' | b'\r'))
        .map_or(0, |last| last + 1);
    let text = std::str::from_utf8(line.get(..end)?).ok()?;
    (!text.is_empty()).then_some(text)
}

impl<'a> DisplayDescriptor<'a> {
    #[must_use]
    pub fn tag(&self) -> DisplayDescriptorTag { DisplayDescriptorTag::from(self.tag) }

    #[must_use]
    pub fn raw_tag(&self) -> u8 { self.tag }

    /// Byte 4. Nonzero only for range limits in EDID 1.4.
    #[must_use]
    pub fn rate_offsets(&self) -> u8 { self.rate_offsets }

    #[must_use]
    pub fn payload(&self) -> &'a [u8; DESCRIPTOR_PAYLOAD_SIZE] { self.payload }

    /// Text of a product name, serial or data string descriptor.
    #[must_use]
    pub fn text(&self) -> Option<&'a str> {
        match self.tag() {
            DisplayDescriptorTag::ProductName
            | DisplayDescriptorTag::ProductSerial
            | DisplayDescriptorTag::DataString => extract_descriptor_string(self.payload),
            _ => None,
        }
    }

    #[must_use]
    pub fn content(&self) -> DisplayDescriptorContent<'a> {
        let payload = self.payload;
        match self.tag() {
            DisplayDescriptorTag::ProductSerial => {
                DisplayDescriptorContent::ProductSerial(extract_descriptor_string(payload))
            }
            DisplayDescriptorTag::DataString => {
                DisplayDescriptorContent::DataString(extract_descriptor_string(payload))
            }
            DisplayDescriptorTag::ProductName => {
                DisplayDescriptorContent::ProductName(extract_descriptor_string(payload))
            }
            DisplayDescriptorTag::RangeLimits => DisplayDescriptorContent::RangeLimits(
                parse_range_limits(self.rate_offsets, payload),
            ),
            DisplayDescriptorTag::ColorPoint => {
                DisplayDescriptorContent::ColorPoints(parse_color_points(payload))
            }
            DisplayDescriptorTag::StandardTimingIds => {
                DisplayDescriptorContent::StandardTimings(parse_standard_timing_ids(payload))
            }
            DisplayDescriptorTag::CvtTimingCodes => {
                DisplayDescriptorContent::CvtTimingCodes(parse_cvt_timing_codes(payload))
            }
            DisplayDescriptorTag::EstablishedTimingsIII => {
                let [_revision, bits @ .., _, _, _, _, _, _] = payload;
                DisplayDescriptorContent::EstablishedTimingsIII(EstablishedTimingsIII::new(
                    bits,
                ))
            }
            DisplayDescriptorTag::DcmData => DisplayDescriptorContent::DcmData(payload),
            DisplayDescriptorTag::Dummy => DisplayDescriptorContent::Dummy,
            DisplayDescriptorTag::ManufacturerSpecific(tag) => {
                DisplayDescriptorContent::ManufacturerSpecific { tag, payload }
            }
            DisplayDescriptorTag::Reserved(tag) => {
                DisplayDescriptorContent::Reserved { tag, payload }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LegacyMode, TimingSupport, assert_eq2,
                test_fixtures::{DTD_1920X1080_60, descriptor_bytes, text_descriptor}};
    use test_case::test_case;

    #[test]
    fn test_product_name_trailing_space_trimmed() {
        let bytes = text_descriptor(0xFC, b"Test Monitor ");
        let descriptor = parse_display_descriptor(&bytes).unwrap();
        assert_eq2!(descriptor.tag(), DisplayDescriptorTag::ProductName);
        assert_eq2!(extract_descriptor_string(descriptor.payload()), Some("Test Monitor"));
        assert_eq2!(
            descriptor.content(),
            DisplayDescriptorContent::ProductName(Some("Test Monitor"))
        );
    }

    #[test_case(b"DELL U2720Q\n ", Some("DELL U2720Q"))]
    #[test_case(b"ABC\0\0\0\0\0\0\0\0\0\0", Some("ABC"))]
    #[test_case(b"\n            ", None)]
    #[test_case(b"             ", None)]
    #[test_case(b"1234567890ABC", Some("1234567890ABC"))]
    #[test_case(b"A B  \n garbag", Some("A B"))]
    fn test_extract_descriptor_string(payload: &[u8; 13], expected: Option<&str>) {
        assert_eq2!(extract_descriptor_string(payload), expected);
    }

    #[test]
    fn test_non_utf8_string_is_absent() {
        let mut payload = [0x20_u8; 13];
        payload[..3].copy_from_slice(&[0xFF, 0xFE, b'\n']);
        assert_eq2!(extract_descriptor_string(&payload), None);
    }

    #[test]
    fn test_timing_slot_is_not_a_descriptor() {
        assert_eq2!(parse_display_descriptor(&DTD_1920X1080_60), None);
    }

    #[test]
    fn test_reserved_bytes_must_be_zero() {
        let mut bytes = text_descriptor(0xFF, b"SN0001");
        bytes[2] = 0x01;
        assert_eq2!(parse_display_descriptor(&bytes), None);

        let mut bytes = text_descriptor(0xFF, b"SN0001");
        bytes[4] = 0x01;
        assert_eq2!(parse_display_descriptor(&bytes), None);
    }

    #[test_case(0xFC, 0x01, false)]
    #[test_case(0xFE, 0x02, false)]
    #[test_case(0xFB, 0x0A, false)]
    #[test_case(0xF7, 0x80, false)]
    #[test_case(0x10, 0x01, false)]
    #[test_case(0x05, 0xFF, false)]
    #[test_case(0xFD, 0x0A, true)]
    #[test_case(0xFC, 0x00, true)]
    fn test_byte4_is_only_free_for_range_limits(tag: u8, byte4: u8, accepted: bool) {
        let bytes = descriptor_bytes(tag, byte4, &[0x20; 13]);
        assert_eq2!(parse_display_descriptor(&bytes).is_some(), accepted);
    }

    #[test]
    fn test_range_limits_may_carry_rate_offsets() {
        let mut payload = [0_u8; 13];
        payload[..6].copy_from_slice(&[40, 100, 30, 200, 60, 0x01]);
        let bytes = descriptor_bytes(0xFD, 0b0010, &payload);
        let descriptor = parse_display_descriptor(&bytes).unwrap();
        assert_eq2!(descriptor.rate_offsets(), 0b0010);
        let DisplayDescriptorContent::RangeLimits(limits) = descriptor.content() else {
            panic!("expected range limits");
        };
        assert_eq2!(limits.max_v_rate_hz, 355);
        assert_eq2!(limits.timing_support, TimingSupport::RangeLimitsOnly);
    }

    #[test_case(0x00, DisplayDescriptorTag::ManufacturerSpecific(0x00))]
    #[test_case(0x0F, DisplayDescriptorTag::ManufacturerSpecific(0x0F))]
    #[test_case(0x10, DisplayDescriptorTag::Dummy)]
    #[test_case(0x11, DisplayDescriptorTag::Reserved(0x11))]
    #[test_case(0xF7, DisplayDescriptorTag::EstablishedTimingsIII)]
    #[test_case(0xFE, DisplayDescriptorTag::DataString)]
    fn test_tag_round_trip(raw: u8, tag: DisplayDescriptorTag) {
        assert_eq2!(DisplayDescriptorTag::from(raw), tag);
        assert_eq2!(u8::from(tag), raw);
    }

    #[test]
    fn test_established_timings_iii_content() {
        let mut payload = [0_u8; 13];
        payload[0] = 0x0A;
        payload[1] = 0x10;
        let bytes = descriptor_bytes(0xF7, 0, &payload);
        let descriptor = parse_display_descriptor(&bytes).unwrap();
        let DisplayDescriptorContent::EstablishedTimingsIII(timings) = descriptor.content()
        else {
            panic!("expected established timings III");
        };
        let modes: Vec<_> = timings.modes().collect();
        assert_eq2!(modes.len(), 1);
        assert_eq2!(
            modes[0],
            LegacyMode {
                h_active: 640,
                v_active: 480,
                refresh_hz: 85,
                interlaced: false,
                reduced_blanking: false
            }
        );
    }

    #[test]
    fn test_text_only_for_string_tags() {
        let bytes = descriptor_bytes(0x10, 0, &[0x20; 13]);
        let descriptor = parse_display_descriptor(&bytes).unwrap();
        assert_eq2!(descriptor.text(), None);
        assert_eq2!(descriptor.content(), DisplayDescriptorContent::Dummy);
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Vendor-specific data blocks are keyed by the IEEE OUI in their first three payload
//! bytes, stored little-endian.

use crate::read_u24_le;

pub const OUI_SIZE: usize = 3;
/// HDMI Licensing, LLC. Carries the HDMI 1.x VSDB.
pub const HDMI_LLC_OUI: u32 = 0x00_0C03;
/// HDMI Forum. Carries the HDMI 2.x VSDB.
pub const HDMI_FORUM_OUI: u32 = 0xC4_5DD8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorSpecificBlock<'a> {
    pub oui: u32,
    /// Bytes after the OUI.
    pub body: &'a [u8],
}

impl VendorSpecificBlock<'_> {
    #[must_use]
    pub fn is_hdmi_llc(&self) -> bool { self.oui == HDMI_LLC_OUI }

    #[must_use]
    pub fn is_hdmi_forum(&self) -> bool { self.oui == HDMI_FORUM_OUI }
}

/// `None` when the payload is too short to hold an OUI.
#[must_use]
pub fn parse_vendor_specific(payload: &[u8]) -> Option<VendorSpecificBlock<'_>> {
    let oui = read_u24_le(payload, 0)?;
    let body = payload.get(OUI_SIZE..)?;
    Some(VendorSpecificBlock { oui, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(&[0x03, 0x0C, 0x00, 0x10, 0x00], HDMI_LLC_OUI, 2)]
    #[test_case(&[0xD8, 0x5D, 0xC4, 0x01], HDMI_FORUM_OUI, 1)]
    #[test_case(&[0x1A, 0x00, 0x00], 0x00_001A, 0)]
    fn test_oui_is_little_endian(payload: &[u8], oui: u32, body_len: usize) {
        let block = parse_vendor_specific(payload).unwrap();
        assert_eq2!(block.oui, oui);
        assert_eq2!(block.body.len(), body_len);
    }

    #[test]
    fn test_hdmi_predicates() {
        let llc = parse_vendor_specific(&[0x03, 0x0C, 0x00]).unwrap();
        assert!(llc.is_hdmi_llc());
        assert!(!llc.is_hdmi_forum());
    }

    #[test]
    fn test_short_payload() {
        assert_eq2!(parse_vendor_specific(&[0x03, 0x0C]), None);
    }
}

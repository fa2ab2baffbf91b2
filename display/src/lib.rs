// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words edid dtd svd vic vsdb ycbcr colorimetry pnp gtf cvt

//! # r3bl_display
//!
//! Zero-copy parsing of the binary blocks a display hands to the host to describe
//! itself, plus the VESA formulas used to synthesize a timing that the display did not
//! list.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//! - [What is in the box](#what-is-in-the-box)
//! - [Two error philosophies](#two-error-philosophies)
//! - [Borrowing views and the lifetime contract](#borrowing-views-and-the-lifetime-contract)
//! - [Quick start](#quick-start)
//! - [Synthesizing timings](#synthesizing-timings)
//! <!-- /TOC -->
//!
//! # What is in the box
//!
//! ```text
//! caller-owned bytes (DRM connector blob, sysfs `edid` file, ...)
//!    │
//! ┌──▼──────────────────────────────────────────────┐
//! │ Edid::parse()               edid/parsed_edid.rs │  strict gate: size, header,
//! │  • validate_header_simd()                       │  checksum, version
//! │  • validate_checksum_simd()                     │
//! └──┬──────────────────────────────────────────────┘
//!    │ borrowing view, lazily decoded accessors
//! ┌──▼──────────────────────────┐  ┌──────────────────────────────────────┐
//! │ base block sub-decoders     │  │ Edid::extensions()                   │
//! │  • manufacturer id + PNP    │  │  • CtaExtensionBlock                 │
//! │  • chromaticity             │  │  • DataBlockIter (tag + length)      │
//! │  • established / standard   │  │  • video / audio / speaker / VSDB /  │
//! │  • detailed timings         │  │    HDR / colorimetry / 4:2:0 ...     │
//! │  • display descriptors      │  └──────────────────────────────────────┘
//! └─────────────────────────────┘
//!
//! compute_cvt() / compute_gtf()  ← pure functions, no dependency on the parser
//! ```
//!
//! # Two error philosophies
//!
//! 1. [`Edid::parse`] is strict. A buffer that is too small, has a bad header, a bad
//!    checksum, or an unsupported version produces an [`EdidParseError`] and nothing
//!    else.
//! 2. Everything below that gate is tolerant. An empty descriptor slot, an unused
//!    standard timing, a zero-length or truncated CTA data block, or a sub-block that is
//!    too short all decode to `None` (or end an iterator) and the rest of the structure
//!    stays usable. EDIDs in the wild are frequently a little broken, and a broken
//!    vendor block must not hide a perfectly good preferred timing.
//!
//! # Borrowing views and the lifetime contract
//!
//! [`Edid`], [`RawEdidBlock`], [`CtaExtensionBlock`], [`DataBlock`] and
//! [`DisplayDescriptor`] are views over the caller's buffer. They never copy it and
//! never allocate. The borrow checker enforces the aliasing rule: the buffer cannot be
//! mutated or dropped while a view derived from it is alive. Nothing is mutated after
//! construction, so a view can be shared across threads freely.
//!
//! # Quick start
//!
//! ```no_run
//! use r3bl_display::{Edid, ExtensionBlock};
//!
//! let bytes = std::fs::read("/sys/class/drm/card0-HDMI-A-1/edid").unwrap();
//! let edid = Edid::parse(&bytes).unwrap();
//!
//! println!("{:?} {:?}", edid.manufacturer_name(), edid.product_name());
//! if let Some(timing) = edid.preferred_timing() {
//!     println!("{}x{} @ {:.2} Hz", timing.h_active, timing.v_active, timing.refresh_rate_hz());
//! }
//! for extension in edid.extensions() {
//!     if let ExtensionBlock::Cta(cta) = extension {
//!         for block in cta.data_blocks() {
//!             println!("{:?}", block.decode());
//!         }
//!     }
//! }
//! ```
//!
//! # Synthesizing timings
//!
//! ```
//! use r3bl_display::{CvtOptions, ReducedBlanking, compute_cvt};
//!
//! let timing = compute_cvt(CvtOptions {
//!     h_pixels: 1920,
//!     v_lines: 1080,
//!     refresh_rate_hz: 60.0,
//!     reduced_blanking: ReducedBlanking::V1,
//!     ..Default::default()
//! });
//! assert_eq!(timing.h_total(), 2080);
//! assert_eq!(timing.v_total(), 1111);
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod common;
pub mod cta;
pub mod edid;
pub mod timing_formula;

#[cfg(test)]
pub mod test_fixtures;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use common::*;
pub use cta::*;
pub use edid::*;
pub use timing_formula::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 128-byte EDID base block: layout, field decoders, validation, and the
//! [`Edid`] facade that ties them together.

// Attach.
pub mod chromaticity;
pub mod descriptor_extras;
pub mod detailed_timing;
pub mod display_descriptor;
pub mod display_params;
pub mod edid_constants;
pub mod error;
pub mod established_timings;
pub mod extension_block;
pub mod feature_support;
pub mod manufacturer_id;
pub mod parsed_edid;
pub mod pnp_ids;
pub mod range_limits;
pub mod raw_edid_block;
pub mod standard_timing;
pub mod validation;
pub mod video_input;

// Re-export.
pub use chromaticity::*;
pub use descriptor_extras::*;
pub use detailed_timing::*;
pub use display_descriptor::*;
pub use display_params::*;
pub use edid_constants::*;
pub use error::*;
pub use established_timings::*;
pub use extension_block::*;
pub use feature_support::*;
pub use manufacturer_id::*;
pub use parsed_edid::*;
pub use pnp_ids::*;
pub use range_limits::*;
pub use raw_edid_block::*;
pub use standard_timing::*;
pub use validation::*;
pub use video_input::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod audio_data_block;
pub mod colorimetry;
pub mod cta_extension_block;
pub mod data_block;
pub mod decoded_data_block;
pub mod hdmi_forum_vsdb;
pub mod hdmi_vsdb;
pub mod hdr_static_metadata;
pub mod speaker_allocation;
pub mod vendor_specific;
pub mod vic_table;
pub mod video_capability;
pub mod video_data_block;
pub mod ycbcr420;

// Re-export.
pub use audio_data_block::*;
pub use colorimetry::*;
pub use cta_extension_block::*;
pub use data_block::*;
pub use decoded_data_block::*;
pub use hdmi_forum_vsdb::*;
pub use hdmi_vsdb::*;
pub use hdr_static_metadata::*;
pub use speaker_allocation::*;
pub use vendor_specific::*;
pub use vic_table::*;
pub use video_capability::*;
pub use video_data_block::*;
pub use ycbcr420::*;

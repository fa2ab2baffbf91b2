// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod cvt;
pub mod generated_timing;
pub mod gtf;

// Re-export.
pub use cvt::*;
pub use generated_timing::*;
pub use gtf::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod bit_field;
pub mod decl_macros;

// Re-export.
pub use bit_field::*;

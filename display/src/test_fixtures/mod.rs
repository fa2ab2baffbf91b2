// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod cta_fixtures;
pub mod edid_fixtures;

// Re-export.
pub use cta_fixtures::*;
pub use edid_fixtures::*;

/// Routes `tracing` output through the test harness so it only shows up for failing
/// tests. Safe to call from every test; only the first call installs the subscriber.
pub fn init_test_tracing() {
    let _unused = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

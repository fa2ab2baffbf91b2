// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The value produced by [`crate::compute_cvt`] and [`crate::compute_gtf`].

use serde::{Deserialize, Serialize};

/// A synthesized timing. Horizontal values are pixels. Vertical porches and sync are
/// lines per field, `v_active` is lines per frame. Borders are per side and sit
/// between the active area and the blanking.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneratedTiming {
    pub pixel_clock_mhz: f64,

    pub h_active: u32,
    pub h_border: u32,
    pub h_front_porch: u32,
    pub h_sync: u32,
    pub h_back_porch: u32,

    pub v_active: u32,
    pub v_border: u32,
    pub v_front_porch: u32,
    pub v_sync: u32,
    pub v_back_porch: u32,

    pub interlaced: bool,
    pub hsync_positive: bool,
    pub vsync_positive: bool,

    /// Achieved line rate.
    pub h_freq_khz: f64,
    /// Achieved field rate. Equal to the frame rate unless interlaced.
    pub field_rate_hz: f64,
    /// Achieved frame rate.
    pub v_freq_hz: f64,
}

impl GeneratedTiming {
    #[must_use]
    pub fn h_blank(&self) -> u32 { self.h_front_porch + self.h_sync + self.h_back_porch }

    #[must_use]
    pub fn h_total(&self) -> u32 { self.h_active + 2 * self.h_border + self.h_blank() }

    /// Blank lines per field.
    #[must_use]
    pub fn v_blank(&self) -> u32 { self.v_front_porch + self.v_sync + self.v_back_porch }

    /// Lines per frame. An interlaced frame carries two blanking intervals and the
    /// extra line made of the two half lines.
    #[must_use]
    pub fn v_total(&self) -> u32 {
        let active = self.v_active + 2 * self.v_border;
        if self.interlaced {
            active + 2 * self.v_blank() + 1
        } else {
            active + self.v_blank()
        }
    }
}

/// Converts a formula result that is already a whole number of pixels or lines.
/// Negative and NaN results (from absurd inputs) clamp to 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_count(value: f64) -> u32 { value.max(0.0) as u32 }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_totals() {
        let timing = GeneratedTiming {
            h_active: 1920,
            h_front_porch: 48,
            h_sync: 32,
            h_back_porch: 80,
            v_active: 1080,
            v_front_porch: 3,
            v_sync: 5,
            v_back_porch: 23,
            ..Default::default()
        };
        assert_eq2!(timing.h_blank(), 160);
        assert_eq2!(timing.h_total(), 2080);
        assert_eq2!(timing.v_blank(), 31);
        assert_eq2!(timing.v_total(), 1111);
    }

    #[test]
    fn test_interlaced_total() {
        let timing = GeneratedTiming {
            v_active: 1080,
            v_front_porch: 3,
            v_sync: 5,
            v_back_porch: 15,
            interlaced: true,
            ..Default::default()
        };
        assert_eq2!(timing.v_total(), 1080 + 2 * 23 + 1);
    }

    #[test]
    fn test_to_count_clamps() {
        assert_eq2!(to_count(656.0), 656);
        assert_eq2!(to_count(-3.0), 0);
        assert_eq2!(to_count(f64::NAN), 0);
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! VESA Coordinated Video Timings, following the CVT 1.2 / 2.0 spreadsheet.
//!
//! ```text
//!                 standard (CRT)         RB v1      RB v2      RB v3
//! cell granularity      8                  8          1          1
//! h blank        duty cycle model         160         80     80 + extra
//! h sync          8% of h total            32         32         32
//! v front porch         3                   3          1     1 (or rest)
//! v sync        by aspect ratio      by aspect ratio   8          8
//! min v blank    550 us sync + bp        460 us     460 us   >= 460 us
//! clock step         0.25 MHz           0.25 MHz   0.001 MHz  0.001 MHz (up)
//! ```

use super::{GeneratedTiming, generated_timing::to_count};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

const CELL_GRAN: f64 = 8.0;
const RB_CELL_GRAN: f64 = 1.0;
const MARGIN_PERCENT: f64 = 1.8;
const MIN_V_PORCH: f64 = 3.0;
const MIN_V_BPORCH: f64 = 6.0;
const MIN_VSYNC_BP_US: f64 = 550.0;
const H_SYNC_PERCENT: f64 = 8.0;
const MIN_DUTY_CYCLE_PERCENT: f64 = 20.0;
/// `C' = (C - J) * K / 256 + J` with the VESA defaults C = 40, J = 20, K = 128.
const C_PRIME: f64 = 30.0;
/// `M' = K / 256 * M` with M = 600.
const M_PRIME: f64 = 300.0;

const RB_MIN_V_BLANK_US: f64 = 460.0;
const RB_V1_H_BLANK: f64 = 160.0;
const RB_V1_H_SYNC: f64 = 32.0;
const RB_V1_V_FPORCH: f64 = 3.0;
const RB_V2_H_BLANK: f64 = 80.0;
const RB_V2_H_FPORCH: f64 = 8.0;
const RB_V2_H_SYNC: f64 = 32.0;
const RB_V2_V_FPORCH: f64 = 1.0;
const RB_V2_V_SYNC: f64 = 8.0;
const RB_V3_MAX_ADDITIONAL_H_BLANK: u32 = 120;
const RB_V3_H_BLANK_STEP: u32 = 8;

const CLOCK_STEPS_PER_MHZ: f64 = 4.0;
const RB_V2_CLOCK_STEPS_PER_MHZ: f64 = 1000.0;
const VIDEO_OPTIMIZED_FACTOR: f64 = 1000.0 / 1001.0;
/// Keeps clock values that are exact in decimal from landing one step low (or high)
/// because of binary rounding.
const CLOCK_EPSILON_STEPS: f64 = 1e-6;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Serialize, Deserialize,
)]
pub enum ReducedBlanking {
    /// CRT style blanking, from the duty cycle model.
    #[default]
    None,
    V1,
    V2,
    V3,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CvtOptions {
    pub h_pixels: u32,
    pub v_lines: u32,
    /// Frame rate. Interlaced timings run their field rate at twice this.
    pub refresh_rate_hz: f64,
    pub reduced_blanking: ReducedBlanking,
    pub interlaced: bool,
    /// Adds 1.8% borders on every side.
    pub margins: bool,
    /// RB v2 and v3 only: scale the clock by 1000/1001 (59.94 Hz instead of 60 Hz).
    pub video_optimized: bool,
    /// RB v3 only: extra horizontal blanking on top of 80 pixels. Rounded down to a
    /// multiple of 8 and capped at 120.
    pub rb3_additional_h_blank: u32,
    /// RB v3 only: minimum vertical blanking time. Values below 460 us are raised to
    /// 460 us.
    pub rb3_min_v_blank_us: f64,
    /// RB v3 only: keep the back porch at its minimum and move the remaining blank
    /// lines to the front porch.
    pub rb3_early_vsync: bool,
}

impl Default for CvtOptions {
    fn default() -> Self {
        Self {
            h_pixels: 640,
            v_lines: 480,
            refresh_rate_hz: 60.0,
            reduced_blanking: ReducedBlanking::None,
            interlaced: false,
            margins: false,
            video_optimized: false,
            rb3_additional_h_blank: 0,
            rb3_min_v_blank_us: RB_MIN_V_BLANK_US,
            rb3_early_vsync: false,
        }
    }
}

/// Vsync width encodes the aspect ratio for standard and RB v1 timings.
fn vsync_for_aspect_ratio(h_pixels: u32, v_lines: u32) -> f64 {
    let (h, v) = (u64::from(h_pixels), u64::from(v_lines));
    if h * 3 == v * 4 {
        4.0
    } else if h * 9 == v * 16 {
        5.0
    } else if h * 10 == v * 16 {
        6.0
    } else if h * 4 == v * 5 || h * 9 == v * 15 {
        7.0
    } else {
        10.0
    }
}

fn quantize_clock(raw_mhz: f64, steps_per_mhz: f64, round_up: bool) -> f64 {
    let steps = raw_mhz * steps_per_mhz;
    let steps = if round_up {
        (steps - CLOCK_EPSILON_STEPS).ceil()
    } else {
        (steps + CLOCK_EPSILON_STEPS).floor()
    };
    steps / steps_per_mhz
}

/// Horizontal values, in pixels, before they are written into the result.
struct HorizontalBlank {
    front_porch: f64,
    sync: f64,
    back_porch: f64,
}

impl HorizontalBlank {
    fn total(&self) -> f64 { self.front_porch + self.sync + self.back_porch }
}

/// Computes a CVT timing. There are no error conditions: zero or absurd inputs give a
/// meaningless timing rather than a panic.
#[must_use]
pub fn compute_cvt(options: CvtOptions) -> GeneratedTiming {
    let reduced = options.reduced_blanking;
    let is_rb_v2_or_v3 = matches!(reduced, ReducedBlanking::V2 | ReducedBlanking::V3);
    let cell_gran = if is_rb_v2_or_v3 { RB_CELL_GRAN } else { CELL_GRAN };

    let field_rate_rqd = if options.interlaced {
        options.refresh_rate_hz * 2.0
    } else {
        options.refresh_rate_hz
    };
    let h_pixels_rnd = (f64::from(options.h_pixels) / cell_gran).floor() * cell_gran;
    let h_margin = if options.margins {
        (h_pixels_rnd * MARGIN_PERCENT / 100.0 / cell_gran).floor() * cell_gran
    } else {
        0.0
    };
    let total_active_pixels = h_pixels_rnd + 2.0 * h_margin;

    let v_lines_rnd = if options.interlaced {
        (f64::from(options.v_lines) / 2.0).floor()
    } else {
        f64::from(options.v_lines)
    };
    let v_margin = if options.margins {
        (v_lines_rnd * MARGIN_PERCENT / 100.0).floor()
    } else {
        0.0
    };
    let interlace = if options.interlaced { 0.5 } else { 0.0 };

    let v_sync = if is_rb_v2_or_v3 {
        RB_V2_V_SYNC
    } else {
        vsync_for_aspect_ratio(to_count(h_pixels_rnd), options.v_lines)
    };

    let (h_blank, v_front_porch, v_back_porch, pixel_clock_mhz) = match reduced {
        ReducedBlanking::None => {
            let h_period_est = ((1.0 / field_rate_rqd) - MIN_VSYNC_BP_US / 1_000_000.0)
                / (v_lines_rnd + 2.0 * v_margin + MIN_V_PORCH + interlace)
                * 1_000_000.0;
            let v_sync_bp =
                ((MIN_VSYNC_BP_US / h_period_est).floor() + 1.0).max(v_sync + MIN_V_BPORCH);

            let ideal_duty_cycle =
                (C_PRIME - M_PRIME * h_period_est / 1000.0).max(MIN_DUTY_CYCLE_PERCENT);
            let blank_gran = 2.0 * cell_gran;
            let h_blank_total = (total_active_pixels * ideal_duty_cycle
                / (100.0 - ideal_duty_cycle)
                / blank_gran)
                .floor()
                * blank_gran;
            let total_pixels = total_active_pixels + h_blank_total;
            let h_sync =
                (H_SYNC_PERCENT / 100.0 * total_pixels / cell_gran).floor() * cell_gran;
            let h_back_porch = h_blank_total / 2.0;

            let pixel_clock =
                quantize_clock(total_pixels / h_period_est, CLOCK_STEPS_PER_MHZ, false);
            (
                HorizontalBlank {
                    front_porch: h_blank_total - h_back_porch - h_sync,
                    sync: h_sync,
                    back_porch: h_back_porch,
                },
                MIN_V_PORCH,
                v_sync_bp - v_sync,
                pixel_clock,
            )
        }
        ReducedBlanking::V1 | ReducedBlanking::V2 | ReducedBlanking::V3 => {
            let min_v_blank_us = match reduced {
                ReducedBlanking::V3 => options.rb3_min_v_blank_us.max(RB_MIN_V_BLANK_US),
                _ => RB_MIN_V_BLANK_US,
            };
            let rb_v_front_porch = if is_rb_v2_or_v3 { RB_V2_V_FPORCH } else { RB_V1_V_FPORCH };

            let h_period_est = (1_000_000.0 / field_rate_rqd - min_v_blank_us)
                / (v_lines_rnd + 2.0 * v_margin);
            let vbi_lines = (min_v_blank_us / h_period_est).floor() + 1.0;
            let rb_min_vbi = rb_v_front_porch + v_sync + MIN_V_BPORCH;
            let act_vbi_lines = vbi_lines.max(rb_min_vbi);

            let h_blank = match reduced {
                ReducedBlanking::V1 => {
                    let back_porch = RB_V1_H_BLANK / 2.0;
                    HorizontalBlank {
                        front_porch: RB_V1_H_BLANK - back_porch - RB_V1_H_SYNC,
                        sync: RB_V1_H_SYNC,
                        back_porch,
                    }
                }
                ReducedBlanking::V2 => HorizontalBlank {
                    front_porch: RB_V2_H_FPORCH,
                    sync: RB_V2_H_SYNC,
                    back_porch: RB_V2_H_BLANK - RB_V2_H_FPORCH - RB_V2_H_SYNC,
                },
                _ => {
                    let additional = options
                        .rb3_additional_h_blank
                        .min(RB_V3_MAX_ADDITIONAL_H_BLANK)
                        / RB_V3_H_BLANK_STEP
                        * RB_V3_H_BLANK_STEP;
                    HorizontalBlank {
                        front_porch: RB_V2_H_FPORCH,
                        sync: RB_V2_H_SYNC,
                        back_porch: RB_V2_H_BLANK - RB_V2_H_FPORCH - RB_V2_H_SYNC
                            + f64::from(additional),
                    }
                }
            };

            let (v_front_porch, v_back_porch) =
                if reduced == ReducedBlanking::V3 && options.rb3_early_vsync {
                    (act_vbi_lines - v_sync - MIN_V_BPORCH, MIN_V_BPORCH)
                } else {
                    (rb_v_front_porch, act_vbi_lines - rb_v_front_porch - v_sync)
                };

            let total_v_lines = act_vbi_lines + v_lines_rnd + 2.0 * v_margin + interlace;
            let total_pixels = h_blank.total() + total_active_pixels;
            // Multiply before dividing so integral products stay exact.
            let mut raw_clock_mhz =
                field_rate_rqd * total_v_lines * total_pixels / 1_000_000.0;
            if is_rb_v2_or_v3 && options.video_optimized {
                raw_clock_mhz *= VIDEO_OPTIMIZED_FACTOR;
            }
            let pixel_clock = if is_rb_v2_or_v3 {
                quantize_clock(
                    raw_clock_mhz,
                    RB_V2_CLOCK_STEPS_PER_MHZ,
                    reduced == ReducedBlanking::V3,
                )
            } else {
                quantize_clock(raw_clock_mhz, CLOCK_STEPS_PER_MHZ, false)
            };

            (h_blank, v_front_porch, v_back_porch, pixel_clock)
        }
    };

    let total_pixels = total_active_pixels + h_blank.total();
    let total_v_lines =
        v_lines_rnd + 2.0 * v_margin + v_front_porch + v_sync + v_back_porch + interlace;
    let h_freq_khz = pixel_clock_mhz * 1000.0 / total_pixels;
    let field_rate_hz = h_freq_khz * 1000.0 / total_v_lines;
    let v_freq_hz = if options.interlaced {
        field_rate_hz / 2.0
    } else {
        field_rate_hz
    };

    let is_reduced = reduced != ReducedBlanking::None;
    GeneratedTiming {
        pixel_clock_mhz,
        h_active: to_count(h_pixels_rnd),
        h_border: to_count(h_margin),
        h_front_porch: to_count(h_blank.front_porch),
        h_sync: to_count(h_blank.sync),
        h_back_porch: to_count(h_blank.back_porch),
        v_active: if options.interlaced {
            to_count(v_lines_rnd) * 2
        } else {
            to_count(v_lines_rnd)
        },
        v_border: to_count(v_margin),
        v_front_porch: to_count(v_front_porch),
        v_sync: to_count(v_sync),
        v_back_porch: to_count(v_back_porch),
        interlaced: options.interlaced,
        hsync_positive: is_reduced,
        vsync_positive: !is_reduced,
        h_freq_khz,
        field_rate_hz,
        v_freq_hz,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq, assert_eq2};
    use test_case::test_case;

    fn options(h_pixels: u32, v_lines: u32, refresh_rate_hz: f64) -> CvtOptions {
        CvtOptions {
            h_pixels,
            v_lines,
            refresh_rate_hz,
            ..Default::default()
        }
    }

    #[test]
    fn test_1920x1080_60_standard() {
        let timing = compute_cvt(options(1920, 1080, 60.0));
        assert_approx_eq!(timing.pixel_clock_mhz, 173.0);
        assert_eq2!(timing.h_active, 1920);
        assert_eq2!(
            (timing.h_front_porch, timing.h_sync, timing.h_back_porch),
            (128, 200, 328)
        );
        assert_eq2!(timing.h_total(), 2576);
        assert_eq2!(
            (timing.v_front_porch, timing.v_sync, timing.v_back_porch),
            (3, 5, 32)
        );
        assert_eq2!(timing.v_active, 1080);
        assert_eq2!(timing.v_total(), 1120);
        assert_approx_eq!(timing.v_freq_hz, 59.963, 1e-3);
        assert!(!timing.hsync_positive);
        assert!(timing.vsync_positive);
    }

    #[test]
    fn test_reduced_blanking_v1_is_narrower() {
        let standard = compute_cvt(options(1920, 1080, 60.0));
        let reduced = compute_cvt(CvtOptions {
            reduced_blanking: ReducedBlanking::V1,
            ..options(1920, 1080, 60.0)
        });
        assert_approx_eq!(reduced.pixel_clock_mhz, 138.5);
        assert_eq2!(
            (reduced.h_front_porch, reduced.h_sync, reduced.h_back_porch),
            (48, 32, 80)
        );
        assert_eq2!(reduced.h_total(), 2080);
        assert_eq2!(
            (reduced.v_front_porch, reduced.v_sync, reduced.v_back_porch),
            (3, 5, 23)
        );
        assert_eq2!(reduced.v_total(), 1111);
        assert!(reduced.h_total() < standard.h_total());
        assert!(reduced.hsync_positive);
        assert!(!reduced.vsync_positive);
        assert!(reduced.v_freq_hz > 59.0 && reduced.v_freq_hz < 61.0);
    }

    #[test]
    fn test_reduced_blanking_v2() {
        let timing = compute_cvt(CvtOptions {
            reduced_blanking: ReducedBlanking::V2,
            ..options(1920, 1080, 60.0)
        });
        assert_approx_eq!(timing.pixel_clock_mhz, 133.32);
        assert_eq2!(
            (timing.h_front_porch, timing.h_sync, timing.h_back_porch),
            (8, 32, 40)
        );
        assert_eq2!(timing.h_total(), 2000);
        assert_eq2!(
            (timing.v_front_porch, timing.v_sync, timing.v_back_porch),
            (1, 8, 22)
        );
        assert_eq2!(timing.v_total(), 1111);
        assert_approx_eq!(timing.v_freq_hz, 60.0, 1e-9);
    }

    #[test]
    fn test_reduced_blanking_v2_video_optimized() {
        let timing = compute_cvt(CvtOptions {
            reduced_blanking: ReducedBlanking::V2,
            video_optimized: true,
            ..options(1920, 1080, 60.0)
        });
        assert_approx_eq!(timing.pixel_clock_mhz, 133.186);
        assert_approx_eq!(timing.v_freq_hz, 59.9397, 1e-4);
    }

    #[test]
    fn test_video_optimized_ignored_without_rb_v2() {
        let plain = compute_cvt(CvtOptions {
            reduced_blanking: ReducedBlanking::V1,
            ..options(1920, 1080, 60.0)
        });
        let optimized = compute_cvt(CvtOptions {
            reduced_blanking: ReducedBlanking::V1,
            video_optimized: true,
            ..options(1920, 1080, 60.0)
        });
        assert_eq2!(plain, optimized);
    }

    #[test]
    fn test_reduced_blanking_v3_defaults_match_v2_geometry() {
        let timing = compute_cvt(CvtOptions {
            reduced_blanking: ReducedBlanking::V3,
            ..options(1920, 1080, 60.0)
        });
        assert_approx_eq!(timing.pixel_clock_mhz, 133.32);
        assert_eq2!(timing.h_total(), 2000);
        assert_eq2!(timing.v_total(), 1111);
        assert!(timing.v_freq_hz >= 60.0 - 1e-9);
    }

    #[test]
    fn test_reduced_blanking_v3_options() {
        let timing = compute_cvt(CvtOptions {
            reduced_blanking: ReducedBlanking::V3,
            rb3_additional_h_blank: 45,
            rb3_min_v_blank_us: 600.0,
            rb3_early_vsync: true,
            ..options(1920, 1080, 60.0)
        });
        assert_eq2!(timing.h_back_porch, 80);
        assert_eq2!(timing.h_total(), 2040);
        assert_eq2!(
            (timing.v_front_porch, timing.v_sync, timing.v_back_porch),
            (27, 8, 6)
        );
        assert_eq2!(timing.v_total(), 1121);
        assert_approx_eq!(timing.pixel_clock_mhz, 137.211);
        assert!(timing.v_freq_hz >= 60.0);
    }

    #[test]
    fn test_reduced_blanking_v3_clamps_inputs() {
        let clamped = compute_cvt(CvtOptions {
            reduced_blanking: ReducedBlanking::V3,
            rb3_additional_h_blank: 500,
            rb3_min_v_blank_us: 100.0,
            ..options(1920, 1080, 60.0)
        });
        assert_eq2!(clamped.h_back_porch, 40 + 120);
        assert_eq2!(clamped.v_total(), 1111);
    }

    #[test_case(1280, 720, 60.0, 74.5, 1664, 748)]
    #[test_case(1024, 768, 75.0, 82.0, 1360, 805)]
    #[test_case(800, 600, 60.0, 38.25, 1024, 624)]
    fn test_standard_modes(
        h_pixels: u32,
        v_lines: u32,
        refresh: f64,
        clock_mhz: f64,
        h_total: u32,
        v_total: u32,
    ) {
        let timing = compute_cvt(options(h_pixels, v_lines, refresh));
        assert_approx_eq!(timing.pixel_clock_mhz, clock_mhz);
        assert_eq2!(timing.h_total(), h_total);
        assert_eq2!(timing.v_total(), v_total);
    }

    #[test]
    fn test_3840x2160_rb_v1() {
        let timing = compute_cvt(CvtOptions {
            reduced_blanking: ReducedBlanking::V1,
            ..options(3840, 2160, 60.0)
        });
        assert_approx_eq!(timing.pixel_clock_mhz, 533.25);
        assert_eq2!(timing.h_total(), 4000);
        assert_eq2!(timing.v_total(), 2222);
    }

    #[test_case(1024, 768, 4)]
    #[test_case(1920, 1080, 5)]
    #[test_case(1920, 1200, 6)]
    #[test_case(1280, 1024, 7)]
    #[test_case(1280, 768, 7)]
    #[test_case(1366, 700, 10)]
    fn test_vsync_encodes_aspect_ratio(h_pixels: u32, v_lines: u32, v_sync: u32) {
        let timing = compute_cvt(options(h_pixels, v_lines, 60.0));
        assert_eq2!(timing.v_sync, v_sync);
    }

    #[test]
    fn test_h_pixels_round_to_cell() {
        let standard = compute_cvt(options(1366, 768, 60.0));
        assert_eq2!(standard.h_active, 1360);
        let reduced = compute_cvt(CvtOptions {
            reduced_blanking: ReducedBlanking::V2,
            ..options(1366, 768, 60.0)
        });
        assert_eq2!(reduced.h_active, 1366);
    }

    #[test]
    fn test_interlaced() {
        let timing = compute_cvt(CvtOptions {
            interlaced: true,
            ..options(1920, 1080, 60.0)
        });
        assert!(timing.interlaced);
        assert_eq2!(timing.v_active, 1080);
        assert_eq2!(timing.v_back_porch, 34);
        assert_eq2!(timing.v_total(), 1080 + 2 * (3 + 5 + 34) + 1);
        assert_approx_eq!(timing.pixel_clock_mhz, 179.75);
        assert_approx_eq!(timing.field_rate_hz, 2.0 * timing.v_freq_hz);
    }

    #[test]
    fn test_margins() {
        let timing = compute_cvt(CvtOptions {
            margins: true,
            ..options(800, 600, 60.0)
        });
        assert_eq2!(timing.h_border, 8);
        assert_eq2!(timing.v_border, 10);
        assert_approx_eq!(timing.pixel_clock_mhz, 40.0);
        assert_eq2!(timing.h_total(), 1040);
        assert_eq2!(timing.v_total(), 645);
    }

    #[test]
    fn test_every_blanking_mode_keeps_the_active_area() {
        use strum::IntoEnumIterator;
        let standard_h_total = compute_cvt(options(1920, 1080, 60.0)).h_total();
        for reduced_blanking in ReducedBlanking::iter() {
            let timing = compute_cvt(CvtOptions {
                reduced_blanking,
                ..options(1920, 1080, 60.0)
            });
            assert_eq2!((timing.h_active, timing.v_active), (1920, 1080));
            assert!(timing.pixel_clock_mhz > 0.0, "{reduced_blanking:?}");
            assert!(timing.v_total() > timing.v_active, "{reduced_blanking:?}");
            if reduced_blanking != ReducedBlanking::None {
                assert!(timing.h_total() < standard_h_total, "{reduced_blanking:?}");
            }
        }
        assert_eq2!(ReducedBlanking::iter().count(), 4);
    }
}

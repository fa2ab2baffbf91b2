// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! VESA Generalized Timing Formula. Every rounding step is a round half away from zero
//! ([`f64::round`]), as in the GTF spreadsheet.
//!
//! The blanking model is the line `duty_cycle = C' - M' * h_period / 1000` where
//! `C' = (C - J) * K / 256 + J` and `M' = K / 256 * M`. Each input mode solves that
//! model for a different unknown:
//!
//! | input           | solved first          | then                         |
//! | :-------------- | :-------------------- | :--------------------------- |
//! | vertical rate   | h period (estimated)  | blanking from the h period   |
//! | horizontal rate | h period (given)      | v blanking from the h rate   |
//! | pixel clock     | h period (quadratic)  | h rate from the total pixels |

use super::{GeneratedTiming, generated_timing::to_count};
use serde::{Deserialize, Serialize};

const CELL_GRAN: f64 = 8.0;
const MARGIN_PERCENT: f64 = 1.8;
const MIN_PORCH: f64 = 1.0;
const V_SYNC_RQD: f64 = 3.0;
const H_SYNC_PERCENT: f64 = 8.0;
const MIN_VSYNC_BP_US: f64 = 550.0;

/// The four GTF curve parameters. The default is the VESA default curve, a secondary
/// curve comes from the display range limits descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GtfCurve {
    /// Blanking formula gradient, %/kHz.
    pub m: f64,
    /// Blanking formula offset, %.
    pub c: f64,
    /// Blanking time scaling factor.
    pub k: f64,
    /// Scaling factor weighting, %.
    pub j: f64,
}

impl Default for GtfCurve {
    fn default() -> Self {
        Self {
            m: 600.0,
            c: 40.0,
            k: 128.0,
            j: 20.0,
        }
    }
}

impl GtfCurve {
    #[must_use]
    pub fn c_prime(&self) -> f64 { (self.c - self.j) * self.k / 256.0 + self.j }

    #[must_use]
    pub fn m_prime(&self) -> f64 { self.k / 256.0 * self.m }

    fn ideal_duty_cycle(&self, h_period_us: f64) -> f64 {
        self.c_prime() - self.m_prime() * h_period_us / 1000.0
    }
}

/// What the caller pins down. The other two rates follow from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GtfInput {
    /// Frame rate. Interlaced timings run their field rate at twice this.
    VerticalRateHz(f64),
    HorizontalRateKhz(f64),
    PixelClockMhz(f64),
}

impl Default for GtfInput {
    fn default() -> Self { Self::VerticalRateHz(60.0) }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GtfOptions {
    pub h_pixels: u32,
    pub v_lines: u32,
    pub input: GtfInput,
    pub interlaced: bool,
    /// Adds 1.8% borders on every side.
    pub margins: bool,
    pub curve: GtfCurve,
}

impl Default for GtfOptions {
    fn default() -> Self {
        Self {
            h_pixels: 640,
            v_lines: 480,
            input: GtfInput::default(),
            interlaced: false,
            margins: false,
            curve: GtfCurve::default(),
        }
    }
}

fn h_blank_for_duty_cycle(total_active_pixels: f64, duty_cycle: f64) -> f64 {
    let blank_gran = 2.0 * CELL_GRAN;
    (total_active_pixels * duty_cycle / (100.0 - duty_cycle) / blank_gran).round()
        * blank_gran
}

/// Computes a GTF timing. There are no error conditions: zero or absurd inputs give a
/// meaningless timing rather than a panic.
#[must_use]
pub fn compute_gtf(options: GtfOptions) -> GeneratedTiming {
    let curve = options.curve;
    let h_pixels_rnd = (f64::from(options.h_pixels) / CELL_GRAN).round() * CELL_GRAN;
    let v_lines_rnd = if options.interlaced {
        (f64::from(options.v_lines) / 2.0).round()
    } else {
        f64::from(options.v_lines)
    };
    let v_margin = if options.margins {
        (MARGIN_PERCENT / 100.0 * v_lines_rnd).round()
    } else {
        0.0
    };
    let h_margin = if options.margins {
        (h_pixels_rnd * MARGIN_PERCENT / 100.0 / CELL_GRAN).round() * CELL_GRAN
    } else {
        0.0
    };
    let interlace = if options.interlaced { 0.5 } else { 0.0 };
    let total_active_pixels = h_pixels_rnd + 2.0 * h_margin;
    let lines_without_sync = v_lines_rnd + 2.0 * v_margin + MIN_PORCH + interlace;

    // (h period in us, sync + back porch lines, blank pixels)
    let (h_period_us, v_sync_bp, h_blank) = match options.input {
        GtfInput::VerticalRateHz(rate) => {
            let field_rate_rqd = if options.interlaced { rate * 2.0 } else { rate };
            let h_period_est = ((1.0 / field_rate_rqd) - MIN_VSYNC_BP_US / 1_000_000.0)
                / lines_without_sync
                * 1_000_000.0;
            let v_sync_bp = (MIN_VSYNC_BP_US / h_period_est).round();
            let total_v_lines = lines_without_sync + v_sync_bp;
            let field_rate_est = 1.0 / h_period_est / total_v_lines * 1_000_000.0;
            let h_period = h_period_est / (field_rate_rqd / field_rate_est);
            let h_blank = h_blank_for_duty_cycle(
                total_active_pixels,
                curve.ideal_duty_cycle(h_period),
            );
            (h_period, v_sync_bp, h_blank)
        }
        GtfInput::HorizontalRateKhz(h_freq_khz) => {
            let h_period = 1000.0 / h_freq_khz;
            let v_sync_bp = (MIN_VSYNC_BP_US * h_freq_khz / 1000.0).round();
            let h_blank = h_blank_for_duty_cycle(
                total_active_pixels,
                curve.ideal_duty_cycle(h_period),
            );
            (h_period, v_sync_bp, h_blank)
        }
        GtfInput::PixelClockMhz(pixel_clock_mhz) => {
            let c_prime = curve.c_prime();
            let m_prime = curve.m_prime();
            let ideal_h_period = ((c_prime - 100.0)
                + ((100.0 - c_prime).powi(2)
                    + 0.4 * m_prime * total_active_pixels / pixel_clock_mhz)
                    .sqrt())
                / 2.0
                / m_prime
                * 1000.0;
            let h_blank = h_blank_for_duty_cycle(
                total_active_pixels,
                curve.ideal_duty_cycle(ideal_h_period),
            );
            let h_freq_khz = pixel_clock_mhz / (total_active_pixels + h_blank) * 1000.0;
            let v_sync_bp = (MIN_VSYNC_BP_US * h_freq_khz / 1000.0).round();
            (1000.0 / h_freq_khz, v_sync_bp, h_blank)
        }
    };

    let total_pixels = total_active_pixels + h_blank;
    let pixel_clock_mhz = match options.input {
        GtfInput::PixelClockMhz(pixel_clock_mhz) => pixel_clock_mhz,
        _ => total_pixels / h_period_us,
    };
    let h_freq_khz = 1000.0 / h_period_us;
    let total_v_lines = lines_without_sync + v_sync_bp;
    let field_rate_hz = h_freq_khz * 1000.0 / total_v_lines;
    let v_freq_hz = if options.interlaced {
        field_rate_hz / 2.0
    } else {
        field_rate_hz
    };

    let h_sync = (H_SYNC_PERCENT / 100.0 * total_pixels / CELL_GRAN).round() * CELL_GRAN;
    let h_back_porch = h_blank / 2.0;

    GeneratedTiming {
        pixel_clock_mhz,
        h_active: to_count(h_pixels_rnd),
        h_border: to_count(h_margin),
        h_front_porch: to_count(h_back_porch - h_sync),
        h_sync: to_count(h_sync),
        h_back_porch: to_count(h_back_porch),
        v_active: if options.interlaced {
            to_count(v_lines_rnd) * 2
        } else {
            to_count(v_lines_rnd)
        },
        v_border: to_count(v_margin),
        v_front_porch: to_count(MIN_PORCH),
        v_sync: to_count(V_SYNC_RQD),
        v_back_porch: to_count(v_sync_bp - V_SYNC_RQD),
        interlaced: options.interlaced,
        hsync_positive: false,
        vsync_positive: true,
        h_freq_khz,
        field_rate_hz,
        v_freq_hz,
    }
}

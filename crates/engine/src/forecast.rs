//! Linear projection of cumulative impact
//!
//! Deliberately a plain linear extrapolation: the mean per-month delta over
//! the trailing window, multiplied by the horizon, added to the latest
//! cumulative sample. No seasonality, no regression; the consumer only
//! needs an order-of-magnitude annual figure and a deterministic one.

use common::models::MonthlySample;
use common::{Error, Result};
use serde::Serialize;

/// Samples required before a projection is attempted
pub const MIN_SAMPLES: usize = 2;

/// Projected cumulative totals at the end of the horizon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedTotals {
    pub expected_points: u64,
    pub expected_carbon_g: u64,
    pub expected_water_l: u64,
    pub expected_waste_g: u64,
    pub confidence_pct: u8,
}

/// Project `horizon_months` ahead of the latest sample.
///
/// Fails with `InsufficientHistory` below two samples; callers surface that
/// as a "not enough data yet" state, not a hard failure.
pub fn project(samples: &[MonthlySample], horizon_months: u32) -> Result<ProjectedTotals> {
    if samples.len() < MIN_SAMPLES {
        return Err(Error::InsufficientHistory {
            got: samples.len(),
            need: MIN_SAMPLES,
        });
    }

    let first = &samples[0];
    let last = &samples[samples.len() - 1];
    let span = (samples.len() - 1) as u64;

    Ok(ProjectedTotals {
        expected_points: extrapolate(first.points, last.points, span, horizon_months),
        expected_carbon_g: extrapolate(first.carbon_g, last.carbon_g, span, horizon_months),
        expected_water_l: extrapolate(first.water_l, last.water_l, span, horizon_months),
        expected_waste_g: extrapolate(first.waste_g, last.waste_g, span, horizon_months),
        confidence_pct: confidence_pct(samples.len()),
    })
}

/// Confidence is a decreasing function of sample scarcity: 30% at the
/// two-sample minimum, +10 per extra sample, capped at 90%.
pub fn confidence_pct(samples: usize) -> u8 {
    let pct = 30 + 10 * samples.saturating_sub(MIN_SAMPLES);
    pct.min(90) as u8
}

fn extrapolate(first: u64, last: u64, span_months: u64, horizon_months: u32) -> u64 {
    // Cumulative counters never decrease, so last >= first.
    let mean_delta = (last - first) as f64 / span_months as f64;
    last + (mean_delta * f64::from(horizon_months)).round() as u64
}

/// Merge member histories into one group history.
///
/// For each month present in any member's history, every member contributes
/// its latest sample at or before that month (carried forward; zero before
/// its first sample). The merged counters are therefore monotonic like any
/// single ledger's.
pub fn merge_histories(histories: &[&[MonthlySample]]) -> Vec<MonthlySample> {
    let mut periods: Vec<_> = histories
        .iter()
        .flat_map(|h| h.iter().map(|s| s.period))
        .collect();
    periods.sort();
    periods.dedup();

    periods
        .into_iter()
        .map(|period| {
            let mut merged = MonthlySample {
                period,
                points: 0,
                carbon_g: 0,
                water_l: 0,
                waste_g: 0,
            };
            for history in histories {
                if let Some(sample) = history.iter().rev().find(|s| s.period <= period) {
                    merged.points += sample.points;
                    merged.carbon_g += sample.carbon_g;
                    merged.water_l += sample.water_l;
                    merged.waste_g += sample.waste_g;
                }
            }
            merged
        })
        .collect()
}

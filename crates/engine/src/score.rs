//! EcoScore computation
//!
//! A weighted, capped-per-category sum over the declared sustainability
//! attributes. The category maxima add up to 100; the product-facing
//! EcoScore is that raw value scaled by 10 onto the 0-1000 scale. The
//! scaling happens here and nowhere else.

use common::models::{ProductTier, Recyclability, SustainabilityProfile};

/// Raw 0-100 category sum to product-facing 0-1000
pub const SCORE_SCALE: u16 = 10;

/// Upper bound of the product-facing scale
pub const MAX_SCORE: u16 = 1000;

/// Compute the 0-1000 EcoScore for a product's declared attributes.
///
/// Deterministic and side-effect free. Missing fields contribute zero to
/// their category; out-of-range values clamp to the nearest valid bound.
pub fn compute(profile: &SustainabilityProfile) -> u16 {
    let mut raw = 0.0_f64;

    // Carbon / energy: up to 25
    raw += pct(profile.renewable_energy_pct) / 100.0 * 25.0;

    // Materials: up to 15 + 10
    raw += pct(profile.recycled_content_pct) / 100.0 * 15.0;
    raw += pct(profile.bio_based_content_pct) / 100.0 * 10.0;

    // Packaging: up to 10 + 5
    if profile.plastic_free_packaging.unwrap_or(false) {
        raw += 10.0;
    }
    if profile.packaging_recyclable == Some(Recyclability::Yes) {
        raw += 5.0;
    }

    // Social: up to 8 + 7
    if profile.fair_labor_certified.unwrap_or(false) {
        raw += 8.0;
    }
    if profile.worker_safety_programs.unwrap_or(false) {
        raw += 7.0;
    }

    // Lifecycle: up to 8 + 7
    if profile.take_back_program.unwrap_or(false) {
        raw += 8.0;
    }
    if profile.expected_lifespan_years.unwrap_or(0.0) > 5.0 {
        raw += 7.0;
    }

    // Certifications: 2 each, capped at 10
    raw += (f64::from(profile.certification_count.unwrap_or(0)) * 2.0).min(10.0);

    let scaled = (raw * f64::from(SCORE_SCALE)).round() as i64;
    scaled.clamp(0, i64::from(MAX_SCORE)) as u16
}

fn pct(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0).clamp(0.0, 100.0)
}

/// Product tier for a 0-1000 score. Highest threshold met wins, lower
/// bounds inclusive.
pub fn tier_for_score(score: u16) -> ProductTier {
    match score {
        s if s >= 900 => ProductTier::EcoChampion,
        s if s >= 750 => ProductTier::EcoPioneer,
        s if s >= 600 => ProductTier::EcoSelect,
        s if s >= 450 => ProductTier::EcoAware,
        s if s >= 300 => ProductTier::EcoEntry,
        _ => ProductTier::Standard,
    }
}

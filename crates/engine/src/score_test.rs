#[cfg(test)]
mod tests {
    use crate::score::*;
    use common::models::{ProductTier, Recyclability, SustainabilityProfile};

    fn max_profile() -> SustainabilityProfile {
        SustainabilityProfile {
            renewable_energy_pct: Some(100.0),
            recycled_content_pct: Some(100.0),
            bio_based_content_pct: Some(100.0),
            plastic_free_packaging: Some(true),
            packaging_recyclable: Some(Recyclability::Yes),
            fair_labor_certified: Some(true),
            worker_safety_programs: Some(true),
            take_back_program: Some(true),
            expected_lifespan_years: Some(10.0),
            certification_count: Some(5),
        }
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        let score = compute(&SustainabilityProfile::default());
        assert_eq!(score, 0);
        assert_eq!(tier_for_score(score), ProductTier::Standard);
    }

    #[test]
    fn test_max_profile_scores_1000() {
        let score = compute(&max_profile());
        assert_eq!(score, 1000);
        assert_eq!(tier_for_score(score), ProductTier::EcoChampion);
    }

    #[test]
    fn test_renewable_only() {
        let profile = SustainabilityProfile {
            renewable_energy_pct: Some(50.0),
            ..Default::default()
        };
        // 50% of the 25-point carbon category, x10
        assert_eq!(compute(&profile), 125);
    }

    #[test]
    fn test_out_of_range_percent_clamps() {
        let over = SustainabilityProfile {
            renewable_energy_pct: Some(150.0),
            ..Default::default()
        };
        let full = SustainabilityProfile {
            renewable_energy_pct: Some(100.0),
            ..Default::default()
        };
        assert_eq!(compute(&over), compute(&full));

        let negative = SustainabilityProfile {
            recycled_content_pct: Some(-40.0),
            ..Default::default()
        };
        assert_eq!(compute(&negative), 0);
    }

    #[test]
    fn test_partial_recyclability_earns_nothing() {
        let partial = SustainabilityProfile {
            packaging_recyclable: Some(Recyclability::Partial),
            ..Default::default()
        };
        assert_eq!(compute(&partial), 0);

        let yes = SustainabilityProfile {
            packaging_recyclable: Some(Recyclability::Yes),
            ..Default::default()
        };
        assert_eq!(compute(&yes), 50);
    }

    #[test]
    fn test_lifespan_bonus_requires_over_five_years() {
        let exactly_five = SustainabilityProfile {
            expected_lifespan_years: Some(5.0),
            ..Default::default()
        };
        assert_eq!(compute(&exactly_five), 0);

        let over_five = SustainabilityProfile {
            expected_lifespan_years: Some(5.5),
            ..Default::default()
        };
        assert_eq!(compute(&over_five), 70);
    }

    #[test]
    fn test_certifications_capped_at_ten_points() {
        let three = SustainabilityProfile {
            certification_count: Some(3),
            ..Default::default()
        };
        assert_eq!(compute(&three), 60);

        let many = SustainabilityProfile {
            certification_count: Some(12),
            ..Default::default()
        };
        assert_eq!(compute(&many), 100);
    }

    #[test]
    fn test_increasing_an_attribute_never_decreases_score() {
        let base = SustainabilityProfile {
            renewable_energy_pct: Some(40.0),
            recycled_content_pct: Some(20.0),
            certification_count: Some(1),
            ..Default::default()
        };
        let base_score = compute(&base);

        let mut more_renewable = base.clone();
        more_renewable.renewable_energy_pct = Some(60.0);
        assert!(compute(&more_renewable) >= base_score);

        let mut more_certs = base.clone();
        more_certs.certification_count = Some(4);
        assert!(compute(&more_certs) >= base_score);

        let mut plastic_free = base.clone();
        plastic_free.plastic_free_packaging = Some(true);
        assert!(compute(&plastic_free) >= base_score);
    }

    #[test]
    fn test_product_tier_thresholds_are_inclusive() {
        assert_eq!(tier_for_score(1000), ProductTier::EcoChampion);
        assert_eq!(tier_for_score(900), ProductTier::EcoChampion);
        assert_eq!(tier_for_score(899), ProductTier::EcoPioneer);
        assert_eq!(tier_for_score(750), ProductTier::EcoPioneer);
        assert_eq!(tier_for_score(749), ProductTier::EcoSelect);
        assert_eq!(tier_for_score(600), ProductTier::EcoSelect);
        assert_eq!(tier_for_score(599), ProductTier::EcoAware);
        assert_eq!(tier_for_score(450), ProductTier::EcoAware);
        assert_eq!(tier_for_score(449), ProductTier::EcoEntry);
        assert_eq!(tier_for_score(300), ProductTier::EcoEntry);
        assert_eq!(tier_for_score(299), ProductTier::Standard);
        assert_eq!(tier_for_score(0), ProductTier::Standard);
    }
}

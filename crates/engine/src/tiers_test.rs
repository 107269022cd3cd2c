#[cfg(test)]
mod tests {
    use crate::tiers::*;
    use common::models::EntityTier;

    #[test]
    fn test_user_tier_thresholds_are_inclusive() {
        assert_eq!(tier_for(0, TierTable::Users).tier, EntityTier::Seedling);
        assert_eq!(tier_for(99, TierTable::Users).tier, EntityTier::Seedling);
        assert_eq!(tier_for(100, TierTable::Users).tier, EntityTier::Sprout);
        assert_eq!(tier_for(499, TierTable::Users).tier, EntityTier::Sprout);
        assert_eq!(tier_for(500, TierTable::Users).tier, EntityTier::Tree);
        assert_eq!(tier_for(1499, TierTable::Users).tier, EntityTier::Tree);
        assert_eq!(tier_for(1500, TierTable::Users).tier, EntityTier::Forest);
        assert_eq!(tier_for(4999, TierTable::Users).tier, EntityTier::Forest);
        assert_eq!(
            tier_for(5000, TierTable::Users).tier,
            EntityTier::PlanetGuardian
        );
    }

    #[test]
    fn test_points_to_next_counts_down() {
        let standing = tier_for(0, TierTable::Users);
        assert_eq!(standing.points_to_next, 100);

        let standing = tier_for(450, TierTable::Users);
        assert_eq!(standing.points_to_next, 50);
    }

    #[test]
    fn test_top_tier_has_no_next() {
        let standing = tier_for(12_000, TierTable::Users);
        assert_eq!(standing.tier, EntityTier::PlanetGuardian);
        assert_eq!(standing.points_to_next, 0);
        assert_eq!(standing.progress_pct, 100.0);
    }

    #[test]
    fn test_progress_is_position_within_bracket() {
        // Sprout bracket is [100, 500): 300 is halfway through.
        let standing = tier_for(300, TierTable::Users);
        assert_eq!(standing.tier, EntityTier::Sprout);
        assert!((standing.progress_pct - 50.0).abs() < f64::EPSILON);

        // At the lower bound progress restarts at zero.
        let standing = tier_for(100, TierTable::Users);
        assert!((standing.progress_pct - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_group_table_is_independent_of_user_table() {
        assert_eq!(tier_for(999, TierTable::Groups).tier, EntityTier::Sprout);
        assert_eq!(tier_for(1000, TierTable::Groups).tier, EntityTier::Tree);
        assert_eq!(tier_for(2500, TierTable::Groups).tier, EntityTier::Forest);
        // The same points land differently on the user table.
        assert_eq!(tier_for(1000, TierTable::Users).tier, EntityTier::Tree);
        assert_eq!(tier_for(2500, TierTable::Users).tier, EntityTier::Forest);
        assert_eq!(tier_for(250, TierTable::Groups).tier, EntityTier::Sprout);
        assert_eq!(tier_for(250, TierTable::Users).tier, EntityTier::Sprout);
        assert_eq!(tier_for(499, TierTable::Groups).tier, EntityTier::Sprout);
        assert_eq!(tier_for(500, TierTable::Users).tier, EntityTier::Tree);
    }

    #[test]
    fn test_rolled_up_group_total_reaches_guardian() {
        // Member contributions 50 + 200 + 4800 roll up to 5050.
        let standing = tier_for(5050, TierTable::Groups);
        assert_eq!(standing.tier, EntityTier::PlanetGuardian);
    }

    #[test]
    fn test_tier_is_non_decreasing_in_points() {
        let mut last = tier_for(0, TierTable::Users).tier;
        for points in (0..=6000).step_by(50) {
            let tier = tier_for(points, TierTable::Users).tier;
            assert!(tier >= last, "tier regressed at {points} points");
            last = tier;
        }
    }
}

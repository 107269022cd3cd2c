#[cfg(test)]
mod tests {
    use crate::rewards::*;
    use common::models::{ImpactSnapshot, RewardPayload};

    fn snapshot_with_points(points: u64) -> ImpactSnapshot {
        ImpactSnapshot {
            points,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_ledger_unlocks_nothing() {
        assert!(unlocked(&ImpactSnapshot::default()).is_empty());
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert!(!unlocked_ids(&snapshot_with_points(99)).contains(&"first_steps"));
        assert!(unlocked_ids(&snapshot_with_points(100)).contains(&"first_steps"));
    }

    #[test]
    fn test_point_rewards_accumulate() {
        let ids = unlocked_ids(&snapshot_with_points(5000));
        assert_eq!(
            ids,
            vec![
                "first_steps",
                "eco_discount_5",
                "eco_discount_10",
                "guardian_access"
            ]
        );
    }

    #[test]
    fn test_resource_counters_unlock_independently() {
        let snapshot = ImpactSnapshot {
            carbon_g: 100_000,
            water_l: 9_999,
            ..Default::default()
        };
        let ids = unlocked_ids(&snapshot);
        assert!(ids.contains(&"carbon_saver"));
        assert!(!ids.contains(&"water_guardian"));
        assert!(!ids.contains(&"first_steps"));
    }

    #[test]
    fn test_unlocks_follow_the_snapshot_not_a_cache() {
        let before = snapshot_with_points(400);
        let after = snapshot_with_points(500);
        assert!(!unlocked_ids(&before).contains(&"eco_discount_5"));
        assert!(unlocked_ids(&after).contains(&"eco_discount_5"));
    }

    #[test]
    fn test_discount_payloads_carry_their_percent() {
        let unlocked = unlocked(&snapshot_with_points(10_000));
        let discount = unlocked
            .iter()
            .find(|def| def.id == "guardian_discount_15")
            .expect("unlocked at 10k points");
        assert_eq!(discount.payload, RewardPayload::Discount { percent: 15 });
    }
}

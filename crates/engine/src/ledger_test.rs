#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use common::models::{ImpactDelta, StreakSignal};
    use common::Error;
    use store::{LedgerStore, LockBounds};
    use uuid::Uuid;

    use crate::ledger::ImpactLedger;
    use crate::tiers::{self, TierTable};
    use common::models::EntityTier;

    fn ledger() -> ImpactLedger {
        ImpactLedger::new(Arc::new(LedgerStore::new(LockBounds::default())))
    }

    fn delta(points: i64) -> ImpactDelta {
        ImpactDelta {
            points,
            ..Default::default()
        }
    }

    fn ts(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_apply_accumulates_counters() {
        let ledger = ledger();
        let entity = Uuid::new_v4();
        let now = ts(2026, 3, 1);

        ledger.apply(entity, &delta(40), now).await.unwrap();
        let snapshot = ledger.apply(entity, &delta(60), now).await.unwrap();
        assert_eq!(snapshot.points, 100);
    }

    #[tokio::test]
    async fn test_negative_delta_rejected_and_ledger_untouched() {
        let ledger = ledger();
        let entity = Uuid::new_v4();
        let now = ts(2026, 3, 1);
        ledger.apply(entity, &delta(25), now).await.unwrap();

        let bad = ImpactDelta {
            points: 10,
            carbon_g: -1,
            ..Default::default()
        };
        let err = ledger.apply(entity, &bad, now).await.unwrap_err();
        assert!(matches!(err, Error::InvalidDelta(_)));

        let snapshot = ledger.snapshot(entity).await.unwrap();
        assert_eq!(snapshot.points, 25);
        assert_eq!(snapshot.carbon_g, 0);
    }

    #[tokio::test]
    async fn test_apply_order_does_not_matter() {
        let ledger = ledger();
        let now = ts(2026, 3, 1);
        let a = ImpactDelta {
            points: 10,
            carbon_g: 500,
            ..Default::default()
        };
        let b = ImpactDelta {
            points: 30,
            water_l: 20,
            ..Default::default()
        };

        let first = Uuid::new_v4();
        ledger.apply(first, &a, now).await.unwrap();
        let ab = ledger.apply(first, &b, now).await.unwrap();

        let second = Uuid::new_v4();
        ledger.apply(second, &b, now).await.unwrap();
        let ba = ledger.apply(second, &a, now).await.unwrap();

        assert_eq!(ab.points, ba.points);
        assert_eq!(ab.carbon_g, ba.carbon_g);
        assert_eq!(ab.water_l, ba.water_l);
    }

    #[tokio::test]
    async fn test_streak_increments_once_per_month() {
        let ledger = ledger();
        let entity = Uuid::new_v4();
        let continued = ImpactDelta {
            points: 5,
            streak: StreakSignal::Continue,
            ..Default::default()
        };

        let snapshot = ledger.apply(entity, &continued, ts(2026, 1, 3)).await.unwrap();
        assert_eq!(snapshot.streak, 1);

        // Same month: no further increment.
        let snapshot = ledger.apply(entity, &continued, ts(2026, 1, 20)).await.unwrap();
        assert_eq!(snapshot.streak, 1);

        // Next month continues the streak.
        let snapshot = ledger.apply(entity, &continued, ts(2026, 2, 2)).await.unwrap();
        assert_eq!(snapshot.streak, 2);
    }

    #[tokio::test]
    async fn test_streak_resets_to_zero() {
        let ledger = ledger();
        let entity = Uuid::new_v4();
        let continued = ImpactDelta {
            points: 5,
            streak: StreakSignal::Continue,
            ..Default::default()
        };
        ledger.apply(entity, &continued, ts(2026, 1, 3)).await.unwrap();
        ledger.apply(entity, &continued, ts(2026, 2, 3)).await.unwrap();

        let reset = ImpactDelta {
            streak: StreakSignal::Reset,
            ..Default::default()
        };
        let snapshot = ledger.apply(entity, &reset, ts(2026, 4, 1)).await.unwrap();
        assert_eq!(snapshot.streak, 0);
        // Points survive a streak reset.
        assert_eq!(snapshot.points, 10);
    }

    #[tokio::test]
    async fn test_monthly_history_overwrites_within_a_month() {
        let ledger = ledger();
        let entity = Uuid::new_v4();

        ledger.apply(entity, &delta(10), ts(2026, 1, 5)).await.unwrap();
        ledger.apply(entity, &delta(20), ts(2026, 1, 25)).await.unwrap();
        let snapshot = ledger.apply(entity, &delta(30), ts(2026, 2, 5)).await.unwrap();

        assert_eq!(snapshot.history.len(), 2);
        assert_eq!(snapshot.history[0].points, 30);
        assert_eq!(snapshot.history[1].points, 60);
    }

    #[tokio::test]
    async fn test_unknown_entity_reads_as_empty() {
        let ledger = ledger();
        let snapshot = ledger.snapshot(Uuid::new_v4()).await.unwrap();
        assert_eq!(snapshot.points, 0);
        assert!(snapshot.history.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_applies_lose_nothing() {
        let ledger = Arc::new(ledger());
        let entity = Uuid::new_v4();
        let now = ts(2026, 3, 1);

        let mut handles = Vec::new();
        for _ in 0..50 {
            let ledger = ledger.clone();
            handles.push(tokio::spawn(async move {
                ledger.apply(entity, &delta(10), now).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let snapshot = ledger.snapshot(entity).await.unwrap();
        assert_eq!(snapshot.points, 500);
    }

    #[tokio::test]
    async fn test_roll_up_is_the_sum_of_member_snapshots() {
        let ledger = ledger();
        let now = ts(2026, 3, 1);
        let members = [
            (Uuid::new_v4(), 50),
            (Uuid::new_v4(), 200),
            (Uuid::new_v4(), 4800),
        ];
        let mut snapshots = Vec::new();
        for (id, points) in members {
            snapshots.push(ledger.apply(id, &delta(points), now).await.unwrap());
        }

        let total = ImpactLedger::roll_up(&snapshots);
        assert_eq!(total.points, 5050);
        assert_eq!(
            tiers::tier_for(total.points, TierTable::Groups).tier,
            EntityTier::PlanetGuardian
        );
    }
}

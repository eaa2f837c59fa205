//! Dashboard aggregation core
//!
//! Pure functions over the four snapshot collections, assembled into one
//! `DashboardMetrics` payload per render. Snapshot-only aggregates are
//! memoized on snapshot identity, so repeated renders between data loads are
//! cheap; clock-dependent values are recomputed every render.

pub mod alerts;
pub mod memo;
pub mod metrics;
pub mod wood;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::{InventoryItem, SnapshotStore, User, WorkOrder};

pub use alerts::{low_inventory_alerts, InventoryAlert};
pub use memo::Memo;
pub use metrics::{
    quick_stats, recent_delivery_count, team_metrics, work_order_metrics, QuickStats,
    TeamMetrics, WorkOrderMetrics,
};
pub use wood::{wood_summary, WoodSummary};

/// Everything the dashboard screen displays, in one payload
#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub wood: WoodSummary,
    pub work_orders: WorkOrderMetrics,
    pub team: TeamMetrics,
    pub recent_deliveries: usize,
    pub alerts: Vec<InventoryAlert>,
    /// True exactly when `alerts` is empty; the UI shows a success notice
    pub all_stocked: bool,
    pub quick_stats: QuickStats,
}

/// Memoized dashboard renderer
///
/// One memo slot per snapshot-only aggregate. The alert list is not
/// memoized (a cheap filter, and the payload needs a fresh owned copy), and
/// neither is the recent-delivery count: it depends on the clock, so caching
/// it against the snapshot would freeze events in the window on a
/// long-running server.
#[derive(Debug, Default)]
pub struct Dashboard {
    wood: Memo<InventoryItem, WoodSummary>,
    work_orders: Memo<WorkOrder, WorkOrderMetrics>,
    team: Memo<User, TeamMetrics>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the full dashboard payload from the current snapshots
    pub fn render(&self, store: &SnapshotStore, now: DateTime<Utc>) -> DashboardMetrics {
        let inventory = store.inventory();
        let work_orders = store.work_orders();
        let users = store.users();
        let deliveries = store.deliveries();

        let wood = *self.wood.get_or_compute(&inventory, wood_summary);
        let orders = *self.work_orders.get_or_compute(&work_orders, work_order_metrics);
        let team = *self.team.get_or_compute(&users, team_metrics);
        let recent_deliveries = recent_delivery_count(&deliveries, now);

        let alerts: Vec<InventoryAlert> = low_inventory_alerts(&inventory).collect();
        let all_stocked = alerts.is_empty();

        DashboardMetrics {
            wood,
            work_orders: orders,
            team,
            recent_deliveries,
            alerts,
            all_stocked,
            quick_stats: quick_stats(&work_orders, &team),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InventoryItem, User, WorkOrder};
    use uuid::Uuid;

    fn low_item() -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            name: "Split Firewood".to_string(),
            category: Some("wood".to_string()),
            unit: "cords".to_string(),
            quantity_on_hand: 3.5,
            reorder_threshold: 5.0,
            reorder_amount: None,
            notes: None,
        }
    }

    #[test]
    fn renders_the_worked_example() {
        let store = SnapshotStore::new();
        store.replace_inventory(vec![low_item()]);
        store.replace_work_orders(vec![
            WorkOrder {
                id: Uuid::new_v4(),
                status: "Completed".to_string(),
                client_id: Some(Uuid::new_v4()),
                delivery_size_cords: Some(3.0),
                scheduled_date: None,
            },
            WorkOrder {
                id: Uuid::new_v4(),
                status: "pending".to_string(),
                client_id: None,
                delivery_size_cords: None,
                scheduled_date: None,
            },
            WorkOrder {
                id: Uuid::new_v4(),
                status: "received".to_string(),
                client_id: None,
                delivery_size_cords: None,
                scheduled_date: None,
            },
        ]);
        store.replace_users(vec![
            User {
                id: Uuid::new_v4(),
                name: "a".to_string(),
                is_driver: true,
                hipaa_certified: false,
            },
            User {
                id: Uuid::new_v4(),
                name: "b".to_string(),
                is_driver: false,
                hipaa_certified: false,
            },
            User {
                id: Uuid::new_v4(),
                name: "c".to_string(),
                is_driver: false,
                hipaa_certified: true,
            },
        ]);

        let view = Dashboard::new().render(&store, Utc::now());

        assert_eq!(view.wood.split, 3.5);
        assert_eq!(view.wood.unsplit, 0.0);
        assert_eq!(view.work_orders.total, 3);
        assert_eq!(view.work_orders.completed, 1);
        assert_eq!(view.work_orders.pending, 2);
        assert_eq!(view.work_orders.completion_rate, 33);
        assert_eq!(view.team.total, 3);
        assert_eq!(view.team.drivers, 1);
        assert_eq!(view.team.hipaa_certified, 1);
        assert_eq!(view.quick_stats.driver_utilization_pct, 33);
        assert_eq!(view.quick_stats.active_clients, 1);
        assert_eq!(view.quick_stats.avg_order_size_cords, 1.0);
        assert_eq!(view.alerts.len(), 1);
        assert!(!view.all_stocked);
        assert_eq!(view.recent_deliveries, 0);
    }

    #[test]
    fn all_stocked_mirrors_an_empty_alert_list() {
        let store = SnapshotStore::new();
        let mut item = low_item();
        item.quantity_on_hand = 10.0;
        store.replace_inventory(vec![item]);

        let view = Dashboard::new().render(&store, Utc::now());
        assert!(view.alerts.is_empty());
        assert!(view.all_stocked);
    }

    #[test]
    fn recent_count_tracks_the_clock_across_renders() {
        let store = SnapshotStore::new();
        let now = Utc::now();
        store.replace_deliveries(vec![crate::store::DeliveryEvent {
            id: Uuid::new_v4(),
            title: "drop-off".to_string(),
            scheduled_date: Some(now - chrono::Duration::days(6)),
        }]);
        let dashboard = Dashboard::new();

        assert_eq!(dashboard.render(&store, now).recent_deliveries, 1);
        // Same snapshot, later clock: the event has aged out of the window
        let later = now + chrono::Duration::days(8);
        assert_eq!(dashboard.render(&store, later).recent_deliveries, 0);
    }

    #[test]
    fn rerender_reuses_memoized_aggregates_until_data_changes() {
        let store = SnapshotStore::new();
        store.replace_inventory(vec![low_item()]);
        let dashboard = Dashboard::new();

        let first = dashboard.render(&store, Utc::now());
        let second = dashboard.render(&store, Utc::now());
        assert_eq!(first.wood, second.wood);

        store.replace_inventory(Vec::new());
        let third = dashboard.render(&store, Utc::now());
        assert_eq!(third.wood, WoodSummary::default());
        assert!(third.all_stocked);
    }
}

//! Work-order, team, recent-delivery and quick-stat aggregates

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::store::{DeliveryEvent, User, WorkOrder};

/// Statuses that count as still in the pipeline
const PENDING_STATUSES: [&str; 4] = ["received", "pending", "scheduled", "in_progress"];

/// How far back a delivery still counts as "recent"
pub const RECENT_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkOrderMetrics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percentage of orders completed, 0 when there are no orders
    pub completion_rate: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamMetrics {
    pub total: usize,
    pub drivers: usize,
    pub hipaa_certified: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct QuickStats {
    pub active_clients: usize,
    /// Mean delivery size in cords, rounded to one decimal
    pub avg_order_size_cords: f64,
    pub driver_utilization_pct: u32,
}

fn pct(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        (part as f64 / whole as f64 * 100.0).round() as u32
    }
}

pub fn work_order_metrics(orders: &[WorkOrder]) -> WorkOrderMetrics {
    let total = orders.len();
    let completed = orders
        .iter()
        .filter(|o| o.status.eq_ignore_ascii_case("completed"))
        .count();
    let pending = orders
        .iter()
        .filter(|o| {
            PENDING_STATUSES
                .iter()
                .any(|s| o.status.eq_ignore_ascii_case(s))
        })
        .count();

    WorkOrderMetrics {
        total,
        completed,
        pending,
        completion_rate: pct(completed, total),
    }
}

pub fn team_metrics(users: &[User]) -> TeamMetrics {
    TeamMetrics {
        total: users.len(),
        drivers: users.iter().filter(|u| u.is_driver).count(),
        hipaa_certified: users.iter().filter(|u| u.hipaa_certified).count(),
    }
}

/// Count deliveries scheduled within the trailing window ending at `now`
///
/// Events without a scheduled date are excluded. Only the lower bound is
/// enforced: an event dated exactly `now - 7 days` counts, and so does one
/// dated in the future.
pub fn recent_delivery_count(events: &[DeliveryEvent], now: DateTime<Utc>) -> usize {
    let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
    events
        .iter()
        .filter(|e| e.scheduled_date.is_some_and(|d| d >= cutoff))
        .count()
}

/// Derive quick stats from the work orders and the already-computed team total
pub fn quick_stats(orders: &[WorkOrder], team: &TeamMetrics) -> QuickStats {
    let active_clients = orders
        .iter()
        .filter(|o| o.client_id.is_some_and(|id| !id.is_nil()))
        .count();

    let avg_order_size_cords = if orders.is_empty() {
        0.0
    } else {
        let total_cords: f64 = orders
            .iter()
            .map(|o| o.delivery_size_cords.unwrap_or(0.0))
            .sum();
        (total_cords / orders.len() as f64 * 10.0).round() / 10.0
    };

    QuickStats {
        active_clients,
        avg_order_size_cords,
        driver_utilization_pct: pct(team.drivers, team.total),
    }
}

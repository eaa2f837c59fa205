//! Record types for the four dashboard collections
//!
//! These are read-only snapshots supplied by the data-loading side
//! (the desktop app's sqlite layer). The dashboard never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Physical stock item (firewood cords, bar oil, helmets, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub unit: String,
    pub quantity_on_hand: f64,
    pub reorder_threshold: f64,
    pub reorder_amount: Option<f64>,
    pub notes: Option<String>,
}

/// Scheduled delivery or service task
///
/// `status` is free text from the loading side; comparisons are
/// case-insensitive ("Completed" and "completed" mean the same thing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: Uuid,
    pub status: String,
    pub client_id: Option<Uuid>,
    pub delivery_size_cords: Option<f64>,
    pub scheduled_date: Option<DateTime<Utc>>,
}

/// Volunteer or staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub is_driver: bool,
    pub hipaa_certified: bool,
}

/// Calendar event tied to a delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryEvent {
    pub id: Uuid,
    pub title: String,
    pub scheduled_date: Option<DateTime<Utc>>,
}

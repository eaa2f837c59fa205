//! Data store modules for dashboard snapshots

pub mod records;
pub mod snapshots;

pub use records::{DeliveryEvent, InventoryItem, User, WorkOrder};
pub use snapshots::SnapshotStore;

//! In-memory snapshot store - the boundary with the data-loading side
//!
//! Each collection is held as an immutable `Arc<Vec<_>>` and replaced
//! wholesale when new data arrives. Readers clone the `Arc`, so a render
//! pass always sees a consistent snapshot, and the dashboard memos can
//! key their caches on the `Arc`'s identity.

use std::sync::Arc;

use parking_lot::RwLock;

use super::records::{DeliveryEvent, InventoryItem, User, WorkOrder};

/// One swap-on-write collection slot
#[derive(Debug)]
struct Slot<T>(RwLock<Arc<Vec<T>>>);

impl<T> Slot<T> {
    fn new() -> Self {
        Self(RwLock::new(Arc::new(Vec::new())))
    }

    fn get(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.0.read())
    }

    fn replace(&self, items: Vec<T>) -> usize {
        let count = items.len();
        *self.0.write() = Arc::new(items);
        count
    }
}

/// Holds the current snapshot of all four dashboard collections
#[derive(Debug)]
pub struct SnapshotStore {
    inventory: Slot<InventoryItem>,
    work_orders: Slot<WorkOrder>,
    users: Slot<User>,
    deliveries: Slot<DeliveryEvent>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            inventory: Slot::new(),
            work_orders: Slot::new(),
            users: Slot::new(),
            deliveries: Slot::new(),
        }
    }

    pub fn inventory(&self) -> Arc<Vec<InventoryItem>> {
        self.inventory.get()
    }

    pub fn work_orders(&self) -> Arc<Vec<WorkOrder>> {
        self.work_orders.get()
    }

    pub fn users(&self) -> Arc<Vec<User>> {
        self.users.get()
    }

    pub fn deliveries(&self) -> Arc<Vec<DeliveryEvent>> {
        self.deliveries.get()
    }

    /// Replace the inventory snapshot, returning the new count
    pub fn replace_inventory(&self, items: Vec<InventoryItem>) -> usize {
        self.inventory.replace(items)
    }

    pub fn replace_work_orders(&self, orders: Vec<WorkOrder>) -> usize {
        self.work_orders.replace(orders)
    }

    pub fn replace_users(&self, users: Vec<User>) -> usize {
        self.users.replace(users)
    }

    pub fn replace_deliveries(&self, events: Vec<DeliveryEvent>) -> usize {
        self.deliveries.replace(events)
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

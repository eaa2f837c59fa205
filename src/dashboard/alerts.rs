//! Low-inventory alerts

use serde::Serialize;
use uuid::Uuid;

use crate::store::InventoryItem;

/// A single restock warning for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryAlert {
    pub item_id: Uuid,
    pub name: String,
    pub message: String,
}

fn alert_for(item: &InventoryItem) -> InventoryAlert {
    let mut message = format!(
        "{} low: {:.1} {}",
        item.name, item.quantity_on_hand, item.unit
    );
    match item.reorder_amount {
        Some(amount) if amount != 0.0 => {
            message.push_str(&format!(" (reorder: {} {})", amount, item.unit));
        }
        _ => {}
    }

    InventoryAlert {
        item_id: item.id,
        name: item.name.clone(),
        message,
    }
}

/// Iterate alerts for every item at or below its reorder threshold
///
/// Lazy and restartable: each call re-walks the snapshot it was given.
pub fn low_inventory_alerts(
    items: &[InventoryItem],
) -> impl Iterator<Item = InventoryAlert> + '_ {
    items
        .iter()
        .filter(|i| i.quantity_on_hand <= i.reorder_threshold)
        .map(alert_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, qty: f64, threshold: f64, reorder: Option<f64>) -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: None,
            unit: "cords".to_string(),
            quantity_on_hand: qty,
            reorder_threshold: threshold,
            reorder_amount: reorder,
            notes: None,
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let items = vec![
            item("At threshold", 5.0, 5.0, None),
            item("Below", 3.5, 5.0, None),
            item("Above", 6.0, 5.0, None),
        ];
        let alerts: Vec<_> = low_inventory_alerts(&items).collect();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].name, "At threshold");
        assert_eq!(alerts[1].name, "Below");
    }

    #[test]
    fn message_formats_quantity_to_one_decimal() {
        let items = vec![item("Split Firewood", 3.5, 5.0, None)];
        let alerts: Vec<_> = low_inventory_alerts(&items).collect();
        assert_eq!(alerts[0].message, "Split Firewood low: 3.5 cords");
    }

    #[test]
    fn reorder_suggestion_appended_when_present() {
        let items = vec![item("Bar oil", 1.0, 4.0, Some(12.0))];
        let alerts: Vec<_> = low_inventory_alerts(&items).collect();
        assert_eq!(alerts[0].message, "Bar oil low: 1.0 cords (reorder: 12 cords)");
    }

    #[test]
    fn zero_reorder_amount_is_ignored() {
        let items = vec![item("Gas", 0.5, 2.0, Some(0.0))];
        let alerts: Vec<_> = low_inventory_alerts(&items).collect();
        assert_eq!(alerts[0].message, "Gas low: 0.5 cords");
    }

    #[test]
    fn empty_when_everything_is_stocked() {
        let items = vec![item("Helmets", 10.0, 2.0, None)];
        assert_eq!(low_inventory_alerts(&items).count(), 0);
    }

    #[test]
    fn iterator_restarts_from_the_same_snapshot() {
        let items = vec![item("Low", 1.0, 2.0, None)];
        assert_eq!(low_inventory_alerts(&items).count(), 1);
        assert_eq!(low_inventory_alerts(&items).count(), 1);
    }
}

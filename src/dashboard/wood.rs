//! Split/unsplit firewood classification
//!
//! Inventory names and categories are free text entered by volunteers, so
//! this is a heuristic classifier: lowercase-substring rules, first match
//! wins. Items that match no rule (chainsaws, bar oil, helmets) contribute
//! to neither bucket.

use serde::Serialize;

use crate::store::InventoryItem;

/// Total cords on hand, by processing state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WoodSummary {
    pub split: f64,
    pub unsplit: f64,
}

/// Which bucket a single item's quantity counts toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WoodClass {
    Split,
    Unsplit,
    NotWood,
}

fn classify(item: &InventoryItem) -> WoodClass {
    let name = item.name.to_lowercase();
    let category = item
        .category
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let unit = item.unit.to_lowercase();

    if name.contains("split")
        && (name.contains("firewood") || name.contains("wood"))
        && !name.contains("unsplit")
    {
        WoodClass::Split
    } else if category.contains("split") && !category.contains("unsplit") {
        WoodClass::Split
    } else if name.contains("unsplit") || name.contains("round") || name.contains("log") {
        WoodClass::Unsplit
    } else if category.contains("log") || category.contains("round") || category.contains("unsplit")
    {
        WoodClass::Unsplit
    } else if category == "wood" && unit.contains("cord") {
        // Ambiguous "wood" entries measured in cords default to split
        WoodClass::Split
    } else {
        WoodClass::NotWood
    }
}

/// Sum quantities into split/unsplit cords across the whole inventory
pub fn wood_summary(items: &[InventoryItem]) -> WoodSummary {
    items.iter().fold(WoodSummary::default(), |mut acc, item| {
        match classify(item) {
            WoodClass::Split => acc.split += item.quantity_on_hand,
            WoodClass::Unsplit => acc.unsplit += item.quantity_on_hand,
            WoodClass::NotWood => {}
        }
        acc
    })
}

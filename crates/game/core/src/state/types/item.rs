//! Party-shared consumables.

use std::collections::BTreeMap;

use strum::{Display, EnumIter};

/// Consumable item kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Restores HP to a living ally.
    Potion,
    /// Restores MP to a living ally.
    Ether,
    /// Revives a fallen ally at half HP.
    Phoenix,
}

impl ItemKind {
    pub const POTION_HEAL: u32 = 50;
    pub const ETHER_RESTORE: u32 = 30;
    pub const PHOENIX_REVIVE_RATIO: f64 = 0.5;

    /// True when the item may only target fallen allies.
    #[inline]
    pub fn targets_fallen(self) -> bool {
        matches!(self, ItemKind::Phoenix)
    }
}

/// Item stock shared by the whole party.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    stock: BTreeMap<ItemKind, u32>,
}

impl Inventory {
    pub fn new(stock: impl IntoIterator<Item = (ItemKind, u32)>) -> Self {
        Self {
            stock: stock.into_iter().collect(),
        }
    }

    /// The stock the party starts a standard encounter with.
    pub fn standard() -> Self {
        Self::new([
            (ItemKind::Potion, 3),
            (ItemKind::Ether, 2),
            (ItemKind::Phoenix, 1),
        ])
    }

    pub fn count(&self, item: ItemKind) -> u32 {
        self.stock.get(&item).copied().unwrap_or(0)
    }

    /// Items with at least one unit in stock, in a stable order.
    pub fn available(&self) -> impl Iterator<Item = ItemKind> + '_ {
        self.stock
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&item, _)| item)
    }

    /// Removes one unit of `item`. Returns `false` when out of stock.
    pub(crate) fn consume(&mut self, item: ItemKind) -> bool {
        match self.stock.get_mut(&item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_stops_at_zero() {
        let mut inventory = Inventory::new([(ItemKind::Phoenix, 1)]);
        assert!(inventory.consume(ItemKind::Phoenix));
        assert!(!inventory.consume(ItemKind::Phoenix));
        assert_eq!(inventory.count(ItemKind::Phoenix), 0);
        assert_eq!(inventory.available().count(), 0);
    }

    #[test]
    fn standard_stock() {
        let inventory = Inventory::standard();
        assert_eq!(inventory.count(ItemKind::Potion), 3);
        assert_eq!(inventory.count(ItemKind::Ether), 2);
        assert_eq!(inventory.count(ItemKind::Phoenix), 1);
    }
}

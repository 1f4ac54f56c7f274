//! Shopping basket totals.
//!
//! Independent of the rover; kept as a standalone utility.

use serde::{Deserialize, Serialize};

/// A line in a basket: a unit price and how many units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub unit_price: f64,
    pub quantity: u32,
}

impl Item {
    pub fn new(unit_price: f64, quantity: u32) -> Self {
        Self {
            unit_price,
            quantity,
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// A fixed set of items.
///
/// # Example
///
/// ```rust
/// use grid_rover::basket::{Item, ShoppingBasket};
///
/// let basket = ShoppingBasket::new(vec![Item::new(100.0, 2), Item::new(200.0, 1)]);
/// assert_eq!(basket.total(), 400.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingBasket {
    items: Vec<Item>,
}

impl ShoppingBasket {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of item subtotals; `0.0` for an empty basket.
    pub fn total(&self) -> f64 {
        self.items.iter().map(Item::subtotal).sum()
    }
}

impl FromIterator<Item> for ShoppingBasket {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

//! Stock counting for a single catalogue item.
//!
//! Independent of the rover; kept as a standalone utility.

use thiserror::Error;

/// A purchase asked for more units than are in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough stock to make the purchase: requested {requested}, available {available}")]
pub struct InsufficientStockError {
    pub requested: u32,
    pub available: u32,
}

/// A compact disc with a stock count.
///
/// # Example
///
/// ```rust
/// use grid_rover::inventory::CompactDisc;
///
/// let mut cd = CompactDisc::new(10);
/// cd.buy(1).unwrap();
/// assert_eq!(cd.stock_count(), 9);
///
/// assert!(CompactDisc::new(0).buy(1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactDisc {
    stock: u32,
}

impl CompactDisc {
    pub fn new(initial_stock: u32) -> Self {
        Self {
            stock: initial_stock,
        }
    }

    pub fn stock_count(&self) -> u32 {
        self.stock
    }

    /// Take `quantity` units out of stock.
    ///
    /// Fails without touching the stock if there are fewer than `quantity`
    /// units left.
    pub fn buy(&mut self, quantity: u32) -> Result<(), InsufficientStockError> {
        self.stock = self
            .stock
            .checked_sub(quantity)
            .ok_or(InsufficientStockError {
                requested: quantity,
                available: self.stock,
            })?;
        Ok(())
    }
}

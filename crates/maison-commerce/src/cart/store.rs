//! The cart store: ordered line items keyed by product id, plus the
//! drawer-visibility flag.

use crate::cart::CartTotals;
use crate::catalog::{Product, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One entry in the cart: a product snapshot plus a quantity.
///
/// The snapshot is taken at insertion, so later catalog changes do not
/// affect existing lines. Identity is the product id; the store holds at
/// most one line per id. Quantity is always >= 1: a line that would reach
/// zero is removed instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product as it looked when first added.
    pub product: Product,
    /// Units of this product, >= 1.
    pub quantity: i64,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price times quantity for this line, exact cents.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// Shopping cart state.
///
/// Lines keep insertion order for display. None of the operations can
/// fail: invalid inputs are normalized (no-op or removal) by design, so
/// callers need no error handling.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    is_open: bool,
}

impl CartStore {
    /// Create an empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart drawer is visible.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line for a product, if present.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Add one unit of a product: increments an existing line, or appends
    /// a new line with quantity 1 at the end of display order.
    pub fn add_item(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::new(product));
        }
    }

    /// Remove the line for a product. An absent id is a no-op.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity <= 0 behaves as `remove_item`. An unknown id is a no-op:
    /// only `add_item` creates lines.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Show the cart drawer.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the cart drawer.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Flip the drawer visibility.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Sum of line totals, exact cents. Rounding happens only at display.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total units across all lines, not the number of distinct lines.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Derived totals snapshot for display.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal(),
            item_count: self.item_count(),
            unique_lines: self.unique_line_count(),
        }
    }
}

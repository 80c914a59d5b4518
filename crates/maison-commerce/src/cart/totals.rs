//! Derived cart totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals derived from the cart lines, computed on demand and never
/// stored redundantly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of price times quantity over all lines, exact cents.
    pub subtotal: Money,
    /// Total units across all lines.
    pub item_count: i64,
    /// Number of distinct lines.
    pub unique_lines: usize,
}

impl CartTotals {
    /// Subtotal formatted for display (e.g., "$25.50").
    pub fn subtotal_display(&self) -> String {
        self.subtotal.display()
    }
}

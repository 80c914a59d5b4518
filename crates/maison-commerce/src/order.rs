//! Client-local order receipt.
//!
//! The storefront echoes a confirmation after "checkout" without any
//! payment or order-management round-trip: a snapshot of the cart, a
//! generated order number, and a placement timestamp.

use crate::cart::{CartLine, CartStore};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated, human-readable order number (e.g., "MSN-1A2B3C4D").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Generate a fresh order number.
    pub fn generate() -> Self {
        Self(format!("MSN-{:08X}", generate_suffix() as u32))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client-local echo of a placed order.
///
/// Snapshots the cart at placement; later cart mutations do not affect
/// the receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Generated order number.
    pub number: OrderNumber,
    /// Cart lines as they were at placement.
    pub lines: Vec<CartLine>,
    /// Subtotal at placement.
    pub total: Money,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

impl OrderReceipt {
    /// Snapshot the given cart. Returns `None` for an empty cart.
    pub fn from_cart(cart: &CartStore) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }
        Some(Self {
            number: OrderNumber::generate(),
            lines: cart.lines().to_vec(),
            total: cart.subtotal(),
            placed_at: current_timestamp(),
        })
    }

    /// Total units across the receipt's lines.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Combine a nanosecond timestamp with an atomic counter for uniqueness
/// within a session.
fn generate_suffix() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    (timestamp as u64) ^ counter.rotate_left(17)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

//! Shopping cart module.
//!
//! Contains the cart store, its line items, and derived totals.

mod store;
mod totals;

pub use store::{CartLine, CartStore};
pub use totals::CartTotals;

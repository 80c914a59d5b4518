//! Commerce domain core for Maison.
//!
//! This crate holds the state that has real invariants in a storefront
//! client, kept free of I/O:
//!
//! - **Catalog**: the product list, category vocabulary, filter criteria,
//!   the derived filtered view, and the remote fetch lifecycle
//! - **Cart**: line items with quantity management, drawer visibility,
//!   and derived totals
//! - **Money**: cents-based exact arithmetic with a decimal wire form
//! - **Order**: the client-local receipt echoed after checkout
//!
//! Both stores are pure state machines: every operation is a synchronous,
//! total function, and the derived views (`filtered_items`, `subtotal`,
//! `item_count`) are always consistent with the primary state. The
//! asynchronous fetch lifecycle is modeled as data (`FetchStatus`) so that
//! fetch completion is just another incoming transition.
//!
//! # Example
//!
//! ```
//! use maison_commerce::prelude::*;
//!
//! let mut catalog = CatalogStore::new();
//! catalog.fetch_started();
//! assert_eq!(catalog.status(), FetchStatus::Loading);
//!
//! let mut cart = CartStore::new();
//! assert!(cart.subtotal().is_zero());
//! ```

pub mod cart;
pub mod catalog;
pub mod money;
pub mod order;

pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{CartLine, CartStore, CartTotals};
    pub use crate::catalog::{
        CatalogStore, FetchStatus, Product, ProductId, Rating, ALL_CATEGORIES,
    };
    pub use crate::money::Money;
    pub use crate::order::{OrderNumber, OrderReceipt};
}

//! Storefront composition layer for Maison.
//!
//! The domain stores in `maison-commerce` are independent leaves; this
//! crate composes them one layer up. A [`Storefront`] session owns both
//! stores and the catalog client, funnels every mutation through a
//! single action queue, and drives the asynchronous catalog fetches whose
//! resolutions come back as ordinary queued actions.
//!
//! # Example
//!
//! ```rust,ignore
//! use maison_core::prelude::*;
//!
//! let mut shop = Storefront::new(StorefrontConfig::default());
//! shop.request_products();
//! shop.request_categories();
//!
//! // ... later, on the UI tick:
//! shop.process_pending();
//! for product in shop.catalog().filtered_items() {
//!     println!("{} - {}", product.title, product.price);
//! }
//! ```

pub mod action;
pub mod config;
mod storefront;

pub use action::{Action, CartAction, CatalogAction};
pub use config::StorefrontConfig;
pub use storefront::{Dispatcher, Storefront};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::action::{Action, CartAction, CatalogAction};
    pub use crate::config::StorefrontConfig;
    pub use crate::storefront::{Dispatcher, Storefront};

    pub use maison_commerce::prelude::*;
    pub use maison_data::{CatalogClient, FetchError};
}

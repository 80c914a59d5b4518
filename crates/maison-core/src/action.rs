//! The dispatch vocabulary: every store mutation as a discrete action.
//!
//! Funneling all state changes through these actions gives one seam for
//! serialization, logging, or replay, and makes the atomicity contract
//! enforceable: an action is applied in full or not at all.

use maison_commerce::catalog::{Product, ProductId};

/// Catalog store actions.
///
/// The three fetch variants carry the resolution of asynchronous work;
/// the rest are synchronous criteria changes.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// A product fetch went out.
    FetchStarted,
    /// A product fetch resolved with the full catalog.
    ProductsLoaded(Vec<Product>),
    /// A product fetch failed with a descriptive message.
    FetchFailed(String),
    /// The category fetch resolved with the vocabulary.
    CategoriesLoaded(Vec<String>),
    /// Select the active category filter.
    SetCategory(String),
    /// Set the active search text.
    SetSearchQuery(String),
}

/// Cart store actions.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one unit of a product.
    AddItem(Product),
    /// Remove the line for a product.
    RemoveItem(ProductId),
    /// Set the quantity of an existing line; <= 0 removes it.
    SetQuantity {
        product_id: ProductId,
        quantity: i64,
    },
    /// Show the cart drawer.
    Open,
    /// Hide the cart drawer.
    Close,
    /// Flip the drawer visibility.
    Toggle,
}

/// A discrete, atomically-applied state transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Catalog(CatalogAction),
    Cart(CartAction),
}

impl From<CatalogAction> for Action {
    fn from(action: CatalogAction) -> Self {
        Action::Catalog(action)
    }
}

impl From<CartAction> for Action {
    fn from(action: CartAction) -> Self {
        Action::Cart(action)
    }
}

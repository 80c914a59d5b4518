//! The storefront session: both stores behind one mutation point.

use maison_commerce::cart::CartStore;
use maison_commerce::catalog::{CatalogStore, Product};
use maison_commerce::order::OrderReceipt;
use maison_data::CatalogClient;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::action::{Action, CartAction, CatalogAction};
use crate::config::StorefrontConfig;

/// Cheap-clone handle for enqueueing actions onto the session's
/// mutation queue.
///
/// Consumers hold this for dispatch access; read access goes through
/// [`Storefront::catalog`] and [`Storefront::cart`].
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    /// Enqueue an action. Silently dropped if the session is gone.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let _ = self.tx.send(action.into());
    }
}

/// A storefront session.
///
/// Owns the catalog store, the cart store, and the single queue through
/// which every deferred mutation travels. Actions are applied one at a
/// time on the caller's thread, so no two transitions interleave
/// mid-mutation; fetch resolutions enqueue and are applied when drained,
/// with the last resolution winning. Cancellation is not supported.
pub struct Storefront {
    catalog: CatalogStore,
    cart: CartStore,
    client: CatalogClient,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Action>,
}

impl Storefront {
    /// Create a session with empty stores.
    pub fn new(config: StorefrontConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            catalog: CatalogStore::new(),
            cart: CartStore::new(),
            client: CatalogClient::with_options(config.api_base_url, config.request_timeout),
            tx,
            rx,
        }
    }

    /// Read-only view of the catalog store.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Read-only view of the cart store.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Handle for enqueueing actions from consumers.
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher {
            tx: self.tx.clone(),
        }
    }

    /// Apply one action atomically.
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        debug!(?action, "dispatch");
        match action {
            Action::Catalog(action) => self.apply_catalog(action),
            Action::Cart(action) => self.apply_cart(action),
        }
    }

    fn apply_catalog(&mut self, action: CatalogAction) {
        match action {
            CatalogAction::FetchStarted => self.catalog.fetch_started(),
            CatalogAction::ProductsLoaded(items) => self.catalog.products_loaded(items),
            CatalogAction::FetchFailed(message) => {
                warn!(%message, "catalog fetch failed");
                self.catalog.fetch_failed(message);
            }
            CatalogAction::CategoriesLoaded(categories) => {
                self.catalog.categories_loaded(categories)
            }
            CatalogAction::SetCategory(category) => self.catalog.set_category(category),
            CatalogAction::SetSearchQuery(query) => self.catalog.set_search_query(query),
        }
    }

    fn apply_cart(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem(product) => self.cart.add_item(product),
            CartAction::RemoveItem(product_id) => self.cart.remove_item(product_id),
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => self.cart.set_quantity(product_id, quantity),
            CartAction::Open => self.cart.open(),
            CartAction::Close => self.cart.close(),
            CartAction::Toggle => self.cart.toggle(),
        }
    }

    /// Start a product catalog fetch.
    ///
    /// Marks the store `Loading` synchronously; the resolution arrives as
    /// a queued action. Overlapping fetches are legal and the last
    /// resolution to drain wins; there is no request fencing.
    pub fn request_products(&mut self) {
        self.dispatch(CatalogAction::FetchStarted);
        info!("fetching product catalog");
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let action = match client.products().await {
                Ok(items) => CatalogAction::ProductsLoaded(items),
                Err(err) => CatalogAction::FetchFailed(format!("failed to fetch products: {err}")),
            };
            let _ = tx.send(action.into());
        });
    }

    /// Start a category vocabulary fetch.
    ///
    /// Its lifecycle is independent of the product fetch: failure is
    /// logged and leaves the product `status` untouched.
    pub fn request_categories(&mut self) {
        info!("fetching category vocabulary");
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match client.categories().await {
                Ok(categories) => {
                    let _ = tx.send(CatalogAction::CategoriesLoaded(categories).into());
                }
                Err(err) => warn!(%err, "failed to fetch categories"),
            }
        });
    }

    /// Add a product to the cart and open the drawer, the way the
    /// storefront's add-to-cart affordance behaves. The coupling lives
    /// here, one layer above both stores.
    pub fn add_to_cart(&mut self, product: Product) {
        self.dispatch(CartAction::AddItem(product));
        self.dispatch(CartAction::Open);
    }

    /// Place a client-local order: snapshot the cart into a receipt,
    /// clear it, and close the drawer. Returns `None` for an empty cart.
    pub fn place_order(&mut self) -> Option<OrderReceipt> {
        let receipt = OrderReceipt::from_cart(&self.cart)?;
        info!(order = %receipt.number, total = %receipt.total, "order placed");
        self.cart.clear();
        self.cart.close();
        Some(receipt)
    }

    /// Apply all queued actions without blocking. Returns how many were
    /// applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action);
            applied += 1;
        }
        applied
    }

    /// Wait for the next queued action and apply it.
    pub async fn process_next(&mut self) {
        if let Some(action) = self.rx.recv().await {
            self.dispatch(action);
        }
    }
}

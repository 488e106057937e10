//! Cart operations over the blob store.

use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;
use rand::Rng;
use thiserror::Error;

use super::catalog::normalize_product_id;
use super::{Cart, CartItem, CartStore, ProductCatalog, StoreError};

/// Storage key the cart snapshot lives under.
pub const CART_STORAGE_KEY: &str = "storefront_cart";

/// Errors raised by cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The incoming line is missing required product data.
    #[error("invalid product data: {0}")]
    InvalidProduct(&'static str),
    /// A quantity update referenced a product with no cart line.
    #[error("product `{0}` is not in the cart")]
    UnknownProduct(String),
    /// The snapshot could not be encoded for storage.
    #[error("cart snapshot could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    /// The store rejected a read or write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Cart CRUD over a [`CartStore`] backend.
///
/// Every operation loads the snapshot, mutates it, and writes it back, so the
/// store is always the source of truth and concurrent pages see each other's
/// changes on their next operation. A snapshot that fails to parse is
/// discarded and replaced with a fresh cart.
///
/// Randomness for session ids is injected per call, never ambient.
///
/// # Examples
///
/// ```
/// use storefront_core::cart::{CartItem, CartManager, MemoryStore};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut manager = CartManager::new(MemoryStore::new());
///
/// let cart = manager.add(&mut rng, CartItem::new("cacao", "Cacao", 33.0))?;
/// assert_eq!(cart.item_count(), 1);
///
/// let cart = manager.add(&mut rng, CartItem::new("cacao", "Cacao", 33.0))?;
/// assert_eq!(cart.items.len(), 1);
/// assert_eq!(cart.item_count(), 2);
/// # Ok::<(), storefront_core::cart::CartError>(())
/// ```
#[derive(Debug)]
pub struct CartManager<S: CartStore> {
    store: S,
    catalog: Option<ProductCatalog>,
}

impl<S: CartStore> CartManager<S> {
    /// Creates a manager over the given store, without a catalog.
    pub fn new(store: S) -> Self {
        Self {
            store,
            catalog: None,
        }
    }

    /// Attaches a product catalog; line items are kept in sync with it.
    pub fn with_catalog(mut self, catalog: ProductCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    fn normalize_id(&self, raw: &str) -> Option<String> {
        match &self.catalog {
            Some(catalog) => catalog.normalize_id(raw),
            None => normalize_product_id(raw),
        }
    }

    /// Re-syncs a line against canonical catalog data. Name, price, and image
    /// follow the catalog; weight is only backfilled when the line has none.
    fn sync_with_catalog(&self, item: &mut CartItem) -> bool {
        let Some(catalog) = &self.catalog else {
            return false;
        };
        let Some(product) = catalog.get(&item.product_id) else {
            return false;
        };
        let mut changed = false;
        if item.name != product.name {
            item.name = product.name.clone();
            changed = true;
        }
        if item.price != product.price {
            item.price = product.price;
            changed = true;
        }
        if !product.image.is_empty() && item.image != product.image {
            item.image = product.image.clone();
            changed = true;
        }
        if !product.checkout_price_id.is_empty()
            && item.checkout_price_id != product.checkout_price_id
        {
            item.checkout_price_id = product.checkout_price_id.clone();
            changed = true;
        }
        if item.weight_oz == 0.0 && product.weight_oz > 0.0 {
            item.weight_oz = product.weight_oz;
            changed = true;
        }
        changed
    }

    /// Loads the current snapshot, or a fresh empty cart if none is stored or
    /// the stored blob cannot be read.
    pub fn cart<R: Rng>(&self, rng: &mut R) -> Result<Cart, CartError> {
        match self.store.get(CART_STORAGE_KEY)? {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(cart) => Ok(cart),
                Err(err) => {
                    warn!("discarding unreadable cart snapshot: {err}");
                    Ok(Cart::new(rng, Self::now()))
                }
            },
            None => Ok(Cart::new(rng, Self::now())),
        }
    }

    fn save(&mut self, cart: &mut Cart) -> Result<(), CartError> {
        cart.updated_at = Self::now();
        let blob = serde_json::to_string(cart)?;
        self.store.put(CART_STORAGE_KEY, &blob)?;
        Ok(())
    }

    /// Adds a line to the cart, merging into an existing line for the same
    /// (normalized) product. A zero quantity counts as one.
    pub fn add<R: Rng>(&mut self, rng: &mut R, item: CartItem) -> Result<Cart, CartError> {
        let id = self
            .normalize_id(&item.product_id)
            .ok_or(CartError::InvalidProduct("product id must not be blank"))?;
        if item.name.trim().is_empty() {
            return Err(CartError::InvalidProduct("product name must not be blank"));
        }
        if !(item.price.is_finite() && item.price > 0.0) {
            return Err(CartError::InvalidProduct("product price must be positive"));
        }

        let mut cart = self.cart(rng)?;
        let quantity = item.quantity.max(1);
        let mut line = item;
        line.product_id = id.clone();
        line.quantity = quantity;

        match cart.position(&id) {
            Some(pos) => {
                let existing = &mut cart.items[pos];
                existing.quantity += quantity;
                if existing.weight_oz == 0.0 {
                    existing.weight_oz = line.weight_oz;
                }
                if existing.image.is_empty() {
                    existing.image = line.image;
                }
                self.sync_with_catalog(&mut cart.items[pos]);
            }
            None => {
                self.sync_with_catalog(&mut line);
                cart.items.push(line);
            }
        }

        self.save(&mut cart)?;
        Ok(cart)
    }

    /// Removes the line for a product. Removing an absent product is a no-op.
    pub fn remove<R: Rng>(&mut self, rng: &mut R, product_id: &str) -> Result<Cart, CartError> {
        let id = self
            .normalize_id(product_id)
            .ok_or(CartError::InvalidProduct("product id must not be blank"))?;
        let mut cart = self.cart(rng)?;
        cart.items.retain(|i| i.product_id != id);
        self.save(&mut cart)?;
        Ok(cart)
    }

    /// Sets the quantity for a product's line. Zero removes the line.
    pub fn update_quantity<R: Rng>(
        &mut self,
        rng: &mut R,
        product_id: &str,
        quantity: u32,
    ) -> Result<Cart, CartError> {
        if quantity == 0 {
            return self.remove(rng, product_id);
        }
        let id = self
            .normalize_id(product_id)
            .ok_or(CartError::InvalidProduct("product id must not be blank"))?;
        let mut cart = self.cart(rng)?;
        let pos = cart
            .position(&id)
            .ok_or_else(|| CartError::UnknownProduct(id))?;
        cart.items[pos].quantity = quantity;
        self.save(&mut cart)?;
        Ok(cart)
    }

    /// Empties the cart and starts a fresh session.
    pub fn clear<R: Rng>(&mut self, rng: &mut R) -> Result<Cart, CartError> {
        let mut cart = Cart::new(rng, Self::now());
        self.save(&mut cart)?;
        Ok(cart)
    }

    /// Total number of units in the stored cart.
    pub fn item_count<R: Rng>(&self, rng: &mut R) -> Result<u32, CartError> {
        Ok(self.cart(rng)?.item_count())
    }

    /// Subtotal of the stored cart.
    pub fn subtotal<R: Rng>(&self, rng: &mut R) -> Result<f64, CartError> {
        Ok(self.cart(rng)?.subtotal())
    }

    /// Repairs legacy snapshots: re-normalizes ids, drops lines whose id
    /// normalizes to nothing, merges duplicate lines, and re-syncs against the
    /// catalog. Saves only when something actually changed.
    pub fn normalize<R: Rng>(&mut self, rng: &mut R) -> Result<Cart, CartError> {
        let mut cart = self.cart(rng)?;
        let before = cart.items.clone();

        let mut merged: Vec<CartItem> = Vec::with_capacity(cart.items.len());
        for mut item in cart.items.drain(..) {
            let Some(id) = self.normalize_id(&item.product_id) else {
                continue;
            };
            item.product_id = id;
            match merged.iter_mut().find(|m| m.product_id == item.product_id) {
                Some(existing) => existing.quantity += item.quantity.max(1),
                None => merged.push(item),
            }
        }
        for item in &mut merged {
            self.sync_with_catalog(item);
        }
        cart.items = merged;

        if cart.items != before {
            self.save(&mut cart)?;
        }
        Ok(cart)
    }

    /// Backfills missing line weights from the catalog, normalizing first.
    pub fn update_weights<R: Rng>(&mut self, rng: &mut R) -> Result<Cart, CartError> {
        let mut cart = self.normalize(rng)?;
        let Some(catalog) = &self.catalog else {
            return Ok(cart);
        };
        let mut changed = false;
        for item in &mut cart.items {
            if item.weight_oz == 0.0 {
                if let Some(product) = catalog.get(&item.product_id) {
                    if product.weight_oz > 0.0 {
                        item.weight_oz = product.weight_oz;
                        changed = true;
                    }
                }
            }
        }
        if changed {
            self.save(&mut cart)?;
        }
        Ok(cart)
    }
}

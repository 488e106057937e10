//! Cart snapshot and line-item types.

use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the random session-id suffix.
const SESSION_SUFFIX_LEN: usize = 9;

/// Builds a fresh session id of the form `cart_<unix-seconds>_<suffix>`.
pub fn new_session_id<R: Rng>(rng: &mut R, now: u64) -> String {
    let suffix: String = (0..SESSION_SUFFIX_LEN)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect();
    format!("cart_{now}_{suffix}")
}

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Normalized product identifier.
    pub product_id: String,
    /// Display name at the time the line was added (re-synced against the
    /// catalog when one is available).
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Number of units.
    pub quantity: u32,
    /// Product image path, if any.
    #[serde(default)]
    pub image: String,
    /// Price reference for the external checkout provider.
    #[serde(default)]
    pub checkout_price_id: String,
    /// Shipping weight in ounces.
    #[serde(default)]
    pub weight_oz: f64,
}

impl CartItem {
    /// Creates a one-unit line with no image, price reference, or weight.
    pub fn new(product_id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            price,
            quantity: 1,
            image: String::new(),
            checkout_price_id: String::new(),
            weight_oz: 0.0,
        }
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Price times quantity.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A cart snapshot, the unit stored in the blob store.
///
/// # Examples
///
/// ```
/// use storefront_core::cart::{Cart, CartItem};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut cart = Cart::new(&mut rng, 1_700_000_000);
/// assert!(cart.session_id.starts_with("cart_1700000000_"));
///
/// cart.items.push(CartItem::new("cacao", "Cacao", 33.0).with_quantity(2));
/// assert_eq!(cart.item_count(), 2);
/// assert_eq!(cart.subtotal(), 66.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Opaque per-cart session identifier.
    pub session_id: String,
    /// Cart lines, in the order products were first added.
    pub items: Vec<CartItem>,
    /// Unix seconds when the cart was created.
    pub created_at: u64,
    /// Unix seconds of the last saved mutation.
    pub updated_at: u64,
}

impl Cart {
    /// Creates an empty cart with a fresh session id.
    pub fn new<R: Rng>(rng: &mut R, now: u64) -> Self {
        Self {
            session_id: new_session_id(rng, now),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Returns `true` if the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the line for a product id, if present.
    pub(crate) fn position(&self, product_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.product_id == product_id)
    }
}

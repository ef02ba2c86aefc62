//! Purchase gate and partner store links.

use desk_core::entities::{CandidateProduct, CartItem};
use desk_core::responses::{PurchaseLine, PurchaseLink, PurchasePlan};

use crate::cart::Cart;
use crate::error::ReviewError;
use crate::review::compute_score;

/// Minimum compatibility score required to see purchase links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseGate {
    min_score: u8,
}

impl PurchaseGate {
    pub const DEFAULT_MIN_SCORE: u8 = 100;

    /// Thresholds above 100 are clamped to 100.
    #[must_use]
    pub fn new(min_score: u8) -> Self {
        Self {
            min_score: min_score.min(100),
        }
    }

    #[must_use]
    pub const fn min_score(self) -> u8 {
        self.min_score
    }

    #[must_use]
    pub const fn allows(self, score: u8) -> bool {
        score >= self.min_score
    }
}

impl Default for PurchaseGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_SCORE)
    }
}

struct Store {
    platform: &'static str,
    search_url: &'static str,
    commission_pct: f64,
}

/// Brand stores, matched by substring of the product name.
const OFFICIAL_STORES: [(&str, Store); 3] = [
    (
        "Herman Miller",
        Store {
            platform: "Herman Miller Official",
            search_url: "https://store.hermanmiller.com/search?lang=en_US&q=",
            commission_pct: 8.0,
        },
    ),
    (
        "Keychron",
        Store {
            platform: "Keychron Official",
            search_url: "https://www.keychron.com/search?q=",
            commission_pct: 10.0,
        },
    ),
    (
        "IKEA",
        Store {
            platform: "IKEA Official",
            search_url: "https://www.ikea.com/search/?q=",
            commission_pct: 3.0,
        },
    ),
];

const MARKETPLACES: [Store; 2] = [
    Store {
        platform: "Amazon",
        search_url: "https://www.amazon.com/s?k=",
        commission_pct: 5.0,
    },
    Store {
        platform: "JD.com",
        search_url: "https://search.jd.com/Search?keyword=",
        commission_pct: 4.0,
    },
];

fn link(store: &Store, product_name: &str) -> PurchaseLink {
    PurchaseLink {
        platform: store.platform.to_string(),
        url: format!("{}{}", store.search_url, urlencoding::encode(product_name)),
        commission_pct: store.commission_pct,
    }
}

/// Where to buy a product: the brand's own store first when known, then
/// marketplaces.
#[must_use]
pub fn purchase_links(product_name: &str) -> Vec<PurchaseLink> {
    let official = OFFICIAL_STORES
        .iter()
        .find(|(brand, _)| product_name.contains(brand))
        .map(|(_, store)| link(store, product_name));
    official
        .into_iter()
        .chain(MARKETPLACES.iter().map(|store| link(store, product_name)))
        .collect()
}

/// Build the purchase plan if the list passes the gate.
///
/// # Errors
///
/// [`ReviewError::PurchaseBlocked`] when the score is below the gate.
pub fn proceed_to_purchase(
    products: &[CandidateProduct],
    gate: PurchaseGate,
) -> Result<PurchasePlan, ReviewError> {
    let score = compute_score(products);
    if !gate.allows(score) {
        return Err(ReviewError::PurchaseBlocked {
            score,
            required: gate.min_score(),
        });
    }

    let mut cart = Cart::new();
    for product in products {
        cart.add(CartItem::from(product));
    }

    Ok(PurchasePlan {
        lines: products
            .iter()
            .map(|product| PurchaseLine {
                product: product.clone(),
                links: purchase_links(&product.name),
            })
            .collect(),
        item_count: cart.item_count(),
        total_price: cart.total(),
    })
}

//! Output rows of the Vivino product feed.

/// Every listed product is sold per single bottle.
pub const BOTTLE_COUNT: &str = "1";

pub const BOTTLE_SIZE: &str = "750ml";

/// Inventory reported when the store does not track stock for a product.
pub const DEFAULT_INVENTORY_COUNT: i64 = 200;

/// One `<product>` entry of the feed.
///
/// `product_name` is `None` when the display name could not be derived; the
/// row is still emitted without a name element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRow {
    pub product_name: Option<String>,
    pub price: String,
    pub link: String,
    pub inventory_count: i64,
}

impl FeedRow {
    #[must_use]
    pub fn new(
        product_name: Option<String>,
        price: String,
        link: String,
        stock_quantity: Option<i64>,
    ) -> Self {
        Self {
            product_name,
            price,
            link,
            inventory_count: stock_quantity.unwrap_or(DEFAULT_INVENTORY_COUNT),
        }
    }

    #[must_use]
    pub fn bottle_count(&self) -> &'static str {
        BOTTLE_COUNT
    }

    #[must_use]
    pub fn bottle_size(&self) -> &'static str {
        BOTTLE_SIZE
    }
}

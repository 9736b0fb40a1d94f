//! Inclusion rules and price resolution for feed products.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::types::Product;

/// Name fragments marking gift boxes, glassware and tasting packages rather
/// than bottles. Matched case-sensitively.
pub const BANNED_NAME_TOKENS: [&str; 7] = [
    "Wijnkistje",
    "Wijnglas",
    "wijnzak",
    "Fijnproeverspakket",
    "proef",
    "wijnglas",
    "wijnglazen",
];

/// Meta key that opts a product out of the feed when set to `"yes"`.
pub const EXCLUDE_META_KEY: &str = "_exclude_vivino";

/// Meta key holding a feed-specific price that overrides `regular_price`.
pub const PRICE_META_KEY: &str = "_vivino_pricing";

/// Exclusive upper bound on `regular_price`, in store currency.
const MAX_PRICE_UNITS: i64 = 15;

/// Why a product was left out of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    NotVisible,
    NotPublished,
    PriceOutOfRange(Decimal),
    BannedName(&'static str),
    OptedOut,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::NotVisible => write!(f, "catalog visibility is not \"visible\""),
            Exclusion::NotPublished => write!(f, "status is not \"publish\""),
            Exclusion::PriceOutOfRange(price) => write!(f, "price {price} outside (0, 15)"),
            Exclusion::BannedName(token) => write!(f, "name contains \"{token}\""),
            Exclusion::OptedOut => write!(f, "{EXCLUDE_META_KEY} is set"),
        }
    }
}

/// Returns the first rule that excludes `product`, or `None` when it belongs
/// in the feed.
#[must_use]
pub fn exclusion_reason(product: &Product) -> Option<Exclusion> {
    if product.catalog_visibility != "visible" {
        return Some(Exclusion::NotVisible);
    }
    if product.status != "publish" {
        return Some(Exclusion::NotPublished);
    }

    let price = parse_price(&product.regular_price);
    if price <= Decimal::ZERO || price >= Decimal::from(MAX_PRICE_UNITS) {
        return Some(Exclusion::PriceOutOfRange(price));
    }

    if let Some(token) = BANNED_NAME_TOKENS
        .iter()
        .find(|token| product.name.contains(*token))
    {
        return Some(Exclusion::BannedName(token));
    }

    if product
        .meta(EXCLUDE_META_KEY)
        .is_some_and(|m| m.value_text() == "yes")
    {
        return Some(Exclusion::OptedOut);
    }

    None
}

#[must_use]
pub fn should_include(product: &Product) -> bool {
    exclusion_reason(product).is_none()
}

/// Price shown in the feed: the `_vivino_pricing` meta value when present,
/// otherwise `regular_price` verbatim.
#[must_use]
pub fn resolve_price(product: &Product) -> String {
    product.meta(PRICE_META_KEY).map_or_else(
        || product.regular_price.clone(),
        crate::types::MetaEntry::value_text,
    )
}

/// Parses a store price string. Anything unparseable counts as zero.
#[must_use]
pub fn parse_price(raw: &str) -> Decimal {
    Decimal::from_str(raw.trim()).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

//! WooCommerce REST API response types for `GET /wp-json/wc/v3/products`.
//!
//! Only the fields the feed needs are modelled; serde ignores the rest.
//!
//! ### `regular_price`
//! A decimal string such as `"12.50"`. Observed as the empty string `""` for
//! products without a price, and never as a JSON number.
//!
//! ### `stock_quantity`
//! `null` when the product does not manage stock. We model it as
//! `Option<i64>`; negative values occur for back-ordered items.
//!
//! ### `attributes`
//! Global attributes carry a non-zero `id` that identifies the attribute
//! across the catalog. Local (per-product) attributes have `id: 0`.
//!
//! ### `meta_data`
//! Plugin-defined key/value pairs. `value` is usually a string but may be a
//! number, an array, or an object depending on the plugin that wrote it.

use serde::Deserialize;

/// A single product from the store catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: i64,

    /// Display name as entered in the shop, e.g. `"Chateau-Test 2019"`.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub regular_price: String,

    #[serde(default)]
    pub stock_quantity: Option<i64>,

    /// Public product page URL.
    #[serde(default)]
    pub permalink: String,

    /// `visible`, `catalog`, `search` or `hidden`.
    #[serde(default)]
    pub catalog_visibility: String,

    /// `publish`, `draft`, `pending` or `private`.
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub attributes: Vec<Attribute>,

    #[serde(default)]
    pub meta_data: Vec<MetaEntry>,
}

/// A catalog attribute attached to a product.
#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    /// Selected terms in shop order. Only the first one is ever consulted.
    #[serde(default)]
    pub options: Vec<String>,
}

/// A plugin-defined metadata entry.
#[derive(Debug, Clone, Deserialize)]
pub struct MetaEntry {
    pub key: String,

    #[serde(default)]
    pub value: serde_json::Value,
}

impl MetaEntry {
    /// Returns the value as text: strings verbatim, other JSON values in
    /// their serialized form.
    #[must_use]
    pub fn value_text(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

impl Product {
    /// First meta entry with the given key, in store order.
    #[must_use]
    pub fn meta(&self, key: &str) -> Option<&MetaEntry> {
        self.meta_data.iter().find(|m| m.key == key)
    }

    /// First attribute with the given id, in store order.
    #[must_use]
    pub fn attribute(&self, id: i64) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.id == id)
    }
}

/// One page of the product listing plus the total page count reported by
/// the store on that response.
#[derive(Debug)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total_pages: u32,
}

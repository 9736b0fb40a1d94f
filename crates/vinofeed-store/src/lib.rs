pub mod client;
pub mod error;
pub mod filter;
pub mod name;
pub mod pagination;
pub mod pipeline;
pub mod source;
pub mod types;

pub use client::{StoreClientConfig, WooClient};
pub use error::StoreError;
pub use filter::{resolve_price, should_include};
pub use name::normalize_name;
pub use pipeline::{build_row, FeedPipeline, FeedRun, PAGE_SIZE};
pub use source::ProductSource;
pub use types::{Attribute, MetaEntry, Product, ProductPage};

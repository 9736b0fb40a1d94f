use thiserror::Error;

/// Failures while reading the store catalog or turning it into feed rows.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not decode {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("store rejected credentials ({status}) for {url}")]
    Unauthorized { status: u16, url: String },

    #[error("products endpoint not found at {url}")]
    NotFound { url: String },

    #[error("store answered {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("normalization error for product \"{raw_name}\": {reason}")]
    Normalization { raw_name: String, reason: String },

    #[error("invalid store URL \"{store_url}\": {reason}")]
    InvalidStoreUrl { store_url: String, reason: String },
}

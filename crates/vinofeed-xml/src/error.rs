use std::path::PathBuf;

use thiserror::Error;
use vinofeed_store::StoreError;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to write {element} element: {source}")]
    Xml {
        element: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("generated feed is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("feed storage I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a generate-and-store run did not replace the feed.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to fetch products; existing feed left unchanged: {0}")]
    Fetch(#[from] StoreError),

    #[error("failed to store feed: {0}")]
    Write(#[from] FeedError),
}

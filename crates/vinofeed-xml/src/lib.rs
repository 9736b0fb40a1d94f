pub mod error;
pub mod generate;
pub mod storage;
pub mod writer;

pub use error::{FeedError, GenerateError};
pub use generate::generate_feed;
pub use storage::{FeedStore, FEED_FILE_NAME};
pub use writer::render_feed;

//! On-disk home of the generated feed.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use vinofeed_core::FeedRow;

use crate::error::FeedError;
use crate::writer::render_feed;

pub const FEED_FILE_NAME: &str = "vivinofeed.xml";

/// The stored `vivinofeed.xml` inside a storage directory.
///
/// Each write replaces the whole document.
#[derive(Debug, Clone)]
pub struct FeedStore {
    dir: PathBuf,
}

impl FeedStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(FEED_FILE_NAME)
    }

    /// Replaces the stored feed with `xml`.
    ///
    /// Writes to a uniquely named temp file in the same directory, syncs it,
    /// then renames it over the feed, so readers see either the old or the
    /// new document and never a partial one.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Io`] if the directory cannot be created or the
    /// file cannot be written or renamed.
    pub fn write(&self, xml: &str) -> Result<(), FeedError> {
        fs::create_dir_all(&self.dir).map_err(|source| FeedError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let target = self.path();
        let temp = self
            .dir
            .join(format!(".{FEED_FILE_NAME}.{}.tmp", uuid::Uuid::new_v4().simple()));

        if let Err(source) = write_synced(&temp, xml.as_bytes()) {
            let _ = fs::remove_file(&temp);
            return Err(FeedError::Io { path: temp, source });
        }

        if let Err(source) = fs::rename(&temp, &target) {
            let _ = fs::remove_file(&temp);
            return Err(FeedError::Io {
                path: target,
                source,
            });
        }

        tracing::info!(path = %target.display(), bytes = xml.len(), "feed written");
        Ok(())
    }

    /// Renders `rows` and replaces the stored feed with the result.
    ///
    /// # Errors
    ///
    /// Propagates rendering errors from [`render_feed`] and write errors from
    /// [`Self::write`]. Nothing is written if rendering fails.
    pub fn publish(&self, rows: &[FeedRow]) -> Result<(), FeedError> {
        let xml = render_feed(rows)?;
        self.write(&xml)
    }

    /// Reads the stored feed, or `None` if none has been generated yet.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Io`] for any failure other than a missing file.
    pub fn read(&self) -> Result<Option<String>, FeedError> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(xml) => Ok(Some(xml)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(FeedError::Io { path, source }),
        }
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

//! Line source abstraction over the flight-legs CSV file.
//!
//! The loader never touches the filesystem directly; it goes through
//! [`LineSource`] so tests and local development can substitute an in-memory
//! implementation for the real file.

use async_trait::async_trait;
use std::io;
use std::path::Path;

/// Read-only access to the lines of a file at a given path.
#[async_trait]
pub trait LineSource: Send + Sync {
    /// Whether a readable file is present at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Read every line of the file at `path`, without line terminators.
    ///
    /// Fails with an I/O error on an unreadable path or non-UTF-8 contents.
    async fn read_lines(&self, path: &str) -> io::Result<Vec<String>>;
}

/// Filesystem-backed line source.
#[derive(Debug, Default, Clone)]
pub struct FsLineSource;

#[async_trait]
impl LineSource for FsLineSource {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    async fn read_lines(&self, path: &str) -> io::Result<Vec<String>> {
        let contents = tokio::fs::read_to_string(path).await?;
        Ok(contents.lines().map(str::to_owned).collect())
    }
}

/// Fixed in-memory line source for tests and local development.
///
/// Reports the file as present (or absent, via [`StaticLineSource::missing`])
/// regardless of the path it is asked about.
#[derive(Debug, Default, Clone)]
pub struct StaticLineSource {
    lines: Vec<String>,
    present: bool,
}

impl StaticLineSource {
    /// A source serving the given lines for any path.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            present: true,
        }
    }

    /// A source reporting every path as missing.
    pub fn missing() -> Self {
        Self {
            lines: Vec::new(),
            present: false,
        }
    }
}

#[async_trait]
impl LineSource for StaticLineSource {
    fn exists(&self, _path: &str) -> bool {
        self.present
    }

    async fn read_lines(&self, _path: &str) -> io::Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

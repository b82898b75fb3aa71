//! In-memory feed source.

use std::io::Read;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::FeedResult;
use crate::feed::FeedSource;

/// Feed lines held in memory, plus the errors reported while reading them.
#[derive(Debug, Default)]
pub struct TextSource {
    lines: Vec<String>,
    errors: Mutex<Vec<String>>,
}

impl TextSource {
    /// Split `text` into lines. Both `\n` and `\r\n` endings are accepted.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines().map(str::to_string).collect())
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            errors: Mutex::new(Vec::new()),
        }
    }

    /// Read all of `reader`. Bytes that are not valid UTF-8 become U+FFFD.
    pub fn from_reader(mut reader: impl Read) -> FeedResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Read a feed file. Bytes that are not valid UTF-8 become U+FFFD.
    pub fn from_path(path: &Path) -> FeedResult<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(&bytes))
    }

    fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_text(&String::from_utf8_lossy(bytes))
    }

    fn lock_errors(&self) -> MutexGuard<'_, Vec<String>> {
        self.errors.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Errors reported through [`FeedSource::set_error`], oldest first.
    pub fn errors(&self) -> Vec<String> {
        self.lock_errors().clone()
    }
}

impl FeedSource for TextSource {
    fn lines_data(&self) -> Vec<String> {
        self.lines.clone()
    }

    fn set_error(&self, message: &str) {
        tracing::warn!("{}", message);
        self.lock_errors().push(message.to_string());
    }
}

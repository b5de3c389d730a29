//! Source files as read from disk

use std::path::PathBuf;

use sha2::{Digest, Sha256};
use thiserror::Error;

use super::mask::code_view;
use crate::scanner::{DiscoveredFile, Language};

/// Errors that can occur while reading a source file
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {path}")]
    Decode { path: PathBuf },
}

/// An immutable source file with a line-offset table
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path on disk (may be empty for in-memory sources)
    pub path: PathBuf,
    /// Repository-relative key
    pub key: String,
    pub language: Language,
    /// SHA-256 of the raw text, hex encoded
    pub content_hash: String,
    text: String,
    code: String,
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Build a source file from text already in memory
    #[must_use]
    pub fn new(key: impl Into<String>, language: Language, text: impl Into<String>) -> Self {
        let text = text.into();
        let code = code_view(&text, language.family());
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        let content_hash = format!("{:x}", Sha256::digest(text.as_bytes()));
        Self {
            path: PathBuf::new(),
            key: key.into(),
            language,
            content_hash,
            text,
            code,
            line_starts,
        }
    }

    /// Read a discovered file from disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn read(file: &DiscoveredFile) -> Result<Self, ReadError> {
        let bytes = std::fs::read(&file.path).map_err(|source| ReadError::Io {
            path: file.path.clone(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| ReadError::Decode {
            path: file.path.clone(),
        })?;
        let mut source = Self::new(file.key.clone(), file.language, text);
        source.path = file.path.clone();
        Ok(source)
    }

    /// Raw text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text with comments and string literals blanked; offsets match `text()`
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of lines; a trailing newline does not open a new line
    #[must_use]
    pub fn line_count(&self) -> u32 {
        let mut count = self.line_starts.len();
        if self.text.is_empty() || self.text.ends_with('\n') {
            count -= 1;
        }
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// 1-based line containing a byte offset
    #[must_use]
    pub fn line_at(&self, offset: usize) -> u32 {
        let index = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        u32::try_from(index + 1).unwrap_or(u32::MAX)
    }

    /// Raw text of lines `start..=end` (1-based, clamped), without the final newline
    #[must_use]
    pub fn lines(&self, start: u32, end: u32) -> &str {
        let (from, to) = self.span(start, end);
        &self.text[from..to]
    }

    /// Code view of lines `start..=end`
    #[must_use]
    pub fn code_lines(&self, start: u32, end: u32) -> &str {
        let (from, to) = self.span(start, end);
        &self.code[from..to]
    }

    fn span(&self, start: u32, end: u32) -> (usize, usize) {
        let last = self.line_count().max(1);
        let start = start.clamp(1, last) as usize;
        let end = (end.clamp(1, last) as usize).max(start);
        let from = self.line_starts.get(start - 1).copied().unwrap_or(self.text.len());
        let to = self
            .line_starts
            .get(end)
            .map_or(self.text.len(), |next| next - 1);
        (from.min(to), to)
    }
}

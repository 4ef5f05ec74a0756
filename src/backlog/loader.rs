//! Source loading
//!
//!     Backlogs are fetched through a [SourceProvider], which hands back either fresh text
//!     or [Fetch::Unchanged] when nothing moved since the last fetch. [DocumentLoader] sits
//!     on top and only re-parses when the provider reports new text, which keeps periodic
//!     refreshes (`storied watch`) cheap.
//!
//!     [FileProvider] is the file-system implementation. Other providers (an HTTP client,
//!     an in-memory fixture) only need to implement `fetch`.

use crate::backlog::parsing::{parse, Parsed};
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result of asking a provider for a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Text(String),
    /// Same text as the previous fetch for this id
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    NotFound(String),
    Io(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(id) => write!(f, "Source not found: {}", id),
            LoadError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

pub trait SourceProvider {
    fn fetch(&mut self, id: &str) -> Result<Fetch, LoadError>;
}

/// Reads backlogs from disk, remembering the last text seen per path
#[derive(Debug, Default)]
pub struct FileProvider {
    root: Option<PathBuf>,
    last_seen: HashMap<PathBuf, String>,
}

impl FileProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative ids against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            last_seen: HashMap::new(),
        }
    }

    fn resolve(&self, id: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(id),
            None => PathBuf::from(id),
        }
    }
}

impl SourceProvider for FileProvider {
    fn fetch(&mut self, id: &str) -> Result<Fetch, LoadError> {
        let path = self.resolve(id);
        let text = std::fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.display().to_string()),
            _ => LoadError::Io(format!("{}: {}", path.display(), err)),
        })?;

        if self.last_seen.get(&path) == Some(&text) {
            tracing::trace!(path = %path.display(), "source unchanged");
            return Ok(Fetch::Unchanged);
        }
        self.last_seen.insert(path, text.clone());
        Ok(Fetch::Text(text))
    }
}

/// Parses whatever the provider hands back, skipping unchanged sources
#[derive(Debug)]
pub struct DocumentLoader<P> {
    provider: P,
}

impl<P: SourceProvider> DocumentLoader<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// `Ok(None)` when the source has not changed since the last load
    pub fn load(&mut self, id: &str) -> Result<Option<Parsed>, LoadError> {
        match self.provider.fetch(id)? {
            Fetch::Text(text) => {
                tracing::debug!(id, bytes = text.len(), "parsing refreshed source");
                Ok(Some(parse(&text)))
            }
            Fetch::Unchanged => Ok(None),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

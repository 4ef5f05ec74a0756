//! Format registry
//!
//! Each format implements [Formatter] and is looked up by name. Unknown names are a
//! [FormatError::FormatNotFound], which the binary turns into a list of valid names.

use crate::backlog::ast::Document;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Knobs shared by the built-in formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Indent json output
    pub pretty: bool,
    /// Prefix treeviz lines with their one-based source line
    pub show_line_numbers: bool,
    /// Treeviz labels longer than this are truncated
    pub label_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            show_line_numbers: false,
            label_width: 50,
        }
    }
}

/// Trait for document formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "json")
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of document formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any previous one with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a document using the named format
    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(doc)
    }

    /// Format names with their descriptions, sorted by name
    pub fn list_formats(&self) -> Vec<(String, String)> {
        let mut formats: Vec<_> = self
            .formatters
            .values()
            .map(|f| (f.name().to_string(), f.description().to_string()))
            .collect();
        formats.sort();
        formats
    }

    /// Registry with the built-in formats configured by `options`
    pub fn with_options(options: &FormatOptions) -> Self {
        let mut registry = Self::new();

        registry.register(super::JsonFormatter {
            pretty: options.pretty,
        });
        registry.register(super::YamlFormatter);
        registry.register(super::TreevizFormatter {
            options: options.clone(),
        });
        registry.register(super::TagFormatter);

        registry
    }

    pub fn with_defaults() -> Self {
        Self::with_options(&FormatOptions::default())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountFormatter;
    impl Formatter for CountFormatter {
        fn name(&self) -> &str {
            "count"
        }

        fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
            Ok(doc.groups.len().to_string())
        }
    }

    #[test]
    fn test_defaults_are_registered() {
        let registry = FormatRegistry::default();
        let names: Vec<String> = registry
            .list_formats()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["json", "tag", "treeviz", "yaml"]);
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.serialize(&Document::default(), "pdf"),
            Err(FormatError::FormatNotFound("pdf".to_string()))
        );
    }

    #[test]
    fn test_custom_formatter() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormatter);
        assert!(registry.has("count"));
        assert_eq!(
            registry.serialize(&Document::default(), "count"),
            Ok("0".to_string())
        );
    }
}

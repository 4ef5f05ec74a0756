//! json and yaml output through serde
//!
//! Entries are tagged with `"type": "story"` or `"type": "bug"`; sub-item `sizes` are left
//! out when empty.

use super::registry::{FormatError, Formatter};
use crate::backlog::ast::Document;

pub struct JsonFormatter {
    pub pretty: bool,
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(doc)
        } else {
            serde_json::to_string(doc)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "JSON serialization of groups, entries and fragments"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML serialization of groups, entries and fragments"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backlog::parsing::parse_document;
    use serde_json::Value;

    const SOURCE: &str = "Backlog\n---\nAS A USER I WANT TO LOGIN [3] SO THAT I CAN ACCESS MY ACCOUNT\n  - Remember session #security @alice\n#bug Crash on save [5]\n";

    #[test]
    fn test_json_shape() {
        let doc = parse_document(SOURCE);
        let json = JsonFormatter { pretty: false }.serialize(&doc).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let group = &value["groups"][0];
        assert_eq!(group["key"], "Backlog");

        let story = &group["entries"][0];
        assert_eq!(story["type"], "story");
        assert_eq!(story["who"], "user");
        assert_eq!(story["sizes"], serde_json::json!(["3"]));

        let subitem = &story["subitems"][0];
        assert!(subitem.get("sizes").is_none());
        assert_eq!(subitem["fragments"][1]["kind"], "hashtag");
        assert_eq!(subitem["fragments"][1]["raw"], "#security");

        let bug = &group["entries"][1];
        assert_eq!(bug["type"], "bug");
        assert_eq!(bug["sizes"], serde_json::json!(["5"]));
    }

    #[test]
    fn test_yaml_mentions_entry_types() {
        let doc = parse_document(SOURCE);
        let yaml = YamlFormatter.serialize(&doc).unwrap();
        assert!(yaml.contains("type: story"));
        assert!(yaml.contains("type: bug"));
        assert!(yaml.contains("key: Backlog"));
    }
}

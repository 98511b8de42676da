//! Document module - the deserialized curriculum tree

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved key holding an element's attributes
pub const ATTRIBUTES_KEY: &str = "@attributes";

/// Reserved key holding the text of an element that also has attributes or children
pub const TEXT_KEY: &str = "@text";

/// The deserialized tree of one person's curriculum
///
/// The root value is the content of the document's root element. Every
/// mapping inside it is a Node: attributes live under [`ATTRIBUTES_KEY`] and
/// child elements live under their tag names. A child element that occurs once
/// is a single mapping; one that occurs more than once is an ordered array.
///
/// A Document is read-only input to the extraction engine.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vitae_domain::Document;
///
/// let doc = Document::new(json!({
///     "GENERAL-DATA": { "@attributes": { "FULL-NAME": "Ada Lovelace" } }
/// }));
///
/// let general = doc.get("GENERAL-DATA").unwrap();
/// assert_eq!(general["@attributes"]["FULL-NAME"], "Ada Lovelace");
/// assert!(doc.path(&["GENERAL-DATA", "SUMMARY-CV"]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Value);

impl Document {
    /// Wrap a deserialized tree
    pub fn new(root: Value) -> Self {
        Self(root)
    }

    /// The root value of the tree
    pub fn root(&self) -> &Value {
        &self.0
    }

    /// Get a top-level child by tag name
    ///
    /// Returns `None` when the key is absent or the root is not a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Follow a chain of tag names from the root
    ///
    /// Returns `None` as soon as any step is missing.
    pub fn path(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().try_fold(&self.0, |node, key| node.get(*key))
    }

    /// Attributes of the root element, if any
    pub fn attributes(&self) -> Option<&Value> {
        self.0.get(ATTRIBUTES_KEY)
    }

    /// Serialize the whole tree as compact JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    /// Serialize the whole tree as indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.0)
    }

    /// Unwrap into the underlying tree
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl Default for Document {
    /// An empty document: a root mapping with no children
    fn default() -> Self {
        Self(Value::Object(serde_json::Map::new()))
    }
}

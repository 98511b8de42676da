//! Shape resolution for ambiguous collections
//!
//! The XML-to-tree conversion gives no cardinality marker for repeated
//! elements: zero occurrences are an absent key, one occurrence is a single
//! mapping and two or more are an ordered array. Every traversal into a
//! repeated-element position goes through [`resolve`].
//!
//! A second quirk of the producer is that named children sometimes end up as
//! index-addressed children instead. [`named_or_positional`] isolates that
//! workaround.

use serde_json::Value;

/// Normalize a repeated-element position into an ordered sequence
///
/// - absent (or `null`) yields an empty sequence
/// - an array is returned element for element, in order
/// - anything else is a single occurrence and yields a one-element sequence
///
/// Total over every shape the deserializer can produce.
pub fn resolve(node: Option<&Value>) -> Vec<&Value> {
    match node {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single) => vec![single],
    }
}

/// Get the child at a numeric position
///
/// Arrays are indexed directly. Mappings are indexed by the decimal key
/// (`"1"`, `"2"`, ...), which is how an index-addressed child shows up after a
/// round trip through JSON.
pub fn positional(node: &Value, index: usize) -> Option<&Value> {
    match node {
        Value::Array(items) => items.get(index),
        Value::Object(map) => map.get(&index.to_string()),
        _ => None,
    }
}

/// Get a child by tag name, falling back to a fixed position
///
/// The named key wins whenever it is present. Only when it is absent is the
/// positional child consulted.
pub fn named_or_positional<'a>(node: &'a Value, key: &str, index: usize) -> Option<&'a Value> {
    node.get(key).or_else(|| positional(node, index))
}

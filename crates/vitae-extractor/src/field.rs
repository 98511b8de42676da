//! Attribute access on document nodes
//!
//! Attributes are routinely absent, so none of these functions fail. A missing
//! node, a node without an attribute mapping and a missing attribute all read
//! as "no value".

use serde_json::Value;
use std::borrow::Cow;
use vitae_domain::ATTRIBUTES_KEY;

/// Look up an attribute, returning `None` when it is absent
///
/// String values are borrowed. Numbers and booleans (which only occur in trees
/// that came from JSON rather than XML) are rendered to text. Mappings, arrays
/// and `null` count as absent.
pub fn lookup<'a>(node: Option<&'a Value>, name: &str) -> Option<Cow<'a, str>> {
    match node?.get(ATTRIBUTES_KEY)?.get(name)? {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

/// Read an attribute, or `default` when it is absent
pub fn attr_or<'a>(node: Option<&'a Value>, name: &str, default: &'a str) -> Cow<'a, str> {
    lookup(node, name).unwrap_or(Cow::Borrowed(default))
}

/// Read an attribute, or the empty string when it is absent
pub fn attr<'a>(node: Option<&'a Value>, name: &str) -> Cow<'a, str> {
    attr_or(node, name, "")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{Map, Value};

    proptest! {
        /// Property: an attribute that is not present always reads as the default
        #[test]
        fn test_total_field_access(
            attrs in prop::collection::btree_map("[A-Z]{1,6}", "[a-z0-9 ]{0,8}", 0..6),
            name in "[a-z]{1,6}",
            default in "[a-z]{0,6}",
        ) {
            // Attribute names are upper case, the probed name is lower case
            let attributes: Map<String, Value> = attrs
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect();
            let mut node = Map::new();
            node.insert(ATTRIBUTES_KEY.to_string(), Value::Object(attributes));
            let node = Value::Object(node);

            prop_assert_eq!(attr_or(Some(&node), &name, &default), default.as_str());
            prop_assert_eq!(attr_or(None, &name, &default), default.as_str());
        }
    }
}

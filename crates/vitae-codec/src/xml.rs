//! XML to Document conversion

use crate::CodecError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::map::Entry;
use serde_json::{Map, Value};
use vitae_domain::traits::TreeDeserializer;
use vitae_domain::{Document, ATTRIBUTES_KEY, TEXT_KEY};

/// Parses XML text into a Document
///
/// The tree follows the usual XML-to-JSON conventions:
///
/// - attributes go in a mapping under `@attributes`
/// - a child element that occurs once is stored as a single value under its
///   tag name; one that occurs again turns into an ordered array
/// - an element with only text becomes a string, an empty element becomes an
///   empty mapping, and text next to attributes or children goes under `@text`
///
/// The Document is the content of the root element.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlTreeDeserializer;

impl XmlTreeDeserializer {
    /// Create a new XmlTreeDeserializer
    pub fn new() -> Self {
        Self
    }
}

/// An element whose closing tag has not been seen yet
struct OpenElement {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl OpenElement {
    fn open(start: &BytesStart<'_>) -> Result<Self, CodecError> {
        let mut attributes = Map::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            attributes.insert(key, Value::String(value));
        }

        let mut children = Map::new();
        if !attributes.is_empty() {
            children.insert(ATTRIBUTES_KEY.to_string(), Value::Object(attributes));
        }

        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            children,
            text: String::new(),
        })
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }

    /// Add a child, turning a repeated tag into an array
    fn attach(&mut self, name: String, value: Value) {
        match self.children.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::Array(items) => items.push(value),
                existing => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            },
        }
    }

    fn close(self) -> (String, Value) {
        let value = match (self.children.is_empty(), self.text.is_empty()) {
            (true, false) => Value::String(self.text),
            (_, true) => Value::Object(self.children),
            (false, false) => {
                let mut children = self.children;
                children.insert(TEXT_KEY.to_string(), Value::String(self.text));
                Value::Object(children)
            }
        };
        (self.name, value)
    }
}

fn malformed(message: impl Into<String>) -> CodecError {
    CodecError::MalformedDocument(message.into())
}

/// Builds the tree from a stream of element events
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<OpenElement>,
    root: Option<Value>,
}

impl TreeBuilder {
    fn start(&mut self, element: OpenElement) -> Result<(), CodecError> {
        if self.stack.is_empty() && self.root.is_some() {
            return Err(malformed(format!("second root element <{}>", element.name)));
        }
        self.stack.push(element);
        Ok(())
    }

    fn end(&mut self) -> Result<(), CodecError> {
        let element = self
            .stack
            .pop()
            .ok_or_else(|| malformed("closing tag without an open element"))?;
        let (name, value) = element.close();
        match self.stack.last_mut() {
            Some(parent) => parent.attach(name, value),
            None => self.root = Some(value),
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), CodecError> {
        match self.stack.last_mut() {
            Some(element) => element.push_text(text.trim()),
            None if text.trim().is_empty() => {}
            None => return Err(malformed("text outside the root element")),
        }
        Ok(())
    }

    fn finish(self) -> Result<Document, CodecError> {
        if let Some(element) = self.stack.last() {
            return Err(malformed(format!("element <{}> is never closed", element.name)));
        }
        self.root
            .map(Document::new)
            .ok_or_else(|| malformed("document has no root element"))
    }
}

impl TreeDeserializer for XmlTreeDeserializer {
    type Error = CodecError;

    fn parse(&self, text: &str) -> Result<Document, Self::Error> {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(true);

        let mut builder = TreeBuilder::default();
        loop {
            match reader.read_event()? {
                Event::Start(start) => builder.start(OpenElement::open(&start)?)?,
                Event::Empty(start) => {
                    builder.start(OpenElement::open(&start)?)?;
                    builder.end()?;
                }
                Event::End(_) => builder.end()?,
                Event::Text(text) => builder.text(&text.unescape()?)?,
                Event::CData(data) => builder.text(&String::from_utf8_lossy(&data.into_inner()))?,
                Event::Eof => break,
                _ => {}
            }
        }

        builder.finish()
    }
}

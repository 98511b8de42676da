//! Published articles
//!
//! Articles are ordered by their production sequence, newest first, and
//! truncated to a limit. Two producer quirks are handled on the way:
//!
//! - A lone article can arrive with its children spread over the article
//!   collection itself (attribute holder, basic data, detailing as positions
//!   0, 1, 2) instead of being wrapped one level deeper.
//! - Any article can carry its basic data and detailing at positions 1 and 2
//!   rather than under their names.

use crate::config::Vocabulary;
use crate::field;
use crate::shape;
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;
use vitae_domain::{Document, PublicationRecord};

/// Position of the basic data child when it is not named
const BASIC_DATA_POSITION: usize = 1;

/// Position of the detailing child when it is not named
const DETAILING_POSITION: usize = 2;

/// How many articles to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationLimit {
    /// Every article
    All,
    /// At most this many articles
    AtMost(usize),
}

impl PublicationLimit {
    fn apply<T>(self, mut items: Vec<T>) -> Vec<T> {
        if let PublicationLimit::AtMost(n) = self {
            items.truncate(n);
        }
        items
    }
}

impl Default for PublicationLimit {
    fn default() -> Self {
        PublicationLimit::AtMost(5)
    }
}

impl From<i64> for PublicationLimit {
    /// `-1` means every article; any other negative value means none
    fn from(limit: i64) -> Self {
        match limit {
            -1 => PublicationLimit::All,
            n if n < 0 => PublicationLimit::AtMost(0),
            n => PublicationLimit::AtMost(usize::try_from(n).unwrap_or(usize::MAX)),
        }
    }
}

/// One article as found in the tree
#[derive(Debug, Clone)]
enum Article<'a> {
    /// A node holding its children by name (or by position, see module docs)
    Wrapped(&'a Value),
    /// A lone article whose children were spread over the collection
    Flattened(Vec<&'a Value>),
}

impl<'a> Article<'a> {
    /// Production sequence from whichever part carries it
    fn production_sequence(&self, vocabulary: &Vocabulary) -> Option<i64> {
        let raw = match self {
            Article::Wrapped(node) => sequence_attr(node, vocabulary),
            Article::Flattened(parts) => {
                parts.iter().find_map(|part| sequence_attr(part, vocabulary))
            }
        };
        raw?.trim().parse().ok()
    }

    /// Named child, or the child at `position` when the name is absent
    fn child(&self, key: &str, position: usize) -> Option<&'a Value> {
        match self {
            Article::Wrapped(node) => shape::named_or_positional(*node, key, position),
            Article::Flattened(parts) => parts.get(position).copied(),
        }
    }

    fn to_record(&self, vocabulary: &Vocabulary) -> PublicationRecord {
        let basic = self.child(&vocabulary.article_basic_data, BASIC_DATA_POSITION);
        let detailing = self.child(&vocabulary.article_detailing, DETAILING_POSITION);

        PublicationRecord {
            title: field::attr(basic, &vocabulary.article_title).into_owned(),
            journal: field::attr(detailing, &vocabulary.journal_title).into_owned(),
            volume: field::attr(detailing, &vocabulary.volume).into_owned(),
            start_page: field::attr(detailing, &vocabulary.initial_page).into_owned(),
            end_page: field::attr(detailing, &vocabulary.final_page).into_owned(),
            year: field::attr(basic, &vocabulary.article_year).into_owned(),
        }
    }
}

/// Raw production sequence of a node, or of its first positional child carrying one
fn sequence_attr<'a>(node: &'a Value, vocabulary: &Vocabulary) -> Option<Cow<'a, str>> {
    let name = &vocabulary.production_sequence;
    field::lookup(Some(node), name).or_else(|| match node {
        Value::Array(parts) => parts.iter().find_map(|part| field::lookup(Some(part), name)),
        _ => None,
    })
}

/// Extract published articles, newest production sequence first
///
/// Returns `None` only when the published articles section is absent. A
/// section with no articles yields an empty list. Missing fields of an article
/// are empty strings.
pub fn extract(
    document: &Document,
    limit: PublicationLimit,
    vocabulary: &Vocabulary,
) -> Option<Vec<PublicationRecord>> {
    let section = document
        .get(&vocabulary.bibliographic_production)?
        .get(&vocabulary.published_articles)?;

    let collection = shape::resolve(section.get(&vocabulary.published_article));
    let total = collection.len();
    let articles = sort_by_sequence(unflatten(collection, vocabulary), vocabulary);
    let retained = limit.apply(articles);

    debug!("Extracted {} of {} articles", retained.len(), total);

    Some(retained.iter().map(|article| article.to_record(vocabulary)).collect())
}

/// Re-wrap a lone article whose children were spread over the collection
///
/// Spread parts (basic data, detailing) carry neither a production sequence
/// nor named article children. A collection is only re-wrapped when every
/// entry after the first looks like such a part, so an unsequenced article
/// anywhere in a real collection stays an article of its own. A one-entry
/// collection is already a properly wrapped article.
fn unflatten<'a>(collection: Vec<&'a Value>, vocabulary: &Vocabulary) -> Vec<Article<'a>> {
    let flattened = collection.len() > 1
        && collection
            .iter()
            .skip(1)
            .all(|entry| !looks_like_article(entry, vocabulary));

    if flattened {
        debug!("Article collection holds the parts of a single article, re-wrapping");
        vec![Article::Flattened(collection)]
    } else {
        collection.into_iter().map(Article::Wrapped).collect()
    }
}

/// Whether a collection entry is an article rather than a spread part
fn looks_like_article(entry: &Value, vocabulary: &Vocabulary) -> bool {
    sequence_attr(entry, vocabulary).is_some()
        || entry.get(&vocabulary.article_basic_data).is_some()
        || entry.get(&vocabulary.article_detailing).is_some()
}

/// Order articles by descending production sequence
///
/// Articles without a usable sequence keep their position. The others are
/// sorted among themselves (stably, so equal sequences keep document order)
/// and placed back into the positions articles with a sequence occupied.
fn sort_by_sequence<'a>(articles: Vec<Article<'a>>, vocabulary: &Vocabulary) -> Vec<Article<'a>> {
    let keys: Vec<Option<i64>> = articles
        .iter()
        .map(|article| article.production_sequence(vocabulary))
        .collect();

    let slots: Vec<usize> = (0..articles.len()).filter(|&i| keys[i].is_some()).collect();
    let mut ranked = slots.clone();
    ranked.sort_by(|&a, &b| keys[b].cmp(&keys[a]));

    let mut order: Vec<usize> = (0..articles.len()).collect();
    for (slot, source) in slots.into_iter().zip(ranked) {
        order[slot] = source;
    }

    let mut pool: Vec<Option<Article<'a>>> = articles.into_iter().map(Some).collect();
    order.into_iter().filter_map(|source| pool[source].take()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn article(sequence: &str, title: &str) -> Value {
        json!({
            "@attributes": { "PRODUCTION-SEQUENCE": sequence },
            "BASIC-DATA-OF-ARTICLE": { "@attributes": {
                "TITLE-OF-ARTICLE": title,
                "YEAR-OF-ARTICLE": "2020"
            } },
            "DETAILING-OF-ARTICLE": { "@attributes": {
                "TITLE-OF-JOURNAL-OR-MAGAZINE": "Journal of Tests",
                "VOLUME": "12",
                "INITIAL-PAGE": "100",
                "FINAL-PAGE": "110"
            } }
        })
    }

    fn document(articles: Value) -> Document {
        Document::new(json!({
            "BIBLIOGRAPHIC-PRODUCTION": { "PUBLISHED-ARTICLES": { "PUBLISHED-ARTICLE": articles } }
        }))
    }

    fn titles(records: &[PublicationRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_limit_from_integer() {
        assert_eq!(PublicationLimit::from(-1_i64), PublicationLimit::All);
        assert_eq!(PublicationLimit::from(-7_i64), PublicationLimit::AtMost(0));
        assert_eq!(PublicationLimit::from(0_i64), PublicationLimit::AtMost(0));
        assert_eq!(PublicationLimit::from(5_i64), PublicationLimit::AtMost(5));
        assert_eq!(PublicationLimit::default(), PublicationLimit::AtMost(5));
    }

    #[test]
    fn test_descending_sequence_order() {
        let doc = document(json!([article("3", "c"), article("1", "a"), article("2", "b")]));
        let records = extract(&doc, PublicationLimit::All, &Vocabulary::default()).unwrap();
        assert_eq!(titles(&records), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sequence_compares_numerically() {
        let doc = document(json!([
            article("9", "nine"),
            article("10", "ten"),
            article("100", "hundred"),
        ]));
        let records = extract(&doc, PublicationLimit::All, &Vocabulary::default()).unwrap();
        assert_eq!(titles(&records), vec!["hundred", "ten", "nine"]);
    }

    #[test]
    fn test_limit_truncates_after_sorting() {
        let articles: Vec<Value> = (1..=10)
            .map(|i| article(&i.to_string(), &format!("t{}", i)))
            .collect();
        let doc = document(Value::Array(articles));
        let vocabulary = Vocabulary::default();

        let top = extract(&doc, PublicationLimit::from(5_i64), &vocabulary).unwrap();
        assert_eq!(titles(&top), vec!["t10", "t9", "t8", "t7", "t6"]);

        let all = extract(&doc, PublicationLimit::from(-1_i64), &vocabulary).unwrap();
        assert_eq!(all.len(), 10);
        assert_eq!(all[9].title, "t1");

        let none = extract(&doc, PublicationLimit::from(0_i64), &vocabulary).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_record_fields() {
        let doc = document(article("1", "On Trees"));
        let records = extract(&doc, PublicationLimit::All, &Vocabulary::default()).unwrap();

        assert_eq!(
            records,
            vec![PublicationRecord {
                title: "On Trees".to_string(),
                journal: "Journal of Tests".to_string(),
                volume: "12".to_string(),
                start_page: "100".to_string(),
                end_page: "110".to_string(),
                year: "2020".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let doc = document(json!([
            { "@attributes": { "PRODUCTION-SEQUENCE": "2" },
              "BASIC-DATA-OF-ARTICLE": { "@attributes": { "TITLE-OF-ARTICLE": "Only a title" } } },
            { "@attributes": { "PRODUCTION-SEQUENCE": "1" } },
        ]));
        let records = extract(&doc, PublicationLimit::All, &Vocabulary::default()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Only a title");
        assert_eq!(records[0].journal, "");
        assert_eq!(records[0].year, "");
        assert_eq!(records[1], PublicationRecord::default());
    }

    #[test]
    fn test_flattened_single_article() {
        let doc = document(json!([
            { "PRODUCTION-SEQUENCE": "1" },
            { "@attributes": { "TITLE-OF-ARTICLE": "Lonely", "YEAR-OF-ARTICLE": "1999" } },
            { "@attributes": {
                "TITLE-OF-JOURNAL-OR-MAGAZINE": "Solo Review",
                "VOLUME": "1",
                "INITIAL-PAGE": "1",
                "FINAL-PAGE": "9"
            } },
        ]));
        let records = extract(&doc, PublicationLimit::default(), &Vocabulary::default()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Lonely");
        assert_eq!(records[0].year, "1999");
        assert_eq!(records[0].journal, "Solo Review");
        assert_eq!(records[0].end_page, "9");
    }

    #[test]
    fn test_single_wrapped_article() {
        let doc = document(article("4", "Alone but wrapped"));
        let records = extract(&doc, PublicationLimit::default(), &Vocabulary::default()).unwrap();
        assert_eq!(titles(&records), vec!["Alone but wrapped"]);
    }

    #[test]
    fn test_positional_children_inside_collection() {
        let doc = document(json!([
            article("1", "named"),
            [
                { "@attributes": { "PRODUCTION-SEQUENCE": "2" } },
                { "@attributes": { "TITLE-OF-ARTICLE": "positional" } },
                { "@attributes": { "VOLUME": "7" } },
            ],
        ]));
        let records = extract(&doc, PublicationLimit::All, &Vocabulary::default()).unwrap();

        assert_eq!(titles(&records), vec!["positional", "named"]);
        assert_eq!(records[0].volume, "7");
    }

    #[test]
    fn test_positional_keys_on_mapping() {
        let doc = document(json!({
            "@attributes": { "PRODUCTION-SEQUENCE": "1" },
            "1": { "@attributes": { "TITLE-OF-ARTICLE": "keyed by position" } },
            "2": { "@attributes": { "INITIAL-PAGE": "33" } },
        }));
        let records = extract(&doc, PublicationLimit::All, &Vocabulary::default()).unwrap();

        assert_eq!(records[0].title, "keyed by position");
        assert_eq!(records[0].start_page, "33");
    }

    #[test]
    fn test_articles_without_sequence_keep_position() {
        let unsequenced = json!({
            "BASIC-DATA-OF-ARTICLE": { "@attributes": { "TITLE-OF-ARTICLE": "fixed" } }
        });
        let doc = document(json!([
            article("1", "a"),
            article("5", "e"),
            unsequenced,
            article("3", "c"),
        ]));
        let records = extract(&doc, PublicationLimit::All, &Vocabulary::default()).unwrap();

        assert_eq!(titles(&records), vec!["e", "c", "fixed", "a"]);
    }

    #[test]
    fn test_unsequenced_second_article_is_not_a_spread_part() {
        let unsequenced = json!({
            "BASIC-DATA-OF-ARTICLE": { "@attributes": { "TITLE-OF-ARTICLE": "no sequence" } }
        });
        let doc = document(json!([
            article("1", "one"),
            unsequenced,
            article("3", "three"),
            article("2", "two"),
        ]));
        let records = extract(&doc, PublicationLimit::All, &Vocabulary::default()).unwrap();

        assert_eq!(titles(&records), vec!["three", "no sequence", "two", "one"]);
    }

    #[test]
    fn test_unsequenced_detailing_only_article_is_kept() {
        let detailing_only = json!({
            "DETAILING-OF-ARTICLE": { "@attributes": { "VOLUME": "8" } }
        });
        let doc = document(json!([article("1", "one"), detailing_only]));
        let records = extract(&doc, PublicationLimit::All, &Vocabulary::default()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "one");
        assert_eq!(records[1].volume, "8");
    }

    #[test]
    fn test_equal_sequences_keep_document_order() {
        let doc = document(json!([
            article("2", "first"),
            article("2", "second"),
            article("3", "top"),
        ]));
        let records = extract(&doc, PublicationLimit::All, &Vocabulary::default()).unwrap();
        assert_eq!(titles(&records), vec!["top", "first", "second"]);
    }

    #[test]
    fn test_missing_section_is_unavailable() {
        let vocabulary = Vocabulary::default();

        let doc = Document::new(json!({ "GENERAL-DATA": {} }));
        assert!(extract(&doc, PublicationLimit::All, &vocabulary).is_none());

        let doc = Document::new(json!({ "BIBLIOGRAPHIC-PRODUCTION": {} }));
        assert!(extract(&doc, PublicationLimit::All, &vocabulary).is_none());
    }

    #[test]
    fn test_empty_section_is_empty_list() {
        let doc = Document::new(json!({
            "BIBLIOGRAPHIC-PRODUCTION": { "PUBLISHED-ARTICLES": {} }
        }));
        let records = extract(&doc, PublicationLimit::All, &Vocabulary::default());
        assert_eq!(records, Some(vec![]));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let doc = document(json!([article("1", "a"), article("2", "b")]));
        let before = doc.clone();
        let _ = extract(&doc, PublicationLimit::All, &Vocabulary::default());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_deterministic_output() {
        let doc = document(json!([article("2", "b"), article("3", "c"), article("1", "a")]));
        let vocabulary = Vocabulary::default();
        let first = extract(&doc, PublicationLimit::from(2_i64), &vocabulary);
        let second = extract(&doc, PublicationLimit::from(2_i64), &vocabulary);
        assert_eq!(first, second);
    }
}

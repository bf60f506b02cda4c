use std::borrow::Cow;

use docmcp_types::{Document, SearchHit};

use crate::traits::DocumentStore;

/// Maximum number of characters of document text included in a search hit.
pub const PREVIEW_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// Lower-case a query and split it on whitespace. Empty tokens are dropped.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Lower-cased `title text metadata-json` for substring matching.
///
/// Metadata is rendered in insertion order with `": "` and `", "`
/// separators. Fields are joined by a single space, so a whitespace-free token can never
/// match across a field boundary.
pub fn searchable_text(doc: &Document) -> String {
    let metadata = doc.metadata.to_json().unwrap_or_default();
    format!("{} {} {}", doc.title, doc.text, metadata).to_lowercase()
}

/// OR semantics: true if any token occurs in `haystack`. No tokens, no match.
pub fn matches_any<T: AsRef<str>>(tokens: &[T], haystack: &str) -> bool {
    tokens.iter().any(|t| haystack.contains(t.as_ref()))
}

/// Cut `text` to `max_chars` characters, appending `...` when anything was cut.
pub fn truncate_text(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..byte_idx])),
        None => Cow::Borrowed(text),
    }
}

/// Project a document into a search hit with a truncated text preview.
pub fn to_hit(doc: &Document) -> SearchHit {
    SearchHit {
        id: doc.id.clone(),
        title: doc.title.clone(),
        text: truncate_text(&doc.text, PREVIEW_CHARS).into_owned(),
        url: doc.url.clone(),
    }
}

/// Linear substring search over every document in store order.
///
/// No ranking and no limit: every matching document is returned.
pub fn search<S: DocumentStore + ?Sized>(store: &S, query: &str) -> Vec<SearchHit> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }
    let hits: Vec<SearchHit> = store
        .all()
        .iter()
        .filter(|doc| matches_any(&tokens, &searchable_text(doc)))
        .map(to_hit)
        .collect();
    tracing::debug!(query, tokens = tokens.len(), hits = hits.len(), "search");
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticDocumentStore;
    use docmcp_types::{DocumentId, Metadata};
    use proptest::prelude::*;

    fn ids(hits: &[SearchHit]) -> Vec<&str> {
        hits.iter().map(|h| h.id.as_str()).collect()
    }

    fn doc(id: &str, title: &str, text: &str, meta: &[(&str, &str)]) -> Document {
        Document::new(
            DocumentId::new(id).unwrap(),
            title,
            text,
            format!("https://example.com/{id}"),
            meta.iter().copied().collect::<Metadata>(),
        )
    }

    #[test]
    fn tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("  Azure\tFUNCTIONS\n "), vec!["azure", "functions"]);
    }

    #[test]
    fn tokenize_empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn python_matches_language_and_azure() {
        let store = StaticDocumentStore::builtin();
        let hits = search(&store, "python");
        assert_eq!(ids(&hits), vec!["azure-functions-intro", "python-basics"]);
    }

    #[test]
    fn pikachu_is_case_insensitive() {
        let store = StaticDocumentStore::builtin();
        assert_eq!(ids(&search(&store, "PIKACHU")), vec!["pikachu-basics"]);
    }

    #[test]
    fn tokens_are_or_combined() {
        let store = StaticDocumentStore::builtin();
        let hits = search(&store, "charizard python");
        assert_eq!(
            ids(&hits),
            vec!["azure-functions-intro", "charizard-facts", "python-basics"]
        );
    }

    #[test]
    fn substring_inside_words_matches() {
        let store = StaticDocumentStore::builtin();
        assert_eq!(ids(&search(&store, "chu")), vec!["pikachu-basics"]);
    }

    #[test]
    fn metadata_values_are_searchable() {
        let store = StaticDocumentStore::builtin();
        assert_eq!(ids(&search(&store, "beginner")), vec!["python-basics"]);
        assert_eq!(ids(&search(&store, "2024")), vec!["mcp-protocol"]);
    }

    #[test]
    fn metadata_keys_are_searchable() {
        let store = StaticDocumentStore::new(vec![
            doc("a", "Alpha", "plain", &[("flavour", "x")]),
            doc("b", "Beta", "plain", &[]),
        ])
        .unwrap();
        assert_eq!(ids(&search(&store, "flavour")), vec!["a"]);
    }

    #[test]
    fn searchable_text_of_pikachu() {
        let store = StaticDocumentStore::builtin();
        let doc = store.by_id("pikachu-basics").unwrap();
        let expected = format!(
            "{} {} {}",
            doc.title,
            doc.text,
            r#"{"type": "Electric", "number": "025", "generation": "1"}"#
        )
        .to_lowercase();
        assert_eq!(searchable_text(doc), expected);
    }

    #[test]
    fn punctuation_tokens_follow_spaced_metadata_json() {
        let store = StaticDocumentStore::builtin();
        assert!(search(&store, r#"":""#).is_empty());
        assert!(search(&store, r#","number""#).is_empty());
        assert_eq!(
            ids(&search(&store, r#""1"}"#)),
            vec!["pikachu-basics", "charizard-facts"]
        );
        assert_eq!(ids(&search(&store, r#""electric","#)), vec!["pikachu-basics"]);
        assert_eq!(
            ids(&search(&store, r#"{"category":"#)),
            vec!["azure-functions-intro", "python-basics", "mcp-protocol"]
        );
    }

    #[test]
    fn empty_query_returns_nothing() {
        let store = StaticDocumentStore::builtin();
        assert!(search(&store, "").is_empty());
        assert!(search(&store, "   ").is_empty());
    }

    #[test]
    fn no_match_returns_nothing() {
        let store = StaticDocumentStore::builtin();
        assert!(search(&store, "zzzzzz").is_empty());
    }

    #[test]
    fn tokens_do_not_span_fields() {
        let store = StaticDocumentStore::new(vec![doc("a", "foo", "bar", &[])]).unwrap();
        assert!(search(&store, "foobar").is_empty());
        assert_eq!(ids(&search(&store, "foo")), vec!["a"]);
    }

    #[test]
    fn long_text_is_truncated() {
        let long = "x".repeat(250);
        let store = StaticDocumentStore::new(vec![doc("long", "Long", &long, &[])]).unwrap();
        let hits = search(&store, "long");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text.len(), 203);
        assert!(hits[0].text.ends_with("..."));
        assert_eq!(&hits[0].text[..200], &long[..200]);
    }

    #[test]
    fn short_text_passes_through() {
        let store = StaticDocumentStore::builtin();
        let hits = search(&store, "charizard");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, store.by_id("charizard-facts").unwrap().text);
    }

    #[test]
    fn builtin_long_text_gets_ellipsis() {
        let store = StaticDocumentStore::builtin();
        let hits = search(&store, "pikachu");
        let full = &store.by_id("pikachu-basics").unwrap().text;
        assert!(full.chars().count() > PREVIEW_CHARS);
        assert_eq!(hits[0].text.chars().count(), PREVIEW_CHARS + 3);
        assert!(hits[0].text.starts_with(&full[..PREVIEW_CHARS]));
    }

    #[test]
    fn truncate_exact_boundary() {
        let exact = "y".repeat(PREVIEW_CHARS);
        assert!(matches!(truncate_text(&exact, PREVIEW_CHARS), Cow::Borrowed(_)));
        let over = "y".repeat(PREVIEW_CHARS + 1);
        assert_eq!(truncate_text(&over, PREVIEW_CHARS).len(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let text = "é".repeat(5);
        assert_eq!(truncate_text(&text, 3), "ééé...");
        assert_eq!(truncate_text(&text, 5), text);
    }

    #[test]
    fn hit_keeps_url() {
        let store = StaticDocumentStore::builtin();
        let hits = search(&store, "modelcontextprotocol");
        assert_eq!(hits.len(), 0, "urls are not part of the searchable text");
        let hits = search(&store, "mcp");
        assert_eq!(hits[0].url, "https://modelcontextprotocol.io");
    }

    proptest! {
        #[test]
        fn results_are_exactly_the_matching_documents(
            words in proptest::collection::vec(
                prop_oneof![
                    Just("pokemon"), Just("PYTHON"), Just("azure"), Just("fire"),
                    Just("zzz"), Just("ai"), Just("025"), Just("type"), Just(""),
                ],
                0..5,
            ),
            sep in prop_oneof![Just(" "), Just("\t"), Just("  ")],
        ) {
            let store = StaticDocumentStore::builtin();
            let query = words.join(sep);
            let hits = search(&store, &query);
            let tokens: Vec<String> = query
                .split_whitespace()
                .map(|w| w.to_lowercase())
                .collect();

            let expected: Vec<&str> = store
                .all()
                .iter()
                .filter(|d| tokens.iter().any(|t| searchable_text(d).contains(t.as_str())))
                .map(|d| d.id.as_str())
                .collect();
            prop_assert_eq!(ids(&hits), expected);

            for hit in &hits {
                prop_assert!(store.by_id(hit.id.as_str()).is_some());
                prop_assert!(hit.text.chars().count() <= PREVIEW_CHARS + 3);
            }
        }
    }
}

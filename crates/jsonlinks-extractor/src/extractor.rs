//! Walk a JSON value tree and collect absolute URLs

use crate::tree::JsonNode;
use tracing::info;
use url::Url;

/// Collect every string leaf of `root` that is an absolute URL.
///
/// Visits depth-first: object values in document order, array elements in
/// sequence order. Duplicates are kept, one entry per matching leaf.
///
/// The tree is consumed. Each node's children are moved onto an explicit
/// work stack before the node is dropped, so the walk never recurses.
pub fn extract_urls(root: JsonNode) -> Vec<Url> {
    let mut urls = Vec::new();
    let mut stack = vec![root];
    let mut visited = 0usize;

    while let Some(mut node) = stack.pop() {
        visited += 1;
        if let JsonNode::String(s) = &node {
            if let Some(url) = parse_absolute_url(s) {
                urls.push(url);
            }
        }
        let first_child = stack.len();
        node.take_children(&mut stack);
        stack[first_child..].reverse();
    }

    info!("Visited {} nodes, found {} URLs", visited, urls.len());
    urls
}

/// Parse `candidate` if, as a whole, it is an absolute URL.
///
/// Rules, in order:
/// - no whitespace or control characters anywhere, so surrounding
///   whitespace is rejected rather than trimmed;
/// - an RFC 3986 scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`)
///   followed by `:`;
/// - `Url::parse` accepts it without a base.
///
/// The returned URL is in the `url` crate's canonical form (lowercase scheme,
/// lowercase host for special schemes, default port dropped, `/` as the
/// empty path of special schemes).
pub fn parse_absolute_url(candidate: &str) -> Option<Url> {
    if candidate.is_empty()
        || candidate
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
    {
        return None;
    }
    if !has_scheme(candidate) {
        return None;
    }
    Url::parse(candidate).ok()
}

fn has_scheme(candidate: &str) -> bool {
    let Some((scheme, _)) = candidate.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    fn extract_from(text: &str) -> Vec<Url> {
        extract_urls(parse_document(text).unwrap())
    }

    fn strings(urls: &[Url]) -> Vec<&str> {
        urls.iter().map(Url::as_str).collect()
    }

    #[test]
    fn test_traversal_order() {
        let urls = extract_from(
            r#"{
                "z": "https://z.example.com/",
                "a": [
                    "https://a1.example.com/",
                    {"inner": "https://a2.example.com/"},
                    "https://a3.example.com/"
                ],
                "m": "mailto:m@example.com"
            }"#,
        );
        assert_eq!(
            strings(&urls),
            vec![
                "https://z.example.com/",
                "https://a1.example.com/",
                "https://a2.example.com/",
                "https://a3.example.com/",
                "mailto:m@example.com",
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let urls = extract_from(r#"["https://example.com/", {"again": "https://example.com/"}]"#);
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn test_non_string_leaves_contribute_nothing() {
        let urls = extract_from(r#"{"n": 80, "f": 1.5, "b": true, "z": null, "e": [], "o": {}}"#);
        assert!(urls.is_empty());
    }

    #[test]
    fn test_keys_are_not_extracted() {
        assert!(extract_from(r#"{"https://key.example.com/": "value"}"#).is_empty());
    }

    #[test]
    fn test_top_level_string() {
        assert_eq!(extract_from(r#""ftp://files.example.org/f""#).len(), 1);
        assert!(extract_from(r#""not a url""#).is_empty());
    }

    #[test]
    fn test_embedded_url_in_text_is_ignored() {
        assert!(extract_from(r#""see https://example.com for details""#).is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_is_rejected() {
        assert!(parse_absolute_url(" https://example.com").is_none());
        assert!(parse_absolute_url("https://example.com ").is_none());
        assert!(parse_absolute_url("https://example.com\n").is_none());
        assert!(parse_absolute_url("\thttps://example.com").is_none());
    }

    #[test]
    fn test_relative_references_rejected() {
        for input in ["example.com/path", "/abs/path", "//example.com/x", "../up", "?q=1", "#frag"] {
            assert!(parse_absolute_url(input).is_none(), "{input} should be rejected");
        }
    }

    #[test]
    fn test_scheme_grammar() {
        assert!(has_scheme("custom+scheme.v-1:thing"));
        assert!(!has_scheme("1abc:thing"));
        assert!(!has_scheme(":nothing"));
        assert!(!has_scheme("no colon"));
        assert!(!has_scheme("a_b:c"));
    }

    #[test]
    fn test_canonical_form() {
        let url = parse_absolute_url("HTTP://Example.COM:80").unwrap();
        assert_eq!(url.as_str(), "http://example.com/");
        let url = parse_absolute_url("https://example.com/Case/Kept").unwrap();
        assert_eq!(url.as_str(), "https://example.com/Case/Kept");
    }

    #[test]
    fn test_wide_tree_keeps_order() {
        let items: Vec<JsonNode> = (0..1000)
            .map(|i| JsonNode::String(format!("https://example.com/{i}")))
            .collect();
        let urls = extract_urls(JsonNode::Array(items));
        assert_eq!(urls.len(), 1000);
        assert_eq!(urls[0].path(), "/0");
        assert_eq!(urls[999].path(), "/999");
    }

    #[test]
    fn test_deep_tree_without_recursion() {
        let mut node = JsonNode::String("https://deep.example.com/".to_string());
        for i in 0..100_000 {
            node = if i % 2 == 0 {
                JsonNode::Array(vec![node])
            } else {
                JsonNode::Object(vec![("k".to_string(), node)])
            };
        }
        let urls = extract_urls(node);
        assert_eq!(strings(&urls), vec!["https://deep.example.com/"]);
    }
}

//! Page URL rewriting
//!
//! Rewrites the page parameter of a navigation URL while keeping every other
//! query parameter. Parameters are always emitted sorted by key so identical
//! logical state produces byte-identical links.

use url::form_urlencoded;
use url::{Position, Url};

/// One `key=value` segment of a query string
#[derive(Debug, Clone, PartialEq, Eq)]
struct QueryPair {
    /// Decoded key, used for matching and ordering
    key: String,
    /// Segment text exactly as it appeared in the URL
    raw: String,
}

impl QueryPair {
    fn parse(raw: &str) -> Self {
        let raw_key = raw.split_once('=').map_or(raw, |(key, _)| key);
        Self {
            key: decode(raw_key),
            raw: raw.to_string(),
        }
    }
}

fn decode(text: &str) -> String {
    form_urlencoded::parse(text.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default()
}

fn parse_query(query: &str) -> Vec<QueryPair> {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(QueryPair::parse)
        .collect()
}

/// A navigation URL split into the part before the query, its query
/// parameters, and an optional fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageUrl {
    /// Scheme, authority and path (absolute URLs) or the raw path (relative)
    head: String,
    /// Query segments in their original order
    params: Vec<QueryPair>,
    /// Fragment without the leading `#`
    fragment: Option<String>,
}

impl PageUrl {
    /// Parse a base URL.
    ///
    /// Absolute URLs go through [`Url`]; anything else (`/artworks?q=x`,
    /// `?q=x`, an empty string, or text `Url` rejects) is treated as a
    /// relative reference and its path text is kept verbatim.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match Url::parse(raw) {
            Ok(url) => Self {
                head: url[..Position::AfterPath].to_string(),
                params: parse_query(url.query().unwrap_or("")),
                fragment: url.fragment().map(str::to_string),
            },
            Err(_) => Self::parse_relative(raw),
        }
    }

    fn parse_relative(raw: &str) -> Self {
        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (raw, None),
        };
        let (head, query) = rest.split_once('?').unwrap_or((rest, ""));

        Self {
            head: head.to_string(),
            params: parse_query(query),
            fragment,
        }
    }

    /// Check whether the URL is empty (no path, query or fragment)
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.params.is_empty() && self.fragment.is_none()
    }

    /// Decoded value of a query parameter, if present (first occurrence).
    /// A parameter without `=` reads as an empty value.
    pub fn param(&self, key: &str) -> Option<String> {
        self.params
            .iter()
            .find(|pair| pair.key == key)
            .and_then(|pair| form_urlencoded::parse(pair.raw.as_bytes()).next())
            .map(|(_, value)| value.into_owned())
    }

    /// Build the URL pointing at `page`.
    ///
    /// Any existing `page_param` segments are dropped and the new value is
    /// added. Other segments keep their original text, including flags
    /// without `=` and their percent-encoding; empty segments (`a=1&&b=2`)
    /// are dropped. Segments are ordered by decoded key with a stable sort,
    /// so repeated keys such as `tag=a&tag=b` keep their relative order.
    pub fn with_page(&self, page_param: &str, page: u64) -> String {
        let page_segment = form_urlencoded::Serializer::new(String::new())
            .append_pair(page_param, &page.to_string())
            .finish();

        let mut segments: Vec<(&str, &str)> = self
            .params
            .iter()
            .filter(|pair| pair.key != page_param)
            .map(|pair| (pair.key.as_str(), pair.raw.as_str()))
            .collect();
        segments.push((page_param, page_segment.as_str()));
        segments.sort_by(|a, b| a.0.cmp(b.0));

        let mut out = String::with_capacity(self.head.len() + 32);
        out.push_str(&self.head);
        out.push('?');
        for (i, (_, raw)) in segments.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(raw);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_url_keeps_other_params() {
        let url = PageUrl::parse("/artworks?q=rubens&page=2");
        assert_eq!(url.with_page("page", 5), "/artworks?page=5&q=rubens");
    }

    #[test]
    fn test_params_sorted_by_key() {
        let url = PageUrl::parse("/search?z=1&a=2&m=3");
        assert_eq!(url.with_page("page", 1), "/search?a=2&m=3&page=1&z=1");
    }

    #[test]
    fn test_repeated_keys_keep_order() {
        let url = PageUrl::parse("/artists?tag=b&tag=a&page=9&page=10");
        assert_eq!(url.with_page("page", 3), "/artists?page=3&tag=b&tag=a");
    }

    #[test]
    fn test_absolute_url() {
        let url = PageUrl::parse("https://example.com/artworks?artist=van+dyck&page=4#list");
        assert_eq!(
            url.with_page("page", 7),
            "https://example.com/artworks?artist=van+dyck&page=7#list"
        );
    }

    #[test]
    fn test_absolute_url_without_path() {
        let url = PageUrl::parse("https://example.com");
        assert_eq!(url.with_page("page", 2), "https://example.com/?page=2");
    }

    #[test]
    fn test_empty_and_query_only() {
        let url = PageUrl::parse("");
        assert!(url.is_empty());
        assert_eq!(url.with_page("page", 2), "?page=2");

        let url = PageUrl::parse("?q=portrait");
        assert_eq!(url.with_page("page", 2), "?page=2&q=portrait");
    }

    #[test]
    fn test_encoding_kept_verbatim() {
        let url = PageUrl::parse("/artworks?q=st%20jerome&sort=year%26name");
        assert_eq!(url.param("q").as_deref(), Some("st jerome"));
        assert_eq!(
            url.with_page("page", 2),
            "/artworks?page=2&q=st%20jerome&sort=year%26name"
        );
    }

    #[test]
    fn test_flag_without_value_survives() {
        let url = PageUrl::parse("/artworks?debug&q=a&page=1");
        assert_eq!(url.param("debug").as_deref(), Some(""));
        assert_eq!(url.with_page("page", 2), "/artworks?debug&page=2&q=a");
    }

    #[test]
    fn test_invalid_utf8_escape_kept_verbatim() {
        let url = PageUrl::parse("/postcards?series=%FF%FE");
        assert_eq!(url.with_page("page", 3), "/postcards?page=3&series=%FF%FE");
    }

    #[test]
    fn test_encoded_page_key_is_replaced() {
        let url = PageUrl::parse("/guestbook?pa%67e=4&q=x");
        assert_eq!(url.with_page("page", 5), "/guestbook?page=5&q=x");
    }

    #[test]
    fn test_custom_page_param() {
        let url = PageUrl::parse("/guestbook?p=3&page=keep");
        assert_eq!(url.with_page("p", 4), "/guestbook?p=4&page=keep");
    }
}

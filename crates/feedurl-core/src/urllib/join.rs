//! Joining a configured base URL with a resource path.

use super::error::{ParseError, UrlError};
use super::parsed::{validate_escapes, ParsedUrl};

/// Appends `path` to the path of `base_url`.
///
/// Segments are joined the way a filesystem path would be: duplicate slashes
/// collapse, `.` and `..` are applied lexically and never climb above the
/// root, and a trailing slash on `path` survives. A `?query` or `#fragment`
/// inside `path` replaces the base's own.
///
/// A relative base yields a relative result; joining does not make a URL
/// absolute.
///
/// - `join_path("https://example.com/api", "v1/items")` → `"https://example.com/api/v1/items"`
pub fn join_path(base_url: &str, path: &str) -> Result<String, UrlError> {
    if base_url.is_empty() {
        return Err(UrlError::EmptyBase);
    }
    if path.is_empty() {
        return Err(UrlError::EmptyPath);
    }

    let base = ParsedUrl::parse(base_url).map_err(|e| UrlError::invalid_base(base_url, e))?;
    let elem = PathElem::split(path);
    validate_escapes(elem.path, 0).map_err(|e| UrlError::join_failed(base_url, path, e))?;

    match base {
        ParsedUrl::Absolute(mut url) => {
            if url.cannot_be_a_base() {
                return Err(UrlError::join_failed(
                    base_url,
                    path,
                    ParseError::CannotBeABase,
                ));
            }
            // `set_path` reads `\` as `/` on http(s) URLs.
            let elem_path = elem.path.replace('\\', "%5C");
            let joined = join_segments(url.path(), &elem_path);
            url.set_path(&joined);
            if let Some(query) = elem.query {
                url.set_query(Some(query));
            }
            if let Some(fragment) = elem.fragment {
                url.set_fragment(Some(fragment));
            }
            Ok(url.into())
        }
        ParsedUrl::Relative(rel) => {
            let mut out = String::new();
            if let Some(authority) = rel.authority() {
                out.push_str("//");
                out.push_str(authority);
            }
            let joined = join_segments(rel.path(), elem.path);
            // An unrooted base stays unrooted, unless an authority forces a
            // leading slash.
            if rel.path().starts_with('/') || rel.authority().is_some() {
                out.push_str(&joined);
            } else {
                out.push_str(joined.strip_prefix('/').unwrap_or(&joined));
            }
            if let Some(query) = elem.query.or(rel.query()) {
                out.push('?');
                out.push_str(query);
            }
            if let Some(fragment) = elem.fragment.or(rel.fragment()) {
                out.push('#');
                out.push_str(fragment);
            }
            Ok(out)
        }
    }
}

/// `path` argument split at the first `#` and the first `?` before it.
struct PathElem<'a> {
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> PathElem<'a> {
    fn split(raw: &'a str) -> Self {
        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };
        Self {
            path,
            query,
            fragment,
        }
    }
}

/// Joins `base` and `elem` into one rooted, cleaned path.
fn join_segments(base: &str, elem: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(elem.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            s => stack.push(s),
        }
    }

    let mut out = String::with_capacity(base.len() + elem.len() + 1);
    out.push('/');
    out.push_str(&stack.join("/"));
    if elem.ends_with('/') && !out.ends_with('/') {
        out.push('/');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_onto_base_path() {
        assert_eq!(
            join_path("https://example.com/api", "v1/items").unwrap(),
            "https://example.com/api/v1/items"
        );
        assert_eq!(
            join_path("https://example.com", "v1/items").unwrap(),
            "https://example.com/v1/items"
        );
        assert_eq!(
            join_path("https://example.com/api/", "/v1/items").unwrap(),
            "https://example.com/api/v1/items"
        );
    }

    #[test]
    fn empty_arguments_fail_first() {
        assert_eq!(join_path("", "x"), Err(UrlError::EmptyBase));
        assert_eq!(join_path("https://example.com", ""), Err(UrlError::EmptyPath));
        // Emptiness is checked before parsing.
        assert_eq!(join_path("http://[::1", ""), Err(UrlError::EmptyPath));
    }

    #[test]
    fn duplicate_slashes_and_dots_are_cleaned() {
        assert_eq!(
            join_path("https://example.com//api//", "v1//./items").unwrap(),
            "https://example.com/api/v1/items"
        );
        assert_eq!(
            join_path("https://example.com/api/v1", "../v2/items").unwrap(),
            "https://example.com/api/v2/items"
        );
        assert_eq!(
            join_path("https://example.com/api", "../../../etc").unwrap(),
            "https://example.com/etc"
        );
    }

    #[test]
    fn trailing_slash_on_path_is_kept() {
        assert_eq!(
            join_path("https://example.com/api", "v1/").unwrap(),
            "https://example.com/api/v1/"
        );
        assert_eq!(
            join_path("https://example.com/api/", "v1").unwrap(),
            "https://example.com/api/v1"
        );
    }

    #[test]
    fn query_and_fragment_of_path() {
        assert_eq!(
            join_path("https://example.com/api", "items?page=2#top").unwrap(),
            "https://example.com/api/items?page=2#top"
        );
        assert_eq!(
            join_path("https://example.com/api?key=abc", "items").unwrap(),
            "https://example.com/api/items?key=abc"
        );
        assert_eq!(
            join_path("https://example.com/api?key=abc", "items?page=2").unwrap(),
            "https://example.com/api/items?page=2"
        );
    }

    #[test]
    fn relative_base_stays_relative() {
        assert_eq!(join_path("api", "v1/items").unwrap(), "api/v1/items");
        assert_eq!(join_path("/api", "v1/items").unwrap(), "/api/v1/items");
        assert_eq!(join_path("api", "../../x").unwrap(), "x");
        assert_eq!(
            join_path("//cdn.example.com/assets", "img/a.png").unwrap(),
            "//cdn.example.com/assets/img/a.png"
        );
    }

    #[test]
    fn invalid_base_is_reported() {
        assert!(matches!(
            join_path("http://[::1", "x"),
            Err(UrlError::InvalidBase { .. })
        ));
        assert!(matches!(
            join_path(":nope", "x"),
            Err(UrlError::InvalidBase {
                source: ParseError::ColonInFirstSegment,
                ..
            })
        ));
    }

    #[test]
    fn join_failures_carry_both_inputs() {
        let err = join_path("https://example.com/api", "v1/%zz").unwrap_err();
        assert_eq!(
            err,
            UrlError::JoinFailed {
                base: "https://example.com/api".to_string(),
                path: "v1/%zz".to_string(),
                source: ParseError::InvalidEscape { position: 3 },
            }
        );
        assert!(matches!(
            join_path("mailto:editor@example.com", "x"),
            Err(UrlError::JoinFailed {
                source: ParseError::CannotBeABase,
                ..
            })
        ));
    }

    #[test]
    fn backslashes_are_not_segment_separators() {
        assert_eq!(
            join_path("https://example.com/api", "v1\\..\\..\\admin").unwrap(),
            "https://example.com/api/v1%5C..%5C..%5Cadmin"
        );
        assert_eq!(
            join_path("https://example.com/api", "\\\\evil.com/x").unwrap(),
            "https://example.com/api/%5C%5Cevil.com/x"
        );
    }

    #[test]
    fn escaped_segments_are_not_double_encoded() {
        assert_eq!(
            join_path("https://example.com/a%20b", "c%2Fd").unwrap(),
            "https://example.com/a%20b/c%2Fd"
        );
    }
}

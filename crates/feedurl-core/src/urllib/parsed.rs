//! Parsed URL model.
//!
//! Anything with a scheme is handed to the `url` crate. The `url` crate refuses
//! relative references outright (`RelativeUrlWithoutBase`), so those are
//! decomposed here into authority, path, query and fragment and kept verbatim
//! for later resolution against a base.

use super::error::ParseError;
use std::borrow::Cow;
use std::fmt;
use url::Url;

/// A URL string that parsed successfully, absolute or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedUrl {
    /// Has a scheme; parsed and serialized by the `url` crate.
    Absolute(Url),
    /// Relative reference such as `/a/b`, `b/c`, `?q=1`, `#top` or `//host/x`.
    Relative(RelativeRef),
}

impl ParsedUrl {
    /// Parses `input` without a base.
    ///
    /// Control characters are rejected up front: the `url` crate would
    /// otherwise silently strip tabs and newlines.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        reject_control_characters(input)?;
        match Url::parse(input) {
            Ok(url) => Ok(ParsedUrl::Absolute(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                RelativeRef::parse(input).map(ParsedUrl::Relative)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// True when a scheme is present and, for hierarchical schemes, an
    /// authority is present too. `mailto:x` is absolute, `unix:/run/x` is not.
    pub fn is_absolute(&self) -> bool {
        match self {
            ParsedUrl::Absolute(url) => url.cannot_be_a_base() || url.has_authority(),
            ParsedUrl::Relative(_) => false,
        }
    }

    /// Scheme in lowercase, or `""` for a relative reference.
    pub fn scheme(&self) -> &str {
        match self {
            ParsedUrl::Absolute(url) => url.scheme(),
            ParsedUrl::Relative(_) => "",
        }
    }

    /// Host with an explicit port appended (`example.com:8080`), without
    /// userinfo. `None` when the URL carries no host.
    pub fn host(&self) -> Option<String> {
        match self {
            ParsedUrl::Absolute(url) => {
                let host = url.host_str().filter(|h| !h.is_empty())?;
                Some(match url.port() {
                    Some(port) => format!("{host}:{port}"),
                    None => host.to_string(),
                })
            }
            ParsedUrl::Relative(rel) => rel.host().map(str::to_string),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ParsedUrl::Absolute(url) => url.path(),
            ParsedUrl::Relative(rel) => rel.path(),
        }
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            ParsedUrl::Absolute(url) => url.query(),
            ParsedUrl::Relative(rel) => rel.query(),
        }
    }

    pub fn fragment(&self) -> Option<&str> {
        match self {
            ParsedUrl::Absolute(url) => url.fragment(),
            ParsedUrl::Relative(rel) => rel.fragment(),
        }
    }

    /// Canonical serialization for absolute URLs, the original text for
    /// relative references.
    pub fn as_str(&self) -> &str {
        match self {
            ParsedUrl::Absolute(url) => url.as_str(),
            ParsedUrl::Relative(rel) => rel.as_str(),
        }
    }
}

impl ParsedUrl {
    /// Text to hand to `Url::join`.
    ///
    /// `Url::join` treats `\` as `/` for http(s) bases, so a raw backslash in a
    /// relative path could start a new authority (`/\evil.com`). Backslashes
    /// in the path and fragment are sent as `%5C` instead.
    pub(crate) fn reference_text(&self) -> Cow<'_, str> {
        match self {
            ParsedUrl::Absolute(url) => Cow::Borrowed(url.as_str()),
            ParsedUrl::Relative(rel) => rel.escaped_backslashes(),
        }
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relative reference (RFC 3986 §4.2), split into its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeRef {
    raw: String,
    authority: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl RelativeRef {
    fn parse(input: &str) -> Result<Self, ParseError> {
        let (rest, fragment) = match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (input, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };
        let (authority, path, path_offset) = match rest.strip_prefix("//") {
            Some(tail) => {
                let end = tail.find('/').unwrap_or(tail.len());
                (Some(&tail[..end]), &tail[end..], 2 + end)
            }
            None => (None, rest, 0),
        };

        if authority.is_none() && path.split('/').next().is_some_and(|s| s.contains(':')) {
            return Err(ParseError::ColonInFirstSegment);
        }

        if let Some(authority) = authority {
            validate_escapes(authority, 2)?;
        }
        validate_escapes(path, path_offset)?;
        if let Some(fragment) = fragment {
            validate_escapes(fragment, input.len() - fragment.len())?;
        }

        Ok(Self {
            raw: input.to_string(),
            authority: authority.map(str::to_string),
            path: path.to_string(),
            query: query.map(str::to_string),
            fragment: fragment.map(str::to_string),
        })
    }

    /// Authority of a network-path reference (`//user@host:port`).
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// Authority without userinfo; `None` if absent or empty.
    pub fn host(&self) -> Option<&str> {
        let authority = self.authority.as_deref()?;
        let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
        (!host.is_empty()).then_some(host)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn escaped_backslashes(&self) -> Cow<'_, str> {
        if !self.raw.contains('\\') {
            return Cow::Borrowed(&self.raw);
        }
        let mut out = String::with_capacity(self.raw.len() + 8);
        if let Some(authority) = &self.authority {
            out.push_str("//");
            out.push_str(authority);
        }
        out.push_str(&self.path.replace('\\', "%5C"));
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(&fragment.replace('\\', "%5C"));
        }
        Cow::Owned(out)
    }
}

impl fmt::Display for RelativeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

pub(crate) fn reject_control_characters(input: &str) -> Result<(), ParseError> {
    match input.bytes().position(|b| b < 0x20 || b == 0x7f) {
        Some(position) => Err(ParseError::ControlCharacter { position }),
        None => Ok(()),
    }
}

/// Checks that every `%` starts a two-hex-digit escape. `offset` is added to
/// reported positions so they point into the caller's original string.
pub(crate) fn validate_escapes(s: &str, offset: usize) -> Result<(), ParseError> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'%' {
            continue;
        }
        let well_formed = bytes.len() > i + 2
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit();
        if !well_formed {
            return Err(ParseError::InvalidEscape {
                position: offset + i,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative(input: &str) -> RelativeRef {
        match ParsedUrl::parse(input).unwrap() {
            ParsedUrl::Relative(rel) => rel,
            other => panic!("expected relative reference, got {other:?}"),
        }
    }

    #[test]
    fn absolute_url_components() {
        let parsed = ParsedUrl::parse("HTTPS://Example.com:8443/a/b?x=1#top").unwrap();
        assert!(parsed.is_absolute());
        assert_eq!(parsed.scheme(), "https");
        assert_eq!(parsed.host().as_deref(), Some("example.com:8443"));
        assert_eq!(parsed.path(), "/a/b");
        assert_eq!(parsed.query(), Some("x=1"));
        assert_eq!(parsed.fragment(), Some("top"));
        assert_eq!(parsed.as_str(), "https://example.com:8443/a/b?x=1#top");
    }

    #[test]
    fn default_port_is_dropped_and_ipv6_bracketed() {
        let parsed = ParsedUrl::parse("https://example.com:443/").unwrap();
        assert_eq!(parsed.host().as_deref(), Some("example.com"));
        let parsed = ParsedUrl::parse("http://[::1]:8080/").unwrap();
        assert_eq!(parsed.host().as_deref(), Some("[::1]:8080"));
    }

    #[test]
    fn userinfo_is_not_part_of_host() {
        let parsed = ParsedUrl::parse("https://user:pw@example.com/").unwrap();
        assert_eq!(parsed.host().as_deref(), Some("example.com"));
        let rel = relative("//user@cdn.example.com/x.png");
        assert_eq!(rel.authority(), Some("user@cdn.example.com"));
        assert_eq!(rel.host(), Some("cdn.example.com"));
    }

    #[test]
    fn non_hierarchical_scheme_is_absolute() {
        assert!(ParsedUrl::parse("mailto:someone@example.com").unwrap().is_absolute());
        assert!(ParsedUrl::parse("data:text/plain,hi").unwrap().is_absolute());
    }

    #[test]
    fn scheme_without_authority_is_not_absolute() {
        let parsed = ParsedUrl::parse("unix:/run/foo.socket").unwrap();
        assert_eq!(parsed.scheme(), "unix");
        assert!(!parsed.is_absolute());
    }

    #[test]
    fn relative_reference_components() {
        let rel = relative("/a/b?q=1#frag");
        assert_eq!(rel.authority(), None);
        assert_eq!(rel.path(), "/a/b");
        assert_eq!(rel.query(), Some("q=1"));
        assert_eq!(rel.fragment(), Some("frag"));
        assert_eq!(rel.as_str(), "/a/b?q=1#frag");

        let rel = relative("b/c");
        assert_eq!(rel.path(), "b/c");
        assert_eq!(rel.query(), None);

        let rel = relative("");
        assert_eq!(rel.path(), "");
        assert_eq!(rel.as_str(), "");
    }

    #[test]
    fn network_path_reference_has_host_but_no_scheme() {
        let parsed = ParsedUrl::parse("//cdn.example.com/x.png").unwrap();
        assert!(!parsed.is_absolute());
        assert_eq!(parsed.scheme(), "");
        assert_eq!(parsed.host().as_deref(), Some("cdn.example.com"));
        assert_eq!(parsed.path(), "/x.png");
    }

    #[test]
    fn colon_in_first_segment_is_rejected() {
        assert_eq!(ParsedUrl::parse(":foo"), Err(ParseError::ColonInFirstSegment));
        assert_eq!(ParsedUrl::parse("1a:b"), Err(ParseError::ColonInFirstSegment));
        // A colon after the first slash is fine.
        assert!(ParsedUrl::parse("./a:b").is_ok());
        assert!(ParsedUrl::parse("/a:b").is_ok());
    }

    #[test]
    fn control_characters_are_rejected() {
        assert_eq!(
            ParsedUrl::parse("https://example.com/\n"),
            Err(ParseError::ControlCharacter { position: 20 })
        );
        assert_eq!(
            ParsedUrl::parse("a\x7fb"),
            Err(ParseError::ControlCharacter { position: 1 })
        );
    }

    #[test]
    fn malformed_escapes_are_rejected() {
        assert_eq!(
            ParsedUrl::parse("/a%zz"),
            Err(ParseError::InvalidEscape { position: 2 })
        );
        assert_eq!(
            ParsedUrl::parse("/ok#bad%4"),
            Err(ParseError::InvalidEscape { position: 7 })
        );
        assert!(ParsedUrl::parse("/a%20b").is_ok());
        // Query strings are passed through untouched.
        assert!(ParsedUrl::parse("/a?x=%zz").is_ok());
    }

    #[test]
    fn backslashes_are_escaped_for_joining() {
        let parsed = ParsedUrl::parse("/\\evil.com/x?q=\\#a\\b").unwrap();
        assert_eq!(parsed.reference_text(), "/%5Cevil.com/x?q=\\#a%5Cb");
        let parsed = ParsedUrl::parse("a/b").unwrap();
        assert!(matches!(parsed.reference_text(), Cow::Borrowed("a/b")));
    }

    #[test]
    fn url_crate_errors_are_wrapped() {
        assert_eq!(
            ParsedUrl::parse("http://[::1"),
            Err(ParseError::Url(url::ParseError::InvalidIpv6Address))
        );
        assert_eq!(
            ParsedUrl::parse("http://example.com:99999/"),
            Err(ParseError::Url(url::ParseError::InvalidPort))
        );
    }
}

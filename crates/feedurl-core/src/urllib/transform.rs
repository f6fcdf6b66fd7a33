//! Derived URL parts used for display and grouping.
//!
//! These never fail. On malformed input they fall back to the closest string
//! already at hand (or `false`), and the swallowed error is logged at debug.

use super::parsed::ParsedUrl;
use super::resolve::resolve_against;

/// Returns `scheme://host/` for `website_url`, dropping path, query and
/// fragment. Protocol-relative input is treated as HTTPS, and an empty host
/// gives `scheme:///`.
pub fn root_origin(website_url: &str) -> String {
    let website_url = match website_url.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => website_url.to_string(),
    };

    let absolute = match resolve_against(&website_url, "") {
        Ok(absolute) => absolute,
        Err(err) => {
            tracing::debug!(url = %website_url, error = %err, "root origin: keeping input");
            return website_url;
        }
    };

    let parsed = match ParsedUrl::parse(&absolute) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!(url = %absolute, error = %err, "root origin: reparse failed");
            return absolute;
        }
    };

    match (parsed.host(), &parsed) {
        (Some(host), _) => format!("{}://{}/", parsed.scheme(), host),
        // Authority with an empty host, as in `file:///tmp/x`.
        (None, ParsedUrl::Absolute(url)) if url.has_authority() => {
            format!("{}:///", url.scheme())
        }
        (None, _) => absolute,
    }
}

/// True if the scheme of `website_url` is `https`, in any case.
pub fn is_https(website_url: &str) -> bool {
    ParsedUrl::parse(website_url)
        .is_ok_and(|parsed| parsed.scheme().eq_ignore_ascii_case("https"))
}

/// Host (with explicit port) of `website_url`.
///
/// Unparseable input is returned unchanged; parseable input without a host
/// yields an empty string.
pub fn host(website_url: &str) -> String {
    match ParsedUrl::parse(website_url) {
        Ok(parsed) => parsed.host().unwrap_or_default(),
        Err(err) => {
            tracing::debug!(url = website_url, error = %err, "host: keeping input as is");
            website_url.to_string()
        }
    }
}

/// [`host`] with a leading `www.` removed.
pub fn host_without_www(website_url: &str) -> String {
    let host = host(website_url);
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

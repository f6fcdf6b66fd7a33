//! Resolution of extracted links against a base URL.

use super::error::{ParseError, UrlError};
use super::parsed::ParsedUrl;
use serde::Serialize;
use url::Url;

/// Outcome of [`absolute_form`]: either the input is already absolute, or a
/// base is needed to resolve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsoluteForm {
    Absolute(String),
    Relative(ParsedUrl),
}

/// Returns the absolute form of `input` if it can be determined without a
/// base, otherwise its parsed form for the caller to resolve.
///
/// Protocol-relative input (`//host/path`) is assumed to be served over HTTPS.
/// Input already starting with `http://` or `https://` is returned verbatim.
pub fn absolute_form(input: &str) -> Result<AbsoluteForm, UrlError> {
    if input.starts_with("//") {
        return Ok(AbsoluteForm::Absolute(format!("https:{input}")));
    }
    if input.starts_with("https://") || input.starts_with("http://") {
        return Ok(AbsoluteForm::Absolute(input.to_string()));
    }

    let parsed = ParsedUrl::parse(input).map_err(|e| UrlError::invalid_input(input, e))?;
    if parsed.is_absolute() {
        Ok(AbsoluteForm::Absolute(parsed.as_str().to_string()))
    } else {
        Ok(AbsoluteForm::Relative(parsed))
    }
}

/// Converts `input` to an absolute URL, resolving it against `base` when
/// necessary (RFC 3986 §5).
///
/// `base` is only parsed if `input` is relative. An empty `input` resolves to
/// the base itself.
pub fn resolve_against(base: &str, input: &str) -> Result<String, UrlError> {
    let reference = match absolute_form(input)? {
        AbsoluteForm::Absolute(absolute) => return Ok(absolute),
        AbsoluteForm::Relative(reference) => reference,
    };

    let base_url = parse_base(base)?;
    if input.is_empty() {
        return Ok(base_url.into());
    }

    // The base already parsed, so a join failure is the reference's fault.
    base_url
        .join(&reference.reference_text())
        .map(String::from)
        .map_err(|e| UrlError::invalid_input(input, e))
}

/// Parses `base` and checks it can anchor a relative reference.
fn parse_base(base: &str) -> Result<Url, UrlError> {
    match ParsedUrl::parse(base).map_err(|e| UrlError::invalid_base(base, e))? {
        ParsedUrl::Absolute(url) if url.cannot_be_a_base() => {
            Err(UrlError::invalid_base(base, ParseError::CannotBeABase))
        }
        ParsedUrl::Absolute(url) if url.has_authority() => Ok(url),
        _ => Err(UrlError::invalid_base(base, ParseError::NotAbsolute)),
    }
}

/// Result of resolving one link in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkOutcome {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LinkOutcome {
    pub fn is_ok(&self) -> bool {
        self.resolved.is_some()
    }
}

/// Resolves every link in `inputs` against `base`.
///
/// A malformed link only fails its own outcome; the rest of the batch is
/// still resolved. Outcomes are returned in input order.
pub fn resolve_all<I, S>(base: &str, inputs: I) -> Vec<LinkOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| {
            let input = input.as_ref();
            match resolve_against(base, input) {
                Ok(resolved) => LinkOutcome {
                    input: input.to_string(),
                    resolved: Some(resolved),
                    error: None,
                },
                Err(err) => {
                    tracing::warn!(base, input, error = %err, "skipping unresolvable link");
                    LinkOutcome {
                        input: input.to_string(),
                        resolved: None,
                        error: Some(err.to_string()),
                    }
                }
            }
        })
        .collect()
}

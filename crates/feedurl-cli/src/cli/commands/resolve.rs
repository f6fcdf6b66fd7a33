//! `feedurl absolute-form <url>` and `feedurl resolve [--base <url>] <url>...`.

use anyhow::Result;
use feedurl_core::config::OutputFormat;
use feedurl_core::urllib::{absolute_form, resolve_against, resolve_all, AbsoluteForm};
use std::io::{BufRead, Write};

pub fn run_absolute_form(out: &mut impl Write, url: &str) -> Result<()> {
    match absolute_form(url)? {
        AbsoluteForm::Absolute(absolute) => writeln!(out, "{absolute}")?,
        AbsoluteForm::Relative(parsed) => writeln!(out, "relative: {parsed}")?,
    }
    Ok(())
}

/// Resolves `urls` against `base`.
///
/// A single link in plain mode fails the command on error. Anything else is a
/// batch: every link gets one output line and failures are reported inline.
pub fn run_resolve(
    out: &mut impl Write,
    base: &str,
    urls: &[String],
    format: OutputFormat,
) -> Result<()> {
    if let ([url], OutputFormat::Plain) = (urls, format) {
        let resolved = resolve_against(base, url)?;
        writeln!(out, "{resolved}")?;
        return Ok(());
    }

    let outcomes = resolve_all(base, urls);
    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    for outcome in &outcomes {
        match format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(outcome)?)?,
            OutputFormat::Plain => match (&outcome.resolved, &outcome.error) {
                (Some(resolved), _) => writeln!(out, "{resolved}")?,
                (None, error) => writeln!(
                    out,
                    "error: {}: {}",
                    outcome.input,
                    error.as_deref().unwrap_or("unresolvable")
                )?,
            },
        }
    }
    tracing::info!(total = outcomes.len(), failed, "resolved batch against {base:?}");
    Ok(())
}

/// Reads one link per line, skipping blank lines.
pub fn read_links(reader: impl BufRead) -> Result<Vec<String>> {
    let mut links = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let link = line.trim();
        if !link.is_empty() {
            links.push(link.to_string());
        }
    }
    Ok(links)
}

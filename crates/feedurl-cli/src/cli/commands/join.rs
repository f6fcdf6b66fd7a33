//! `feedurl join [--base <url>] <path>`.

use anyhow::Result;
use feedurl_core::urllib::join_path;
use std::io::Write;

pub fn run_join(out: &mut impl Write, base: &str, path: &str) -> Result<()> {
    let joined = join_path(base, path)?;
    writeln!(out, "{joined}")?;
    Ok(())
}

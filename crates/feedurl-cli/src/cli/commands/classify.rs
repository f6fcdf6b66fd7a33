//! `feedurl is-absolute <url>`.

use anyhow::Result;
use feedurl_core::urllib::is_absolute;
use std::io::Write;

pub fn run_is_absolute(out: &mut impl Write, url: &str) -> Result<()> {
    writeln!(out, "{}", is_absolute(url))?;
    Ok(())
}

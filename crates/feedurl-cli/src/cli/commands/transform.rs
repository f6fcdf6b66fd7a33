//! `feedurl root`, `feedurl is-https`, `feedurl host`.

use anyhow::Result;
use feedurl_core::urllib::{host, host_without_www, is_https, root_origin};
use std::io::Write;

pub fn run_root(out: &mut impl Write, url: &str) -> Result<()> {
    writeln!(out, "{}", root_origin(url))?;
    Ok(())
}

pub fn run_is_https(out: &mut impl Write, url: &str) -> Result<()> {
    writeln!(out, "{}", is_https(url))?;
    Ok(())
}

pub fn run_host(out: &mut impl Write, url: &str, strip_www: bool) -> Result<()> {
    let host = if strip_www {
        host_without_www(url)
    } else {
        host(url)
    };
    writeln!(out, "{host}")?;
    Ok(())
}

//! CLI for the feedurl resolver.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use feedurl_core::config::{self, OutputFormat};
use std::io::{self, Write};

use commands::{
    read_links, run_absolute_form, run_host, run_is_absolute, run_is_https, run_join, run_resolve,
    run_root,
};

/// Top-level CLI for feedurl.
#[derive(Debug, Parser)]
#[command(name = "feedurl")]
#[command(about = "feedurl: resolve and canonicalize URLs found in feeds", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print whether a URL is absolute.
    IsAbsolute {
        /// URL to classify.
        url: String,
    },

    /// Print the absolute form of a URL, or its relative form if a base is needed.
    AbsoluteForm {
        /// URL to normalize.
        url: String,
    },

    /// Resolve links against a base URL.
    Resolve {
        /// Base URL (defaults to `base_url` from config.toml).
        #[arg(long)]
        base: Option<String>,
        /// Print one JSON object per link.
        #[arg(long)]
        json: bool,
        /// Links to resolve. Use `-` to read one link per line from stdin.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print the root origin (`scheme://host/`) of a URL.
    Root {
        /// Site or feed URL.
        url: String,
    },

    /// Print whether a URL uses HTTPS.
    IsHttps {
        /// URL to check.
        url: String,
    },

    /// Print the host of a URL.
    Host {
        /// URL to inspect.
        url: String,
        /// Strip a leading `www.`.
        #[arg(long)]
        strip_www: bool,
    },

    /// Join a resource path onto a base URL.
    Join {
        /// Base URL (defaults to `api_base_url` from config.toml).
        #[arg(long)]
        base: Option<String>,
        /// Path to append, optionally with `?query` and `#fragment`.
        path: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::IsAbsolute { url } => run_is_absolute(&mut out, &url)?,
            CliCommand::AbsoluteForm { url } => run_absolute_form(&mut out, &url)?,
            CliCommand::Resolve { base, json, urls } => {
                // Without a base only already-absolute links resolve.
                let base = base.or(cfg.base_url).unwrap_or_default();
                let format = if json { OutputFormat::Json } else { cfg.output };
                let urls = if urls == ["-"] {
                    read_links(io::stdin().lock())?
                } else {
                    urls
                };
                run_resolve(&mut out, &base, &urls, format)?;
            }
            CliCommand::Root { url } => run_root(&mut out, &url)?,
            CliCommand::IsHttps { url } => run_is_https(&mut out, &url)?,
            CliCommand::Host { url, strip_www } => run_host(&mut out, &url, strip_www)?,
            CliCommand::Join { base, path } => {
                let base = base
                    .or(cfg.api_base_url)
                    .context("no base URL: pass --base or set api_base_url in config.toml")?;
                run_join(&mut out, &base, &path)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;

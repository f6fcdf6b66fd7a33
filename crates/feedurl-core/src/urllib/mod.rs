//! URL classification, resolution and joining for links pulled out of feeds.
//!
//! Feed entries, enclosures and inline HTML carry URLs in every shape:
//! absolute, root-relative, path-relative, protocol-relative, or broken.
//! The functions here turn them into absolute URLs against a feed's site URL
//! and derive the pieces used for grouping (root origin, host).
//!
//! Everything is a pure function. The Resolver and the Path Joiner fail
//! closed with a [`UrlError`]; the Transformer functions never fail and fall
//! back to their input (or `false`) instead.

mod classify;
mod error;
mod join;
mod parsed;
mod resolve;
mod transform;

pub use classify::is_absolute;
pub use error::{ParseError, UrlError};
pub use join::join_path;
pub use parsed::{ParsedUrl, RelativeRef};
pub use resolve::{absolute_form, resolve_against, resolve_all, AbsoluteForm, LinkOutcome};
pub use transform::{host, host_without_www, is_https, root_origin};

//! CLI command handlers, grouped by the component they drive.

mod classify;
mod join;
mod resolve;
mod transform;

pub use classify::run_is_absolute;
pub use join::run_join;
pub use resolve::{read_links, run_absolute_form, run_resolve};
pub use transform::{run_host, run_is_https, run_root};

//! The linkification pipeline with modular organization.
//!
//! - `core`: DOM passes (anchor repair, text rewriting, split-URL merging)
//!   and the pipeline itself
//! - `process`: the fail-open recovery boundary around the pipeline
//! - `types`: configuration structures and the [`UrlLinkifier`] entry type
mod core;
mod process;
mod types;

pub use types::{LinkifyOptions, LinkifyOptionsBuilder, UrlLinkifier};

//! # urlfix - post-render URL linkification for wiki HTML
//!
//! The wiki platform's own auto-linker only understands ASCII-safe URI
//! grammar, so pasted URLs containing en-dash, em-dash, or ellipsis come out
//! truncated. This crate is the post-render repair pass: it scans rendered
//! HTML fragments for URL-like spans (including ones with that punctuation),
//! wraps them in anchors with correctly percent-encoded destinations, fixes
//! the `href` of existing anchors, and reassembles URLs that ended up split
//! across adjacent inline markup.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = urlfix::linkify_html("Check https://example.com\u{2014}test now");
//!
//! assert!(html.contains("href=\"https://example.com%E2%80%94test\""));
//! assert!(html.contains(">https://example.com\u{2014}test</a>"));
//! assert!(html.ends_with(" now"));
//! ```
//!
//! ## Guarantees
//!
//! - **Visible text preserved verbatim**, with percent-encoding applied to
//!   `href` attributes only
//! - **Idempotent processing** where running the pass twice produces the
//!   same fragment
//! - **Skip zones** so text inside `a`, `code`, `pre`, `script`, `style`,
//!   and `textarea` is never touched, and non-`http(s)` anchors stay alone
//! - **Error recovery** that returns the original fragment unchanged on any
//!   internal failure, with the condition logged via [`log`]
//!
//! ## Configuration
//!
//! ```rust
//! use urlfix::{LinkifyOptionsBuilder, UrlLinkifier};
//!
//! let options = LinkifyOptionsBuilder::new()
//!   .merge_split_urls(false)
//!   .build();
//! let linkifier = UrlLinkifier::new(options);
//!
//! let result = linkifier.linkify("<p>see www.example.com.</p>");
//! assert_eq!(result.stats.anchors_added, 1);
//! ```

pub mod encode;
mod error;
mod linkifier;
pub mod scanner;
pub mod segment;
mod types;

pub use crate::{
  error::LinkifyError,
  linkifier::{LinkifyOptions, LinkifyOptionsBuilder, UrlLinkifier},
  types::{LinkifyResult, LinkifyStats, Segment, TextSpan, UrlMatch},
};

/// Linkify one rendered HTML fragment with default options.
///
/// Convenience wrapper over [`UrlLinkifier`] for the common render-path call
/// site. Empty input is returned unchanged without parsing, and any internal
/// failure falls open to the original input.
#[must_use]
pub fn linkify_html(html: &str) -> String {
  UrlLinkifier::new(LinkifyOptions::default()).linkify(html).html
}

//! Fail-open recovery boundary around the pipeline.
//!
//! The linkifier runs inside the platform's render path on untrusted
//! content; nothing here may take that path down. Internal errors and panics
//! alike are logged and the original fragment is returned unchanged, so the
//! worst observable failure is that links were not added this time.
use std::panic::{AssertUnwindSafe, catch_unwind};

use log::error;

use super::types::UrlLinkifier;
use crate::types::{LinkifyResult, LinkifyStats};

/// Run the pipeline with error recovery.
pub(crate) fn process_with_recovery(
  linkifier: &UrlLinkifier,
  html: &str,
) -> LinkifyResult {
  let outcome = catch_unwind(AssertUnwindSafe(|| linkifier.apply(html)));

  match outcome {
    Ok(Ok((rewritten, stats))) => {
      LinkifyResult {
        html: rewritten,
        stats,
      }
    },
    Ok(Err(err)) => {
      error!("linkify failed: {err}; returning fragment unchanged");
      unchanged(html)
    },
    Err(panic_err) => {
      if let Some(msg) = panic_err.downcast_ref::<String>() {
        error!("panic during linkify: {msg}; returning fragment unchanged");
      } else if let Some(msg) = panic_err.downcast_ref::<&str>() {
        error!("panic during linkify: {msg}; returning fragment unchanged");
      } else {
        error!("panic during linkify; returning fragment unchanged");
      }
      unchanged(html)
    },
  }
}

fn unchanged(html: &str) -> LinkifyResult {
  LinkifyResult {
    html:  html.to_string(),
    stats: LinkifyStats::default(),
  }
}

#[cfg(test)]
mod tests {
  use crate::{LinkifyOptions, UrlLinkifier};

  #[test]
  fn test_malformed_fragments_never_panic() {
    let linkifier = UrlLinkifier::new(LinkifyOptions::default());
    let nasty = [
      "<p>unclosed https://example.com\u{2014}x",
      "<a href=>broken www.example.com</a>",
      "<<<>>> https://example.com/\u{0000}x",
      "<em><em><em>www.example.com/a</em>",
      "plain text with \u{FFFF} and https://example.com\u{2026}",
    ];
    for html in nasty {
      let result = linkifier.linkify(html);
      assert!(!result.html.is_empty(), "lost content for {html:?}");
    }
  }

  #[test]
  fn test_unaffected_fragment_reports_zero_stats() {
    let linkifier = UrlLinkifier::new(LinkifyOptions::default());
    let result = linkifier.linkify("<p>no links at all.</p>");
    assert!(result.stats.is_noop());
    assert_eq!(result.html, "<p>no links at all.</p>");
  }
}

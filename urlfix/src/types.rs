//! Types for the urlfix public API and internal use.
use serde::{Deserialize, Serialize};

/// A half-open byte range into an immutable input string.
///
/// Spans produced by one scan pass never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan {
  /// Byte offset of the first character in the range.
  pub start: usize,
  /// Byte offset one past the last character in the range.
  pub end:   usize,
}

impl TextSpan {
  /// Length of the range in bytes.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.end - self.start
  }

  /// Whether the range is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.start == self.end
  }
}

/// One URL detected inside plain text.
///
/// `raw` is the exact visible substring (never encoded), `href` the fully
/// normalized destination, and `trailing` the sentence punctuation excluded
/// from the match. `raw` followed by `trailing` reconstructs the scanned
/// region exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMatch {
  /// Region of the scanned text covered by `raw` + `trailing`.
  pub span:     TextSpan,
  /// Visible URL text, verbatim from the input.
  pub raw:      String,
  /// Percent-encoded destination with a guaranteed `http(s)://` scheme.
  pub href:     String,
  /// Trailing punctuation excluded from the match, possibly empty.
  pub trailing: String,
}

/// Output unit of the text segment rewriter: either plain text carried over
/// verbatim, or an anchor to splice in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  /// Plain text, emitted unchanged.
  Text(String),
  /// An anchor whose visible text is `text` and destination is `href`.
  Anchor {
    /// Visible anchor text.
    text: String,
    /// Percent-encoded destination.
    href: String,
  },
}

/// Counters describing what one linkify call changed.
#[derive(
  Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq,
)]
pub struct LinkifyStats {
  /// Anchors created from plain text.
  pub anchors_added:    usize,
  /// Existing anchors whose href was re-encoded.
  pub anchors_repaired: usize,
  /// Anchors extended by folding in a split-off continuation.
  pub anchors_merged:   usize,
}

impl LinkifyStats {
  /// Whether the call changed anything at all.
  #[must_use]
  pub const fn is_noop(&self) -> bool {
    self.anchors_added == 0
      && self.anchors_repaired == 0
      && self.anchors_merged == 0
  }
}

/// Result of linkifying one HTML fragment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkifyResult {
  /// The rewritten fragment. Equal to the input when nothing matched or when
  /// processing failed and the engine fell open.
  pub html: String,

  /// What changed. All-zero when `html` is the unmodified input.
  pub stats: LinkifyStats,
}

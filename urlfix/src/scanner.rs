//! Candidate URL discovery inside plain text.
//!
//! The scanner finds the earliest URL-like span at or after a cursor: an
//! explicit `http://`/`https://` scheme, a `www.` prefix, or a bare domain
//! followed by a path/query/fragment delimiter. From the candidate start it
//! grows the match greedily over the widened URL character class (this is
//! what lets an em-dash or ellipsis stay inside the match), then walks back
//! over sentence punctuation so `https://example.com.` links the URL but not
//! the full stop.
use std::sync::LazyLock;

use regex::Regex;

use crate::{
  encode::{CURRENCY_SIGN, is_special, is_url_char, normalize_href},
  types::{TextSpan, UrlMatch},
};

/// Characters trimmed off the end of a match as sentence punctuation.
const TRAILING_PUNCT: [char; 11] =
  ['.', ',', '!', '?', ':', ';', ')', ']', '}', '"', '\''];

/// Bare domains such as `example.com/...`. The trailing delimiter is part of
/// the match because the `regex` crate has no lookahead; only the match start
/// is used, greedy extension re-scans from there.
static BARE_DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)\b(?:[a-z0-9-]+\.)+[a-z]{2,}[/?#]").unwrap_or_else(|e| {
    log::error!("Failed to compile BARE_DOMAIN_RE regex: {e}");
    never_matching_regex()
  })
});

/// A regex that never matches anything, used as a fallback when a pattern
/// fails to compile. Safer than `^$`, which would match empty strings.
fn never_matching_regex() -> Regex {
  #[allow(
    clippy::expect_used,
    reason = "This pattern is guaranteed to be valid"
  )]
  Regex::new(r"[^\s\S]").expect("regex pattern [^\\s\\S] should always compile")
}

/// Whether `c` counts as sentence punctuation when it ends a match.
#[must_use]
pub fn is_trailing_punct(c: char) -> bool {
  TRAILING_PUNCT.contains(&c)
}

/// The widened extension class: URL characters plus the fixed specials plus
/// the currency-sign joiner.
fn is_scan_char(c: char) -> bool {
  is_url_char(c) || is_special(c) || c == CURRENCY_SIGN
}

/// Continuation class for the merge pass: the extension class without the
/// bracket characters.
#[must_use]
pub fn is_continuation_char(c: char) -> bool {
  c != '[' && c != ']' && is_scan_char(c)
}

/// Byte length of the leading run of continuation characters in `text`.
#[must_use]
pub fn leading_continuation_len(text: &str) -> usize {
  let mut len = 0;
  for c in text.chars() {
    if is_continuation_char(c) {
      len += c.len_utf8();
    } else {
      break;
    }
  }
  len
}

/// Trim sentence punctuation off the end of a continuation run.
#[must_use]
pub fn trim_trailing_punct(run: &str) -> &str {
  run.trim_end_matches(is_trailing_punct)
}

/// Cheap pre-parse check: can this fragment contain a URL candidate at all?
/// Used to skip parsing entirely for the common no-URL case.
#[must_use]
pub fn looks_linkifiable(html: &str) -> bool {
  html.contains("http://")
    || html.contains("https://")
    || html.contains("www.")
    || BARE_DOMAIN_RE.is_match(html)
}

/// Earliest candidate start at or after `from`, if any.
fn next_url_start(text: &str, from: usize) -> Option<usize> {
  let slice = &text[from..];
  let candidates = [
    slice.find("http://"),
    slice.find("https://"),
    slice.find("www."),
    BARE_DOMAIN_RE.find(slice).map(|m| m.start()),
  ];
  candidates
    .iter()
    .flatten()
    .min()
    .map(|earliest| from + earliest)
}

/// Find the next URL in `text` at or after byte offset `from`.
///
/// Returns `None` when no further candidate exists. A candidate that shrinks
/// to nothing after punctuation trimming emits no match; the scanner advances
/// past it and keeps looking, so the cursor always moves forward.
#[must_use]
pub fn next_url(text: &str, from: usize) -> Option<UrlMatch> {
  let mut cursor = from;
  while cursor < text.len() {
    let start = next_url_start(text, cursor)?;

    // Grow the match while the character is URL-legal or one of the widened
    // specials.
    let mut end = start;
    for c in text[start..].chars() {
      if is_scan_char(c) {
        end += c.len_utf8();
      } else {
        break;
      }
    }

    let region = &text[start..end];
    let raw = region.trim_end_matches(is_trailing_punct);
    if raw.is_empty() {
      cursor = end;
      continue;
    }

    let raw_end = start + raw.len();
    return Some(UrlMatch {
      span:     TextSpan { start, end },
      raw:      raw.to_string(),
      href:     normalize_href(raw),
      trailing: text[raw_end..end].to_string(),
    });
  }
  None
}

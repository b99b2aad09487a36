//! Rewriting of one text node's content into plain-text and anchor segments.
use crate::{scanner::next_url, types::Segment};

/// Split `text` into an ordered list of plain-text and anchor segments.
///
/// Returns `None` when no URL was found, so callers can skip tree mutation on
/// unaffected text nodes. The concatenation of all segment text (anchor text
/// included) reproduces `text` exactly; trailing punctuation after a match is
/// emitted as plain text, never as part of the anchor.
#[must_use]
pub fn rewrite_text(text: &str) -> Option<Vec<Segment>> {
  let mut segments = Vec::new();
  let mut cursor = 0;
  let mut matched = false;

  while let Some(m) = next_url(text, cursor) {
    matched = true;
    if m.span.start > cursor {
      segments.push(Segment::Text(text[cursor..m.span.start].to_string()));
    }
    segments.push(Segment::Anchor {
      text: m.raw,
      href: m.href,
    });
    if !m.trailing.is_empty() {
      segments.push(Segment::Text(m.trailing));
    }
    cursor = m.span.end;
  }

  if !matched {
    return None;
  }
  if cursor < text.len() {
    segments.push(Segment::Text(text[cursor..].to_string()));
  }
  Some(segments)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Tests can unwrap")]

  use super::*;

  fn joined(segments: &[Segment]) -> String {
    segments
      .iter()
      .map(|s| {
        match s {
          Segment::Text(t) => t.as_str(),
          Segment::Anchor { text, .. } => text.as_str(),
        }
      })
      .collect()
  }

  #[test]
  fn test_unaffected_text_reports_no_change() {
    assert!(rewrite_text("no links in here.").is_none());
    assert!(rewrite_text("").is_none());
  }

  #[test]
  fn test_single_url_with_surrounding_text() {
    let segments =
      rewrite_text("Check https://example.com\u{2014}test now").unwrap();
    assert_eq!(
      segments,
      vec![
        Segment::Text("Check ".into()),
        Segment::Anchor {
          text: "https://example.com\u{2014}test".into(),
          href: "https://example.com%E2%80%94test".into(),
        },
        Segment::Text(" now".into()),
      ]
    );
  }

  #[test]
  fn test_trailing_punctuation_becomes_plain_text() {
    let segments = rewrite_text("Visit www.example.com.").unwrap();
    assert_eq!(
      segments,
      vec![
        Segment::Text("Visit ".into()),
        Segment::Anchor {
          text: "www.example.com".into(),
          href: "https://www.example.com".into(),
        },
        Segment::Text(".".into()),
      ]
    );
  }

  #[test]
  fn test_multiple_urls_in_one_node() {
    let segments =
      rewrite_text("a https://one.org/x b www.two.org c").unwrap();
    let anchors = segments
      .iter()
      .filter(|s| matches!(s, Segment::Anchor { .. }))
      .count();
    assert_eq!(anchors, 2);
    assert_eq!(joined(&segments), "a https://one.org/x b www.two.org c");
  }

  #[test]
  fn test_visible_text_is_preserved_verbatim() {
    let inputs = [
      "https://example.com\u{2026}and(then) some.",
      "start www.a.org\u{2013}b!? end",
      "example.com/q?x=\u{00A4}1, done",
    ];
    for input in inputs {
      let segments = rewrite_text(input).unwrap();
      assert_eq!(joined(&segments), input, "text changed for {input:?}");
    }
  }
}

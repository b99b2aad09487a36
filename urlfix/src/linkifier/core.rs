//! DOM passes over the parsed fragment.
//!
//! Pipeline order matters: existing anchors are repaired first, then plain
//! text is rewritten into anchors, and only then are split-off URL
//! continuations merged back, so the merge pass sees every anchor the call
//! will ever produce, in stable left-to-right sibling order.
use kuchikikiki::NodeRef;
use log::trace;
use markup5ever::local_name;
use tendril::TendrilSink;

use super::types::UrlLinkifier;
use crate::{
  encode::{encode_url_piece, normalize_href},
  error::LinkifyError,
  scanner,
  segment::rewrite_text,
  types::{LinkifyResult, LinkifyStats, Segment},
};

/// Tags whose subtrees are never scanned or rewritten.
const SKIP_TAGS: [&str; 6] = ["a", "script", "style", "pre", "code", "textarea"];

/// Inline decoration elements the merge pass may consume a continuation from,
/// when they wrap a single text child.
const INLINE_TAGS: [&str; 13] = [
  "span", "b", "i", "em", "strong", "small", "code", "samp", "kbd", "u", "s",
  "sup", "sub",
];

impl UrlLinkifier {
  /// Linkify one rendered HTML fragment.
  ///
  /// Detects URL-like spans in text (including ones containing en-dash,
  /// em-dash, and ellipsis), wraps them in anchors with percent-encoded
  /// destinations, repairs existing `http(s)`/`www.` anchors, and folds
  /// split-off URL continuations back into their anchor. Visible text is
  /// never altered.
  ///
  /// Fails open: on any internal error the original fragment is returned
  /// unchanged and the condition is logged.
  #[must_use]
  pub fn linkify(&self, html: &str) -> LinkifyResult {
    if html.is_empty() {
      return LinkifyResult {
        html:  String::new(),
        stats: LinkifyStats::default(),
      };
    }

    if self.options.sniff && !scanner::looks_linkifiable(html) {
      trace!("no URL candidate in fragment, skipping parse");
      return LinkifyResult {
        html:  html.to_string(),
        stats: LinkifyStats::default(),
      };
    }

    super::process::process_with_recovery(self, html)
  }

  /// The fallible pipeline body. Callers go through
  /// [`linkify`](Self::linkify), which adds the recovery boundary.
  pub(crate) fn apply(
    &self,
    html: &str,
  ) -> Result<(String, LinkifyStats), LinkifyError> {
    let mut stats = LinkifyStats::default();
    let root = parse_fragment(html);

    if self.options.repair_anchors {
      repair_anchors(&root, &mut stats);
    }
    linkify_text_nodes(&root, &mut stats);
    if self.options.merge_split_urls {
      merge_split_urls(&root, &mut stats);
    }

    let rewritten = serialize_fragment(&root)?;
    trace!(
      "linkified fragment: {} added, {} repaired, {} merged",
      stats.anchors_added, stats.anchors_repaired, stats.anchors_merged
    );
    Ok((rewritten, stats))
  }
}

/// Parse an HTML fragment with a `body` context element, so block and inline
/// content land where the platform's renderer put them.
fn parse_fragment(html: &str) -> NodeRef {
  let context = markup5ever::QualName::new(
    None,
    markup5ever::ns!(html),
    local_name!("body"),
  );
  let document = kuchikikiki::parse_fragment(context, Vec::new()).one(html);
  // The parser wraps fragment children in a synthetic root element; hand that
  // to the passes so they only ever see the fragment's own nodes.
  document.first_child().unwrap_or(document)
}

/// Serialize the fragment root's children, keeping the output a fragment
/// (no `<html>`/`<body>` wrapper).
fn serialize_fragment(root: &NodeRef) -> Result<String, LinkifyError> {
  let mut out = Vec::new();
  for child in root.children() {
    child.serialize(&mut out)?;
  }
  Ok(String::from_utf8(out)?)
}

/// A destination this engine is allowed to rewrite.
fn scheme_recognized(href: &str) -> bool {
  href.starts_with("http://")
    || href.starts_with("https://")
    || href.starts_with("www.")
}

/// Re-encode the `href` of existing anchors with a recognized scheme.
/// `mailto:`, relative, and fragment hrefs are left untouched, and visible
/// anchor text is never modified here.
fn repair_anchors(root: &NodeRef, stats: &mut LinkifyStats) {
  let Ok(anchors) = root.select("a[href]") else {
    return;
  };

  // Collect first so attribute edits don't happen mid-iteration
  let anchors: Vec<_> = anchors.collect();
  for anchor in anchors {
    let href = anchor
      .attributes
      .borrow()
      .get(local_name!("href"))
      .map(std::string::ToString::to_string);
    let Some(href) = href else { continue };
    if href.is_empty() || !scheme_recognized(&href) {
      continue;
    }

    let fixed = normalize_href(&href);
    if fixed != href {
      anchor
        .attributes
        .borrow_mut()
        .insert(local_name!("href"), fixed);
      stats.anchors_repaired += 1;
    }
  }
}

/// Whether a text node sits inside an element whose subtree is off-limits.
fn in_skip_zone(node: &NodeRef) -> bool {
  let mut parent = node.parent();
  while let Some(p) = parent {
    if let Some(element) = p.as_element() {
      if SKIP_TAGS.contains(&element.name.local.as_ref()) {
        return true;
      }
    }
    parent = p.parent();
  }
  false
}

/// Rewrite every eligible text node into plain-text and anchor siblings.
fn linkify_text_nodes(root: &NodeRef, stats: &mut LinkifyStats) {
  // Collect all candidates first to avoid mutating the tree mid-traversal.
  // inclusive_descendants walks depth-first, so splice order below preserves
  // left-to-right document order for the merge pass.
  let mut to_rewrite = Vec::new();
  for node in root.inclusive_descendants() {
    if let Some(text) = node.as_text() {
      if in_skip_zone(&node) {
        continue;
      }
      let content = text.borrow().clone();
      if content.trim().is_empty() {
        continue;
      }
      to_rewrite.push((node.clone(), content));
    }
  }

  for (node, content) in to_rewrite {
    let Some(segments) = rewrite_text(&content) else {
      continue;
    };
    for segment in segments {
      match segment {
        Segment::Text(text) => node.insert_before(NodeRef::new_text(text)),
        Segment::Anchor { text, href } => {
          node.insert_before(new_anchor(&text, href));
          stats.anchors_added += 1;
        },
      }
    }
    node.detach();
  }
}

/// Build `<a href="...">text</a>`.
fn new_anchor(text: &str, href: String) -> NodeRef {
  let anchor = NodeRef::new_element(
    markup5ever::QualName::new(None, markup5ever::ns!(html), local_name!("a")),
    vec![(
      kuchikikiki::ExpandedName::new("", "href"),
      kuchikikiki::Attribute {
        prefix: None,
        value:  href,
      },
    )],
  );
  anchor.append(NodeRef::new_text(text));
  anchor
}

/// Fold URL continuations that ended up after an anchor back into it.
fn merge_split_urls(root: &NodeRef, stats: &mut LinkifyStats) {
  let Ok(anchors) = root.select("a[href]") else {
    return;
  };

  let anchors: Vec<_> = anchors.collect();
  for anchor in anchors {
    let href = anchor
      .attributes
      .borrow()
      .get(local_name!("href"))
      .map(std::string::ToString::to_string);
    let Some(href) = href else { continue };
    if !scheme_recognized(&href) {
      continue;
    }

    if merge_anchor_continuations(anchor.as_node(), href) {
      stats.anchors_merged += 1;
    }
  }
}

/// Consume sibling URL continuations into `anchor` until the next character
/// is not continuable. Returns whether anything was merged.
///
/// Each round either stops or detaches a consumed node, so the loop is
/// bounded by the remaining siblings. A partially consumed sibling stops the
/// scan: its leading character is, by construction, no longer continuable.
fn merge_anchor_continuations(anchor: &NodeRef, mut href: String) -> bool {
  let mut merged = false;
  loop {
    let Some(next) = anchor.next_sibling() else {
      break;
    };
    let Some((text_node, wrapper)) = continuation_text(&next) else {
      break;
    };
    let Some(text) = text_node.as_text() else {
      break;
    };

    let raw = text.borrow().clone();
    let run_len = scanner::leading_continuation_len(&raw);
    // Sentence punctuation at the end of the run stays outside the anchor,
    // exactly as the scanner treats it. Without this trim a second pass over
    // `<a>…</a>.` would swallow the full stop.
    let run = scanner::trim_trailing_punct(&raw[..run_len]);
    if run.is_empty() {
      break;
    }

    append_anchor_text(anchor, run);
    href = format!("{}{}", encode_url_piece(&href), encode_url_piece(run));
    set_href(anchor, href.clone());
    merged = true;

    let remainder = raw[run.len()..].to_string();
    if remainder.is_empty() {
      text_node.detach();
      if let Some(wrapper) = wrapper {
        if wrapper.first_child().is_none() {
          wrapper.detach();
        }
      }
    } else {
      *text.borrow_mut() = remainder;
      break;
    }
  }
  merged
}

/// Resolve the node a continuation may be read from: the sibling itself when
/// it is a text node, or the sole text child of an inline decoration element.
fn continuation_text(node: &NodeRef) -> Option<(NodeRef, Option<NodeRef>)> {
  if node.as_text().is_some() {
    return Some((node.clone(), None));
  }

  let element = node.as_element()?;
  if !INLINE_TAGS.contains(&element.name.local.as_ref()) {
    return None;
  }
  let first = node.first_child()?;
  if first.next_sibling().is_some() || first.as_text().is_none() {
    return None;
  }
  Some((first, Some(node.clone())))
}

fn set_href(anchor: &NodeRef, href: String) {
  if let Some(element) = anchor.as_element() {
    element
      .attributes
      .borrow_mut()
      .insert(local_name!("href"), href);
  }
}

/// Extend the anchor's visible text without disturbing nested markup.
fn append_anchor_text(anchor: &NodeRef, run: &str) {
  if let Some(last) = anchor.last_child() {
    if let Some(text) = last.as_text() {
      text.borrow_mut().push_str(run);
      return;
    }
  }
  anchor.append(NodeRef::new_text(run));
}

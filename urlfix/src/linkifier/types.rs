//! Configuration types for the linkification pipeline.

/// Options for configuring the linkifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Config struct with related boolean flags"
)]
pub struct LinkifyOptions {
  /// Re-encode the `href` of existing anchors whose destination starts with
  /// `http://`, `https://`, or `www.`. Anchors with any other scheme are
  /// never touched.
  pub repair_anchors: bool,

  /// Fold URL continuations that ended up in a following sibling (directly,
  /// or inside a single-child inline wrapper) back into the anchor.
  pub merge_split_urls: bool,

  /// Skip parsing entirely when a cheap scan finds no URL candidate in the
  /// raw fragment. Purely a fast path; output is identical either way.
  pub sniff: bool,
}

impl Default for LinkifyOptions {
  fn default() -> Self {
    Self {
      repair_anchors:   true,
      merge_split_urls: true,
      sniff:            true,
    }
  }
}

/// Builder for constructing [`LinkifyOptions`] with method chaining.
#[derive(Debug, Clone, Default)]
pub struct LinkifyOptionsBuilder {
  options: LinkifyOptions,
}

impl LinkifyOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Enable or disable the anchor repair pass.
  #[must_use]
  pub const fn repair_anchors(mut self, enabled: bool) -> Self {
    self.options.repair_anchors = enabled;
    self
  }

  /// Enable or disable the split-URL merge pass.
  #[must_use]
  pub const fn merge_split_urls(mut self, enabled: bool) -> Self {
    self.options.merge_split_urls = enabled;
    self
  }

  /// Enable or disable the pre-parse sniff.
  #[must_use]
  pub const fn sniff(mut self, enabled: bool) -> Self {
    self.options.sniff = enabled;
    self
  }

  /// Build the final [`LinkifyOptions`].
  #[must_use]
  pub const fn build(self) -> LinkifyOptions {
    self.options
  }
}

/// The URL linkifier.
///
/// Cheap to construct and to copy; all state lives in the options. Each
/// [`linkify`](UrlLinkifier::linkify) call builds and discards its own
/// fragment tree, so one instance can serve any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlLinkifier {
  pub(crate) options: LinkifyOptions,
}

impl UrlLinkifier {
  /// Create a new `UrlLinkifier` with the given options.
  #[must_use]
  pub const fn new(options: LinkifyOptions) -> Self {
    Self { options }
  }

  /// Access linkifier options.
  #[must_use]
  pub const fn options(&self) -> &LinkifyOptions {
    &self.options
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_enable_every_pass() {
    let options = LinkifyOptions::default();
    assert!(options.repair_anchors);
    assert!(options.merge_split_urls);
    assert!(options.sniff);
  }

  #[test]
  fn test_builder_overrides_single_flags() {
    let options = LinkifyOptionsBuilder::new()
      .merge_split_urls(false)
      .sniff(false)
      .build();
    assert!(options.repair_anchors);
    assert!(!options.merge_split_urls);
    assert!(!options.sniff);
  }
}

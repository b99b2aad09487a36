//! Error types surfaced at the fail-open boundary.
use thiserror::Error;

/// Errors the linkify pipeline can hit internally.
///
/// None of these escape [`crate::linkify_html`] or
/// [`crate::UrlLinkifier::linkify`]: the recovery boundary logs them and
/// returns the original fragment unchanged.
#[derive(Debug, Error)]
pub enum LinkifyError {
  /// Writing the rewritten tree back out failed.
  #[error("failed to serialize rewritten fragment: {0}")]
  Serialize(#[from] std::io::Error),

  /// The serializer produced bytes that are not valid UTF-8.
  #[error("rewritten fragment is not valid UTF-8: {0}")]
  Encoding(#[from] std::string::FromUtf8Error),
}

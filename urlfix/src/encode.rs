//! Destination encoding for anchor hrefs.
//!
//! The visible text of a link is always left verbatim; only the `href`
//! attribute goes through the encoders here.

/// Fixed percent-encodings for the Unicode punctuation that URI grammars
/// exclude but that shows up inside pasted wiki URLs.
pub const SPECIALS: [(char, &str); 3] = [
  ('\u{2013}', "%E2%80%93"), // en-dash
  ('\u{2014}', "%E2%80%94"), // em-dash
  ('\u{2026}', "%E2%80%A6"), // ellipsis
];

/// Currency sign, a known joiner inside pasted URLs. It has no fixed table
/// entry; the generic byte encoder handles it.
pub const CURRENCY_SIGN: char = '\u{00A4}';

/// Whether `c` may appear unencoded in a URL: RFC3986 unreserved + reserved
/// plus `%` so already-encoded input survives another pass.
#[must_use]
pub const fn is_url_char(c: char) -> bool {
  c.is_ascii_alphanumeric()
    || matches!(
      c,
      '-'
        | '.'
        | '_'
        | '~'
        | ':'
        | '/'
        | '?'
        | '#'
        | '['
        | ']'
        | '@'
        | '!'
        | '$'
        | '&'
        | '\''
        | '('
        | ')'
        | '*'
        | '+'
        | ','
        | ';'
        | '='
        | '%'
    )
}

/// Fixed encoding for `c`, if it has a table entry.
#[must_use]
pub fn special_encoding(c: char) -> Option<&'static str> {
  SPECIALS
    .iter()
    .find(|(special, _)| *special == c)
    .map(|(_, encoded)| *encoded)
}

/// Whether `c` is one of the fixed-table specials.
#[must_use]
pub fn is_special(c: char) -> bool {
  special_encoding(c).is_some()
}

/// Percent-encode one URL piece.
///
/// Table specials get their fixed encoding, characters in the allowed URL
/// class pass through, and everything else is encoded byte-by-byte as `%XX`
/// over its UTF-8 representation. Pure and total; never fails.
#[must_use]
pub fn encode_url_piece(raw: &str) -> String {
  let mut out = String::with_capacity(raw.len());
  for c in raw.chars() {
    if let Some(encoded) = special_encoding(c) {
      out.push_str(encoded);
    } else if is_url_char(c) {
      out.push(c);
    } else {
      let mut buf = [0_u8; 4];
      for byte in c.encode_utf8(&mut buf).bytes() {
        out.push_str(&format!("%{byte:02X}"));
      }
    }
  }
  out
}

/// Build the destination for a scanned URL.
///
/// Keeps an explicit `http://`/`https://` scheme; scheme-less matches (bare
/// `www.` or bare-domain text) are assumed HTTPS. The result is fully
/// percent-encoded.
#[must_use]
pub fn normalize_href(url_text: &str) -> String {
  let href =
    if url_text.starts_with("http://") || url_text.starts_with("https://") {
      url_text.to_string()
    } else {
      format!("https://{url_text}")
    };
  encode_url_piece(&href)
}

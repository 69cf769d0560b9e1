//! JSON string literal <-> raw text conversion for the limited escape set.
//!
//! Only the single-character escapes are supported. `\uXXXX` payloads are
//! never decoded: the scanner accepts the token, `unescape` rejects it.

use crate::error::ScanError;

/// Quote `raw` as a JSON string literal, escaping the supported set
/// (`" \ \b \f \n \r \t`).
///
/// Control characters outside that set are passed through raw; they would
/// need the unsupported `\uXXXX` form.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for c in raw.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Convert a quoted JSON string literal back to its raw text.
///
/// The input must start and end with an unescaped `"`. Escapes outside the
/// supported table (notably `\u`) are an error.
pub fn unescape(quoted: &str) -> Result<String, ScanError> {
    let bytes = quoted.as_bytes();
    if bytes.first() != Some(&b'"') {
        return Err(ScanError::NotAString);
    }
    if bytes.len() < 2 || bytes[bytes.len() - 1] != b'"' {
        return Err(ScanError::Malformed(bytes.len().saturating_sub(1)));
    }

    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('"') => out.push('"'),
            Some(other) => return Err(ScanError::UnsupportedEscape(other)),
            // A trailing backslash means the closing quote was escaped.
            None => return Err(ScanError::Malformed(quoted.len() - 1)),
        }
    }
    Ok(out)
}

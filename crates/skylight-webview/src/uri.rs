//! `data:text/html,` navigation targets.
//!
//! Inline pages travel percent-encoded inside the URL; `navigate` unpacks
//! them and hands the raw markup to the WebView instead of the URL stack.

use std::fmt::Write;

/// Percent-encode everything outside the unreserved set
/// (alphanumerics and `- _ . ~`).
pub fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => {
                let _ = write!(out, "%{b:02x}");
            }
        }
    }
    out
}

/// Decode percent escapes and `+` as space. A `%` without two hex digits
/// behind it is kept literally.
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => match (hex_nibble(bytes[i + 1]), hex_nibble(bytes[i + 2])) {
                (Some(hi), Some(lo)) => {
                    out.push(hi * 16 + lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// The decoded markup of a `data:text/html,` URI, or `None` for every other
/// navigation target.
pub fn html_from_uri(uri: &str) -> Option<String> {
    uri.strip_prefix("data:text/html,").map(url_decode)
}

fn hex_nibble(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|v| v as u8)
}

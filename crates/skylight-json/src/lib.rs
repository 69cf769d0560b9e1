//! Minimal JSON-subset reading for the RPC bridge.
//!
//! The bridge only ever needs single fields out of small, trusted envelopes,
//! so this crate deliberately stays below a full JSON library: a borrowing
//! scanner that locates one top-level value (`raw`), the limited string
//! escape/unescape pair, and `parse` combining the two.

mod error;
mod escape;
mod scan;

pub use error::ScanError;
pub use escape::{escape, unescape};
pub use scan::{raw, Selector};

/// Extract the selected top-level value as owned text.
///
/// String values are unescaped; every other value kind is returned as its raw
/// span. Callers that need "absent" semantics for malformed input collapse
/// the error themselves.
pub fn parse(text: &str, selector: Selector<'_>) -> Result<String, ScanError> {
    let span = raw(text, selector)?;
    if span.starts_with('"') {
        unescape(span)
    } else {
        Ok(span.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_unescapes_strings() {
        let text = r#"{"method":"calc.add","note":"line\none"}"#;
        assert_eq!(parse(text, Selector::Key("method")).unwrap(), "calc.add");
        assert_eq!(parse(text, Selector::Key("note")).unwrap(), "line\none");
    }

    #[test]
    fn parse_returns_non_strings_raw() {
        let text = r#"{"id":12,"params":[1,2],"flag":true}"#;
        assert_eq!(parse(text, Selector::Key("id")).unwrap(), "12");
        assert_eq!(parse(text, Selector::Key("params")).unwrap(), "[1,2]");
        assert_eq!(parse(text, Selector::Key("flag")).unwrap(), "true");
    }

    #[test]
    fn parse_propagates_absence_and_escape_failures() {
        let text = r#"{"u":"\u0041"}"#;
        assert_eq!(
            parse(text, Selector::Key("u")),
            Err(ScanError::UnsupportedEscape('u'))
        );
        assert_eq!(
            parse(text, Selector::Key("missing")),
            Err(ScanError::NotFound)
        );
    }

    #[test]
    fn parse_by_index_reads_positional_params() {
        let params = "[2,3]";
        assert_eq!(parse(params, Selector::Index(0)).unwrap(), "2");
        assert_eq!(parse(params, Selector::Index(1)).unwrap(), "3");
        assert_eq!(
            parse(params, Selector::Index(2)),
            Err(ScanError::NotFound)
        );
    }
}

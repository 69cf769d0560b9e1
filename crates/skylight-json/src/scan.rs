//! Non-allocating scanner over a JSON text.
//!
//! `raw` walks the document with a five-state token machine and returns the
//! borrowed span of one *top-level* value — a value whose immediately
//! enclosing structure is the outermost `{...}` or `[...]`. Everything nested
//! deeper is skipped opaquely, and nothing past the selected value is
//! validated. This is intentionally not a JSON parser: it reads single fields
//! out of small RPC envelopes without building a tree.

use crate::error::ScanError;

/// Which top-level value to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// The value following the top-level key with this exact byte content.
    Key(&'a str),
    /// The `n`-th top-level value, 0-based, counting values but not keys.
    Index(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Expecting the start of a value (or skipping separators).
    Value,
    /// Inside a bare token: `true`, `false`, `null`, or a number.
    Literal,
    /// Inside a quoted string.
    Str,
    /// Just consumed a backslash inside a string.
    Escape,
    /// Consuming continuation bytes of a multi-byte UTF-8 sequence.
    Utf8 { remaining: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    None,
    /// A string or literal token starts at this byte.
    Start,
    /// A string or literal token ends at `token_end`.
    End,
    /// An object or array opens here.
    StartStruct,
    /// An object or array closes here.
    EndStruct,
}

/// Return the span of the selected top-level value, quotes included for
/// strings.
///
/// The outermost container itself is never selectable; a bare scalar document
/// has no top-level values at all. Any malformed byte sequence aborts the
/// scan with `Malformed`; running off the end of the text yields `NotFound`.
pub fn raw<'a>(text: &'a str, selector: Selector<'_>) -> Result<&'a str, ScanError> {
    let bytes = text.as_bytes();
    // In key mode `index` counts down through the key/value alternation:
    // 1 = the next token is a key candidate, 0 = the next value is selected.
    let (key, mut index) = match selector {
        Selector::Key(k) => (Some(k.as_bytes()), 1usize),
        Selector::Index(n) => (None, n),
    };

    let mut state = State::Value;
    let mut depth: i32 = 0;
    let mut value_start: Option<usize> = None;
    let mut key_start: Option<usize> = None;
    let mut i = 0usize;

    while i < bytes.len() {
        let c = bytes[i];
        let mut action = Action::None;
        // Last byte belonging to the ending token. Literals end one byte
        // before the delimiter, which is re-examined in `Value`.
        let mut token_end = i;
        let mut consumed = true;

        match state {
            State::Value => match c {
                b' ' | b'\t' | b'\n' | b'\r' | b',' | b':' => {
                    i += 1;
                    continue;
                }
                b'"' => {
                    action = Action::Start;
                    state = State::Str;
                }
                b'{' | b'[' => action = Action::StartStruct,
                b'}' | b']' => action = Action::EndStruct,
                b't' | b'f' | b'n' | b'-' | b'0'..=b'9' => {
                    action = Action::Start;
                    state = State::Literal;
                }
                _ => return Err(ScanError::Malformed(i)),
            },
            State::Literal => match c {
                b' ' | b'\t' | b'\n' | b'\r' | b',' | b']' | b'}' | b':' => {
                    state = State::Value;
                    action = Action::End;
                    token_end = i - 1;
                    consumed = false;
                }
                0..=31 | 127..=u8::MAX => return Err(ScanError::Malformed(i)),
                _ => {}
            },
            State::Str => match c {
                0..=31 => return Err(ScanError::Malformed(i)),
                b'"' => {
                    action = Action::End;
                    state = State::Value;
                }
                b'\\' => state = State::Escape,
                128..=191 => return Err(ScanError::Malformed(i)),
                192..=223 => state = State::Utf8 { remaining: 1 },
                224..=239 => state = State::Utf8 { remaining: 2 },
                240..=246 => state = State::Utf8 { remaining: 3 },
                _ => {}
            },
            State::Escape => match c {
                b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' | b'u' => {
                    state = State::Str;
                }
                _ => return Err(ScanError::Malformed(i)),
            },
            State::Utf8 { remaining } => match c {
                128..=191 => {
                    state = if remaining == 1 {
                        State::Str
                    } else {
                        State::Utf8 {
                            remaining: remaining - 1,
                        }
                    };
                }
                _ => return Err(ScanError::Malformed(i)),
            },
        }

        // The closer leaves its structure before the depth test below, so a
        // nested structure's final byte is observed at depth 1 and the
        // outermost closer at depth 0.
        if action == Action::EndStruct {
            depth -= 1;
        }

        if depth == 1 {
            match action {
                Action::Start | Action::StartStruct => {
                    if index == 0 {
                        value_start = Some(i);
                    } else if key.is_some() && index == 1 {
                        key_start = Some(i);
                    } else {
                        index -= 1;
                    }
                }
                Action::End | Action::EndStruct => {
                    if let (Some(start), 0) = (value_start, index) {
                        return Ok(&text[start..token_end + 1]);
                    }
                    if let (Some(k), Some(ks)) = (key, key_start.take()) {
                        if bytes.get(ks + 1..token_end) == Some(k) {
                            // Key matched: select the value that follows.
                            index = 0;
                        } else {
                            // Skip the value that follows, then expect a key.
                            index = 2;
                        }
                    }
                }
                Action::None => {}
            }
        }

        if action == Action::StartStruct {
            depth += 1;
        }

        if consumed {
            i += 1;
        }
    }

    Err(ScanError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Key selection --

    #[test]
    fn key_selects_string_value() {
        let text = r#"{"id":"42","method":"add"}"#;
        assert_eq!(raw(text, Selector::Key("id")), Ok("\"42\""));
        assert_eq!(raw(text, Selector::Key("method")), Ok("\"add\""));
    }

    #[test]
    fn key_selects_literal_value() {
        let text = r#"{"id":17,"ok":true,"nothing":null}"#;
        assert_eq!(raw(text, Selector::Key("id")), Ok("17"));
        assert_eq!(raw(text, Selector::Key("ok")), Ok("true"));
        assert_eq!(raw(text, Selector::Key("nothing")), Ok("null"));
    }

    #[test]
    fn key_selects_nested_structure_whole() {
        let text = r#"{"params":[2,{"x":3}],"id":1}"#;
        assert_eq!(raw(text, Selector::Key("params")), Ok(r#"[2,{"x":3}]"#));
        // The sibling after the nested structure is still reachable.
        assert_eq!(raw(text, Selector::Key("id")), Ok("1"));
    }

    #[test]
    fn nested_keys_are_not_visible_at_top_level() {
        let text = r#"{"outer":{"inner":"x"},"tail":5}"#;
        assert_eq!(raw(text, Selector::Key("inner")), Err(ScanError::NotFound));
        assert_eq!(raw(text, Selector::Key("tail")), Ok("5"));
    }

    #[test]
    fn absent_key_is_not_found() {
        let text = r#"{"a":1}"#;
        assert_eq!(raw(text, Selector::Key("b")), Err(ScanError::NotFound));
    }

    #[test]
    fn key_match_is_exact_bytes() {
        let text = r#"{"ab":1,"a":2}"#;
        assert_eq!(raw(text, Selector::Key("a")), Ok("2"));
        assert_eq!(raw(text, Selector::Key("ab")), Ok("1"));
        assert_eq!(raw(text, Selector::Key("abc")), Err(ScanError::NotFound));
    }

    #[test]
    fn whitespace_between_tokens_is_skipped() {
        let text = "{ \"a\" :\t1 ,\n\"b\" : \"two\" }";
        assert_eq!(raw(text, Selector::Key("a")), Ok("1"));
        assert_eq!(raw(text, Selector::Key("b")), Ok("\"two\""));
    }

    // -- Index selection --

    #[test]
    fn index_selects_array_elements() {
        let text = r#"[10,"twenty",[30],{"f":40},null]"#;
        assert_eq!(raw(text, Selector::Index(0)), Ok("10"));
        assert_eq!(raw(text, Selector::Index(1)), Ok("\"twenty\""));
        assert_eq!(raw(text, Selector::Index(2)), Ok("[30]"));
        assert_eq!(raw(text, Selector::Index(3)), Ok(r#"{"f":40}"#));
        assert_eq!(raw(text, Selector::Index(4)), Ok("null"));
    }

    #[test]
    fn index_past_end_is_not_found() {
        let text = "[1,2]";
        assert_eq!(raw(text, Selector::Index(2)), Err(ScanError::NotFound));
        assert_eq!(raw(text, Selector::Index(9)), Err(ScanError::NotFound));
    }

    #[test]
    fn index_mode_walks_object_entries_in_order() {
        // Index mode has no key/value distinction; an object with one entry
        // has the key at 0 and the value at 1.
        let text = r#"{"k":"v"}"#;
        assert_eq!(raw(text, Selector::Index(0)), Ok("\"k\""));
        assert_eq!(raw(text, Selector::Index(1)), Ok("\"v\""));
    }

    #[test]
    fn empty_containers_have_no_values() {
        assert_eq!(raw("[]", Selector::Index(0)), Err(ScanError::NotFound));
        assert_eq!(raw("{}", Selector::Index(0)), Err(ScanError::NotFound));
    }

    #[test]
    fn bare_scalar_has_no_top_level_values() {
        assert_eq!(raw("42", Selector::Index(0)), Err(ScanError::NotFound));
        assert_eq!(raw("\"x\"", Selector::Index(0)), Err(ScanError::NotFound));
    }

    #[test]
    fn literal_terminated_by_end_of_container() {
        assert_eq!(raw("[1]", Selector::Index(0)), Ok("1"));
        assert_eq!(raw("[-3.5e2]", Selector::Index(0)), Ok("-3.5e2"));
    }

    // -- Strings with escapes and UTF-8 --

    #[test]
    fn escaped_quote_does_not_end_string() {
        let text = r#"{"a":"x\"y","b":2}"#;
        assert_eq!(raw(text, Selector::Key("a")), Ok(r#""x\"y""#));
        assert_eq!(raw(text, Selector::Key("b")), Ok("2"));
    }

    #[test]
    fn unicode_escape_token_is_scannable() {
        // \u is a legal escape for the scanner even though unescape rejects it.
        let text = r#"{"a":"\u0041"}"#;
        assert_eq!(raw(text, Selector::Key("a")), Ok(r#""\u0041""#));
    }

    #[test]
    fn multibyte_utf8_in_strings() {
        let text = "{\"name\":\"héllo\",\"emoji\":\"🦀\",\"n\":1}";
        assert_eq!(raw(text, Selector::Key("name")), Ok("\"héllo\""));
        assert_eq!(raw(text, Selector::Key("emoji")), Ok("\"🦀\""));
        assert_eq!(raw(text, Selector::Key("n")), Ok("1"));
    }

    // -- Malformed input --

    #[test]
    fn invalid_escape_is_malformed() {
        let err = raw(r#"{"a":"\x"}"#, Selector::Key("a"));
        assert!(matches!(err, Err(ScanError::Malformed(_))));
    }

    #[test]
    fn control_byte_in_string_is_malformed() {
        let err = raw("{\"a\":\"b\u{0001}c\"}", Selector::Key("a"));
        assert!(matches!(err, Err(ScanError::Malformed(_))));
    }

    #[test]
    fn garbage_value_start_is_malformed() {
        let err = raw("{\"a\":!}", Selector::Key("a"));
        assert!(matches!(err, Err(ScanError::Malformed(_))));
    }

    #[test]
    fn truncated_document_is_not_found() {
        assert_eq!(
            raw(r#"{"id":"1","met"#, Selector::Key("method")),
            Err(ScanError::NotFound)
        );
        assert_eq!(raw("[1,2", Selector::Index(5)), Err(ScanError::NotFound));
    }

    #[test]
    fn unbalanced_closer_does_not_panic() {
        assert_eq!(raw("]]", Selector::Index(0)), Err(ScanError::NotFound));
        assert_eq!(raw("}{", Selector::Index(0)), Err(ScanError::NotFound));
    }

    #[test]
    fn trailing_garbage_after_selection_is_ignored() {
        // The scan stops at the selected value; the rest is never validated.
        let text = r#"{"a":1} this is not json"#;
        assert_eq!(raw(text, Selector::Key("a")), Ok("1"));
    }

    #[test]
    fn non_string_key_tokens_never_match() {
        // A literal in key position is compared (and rejected) without panic.
        assert_eq!(raw("{1:2}", Selector::Key("a")), Err(ScanError::NotFound));
    }

    // -- Differential check against a real parser --

    #[test]
    fn index_spans_agree_with_serde_json() {
        let text = r#"[1,"two",{"three":3},[4,4,4],true,null,-5.5]"#;
        let doc: serde_json::Value = serde_json::from_str(text).unwrap();
        for (i, expected) in doc.as_array().unwrap().iter().enumerate() {
            let span = raw(text, Selector::Index(i)).unwrap();
            let got: serde_json::Value = serde_json::from_str(span).unwrap();
            assert_eq!(&got, expected, "element {i}");
        }
    }

    #[test]
    fn key_spans_agree_with_serde_json() {
        let text = r#"{"id":7,"method":"calc.add","params":[2,[3],{"x":"y"}]}"#;
        let doc: serde_json::Value = serde_json::from_str(text).unwrap();
        for (k, expected) in doc.as_object().unwrap() {
            let span = raw(text, Selector::Key(k)).unwrap();
            let got: serde_json::Value = serde_json::from_str(span).unwrap();
            assert_eq!(&got, expected, "key {k}");
        }
    }
}

//! Inbound RPC envelope extraction.

use skylight_json::{parse, Selector};

/// One decoded inbound message:
/// `{"id": <seq>, "method": "<name>", "params": [<args>]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Script-minted sequence token, echoed back verbatim on settlement.
    /// The native side never allocates these.
    pub seq: String,
    /// Bound name to dispatch on.
    pub method: String,
    /// Raw JSON array text of the call arguments.
    pub params: String,
}

impl Envelope {
    /// Extract the three fields with the minimal reader.
    ///
    /// Any failure — malformed body, missing field, bad escape — yields
    /// `None`: the message is a no-op by contract, indistinguishable from
    /// one naming an unknown method.
    pub fn parse(body: &str) -> Option<Self> {
        let seq = parse(body, Selector::Key("id")).ok()?;
        let method = parse(body, Selector::Key("method")).ok()?;
        let params = parse(body, Selector::Key("params")).ok()?;
        Some(Self {
            seq,
            method,
            params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_stub_envelope() {
        let body = r#"{"id":1,"method":"add","params":[2,3]}"#;
        let envelope = Envelope::parse(body).unwrap();
        assert_eq!(envelope.seq, "1");
        assert_eq!(envelope.method, "add");
        assert_eq!(envelope.params, "[2,3]");
    }

    #[test]
    fn field_order_does_not_matter() {
        let body = r#"{"params":["x"],"id":12,"method":"echo"}"#;
        let envelope = Envelope::parse(body).unwrap();
        assert_eq!(envelope.seq, "12");
        assert_eq!(envelope.method, "echo");
        assert_eq!(envelope.params, r#"["x"]"#);
    }

    #[test]
    fn nested_params_are_taken_whole() {
        let body = r#"{"id":3,"method":"save","params":[{"k":[1,2]},"s"]}"#;
        let envelope = Envelope::parse(body).unwrap();
        assert_eq!(envelope.params, r#"[{"k":[1,2]},"s"]"#);
    }

    #[test]
    fn missing_fields_drop_the_message() {
        assert_eq!(Envelope::parse(r#"{"id":1,"params":[]}"#), None);
        assert_eq!(Envelope::parse(r#"{"method":"f","params":[]}"#), None);
        assert_eq!(Envelope::parse(r#"{"id":1,"method":"f"}"#), None);
        assert_eq!(Envelope::parse("{}"), None);
    }

    #[test]
    fn malformed_bodies_drop_the_message() {
        for body in ["", "{", "not json", r#"{"id":1,"method":"f","par"#, "]["] {
            assert_eq!(Envelope::parse(body), None, "{body:?}");
        }
    }
}

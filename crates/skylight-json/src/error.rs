/// Errors produced by the scanner and the escape routines.
///
/// `NotFound` and `Malformed` are distinct on purpose: callers that need the
/// wire-compatible "absent" behavior collapse them at their own boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("no matching value")]
    NotFound,

    #[error("malformed json at byte {0}")]
    Malformed(usize),

    #[error("unsupported escape sequence \\{0}")]
    UnsupportedEscape(char),

    #[error("not a quoted string")]
    NotAString,
}

use subtle::ConstantTimeEq;

/// Compare a presented secret against the expected one in constant time.
///
/// Empty values never match, even against an empty expectation.
pub fn secrets_match(expected: &str, presented: &str) -> bool {
    let expected_bytes = expected.as_bytes();
    let presented_bytes = presented.as_bytes();

    if expected_bytes.is_empty() || expected_bytes.len() != presented_bytes.len() {
        return false;
    }

    expected_bytes.ct_eq(presented_bytes).into()
}

//! Comparison of resolver answers against an expected value.

use crate::types::{DohResponse, RecordType};

/// Returns true if any answer in `response` holds `expected_value`.
///
/// TXT data is compared with every `"` removed from both sides, since
/// resolvers return TXT strings quoted. All other types compare exactly.
#[must_use]
pub fn matches(response: &DohResponse, expected_value: &str, record_type: RecordType) -> bool {
    let answers = response.answers();
    if answers.is_empty() {
        return false;
    }

    if record_type.is_quoted() {
        let expected = strip_quotes(expected_value);
        return answers.iter().any(|a| strip_quotes(&a.data) == expected);
    }

    answers.iter().any(|a| a.data == expected_value)
}

fn strip_quotes(s: &str) -> String {
    s.replace('"', "")
}

//! Answer matching for typed answers.

use crate::types::QuestionRecord;
use serde::Serialize;

/// Result of comparing a typed answer against a record.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Index of the first accepted answer that matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<usize>,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
}

/// Compare a typed answer with every accepted answer of a record.
///
/// Comparison ignores case and collapses runs of whitespace, so answers
/// stored with trailing spaces in the data file still match.
pub fn compare_answers(typed: &str, record: &QuestionRecord) -> MatchResult {
    let typed_normalized = normalize_whitespace(typed);
    let typed_folded = typed_normalized.to_lowercase();

    let matched = record
        .answers()
        .iter()
        .position(|answer| normalize_whitespace(answer).to_lowercase() == typed_folded);

    MatchResult {
        is_correct: matched.is_some(),
        matched,
        typed_normalized,
    }
}

/// Normalize whitespace in a string (trim and collapse multiple spaces).
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_exact() {
        let record = QuestionRecord::new("ア", "a");
        let result = compare_answers("a", &record);
        assert!(result.is_correct);
        assert_eq!(result.matched, Some(0));
    }

    #[test]
    fn test_compare_case_insensitive() {
        let record = QuestionRecord::new("dog", "Hund");
        assert!(compare_answers("hund", &record).is_correct);
        assert!(compare_answers("HUND", &record).is_correct);
    }

    #[test]
    fn test_any_accepted_answer() {
        let record = QuestionRecord::new("シ", "shi").with_answer("si");
        let result = compare_answers("SI", &record);
        assert!(result.is_correct);
        assert_eq!(result.matched, Some(1));
    }

    #[test]
    fn test_wrong_answer() {
        let record = QuestionRecord::new("ツ", "tsu").with_answer("tu");
        let result = compare_answers("su", &record);
        assert!(!result.is_correct);
        assert_eq!(result.matched, None);
    }

    #[test]
    fn test_whitespace_normalization() {
        let record = QuestionRecord::new("big dog", "large dog ");
        let result = compare_answers("  large   dog ", &record);
        assert!(result.is_correct);
        assert_eq!(result.typed_normalized, "large dog");
    }

    #[test]
    fn test_empty_answer_never_matches() {
        let record = QuestionRecord::new("ア", "a");
        assert!(!compare_answers("", &record).is_correct);
    }
}

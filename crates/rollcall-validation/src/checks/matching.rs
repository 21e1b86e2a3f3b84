//! Mention-to-record resolution.
//!
//! A mention with an id is resolved by id first (case-insensitive). Without
//! an id, or when the id matches nothing, it is resolved by
//! `(firstName, lastName)`, case-insensitive and exact.

use std::collections::BTreeSet;

use rollcall_core::models::{Mention, ValidationIssue};

use super::CheckContext;
use crate::normalize::StudentRecord;

/// Result of the matching check.
#[derive(Debug, Clone, Default)]
pub struct MatchingResult {
    pub issues: Vec<ValidationIssue>,
    /// Records whose name equals some mentioned name. An id match alone
    /// does not put a record here.
    pub referenced: BTreeSet<usize>,
}

/// Resolve every mention against the records.
///
/// With no records at all the coverage check already reported the gap,
/// so unmatched mentions are not reported again here.
pub fn validate(ctx: &CheckContext<'_>) -> MatchingResult {
    let mut result = MatchingResult::default();
    if ctx.records.is_empty() {
        return result;
    }

    result.issues = ctx
        .mentions
        .iter()
        .filter(|m| !resolves(m, ctx.records))
        .map(unmatched_issue)
        .collect();

    let mention_keys: BTreeSet<(String, String)> =
        ctx.mentions.iter().map(Mention::name_key).collect();
    result.referenced = ctx
        .records
        .iter()
        .filter(|r| mention_keys.contains(&r.name_key()))
        .map(|r| r.index)
        .collect();

    result
}

fn resolves(mention: &Mention, records: &[StudentRecord<'_>]) -> bool {
    if let Some(id) = mention.id.as_deref() {
        let wanted = id.to_lowercase();
        if records
            .iter()
            .any(|r| r.student_id().is_some_and(|sid| sid.to_lowercase() == wanted))
        {
            return true;
        }
    }
    let key = mention.name_key();
    records.iter().any(|r| r.name_key() == key)
}

fn unmatched_issue(mention: &Mention) -> ValidationIssue {
    let message = match &mention.id {
        Some(id) => format!(
            "Student \"{}\" (ID {}) is mentioned in the narrative but not found in structuredData",
            mention.full_name, id
        ),
        None => format!(
            "Student \"{}\" is mentioned in the narrative but not found in structuredData",
            mention.full_name
        ),
    };
    ValidationIssue::error(message)
        .with_suggestion("Add the student to structuredData or remove the mention from the narrative")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::MentionExtractor;
    use crate::normalize::normalize;
    use serde_json::json;

    fn run(narrative: &str, payload: &serde_json::Value) -> MatchingResult {
        let mentions = MentionExtractor::default().extract(narrative);
        let records = normalize(payload);
        validate(&CheckContext {
            narrative,
            mentions: &mentions,
            records: &records,
            placeholders: &[],
        })
    }

    #[test]
    fn id_match_is_case_insensitive() {
        let payload = json!([{"firstName": "Jon", "lastName": "Smyth", "studentId": "s1001"}]);
        let result = run("John Smith (S1001)", &payload);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn unknown_id_falls_back_to_name() {
        let payload = json!([{"firstName": "Bob", "lastName": "Lee"}]);
        let result = run("Bob Lee (S9)", &payload);
        assert!(result.issues.is_empty());
        assert!(result.referenced.contains(&0));
    }

    #[test]
    fn id_only_match_is_not_referenced() {
        let payload = json!([
            {"firstName": "Jon", "lastName": "Day", "studentId": "S1"},
            {"firstName": "Amy", "lastName": "Day", "studentId": "S2"},
        ]);
        let result = run("Amy Day (S1)", &payload);
        assert!(result.issues.is_empty());
        assert_eq!(result.referenced.iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn every_same_named_record_is_referenced() {
        let payload = json!([
            {"firstName": "Ann", "lastName": "Lee", "studentId": "S1"},
            {"firstName": "ann", "lastName": "LEE", "studentId": "S2"},
            {"firstName": "Max", "lastName": "Ray"},
        ]);
        let result = run("Ann Lee was absent", &payload);
        assert_eq!(result.referenced.iter().copied().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn no_records_reports_nothing() {
        let result = run("Zoe Park (S7)", &json!([]));
        assert!(result.issues.is_empty());
        assert!(result.referenced.is_empty());
    }
}

//! Required fields on the records the narrative refers to.

use std::collections::BTreeSet;

use rollcall_core::models::ValidationIssue;

use super::CheckContext;
use crate::extraction::dates;
use crate::normalize::StudentRecord;

/// Check each referenced record once, in record order.
///
/// Missing names are errors, a missing id is a warning, and missing absence
/// dates are a warning when the narrative itself cites dates.
pub fn validate(ctx: &CheckContext<'_>, referenced: &BTreeSet<usize>) -> Vec<ValidationIssue> {
    let narrative_has_dates = dates::mentions_dates(ctx.narrative);

    ctx.records
        .iter()
        .filter(|r| referenced.contains(&r.index))
        .flat_map(|record| check_record(record, narrative_has_dates))
        .collect()
}

fn check_record(record: &StudentRecord<'_>, narrative_has_dates: bool) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if record.first_name().is_none() {
        issues.push(
            ValidationIssue::error(format!(
                "Student record at index {} is missing firstName",
                record.index
            ))
            .with_path(format!("{}.firstName", record.path)),
        );
    }

    if record.last_name().is_none() {
        issues.push(
            ValidationIssue::error(format!(
                "Student record at index {} is missing lastName",
                record.index
            ))
            .with_path(format!("{}.lastName", record.path)),
        );
    }

    if record.student_id().is_none() {
        issues.push(
            ValidationIssue::warning(format!("Student \"{}\" is missing studentId", record.label()))
                .with_path(format!("{}.studentId", record.path))
                .with_suggestion("Include studentId so the answer can be traced to a record"),
        );
    }

    let has_absences = record.absences().is_some_and(|a| !a.is_empty());
    if narrative_has_dates && !has_absences {
        issues.push(
            ValidationIssue::warning(format!(
                "Narrative references dates but \"{}\" has no absence dates",
                record.label()
            ))
            .with_path(format!("{}.absences", record.path))
            .with_suggestion("Include the absence dates the narrative relies on"),
        );
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use rollcall_core::models::IssueLevel;
    use serde_json::json;

    #[test]
    fn only_referenced_records_are_checked() {
        let payload = json!([{"firstName": "Ann"}, {"lastName": "Ray"}]);
        let records = normalize(&payload);
        let ctx = CheckContext {
            narrative: "",
            mentions: &[],
            records: &records,
            placeholders: &[],
        };
        let issues = validate(&ctx, &BTreeSet::from([1]));
        let paths: Vec<_> = issues.iter().filter_map(|i| i.path.as_deref()).collect();
        assert_eq!(paths, vec!["structuredData[1].firstName", "structuredData[1].studentId"]);
        assert_eq!(issues[0].level, IssueLevel::Error);
        assert_eq!(issues[1].level, IssueLevel::Warning);
    }

    #[test]
    fn blank_absences_need_dates_only_when_narrative_has_them() {
        let payload = json!([{"firstName": "Ann", "lastName": "Lee", "studentId": "S1", "absences": []}]);
        let records = normalize(&payload);
        let referenced = BTreeSet::from([0]);
        let mut ctx = CheckContext {
            narrative: "absent on Jan 5th",
            mentions: &[],
            records: &records,
            placeholders: &[],
        };
        assert_eq!(validate(&ctx, &referenced).len(), 1);
        ctx.narrative = "absent twice";
        assert!(validate(&ctx, &referenced).is_empty());
    }
}

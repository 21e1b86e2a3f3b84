//! Field type consistency.

use rollcall_core::models::ValidationIssue;
use serde_json::Value;

use crate::normalize::StudentRecord;

/// `attendanceRate`, when present, must be a JSON number.
///
/// An explicit `null` counts as absent, like every other missing field.
pub fn validate(records: &[StudentRecord<'_>]) -> Vec<ValidationIssue> {
    records
        .iter()
        .filter_map(|record| {
            let rate = record.attendance_rate()?;
            if rate.is_number() {
                return None;
            }
            Some(
                ValidationIssue::error(format!(
                    "attendanceRate for {} must be a numeric percentage, got {}",
                    record.label(),
                    json_type(rate)
                ))
                .with_path(format!("{}.attendanceRate", record.path))
                .with_suggestion("Report attendanceRate as a number such as 92.5"),
            )
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use serde_json::json;

    #[test]
    fn only_non_null_non_numbers_are_flagged() {
        let payload = json!([
            {"firstName": "Ann", "attendanceRate": null},
            {"firstName": "Bo"},
            {"firstName": "Cy", "attendanceRate": 97},
            {"firstName": "Di", "attendanceRate": false},
        ]);
        let records = normalize(&payload);
        let issues = validate(&records);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path.as_deref(), Some("structuredData[3].attendanceRate"));
        assert!(issues[0].message.ends_with("got boolean"));
    }
}

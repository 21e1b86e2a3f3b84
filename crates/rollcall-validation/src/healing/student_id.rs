//! Fill missing `studentId`s from "Full Name (ID)" mentions.

use rollcall_core::constants::{STRUCTURED_DATA_ROOT, STUDENTS_KEY};
use rollcall_core::models::{AutoFixReport, Mention};
use rollcall_observability::autofix_span;
use serde_json::Value;
use tracing::debug;

use crate::normalize::{name_key_of, student_id_of};

/// Repair a deep copy of `structured_data`.
///
/// For every mention carrying an id, each record with the same name
/// (case-insensitive) and no `studentId` in the copy receives that id.
/// Only `{ "students": [...] }` payloads are repaired; every other shape
/// yields an empty report.
pub fn fill_missing_ids(structured_data: &Value, mentions: &[Mention]) -> AutoFixReport {
    let with_id: Vec<&Mention> = mentions.iter().filter(|m| m.id.is_some()).collect();
    let _span = autofix_span!(with_id.len()).entered();

    if with_id.is_empty() {
        return AutoFixReport::none();
    }

    let mut fixed = structured_data.clone();
    let Some(students) = fixed.get_mut(STUDENTS_KEY).and_then(Value::as_array_mut) else {
        debug!("payload is not a students array; auto-fix skipped");
        return AutoFixReport::none();
    };

    let mut details = Vec::new();
    for mention in with_id {
        let Some(id) = mention.id.as_deref() else {
            continue;
        };
        let key = mention.name_key();
        for (index, record) in students.iter_mut().enumerate() {
            let Some(obj) = record.as_object_mut() else {
                continue;
            };
            if name_key_of(obj) != key || student_id_of(obj).is_some() {
                continue;
            }
            obj.insert("studentId".to_string(), Value::String(id.to_string()));
            details.push(format!(
                "Set studentId \"{id}\" for {} at {STRUCTURED_DATA_ROOT}.{STUDENTS_KEY}[{index}]",
                mention.full_name
            ));
        }
    }

    debug!(fixes = details.len(), "auto-fix complete");
    if details.is_empty() {
        return AutoFixReport::none();
    }
    AutoFixReport {
        applied: true,
        details,
        fixed_structured_data: Some(fixed),
    }
}

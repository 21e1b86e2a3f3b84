//! Structured-data normalization.
//!
//! The structured payload attached to an answer comes in several shapes.
//! [`StructuredShape::classify`] tries one discriminator per shape in a fixed
//! priority order; an explicit `students` collection always wins over
//! inference from unrelated payload fields.

use rollcall_core::constants::{STRUCTURED_DATA_ROOT, STUDENTS_KEY, STUDENT_IDENTITY_FIELDS};
use serde_json::{Map, Value};

/// The recognized payload shapes, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredShape<'a> {
    /// `[ {...}, {...} ]`
    Array(&'a [Value]),
    /// `{ "students": [ {...} ] }`
    StudentsArray(&'a [Value]),
    /// `{ "students": { "a": {...}, "b": {...} } }`
    StudentsMap(&'a Map<String, Value>),
    /// `{ "top": {...studentId...}, "other": 3 }` — only the student-like values.
    Inferred(Vec<(&'a str, &'a Value)>),
    /// Nothing student-like.
    Empty,
}

impl<'a> StructuredShape<'a> {
    /// Classify a payload. Never fails; unknown shapes are `Empty`.
    pub fn classify(payload: &'a Value) -> Self {
        as_array(payload)
            .or_else(|| as_students_array(payload))
            .or_else(|| as_students_map(payload))
            .or_else(|| as_inferred(payload))
            .unwrap_or(Self::Empty)
    }

    /// Short shape name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Array(_) => "array",
            Self::StudentsArray(_) => "students_array",
            Self::StudentsMap(_) => "students_map",
            Self::Inferred(_) => "inferred",
            Self::Empty => "empty",
        }
    }

    /// The canonical record list for this shape.
    pub fn records(&self) -> Vec<StudentRecord<'a>> {
        match self {
            Self::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| StudentRecord::new(i, format!("{STRUCTURED_DATA_ROOT}[{i}]"), v))
                .collect(),
            Self::StudentsArray(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    StudentRecord::new(
                        i,
                        format!("{STRUCTURED_DATA_ROOT}.{STUDENTS_KEY}[{i}]"),
                        v,
                    )
                })
                .collect(),
            Self::StudentsMap(map) => map
                .iter()
                .enumerate()
                .map(|(i, (key, v))| {
                    StudentRecord::new(i, format!("{STRUCTURED_DATA_ROOT}.{STUDENTS_KEY}.{key}"), v)
                })
                .collect(),
            Self::Inferred(entries) => entries
                .iter()
                .enumerate()
                .map(|(i, (key, v))| StudentRecord::new(i, format!("{STRUCTURED_DATA_ROOT}.{key}"), *v))
                .collect(),
            Self::Empty => Vec::new(),
        }
    }
}

fn as_array(payload: &Value) -> Option<StructuredShape<'_>> {
    payload.as_array().map(|a| StructuredShape::Array(a))
}

fn as_students_array(payload: &Value) -> Option<StructuredShape<'_>> {
    payload
        .get(STUDENTS_KEY)?
        .as_array()
        .map(|a| StructuredShape::StudentsArray(a))
}

fn as_students_map(payload: &Value) -> Option<StructuredShape<'_>> {
    payload
        .get(STUDENTS_KEY)?
        .as_object()
        .map(StructuredShape::StudentsMap)
}

fn as_inferred(payload: &Value) -> Option<StructuredShape<'_>> {
    let entries: Vec<(&str, &Value)> = payload
        .as_object()?
        .iter()
        .filter(|(_, v)| looks_like_student(v))
        .map(|(k, v)| (k.as_str(), v))
        .collect();
    (!entries.is_empty()).then_some(StructuredShape::Inferred(entries))
}

/// An object exposing at least one identity field.
fn looks_like_student(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| STUDENT_IDENTITY_FIELDS.iter().any(|f| obj.contains_key(*f)))
}

/// Normalize any payload into its record list.
pub fn normalize(payload: &Value) -> Vec<StudentRecord<'_>> {
    StructuredShape::classify(payload).records()
}

/// Read-only view of one student record inside the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord<'a> {
    /// Position in the normalized list.
    pub index: usize,
    /// Location in the payload, e.g. `structuredData.students[2]`.
    pub path: String,
    pub value: &'a Value,
}

impl<'a> StudentRecord<'a> {
    pub fn new(index: usize, path: String, value: &'a Value) -> Self {
        Self { index, path, value }
    }

    /// A field that is present and not `null`.
    pub fn field(&self, key: &str) -> Option<&'a Value> {
        self.value
            .as_object()
            .and_then(|obj| obj.get(key))
            .filter(|v| !v.is_null())
    }

    pub fn first_name(&self) -> Option<&'a str> {
        self.value.as_object().and_then(|obj| text_field(obj, "firstName"))
    }

    pub fn last_name(&self) -> Option<&'a str> {
        self.value.as_object().and_then(|obj| text_field(obj, "lastName"))
    }

    pub fn student_id(&self) -> Option<String> {
        self.value.as_object().and_then(student_id_of)
    }

    /// `firstName + " " + lastName`, trimmed.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name().unwrap_or_default(),
            self.last_name().unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    /// Lowercased `(first, last)`; missing parts are empty.
    pub fn name_key(&self) -> (String, String) {
        self.value
            .as_object()
            .map(name_key_of)
            .unwrap_or_default()
    }

    /// The `absences` field when it is a sequence.
    pub fn absences(&self) -> Option<&'a Vec<Value>> {
        self.field("absences").and_then(Value::as_array)
    }

    pub fn attendance_rate(&self) -> Option<&'a Value> {
        self.field("attendanceRate")
    }

    /// `display_name`, or the record path when the record has no name.
    pub fn label(&self) -> String {
        let name = self.display_name();
        if name.is_empty() {
            self.path.clone()
        } else {
            name
        }
    }
}

/// A non-empty string field, trimmed. Absent, `null` and blank are all `None`.
pub(crate) fn text_field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// `studentId` as text. Numbers count as ids; blank strings do not.
pub(crate) fn student_id_of(obj: &Map<String, Value>) -> Option<String> {
    match obj.get("studentId")? {
        Value::Null => None,
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

pub(crate) fn name_key_of(obj: &Map<String, Value>) -> (String, String) {
    (
        text_field(obj, "firstName").unwrap_or_default().to_lowercase(),
        text_field(obj, "lastName").unwrap_or_default().to_lowercase(),
    )
}

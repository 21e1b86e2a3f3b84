/// Rollcall version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sentinel values that mark incomplete student data.
pub const PLACEHOLDER_TOKENS: &[&str] = &["Unknown Student", "Unknown", "N/A", "TBD"];

/// Record fields that mark a value as student-like during shape inference.
pub const STUDENT_IDENTITY_FIELDS: &[&str] = &["studentId", "firstName", "lastName"];

/// Root of every issue path.
pub const STRUCTURED_DATA_ROOT: &str = "structuredData";

/// Key of the nested student collection in structured payloads.
pub const STUDENTS_KEY: &str = "students";

//! Auto-fix: best-effort repairs applied to a copy of the structured payload.
//!
//! The only repair today is filling a missing `studentId` from an id the
//! narrative states explicitly. The caller's payload is never modified.

pub mod student_id;

pub use student_id::fill_missing_ids;

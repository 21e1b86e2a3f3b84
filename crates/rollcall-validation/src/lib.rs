//! # rollcall-validation
//!
//! Checks a natural-language answer against the structured data that is
//! supposed to back it up, before the answer reaches a user.
//!
//! ## Pipeline
//! 1. **Extraction** — student mentions ("Full Name (ID)", bare names)
//! 2. **Normalization** — any payload shape reduced to a record list
//! 3. **Placeholders** — sentinel names such as "Unknown Student"
//! 4. **Checks** — coverage, matching, completeness, types
//! 5. **Healing** — fill missing `studentId`s on a copy of the payload
//! 6. **Assembly** — issues and counts folded into a `ValidationResult`
//!
//! The [`integration`] module merges results back into query answers and
//! provides the fail-open wrapper used at the HTTP boundary.

pub mod assemble;
pub mod checks;
pub mod engine;
pub mod extraction;
pub mod healing;
pub mod integration;
pub mod normalize;
pub mod placeholder;

pub use engine::{ValidationEngine, ValidationOptions};
pub use extraction::MentionExtractor;
pub use integration::{AnswerValidator, QueryAnswer, ValidityConfidence};
pub use normalize::{StructuredShape, StudentRecord};

//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p rollcall-core export_bindings
//! Generated files appear in rollcall-core/bindings/*.ts

#[test]
fn export_bindings() {
    // Export happens through the #[ts(export)] attribute when `cargo test`
    // runs. This test keeps every exported type importable.
    use rollcall_core::models::{
        AutoFixReport, IssueLevel, MatchedSpan, Mention, ValidationIssue, ValidationMeta,
        ValidationResult, ValidationSummary,
    };

    let _ = std::any::type_name::<IssueLevel>();
    let _ = std::any::type_name::<ValidationIssue>();
    let _ = std::any::type_name::<ValidationSummary>();
    let _ = std::any::type_name::<AutoFixReport>();
    let _ = std::any::type_name::<ValidationResult>();
    let _ = std::any::type_name::<Mention>();
    let _ = std::any::type_name::<MatchedSpan>();
    let _ = std::any::type_name::<ValidationMeta>();
}

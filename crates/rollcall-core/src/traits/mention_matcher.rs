use crate::models::Mention;

/// One tier of student-name recognition.
///
/// Matchers run in priority order; spans claimed by an earlier matcher
/// suppress overlapping mentions from later ones.
pub trait IMentionMatcher: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Every candidate mention in `text`, in order of occurrence.
    fn find(&self, text: &str) -> Vec<Mention>;
}

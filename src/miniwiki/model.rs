/// A single wiki entry: a title and its raw Markdown content.
///
/// The title doubles as the storage key. Uniqueness is case-insensitive and
/// enforced by the create command's pre-check, not by the store itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub content: String,
}

impl Entry {
    pub fn new(title: String, content: String) -> Self {
        Self { title, content }
    }
}

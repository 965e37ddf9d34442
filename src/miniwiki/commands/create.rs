use super::find_title;
use crate::error::Result;
use crate::store::EntryStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// A case-insensitive duplicate already exists; carries the stored
    /// title so callers can report it. The store was not touched.
    Duplicate(String),
}

/// Create a new entry, refusing to overwrite a case-insensitive duplicate.
pub fn run<S: EntryStore>(store: &mut S, title: &str, content: &str) -> Result<CreateOutcome> {
    let titles = store.list_entries()?;
    if let Some(existing) = find_title(&titles, title) {
        return Ok(CreateOutcome::Duplicate(existing.to_string()));
    }
    store.save_entry(title, content)?;
    Ok(CreateOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_a_novel_entry() {
        let mut store = InMemoryStore::new();

        let outcome = run(&mut store, "Rust", "# Rust").unwrap();

        assert_eq!(outcome, CreateOutcome::Created);
        assert_eq!(store.get_entry("Rust").unwrap().as_deref(), Some("# Rust"));
    }

    #[test]
    fn duplicate_title_leaves_store_unchanged() {
        let mut store = InMemoryStore::new();
        store.save_entry("CSS", "original").unwrap();

        let outcome = run(&mut store, "css", "replacement").unwrap();

        assert_eq!(outcome, CreateOutcome::Duplicate("CSS".to_string()));
        assert_eq!(store.get_entry("CSS").unwrap().as_deref(), Some("original"));
        assert_eq!(store.list_entries().unwrap().len(), 1);
    }
}

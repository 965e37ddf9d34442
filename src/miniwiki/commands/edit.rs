use crate::error::Result;
use crate::store::EntryStore;

/// Current content of the entry being edited. The title comes from the
/// route and is assumed case-correct, so this is an exact lookup.
pub fn load<S: EntryStore>(store: &S, title: &str) -> Result<Option<String>> {
    store.get_entry(title)
}

/// Replace an entry's content in full. The title is immutable here.
pub fn run<S: EntryStore>(store: &mut S, title: &str, content: &str) -> Result<()> {
    store.save_entry(title, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn load_returns_current_content() {
        let mut store = InMemoryStore::new();
        store.save_entry("Python", "v1").unwrap();

        assert_eq!(load(&store, "Python").unwrap().as_deref(), Some("v1"));
        assert_eq!(load(&store, "Ruby").unwrap(), None);
    }

    #[test]
    fn run_replaces_content_exactly() {
        let mut store = InMemoryStore::new();
        store.save_entry("Python", "old text").unwrap();

        run(&mut store, "Python", "new text").unwrap();

        let content = store.get_entry("Python").unwrap().unwrap();
        assert_eq!(content, "new text");
        assert!(!content.contains("old"));
    }
}

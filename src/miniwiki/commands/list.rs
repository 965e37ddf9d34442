use crate::error::Result;
use crate::store::EntryStore;

/// All entry titles, in the store's enumeration order.
pub fn run<S: EntryStore>(store: &S) -> Result<Vec<String>> {
    store.list_entries()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_every_stored_title() {
        let mut store = InMemoryStore::new();
        store.save_entry("CSS", "c").unwrap();
        store.save_entry("Python", "p").unwrap();

        let titles = run(&store).unwrap();
        assert_eq!(titles, vec!["CSS".to_string(), "Python".to_string()]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().is_empty());
    }
}

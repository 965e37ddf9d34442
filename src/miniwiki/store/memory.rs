use super::EntryStore;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Entries are kept in insertion order and `list_entries` returns that
/// order, which makes the "first enumerated wins" tie-break in the view
/// command a testable policy rather than an accident.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Vec<(String, String)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for InMemoryStore {
    fn list_entries(&self) -> Result<Vec<String>> {
        Ok(self.entries.iter().map(|(title, _)| title.clone()).collect())
    }

    fn get_entry(&self, title: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, content)| content.clone()))
    }

    fn save_entry(&mut self, title: &str, content: &str) -> Result<()> {
        if let Some(slot) = self.entries.iter_mut().find(|(t, _)| t == title) {
            slot.1 = content.to_string();
        } else {
            self.entries.push((title.to_string(), content.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_get_and_overwrite() {
        let mut store = InMemoryStore::new();
        store.save_entry("A", "one").unwrap();
        store.save_entry("A", "two").unwrap();

        assert_eq!(store.get_entry("A").unwrap().as_deref(), Some("two"));
        assert_eq!(store.get_entry("B").unwrap(), None);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = InMemoryStore::new();
        store.save_entry("Zebra", "").unwrap();
        store.save_entry("Apple", "").unwrap();

        assert_eq!(
            store.list_entries().unwrap(),
            vec!["Zebra".to_string(), "Apple".to_string()]
        );
    }
}

use super::find_title;
use crate::error::Result;
use crate::model::Entry;
use crate::store::EntryStore;

/// Look up an entry by title, case-insensitively.
///
/// Returns the entry under its canonical (stored) title. `Ok(None)` covers
/// both "no title matches" and the race where the store mutated between
/// enumeration and lookup; neither is an error.
pub fn run<S: EntryStore>(store: &S, title: &str) -> Result<Option<Entry>> {
    let titles = store.list_entries()?;
    let Some(canonical) = find_title(&titles, title) else {
        return Ok(None);
    };
    match store.get_entry(canonical)? {
        Some(content) => Ok(Some(Entry::new(canonical.to_string(), content))),
        None => Ok(None),
    }
}

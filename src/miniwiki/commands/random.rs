use crate::error::Result;
use crate::store::EntryStore;
use rand::seq::IndexedRandom;

/// Pick one stored title uniformly at random, or `None` if the store is
/// empty.
pub fn run<S: EntryStore>(store: &S) -> Result<Option<String>> {
    let titles = store.list_entries()?;
    Ok(titles.choose(&mut rand::rng()).cloned())
}

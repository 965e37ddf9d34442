use crate::error::Result;
use crate::store::EntryStore;

/// What a search produced: either one exact hit or a list of partial hits.
/// The two are mutually exclusive; an exact hit short-circuits the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query equals a stored title case-insensitively; the caller
    /// should redirect straight to it.
    Exact(String),
    /// Titles containing the query as a case-insensitive substring.
    /// Possibly empty, which is a valid "no matches" result.
    Matches(Vec<String>),
}

pub fn run<S: EntryStore>(store: &S, query: &str) -> Result<SearchOutcome> {
    let needle = query.to_lowercase();
    let mut matches = Vec::new();

    for title in store.list_entries()? {
        let haystack = title.to_lowercase();
        if haystack == needle {
            return Ok(SearchOutcome::Exact(title));
        }
        if haystack.contains(&needle) {
            matches.push(title);
        }
    }

    Ok(SearchOutcome::Matches(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.save_entry("CSS", "styles").unwrap();
        store.save_entry("Python", "snakes").unwrap();
        store.save_entry("MicroPython", "boards").unwrap();
        store
    }

    #[test]
    fn exact_match_short_circuits() {
        let store = seeded();
        assert_eq!(
            run(&store, "python").unwrap(),
            SearchOutcome::Exact("Python".to_string())
        );
    }

    #[test]
    fn substring_matches_collect_without_duplicates() {
        let store = seeded();
        let outcome = run(&store, "pyth").unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Matches(vec!["Python".to_string(), "MicroPython".to_string()])
        );
    }

    #[test]
    fn no_hits_is_an_empty_match_list() {
        let store = seeded();
        assert_eq!(run(&store, "java").unwrap(), SearchOutcome::Matches(vec![]));
    }

    #[test]
    fn empty_query_lists_every_title() {
        // "" is a substring of everything and an exact match of nothing.
        let store = seeded();
        let SearchOutcome::Matches(titles) = run(&store, "").unwrap() else {
            panic!("empty query must never redirect");
        };
        assert_eq!(titles.len(), 3);
    }
}

//! Business logic for each wiki operation, generic over any [`EntryStore`].
//!
//! Every module exposes a `run` function taking the store plus plain Rust
//! arguments and returning a plain outcome type. Nothing in here knows about
//! HTTP; the web layer translates outcomes into pages and redirects.

pub mod create;
pub mod edit;
pub mod list;
pub mod random;
pub mod search;
pub mod view;

/// Find the stored title matching `wanted` case-insensitively.
///
/// The first match in enumeration order wins. Stores are not supposed to
/// hold two titles differing only in case (create pre-checks), so ties are
/// not normally possible, but the policy is explicit and tested anyway.
pub(crate) fn find_title<'a>(titles: &'a [String], wanted: &str) -> Option<&'a str> {
    let wanted = wanted.to_lowercase();
    titles
        .iter()
        .map(String::as_str)
        .find(|title| title.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignoring_case() {
        let titles = vec!["CSS".to_string(), "Python".to_string()];
        assert_eq!(find_title(&titles, "python"), Some("Python"));
        assert_eq!(find_title(&titles, "PYTHON"), Some("Python"));
        assert_eq!(find_title(&titles, "Ruby"), None);
    }

    #[test]
    fn first_enumerated_wins() {
        // Degenerate store contents; the documented tie-break applies.
        let titles = vec!["Rust".to_string(), "RUST".to_string()];
        assert_eq!(find_title(&titles, "rust"), Some("Rust"));
    }
}

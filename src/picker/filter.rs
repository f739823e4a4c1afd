use crate::person::Person;

/// Matching policy seam. Implementations must return indices into `people`
/// in ascending order so the filtered list stays a subsequence of the
/// directory.
pub trait NameMatcher: Send + Sync {
    fn select(&self, query: &str, people: &[Person]) -> Vec<usize>;
}

/// Case-insensitive substring containment. The empty query matches every
/// record; the query is matched as typed, without trimming.
#[derive(Debug, Default)]
pub struct ContainsMatcher;

impl NameMatcher for ContainsMatcher {
    fn select(&self, query: &str, people: &[Person]) -> Vec<usize> {
        if query.is_empty() {
            return (0..people.len()).collect();
        }

        let query = query.to_lowercase();
        people
            .iter()
            .enumerate()
            .filter(|(_, person)| person.name.to_lowercase().contains(&query))
            .map(|(idx, _)| idx)
            .collect()
    }
}

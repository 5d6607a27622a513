//! Queries over an ordered sequence of linked matches.
//!
//! Every query is a pure, total function: an empty input yields `None` (or an empty collection),
//! with the single exception of [results::average_goals], which yields `0.0`. Where several
//! candidates share the extreme value, the first one encountered wins; candidates are encountered
//! in season order unless a query documents a pre-ordering.

pub mod results;
pub mod scorers;
pub mod streak;

/// Returns the first item maximising `key`, unlike [Iterator::max_by_key], which returns the last.
pub fn first_max_by_key<I, K, F>(items: I, mut key: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut best: Option<(K, I::Item)> = None;
    for item in items {
        let item_key = key(&item);
        let improves = match &best {
            Some((best_key, _)) => item_key > *best_key,
            None => true,
        };
        if improves {
            best = Some((item_key, item));
        }
    }
    best.map(|(_, item)| item)
}

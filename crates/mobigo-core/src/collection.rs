//! Merging referenced entities into selector option lists.

use std::collections::HashSet;

use crate::key::Keyed;

/// Ensure every present candidate is in `collection`, matching by key.
///
/// Absent candidates are skipped. If none remain, `collection` is handed back
/// untouched (same allocation). Otherwise candidates whose key is not yet
/// known are prepended in input order, each key admitted once; the first copy
/// seen wins and no fields are merged.
pub fn add_to_collection_if_missing<T, I>(collection: Vec<T>, candidates: I) -> Vec<T>
where
  T: Keyed,
  I: IntoIterator,
  I::Item: Into<Option<T>>,
{
  let candidates: Vec<T> = candidates
    .into_iter()
    .filter_map(|candidate| candidate.into())
    .collect();
  if candidates.is_empty() {
    return collection;
  }

  let mut known: HashSet<T::Key> =
    collection.iter().map(|item| item.key().clone()).collect();
  let mut merged: Vec<T> = candidates
    .into_iter()
    .filter(|candidate| known.insert(candidate.key().clone()))
    .collect();
  merged.extend(collection);
  merged
}

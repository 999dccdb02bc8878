//! Primary keys and key-only equality.
//!
//! Two references denote the same entity when their primary keys match; no
//! other field takes part in the comparison.

use std::hash::Hash;

/// Numeric surrogate key used by every entity except authorities.
pub type Id = i64;

/// Anything that can be reduced to a primary key: a full record or a reduced
/// projection of one.
pub trait Keyed {
  type Key: Eq + Hash + Clone;

  fn key(&self) -> &Self::Key;
}

impl<T: Keyed + ?Sized> Keyed for &T {
  type Key = T::Key;

  fn key(&self) -> &Self::Key { (**self).key() }
}

impl<T: Keyed + ?Sized> Keyed for Box<T> {
  type Key = T::Key;

  fn key(&self) -> &Self::Key { (**self).key() }
}

/// `true` iff both references are absent, or both are present with equal keys.
///
/// The two sides may be different projections of the same entity type as long
/// as they share a key type.
pub fn same_entity<A, B>(a: Option<&A>, b: Option<&B>) -> bool
where
  A: Keyed + ?Sized,
  B: Keyed<Key = A::Key> + ?Sized,
{
  match (a, b) {
    (Some(a), Some(b)) => a.key() == b.key(),
    (None, None) => true,
    _ => false,
  }
}

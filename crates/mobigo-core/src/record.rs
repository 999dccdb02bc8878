//! Record envelopes: a fields struct paired with its key state.
//!
//! Every id-keyed entity is modelled as a plain fields struct `F` (all
//! optional, no key) wrapped in one of:
//!
//! - [`Persisted<F>`]: the key is known and never changes.
//! - [`New<F>`]: not yet created; the key is `null` on the wire.
//! - [`Draft<F>`]: what an edit form hands back, either of the above.
//! - [`Patch`]: a persisted record rendered as a merge-patch body.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::Value;

use crate::key::{Id, Keyed};

// ─── Persisted ───────────────────────────────────────────────────────────────

/// A record that exists on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persisted<F> {
  id:         Id,
  #[serde(flatten)]
  pub fields: F,
}

impl<F> Persisted<F> {
  pub fn new(id: Id, fields: F) -> Self { Self { id, fields } }

  pub fn id(&self) -> Id { self.id }

  pub fn into_fields(self) -> F { self.fields }

  /// Borrow as a merge-patch body.
  pub fn as_patch(&self) -> Patch<'_, F> { Patch(self) }
}

impl<F: Default> Persisted<F> {
  /// A reduced projection carrying only the key.
  pub fn reference(id: Id) -> Self { Self::new(id, F::default()) }
}

impl<F> Keyed for Persisted<F> {
  type Key = Id;

  fn key(&self) -> &Id { &self.id }
}

// ─── New ─────────────────────────────────────────────────────────────────────

/// A record that has not been created yet. Serialises with `"id": null` and
/// refuses to decode from a body that carries a key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct New<F> {
  pub fields: F,
}

impl<F> New<F> {
  pub fn new(fields: F) -> Self { Self { fields } }

  /// Attach the key the server assigned.
  pub fn persisted(self, id: Id) -> Persisted<F> { Persisted::new(id, self.fields) }
}

#[derive(Serialize)]
struct NewOut<'a, F> {
  id:     Option<Id>,
  #[serde(flatten)]
  fields: &'a F,
}

#[derive(Deserialize)]
struct NewIn<F> {
  #[serde(default)]
  id:     Option<Value>,
  #[serde(flatten)]
  fields: F,
}

impl<F: Serialize> Serialize for New<F> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    NewOut {
      id:     None,
      fields: &self.fields,
    }
    .serialize(serializer)
  }
}

impl<'de, F: Deserialize<'de>> Deserialize<'de> for New<F> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = NewIn::<F>::deserialize(deserializer)?;
    match raw.id {
      None | Some(Value::Null) => Ok(Self { fields: raw.fields }),
      Some(key) => Err(de::Error::custom(crate::Error::UnexpectedKey(key))),
    }
  }
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// The value of an edit form: a record to create or one to update.
#[derive(Debug, Clone, PartialEq)]
pub enum Draft<F> {
  New(New<F>),
  Persisted(Persisted<F>),
}

impl<F> Draft<F> {
  pub fn id(&self) -> Option<Id> {
    match self {
      Self::New(_) => None,
      Self::Persisted(record) => Some(record.id()),
    }
  }

  pub fn fields(&self) -> &F {
    match self {
      Self::New(record) => &record.fields,
      Self::Persisted(record) => &record.fields,
    }
  }

  pub fn is_new(&self) -> bool { matches!(self, Self::New(_)) }
}

impl<F> From<New<F>> for Draft<F> {
  fn from(record: New<F>) -> Self { Self::New(record) }
}

impl<F> From<Persisted<F>> for Draft<F> {
  fn from(record: Persisted<F>) -> Self { Self::Persisted(record) }
}

impl<F: Serialize> Serialize for Draft<F> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::New(record) => record.serialize(serializer),
      Self::Persisted(record) => record.serialize(serializer),
    }
  }
}

// ─── Patch ───────────────────────────────────────────────────────────────────

/// Merge-patch rendering of a persisted record: top-level `null`s are dropped
/// so only populated fields are sent, and the key is always kept.
#[derive(Debug, Clone, Copy)]
pub struct Patch<'a, F>(pub &'a Persisted<F>);

impl<F: Serialize> Serialize for Patch<'_, F> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut value = serde_json::to_value(self.0).map_err(ser::Error::custom)?;
    if let Value::Object(map) = &mut value {
      map.retain(|name, field| name == "id" || !field.is_null());
    }
    value.serialize(serializer)
  }
}

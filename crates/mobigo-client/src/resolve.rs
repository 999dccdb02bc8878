//! Resolving an entity from a route parameter before a page opens.

use mobigo_core::{Id, Persisted, model::Resource};

use crate::{error::Result, service::EntityService};

/// Outcome of resolving a route parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
  /// No id in the route: the page creates a new record.
  Create,
  /// The record the route points at.
  Found(T),
  /// The id names nothing; the caller shows its not-found page.
  NotFound,
}

impl<T> Resolution<T> {
  pub fn found(self) -> Option<T> {
    match self {
      Self::Found(record) => Some(record),
      Self::Create | Self::NotFound => None,
    }
  }
}

/// Fetch the record named by the `id` route parameter.
///
/// An absent or empty parameter means "create". A parameter that is not a
/// number cannot name a record and resolves to [`Resolution::NotFound`]
/// without a request.
pub async fn resolve<F: Resource>(
  service: &EntityService<F>,
  id: Option<&str>,
) -> Result<Resolution<Persisted<F>>> {
  let Some(raw) = id.filter(|raw| !raw.is_empty()) else {
    return Ok(Resolution::Create);
  };
  let Ok(id) = raw.parse::<Id>() else {
    tracing::debug!(entity = F::NAME, id = raw, "non-numeric id");
    return Ok(Resolution::NotFound);
  };
  Ok(match service.find(id).await? {
    Some(record) => Resolution::Found(record),
    None => Resolution::NotFound,
  })
}

//! The load → edit → save workflow of an entity page.

use mobigo_core::{
  Draft, Persisted, add_to_collection_if_missing, form::EntityForm, model::Resource,
};

use crate::{
  error::{Error, Result},
  request::RequestOptions,
  resolve::Resolution,
  service::EntityService,
};

/// Owns the edit form of one record and tracks whether a save is in flight.
#[derive(Debug, Clone, Default)]
pub struct Editor<F> {
  pub form:  EntityForm<F>,
  is_saving: bool,
}

impl<F: Resource> Editor<F> {
  /// An editor for a new record.
  pub fn new() -> Self {
    Self {
      form:      EntityForm::new(),
      is_saving: false,
    }
  }

  /// An editor for the outcome of [`resolve`](crate::resolve::resolve);
  /// `None` when the record was not found.
  pub fn open(resolution: Resolution<Persisted<F>>) -> Option<Self> {
    match resolution {
      Resolution::Create => Some(Self::new()),
      Resolution::Found(record) => Some(Self {
        form:      EntityForm::edit(record),
        is_saving: false,
      }),
      Resolution::NotFound => None,
    }
  }

  pub fn is_saving(&self) -> bool { self.is_saving }

  /// Validate, then create or update depending on whether the form has a
  /// key. On success the form is reset to the saved record; on failure it is
  /// left as is so the user can retry.
  pub async fn save(&mut self, service: &EntityService<F>) -> Result<Persisted<F>> {
    let errors = self.form.validate();
    if !errors.is_empty() {
      return Err(Error::Validation(errors));
    }

    self.is_saving = true;
    let result = match self.form.draft() {
      Draft::New(record) => service.create(&record).await,
      Draft::Persisted(record) => service.update(&record).await,
    };
    self.is_saving = false;

    match &result {
      Ok(saved) => self.form.reset(saved.clone()),
      Err(error) => tracing::warn!(entity = F::NAME, %error, "save failed"),
    }
    result
  }
}

/// Load every record of a related resource as selector options, making sure
/// the currently referenced records are among them.
pub async fn load_options<R, I>(service: &EntityService<R>, current: I) -> Result<Vec<Persisted<R>>>
where
  R: Resource,
  I: IntoIterator<Item = Option<Persisted<R>>>,
{
  load_options_with(service, &RequestOptions::default(), current).await
}

/// Like [`load_options`], narrowing the query with `options`.
pub async fn load_options_with<R, I>(
  service: &EntityService<R>,
  options: &RequestOptions,
  current: I,
) -> Result<Vec<Persisted<R>>>
where
  R: Resource,
  I: IntoIterator<Item = Option<Persisted<R>>>,
{
  let found = service.query(options).await?;
  Ok(add_to_collection_if_missing(found, current))
}

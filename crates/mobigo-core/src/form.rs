//! Typed edit forms.
//!
//! An [`EntityForm`] holds the editable fields of one record plus its key
//! state. The key itself is never editable: a form opened on a persisted
//! record keeps that id until it is reset, and a blank form stays new until
//! the caller swaps in the record the server returned.

use std::fmt;

use crate::{
  key::Id,
  model::authority::{AUTHORITY_NAME_MAX_LEN, Authority},
  record::{Draft, New, Persisted},
};

// ─── Validation ──────────────────────────────────────────────────────────────

/// What is wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
  Required,
  TooLong { max: usize },
}

/// A validation failure on a named (wire-name) field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
  pub field:   &'static str,
  pub problem: Problem,
}

impl fmt::Display for FieldError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.problem {
      Problem::Required => write!(f, "{} is required", self.field),
      Problem::TooLong { max } => {
        write!(f, "{} must be at most {max} characters", self.field)
      }
    }
  }
}

impl std::error::Error for FieldError {}

/// Field-level rules a fields struct enforces before it may be saved.
pub trait Validate {
  fn validate(&self) -> Vec<FieldError> { Vec::new() }
}

/// Accumulates [`FieldError`]s for a [`Validate`] implementation.
#[derive(Debug, Default)]
pub struct Checks(Vec<FieldError>);

impl Checks {
  pub fn new() -> Self { Self::default() }

  pub fn required<T>(mut self, field: &'static str, value: &Option<T>) -> Self {
    if value.is_none() {
      self.0.push(FieldError {
        field,
        problem: Problem::Required,
      });
    }
    self
  }

  /// Like [`Checks::required`], but an empty string also fails. Whitespace
  /// counts as a value.
  pub fn required_text(mut self, field: &'static str, value: &Option<String>) -> Self {
    if value.as_deref().is_none_or(str::is_empty) {
      self.0.push(FieldError {
        field,
        problem: Problem::Required,
      });
    }
    self
  }

  pub fn max_chars(mut self, field: &'static str, value: Option<&str>, max: usize) -> Self {
    if value.is_some_and(|text| text.chars().count() > max) {
      self.0.push(FieldError {
        field,
        problem: Problem::TooLong { max },
      });
    }
    self
  }

  pub fn finish(self) -> Vec<FieldError> { self.0 }
}

// ─── Entity form ─────────────────────────────────────────────────────────────

/// Edit form for an id-keyed entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityForm<F> {
  id:     Option<Id>,
  fields: F,
}

impl<F: Default> Default for EntityForm<F> {
  fn default() -> Self {
    Self {
      id:     None,
      fields: F::default(),
    }
  }
}

impl<F: Default> EntityForm<F> {
  /// A blank form for creating a record.
  pub fn new() -> Self { Self::default() }

  /// Back to a blank, new form.
  pub fn clear(&mut self) { *self = Self::default(); }
}

impl<F> EntityForm<F> {
  /// A form seeded from an existing record or a prepared new one.
  pub fn edit(input: impl Into<Draft<F>>) -> Self {
    match input.into() {
      Draft::New(record) => Self {
        id:     None,
        fields: record.fields,
      },
      Draft::Persisted(record) => Self {
        id:     Some(record.id()),
        fields: record.into_fields(),
      },
    }
  }

  /// Replace the form contents, key included.
  pub fn reset(&mut self, input: impl Into<Draft<F>>) { *self = Self::edit(input); }

  pub fn id(&self) -> Option<Id> { self.id }

  pub fn is_new(&self) -> bool { self.id.is_none() }

  pub fn fields(&self) -> &F { &self.fields }

  pub fn fields_mut(&mut self) -> &mut F { &mut self.fields }

  /// The form value as a record to create or update.
  pub fn into_draft(self) -> Draft<F> {
    match self.id {
      Some(id) => Draft::Persisted(Persisted::new(id, self.fields)),
      None => Draft::New(New::new(self.fields)),
    }
  }
}

impl<F: Clone> EntityForm<F> {
  pub fn draft(&self) -> Draft<F> { self.clone().into_draft() }
}

impl<F: Validate> EntityForm<F> {
  pub fn validate(&self) -> Vec<FieldError> { self.fields.validate() }

  pub fn is_valid(&self) -> bool { self.validate().is_empty() }
}

// ─── Authority form ──────────────────────────────────────────────────────────

/// What saving an [`AuthorityForm`] does: create a new authority or update
/// the one the form was opened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorityDraft {
  Create(Authority),
  Update(Authority),
}

impl AuthorityDraft {
  pub fn authority(&self) -> &Authority {
    match self {
      Self::Create(authority) | Self::Update(authority) => authority,
    }
  }

  pub fn is_new(&self) -> bool { matches!(self, Self::Create(_)) }
}

/// Edit form for an [`Authority`], whose key is its name.
///
/// The name is typed by the user while the form is new and frozen once the
/// form is opened on a saved authority.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorityForm {
  name:            Option<String>,
  name_locked:     bool,
  pub description: Option<String>,
  pub ordre:       Option<String>,
}

impl AuthorityForm {
  pub fn new() -> Self { Self::default() }

  pub fn edit(authority: Authority) -> Self {
    Self {
      name:        Some(authority.name),
      name_locked: true,
      description: authority.description,
      ordre:       authority.ordre,
    }
  }

  pub fn reset(&mut self, authority: Option<Authority>) {
    *self = authority.map(Self::edit).unwrap_or_default();
  }

  pub fn is_new(&self) -> bool { !self.name_locked }

  pub fn name(&self) -> Option<&str> { self.name.as_deref() }

  /// Set the name of a new authority. Returns `false`, leaving the form
  /// unchanged, when the name is locked.
  pub fn set_name(&mut self, name: impl Into<String>) -> bool {
    if self.name_locked {
      return false;
    }
    self.name = Some(name.into());
    true
  }

  pub fn validate(&self) -> Vec<FieldError> {
    Checks::new()
      .required_text("name", &self.name)
      .max_chars("name", self.name.as_deref(), AUTHORITY_NAME_MAX_LEN)
      .finish()
  }

  /// The authority described by the form, or the reasons it is not valid.
  pub fn authority(&self) -> Result<Authority, Vec<FieldError>> {
    let errors = self.validate();
    match &self.name {
      Some(name) if errors.is_empty() => Ok(Authority {
        name:        name.clone(),
        description: self.description.clone(),
        ordre:       self.ordre.clone(),
      }),
      _ => Err(errors),
    }
  }

  /// Like [`AuthorityForm::authority`], tagged with whether saving creates or
  /// updates it.
  pub fn draft(&self) -> Result<AuthorityDraft, Vec<FieldError>> {
    let authority = self.authority()?;
    Ok(if self.name_locked {
      AuthorityDraft::Update(authority)
    } else {
      AuthorityDraft::Create(authority)
    })
  }
}

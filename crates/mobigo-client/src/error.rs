//! Error type for `mobigo-client`.

use mobigo_core::form::FieldError;
use reqwest::{Method, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("{method} {path} → {status}")]
  Status {
    method: Method,
    path:   String,
    status: StatusCode,
  },

  #[error("{method} {path} returned no body")]
  EmptyBody { method: Method, path: String },

  #[error("invalid json body: {0}")]
  Json(#[from] serde_json::Error),

  #[error(transparent)]
  Core(#[from] mobigo_core::Error),

  #[error("invalid form: {}", join(.0))]
  Validation(Vec<FieldError>),

  #[error("{0} has no search endpoint")]
  NotSearchable(&'static str),

  #[error("{0:?} cannot be used as a record key")]
  InvalidKey(String),

  #[error("invalid url: {0}")]
  InvalidUrl(String),
}

fn join(errors: &[FieldError]) -> String {
  errors
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join(", ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

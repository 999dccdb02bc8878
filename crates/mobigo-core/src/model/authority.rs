//! Authorities (roles), keyed by name rather than by a numeric id.

use serde::{Deserialize, Serialize};

use crate::key::Keyed;

/// Path segment under `/api`.
pub const AUTHORITY_PATH: &str = "authorities";

/// Longest name the backend accepts.
pub const AUTHORITY_NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority {
  pub name:        String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub ordre:       Option<String>,
}

impl Keyed for Authority {
  type Key = String;

  fn key(&self) -> &String { &self.name }
}

/// Reduced projection carrying only the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorityRef {
  pub name: String,
}

impl Keyed for AuthorityRef {
  type Key = String;

  fn key(&self) -> &String { &self.name }
}

impl From<&Authority> for AuthorityRef {
  fn from(authority: &Authority) -> Self {
    Self {
      name: authority.name.clone(),
    }
  }
}

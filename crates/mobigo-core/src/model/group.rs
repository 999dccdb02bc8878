//! User groups, their members, and the authorities granted to them.

use serde::{Deserialize, Serialize};

use super::{Resource, authority::AuthorityRef};
use crate::{
  form::Validate,
  key::{Id, Keyed},
  record::{New, Persisted},
};

// ─── Group ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupFields {
  pub group_name: Option<String>,
}

pub type Group = Persisted<GroupFields>;
pub type NewGroup = New<GroupFields>;

impl Resource for GroupFields {
  const NAME: &'static str = "group";
  const PATH: &'static str = "groups";
  const SEARCHABLE: bool = false;
}

impl Validate for GroupFields {}

// ─── Members ─────────────────────────────────────────────────────────────────

/// Path segment of the account list under `/api`.
pub const USER_PATH: &str = "users";

/// Reduced projection of an account: key and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
  pub id:    Id,
  #[serde(default)]
  pub login: Option<String>,
}

impl Keyed for UserRef {
  type Key = Id;

  fn key(&self) -> &Id { &self.id }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupMemberFields {
  pub group: Option<Box<Group>>,
  pub user:  Option<UserRef>,
}

pub type GroupMember = Persisted<GroupMemberFields>;
pub type NewGroupMember = New<GroupMemberFields>;

impl Resource for GroupMemberFields {
  const NAME: &'static str = "group member";
  const PATH: &'static str = "group-members";
}

impl Validate for GroupMemberFields {}

// ─── Authorities ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupAuthorityFields {
  pub authority: Option<AuthorityRef>,
  pub group:     Option<Box<Group>>,
}

pub type GroupAuthority = Persisted<GroupAuthorityFields>;
pub type NewGroupAuthority = New<GroupAuthorityFields>;

impl Resource for GroupAuthorityFields {
  const NAME: &'static str = "group authority";
  const PATH: &'static str = "group-authorities";
}

impl Validate for GroupAuthorityFields {}

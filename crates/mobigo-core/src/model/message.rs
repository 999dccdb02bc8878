//! Messages exchanged between people.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Resource, people::People};
use crate::{
  form::{Checks, FieldError, Validate},
  record::{New, Persisted},
  status::MessageStatus,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageFields {
  pub contenu:      Option<String>,
  #[serde(default, with = "crate::date::optional")]
  pub date_envoi:   Option<NaiveDate>,
  pub statut:       Option<MessageStatus>,
  pub expediteur:   Option<Box<People>>,
  pub destinataire: Option<Box<People>>,
}

pub type Message = Persisted<MessageFields>;
pub type NewMessage = New<MessageFields>;

impl Resource for MessageFields {
  const NAME: &'static str = "message";
  const PATH: &'static str = "messages";
}

impl Validate for MessageFields {
  fn validate(&self) -> Vec<FieldError> {
    Checks::new().required("dateEnvoi", &self.date_envoi).finish()
  }
}

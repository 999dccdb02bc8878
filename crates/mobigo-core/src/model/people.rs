//! People: drivers and passengers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Resource, group::UserRef, message::Message};
use crate::{
  form::{Checks, FieldError, Validate},
  record::{New, Persisted},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleFields {
  pub nom:                  Option<String>,
  pub prenom:               Option<String>,
  pub telephone:            Option<String>,
  /// National identity card number.
  pub cni:                  Option<String>,
  pub photo:                Option<String>,
  pub actif:                Option<String>,
  #[serde(default, with = "crate::date::optional")]
  pub date_naissance:       Option<NaiveDate>,
  pub musique:              Option<String>,
  pub discussion:           Option<String>,
  pub cigarette:            Option<String>,
  pub alcool:               Option<String>,
  pub animaux:              Option<String>,
  pub conducteur:           Option<String>,
  pub passager:             Option<String>,
  pub messages_expediteur:  Option<Box<Message>>,
  /// Spelled as the backend spells it.
  pub messages_destinatire: Option<Box<Message>>,
  /// Account the person signs in with.
  pub user:                 Option<UserRef>,
}

pub type People = Persisted<PeopleFields>;
pub type NewPeople = New<PeopleFields>;

impl Resource for PeopleFields {
  const NAME: &'static str = "people";
  const PATH: &'static str = "people";
}

impl Validate for PeopleFields {
  fn validate(&self) -> Vec<FieldError> {
    Checks::new()
      .required_text("nom", &self.nom)
      .required_text("telephone", &self.telephone)
      .required_text("cni", &self.cni)
      .required_text("actif", &self.actif)
      .required("dateNaissance", &self.date_naissance)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::date::{from_wire, to_wire};

  #[test]
  fn birth_date_is_transcoded_and_other_fields_pass_through() {
    let person: People = from_wire(json!({
      "id": 18053,
      "nom": "Ngono",
      "telephone": "+237 690000000",
      "cni": "123456789",
      "actif": "OUI",
      "dateNaissance": "1990-01-31",
      "messagesDestinatire": { "id": 5, "contenu": "Bonjour" },
      "user": { "id": 3, "login": "ngono" },
    }))
    .unwrap();
    assert_eq!(person.fields.date_naissance, NaiveDate::from_ymd_opt(1990, 1, 31));
    assert_eq!(
      person.fields.messages_destinatire.as_ref().and_then(|m| m.fields.contenu.as_deref()),
      Some("Bonjour")
    );

    let wire = to_wire(&person).unwrap();
    assert_eq!(wire["dateNaissance"], json!("1990-01-31"));
    assert_eq!(wire["telephone"], json!("+237 690000000"));
    assert_eq!(wire["messagesDestinatire"]["id"], json!(5));
    assert_eq!(wire["user"], json!({ "id": 3, "login": "ngono" }));
    assert!(person.fields.validate().is_empty());
  }
}

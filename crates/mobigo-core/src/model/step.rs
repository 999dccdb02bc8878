//! Intermediate stops along a ride.

use serde::{Deserialize, Serialize};

use super::{Resource, ride::Ride};
use crate::{
  form::{Checks, FieldError, Validate},
  record::{New, Persisted},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepFields {
  pub ville:        Option<String>,
  pub heure_depart: Option<String>,
  pub trajet:       Option<Box<Ride>>,
}

pub type Step = Persisted<StepFields>;
pub type NewStep = New<StepFields>;

impl Resource for StepFields {
  const NAME: &'static str = "step";
  const PATH: &'static str = "steps";
}

impl Validate for StepFields {
  fn validate(&self) -> Vec<FieldError> {
    Checks::new()
      .required_text("ville", &self.ville)
      .required_text("heureDepart", &self.heure_depart)
      .finish()
  }
}

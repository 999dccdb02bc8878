//! Vehicles registered by drivers.

use serde::{Deserialize, Serialize};

use super::{Resource, people::People};
use crate::{
  form::{Checks, FieldError, Validate},
  record::{New, Persisted},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleFields {
  pub marque:          Option<String>,
  pub modele:          Option<String>,
  pub annee:           Option<String>,
  pub carte_grise:     Option<String>,
  pub immatriculation: Option<String>,
  pub nb_places:       Option<i32>,
  pub couleur:         Option<String>,
  pub photo:           Option<String>,
  pub actif:           Option<String>,
  pub proprietaire:    Option<Box<People>>,
}

pub type Vehicle = Persisted<VehicleFields>;
pub type NewVehicle = New<VehicleFields>;

impl Resource for VehicleFields {
  const NAME: &'static str = "vehicle";
  const PATH: &'static str = "vehicles";
}

impl Validate for VehicleFields {
  fn validate(&self) -> Vec<FieldError> {
    Checks::new()
      .required_text("marque", &self.marque)
      .required_text("modele", &self.modele)
      .required_text("annee", &self.annee)
      .required_text("carteGrise", &self.carte_grise)
      .required_text("immatriculation", &self.immatriculation)
      .required("nbPlaces", &self.nb_places)
      .required_text("couleur", &self.couleur)
      .required_text("actif", &self.actif)
      .finish()
  }
}

//! Rides: a driver's offer of seats between two cities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Resource, vehicle::Vehicle};
use crate::{
  form::{Checks, FieldError, Validate},
  record::{New, Persisted},
  status::RideStatus,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideFields {
  pub ville_depart:          Option<String>,
  pub ville_arrivee:         Option<String>,
  #[serde(default, with = "crate::date::optional")]
  pub date_depart:           Option<NaiveDate>,
  #[serde(default, with = "crate::date::optional")]
  pub date_arrivee:          Option<NaiveDate>,
  pub heure_depart:          Option<String>,
  pub heure_arrivee:         Option<String>,
  pub minute_depart:         Option<String>,
  pub minute_arrivee:        Option<String>,
  pub prix_par_place:        Option<f64>,
  pub nbre_place_disponible: Option<i32>,
  pub statut:                Option<RideStatus>,
  pub vehicule:              Option<Box<Vehicle>>,
}

pub type Ride = Persisted<RideFields>;
pub type NewRide = New<RideFields>;

impl Resource for RideFields {
  const NAME: &'static str = "ride";
  const PATH: &'static str = "rides";
}

impl Validate for RideFields {
  fn validate(&self) -> Vec<FieldError> {
    Checks::new()
      .required_text("villeDepart", &self.ville_depart)
      .required_text("villeArrivee", &self.ville_arrivee)
      .required("dateDepart", &self.date_depart)
      .required("dateArrivee", &self.date_arrivee)
      .required_text("heureDepart", &self.heure_depart)
      .required_text("heureArrivee", &self.heure_arrivee)
      .required_text("minuteDepart", &self.minute_depart)
      .required_text("minuteArrivee", &self.minute_arrivee)
      .required("prixParPlace", &self.prix_par_place)
      .required("nbrePlaceDisponible", &self.nbre_place_disponible)
      .required("statut", &self.statut)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::date::{from_wire, to_wire};

  fn may_19() -> NaiveDate { NaiveDate::from_ymd_opt(2025, 5, 19).unwrap() }

  #[test]
  fn new_ride_goes_out_with_text_dates() {
    let ride = NewRide::new(RideFields {
      date_depart: Some(may_19()),
      ..Default::default()
    });
    let wire = to_wire(&ride).unwrap();
    assert_eq!(wire["id"], json!(null));
    assert_eq!(wire["dateDepart"], json!("2025-05-19"));
    assert_eq!(wire["dateArrivee"], json!(null));
  }

  #[test]
  fn server_ride_decodes_nested_vehicle_projection() {
    let ride: Ride = from_wire(json!({
      "id": 8,
      "villeDepart": "Douala",
      "villeArrivee": "Yaoundé",
      "dateDepart": "2025-05-19",
      "dateArrivee": null,
      "prixParPlace": 3500.0,
      "nbrePlaceDisponible": 3,
      "statut": "OUVERT",
      "vehicule": { "id": 2 },
    }))
    .unwrap();
    assert_eq!(ride.id(), 8);
    assert_eq!(ride.fields.date_depart, Some(may_19()));
    assert_eq!(ride.fields.date_arrivee, None);
    assert_eq!(ride.fields.statut, Some(RideStatus::Ouvert));
    assert_eq!(ride.fields.vehicule.as_ref().map(|v| v.id()), Some(2));
  }

  #[test]
  fn round_trip_keeps_both_dates() {
    let ride = Ride::new(4, RideFields {
      date_depart: Some(may_19()),
      date_arrivee: NaiveDate::from_ymd_opt(2025, 5, 20),
      ..Default::default()
    });
    let back: Ride = from_wire(to_wire(&ride).unwrap()).unwrap();
    assert_eq!(back, ride);
  }

  #[test]
  fn every_schedule_field_is_required() {
    let errors = RideFields::default().validate();
    assert_eq!(errors.len(), 11);
    assert!(errors.iter().all(|e| e.field != "vehicule"));
  }
}

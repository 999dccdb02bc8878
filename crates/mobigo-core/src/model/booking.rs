//! Seat bookings made by passengers on rides.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Resource, people::People, ride::Ride};
use crate::{
  form::{Checks, FieldError, Validate},
  record::{New, Persisted},
  status::{BookingStatus, PaymentMethod},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFields {
  pub nb_places_reservees: Option<i64>,
  pub montant_total:       Option<f64>,
  pub commission:          Option<f64>,
  #[serde(default, with = "crate::date::optional")]
  pub date_reservation:    Option<NaiveDate>,
  pub statut:              Option<BookingStatus>,
  pub methode_payment:     Option<PaymentMethod>,
  pub trajet:              Option<Box<Ride>>,
  pub passager:            Option<Box<People>>,
}

pub type Booking = Persisted<BookingFields>;
pub type NewBooking = New<BookingFields>;

impl Resource for BookingFields {
  const NAME: &'static str = "booking";
  const PATH: &'static str = "bookings";
}

impl Validate for BookingFields {
  fn validate(&self) -> Vec<FieldError> {
    Checks::new()
      .required("nbPlacesReservees", &self.nb_places_reservees)
      .required("montantTotal", &self.montant_total)
      .required("dateReservation", &self.date_reservation)
      .required("statut", &self.statut)
      .finish()
  }
}

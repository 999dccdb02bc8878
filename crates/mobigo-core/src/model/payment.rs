//! Payments settling a booking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Resource, booking::Booking};
use crate::{
  form::{Checks, FieldError, Validate},
  record::{New, Persisted},
  status::{PaymentMethod, PaymentStatus},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFields {
  pub montant:       Option<f64>,
  #[serde(default, with = "crate::date::optional")]
  pub date_paiement: Option<NaiveDate>,
  pub methode:       Option<PaymentMethod>,
  pub statut:        Option<PaymentStatus>,
  pub booking:       Option<Box<Booking>>,
}

pub type Payment = Persisted<PaymentFields>;
pub type NewPayment = New<PaymentFields>;

impl Resource for PaymentFields {
  const NAME: &'static str = "payment";
  const PATH: &'static str = "payments";
}

impl Validate for PaymentFields {
  fn validate(&self) -> Vec<FieldError> {
    Checks::new()
      .required("montant", &self.montant)
      .required("datePaiement", &self.date_paiement)
      .required("methode", &self.methode)
      .required("statut", &self.statut)
      .finish()
  }
}

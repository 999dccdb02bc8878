//! Enumerated status codes carried by rides, bookings, payments and messages.
//!
//! Wire values are the upper-case variant names. Each enum derives
//! [`strum::EnumIter`] so edit forms can list the selectable values.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Lifecycle of a ride offer.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RideStatus {
  Ouvert,
  Complet,
  Effectue,
  Annule,
}

/// Lifecycle of a seat booking.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
  EnAttente,
  Confirme,
  Refuse,
  Effectue,
  Annule,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
  /// Older payloads spell this `ATTENTE`.
  #[serde(alias = "ATTENTE")]
  #[strum(to_string = "EN_ATTENTE", serialize = "ATTENTE")]
  EnAttente,
  Reussi,
  Echoue,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
  Carte,
  Bancaure,
  Virement,
  Paypal,
  Orange,
  Money,
  Mtn,
  Mobile,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageStatus {
  Envoye,
  Echec,
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use serde_json::json;
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn wire_names_are_screaming_snake_case() {
    assert_eq!(serde_json::to_value(BookingStatus::EnAttente).unwrap(), json!("EN_ATTENTE"));
    assert_eq!(BookingStatus::EnAttente.to_string(), "EN_ATTENTE");
    assert_eq!(RideStatus::from_str("EFFECTUE").unwrap(), RideStatus::Effectue);
  }

  #[test]
  fn legacy_payment_status_spelling_is_accepted() {
    let status: PaymentStatus = serde_json::from_value(json!("ATTENTE")).unwrap();
    assert_eq!(status, PaymentStatus::EnAttente);
    assert_eq!(PaymentStatus::from_str("ATTENTE").unwrap(), PaymentStatus::EnAttente);
    assert_eq!(status.to_string(), "EN_ATTENTE");
  }

  #[test]
  fn every_variant_round_trips_through_its_name() {
    for method in PaymentMethod::iter() {
      assert_eq!(PaymentMethod::from_str(&method.to_string()).unwrap(), method);
    }
    assert_eq!(RideStatus::iter().count(), 4);
    assert_eq!(BookingStatus::iter().count(), 5);
  }

  #[test]
  fn unknown_status_is_rejected() {
    assert!(serde_json::from_value::<MessageStatus>(json!("LU")).is_err());
    assert!(MessageStatus::from_str("LU").is_err());
  }
}

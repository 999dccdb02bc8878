//! Ratings left after a ride.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Resource, people::People, ride::Ride};
use crate::{
  form::{Checks, FieldError, Validate},
  record::{New, Persisted},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingFields {
  pub note:        Option<f64>,
  pub commentaire: Option<String>,
  #[serde(default, with = "crate::date::optional")]
  pub rating_date: Option<NaiveDate>,
  pub trajet:      Option<Box<Ride>>,
  pub passager:    Option<Box<People>>,
  pub conducteur:  Option<Box<People>>,
}

pub type Rating = Persisted<RatingFields>;
pub type NewRating = New<RatingFields>;

impl Resource for RatingFields {
  const NAME: &'static str = "rating";
  const PATH: &'static str = "ratings";
}

impl Validate for RatingFields {
  fn validate(&self) -> Vec<FieldError> {
    Checks::new().required("ratingDate", &self.rating_date).finish()
  }
}

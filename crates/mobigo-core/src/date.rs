//! Date transcoding between the wire and the client.
//!
//! Calendar dates travel as `YYYY-MM-DD` strings and live client-side as
//! [`NaiveDate`]. Records opt in per field with
//! `#[serde(default, with = "crate::date::optional")]`, after which
//! [`to_wire`] and [`from_wire`] convert whole records (or arrays of them)
//! while every other field passes through unchanged.

use chrono::NaiveDate;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{Error, Result};

/// Wire format of every date-valued field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a client date in [`DATE_FORMAT`].
pub fn format_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

/// Parse a wire date. The input is trusted; malformed text is an error for
/// the caller to surface.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|source| {
    Error::InvalidDate {
      value: raw.to_string(),
      source,
    }
  })
}

/// Client → wire: serialise a record, emitting every date as text and every
/// absent date as an explicit `null`.
pub fn to_wire<T: Serialize + ?Sized>(record: &T) -> Result<Value> {
  Ok(serde_json::to_value(record)?)
}

/// Wire → client: decode a record, parsing its date strings. A `null` or
/// missing date becomes `None`.
pub fn from_wire<T: DeserializeOwned>(value: Value) -> Result<T> {
  Ok(serde_json::from_value(value)?)
}

/// Wire → client for an array body. Order and length are preserved; a `null`
/// body stays `None`.
pub fn from_wire_array<T: DeserializeOwned>(
  values: Option<Vec<Value>>,
) -> Result<Option<Vec<T>>> {
  values
    .map(|values| values.into_iter().map(from_wire).collect::<Result<Vec<T>>>())
    .transpose()
}

/// Serde adapter for `Option<NaiveDate>` fields.
pub mod optional {
  use chrono::NaiveDate;
  use serde::{Deserialize, Deserializer, Serializer, de};

  pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match date {
      Some(date) => serializer.serialize_str(&super::format_date(*date)),
      None => serializer.serialize_none(),
    }
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
      None | Some("") => Ok(None),
      Some(text) => super::parse_date(text).map(Some).map_err(de::Error::custom),
    }
  }
}

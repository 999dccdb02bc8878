//! Entity models of the Mobigo ride-sharing back office.
//!
//! Each id-keyed entity is a `…Fields` struct wrapped in
//! [`Persisted`](crate::record::Persisted) or [`New`](crate::record::New);
//! the aliases below name the common combinations. Relationship fields embed
//! a reduced projection of the referenced record, which in practice often
//! carries nothing but its key.

use serde::{Serialize, de::DeserializeOwned};

use crate::form::Validate;

pub mod authority;
pub mod booking;
pub mod group;
pub mod message;
pub mod payment;
pub mod people;
pub mod rating;
pub mod ride;
pub mod step;
pub mod vehicle;

pub use authority::{Authority, AuthorityRef};
pub use booking::{Booking, BookingFields, NewBooking};
pub use group::{
  Group, GroupAuthority, GroupAuthorityFields, GroupFields, GroupMember, GroupMemberFields,
  NewGroup, NewGroupAuthority, NewGroupMember, UserRef,
};
pub use message::{Message, MessageFields, NewMessage};
pub use payment::{NewPayment, Payment, PaymentFields};
pub use people::{NewPeople, People, PeopleFields};
pub use rating::{NewRating, Rating, RatingFields};
pub use ride::{NewRide, Ride, RideFields};
pub use step::{NewStep, Step, StepFields};
pub use vehicle::{NewVehicle, Vehicle, VehicleFields};

/// A REST resource keyed by a numeric id, described by its fields type.
pub trait Resource:
  Serialize + DeserializeOwned + Validate + Clone + Default + Send + Sync + 'static
{
  /// Path segment under `/api`, e.g. `rides`.
  const PATH: &'static str;
  /// Singular display name used in logs and errors.
  const NAME: &'static str;
  /// Whether the backend exposes `/<PATH>/_search`.
  const SEARCHABLE: bool = true;
}

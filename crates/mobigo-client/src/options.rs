//! Selector options for the relationship fields of each edit page.
//!
//! Every bundle is an owned value: [`load`](BookingOptions::load) queries the
//! related resources and reconciles the records the form currently points at
//! into the results, and `include` does the same reconciliation without a
//! request after the form has been reset to another record.

use mobigo_core::{
  add_to_collection_if_missing,
  model::{
    Authority, AuthorityRef, Booking, BookingFields, Group, GroupAuthorityFields, GroupFields,
    GroupMemberFields, Message, MessageFields, PaymentFields, People, PeopleFields,
    RatingFields, Ride, RideFields, StepFields, UserRef, Vehicle, VehicleFields,
  },
};

use crate::{
  client::ApiClient,
  editor::{load_options, load_options_with},
  error::Result,
  request::RequestOptions,
};

/// Bookings that no payment points at yet.
const UNPAID_BOOKINGS: (&str, &str) = ("filter", "payement-is-null");

fn current<T: Clone>(field: &Option<Box<T>>) -> Option<T> { field.as_deref().cloned() }

fn authority_of(reference: &AuthorityRef) -> Authority {
  Authority {
    name:        reference.name.clone(),
    description: None,
    ordre:       None,
  }
}

// ─── People ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeopleOptions {
  pub messages: Vec<Message>,
}

impl PeopleOptions {
  fn candidates(fields: &PeopleFields) -> [Option<Message>; 2] {
    [
      current(&fields.messages_expediteur),
      current(&fields.messages_destinatire),
    ]
  }

  pub async fn load(client: &ApiClient, fields: &PeopleFields) -> Result<Self> {
    let messages = load_options(&client.service(), Self::candidates(fields)).await?;
    Ok(Self { messages })
  }

  pub fn include(self, fields: &PeopleFields) -> Self {
    Self {
      messages: add_to_collection_if_missing(self.messages, Self::candidates(fields)),
    }
  }
}

// ─── Vehicle ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleOptions {
  pub people: Vec<People>,
}

impl VehicleOptions {
  pub async fn load(client: &ApiClient, fields: &VehicleFields) -> Result<Self> {
    let people = load_options(&client.service(), [current(&fields.proprietaire)]).await?;
    Ok(Self { people })
  }

  pub fn include(self, fields: &VehicleFields) -> Self {
    Self {
      people: add_to_collection_if_missing(self.people, [current(&fields.proprietaire)]),
    }
  }
}

// ─── Ride ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RideOptions {
  pub vehicles: Vec<Vehicle>,
}

impl RideOptions {
  pub async fn load(client: &ApiClient, fields: &RideFields) -> Result<Self> {
    let vehicles = load_options(&client.service(), [current(&fields.vehicule)]).await?;
    Ok(Self { vehicles })
  }

  pub fn include(self, fields: &RideFields) -> Self {
    Self {
      vehicles: add_to_collection_if_missing(self.vehicles, [current(&fields.vehicule)]),
    }
  }
}

// ─── Step ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOptions {
  pub rides: Vec<Ride>,
}

impl StepOptions {
  pub async fn load(client: &ApiClient, fields: &StepFields) -> Result<Self> {
    let rides = load_options(&client.service(), [current(&fields.trajet)]).await?;
    Ok(Self { rides })
  }

  pub fn include(self, fields: &StepFields) -> Self {
    Self {
      rides: add_to_collection_if_missing(self.rides, [current(&fields.trajet)]),
    }
  }
}

// ─── Booking ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingOptions {
  pub rides:  Vec<Ride>,
  pub people: Vec<People>,
}

impl BookingOptions {
  /// Both option lists are fetched concurrently.
  pub async fn load(client: &ApiClient, fields: &BookingFields) -> Result<Self> {
    let ride_service = client.service::<RideFields>();
    let people_service = client.service::<PeopleFields>();
    let (rides, people) = tokio::try_join!(
      load_options(&ride_service, [current(&fields.trajet)]),
      load_options(&people_service, [current(&fields.passager)]),
    )?;
    Ok(Self { rides, people })
  }

  pub fn include(self, fields: &BookingFields) -> Self {
    Self {
      rides:  add_to_collection_if_missing(self.rides, [current(&fields.trajet)]),
      people: add_to_collection_if_missing(self.people, [current(&fields.passager)]),
    }
  }
}

// ─── Payment ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentOptions {
  pub bookings: Vec<Booking>,
}

impl PaymentOptions {
  /// Only bookings without a payment are offered, plus the one the payment
  /// already points at.
  pub async fn load(client: &ApiClient, fields: &PaymentFields) -> Result<Self> {
    let (key, value) = UNPAID_BOOKINGS;
    let bookings = load_options_with(
      &client.service(),
      &RequestOptions::new().filter(key, value),
      [current(&fields.booking)],
    )
    .await?;
    Ok(Self { bookings })
  }

  pub fn include(self, fields: &PaymentFields) -> Self {
    Self {
      bookings: add_to_collection_if_missing(self.bookings, [current(&fields.booking)]),
    }
  }
}

// ─── Rating ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingOptions {
  pub rides:  Vec<Ride>,
  pub people: Vec<People>,
}

impl RatingOptions {
  fn people_candidates(fields: &RatingFields) -> [Option<People>; 2] {
    [current(&fields.passager), current(&fields.conducteur)]
  }

  pub async fn load(client: &ApiClient, fields: &RatingFields) -> Result<Self> {
    let ride_service = client.service::<RideFields>();
    let people_service = client.service::<PeopleFields>();
    let (rides, people) = tokio::try_join!(
      load_options(&ride_service, [current(&fields.trajet)]),
      load_options(&people_service, Self::people_candidates(fields)),
    )?;
    Ok(Self { rides, people })
  }

  pub fn include(self, fields: &RatingFields) -> Self {
    Self {
      rides:  add_to_collection_if_missing(self.rides, [current(&fields.trajet)]),
      people: add_to_collection_if_missing(self.people, Self::people_candidates(fields)),
    }
  }
}

// ─── Message ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageOptions {
  pub people: Vec<People>,
}

impl MessageOptions {
  fn candidates(fields: &MessageFields) -> [Option<People>; 2] {
    [current(&fields.expediteur), current(&fields.destinataire)]
  }

  pub async fn load(client: &ApiClient, fields: &MessageFields) -> Result<Self> {
    let people = load_options(&client.service(), Self::candidates(fields)).await?;
    Ok(Self { people })
  }

  pub fn include(self, fields: &MessageFields) -> Self {
    Self {
      people: add_to_collection_if_missing(self.people, Self::candidates(fields)),
    }
  }
}

// ─── Groups ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupMemberOptions {
  pub groups: Vec<Group>,
  pub users:  Vec<UserRef>,
}

impl GroupMemberOptions {
  pub async fn load(client: &ApiClient, fields: &GroupMemberFields) -> Result<Self> {
    let group_service = client.service::<GroupFields>();
    let user_service = client.users();
    let no_options = RequestOptions::default();
    let (groups, users) = tokio::try_join!(
      load_options(&group_service, [current(&fields.group)]),
      user_service.query(&no_options),
    )?;
    Ok(Self {
      groups,
      users: add_to_collection_if_missing(users, [fields.user.clone()]),
    })
  }

  pub fn include(self, fields: &GroupMemberFields) -> Self {
    Self {
      groups: add_to_collection_if_missing(self.groups, [current(&fields.group)]),
      users:  add_to_collection_if_missing(self.users, [fields.user.clone()]),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupAuthorityOptions {
  pub authorities: Vec<Authority>,
  pub groups:      Vec<Group>,
}

impl GroupAuthorityOptions {
  pub async fn load(client: &ApiClient, fields: &GroupAuthorityFields) -> Result<Self> {
    let authority_service = client.authorities();
    let group_service = client.service::<GroupFields>();
    let no_options = RequestOptions::default();
    let (authorities, groups) = tokio::try_join!(
      authority_service.query(&no_options),
      load_options(&group_service, [current(&fields.group)]),
    )?;
    Ok(Self {
      authorities: add_to_collection_if_missing(
        authorities,
        [fields.authority.as_ref().map(authority_of)],
      ),
      groups,
    })
  }

  pub fn include(self, fields: &GroupAuthorityFields) -> Self {
    Self {
      authorities: add_to_collection_if_missing(
        self.authorities,
        [fields.authority.as_ref().map(authority_of)],
      ),
      groups:      add_to_collection_if_missing(self.groups, [current(&fields.group)]),
    }
  }
}

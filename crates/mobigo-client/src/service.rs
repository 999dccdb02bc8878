//! CRUD and search over one id-keyed resource.
//!
//! | Method   | Path                       | Operation          |
//! |----------|----------------------------|--------------------|
//! | `POST`   | `/api/<path>`              | [`create`]         |
//! | `PUT`    | `/api/<path>/:id`          | [`update`]         |
//! | `PATCH`  | `/api/<path>/:id`          | [`partial_update`] |
//! | `GET`    | `/api/<path>/:id`          | [`find`]           |
//! | `GET`    | `/api/<path>`              | [`query`]          |
//! | `DELETE` | `/api/<path>/:id`          | [`delete`]         |
//! | `GET`    | `/api/<path>/_search`      | [`search`]         |
//!
//! Every body crosses the date transcoder in both directions.
//!
//! [`create`]: EntityService::create
//! [`update`]: EntityService::update
//! [`partial_update`]: EntityService::partial_update
//! [`find`]: EntityService::find
//! [`query`]: EntityService::query
//! [`delete`]: EntityService::delete
//! [`search`]: EntityService::search

use std::marker::PhantomData;

use mobigo_core::{
  Id, New, Persisted,
  date::{from_wire, from_wire_array, to_wire},
  model::{Resource, Ride, RideFields},
};
use reqwest::{Method, Response, header::CONTENT_TYPE};
use serde_json::Value;

use crate::{
  client::{ApiClient, ensure_success, is_not_found, read_json},
  error::{Error, Result},
  request::{RequestOptions, Search},
};

const MERGE_PATCH: &str = "application/merge-patch+json";

/// HTTP service for the resource described by `F`.
#[derive(Debug, Clone)]
pub struct EntityService<F> {
  client:  ApiClient,
  _fields: PhantomData<fn() -> F>,
}

impl<F: Resource> EntityService<F> {
  pub fn new(client: ApiClient) -> Self {
    Self {
      client,
      _fields: PhantomData,
    }
  }

  fn item_path(id: Id) -> String { format!("{}/{id}", F::PATH) }

  /// `POST /api/<path>`
  pub async fn create(&self, record: &New<F>) -> Result<Persisted<F>> {
    let body = to_wire(record)?;
    let resp = self
      .client
      .send_ok(Method::POST, F::PATH, |req| req.json(&body))
      .await?;
    decode_one(resp, Method::POST, F::PATH).await
  }

  /// `PUT /api/<path>/:id`
  pub async fn update(&self, record: &Persisted<F>) -> Result<Persisted<F>> {
    let path = Self::item_path(record.id());
    let body = to_wire(record)?;
    let resp = self
      .client
      .send_ok(Method::PUT, &path, |req| req.json(&body))
      .await?;
    decode_one(resp, Method::PUT, &path).await
  }

  /// `PATCH /api/<path>/:id` with a merge-patch body: only populated fields
  /// are sent.
  pub async fn partial_update(&self, record: &Persisted<F>) -> Result<Persisted<F>> {
    let path = Self::item_path(record.id());
    let body = to_wire(&record.as_patch())?;
    let resp = self
      .client
      .send_ok(Method::PATCH, &path, |req| {
        req.header(CONTENT_TYPE, MERGE_PATCH).body(body.to_string())
      })
      .await?;
    decode_one(resp, Method::PATCH, &path).await
  }

  /// `GET /api/<path>/:id`; `None` when the server has no such record.
  pub async fn find(&self, id: Id) -> Result<Option<Persisted<F>>> {
    let path = Self::item_path(id);
    let resp = self.client.send(Method::GET, &path, |req| req).await?;
    if is_not_found(&resp) {
      return Ok(None);
    }
    let resp = ensure_success(resp, Method::GET, &path)?;
    match read_json(resp).await? {
      Some(value) => Ok(Some(from_wire(value)?)),
      None => Ok(None),
    }
  }

  /// `GET /api/<path>`; a `null` body reads as an empty list.
  pub async fn query(&self, options: &RequestOptions) -> Result<Vec<Persisted<F>>> {
    let query = options.to_query();
    let resp = self
      .client
      .send_ok(Method::GET, F::PATH, |req| req.query(&query))
      .await?;
    decode_many(resp).await
  }

  /// `DELETE /api/<path>/:id`
  pub async fn delete(&self, id: Id) -> Result<()> {
    let path = Self::item_path(id);
    self.client.send_ok(Method::DELETE, &path, |req| req).await?;
    Ok(())
  }

  /// `GET /api/<path>/_search`.
  ///
  /// A failed search is logged and reads as no results, so a broken search
  /// index degrades to an empty list instead of an error.
  pub async fn search(&self, search: &Search) -> Result<Vec<Persisted<F>>> {
    if !F::SEARCHABLE {
      return Err(Error::NotSearchable(F::NAME));
    }
    match self.try_search(search).await {
      Ok(found) => Ok(found),
      Err(error) => {
        tracing::warn!(entity = F::NAME, query = %search.query, %error, "search failed");
        Ok(Vec::new())
      }
    }
  }

  async fn try_search(&self, search: &Search) -> Result<Vec<Persisted<F>>> {
    let path = format!("{}/_search", F::PATH);
    let query = search.to_query();
    let resp = self
      .client
      .send_ok(Method::GET, &path, |req| req.query(&query))
      .await?;
    decode_many(resp).await
  }
}

impl EntityService<RideFields> {
  /// `PUT /api/rides/:id/complete`: mark the ride as done.
  pub async fn complete(&self, id: Id) -> Result<Ride> { self.transition(id, "complete").await }

  /// `PUT /api/rides/:id/cancel`
  pub async fn cancel(&self, id: Id) -> Result<Ride> { self.transition(id, "cancel").await }

  async fn transition(&self, id: Id, action: &str) -> Result<Ride> {
    let path = format!("{}/{action}", Self::item_path(id));
    let resp = self.client.send_ok(Method::PUT, &path, |req| req).await?;
    decode_one(resp, Method::PUT, &path).await
  }
}

// ─── Decoding ─────────────────────────────────────────────────────────────────

async fn decode_one<T>(resp: Response, method: Method, path: &str) -> Result<T>
where
  T: serde::de::DeserializeOwned,
{
  match read_json(resp).await? {
    Some(value) => Ok(from_wire(value)?),
    None => Err(Error::EmptyBody {
      method,
      path: path.to_string(),
    }),
  }
}

pub(crate) async fn decode_many<T>(resp: Response) -> Result<Vec<T>>
where
  T: serde::de::DeserializeOwned,
{
  let values = match read_json(resp).await? {
    Some(Value::Array(values)) => Some(values),
    Some(other) => Some(serde_json::from_value::<Vec<Value>>(other)?),
    None => None,
  };
  Ok(from_wire_array(values)?.unwrap_or_default())
}

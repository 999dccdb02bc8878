//! Service for `/api/authorities`, keyed by name.
//!
//! The name travels as one percent-encoded path segment. There is no search
//! endpoint.

use mobigo_core::{
  date::{from_wire, to_wire},
  form::AuthorityDraft,
  model::{Authority, authority::AUTHORITY_PATH},
};
use reqwest::{Method, Response, Url};

use crate::{
  client::{ApiClient, ensure_success, is_not_found, read_json},
  error::{Error, Result},
  request::RequestOptions,
  resolve::Resolution,
  service::decode_many,
};

#[derive(Debug, Clone)]
pub struct AuthorityService {
  client: ApiClient,
}

impl AuthorityService {
  pub fn new(client: ApiClient) -> Self { Self { client } }

  fn item_url(&self, name: &str) -> Result<Url> { self.client.item_url(AUTHORITY_PATH, name) }

  /// `POST /api/authorities`
  pub async fn create(&self, authority: &Authority) -> Result<Authority> {
    let body = to_wire(authority)?;
    let resp = self
      .client
      .send_ok(Method::POST, AUTHORITY_PATH, |req| req.json(&body))
      .await?;
    decode_authority(resp, Method::POST, AUTHORITY_PATH).await
  }

  /// `PUT /api/authorities/:name`
  pub async fn update(&self, authority: &Authority) -> Result<Authority> {
    let url = self.item_url(&authority.name)?;
    let path = url.path().to_string();
    let body = to_wire(authority)?;
    let resp = self
      .client
      .send_to(Method::PUT, url, |req| req.json(&body))
      .await?;
    let resp = ensure_success(resp, Method::PUT, &path)?;
    decode_authority(resp, Method::PUT, &path).await
  }

  /// Create or update, as the form that produced `draft` decided.
  pub async fn save(&self, draft: &AuthorityDraft) -> Result<Authority> {
    let result = match draft {
      AuthorityDraft::Create(authority) => self.create(authority).await,
      AuthorityDraft::Update(authority) => self.update(authority).await,
    };
    if let Err(error) = &result {
      tracing::warn!(entity = "authority", %error, "save failed");
    }
    result
  }

  /// `GET /api/authorities/:name`; `None` when unknown.
  pub async fn find(&self, name: &str) -> Result<Option<Authority>> {
    let url = self.item_url(name)?;
    let path = url.path().to_string();
    let resp = self.client.send_to(Method::GET, url, |req| req).await?;
    if is_not_found(&resp) {
      return Ok(None);
    }
    let resp = ensure_success(resp, Method::GET, &path)?;
    match read_json(resp).await? {
      Some(value) => Ok(Some(from_wire(value)?)),
      None => Ok(None),
    }
  }

  /// `GET /api/authorities`
  pub async fn query(&self, options: &RequestOptions) -> Result<Vec<Authority>> {
    let query = options.to_query();
    let resp = self
      .client
      .send_ok(Method::GET, AUTHORITY_PATH, |req| req.query(&query))
      .await?;
    decode_many(resp).await
  }

  /// `DELETE /api/authorities/:name`
  pub async fn delete(&self, name: &str) -> Result<()> {
    let url = self.item_url(name)?;
    let path = url.path().to_string();
    let resp = self.client.send_to(Method::DELETE, url, |req| req).await?;
    ensure_success(resp, Method::DELETE, &path)?;
    Ok(())
  }

  /// Resolve the `name` route parameter of an authority page.
  pub async fn resolve(&self, name: Option<&str>) -> Result<Resolution<Authority>> {
    let Some(name) = name.filter(|name| !name.is_empty()) else {
      return Ok(Resolution::Create);
    };
    match self.find(name).await {
      Ok(Some(authority)) => Ok(Resolution::Found(authority)),
      Ok(None) | Err(Error::InvalidKey(_)) => Ok(Resolution::NotFound),
      Err(error) => Err(error),
    }
  }
}

async fn decode_authority(resp: Response, method: Method, path: &str) -> Result<Authority> {
  match read_json(resp).await? {
    Some(value) => Ok(from_wire(value)?),
    None => Err(Error::EmptyBody {
      method,
      path: path.to_string(),
    }),
  }
}

//! Async HTTP client wrapping the Mobigo JSON API.

use std::time::Duration;

use mobigo_core::model::Resource;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde_json::Value;

use crate::{
  authority::AuthorityService,
  error::{Error, Result},
  service::EntityService,
  user::UserService,
};

/// Default API origin when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Connection settings for the Mobigo API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
  pub timeout:  Duration,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      timeout:  Duration::from_secs(30),
    }
  }
}

/// Async HTTP client for the Mobigo REST API.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct ApiClient {
  http:   Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let http = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { http, config })
  }

  pub fn config(&self) -> &ApiConfig { &self.config }

  /// Absolute URL of `path` under `/api`.
  pub fn url(&self, path: &str) -> String {
    format!(
      "{}/api/{}",
      self.config.base_url.trim_end_matches('/'),
      path.trim_start_matches('/')
    )
  }

  /// Absolute URL of `/api/<resource>/<key>`, with `key` percent-encoded as
  /// a single path segment so that `/`, `?` or `#` in it stay part of the key.
  pub fn item_url(&self, resource: &str, key: &str) -> Result<Url> {
    // URL normalisation drops dot segments, so they cannot name a record.
    let dotted = key.to_ascii_lowercase().replace("%2e", ".");
    if matches!(dotted.as_str(), "" | "." | "..") {
      return Err(Error::InvalidKey(key.to_string()));
    }
    let base = self.url(resource);
    let mut url = Url::parse(&base).map_err(|e| Error::InvalidUrl(format!("{base}: {e}")))?;
    url
      .path_segments_mut()
      .map_err(|()| Error::InvalidUrl(base))?
      .push(key);
    Ok(url)
  }

  /// CRUD and search service for one resource.
  pub fn service<F: Resource>(&self) -> EntityService<F> { EntityService::new(self.clone()) }

  pub fn authorities(&self) -> AuthorityService { AuthorityService::new(self.clone()) }

  pub fn users(&self) -> UserService { UserService::new(self.clone()) }

  // ── Transport ─────────────────────────────────────────────────────────────

  /// Send a request to `/api/<path>` and return the raw response, whatever
  /// its status.
  pub(crate) async fn send(
    &self,
    method: Method,
    path: &str,
    build: impl FnOnce(RequestBuilder) -> RequestBuilder,
  ) -> Result<Response> {
    tracing::debug!(%method, path, "api request");
    let req = self.http.request(method, self.url(path));
    Ok(build(req).send().await?)
  }

  /// Like [`ApiClient::send`], for a URL built by [`ApiClient::item_url`].
  pub(crate) async fn send_to(
    &self,
    method: Method,
    url: Url,
    build: impl FnOnce(RequestBuilder) -> RequestBuilder,
  ) -> Result<Response> {
    tracing::debug!(%method, path = url.path(), "api request");
    let req = self.http.request(method, url);
    Ok(build(req).send().await?)
  }

  /// Like [`ApiClient::send`], but any non-2xx status is an error.
  pub(crate) async fn send_ok(
    &self,
    method: Method,
    path: &str,
    build: impl FnOnce(RequestBuilder) -> RequestBuilder,
  ) -> Result<Response> {
    let resp = self.send(method.clone(), path, build).await?;
    ensure_success(resp, method, path)
  }
}

pub(crate) fn ensure_success(resp: Response, method: Method, path: &str) -> Result<Response> {
  let status = resp.status();
  if status.is_success() {
    Ok(resp)
  } else {
    tracing::debug!(%method, path, %status, "api error status");
    Err(Error::Status {
      method,
      path: path.to_string(),
      status,
    })
  }
}

/// Read a JSON body; an empty body or a literal `null` reads as `None`.
pub(crate) async fn read_json(resp: Response) -> Result<Option<Value>> {
  let bytes = resp.bytes().await?;
  if bytes.iter().all(u8::is_ascii_whitespace) {
    return Ok(None);
  }
  match serde_json::from_slice(&bytes)? {
    Value::Null => Ok(None),
    value => Ok(Some(value)),
  }
}

pub(crate) fn is_not_found(resp: &Response) -> bool { resp.status() == StatusCode::NOT_FOUND }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn url_joins_base_and_path_with_single_slashes() {
    let client = ApiClient::new(ApiConfig {
      base_url: "http://example.test/".into(),
      ..Default::default()
    })
    .unwrap();
    assert_eq!(client.url("rides"), "http://example.test/api/rides");
    assert_eq!(client.url("/rides/4"), "http://example.test/api/rides/4");
  }

  #[test]
  fn item_url_keeps_the_key_in_one_segment() {
    let client = ApiClient::new(ApiConfig {
      base_url: "http://example.test".into(),
      ..Default::default()
    })
    .unwrap();
    let url = client.item_url("authorities", "ROLE_A/../ROLE_B#x?y").unwrap();
    assert_eq!(url.path_segments().unwrap().count(), 3);
    assert!(url.fragment().is_none());
    assert!(url.query().is_none());
    assert_eq!(
      url.as_str(),
      "http://example.test/api/authorities/ROLE_A%2F..%2FROLE_B%23x%3Fy"
    );

    for key in ["", ".", "..", "%2E%2e"] {
      assert!(matches!(client.item_url("authorities", key), Err(Error::InvalidKey(_))));
    }
  }
}

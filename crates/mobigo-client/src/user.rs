//! Read-only access to `/api/users`, the accounts a group member can be
//! linked to.

use mobigo_core::model::{UserRef, group::USER_PATH};
use reqwest::Method;

use crate::{
  client::ApiClient, error::Result, request::RequestOptions, service::decode_many,
};

#[derive(Debug, Clone)]
pub struct UserService {
  client: ApiClient,
}

impl UserService {
  pub fn new(client: ApiClient) -> Self { Self { client } }

  /// `GET /api/users`
  pub async fn query(&self, options: &RequestOptions) -> Result<Vec<UserRef>> {
    let query = options.to_query();
    let resp = self
      .client
      .send_ok(Method::GET, USER_PATH, |req| req.query(&query))
      .await?;
    decode_many(resp).await
  }
}

//! Typed HTTP client for the Mobigo administration API.
//!
//! [`ApiClient`] owns the connection; [`EntityService`] provides CRUD and
//! search for each id-keyed resource, [`AuthorityService`] for authorities.
//! [`resolve`](resolve::resolve), [`Editor`] and the option bundles in
//! [`options`] implement the load → edit → save workflow of an entity page on
//! top of the pure types in [`mobigo_core`].

pub mod authority;
pub mod client;
pub mod editor;
pub mod error;
pub mod options;
pub mod request;
pub mod resolve;
pub mod service;
pub mod user;

pub use authority::AuthorityService;
pub use client::{ApiClient, ApiConfig};
pub use editor::{Editor, load_options, load_options_with};
pub use error::{Error, Result};
pub use request::{Direction, RequestOptions, Search};
pub use resolve::{Resolution, resolve};
pub use service::EntityService;
pub use user::UserService;

#[cfg(test)]
mod tests;

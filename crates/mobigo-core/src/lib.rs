//! Core types and utilities for the Mobigo administration client.
//!
//! This crate is deliberately free of HTTP dependencies. It holds the entity
//! models, the key comparator, the option-collection reconciler, the date
//! transcoder and the edit forms. Everything here is synchronous and pure.

pub mod collection;
pub mod date;
pub mod error;
pub mod form;
pub mod key;
pub mod model;
pub mod record;
pub mod status;

pub use collection::add_to_collection_if_missing;
pub use error::{Error, Result};
pub use key::{Id, Keyed, same_entity};
pub use record::{Draft, New, Patch, Persisted};

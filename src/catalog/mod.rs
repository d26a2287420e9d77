//! Remote show catalog access
//!
//! This module provides the trait for catalog providers that can search for
//! shows and fetch full episode lists, together with the episodate.com
//! implementation used by the application.

mod episodate;
mod episodate_types;

pub use episodate::EpisodateClient;

use crate::show::{ShowRecord, ShowSummary};
use thiserror::Error;

/// Errors that can occur while talking to the remote catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP request failed or the catalog answered with a non-success status
    #[error("Request failed: {0}")]
    Request(String),

    /// The catalog's JSON response could not be decoded
    #[error("Failed to decode catalog response: {0}")]
    Decode(String),
}

/// Trait for catalog providers that can look up show metadata.
///
/// Implementors answer read-only queries against a show database. They never
/// touch the local show library and never retry on their own; failures are
/// reported to the caller as a [`CatalogError`].
pub trait ShowCatalog {
    /// Searches the catalog by show name and returns the first page of
    /// matching show summaries.
    fn search(&self, query: &str) -> Result<Vec<ShowSummary>, CatalogError>;

    /// Fetches the full record of one show, including its episode list.
    ///
    /// The returned record is raw catalog data: the description keeps any
    /// markup the catalog put there, and every episode starts out unseen.
    fn fetch_details(&self, show_id: u64) -> Result<ShowRecord, CatalogError>;
}

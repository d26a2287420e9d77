//! Show onboarding
//!
//! This module turns a catalog show into a durable library record: fetch the
//! full details, clean up the description, reset all watch state, and commit
//! the record to the show library.

use crate::catalog::{CatalogError, ShowCatalog};
use crate::show::ShowRecord;
use crate::store::{ShowStore, StoreError};
use thiserror::Error;

/// Markup tokens the catalog is known to leave in show descriptions.
const MARKUP_TOKENS: [&str; 2] = ["<b>", "</b>"];

/// Errors that can occur while onboarding a show
#[derive(Debug, Error)]
pub enum IngestError {
    /// Error while fetching the show from the catalog
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error while persisting the show record
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Onboards catalog shows into the local show library.
///
/// The ingestor composes a catalog provider and the show store: it fetches a
/// show's full record, sanitizes the description, initializes every episode
/// as unseen, and persists the result. Nothing is committed when any step
/// before the write fails.
pub struct ShowIngestor<'a, C>
where
    C: ShowCatalog,
{
    /// The catalog to fetch show details from
    catalog: &'a C,
    /// The library the onboarded record is committed to
    store: &'a ShowStore,
}

impl<'a, C> ShowIngestor<'a, C>
where
    C: ShowCatalog,
{
    /// Creates a new ingestor over the given catalog and store.
    pub fn new(catalog: &'a C, store: &'a ShowStore) -> Self {
        Self { catalog, store }
    }

    /// Fetches a show by catalog id and commits it to the library.
    ///
    /// Only the known bold markup tokens are stripped, and only from the
    /// description; all other fields are persisted exactly as the catalog
    /// returned them. Every episode starts out unseen, whatever the catalog
    /// payload claimed. Returns the record as persisted.
    pub fn ingest(&self, show_id: u64) -> Result<ShowRecord, IngestError> {
        let mut record = self.catalog.fetch_details(show_id)?;

        record.description = strip_markup(&record.description);

        for episode in &mut record.episodes {
            episode.seen = false;
        }

        self.store.write(&record)?;

        Ok(record)
    }
}

/// Removes the known markup tokens from a description.
fn strip_markup(text: &str) -> String {
    MARKUP_TOKENS
        .iter()
        .fold(text.to_string(), |text, token| text.replace(token, ""))
}

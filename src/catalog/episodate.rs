/// Episodate catalog client implementation.
use super::episodate_types::{DetailsResponse, EpisodeDetails, SearchResponse, ShowDetails};
use super::{CatalogError, ShowCatalog};
use crate::show::{Episode, ShowRecord, ShowSummary};

/// Catalog client for the episodate.com API.
///
/// This client answers show searches via the search endpoint and fetches
/// full episode lists via the show-details endpoint of
/// https://www.episodate.com/api.
pub struct EpisodateClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl EpisodateClient {
    /// Creates a new episodate client instance.
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: "https://www.episodate.com/api".to_string(),
        }
    }

    /// Converts an episodate episode to our local Episode structure.
    ///
    /// The catalog has no watch state, so every converted episode starts
    /// out unseen.
    fn convert_episode(raw: EpisodeDetails) -> Episode {
        Episode {
            season: raw.season,
            episode: raw.episode,
            name: raw.name.unwrap_or_default(),
            air_date: raw.air_date.unwrap_or_default(),
            seen: false,
        }
    }

    /// Converts an episodate show payload to our local ShowRecord structure.
    ///
    /// Episode order is kept exactly as the catalog returned it; later
    /// operations rely on that order to define the "next" episode.
    fn convert_show(raw: ShowDetails) -> ShowRecord {
        ShowRecord {
            id: raw.id,
            name: raw.name,
            description: raw.description.unwrap_or_default(),
            start_date: raw.start_date.unwrap_or_default(),
            end_date: raw.end_date.unwrap_or_default(),
            status: raw.status.unwrap_or_default(),
            episodes: raw.episodes.into_iter().map(Self::convert_episode).collect(),
        }
    }

    /// Issues a GET against `path` and returns the response after checking
    /// for a success status.
    fn get<Q: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<reqwest::blocking::Response, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        // Ensure request was successful
        if !response.status().is_success() {
            return Err(CatalogError::Request(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        Ok(response)
    }
}

impl Default for EpisodateClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowCatalog for EpisodateClient {
    fn search(&self, query: &str) -> Result<Vec<ShowSummary>, CatalogError> {
        let response = self.get("search", &[("q", query), ("page", "1")])?;

        // Parse the JSON response
        let results: SearchResponse = response
            .json()
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(results
            .tv_shows
            .into_iter()
            .map(|show| ShowSummary {
                id: show.id,
                name: show.name,
            })
            .collect())
    }

    fn fetch_details(&self, show_id: u64) -> Result<ShowRecord, CatalogError> {
        let response = self.get("show-details", &[("q", show_id.to_string())])?;

        // Parse the enveloped JSON response
        let details: DetailsResponse = response
            .json()
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(Self::convert_show(details.tv_show))
    }
}

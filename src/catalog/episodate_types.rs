/// Episodate API response types for deserialization.
///
/// These structures mirror the JSON response format of the episodate.com
/// endpoints we consume. Fields the API reports as `null` are modelled as
/// `Option` and defaulted during conversion into the domain types.
use serde::Deserialize;

/// The top-level response of the search endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse {
    /// Matching show stubs on the requested page
    pub tv_shows: Vec<SearchedShow>,
}

/// One show stub in a search response.
#[derive(Debug, Deserialize)]
pub(super) struct SearchedShow {
    /// Catalog-assigned show id
    pub id: u64,
    /// The show title
    pub name: String,
}

/// The envelope around the show-details endpoint's payload.
#[derive(Debug, Deserialize)]
pub(super) struct DetailsResponse {
    /// The actual show payload
    #[serde(rename = "tvShow")]
    pub tv_show: ShowDetails,
}

/// A full show as returned by the show-details endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct ShowDetails {
    /// Catalog-assigned show id
    pub id: u64,
    /// The show title
    pub name: String,
    /// Description, may contain markup and may be null
    #[serde(default)]
    pub description: Option<String>,
    /// First air date (may be null)
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last air date (null while the show is running)
    #[serde(default)]
    pub end_date: Option<String>,
    /// Airing status (may be null)
    #[serde(default)]
    pub status: Option<String>,
    /// All episodes in catalog order
    #[serde(default)]
    pub episodes: Vec<EpisodeDetails>,
}

/// A single episode as returned by the show-details endpoint.
///
/// Note that the catalog schema has no notion of watch state; the `seen`
/// flag only exists on the local record.
#[derive(Debug, Deserialize)]
pub(super) struct EpisodeDetails {
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub episode: u32,
    /// Episode title (may be null)
    #[serde(default)]
    pub name: Option<String>,
    /// Air date (may be null)
    #[serde(default)]
    pub air_date: Option<String>,
}

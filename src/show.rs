//! Core data model for tracked shows
//!
//! These structures are the durable representation of one tracked show,
//! including the per-episode watch state that only exists locally.

use serde::{Deserialize, Serialize};

/// A single episode of a tracked show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// The season number this episode belongs to
    pub season: u32,
    /// The episode number within the season
    pub episode: u32,
    /// The episode title
    pub name: String,
    /// Air date as reported by the catalog, kept as an opaque string
    pub air_date: String,
    /// Whether the user has watched this episode. Catalog payloads do not
    /// carry this field, so it defaults to unseen when absent.
    #[serde(default)]
    pub seen: bool,
}

/// The full local record of one tracked show.
///
/// The catalog id doubles as the filename key in the show library. Episodes
/// are kept in the order the catalog returned them; that order defines what
/// "next" means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowRecord {
    /// Catalog-assigned show id
    pub id: u64,
    /// The show title
    pub name: String,
    /// Show description, bold markup stripped at ingestion time
    pub description: String,
    /// First air date, opaque string
    pub start_date: String,
    /// Last air date, opaque string (empty while the show is running)
    pub end_date: String,
    /// Airing status as reported by the catalog, e.g. "Running" or "Ended"
    pub status: String,
    /// All episodes in catalog order
    pub episodes: Vec<Episode>,
}

/// A lightweight `{id, name}` projection of a show, used for listings and
/// search results without materializing episode data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSummary {
    /// Catalog-assigned show id
    pub id: u64,
    /// The show title
    pub name: String,
}

impl ShowRecord {
    /// Flips the seen flag of the episode matching `(season, episode)`.
    ///
    /// Episodes are located by linear scan over the stored order. Returns
    /// `true` if a matching episode was found and toggled, `false` if no
    /// such episode exists (the record is left untouched). Persisting the
    /// mutation is the caller's responsibility.
    pub fn toggle_seen(&mut self, season: u32, episode: u32) -> bool {
        match self
            .episodes
            .iter_mut()
            .find(|e| e.season == season && e.episode == episode)
        {
            Some(ep) => {
                ep.seen = !ep.seen;
                true
            }
            None => false,
        }
    }

    /// Returns the first episode in stored order that has not been seen yet.
    ///
    /// "Next" is defined purely by list position; air dates are never parsed
    /// or compared. Returns `None` when every episode is seen or the show has
    /// no episodes.
    pub fn next_unwatched(&self) -> Option<&Episode> {
        self.episodes.iter().find(|e| !e.seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(season: u32, number: u32, name: &str, seen: bool) -> Episode {
        Episode {
            season,
            episode: number,
            name: name.to_string(),
            air_date: String::new(),
            seen,
        }
    }

    fn record_with(episodes: Vec<Episode>) -> ShowRecord {
        ShowRecord {
            id: 42,
            name: "Test Show".to_string(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            status: "Running".to_string(),
            episodes,
        }
    }

    #[test]
    fn test_toggle_seen_twice_restores_original() {
        let mut record = record_with(vec![
            episode(1, 1, "Pilot", false),
            episode(1, 2, "Second", true),
        ]);

        assert!(record.toggle_seen(1, 1));
        assert!(record.episodes[0].seen);
        assert!(record.toggle_seen(1, 1));
        assert!(!record.episodes[0].seen);

        assert!(record.toggle_seen(1, 2));
        assert!(!record.episodes[1].seen);
        assert!(record.toggle_seen(1, 2));
        assert!(record.episodes[1].seen);
    }

    #[test]
    fn test_toggle_seen_unknown_episode_is_noop() {
        let mut record = record_with(vec![episode(1, 1, "Pilot", false)]);
        let before = record.clone();

        assert!(!record.toggle_seen(2, 1));
        assert!(!record.toggle_seen(1, 9));
        assert_eq!(record, before);
    }

    #[test]
    fn test_next_unwatched_returns_first_unseen_in_order() {
        let record = record_with(vec![
            episode(1, 1, "Pilot", true),
            episode(1, 2, "Second", false),
            episode(1, 3, "Third", false),
        ]);

        let next = record.next_unwatched().unwrap();
        assert_eq!(next.season, 1);
        assert_eq!(next.episode, 2);
        assert_eq!(next.name, "Second");
    }

    #[test]
    fn test_next_unwatched_none_when_all_seen() {
        let record = record_with(vec![
            episode(1, 1, "Pilot", true),
            episode(1, 2, "Second", true),
        ]);

        assert!(record.next_unwatched().is_none());
    }

    #[test]
    fn test_next_unwatched_none_without_episodes() {
        let record = record_with(Vec::new());
        assert!(record.next_unwatched().is_none());
    }

    #[test]
    fn test_episode_seen_defaults_to_false_when_absent() {
        let json = r#"{"season": 1, "episode": 3, "name": "Third", "air_date": "2020-01-01"}"#;
        let episode: Episode = serde_json::from_str(json).unwrap();
        assert!(!episode.seen);
    }
}

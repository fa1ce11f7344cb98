//! Genre and episode structure.

use crate::ordered;
use serde::{Deserialize, Serialize};

/// An episode block definition as it appears in the structure document.
///
/// Older datasets use a bare string holding only the description; newer ones
/// use an object with an optional trope list.
///
/// # Examples
///
/// ```
/// use seoulscript_core::EpisodeEntry;
///
/// let legacy: EpisodeEntry = serde_json::from_str(r#""Meet-cute at the airport""#).unwrap();
/// assert_eq!(legacy.description(), "Meet-cute at the airport");
///
/// let full: EpisodeEntry =
///     serde_json::from_str(r#"{"description": "First date", "tropes": ["fake dating"]}"#).unwrap();
/// assert_eq!(full.description(), "First date");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EpisodeEntry {
    /// Description-only shorthand
    Description(String),
    /// Description with block-specific tropes
    Full {
        /// Episode brief
        #[serde(default)]
        description: Option<String>,
        /// Tropes for this block; the genre defaults apply when absent or empty
        #[serde(default)]
        tropes: Option<Vec<String>>,
    },
}

impl EpisodeEntry {
    /// The block's description, empty when the entry defines none.
    pub fn description(&self) -> &str {
        match self {
            EpisodeEntry::Description(description) => description,
            EpisodeEntry::Full { description, .. } => description.as_deref().unwrap_or(""),
        }
    }

    /// Normalize this entry, falling back to `genre_tropes` when it defines no tropes.
    pub fn resolve(&self, key: &str, genre_tropes: &[String]) -> ResolvedEpisode {
        let tropes = match self {
            EpisodeEntry::Full {
                tropes: Some(tropes),
                ..
            } if !tropes.is_empty() => tropes.clone(),
            _ => genre_tropes.to_vec(),
        };

        ResolvedEpisode {
            key: key.to_string(),
            description: self.description().to_string(),
            tropes,
        }
    }
}

/// A normalized episode block, ready for prompt construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedEpisode {
    /// Episode-range key (e.g. "1-2")
    pub key: String,
    /// Episode brief
    pub description: String,
    /// Tropes to weave in
    pub tropes: Vec<String>,
}

/// A named episode block of a genre.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct EpisodeBlock {
    /// Episode-range key (e.g. "1-2")
    key: String,
    /// Block definition
    entry: EpisodeEntry,
}

/// A genre with its episode blocks and default tropes.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Genre {
    /// Genre name as it appears in the dataset
    name: String,
    /// Episode blocks in document order
    episodes: Vec<EpisodeBlock>,
    /// Tropes used by blocks that define none
    optional_tropes: Vec<String>,
}

impl Genre {
    /// Look up an episode block by key.
    pub fn episode(&self, key: &str) -> Option<&EpisodeBlock> {
        self.episodes.iter().find(|block| block.key == key)
    }

    /// Resolve an episode block by key into its normalized form.
    pub fn resolve(&self, key: &str) -> Option<ResolvedEpisode> {
        self.episode(key)
            .map(|block| block.entry.resolve(&block.key, &self.optional_tropes))
    }

    /// Episode keys ordered by their leading integer.
    ///
    /// Keys without a parseable leading integer come last, in document order.
    ///
    /// # Examples
    ///
    /// ```
    /// use seoulscript_core::Structure;
    ///
    /// let structure: Structure = serde_json::from_str(
    ///     r#"{"genres": {"romance": {"episodes": {"x-y": "?", "10-12": "c", "1-2": "a", "3-4": "b"}}}}"#,
    /// ).unwrap();
    /// let genre = structure.genre("romance").unwrap();
    /// assert_eq!(genre.ordered_keys(), vec!["1-2", "3-4", "10-12", "x-y"]);
    /// ```
    pub fn ordered_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .episodes
            .iter()
            .map(|block| block.key.as_str())
            .collect();
        keys.sort_by_key(|&key| match episode_start(key) {
            Some(start) => (0, start.len(), start),
            None => (1, 0, ""),
        });
        keys
    }
}

/// Leading integer of an episode-range key ("10-12" → "10").
///
/// Returned as its significant digits, so comparing `(len, digits)` orders
/// starts numerically whatever their size.
pub fn episode_start(key: &str) -> Option<&str> {
    let head = key.split('-').next()?.trim();
    let digits = head.strip_prefix('+').unwrap_or(head);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match digits.trim_start_matches('0') {
        "" => Some("0"),
        significant => Some(significant),
    }
}

/// All genres of the structure dataset, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, derive_getters::Getters)]
#[serde(from = "RawStructure")]
pub struct Structure {
    /// Genres in document order
    genres: Vec<Genre>,
}

impl Structure {
    /// Build a structure from already-constructed genres.
    pub fn new(genres: Vec<Genre>) -> Self {
        Self { genres }
    }

    /// Look up a genre by name.
    pub fn genre(&self, name: &str) -> Option<&Genre> {
        self.genres.iter().find(|genre| genre.name == name)
    }

    /// Genre names in document order.
    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|genre| genre.name.as_str()).collect()
    }
}

impl Genre {
    /// Build a genre from `(key, entry)` pairs.
    pub fn new(
        name: impl Into<String>,
        episodes: Vec<(String, EpisodeEntry)>,
        optional_tropes: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            episodes: episodes
                .into_iter()
                .map(|(key, entry)| EpisodeBlock { key, entry })
                .collect(),
            optional_tropes,
        }
    }
}

#[derive(Deserialize)]
struct RawStructure {
    #[serde(deserialize_with = "ordered::entries")]
    genres: Vec<(String, RawGenre)>,
}

#[derive(Deserialize)]
struct RawGenre {
    #[serde(default, deserialize_with = "ordered::entries")]
    episodes: Vec<(String, EpisodeEntry)>,
    #[serde(default)]
    optional_tropes: Option<Vec<String>>,
}

impl From<RawStructure> for Structure {
    fn from(raw: RawStructure) -> Self {
        let genres = raw
            .genres
            .into_iter()
            .map(|(name, genre)| {
                let optional_tropes = genre.optional_tropes.unwrap_or_default();
                Genre::new(name, genre.episodes, optional_tropes)
            })
            .collect();
        Self { genres }
    }
}

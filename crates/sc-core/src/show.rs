use std::fmt;

use serde::{Deserialize, Serialize};

use crate::asset::AssetRef;
use crate::quiz::QuizItem;
use crate::relationship::Relationship;

/// A named score from one rating site. The score is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Name of the rating site, e.g. "IMDb".
    pub source: String,
    /// The score as displayed, e.g. "9.5".
    pub score: String,
}

impl Rating {
    /// Creates a rating.
    pub fn new(source: impl Into<String>, score: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            score: score.into(),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.score)
    }
}

/// Per-show colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Accent colour as `#rrggbb`, used for headings and highlights.
    pub accent: String,
    /// Dark background colour as `#rrggbb`, used behind the graph.
    pub backdrop: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: "#3498DB".to_string(),
            backdrop: "#1a1a2e".to_string(),
        }
    }
}

/// A character node in a show's relationship graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name; also the node identifier used by relationships.
    pub name: String,
    /// Avatar image reference.
    #[serde(default)]
    pub avatar: AssetRef,
}

impl Character {
    /// Creates a character with the conventional avatar path.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let avatar = AssetRef::avatar(&slug(&name));
        Self { name, avatar }
    }
}

/// One season and its episode summaries, in airing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// Season label, e.g. "Season 1".
    pub label: String,
    /// One summary line per episode.
    pub episodes: Vec<String>,
}

/// One television series and everything shown about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Unique title; the show's identifier.
    pub title: String,
    /// Title in the original catalog language, if different.
    #[serde(default)]
    pub native_title: Option<String>,
    /// Genre tag, e.g. "Crime / Drama".
    pub genre: String,
    /// Exactly two named ratings.
    pub ratings: [Rating; 2],
    /// Short synopsis.
    pub summary: String,
    /// Colours used when presenting this show.
    #[serde(default)]
    pub theme: Theme,
    /// Poster image reference.
    #[serde(default)]
    pub poster: AssetRef,
    /// Graph nodes in display order.
    #[serde(default)]
    pub characters: Vec<Character>,
    /// Graph edges in display order.
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    /// Episode recaps grouped by season.
    #[serde(default)]
    pub seasons: Vec<Season>,
    /// Trivia questions in play order.
    #[serde(default)]
    pub quiz: Vec<QuizItem>,
}

impl Show {
    /// Filesystem-friendly identifier derived from the title.
    pub fn slug(&self) -> String {
        slug(&self.title)
    }

    /// Find a character by name (case-insensitive).
    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// All relationships touching the named character.
    pub fn relationships_of(&self, name: &str) -> Vec<&Relationship> {
        self.relationships
            .iter()
            .filter(|r| r.involves(name))
            .collect()
    }

    /// Find a season by label (case-insensitive). A bare number also
    /// matches, so `"2"` finds `"Season 2"`.
    pub fn season(&self, label: &str) -> Option<&Season> {
        let wanted = label.trim();
        self.seasons.iter().find(|s| {
            s.label.eq_ignore_ascii_case(wanted)
                || s.label
                    .rsplit(' ')
                    .next()
                    .is_some_and(|n| n.eq_ignore_ascii_case(wanted))
        })
    }

    /// Total number of episodes across all seasons.
    pub fn episode_count(&self) -> usize {
        self.seasons.iter().map(|s| s.episodes.len()).sum()
    }
}

/// Lowercase the input and collapse every run of non-alphanumeric
/// characters into a single `_`.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_sep = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::show::Show;

/// The dataset compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// On-disk shape of a catalog file.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    shows: Vec<Show>,
}

/// The read-only collection of all shows. Iteration order is insertion
/// order, and the first show is the default selection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    shows: Vec<Show>,

    // Index
    by_title_lower: HashMap<String, usize>,
}

impl Catalog {
    /// An empty catalog, for building one programmatically.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the dataset shipped with the crate.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from JSON text.
    ///
    /// Data issues found by [`Catalog::audit`] are logged but do not fail
    /// the load.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for show in file.shows {
            catalog.insert(show)?;
        }
        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }

        for issue in catalog.audit() {
            tracing::warn!(%issue, "catalog data issue");
        }
        tracing::debug!(shows = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Read and parse a catalog JSON file.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize the catalog back into its JSON file format.
    pub fn to_json(&self) -> CatalogResult<String> {
        let file = CatalogFile {
            shows: self.shows.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Append a show. Titles must be unique (case-insensitive).
    pub fn insert(&mut self, show: Show) -> CatalogResult<()> {
        let key = show.title.trim().to_lowercase();
        if self.by_title_lower.contains_key(&key) {
            return Err(CatalogError::DuplicateShow(show.title));
        }
        self.by_title_lower.insert(key, self.shows.len());
        self.shows.push(show);
        Ok(())
    }

    /// Find a show by title (case-insensitive).
    pub fn get(&self, title: &str) -> Option<&Show> {
        self.by_title_lower
            .get(&title.trim().to_lowercase())
            .and_then(|idx| self.shows.get(*idx))
    }

    /// Like [`Catalog::get`], but an unknown title is an error.
    pub fn require(&self, title: &str) -> CatalogResult<&Show> {
        self.get(title)
            .ok_or_else(|| CatalogError::UnknownShow(title.to_string()))
    }

    /// The first show in insertion order.
    pub fn first(&self) -> Option<&Show> {
        self.shows.first()
    }

    /// All shows in insertion order.
    pub fn shows(&self) -> impl Iterator<Item = &Show> {
        self.shows.iter()
    }

    /// All titles in insertion order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.shows.iter().map(|s| s.title.as_str())
    }

    /// Position of a show in insertion order.
    pub fn position(&self, title: &str) -> Option<usize> {
        self.by_title_lower.get(&title.trim().to_lowercase()).copied()
    }

    /// Show at a given position.
    pub fn at(&self, index: usize) -> Option<&Show> {
        self.shows.get(index)
    }

    /// Number of shows.
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Returns true if the catalog has no shows.
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    // -----------------------------------------------------------------------
    // Audit
    // -----------------------------------------------------------------------

    /// Report data that a stricter model would reject. Nothing is changed.
    pub fn audit(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        for show in &self.shows {
            let mut seen: Vec<&str> = Vec::new();
            for c in &show.characters {
                if seen.iter().any(|s| s.eq_ignore_ascii_case(&c.name)) {
                    issues.push(CatalogIssue::DuplicateCharacter {
                        show: show.title.clone(),
                        name: c.name.clone(),
                    });
                }
                seen.push(&c.name);
            }

            for rel in &show.relationships {
                for endpoint in [&rel.source, &rel.target] {
                    if show.character(endpoint).is_none() {
                        issues.push(CatalogIssue::UndeclaredCharacter {
                            show: show.title.clone(),
                            name: endpoint.clone(),
                            label: rel.label.clone(),
                        });
                    }
                }
            }

            if show.quiz.is_empty() {
                issues.push(CatalogIssue::EmptyQuiz {
                    show: show.title.clone(),
                });
            }

            for (i, item) in show.quiz.iter().enumerate() {
                if !item.has_option(&item.answer) {
                    issues.push(CatalogIssue::AnswerNotAnOption {
                        show: show.title.clone(),
                        question: i + 1,
                        answer: item.answer.clone(),
                    });
                }
                for dup in item.duplicate_options() {
                    issues.push(CatalogIssue::DuplicateOption {
                        show: show.title.clone(),
                        question: i + 1,
                        option: dup.to_string(),
                    });
                }
            }
        }
        issues
    }
}

/// A data problem reported by [`Catalog::audit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// A relationship endpoint is not in the show's character list.
    UndeclaredCharacter {
        /// Show title.
        show: String,
        /// The unknown character name.
        name: String,
        /// Label of the offending relationship.
        label: String,
    },
    /// The same character name appears twice.
    DuplicateCharacter {
        /// Show title.
        show: String,
        /// The repeated name.
        name: String,
    },
    /// The show has no quiz questions.
    EmptyQuiz {
        /// Show title.
        show: String,
    },
    /// The designated answer is not one of the options.
    AnswerNotAnOption {
        /// Show title.
        show: String,
        /// One-based question number.
        question: usize,
        /// The designated answer.
        answer: String,
    },
    /// An option is listed more than once.
    DuplicateOption {
        /// Show title.
        show: String,
        /// One-based question number.
        question: usize,
        /// The repeated option.
        option: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndeclaredCharacter { show, name, label } => write!(
                f,
                "{show}: relationship \"{label}\" refers to undeclared character \"{name}\""
            ),
            Self::DuplicateCharacter { show, name } => {
                write!(f, "{show}: character \"{name}\" is declared twice")
            }
            Self::EmptyQuiz { show } => write!(f, "{show}: quiz has no questions"),
            Self::AnswerNotAnOption {
                show,
                question,
                answer,
            } => write!(
                f,
                "{show}: question {question} answer \"{answer}\" is not among its options"
            ),
            Self::DuplicateOption {
                show,
                question,
                option,
            } => write!(
                f,
                "{show}: question {question} lists option \"{option}\" more than once"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetRef;
    use crate::quiz::QuizItem;
    use crate::relationship::Relationship;
    use crate::show::{Character, Rating, Theme};

    fn show(title: &str) -> Show {
        Show {
            title: title.to_string(),
            native_title: None,
            genre: "Drama".into(),
            ratings: [Rating::new("Douban", "9.0"), Rating::new("IMDb", "8.0")],
            summary: "A show.".into(),
            theme: Theme::default(),
            poster: AssetRef::Absent,
            characters: vec![Character::new("Alice"), Character::new("Bob")],
            relationships: vec![Relationship::new("Alice", "Bob", "friends")],
            seasons: vec![],
            quiz: vec![QuizItem::new("Who?", ["Alice", "Bob"], "Alice")],
        }
    }

    #[test]
    fn builtin_catalog_has_three_shows_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let titles: Vec<&str> = catalog.titles().collect();
        assert_eq!(
            titles,
            vec!["Stranger Things", "Game of Thrones", "Breaking Bad"]
        );
        assert_eq!(catalog.first().unwrap().title, "Stranger Things");
    }

    #[test]
    fn builtin_quizzes_are_well_formed() {
        let catalog = Catalog::builtin().unwrap();
        for show in catalog.shows() {
            assert!(!show.quiz.is_empty(), "{} has no quiz", show.title);
            for item in &show.quiz {
                assert!(
                    item.has_option(&item.answer),
                    "{}: {}",
                    show.title,
                    item.prompt
                );
            }
        }
    }

    #[test]
    fn builtin_catalog_audit_is_clean() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.audit(), Vec::new());
    }

    #[test]
    fn builtin_breaking_bad_matches_dataset() {
        let catalog = Catalog::builtin().unwrap();
        let bb = catalog.get("breaking bad").unwrap();
        assert_eq!(bb.quiz.len(), 4);
        assert_eq!(bb.characters.len(), 7);
        assert_eq!(bb.seasons.len(), 5);
        assert_eq!(bb.episode_count(), 62);
        assert_eq!(bb.poster, AssetRef::poster("breaking_bad"));
    }

    #[test]
    fn duplicate_title_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert(show("Dark")).unwrap();
        let err = catalog.insert(show("DARK")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateShow(_)));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog.insert(show("Dark")).unwrap();
        assert!(catalog.get("dark").is_some());
        assert!(catalog.get(" Dark ").is_some());
        assert!(matches!(
            catalog.insert(show("DARK ")),
            Err(CatalogError::DuplicateShow(_))
        ));
        assert!(matches!(
            catalog.require("Lost"),
            Err(CatalogError::UnknownShow(_))
        ));
    }

    #[test]
    fn padded_title_is_found() {
        let mut catalog = Catalog::new();
        catalog.insert(show("  Twin Peaks ")).unwrap();
        assert!(catalog.get("twin peaks").is_some());
        assert_eq!(catalog.position("Twin Peaks"), Some(0));
    }

    #[test]
    fn audit_reports_without_fixing() {
        let mut s = show("Dark");
        s.relationships.push(Relationship::new("Alice", "Carol", "rivals"));
        s.quiz.push(QuizItem::new("Dup?", ["x", "x"], "y"));
        let mut catalog = Catalog::new();
        catalog.insert(s).unwrap();

        let issues = catalog.audit();
        assert_eq!(issues.len(), 3);
        assert!(issues.contains(&CatalogIssue::UndeclaredCharacter {
            show: "Dark".into(),
            name: "Carol".into(),
            label: "rivals".into(),
        }));
        assert!(issues.iter().any(|i| matches!(
            i,
            CatalogIssue::AnswerNotAnOption { question: 2, .. }
        )));
        // Data is untouched.
        assert_eq!(catalog.get("Dark").unwrap().relationships.len(), 2);
    }

    #[test]
    fn empty_catalog_file_rejected() {
        let err = Catalog::from_json(r#"{"shows": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn json_round_trip_preserves_order() {
        let catalog = Catalog::builtin().unwrap();
        let json = catalog.to_json().unwrap();
        let again = Catalog::from_json(&json).unwrap();
        assert_eq!(
            catalog.titles().collect::<Vec<_>>(),
            again.titles().collect::<Vec<_>>()
        );
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Catalog::from_path(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}

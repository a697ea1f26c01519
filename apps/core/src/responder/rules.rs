//! Ordered keyword rules and the response sets they route to.
//!
//! The rule list is evaluated top to bottom and the first rule with a
//! matching keyword wins. Order is data, not control flow: callers can
//! inspect it with [`ResponseTable::priority_order`].

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use super::category::Category;

/// Errors raised while building or loading a response table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("rule for {0} has no keywords")]
    EmptyKeywords(Category),

    #[error("rule for {0} has a blank keyword")]
    BlankKeyword(Category),

    #[error("response set for {0} is empty")]
    EmptyResponses(Category),

    #[error("no response set for {0}")]
    MissingResponses(Category),

    #[error("category {0} appears in more than one rule")]
    DuplicateRule(Category),

    #[error("fallback cannot have keyword rules")]
    FallbackRule,

    #[error("response set for {0} is unreachable: no rule routes to it")]
    UnreachableResponses(Category),

    #[error("invalid response table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read response table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Case-insensitive substring rule for one category
#[derive(Debug, Clone)]
pub struct KeywordRule {
    category: Category,
    keywords: Vec<String>,
}

impl KeywordRule {
    /// Builds a rule; keywords are lower-cased here so matching never has to.
    pub fn new<I, S>(category: Category, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            category,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Immutable routing table: ordered rules plus a reply list per category
#[derive(Debug, Clone)]
pub struct ResponseTable {
    rules: Vec<KeywordRule>,
    responses: HashMap<Category, Vec<String>>,
}

#[derive(Deserialize)]
struct TableFile {
    rules: Vec<RuleEntry>,
    fallback: Vec<String>,
}

#[derive(Deserialize)]
struct RuleEntry {
    category: Category,
    keywords: Vec<String>,
    responses: Vec<String>,
}

impl ResponseTable {
    /// Validates and builds a table.
    ///
    /// `responses` must contain a non-empty set for every rule's category and
    /// for [`Category::Fallback`], and nothing else.
    pub fn new(
        rules: Vec<KeywordRule>,
        responses: HashMap<Category, Vec<String>>,
    ) -> Result<Self, TableError> {
        let mut seen = HashSet::new();

        for rule in &rules {
            let category = rule.category();
            if category == Category::Fallback {
                return Err(TableError::FallbackRule);
            }
            if !seen.insert(category) {
                return Err(TableError::DuplicateRule(category));
            }
            if rule.keywords().is_empty() {
                return Err(TableError::EmptyKeywords(category));
            }
            if rule.keywords().iter().any(|k| k.trim().is_empty()) {
                return Err(TableError::BlankKeyword(category));
            }
            if !responses.contains_key(&category) {
                return Err(TableError::MissingResponses(category));
            }
        }

        if !responses.contains_key(&Category::Fallback) {
            return Err(TableError::MissingResponses(Category::Fallback));
        }

        for (category, replies) in &responses {
            if replies.is_empty() {
                return Err(TableError::EmptyResponses(*category));
            }
            if *category != Category::Fallback && !seen.contains(category) {
                return Err(TableError::UnreachableResponses(*category));
            }
        }

        Ok(Self { rules, responses })
    }

    /// Parses a table from JSON. Rule order in the array is the priority order.
    pub fn from_json(raw: &str) -> Result<Self, TableError> {
        let file: TableFile = serde_json::from_str(raw)?;

        let mut rules = Vec::with_capacity(file.rules.len());
        let mut responses = HashMap::with_capacity(file.rules.len() + 1);
        for entry in file.rules {
            if responses.contains_key(&entry.category) {
                return Err(TableError::DuplicateRule(entry.category));
            }
            rules.push(KeywordRule::new(entry.category, entry.keywords));
            responses.insert(entry.category, entry.responses);
        }
        if responses.contains_key(&Category::Fallback) {
            return Err(TableError::FallbackRule);
        }
        responses.insert(Category::Fallback, file.fallback);

        Self::new(rules, responses)
    }

    /// Reads a JSON table from disk.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let raw = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&raw)?;
        info!(
            "Loaded response table from {:?} ({} rules)",
            path,
            table.rules.len()
        );
        Ok(table)
    }

    /// First category whose rule matches, or [`Category::Fallback`].
    pub fn resolve(&self, lowered: &str) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.matches(lowered))
            .map(KeywordRule::category)
            .unwrap_or(Category::Fallback)
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Categories in evaluation order, without the fallback.
    pub fn priority_order(&self) -> Vec<Category> {
        self.rules.iter().map(KeywordRule::category).collect()
    }

    /// Reply candidates for a category. Empty only for categories the table
    /// does not know.
    pub fn responses(&self, category: Category) -> &[String] {
        self.responses
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

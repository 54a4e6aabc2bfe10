//! Tool category - a keyword-defined grouping of tools.
//!
//! Categories drive the stage-2 filter: a question matching any of a
//! category's keyword phrases pulls that category's tools into the
//! candidate set for the orchestration loop.

use serde::{Deserialize, Serialize};

/// A named group of tools selected by keyword phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    name: String,
    keywords: Vec<String>,
    tools: Vec<String>,
}

impl Category {
    /// Creates a new category.
    pub fn new(
        name: impl Into<String>,
        keywords: &[&str],
        tools: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            tools: tools.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Returns the category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the keyword phrases.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns the names of tools in this category.
    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    /// Whether any keyword phrase appears in the (already folded) question.
    pub fn matches(&self, question: &str) -> bool {
        self.keywords.iter().any(|kw| question.contains(kw.as_str()))
    }
}

//! Keyword-based tool filtering for the multi-tool path.
//!
//! Before the orchestration loop runs, a cheap keyword scan narrows the
//! catalog to the categories the question plausibly touches. The selection
//! is never empty: when nothing matches, the loop gets the full catalog.

use std::collections::BTreeSet;

use crate::domain::tools::ToolCatalog;

/// Result of the keyword scan: matched categories plus the tool names
/// offered to the orchestration loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSelection {
    /// Names of the categories whose keywords matched, in catalog order.
    pub categories: Vec<String>,
    /// Union of the selected categories' tools, or every tool when no
    /// category matched.
    pub tools: BTreeSet<String>,
}

impl ToolSelection {
    /// Whether the scan actually narrowed the catalog.
    pub fn is_filtered(&self) -> bool {
        !self.categories.is_empty()
    }
}

/// Scans the question against every category's keyword phrases.
///
/// With `fold` set, matching is done on the lowercased question; folding
/// is a no-op for Indic scripts, so it only affects Latin-script keywords.
pub fn select_tools(catalog: &ToolCatalog, question: &str, fold: bool) -> ToolSelection {
    let haystack = if fold {
        question.to_lowercase()
    } else {
        question.to_string()
    };

    let mut categories = Vec::new();
    let mut tools = BTreeSet::new();

    for category in catalog.categories() {
        if category.matches(&haystack) {
            categories.push(category.name().to_string());
            tools.extend(category.tools().iter().cloned());
        }
    }

    if categories.is_empty() {
        tools = catalog.all_tool_names();
    }

    ToolSelection { categories, tools }
}

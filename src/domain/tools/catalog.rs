//! Tool catalog - the static registry of every operation the gateway exposes.
//!
//! The catalog is built once at startup and passed explicitly to the router,
//! filter, and orchestration loop; nothing looks tools up through globals.
//! Construction validates the closed world: every tool name referenced by a
//! category must exist, and every tool must declare the parameters its
//! upstream operation requires.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use super::category::Category;
use super::definition::{Endpoint, ToolDefinition};

/// Errors detected while building a catalog. These surface at startup,
/// never per-request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate tool name: {0}")]
    DuplicateTool(String),

    #[error("category '{category}' references unknown tool '{tool}'")]
    UnknownToolInCategory { category: String, tool: String },

    #[error("tool '{0}' declares no parameters but its operation requires arguments")]
    MissingParameters(String),
}

/// Immutable registry of tools and their keyword categories.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    /// Tools in registration order (stage-1 listing preserves this order)
    tools: Vec<ToolDefinition>,
    /// Name -> position in `tools`
    index: HashMap<String, usize>,
    /// Keyword categories for the stage-2 filter
    categories: Vec<Category>,
}

impl ToolCatalog {
    /// Builds a catalog from explicit tool and category tables.
    ///
    /// Rejects duplicate tool names, categories referencing unknown tools,
    /// and tools with an empty parameter list.
    pub fn build(
        tools: Vec<ToolDefinition>,
        categories: Vec<Category>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(tools.len());
        for (pos, tool) in tools.iter().enumerate() {
            if index.insert(tool.name().to_string(), pos).is_some() {
                return Err(CatalogError::DuplicateTool(tool.name().to_string()));
            }
            if tool.parameters().is_empty() || !tool.takes_arguments() {
                return Err(CatalogError::MissingParameters(tool.name().to_string()));
            }
        }

        for category in &categories {
            for name in category.tools() {
                if !index.contains_key(name) {
                    return Err(CatalogError::UnknownToolInCategory {
                        category: category.name().to_string(),
                        tool: name.clone(),
                    });
                }
            }
        }

        Ok(Self {
            tools,
            index,
            categories,
        })
    }

    /// Gets a tool definition by name.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.index.get(name).map(|&pos| &self.tools[pos])
    }

    /// Checks if a tool is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns all tools in registration order.
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Returns the keyword categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Returns all registered tool names.
    pub fn all_tool_names(&self) -> BTreeSet<String> {
        self.index.keys().cloned().collect()
    }

    /// One line per tool, for the stage-1 routing prompt.
    pub fn compact_listing(&self) -> String {
        self.tools
            .iter()
            .map(ToolDefinition::compact_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Exports the named tools in OpenAI function-calling format.
    ///
    /// Unknown names are silently skipped; callers obtain names from this
    /// catalog so a miss indicates a stale selection, not a user error.
    pub fn to_openai_tools<'a>(
        &self,
        names: impl IntoIterator<Item = &'a String>,
    ) -> Vec<serde_json::Value> {
        names
            .into_iter()
            .filter_map(|name| self.get(name))
            .map(ToolDefinition::to_openai_format)
            .collect()
    }

    /// Builds the full catalog of word-processing tools.
    ///
    /// Tool names, descriptions, and keyword lists mirror the upstream
    /// word-analysis API surface: five text tools, six character tools,
    /// thirteen analysis tools, six comparison tools, five validation
    /// tools, and one utility tool.
    pub fn builtin() -> Result<Self, CatalogError> {
        // Single-word tools: one required word plus the language hint.
        let word_tool = |name: &str, desc: &str, category: &str, action: &str| {
            ToolDefinition::new(name, desc, Endpoint::new(category, action))
                .with_parameter("word", "string", "The word or text to operate on", true, "string")
                .with_parameter(
                    "language",
                    "string",
                    "Language of the text (english, telugu, hindi, etc.)",
                    false,
                    "language",
                )
        };

        // Two-word tools: word1/word2 pairs.
        let pair_tool = |name: &str, desc: &str, category: &str, action: &str| {
            ToolDefinition::new(name, desc, Endpoint::new(category, action))
                .with_parameter("word1", "string", "The first word", true, "string")
                .with_parameter("word2", "string", "The second word", true, "input2")
                .with_parameter("language", "string", "Language of the text", false, "language")
        };

        // Word + extra string argument tools.
        let arg_tool = |name: &str,
                        desc: &str,
                        category: &str,
                        action: &str,
                        arg: &str,
                        arg_desc: &str| {
            ToolDefinition::new(name, desc, Endpoint::new(category, action))
                .with_parameter("word", "string", "The word or text to operate on", true, "string")
                .with_parameter(arg, "string", arg_desc, true, "input2")
                .with_parameter("language", "string", "Language of the text", false, "language")
        };

        let tools = vec![
            // ── text ────────────────────────────────────────────────────
            word_tool(
                "reverse_text",
                "Reverse a word or string character-by-character.",
                "text",
                "reverse",
            ),
            word_tool(
                "get_text_length",
                "Get the length (number of characters) of a word or string.",
                "text",
                "length",
            ),
            word_tool(
                "randomize_text",
                "Randomly shuffle the characters of a word or string.",
                "text",
                "randomize",
            ),
            ToolDefinition::new(
                "split_text",
                "Split a word or string by a delimiter.",
                Endpoint::new("text", "split"),
            )
            .with_parameter("word", "string", "The word or text to split", true, "string")
            .with_parameter("delimiter", "string", "The character to split on", false, "input2")
            .with_parameter("language", "string", "Language of the text", false, "language"),
            ToolDefinition::new(
                "replace_in_text",
                "Find and replace a substring within a word or string.",
                Endpoint::new("text", "replace"),
            )
            .with_parameter("word", "string", "The original word or text", true, "string")
            .with_parameter("search", "string", "The substring to find", true, "input2")
            .with_parameter("replace_with", "string", "The replacement substring", true, "input3")
            .with_parameter("language", "string", "Language of the text", false, "language"),
            // ── characters ──────────────────────────────────────────────
            word_tool(
                "get_logical_characters",
                "Parse a word into its logical characters (grapheme clusters).",
                "characters",
                "logical",
            ),
            word_tool(
                "get_base_characters",
                "Get the base characters of a word (stripping modifiers in Indic scripts).",
                "characters",
                "base",
            ),
            word_tool(
                "get_code_points",
                "Get the Unicode code points of each character in the word.",
                "characters",
                "codepoints",
            ),
            ToolDefinition::new(
                "get_character_at_position",
                "Get the logical character at a specific position in the word.",
                Endpoint::new("characters", "logical-at"),
            )
            .with_parameter("word", "string", "The word to index into", true, "string")
            .with_parameter("index", "integer", "Zero-based position of the character", false, "input2")
            .with_parameter("language", "string", "Language of the text", false, "language"),
            word_tool(
                "get_codepoint_length",
                "Get the number of Unicode code points in the word.",
                "characters",
                "codepoint-length",
            ),
            ToolDefinition::new(
                "get_random_logical_chars",
                "Pick random logical characters from a word.",
                Endpoint::new("characters", "random-logical"),
            )
            .with_parameter("word", "string", "The word to sample from", true, "string")
            .with_parameter("count", "integer", "How many characters to pick", false, "count")
            .with_parameter("language", "string", "Language of the text", false, "language"),
            // ── analysis ────────────────────────────────────────────────
            word_tool(
                "check_palindrome",
                "Check if a word is a palindrome (reads the same forwards and backwards).",
                "analysis",
                "is-palindrome",
            ),
            pair_tool(
                "check_anagram",
                "Check if two words are anagrams of each other (same letters, different order).",
                "analysis",
                "is-anagram",
            ),
            ToolDefinition::new(
                "can_make_word",
                "Check if a target word can be formed using only the letters from the source word.",
                Endpoint::new("analysis", "can-make-word"),
            )
            .with_parameter("source_word", "string", "The source word providing available letters", true, "string")
            .with_parameter("target_word", "string", "The target word to try to form", true, "input2")
            .with_parameter("language", "string", "Language of the text", false, "language"),
            ToolDefinition::new(
                "can_make_all_words",
                "Check if ALL given words can be formed from the source word's letters.",
                Endpoint::new("analysis", "can-make-all-words"),
            )
            .with_parameter("source_word", "string", "The source word providing available letters", true, "string")
            .with_parameter("words", "string", "Comma-separated list of words to check", true, "input2")
            .with_parameter("language", "string", "Language of the text", false, "language"),
            word_tool(
                "get_word_strength",
                "Calculate the strength metric of a word (character diversity and complexity).",
                "analysis",
                "word-strength",
            ),
            word_tool(
                "get_word_weight",
                "Calculate the weight metric of a word.",
                "analysis",
                "word-weight",
            ),
            word_tool(
                "get_word_level",
                "Calculate the difficulty level of a word.",
                "analysis",
                "word-level",
            ),
            ToolDefinition::new(
                "detect_language",
                "Detect the language of a given text string.",
                Endpoint::new("analysis", "detect-language"),
            )
            .with_parameter("text", "string", "The text whose language to detect", true, "string"),
            pair_tool(
                "check_intersecting",
                "Check if two words share common (intersecting) characters.",
                "analysis",
                "is-intersecting",
            ),
            pair_tool(
                "get_intersecting_rank",
                "Get the intersecting rank (count of shared characters) between two words.",
                "analysis",
                "intersecting-rank",
            ),
            pair_tool(
                "check_ladder_words",
                "Check if two words are ladder words (differ by exactly one character).",
                "analysis",
                "are-ladder-words",
            ),
            pair_tool(
                "check_head_tail_words",
                "Check if the last character of word1 is the first character of word2.",
                "analysis",
                "are-head-tail-words",
            ),
            word_tool(
                "parse_to_logical_chars",
                "Parse a word into its logical character components.",
                "analysis",
                "parse-to-logical-chars",
            ),
            // ── comparison ──────────────────────────────────────────────
            arg_tool(
                "check_starts_with",
                "Check if a word starts with a given prefix.",
                "comparison",
                "starts-with",
                "prefix",
                "The prefix to look for",
            ),
            arg_tool(
                "check_ends_with",
                "Check if a word ends with a given suffix.",
                "comparison",
                "ends-with",
                "suffix",
                "The suffix to look for",
            ),
            pair_tool(
                "compare_words",
                "Lexicographically compare two words.",
                "comparison",
                "compare",
            ),
            pair_tool(
                "check_equals",
                "Check if two words are exactly equal.",
                "comparison",
                "equals",
            ),
            pair_tool(
                "check_reverse_equals",
                "Check if the reverse of word1 equals word2.",
                "comparison",
                "reverse-equals",
            ),
            arg_tool(
                "find_index_of",
                "Find the position (index) of a substring within a word.",
                "comparison",
                "index-of",
                "search",
                "The substring to find",
            ),
            // ── validation ──────────────────────────────────────────────
            arg_tool(
                "check_contains_char",
                "Check if a word contains a specific character.",
                "validation",
                "contains-char",
                "char",
                "The character to look for",
            ),
            arg_tool(
                "check_contains_string",
                "Check if a word contains a specific substring.",
                "validation",
                "contains-string",
                "substring",
                "The substring to look for",
            ),
            ToolDefinition::new(
                "check_is_consonant",
                "Check if a character is a consonant.",
                Endpoint::new("validation", "is-consonant"),
            )
            .with_parameter("character", "string", "The character to check", true, "string")
            .with_parameter("language", "string", "Language context", false, "language"),
            ToolDefinition::new(
                "check_is_vowel",
                "Check if a character is a vowel.",
                Endpoint::new("validation", "is-vowel"),
            )
            .with_parameter("character", "string", "The character to check", true, "string")
            .with_parameter("language", "string", "Language context", false, "language"),
            word_tool(
                "check_contains_space",
                "Check if a word or string contains any spaces.",
                "validation",
                "contains-space",
            ),
            // ── utility ─────────────────────────────────────────────────
            word_tool(
                "get_length_no_spaces",
                "Get the length of a string excluding spaces.",
                "utility",
                "length-no-spaces",
            ),
        ];

        let categories = vec![
            Category::new(
                "text",
                &[
                    "reverse", "length", "long", "characters", "randomize", "scramble",
                    "shuffle", "split", "replace", "swap",
                ],
                &[
                    "reverse_text",
                    "get_text_length",
                    "randomize_text",
                    "split_text",
                    "replace_in_text",
                ],
            ),
            Category::new(
                "characters",
                &[
                    "logical", "grapheme", "base char", "codepoint", "unicode",
                    "character at", "position", "parse",
                ],
                &[
                    "get_logical_characters",
                    "get_base_characters",
                    "get_code_points",
                    "get_character_at_position",
                    "get_codepoint_length",
                    "get_random_logical_chars",
                ],
            ),
            Category::new(
                "analysis",
                &[
                    "palindrome", "anagram", "can make", "can i make", "make word",
                    "make the word", "make from", "form word", "form the word",
                    "spell from", "form", "spell", "strength", "weight", "level",
                    "difficulty", "detect", "language", "intersect", "ladder",
                    "head tail", "chunk", "match",
                ],
                &[
                    "check_palindrome",
                    "check_anagram",
                    "can_make_word",
                    "can_make_all_words",
                    "get_word_strength",
                    "get_word_weight",
                    "get_word_level",
                    "detect_language",
                    "check_intersecting",
                    "get_intersecting_rank",
                    "check_ladder_words",
                    "check_head_tail_words",
                    "parse_to_logical_chars",
                ],
            ),
            Category::new(
                "comparison",
                &[
                    "starts with", "begins", "ends with", "compare", "equal", "same",
                    "reverse equal", "index", "find", "position of", "where",
                ],
                &[
                    "check_starts_with",
                    "check_ends_with",
                    "compare_words",
                    "check_equals",
                    "check_reverse_equals",
                    "find_index_of",
                ],
            ),
            Category::new(
                "validation",
                &[
                    "contains", "has", "have", "include", "letter", "consonant",
                    "vowel", "space",
                ],
                &[
                    "check_contains_char",
                    "check_contains_string",
                    "check_is_consonant",
                    "check_is_vowel",
                    "check_contains_space",
                ],
            ),
            Category::new(
                "utility",
                &["length no space", "without space"],
                &["get_length_no_spaces"],
            ),
        ];

        Self::build(tools, categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_tool(name: &str) -> ToolDefinition {
        ToolDefinition::new(name, format!("Description for {}", name), Endpoint::new("text", "noop"))
            .with_parameter("word", "string", "The word", true, "string")
    }

    #[test]
    fn builtin_catalog_builds() {
        let catalog = ToolCatalog::builtin().unwrap();

        assert_eq!(catalog.tool_count(), 36);
        assert_eq!(catalog.categories().len(), 6);
        assert!(catalog.contains("check_palindrome"));
        assert!(catalog.contains("get_random_logical_chars"));
    }

    #[test]
    fn builtin_catalog_is_closed_world() {
        // Every tool name referenced by a category exists in the registry.
        let catalog = ToolCatalog::builtin().unwrap();

        for category in catalog.categories() {
            for name in category.tools() {
                assert!(
                    catalog.contains(name),
                    "category '{}' references unknown tool '{}'",
                    category.name(),
                    name
                );
            }
        }
    }

    #[test]
    fn build_rejects_unknown_tool_in_category() {
        let result = ToolCatalog::build(
            vec![simple_tool("tool_a")],
            vec![Category::new("cat", &["kw"], &["tool_a", "tool_missing"])],
        );

        assert_eq!(
            result.unwrap_err(),
            CatalogError::UnknownToolInCategory {
                category: "cat".to_string(),
                tool: "tool_missing".to_string(),
            }
        );
    }

    #[test]
    fn build_rejects_duplicate_tool() {
        let result = ToolCatalog::build(
            vec![simple_tool("tool_a"), simple_tool("tool_a")],
            vec![],
        );

        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateTool("tool_a".to_string())
        );
    }

    #[test]
    fn build_rejects_empty_parameter_schema() {
        let bare = ToolDefinition::new("bare", "No params", Endpoint::new("text", "noop"));
        let result = ToolCatalog::build(vec![bare], vec![]);

        assert_eq!(
            result.unwrap_err(),
            CatalogError::MissingParameters("bare".to_string())
        );
    }

    #[test]
    fn get_returns_definition() {
        let catalog = ToolCatalog::builtin().unwrap();
        let tool = catalog.get("split_text").unwrap();

        assert_eq!(tool.endpoint().category(), "text");
        assert_eq!(tool.endpoint().action(), "split");
        assert_eq!(tool.required_params(), vec!["word"]);
    }

    #[test]
    fn compact_listing_has_one_line_per_tool() {
        let catalog = ToolCatalog::builtin().unwrap();
        let listing = catalog.compact_listing();

        assert_eq!(listing.lines().count(), catalog.tool_count());
        assert!(listing.contains("check_palindrome(word, language)"));
    }

    #[test]
    fn to_openai_tools_exports_selection() {
        let catalog = ToolCatalog::builtin().unwrap();
        let names = vec!["check_palindrome".to_string(), "reverse_text".to_string()];

        let exported = catalog.to_openai_tools(&names);
        assert_eq!(exported.len(), 2);
        assert_eq!(exported[0]["function"]["name"], "check_palindrome");
    }
}

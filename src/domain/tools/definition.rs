//! Tool definition - schema, documentation, and upstream wire binding.
//!
//! Defines the interface for a tool the model can invoke, together with the
//! word-API endpoint the tool maps onto.

use serde::{Deserialize, Serialize};

/// Upstream endpoint a tool maps onto: `{base}/{category}/{action}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    category: String,
    action: String,
}

impl Endpoint {
    /// Creates a new endpoint.
    pub fn new(category: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
        }
    }

    /// Returns the API category segment (e.g. "analysis").
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the API action segment (e.g. "is-palindrome").
    pub fn action(&self) -> &str {
        &self.action
    }
}

/// A single declared tool parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name as exposed to the model (e.g. "word")
    pub name: String,
    /// JSON Schema type ("string", "integer", ...)
    pub param_type: String,
    /// Human-readable description for the model
    pub description: String,
    /// Whether the parameter must be present for the fast path
    pub required: bool,
    /// Upstream query key this parameter binds to ("string", "input2", ...)
    pub query_key: String,
}

/// Definition of a tool that can be invoked by the model.
///
/// Carries everything the gateway needs:
/// - name and description for the stage-1 catalog and function-calling schema
/// - an ordered parameter list, rendered as a JSON Schema on demand
/// - the upstream endpoint and query binding used to execute the tool
///
/// # Examples
///
/// ```
/// use lexigate::domain::tools::{Endpoint, ToolDefinition};
///
/// let reverse = ToolDefinition::new(
///     "reverse_text",
///     "Reverse a word or string character-by-character",
///     Endpoint::new("text", "reverse"),
/// )
/// .with_parameter("word", "string", "The word or text to reverse", true, "string")
/// .with_parameter("language", "string", "Language of the text", false, "language");
///
/// assert_eq!(reverse.name(), "reverse_text");
/// assert_eq!(reverse.required_params(), vec!["word"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g. "check_palindrome")
    name: String,

    /// Human-readable description for the model and docs
    description: String,

    /// Declared parameters, in catalog order
    parameters: Vec<ParamSpec>,

    /// Upstream word-API endpoint
    endpoint: Endpoint,
}

impl ToolDefinition {
    /// Creates a new tool definition with no parameters.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        endpoint: Endpoint,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            endpoint,
        }
    }

    /// Adds a parameter and its upstream query binding.
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        param_type: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        query_key: impl Into<String>,
    ) -> Self {
        self.parameters.push(ParamSpec {
            name: name.into(),
            param_type: param_type.into(),
            description: description.into(),
            required,
            query_key: query_key.into(),
        });
        self
    }

    /// Returns the tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the declared parameters.
    pub fn parameters(&self) -> &[ParamSpec] {
        &self.parameters
    }

    /// Returns the upstream endpoint.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Names of parameters that must be present before the fast path may run.
    pub fn required_params(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Whether the upstream operation takes arguments beyond the language hint.
    pub fn takes_arguments(&self) -> bool {
        self.parameters.iter().any(|p| p.query_key != "language")
    }

    /// Renders the parameter list as a JSON Schema object.
    pub fn parameters_schema(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        for param in &self.parameters {
            properties.insert(
                param.name.clone(),
                serde_json::json!({
                    "type": param.param_type,
                    "description": param.description,
                }),
            );
        }
        let required: Vec<&str> = self.required_params();
        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Converts to OpenAI function-calling format.
    pub fn to_openai_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters_schema(),
            }
        })
    }

    /// One-line rendering for the stage-1 routing prompt:
    /// `name(param, param): description`.
    pub fn compact_line(&self) -> String {
        let params: Vec<&str> = self.parameters.iter().map(|p| p.name.as_str()).collect();
        format!(
            "  {}({}): {}",
            self.name,
            params.join(", "),
            self.description.trim_end_matches('.')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tool() -> ToolDefinition {
        ToolDefinition::new(
            "check_palindrome",
            "Check if a word is a palindrome.",
            Endpoint::new("analysis", "is-palindrome"),
        )
        .with_parameter("word", "string", "The word to check", true, "string")
        .with_parameter("language", "string", "Language of the text", false, "language")
    }

    #[test]
    fn new_creates_definition() {
        let def = sample_tool();

        assert_eq!(def.name(), "check_palindrome");
        assert_eq!(def.endpoint().category(), "analysis");
        assert_eq!(def.endpoint().action(), "is-palindrome");
        assert_eq!(def.parameters().len(), 2);
    }

    #[test]
    fn required_params_excludes_optional() {
        let def = sample_tool();
        assert_eq!(def.required_params(), vec!["word"]);
    }

    #[test]
    fn takes_arguments_detects_language_only_tools() {
        let def = sample_tool();
        assert!(def.takes_arguments());

        let bare = ToolDefinition::new("noop", "Does nothing", Endpoint::new("utility", "noop"))
            .with_parameter("language", "string", "Language", false, "language");
        assert!(!bare.takes_arguments());
    }

    #[test]
    fn parameters_schema_has_correct_structure() {
        let schema = sample_tool().parameters_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["word"]["type"], "string");
        assert_eq!(schema["required"][0], "word");
        assert_eq!(schema["required"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn to_openai_format_has_correct_structure() {
        let openai = sample_tool().to_openai_format();

        assert_eq!(openai["type"], "function");
        assert_eq!(openai["function"]["name"], "check_palindrome");
        assert!(openai["function"]["parameters"].is_object());
    }

    #[test]
    fn compact_line_lists_params_and_trims_period() {
        let line = sample_tool().compact_line();
        assert_eq!(
            line,
            "  check_palindrome(word, language): Check if a word is a palindrome"
        );
    }
}

//! Prompt text for the routing and answering calls.

/// System prompt for the answering calls (direct path and orchestration loop).
pub const SYSTEM_PROMPT: &str = "\
You are a helpful AI assistant specialized in word processing and text analysis.
You have access to a set of tools that can analyze, compare, validate, and transform words and text
in English and Indic languages (Telugu, Hindi, Gujarati, Malayalam).

When a user asks a question about words or text, use the appropriate tool(s) to get accurate results.
For example:
- To reverse a word, use the reverse_text tool.
- To check if a word is a palindrome, use the check_palindrome tool.
- To check if a word can be formed from letters of another word, use the can_make_word tool.
- To check prefixes or suffixes, use check_starts_with or check_ends_with.

For questions about generating words (like rhyming words, words with a prefix, or words from letters),
use your own knowledge to generate candidate words, then verify them with the tools when appropriate.
For instance, if asked for words that can be made from \"minneapolis\", generate candidates from your
knowledge, then use can_make_word to verify each one.

Always provide clear, concise answers. If a tool returns data, interpret it for the user in plain language.
Do not show raw JSON to the user unless they specifically ask for it.";

/// System prompt for the stage-1 routing call.
pub const ROUTER_SYSTEM_PROMPT: &str =
    "Output only valid JSON. No markdown, no explanation.";

/// Builds the stage-1 routing prompt around the compact tool listing.
pub fn router_prompt(tool_listing: &str, question: &str, language: &str) -> String {
    format!(
        r#"You are a request router for a word-processing API.

Available tools:
{tool_listing}

Given the user question, respond with ONLY valid JSON (no markdown, no explanation).
The "action" field MUST be exactly one of: "tool", "multi", or "direct" — never a tool name.

If ONE tool answers it:
{{"action": "tool", "tool": "<tool_name>", "params": {{"<param>": "<value>", "language": "{language}"}}}}

If MULTIPLE tool calls are needed:
{{"action": "multi"}}

If no tool is needed (general knowledge, greetings, non-word-analysis):
{{"action": "direct"}}

Rules:
- "action" must be "tool", "multi", or "direct" — never the tool name itself
- Extract EXACT word/string values from the question as param values
- Language defaults to "{language}" unless question specifies another (telugu/hindi/gujarati/malayalam)
- For Indic script text in the question, set language accordingly
- Prefer "tool" over "multi" whenever a single tool clearly answers the question
- Only use "direct" if the question clearly cannot be answered by any tool above
- "has the letter X", "contains X", "have the letter X" → check_contains_char with char=X

Question: {question}"#
    )
}

/// User message carrying the question, tagged with the requested language.
pub fn user_message(question: &str, language: &str) -> String {
    format!("[Language: {language}]\n\n{question}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_prompt_embeds_listing_and_language() {
        let prompt = router_prompt("  reverse_text(word): Reverse", "reverse hello", "telugu");

        assert!(prompt.contains("  reverse_text(word): Reverse"));
        assert!(prompt.contains(r#""language": "telugu""#));
        assert!(prompt.ends_with("Question: reverse hello"));
    }

    #[test]
    fn user_message_tags_language() {
        assert_eq!(
            user_message("is racecar a palindrome?", "english"),
            "[Language: english]\n\nis racecar a palindrome?"
        );
    }
}

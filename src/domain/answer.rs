//! Direct-answer formatting for the fast path.
//!
//! When stage 1 resolves a question to a single tool call, the gateway
//! skips the second model round-trip and renders the tool result itself.
//! Each tool has a fixed English template; anything unrecognized falls
//! back to `Result: {value}`.

use serde_json::{Map, Value};

/// Renders a JSON value for interpolation into an answer sentence.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// First present parameter among `keys`, rendered as text.
fn param<'a>(params: &Map<String, Value>, keys: &[&'a str]) -> String {
    keys.iter()
        .find_map(|k| params.get(*k))
        .map(render)
        .unwrap_or_default()
}

/// Boolean reading of an unwrapped tool result.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => {
            !s.is_empty() && !s.eq_ignore_ascii_case("false") && s != "0"
        }
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Converts a single-tool result into a human-readable answer.
///
/// The raw result is parsed as JSON when possible; envelope objects are
/// unwrapped (`result` first, then `data`), tool errors and upstream
/// `API Error:` strings become apologies, and the tool's template is
/// filled from the extracted parameters.
pub fn format_direct_answer(
    tool_name: &str,
    params: &Map<String, Value>,
    tool_result: &str,
) -> String {
    let value: Value = match serde_json::from_str::<Value>(tool_result) {
        Ok(Value::Object(map)) => {
            if let Some(error) = map.get("error").filter(|e| !e.is_null()) {
                return format!(
                    "Sorry, I couldn't complete that request: {}",
                    render(error)
                );
            }
            map.get("result")
                .or_else(|| map.get("data"))
                .cloned()
                .unwrap_or(Value::Object(map))
        }
        Ok(parsed) => parsed,
        Err(_) => Value::String(tool_result.to_string()),
    };

    if let Value::String(s) = &value {
        if s.starts_with("API Error:") {
            return format!("Sorry, I couldn't complete that: {s}");
        }
    }

    let word = param(params, &["word", "source_word", "text"]);
    let word2 = param(params, &["word2", "target_word"]);
    let lang = param(params, &["language"]);
    let lang_note = if lang.is_empty() || lang == "english" {
        String::new()
    } else {
        format!(" ({lang})")
    };

    let v = render(&value);
    let yes = truthy(&value);
    // Inserted between verb and predicate: `is{not}a palindrome`.
    let not = if yes { " " } else { " not " };

    match tool_name {
        "get_text_length" => {
            format!("The length of \"{word}\"{lang_note} is {v} character(s).")
        }
        "reverse_text" => format!("The reverse of \"{word}\" is \"{v}\"."),
        "randomize_text" => format!("A scrambled version of \"{word}\": \"{v}\"."),
        "split_text" => format!("Splitting \"{word}\": {v}"),
        "replace_in_text" => format!("Result after replacement: \"{v}\"."),
        "get_logical_characters" => {
            format!("Logical characters of \"{word}\"{lang_note}: {v}")
        }
        "get_base_characters" => {
            format!("Base characters of \"{word}\"{lang_note}: {v}")
        }
        "get_code_points" => format!("Code points of \"{word}\": {v}"),
        "get_codepoint_length" => {
            format!("Code point length of \"{word}\"{lang_note}: {v}.")
        }
        "get_character_at_position" => {
            let index = param(params, &["index"]);
            let index = if index.is_empty() { "0".to_string() } else { index };
            format!("Character at position {index} in \"{word}\": \"{v}\".")
        }
        "get_random_logical_chars" => {
            format!("Random characters from \"{word}\": {v}")
        }
        "parse_to_logical_chars" => {
            format!("Logical character components of \"{word}\"{lang_note}: {v}")
        }
        "check_palindrome" => format!("\"{word}\" is{not}a palindrome."),
        "check_anagram" => format!("\"{word}\" and \"{word2}\" are{not}anagrams."),
        "can_make_word" => {
            let can = if yes { " " } else { "not " };
            format!("\"{word2}\" can{can}be made from the letters of \"{word}\".")
        }
        "can_make_all_words" => {
            let can = if yes { " " } else { "not " };
            format!("All words can{can}be made from \"{word}\".")
        }
        "get_word_strength" => format!("Strength of \"{word}\": {v}."),
        "get_word_weight" => format!("Weight of \"{word}\": {v}."),
        "get_word_level" => format!("Difficulty level of \"{word}\": {v}."),
        "detect_language" => format!("Detected language: {v}."),
        "check_intersecting" => {
            let does = if yes { " " } else { " not " };
            format!("\"{word}\" and \"{word2}\" do{does}share common characters.")
        }
        "get_intersecting_rank" => {
            format!("Shared characters between \"{word}\" and \"{word2}\": {v}.")
        }
        "check_ladder_words" => format!(
            "\"{word}\" and \"{word2}\" are{not}ladder words (differ by one character)."
        ),
        "check_head_tail_words" => {
            format!("\"{word}\" and \"{word2}\" are{not}head-tail words.")
        }
        "check_starts_with" => {
            let prefix = param(params, &["prefix"]);
            format!("\"{word}\" does{not}start with \"{prefix}\".")
        }
        "check_ends_with" => {
            let suffix = param(params, &["suffix"]);
            format!("\"{word}\" does{not}end with \"{suffix}\".")
        }
        "compare_words" => format!("Comparison of \"{word}\" vs \"{word2}\": {v}."),
        "check_equals" => format!("\"{word}\" and \"{word2}\" are{not}equal."),
        "check_reverse_equals" => {
            format!("The reverse of \"{word}\" does{not}equal \"{word2}\".")
        }
        "find_index_of" => {
            let search = param(params, &["search"]);
            format!("\"{search}\" found at index {v} in \"{word}\".")
        }
        "check_contains_char" => {
            let ch = param(params, &["char"]);
            format!("\"{word}\" does{not}contain the character \"{ch}\".")
        }
        "check_contains_string" => {
            let sub = param(params, &["substring", "search"]);
            format!("\"{word}\" does{not}contain \"{sub}\".")
        }
        "check_is_consonant" => {
            let ch = param(params, &["character", "word"]);
            format!("\"{ch}\" is{not}a consonant.")
        }
        "check_is_vowel" => {
            let ch = param(params, &["character", "word"]);
            format!("\"{ch}\" is{not}a vowel.")
        }
        "check_contains_space" => format!("\"{word}\" does{not}contain spaces."),
        "get_length_no_spaces" => {
            format!("Length of \"{word}\" without spaces: {v}.")
        }
        _ => format!("Result: {v}"),
    }
}

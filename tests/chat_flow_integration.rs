//! Integration tests for the chat flow.
//!
//! These tests wire the chat service together with mock providers and
//! verify the three routing paths end to end:
//! 1. fast path - one tool call, templated answer, no second model call
//! 2. direct path - model answers from knowledge, no tools
//! 3. multi path - keyword-filtered tools through the orchestration loop

use std::sync::Arc;

use lexigate::adapters::ai::{MockChatModel, MockModelError};
use lexigate::adapters::wordapi::MockWordApi;
use lexigate::application::{select_tools, ChatService};
use lexigate::config::{LlmConfig, LlmProvider};
use lexigate::domain::tools::ToolCatalog;
use lexigate::ports::{ChatMessage, ToolCallRequest};

use proptest::prelude::*;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn catalog() -> Arc<ToolCatalog> {
    Arc::new(ToolCatalog::builtin().expect("builtin catalog must build"))
}

fn llm_with_key() -> LlmConfig {
    LlmConfig {
        openai_api_key: Some("sk-test".to_string()),
        ..Default::default()
    }
}

fn service(model: &MockChatModel, word_api: &MockWordApi, llm: LlmConfig) -> ChatService {
    ChatService::new(
        Arc::new(model.clone()),
        Arc::new(word_api.clone()),
        catalog(),
        llm,
        true,
    )
}

fn tool_call(id: &str, name: &str, arguments: &str) -> ToolCallRequest {
    ToolCallRequest {
        id: id.to_string(),
        name: name.to_string(),
        arguments: arguments.to_string(),
    }
}

// =============================================================================
// Fast path
// =============================================================================

#[tokio::test]
async fn palindrome_question_takes_fast_path_end_to_end() {
    let model = MockChatModel::new().with_text_turn(
        r#"{"action": "tool", "tool": "check_palindrome", "params": {"word": "racecar", "language": "english"}}"#,
    );
    let word_api = MockWordApi::new().with_result(r#"{"success": true, "result": true}"#);
    let svc = service(&model, &word_api, llm_with_key());

    let answer = svc.answer("Is racecar a palindrome?", "english").await;

    assert_eq!(answer, "\"racecar\" is a palindrome.");
    // Exactly one model call (routing) and one upstream call.
    assert_eq!(model.call_count(), 1);
    assert_eq!(word_api.call_count(), 1);

    let op = &word_api.calls()[0];
    assert_eq!(op.category, "analysis");
    assert_eq!(op.action, "is-palindrome");
    assert_eq!(
        op.query,
        vec![
            ("string".to_string(), "racecar".to_string()),
            ("language".to_string(), "english".to_string()),
        ]
    );
}

#[tokio::test]
async fn fenced_routing_reply_still_takes_fast_path() {
    let model = MockChatModel::new().with_text_turn(
        "```json\n{\"action\": \"tool\", \"tool\": \"reverse_text\", \"params\": {\"word\": \"hello\"}}\n```",
    );
    let word_api = MockWordApi::new().with_result(r#""olleh""#);
    let svc = service(&model, &word_api, llm_with_key());

    let answer = svc.answer("reverse hello", "english").await;
    assert_eq!(answer, "The reverse of \"hello\" is \"olleh\".");
}

#[tokio::test]
async fn flattened_routing_reply_is_recovered() {
    let model = MockChatModel::new().with_text_turn(
        r#"{"action": "check_contains_char", "word": "fruit", "char": "e"}"#,
    );
    let word_api = MockWordApi::new().with_result("false");
    let svc = service(&model, &word_api, llm_with_key());

    let answer = svc.answer("does fruit have the letter e?", "english").await;

    assert_eq!(answer, "\"fruit\" does not contain the character \"e\".");
    assert_eq!(word_api.calls()[0].action, "contains-char");
}

#[tokio::test]
async fn upstream_failure_envelope_becomes_apology() {
    let model = MockChatModel::new().with_text_turn(
        r#"{"action": "tool", "tool": "get_word_strength", "params": {"word": "hello"}}"#,
    );
    let word_api = MockWordApi::new().with_result(r#""API Error: unknown action""#);
    let svc = service(&model, &word_api, llm_with_key());

    let answer = svc.answer("what is the strength of hello?", "english").await;
    assert_eq!(
        answer,
        "Sorry, I couldn't complete that: API Error: unknown action"
    );
}

// =============================================================================
// Direct path
// =============================================================================

#[tokio::test]
async fn greeting_takes_direct_path_without_tools() {
    let model = MockChatModel::new()
        .with_text_turn(r#"{"action": "direct"}"#)
        .with_text_turn("Hello! Ask me anything about words.");
    let word_api = MockWordApi::new();
    let svc = service(&model, &word_api, llm_with_key());

    let answer = svc.answer("hello there", "english").await;

    assert_eq!(answer, "Hello! Ask me anything about words.");
    assert_eq!(word_api.call_count(), 0);

    // The answering call offers no tools and tags the language.
    let direct_call = &model.calls()[1];
    assert!(direct_call.tools.is_none());
    match &direct_call.messages[1] {
        ChatMessage::User { content } => {
            assert!(content.starts_with("[Language: english]"));
        }
        other => panic!("expected user message, got {:?}", other),
    }
}

#[tokio::test]
async fn direct_path_model_error_becomes_service_message() {
    let model = MockChatModel::new()
        .with_text_turn(r#"{"action": "direct"}"#)
        .with_error(MockModelError::Unavailable {
            status: 503,
            message: "overloaded".to_string(),
        });
    let svc = service(&model, &MockWordApi::new(), llm_with_key());

    let answer = svc.answer("hi", "english").await;
    assert!(answer.starts_with("LLM service error:"));
}

// =============================================================================
// Multi path
// =============================================================================

#[tokio::test]
async fn multi_path_executes_tools_and_returns_final_answer() {
    let model = MockChatModel::new()
        .with_text_turn(r#"{"action": "multi"}"#)
        .with_tool_call_turn(vec![
            tool_call("call_1", "can_make_word", r#"{"source_word": "minneapolis", "target_word": "nap"}"#),
            tool_call("call_2", "can_make_word", r#"{"source_word": "minneapolis", "target_word": "pin"}"#),
        ])
        .with_text_turn("Both \"nap\" and \"pin\" can be made from minneapolis.");
    let word_api = MockWordApi::new().with_result("true").with_result("true");
    let svc = service(&model, &word_api, llm_with_key());

    let answer = svc
        .answer("which words can I make from minneapolis?", "english")
        .await;

    assert_eq!(answer, "Both \"nap\" and \"pin\" can be made from minneapolis.");
    assert_eq!(word_api.call_count(), 2);
    assert_eq!(model.call_count(), 3);
}

#[tokio::test]
async fn multi_path_offers_only_matching_categories() {
    let model = MockChatModel::new()
        .with_text_turn(r#"{"action": "multi"}"#)
        .with_text_turn("done");
    let svc = service(&model, &MockWordApi::new(), llm_with_key());

    svc.answer("is listen an anagram of silent?", "english").await;

    let loop_call = &model.calls()[1];
    let names: Vec<&str> = loop_call
        .tools
        .as_ref()
        .expect("loop call must offer tools")
        .iter()
        .map(|t| t["function"]["name"].as_str().unwrap())
        .collect();

    assert!(names.contains(&"check_anagram"));
    assert!(!names.contains(&"reverse_text"));
}

#[tokio::test]
async fn garbage_routing_reply_falls_open_to_multi() {
    let model = MockChatModel::new()
        .with_text_turn("I would recommend using the reverse tool here.")
        .with_text_turn("Here is your answer.");
    let svc = service(&model, &MockWordApi::new(), llm_with_key());

    let answer = svc.answer("xyzzy", "english").await;

    assert_eq!(answer, "Here is your answer.");
    // Unmatched question means the loop gets the full catalog.
    let loop_call = &model.calls()[1];
    assert_eq!(loop_call.tools.as_ref().unwrap().len(), 36);
}

#[tokio::test]
async fn runaway_loop_hits_round_cap() {
    let mut model = MockChatModel::new().with_text_turn(r#"{"action": "multi"}"#);
    let mut word_api = MockWordApi::new();
    for i in 0..10 {
        model = model.with_tool_call_turn(vec![tool_call(
            &format!("call_{i}"),
            "reverse_text",
            r#"{"word": "loop"}"#,
        )]);
        word_api = word_api.with_result(r#""pool""#);
    }
    let svc = service(&model, &word_api, llm_with_key());

    let answer = svc.answer("reverse this forever", "english").await;

    assert_eq!(
        answer,
        "I processed your request but it required too many steps. Please try a simpler question."
    );
    // One routing call plus ten loop rounds.
    assert_eq!(model.call_count(), 11);
}

// =============================================================================
// Credentials
// =============================================================================

#[tokio::test]
async fn missing_gemini_key_answers_with_explanation() {
    let model = MockChatModel::new();
    let llm = LlmConfig {
        provider: LlmProvider::Gemini,
        ..Default::default()
    };
    let svc = service(&model, &MockWordApi::new(), llm);

    let answer = svc.answer("reverse hello", "english").await;

    assert_eq!(
        answer,
        "Error: GEMINI_API_KEY is not configured. Please set it in the server environment."
    );
    assert_eq!(model.call_count(), 0);
}

// =============================================================================
// Category filter properties
// =============================================================================

proptest! {
    #[test]
    fn tool_selection_is_never_empty(question in ".{0,200}") {
        let catalog = ToolCatalog::builtin().unwrap();
        let selection = select_tools(&catalog, &question, true);
        prop_assert!(!selection.tools.is_empty());
    }

    #[test]
    fn selected_tools_are_always_registered(question in ".{0,200}") {
        let catalog = ToolCatalog::builtin().unwrap();
        let selection = select_tools(&catalog, &question, true);
        for name in &selection.tools {
            prop_assert!(catalog.contains(name));
        }
    }
}

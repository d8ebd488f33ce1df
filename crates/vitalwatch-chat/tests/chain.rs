use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use vitalwatch_chat::chain::ProviderChain;
use vitalwatch_chat::config::ChatConfig;
use vitalwatch_chat::context::build_context_text;
use vitalwatch_chat::error::ChatError;
use vitalwatch_chat::prompt::{build_prompt, user_message};
use vitalwatch_chat::provider::{ChatProvider, ProviderKind};
use vitalwatch_core::models::chat_context::ChatContext;

struct FakeProvider {
    kind: ProviderKind,
    outcome: Result<&'static str, &'static str>,
    calls: Arc<AtomicUsize>,
}

impl FakeProvider {
    fn boxed(
        kind: ProviderKind,
        outcome: Result<&'static str, &'static str>,
        calls: &Arc<AtomicUsize>,
    ) -> Box<dyn ChatProvider> {
        Box::new(Self {
            kind,
            outcome,
            calls: Arc::clone(calls),
        })
    }
}

#[async_trait]
impl ChatProvider for FakeProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn reply(&self, _question: &str, context_text: &str) -> Result<String, ChatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert!(context_text.starts_with("Health score: "));
        self.outcome
            .map(str::to_string)
            .map_err(|m| ChatError::Invocation(m.to_string()))
    }
}

#[test]
fn context_text_defaults_to_na_and_none() {
    let text = build_context_text(&ChatContext::default());
    assert_eq!(
        text,
        "Health score: N/A\nRisk level: N/A\nRisk flags: none\nConditions: none\nDoctor review: N/A\nSummary: N/A"
    );
}

#[test]
fn context_text_lists_values() {
    let context = ChatContext {
        summary: Some("History: none".to_string()),
        risk: Some("Medium".to_string()),
        final_score: Some(64.0),
        flags: vec!["Sleep deficit".to_string(), "High stress".to_string()],
        conditions: vec![],
        doctor_review: Some("Routine doctor review suggested".to_string()),
    };

    let text = build_context_text(&context);
    assert!(text.contains("Health score: 64\n"));
    assert!(text.contains("Risk flags: Sleep deficit, High stress\n"));
    assert!(text.contains("Conditions: none\n"));
    assert!(text.ends_with("Summary: History: none"));
}

#[test]
fn prompts_embed_context_and_question() {
    assert_eq!(user_message("Hi?", "ctx"), "Context:\nctx\n\nQuestion: Hi?");

    let prompt = build_prompt("Is 8h sleep enough?", "Health score: 80");
    assert!(prompt.starts_with("You are a friendly health chatbot for an educational app.\n"));
    assert!(prompt.contains("Never claim diagnosis"));
    assert!(prompt.ends_with("\n\nContext:\nHealth score: 80\n\nQuestion: Is 8h sleep enough?"));
}

#[test]
fn provider_kind_names() {
    assert_eq!(ProviderKind::OpenAi.to_string(), "OpenAI");
    assert_eq!(serde_json::to_value(ProviderKind::OpenAi).unwrap(), "openai");
    assert_eq!(serde_json::to_value(ProviderKind::Gemini).unwrap(), "gemini");
}

#[test]
fn chain_from_config_skips_providers_without_keys() {
    assert!(ProviderChain::from_config(&ChatConfig::default()).is_empty());

    let config = ChatConfig {
        gemini_api_key: Some("g-key".to_string()),
        ..ChatConfig::default()
    };
    assert!(config.has_any_provider());
    assert_eq!(ProviderChain::from_config(&config).len(), 1);
}

#[tokio::test]
async fn empty_chain_is_not_configured() {
    let err = ProviderChain::default()
        .ask("hello", &ChatContext::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::NotConfigured));
    assert_eq!(
        err.to_string(),
        "No AI provider key found. Set OPENAI_API_KEY or GEMINI_API_KEY."
    );
}

#[tokio::test]
async fn first_success_wins_and_later_providers_are_skipped() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = ProviderChain::new(vec![
        FakeProvider::boxed(ProviderKind::OpenAi, Ok("from openai"), &calls),
        FakeProvider::boxed(ProviderKind::Gemini, Ok("from gemini"), &calls),
    ]);

    let reply = chain.ask("hi", &ChatContext::default()).await.unwrap();
    assert_eq!(reply.reply, "from openai");
    assert_eq!(reply.provider, ProviderKind::OpenAi);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn falls_back_to_second_provider() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = ProviderChain::new(vec![
        FakeProvider::boxed(ProviderKind::OpenAi, Err("quota exceeded"), &calls),
        FakeProvider::boxed(ProviderKind::Gemini, Ok("from gemini"), &calls),
    ]);

    let reply = chain.ask("hi", &ChatContext::default()).await.unwrap();
    assert_eq!(reply.provider, ProviderKind::Gemini);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn total_failure_lists_every_provider() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = ProviderChain::new(vec![
        FakeProvider::boxed(ProviderKind::OpenAi, Err("bad key"), &calls),
        FakeProvider::boxed(ProviderKind::Gemini, Err("model not found"), &calls),
    ]);

    match chain.ask("hi", &ChatContext::default()).await {
        Err(ChatError::AllProvidersFailed(details)) => {
            assert_eq!(details, vec!["OpenAI: bad key", "Gemini: model not found"]);
        }
        other => panic!("expected aggregate failure, got {other:?}"),
    }
}

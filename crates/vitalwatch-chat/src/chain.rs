use tracing::{info, warn};

use vitalwatch_core::models::chat_context::ChatContext;

use crate::config::ChatConfig;
use crate::context::build_context_text;
use crate::error::ChatError;
use crate::gemini::GeminiProvider;
use crate::openai::OpenAiProvider;
use crate::provider::{ChatProvider, ChatReply};

/// Providers tried strictly in order, one at a time. The first success wins.
#[derive(Default)]
pub struct ProviderChain {
    providers: Vec<Box<dyn ChatProvider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Box<dyn ChatProvider>>) -> Self {
        Self { providers }
    }

    /// OpenAI first, Gemini second, each only when its key is set.
    pub fn from_config(config: &ChatConfig) -> Self {
        let client = reqwest::Client::new();
        let mut providers: Vec<Box<dyn ChatProvider>> = Vec::new();

        if let Some(key) = &config.openai_api_key {
            providers.push(Box::new(OpenAiProvider::new(
                client.clone(),
                key.clone(),
                config.openai_model.clone(),
            )));
        }
        if let Some(key) = &config.gemini_api_key {
            providers.push(Box::new(GeminiProvider::new(
                client,
                key.clone(),
                config.gemini_model.clone(),
            )));
        }

        info!(providers = providers.len(), "chat provider chain configured");
        Self { providers }
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub async fn ask(&self, question: &str, context: &ChatContext) -> Result<ChatReply, ChatError> {
        if self.providers.is_empty() {
            return Err(ChatError::NotConfigured);
        }

        let context_text = build_context_text(context);
        let mut failures = Vec::new();

        for provider in &self.providers {
            let kind = provider.kind();
            match provider.reply(question, &context_text).await {
                Ok(reply) => return Ok(ChatReply { reply, provider: kind }),
                Err(e) => {
                    warn!(provider = %kind, error = %e, "chat provider failed");
                    failures.push(format!("{kind}: {e}"));
                }
            }
        }

        Err(ChatError::AllProvidersFailed(failures))
    }
}

use serde::{Deserialize, Serialize};
use tracing::warn;

use vitalwatch_core::models::chat_context::ChatContext;
use vitalwatch_core::models::evaluation::EvaluationResult;

use crate::chain::ProviderChain;
use crate::holder::CurrentEvaluation;
use crate::intent::{self, Intent, NO_RESULT_REPLY};
use crate::provider::ProviderKind;

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum AnswerSource {
    /// Nothing submitted yet.
    NoResult,
    Remote(ProviderKind),
    /// Local matcher; `None` when no intent matched.
    Local(Option<Intent>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub reply: String,
    pub source: AnswerSource,
}

/// Owns the latest evaluation and the provider chain.
pub struct Responder {
    chain: ProviderChain,
    current: CurrentEvaluation,
}

impl Responder {
    pub fn new(chain: ProviderChain) -> Self {
        Self {
            chain,
            current: CurrentEvaluation::new(),
        }
    }

    /// A responder that never leaves the process.
    pub fn local_only() -> Self {
        Self::new(ProviderChain::default())
    }

    /// Replace the latest result after a submission.
    pub fn update(&mut self, result: EvaluationResult) {
        self.current.replace(result);
    }

    pub fn current(&self) -> &CurrentEvaluation {
        &self.current
    }

    /// Remote providers first when any are configured, the local matcher
    /// when there are none or all of them fail.
    pub async fn answer(&self, question: &str) -> ChatAnswer {
        let Some(result) = self.current.get() else {
            return ChatAnswer {
                reply: NO_RESULT_REPLY.to_string(),
                source: AnswerSource::NoResult,
            };
        };
        let question = question.trim();

        if !self.chain.is_empty() {
            match self.chain.ask(question, &ChatContext::from(result)).await {
                Ok(reply) => {
                    return ChatAnswer {
                        reply: reply.reply,
                        source: AnswerSource::Remote(reply.provider),
                    };
                }
                Err(e) => warn!(error = %e, "remote chat failed, answering locally"),
            }
        }

        ChatAnswer {
            reply: intent::local_reply(question, result),
            source: AnswerSource::Local(intent::classify(question)),
        }
    }
}

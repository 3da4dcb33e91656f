//! Answer selection between the FAQ table and the text provider.

use crate::config::InstitutionProfile;
use crate::models::FaqTable;
use crate::services::metrics;
use crate::services::prompts;
use crate::services::providers::TextProvider;
use std::sync::Arc;
use std::time::Instant;

/// Returned when neither the FAQ table nor the model produced an answer.
pub const APOLOGY: &str = "Sorry, I couldn't get an answer right now.";

/// Which branch handled the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The question names the institution; the model always answers first.
    Direct,
    /// FAQ and model answers are blended.
    Hybrid,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Direct => "direct",
            Route::Hybrid => "hybrid",
        }
    }
}

/// Where the final answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Model,
    Faq,
    Apology,
}

impl AnswerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSource::Model => "model",
            AnswerSource::Faq => "faq",
            AnswerSource::Apology => "apology",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub answer: String,
    pub source: AnswerSource,
    pub route: Route,
}

/// Turns a free-text question into a single answer string.
///
/// Holds no per-request state; clones share the FAQ table and provider.
#[derive(Clone)]
pub struct AnswerResolver {
    faqs: Arc<FaqTable>,
    provider: Arc<dyn TextProvider>,
    profile: InstitutionProfile,
}

impl AnswerResolver {
    pub fn new(
        faqs: Arc<FaqTable>,
        provider: Arc<dyn TextProvider>,
        profile: InstitutionProfile,
    ) -> Self {
        Self {
            faqs,
            provider,
            profile,
        }
    }

    pub fn faqs(&self) -> &FaqTable {
        &self.faqs
    }

    pub fn provider(&self) -> &Arc<dyn TextProvider> {
        &self.provider
    }

    pub fn profile(&self) -> &InstitutionProfile {
        &self.profile
    }

    pub async fn resolve(&self, question: &str) -> Resolution {
        let started = Instant::now();
        let question = question.to_lowercase();
        let faq_answer = self.faqs.lookup(&question).map(|entry| entry.answer.as_str());

        let resolution = if question.contains(self.profile.trigger_keyword().as_str()) {
            self.resolve_direct(&question, faq_answer).await
        } else {
            self.resolve_hybrid(&question, faq_answer).await
        };

        metrics::record_chat_answer(
            resolution.route.as_str(),
            resolution.source.as_str(),
            started.elapsed().as_secs_f64(),
        );
        tracing::info!(
            route = resolution.route.as_str(),
            source = resolution.source.as_str(),
            faq_matched = faq_answer.is_some(),
            "Resolved chat answer"
        );

        resolution
    }

    async fn resolve_direct(&self, question: &str, faq_answer: Option<&str>) -> Resolution {
        let prompt = prompts::direct_prompt(&self.profile, question);
        let model_answer = self.ask_model(&prompt).await;

        let (answer, source) = match (model_answer, faq_answer) {
            (Some(text), _) => (text, AnswerSource::Model),
            (None, Some(faq)) => (faq.to_string(), AnswerSource::Faq),
            (None, None) => (APOLOGY.to_string(), AnswerSource::Apology),
        };

        Resolution {
            answer,
            source,
            route: Route::Direct,
        }
    }

    async fn resolve_hybrid(&self, question: &str, faq_answer: Option<&str>) -> Resolution {
        let prompt = prompts::hybrid_prompt(&self.profile, question, faq_answer);
        let model_answer = self.ask_model(&prompt).await;

        // Literal case-insensitive comparison; no fuzzy matching.
        let faq_folded = faq_answer.unwrap_or("").to_lowercase();
        let differs_from_faq = |text: &str| text.to_lowercase() != faq_folded;

        let (answer, source) = match (model_answer, faq_answer) {
            (Some(text), _) if differs_from_faq(&text) => (text, AnswerSource::Model),
            (_, Some(faq)) => (faq.to_string(), AnswerSource::Faq),
            (Some(text), None) => (text, AnswerSource::Model),
            (None, None) => (APOLOGY.to_string(), AnswerSource::Apology),
        };

        Resolution {
            answer,
            source,
            route: Route::Hybrid,
        }
    }

    /// One provider attempt. Failures and blank output both come back as
    /// `None`.
    async fn ask_model(&self, prompt: &str) -> Option<String> {
        let started = Instant::now();
        let result = self.provider.generate(prompt).await;
        metrics::record_provider_latency(
            self.provider.name(),
            self.provider.model(),
            started.elapsed().as_secs_f64(),
        );

        match result {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(text.to_string())
                }
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    model = %self.provider.model(),
                    error = %e,
                    "Text provider call failed"
                );
                metrics::record_provider_error(self.provider.name(), e.kind());
                None
            }
        }
    }
}

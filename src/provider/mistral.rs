// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use serde::Deserialize;

use super::{Rewrite, RewriteError, RewriteProvider, RewriteRequest};

pub const DEFAULT_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistral-large-latest";

const API_KEY_ENV: &str = "MISTRAL_API_KEY";
const MODEL_ENV: &str = "INFLECT_MODEL";
const ENDPOINT_ENV: &str = "INFLECT_ENDPOINT";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Rewrite provider backed by the Mistral chat-completions API.
///
/// The model is asked for a JSON object (`rewritten_text` plus
/// `tone_applied`) so the response can be parsed without scraping prose.
pub struct MistralProvider {
    api_key: String,
    model: String,
    endpoint: String,
    agent: ureq::Agent,
}

impl MistralProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            agent: ureq::builder()
                .timeout_connect(CONNECT_TIMEOUT)
                .timeout_read(READ_TIMEOUT)
                .build(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Builds a provider from the environment (`MISTRAL_API_KEY`, optional
    /// `INFLECT_MODEL` / `INFLECT_ENDPOINT` overrides).
    pub fn from_env() -> Result<Self, RewriteError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| RewriteError::Configuration(format!("{API_KEY_ENV} is not set")))?;

        let mut provider = Self::new(api_key);
        if let Ok(model) = std::env::var(MODEL_ENV) {
            if !model.trim().is_empty() {
                provider = provider.with_model(model);
            }
        }
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                provider = provider.with_endpoint(endpoint);
            }
        }
        Ok(provider)
    }
}

impl RewriteProvider for MistralProvider {
    fn provider_id(&self) -> &'static str {
        "mistral"
    }

    fn rewrite(&self, request: &RewriteRequest) -> Result<Rewrite, RewriteError> {
        request.validate()?;

        let body = serde_json::json!({
            "model": self.model,
            "temperature": 0.7,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "user", "content": build_prompt(request) },
            ],
        });

        let response = self
            .agent
            .post(&self.endpoint)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(map_transport_error)?;

        let completion: ChatCompletion = response
            .into_json()
            .map_err(|err| RewriteError::Generation(format!("malformed completion: {err}")))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| RewriteError::Generation("completion has no choices".to_owned()))?;

        let payload: RewritePayload = serde_json::from_str(&content)
            .map_err(|err| RewriteError::Generation(format!("malformed rewrite payload: {err}")))?;

        if payload.rewritten_text.trim().is_empty() {
            return Err(RewriteError::Generation("generated content is empty".to_owned()));
        }

        Ok(Rewrite {
            rewritten_text: payload.rewritten_text,
            tone_applied: payload.tone_applied,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct RewritePayload {
    rewritten_text: String,
    #[serde(default)]
    tone_applied: String,
}

fn map_transport_error(err: ureq::Error) -> RewriteError {
    match err {
        ureq::Error::Status(status, response) => map_status(status, &drain_body(response)),
        ureq::Error::Transport(transport) => RewriteError::Other(transport.to_string()),
    }
}

fn drain_body(response: ureq::Response) -> String {
    response.into_string().unwrap_or_default()
}

fn map_status(status: u16, body: &str) -> RewriteError {
    match status {
        429 => RewriteError::RateLimited,
        401 | 403 => RewriteError::Configuration(format!("status {status}")),
        _ if body.contains("rate limit") => RewriteError::RateLimited,
        _ if body.contains("authentication") => {
            RewriteError::Configuration(format!("status {status}"))
        }
        _ if body.contains("model") || body.contains("generation") => {
            RewriteError::Generation(format!("status {status}"))
        }
        _ => RewriteError::Other(format!("provider returned status {status}")),
    }
}

/// The tone-adjustment instructions handed to the model.
fn build_prompt(request: &RewriteRequest) -> String {
    let tone = &request.tone;
    format!(
        "You are an expert writing assistant specializing in tone adjustment. Your task is to \
         rewrite text according to specific tone requirements while preserving the original \
         meaning and intent.\n\n\
         IMPORTANT GUIDELINES:\n\
         - Maintain the core message and factual content\n\
         - Adjust vocabulary, sentence structure, and style to match the requested tone\n\
         - Preserve any technical terms or proper nouns unless tone requires simplification\n\
         - Keep the same approximate length unless tone naturally requires expansion/compression\n\
         - Ensure the rewritten text sounds natural and authentic\n\n\
         TONE TO APPLY: {label} ({description})\n\
         TONE INSTRUCTIONS: {prompt}\n\n\
         Original text to rewrite: \"{text}\"\n\n\
         Respond with a JSON object with two keys: \"rewritten_text\" (the text rewritten in the \
         requested {label} tone) and \"tone_applied\" (a brief explanation of how the tone was \
         applied).",
        label = tone.label(),
        description = tone.description(),
        prompt = tone.prompt(),
        text = request.text,
    )
}

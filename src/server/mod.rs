// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Local HTTP rewrite endpoint.
//!
//! `POST /api/tone` exposes the rewrite provider: a success/error envelope
//! plus 429 for rate limiting and 500 for every other failure. The endpoint
//! is stateless plumbing over the provider and never touches the revision
//! history.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::model::ToneSpec;
use crate::provider::{RewriteError, RewriteProvider, RewriteRequest};

#[derive(Debug, Clone, Deserialize)]
pub struct ToneRequestBody {
    pub text: String,
    pub tone: ToneSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToneResponseBody {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToneResponseBody {
    fn ok(content: String, explanation: String, tone_used: String) -> Self {
        Self {
            success: true,
            content: Some(content),
            explanation: Some(explanation),
            tone_used: Some(tone_used),
            error: None,
        }
    }

    fn err(message: String) -> Self {
        Self {
            success: false,
            content: None,
            explanation: None,
            tone_used: None,
            error: Some(message),
        }
    }
}

/// Transport encoding of the failure taxonomy.
pub fn status_for(err: &RewriteError) -> StatusCode {
    match err {
        RewriteError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        RewriteError::Configuration(_) | RewriteError::Generation(_) | RewriteError::Other(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub fn router(provider: Arc<dyn RewriteProvider>) -> Router {
    Router::new()
        .route("/api/tone", post(rewrite_tone))
        .with_state(provider)
}

async fn rewrite_tone(
    State(provider): State<Arc<dyn RewriteProvider>>,
    Json(body): Json<ToneRequestBody>,
) -> (StatusCode, Json<ToneResponseBody>) {
    let request = RewriteRequest::new(body.text, body.tone);
    let tone_label = request.tone.label().to_owned();

    // The provider call is blocking (and possibly slow); keep it off the
    // async runtime.
    let outcome = tokio::task::spawn_blocking(move || provider.rewrite(&request))
        .await
        .unwrap_or_else(|err| Err(RewriteError::Other(format!("rewrite task failed: {err}"))));

    match outcome {
        Ok(rewrite) => (
            StatusCode::OK,
            Json(ToneResponseBody::ok(
                rewrite.rewritten_text,
                rewrite.tone_applied,
                tone_label,
            )),
        ),
        Err(err) => (status_for(&err), Json(ToneResponseBody::err(err.user_message()))),
    }
}

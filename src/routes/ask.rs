use axum::{Json, extract::State};
use tracing::warn;

use crate::error::AppError;
use crate::message::{AskRequest, AskResponse};
use crate::services::gemini::{GeminiError, extract_text};
use crate::services::prompt::build_conversation;
use crate::services::reply;
use crate::state::{AppState, SharedState};

/// POST /api/ask. Three terminal outcomes: small-talk canned reply,
/// sanitized generation reply with a closer, or an in-character apology.
/// Hard rejections (wrong method, empty question) never reach upstream.
pub async fn ask_handler(
    State(state): State<SharedState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let ask = payload.normalize()?;

    if state.small_talk.is_greeting(&ask.question) {
        let closer = reply::pick_closer(&mut rand::rng());
        return Ok(Json(AskResponse {
            answer: reply::with_closer(reply::ONBOARDING, closer),
            debug: None,
        }));
    }

    let contents = build_conversation(&ask);
    let response = match state.gemini.generate(contents).await {
        Ok(response) => response,
        Err(err) => return Ok(Json(soft_failure(&state, err))),
    };

    let text = extract_text(&response);
    if text.trim().is_empty() {
        return Ok(Json(soft_failure(&state, GeminiError::EmptyReply)));
    }

    let closer = reply::pick_closer(&mut rand::rng());
    let answer = reply::with_closer(&state.sanitizer.clean(&text), closer);
    Ok(Json(AskResponse {
        answer,
        debug: None,
    }))
}

/// Downgrade any upstream-related failure to a 200 apology. The raw
/// diagnostic is logged, and echoed in `debug` only when the operator
/// debug flag is on.
fn soft_failure(state: &AppState, err: GeminiError) -> AskResponse {
    warn!(error = %err, "answering failed, sending apology");

    let answer = match err {
        GeminiError::MissingApiKey => reply::MISCONFIGURED,
        _ => reply::APOLOGY,
    };
    let debug = state.config.expose_debug.then(|| err.to_string());

    AskResponse {
        answer: answer.to_string(),
        debug,
    }
}

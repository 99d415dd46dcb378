// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::gemini::GeminiClient;
use crate::services::sanitize::Sanitizer;
use crate::services::small_talk::SmallTalk;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: AppConfig,
    pub gemini: GeminiClient,
    pub small_talk: SmallTalk,
    pub sanitizer: Sanitizer,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let gemini = GeminiClient::new(&config);
        Self {
            config,
            gemini,
            small_talk: SmallTalk::new(),
            sanitizer: Sanitizer::new(),
        }
    }
}

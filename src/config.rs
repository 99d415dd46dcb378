use std::env;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Process configuration, read once at startup and injected into the
/// service through [`crate::state::AppState`]. Nothing reads the
/// environment mid-request.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Upstream credential. When absent the service stays up and answers
    /// every question with the misconfiguration reply.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    /// When set, soft-failure responses carry a `debug` diagnostic field.
    pub expose_debug: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            expose_debug: env::var("DOUBTBOT_DEBUG")
                .map(|v| truthy(&v))
                .unwrap_or(false),
        }
    }
}

fn truthy(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_accepts_one_and_true() {
        assert!(truthy("1"));
        assert!(truthy("true"));
        assert!(truthy("TRUE"));
        assert!(truthy(" true "));
        assert!(!truthy("0"));
        assert!(!truthy("yes"));
        assert!(!truthy(""));
    }
}

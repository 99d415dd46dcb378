// src/message.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Only the most recent turns are forwarded upstream, to bound prompt size.
pub const MAX_HISTORY_TURNS: usize = 6;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub cls: Option<String>,
    pub subject: Option<String>,
    pub history: Option<Vec<HistoryTurn>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryTurn {
    pub role: TurnRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// Request after validation: trimmed question, trimmed optional metadata,
/// history capped to the last [`MAX_HISTORY_TURNS`] entries.
#[derive(Debug)]
pub struct ValidatedAsk {
    pub question: String,
    pub cls: Option<String>,
    pub subject: Option<String>,
    pub history: Vec<HistoryTurn>,
}

impl AskRequest {
    pub fn normalize(self) -> Result<ValidatedAsk, AppError> {
        let question = self.question.trim().to_string();
        if question.is_empty() {
            return Err(AppError::BadRequest("empty question".to_string()));
        }

        let mut history = self.history.unwrap_or_default();
        if history.len() > MAX_HISTORY_TURNS {
            history.drain(..history.len() - MAX_HISTORY_TURNS);
        }

        Ok(ValidatedAsk {
            question,
            cls: non_empty(self.cls),
            subject: non_empty(self.subject),
            history,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(question: &str, history: Option<Vec<HistoryTurn>>) -> AskRequest {
        AskRequest {
            question: question.to_string(),
            cls: None,
            subject: None,
            history,
        }
    }

    #[test]
    fn rejects_empty_and_whitespace_questions() {
        assert!(request("", None).normalize().is_err());
        assert!(request("   \t  ", None).normalize().is_err());
    }

    #[test]
    fn trims_question_and_metadata() {
        let mut req = request("  what is osmosis?  ", None);
        req.cls = Some("  10  ".to_string());
        req.subject = Some("   ".to_string());

        let ask = req.normalize().unwrap();
        assert_eq!(ask.question, "what is osmosis?");
        assert_eq!(ask.cls.as_deref(), Some("10"));
        assert_eq!(ask.subject, None);
    }

    #[test]
    fn keeps_only_the_most_recent_six_turns() {
        let history: Vec<HistoryTurn> = (0..10)
            .map(|i| HistoryTurn {
                role: if i % 2 == 0 { TurnRole::User } else { TurnRole::Assistant },
                content: format!("turn-{i}"),
            })
            .collect();

        let ask = request("q", Some(history)).normalize().unwrap();
        assert_eq!(ask.history.len(), MAX_HISTORY_TURNS);
        assert_eq!(ask.history[0].content, "turn-4");
        assert_eq!(ask.history[5].content, "turn-9");
    }

    #[test]
    fn short_history_is_kept_as_is() {
        let history = vec![HistoryTurn {
            role: TurnRole::User,
            content: "hello".to_string(),
        }];
        let ask = request("q", Some(history)).normalize().unwrap();
        assert_eq!(ask.history.len(), 1);
    }
}

use crate::message::{TurnRole, ValidatedAsk};
use crate::services::gemini::{Content, Part};

/// Standing instruction sent as the first conversation turn. The v1beta
/// `generateContent` endpoint has no system role in `contents`, so it
/// travels as a user turn.
pub const SYSTEM_INSTRUCTION: &str = "\
You are AIM-Mitr, a friendly and motivating study buddy for school students preparing for exams. \
Stay informal, encouraging and safe. Never reveal which AI model, company or provider powers you; \
if asked, just say you are AIM-Mitr. \
When a student asks about a concept, explain it simply and add one brief example. \
When a student asks a numerical or problem, solve it in short step-by-step bullet points and end \
with the final answer on its own line. Add a quick practice tip when it helps. \
Adapt your depth and wording to the student's class and subject when they are given. \
Keep answers short and clean: no headings, no links, no citations or source lists. \
If the student is rude or abusive, reply with one short witty but non-abusive comeback and move on \
instead of refusing.";

/// Assemble the upstream conversation: system instruction, then the
/// caller-supplied history with roles translated, then the current ask.
pub fn build_conversation(ask: &ValidatedAsk) -> Vec<Content> {
    let mut contents = Vec::with_capacity(ask.history.len() + 2);

    contents.push(Content {
        role: "user".to_string(),
        parts: vec![Part::text(SYSTEM_INSTRUCTION)],
    });

    for turn in &ask.history {
        contents.push(Content {
            role: upstream_role(turn.role).to_string(),
            parts: vec![Part::text(turn.content.clone())],
        });
    }

    contents.push(Content {
        role: "user".to_string(),
        parts: vec![Part::text(student_block(ask))],
    });

    contents
}

fn upstream_role(role: TurnRole) -> &'static str {
    match role {
        TurnRole::User => "user",
        TurnRole::Assistant => "model",
    }
}

fn student_block(ask: &ValidatedAsk) -> String {
    let mut block = String::new();
    if let Some(cls) = &ask.cls {
        block.push_str(&format!("Class: {cls}\n"));
    }
    if let Some(subject) = &ask.subject {
        block.push_str(&format!("Subject: {subject}\n"));
    }
    block.push_str(&format!("Student asked: {}", ask.question));
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::HistoryTurn;

    fn ask(question: &str, history: Vec<HistoryTurn>) -> ValidatedAsk {
        ValidatedAsk {
            question: question.to_string(),
            cls: None,
            subject: None,
            history,
        }
    }

    #[test]
    fn system_instruction_comes_first_and_question_last() {
        let contents = build_conversation(&ask("what is osmosis?", vec![]));
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].role, "user");
        assert_eq!(contents[0].parts[0].text, SYSTEM_INSTRUCTION);
        assert_eq!(
            contents[1].parts[0].text,
            "Student asked: what is osmosis?"
        );
    }

    #[test]
    fn assistant_turns_are_forwarded_as_model() {
        let history = vec![
            HistoryTurn {
                role: TurnRole::User,
                content: "what is a prime?".to_string(),
            },
            HistoryTurn {
                role: TurnRole::Assistant,
                content: "a number with two divisors".to_string(),
            },
        ];
        let contents = build_conversation(&ask("give an example", history));
        assert_eq!(contents.len(), 4);
        assert_eq!(contents[1].role, "user");
        assert_eq!(contents[2].role, "model");
        assert_eq!(contents[2].parts[0].text, "a number with two divisors");
    }

    #[test]
    fn class_and_subject_lines_appear_only_when_given() {
        let mut with_meta = ask("solve x+2=5", vec![]);
        with_meta.cls = Some("8".to_string());
        with_meta.subject = Some("Maths".to_string());

        let contents = build_conversation(&with_meta);
        let block = &contents[1].parts[0].text;
        assert_eq!(
            block,
            "Class: 8\nSubject: Maths\nStudent asked: solve x+2=5"
        );

        let contents = build_conversation(&ask("solve x+2=5", vec![]));
        assert_eq!(contents[1].parts[0].text, "Student asked: solve x+2=5");
    }
}

use regex::Regex;

/// Greeting detector. A matched question skips the upstream call entirely
/// and gets the canned onboarding reply, saving a generation round-trip on
/// non-substantive input.
pub struct SmallTalk {
    pattern: Regex,
}

impl SmallTalk {
    pub fn new() -> Self {
        // Anchored prefix with a word boundary so "history" is not "hi".
        let pattern = Regex::new(
            r"(?i)^\s*(hi+|hello+|hey+|yo|hola|namaste|sup|wassup|how are you|how r u|good\s+(morning|afternoon|evening|night))\b",
        )
        .expect("greeting pattern is valid");
        Self { pattern }
    }

    pub fn is_greeting(&self, question: &str) -> bool {
        self.pattern.is_match(question)
    }
}

impl Default for SmallTalk {
    fn default() -> Self {
        Self::new()
    }
}

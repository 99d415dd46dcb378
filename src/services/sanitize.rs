use regex::Regex;

/// Display line break used in `answer` instead of raw newlines.
pub const LINE_BREAK: &str = "<br>";

/// Cleans generated text for display: drops URLs, citation lines and
/// "(see ...)" asides, trims trailing whitespace before line breaks, then
/// converts newlines to [`LINE_BREAK`]. The transform is idempotent.
pub struct Sanitizer {
    url: Regex,
    citation_line: Regex,
    see_aside: Regex,
    trailing_ws: Regex,
}

impl Sanitizer {
    pub fn new() -> Self {
        Self {
            url: Regex::new(r#"https?://[^\s<>()"']+"#).expect("url pattern is valid"),
            citation_line: Regex::new(r"(?im)^[ \t]*(sources?|citations?|references?)[ \t]*:.*$")
                .expect("citation pattern is valid"),
            see_aside: Regex::new(r"(?i)\([ \t]*see\b[^)]*\)").expect("aside pattern is valid"),
            trailing_ws: Regex::new(r"[ \t]+\n").expect("trailing-ws pattern is valid"),
        }
    }

    pub fn clean(&self, text: &str) -> String {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let no_urls = self.url.replace_all(&normalized, "");
        let no_citations = self.citation_line.replace_all(&no_urls, "");
        let no_asides = self.see_aside.replace_all(&no_citations, "");
        let tidy = self.trailing_ws.replace_all(&no_asides, "\n");
        tidy.trim().replace('\n', LINE_BREAK)
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

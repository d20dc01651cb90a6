//! Best-effort candidate name recovery from report text.
//!
//! Naive regex matches frequently capture heading text ("Your Top 5 Signature
//! Themes") rather than a real name, so every candidate goes through a shared
//! acceptance filter before it is believed. Failure to find a name is never an
//! error — callers get an empty string.

use std::sync::LazyLock;

use regex::Regex;

use crate::reference::themes::is_known_theme;

/// Report boilerplate vocabulary. A candidate containing any of these words
/// is heading text, not a person.
const STOPWORDS: [&str; 34] = [
    "your", "top", "signature", "theme", "themes", "report", "reports", "strength", "strengths",
    "strengthsfinder", "cliftonstrengths", "clifton", "gallup", "assessment", "results", "result",
    "insight", "insights", "guide", "section", "summary", "domain", "domains", "talent", "talents",
    "profile", "candidate", "participant", "employee", "name", "date", "page", "copyright",
    "reserved",
];

/// Only this much of the document is searched for standalone name lines.
const HEADER_WINDOW: usize = 600;

static POSSESSIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([A-Z][A-Za-z'.\-]+(?:[ \t]+[A-Z][A-Za-z'.\-]+){0,3})(?:'|’)s[ \t]+(?i:signature|top|cliftonstrengths|strengthsfinder)",
    )
    .unwrap()
});

static REPORT_FOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i:report|prepared|results)[ \t]+(?i:for)[: \t]+([A-Z][A-Za-z'.\-]+(?:[ \t]+[A-Z][A-Za-z'.\-]+){0,3})",
    )
    .unwrap()
});

static PIPE_FOOTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([A-Z][A-Za-z'.\-]+(?:[ \t]+[A-Z][A-Za-z'.\-]+){0,3})[ \t]*\|[ \t]*(?i:cliftonstrengths|gallup|strengthsfinder)",
    )
    .unwrap()
});

static LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?i:name|candidate|participant|employee)[ \t]*:[ \t]*([^\r\n]{2,60})")
        .unwrap()
});

static CAPS_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Z][A-Z'.\-]+(?:[ \t]+[A-Z][A-Z'.\-]+){1,3})[ \t]*$").unwrap()
});

static TITLE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Z][a-z'.\-]+(?:[ \t]+[A-Z][a-z'.\-]+){1,3})[ \t]*$").unwrap()
});

/// Try each pattern in order and return the first candidate that survives the
/// acceptance filter, or an empty string.
pub fn guess_candidate_name(text: &str) -> String {
    let header = header_window(text);

    let attempts: [Option<String>; 6] = [
        POSSESSIVE.captures(text).map(|c| c[1].to_string()),
        REPORT_FOR.captures(text).map(|c| c[1].to_string()),
        PIPE_FOOTER.captures(text).map(|c| c[1].to_string()),
        LABELED.captures(text).map(|c| c[1].to_string()),
        CAPS_RUN.captures(header).map(|c| title_case(&c[1])),
        TITLE_LINE.captures(header).map(|c| c[1].to_string()),
    ];

    for candidate in attempts.into_iter().flatten() {
        if let Some(name) = accept(&candidate) {
            return name;
        }
    }

    String::new()
}

fn header_window(text: &str) -> &str {
    let mut end = HEADER_WINDOW.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// The acceptance gate: 1-4 words, no boilerplate stopwords, and never a bare
/// theme name.
fn accept(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim().trim_end_matches(['.', ',']);
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if words.is_empty() || words.len() > 4 {
        return None;
    }
    for word in &words {
        let bare = word.trim_matches(|c: char| !c.is_alphanumeric());
        if STOPWORDS.contains(&bare.to_lowercase().as_str()) {
            return None;
        }
    }
    if is_known_theme(trimmed) {
        return None;
    }
    Some(trimmed.to_string())
}

fn title_case(words: &str) -> String {
    words
        .split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn possessive_pattern() {
        let text = "Jordan Smith's Signature Themes\nCliftonStrengths 34";
        assert_eq!(guess_candidate_name(text), "Jordan Smith");
    }

    #[test]
    fn report_for_pattern() {
        let text = "Gallup CliftonStrengths\nReport for Alex Rivera\n1. Strategic";
        assert_eq!(guess_candidate_name(text), "Alex Rivera");
    }

    #[test]
    fn pipe_footer_pattern() {
        let text = "page content here\nMaria Souza | CliftonStrengths Top 5\n";
        assert_eq!(guess_candidate_name(text), "Maria Souza");
    }

    #[test]
    fn labeled_pattern() {
        let text = "Assessment summary\nParticipant: Sam O'Neill\nDate: 2024-02-01";
        assert_eq!(guess_candidate_name(text), "Sam O'Neill");
    }

    #[test]
    fn caps_run_is_title_cased() {
        let text = "CliftonStrengths\nJORDAN SMITH\nYour results follow below in detail.";
        assert_eq!(guess_candidate_name(text), "Jordan Smith");
    }

    #[test]
    fn title_case_line_in_header() {
        let text = "Priya Natarajan\nAn overview of what makes you stand out\n";
        assert_eq!(guess_candidate_name(text), "Priya Natarajan");
    }

    #[test]
    fn heading_text_is_rejected() {
        // Matches the possessive pattern shape but is all boilerplate.
        let text = "Gallup's Signature Themes overview\nYOUR TOP FIVE\nNothing personal here at all.";
        assert_eq!(guess_candidate_name(text), "");
    }

    #[test]
    fn bare_theme_name_is_rejected() {
        let text = "Strategic\nSome descriptive paragraph about this theme follows here.";
        assert_eq!(guess_candidate_name(text), "");
    }

    #[test]
    fn stopword_in_labeled_value_is_rejected() {
        let text = "Name: Your Report\nOther content";
        assert_eq!(guess_candidate_name(text), "");
    }

    #[test]
    fn no_name_yields_empty_string() {
        let text = "a lowercase document with nothing that looks like a person anywhere in it";
        assert_eq!(guess_candidate_name(text), "");
    }

    #[test]
    fn earlier_patterns_take_priority() {
        let text = "Casey Lee's Top 5\nParticipant: Someone Else\n";
        assert_eq!(guess_candidate_name(text), "Casey Lee");
    }
}

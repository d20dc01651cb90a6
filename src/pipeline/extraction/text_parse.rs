use std::sync::LazyLock;

use regex::Regex;

use super::name_guess::guess_candidate_name;
use super::types::{rerank, ExtractedStrength, PdfTextSource, StrengthExtraction};
use super::ExtractionError;
use crate::reference::themes::{is_known_theme, THEME_NAMES};

/// Text shorter than this cannot be a real report.
const MIN_TEXT_LENGTH: usize = 50;

/// Without any marker phrase, at least this many vocabulary names must appear
/// verbatim for the document to count as a report.
const MIN_THEMES_FOR_REPORT: usize = 3;

/// Below this many explicit rank-marker hits, the positional fallback runs.
const MIN_RANKED_MATCHES: usize = 5;

const MAX_THEMES: usize = 34;
const DESCRIPTION_WINDOW: usize = 500;
const DESCRIPTION_CAP: usize = 300;

/// Case-insensitive phrases that identify a CliftonStrengths report.
const MARKER_PHRASES: [&str; 6] = [
    "cliftonstrengths",
    "strengthsfinder",
    "gallup",
    "signature theme",
    "your top",
    "dominant theme",
];

/// Line-start rank markers: "1. Strategic", "2) Achiever", "3 - Empathy".
static RANK_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(\d{1,2})\s*[.\-)]\s*([\w-]+)").unwrap());

/// First substantial run of text after a theme name, stopping at a blank line
/// or the next numbered-list marker.
static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)[:\-—]?\s*([A-Z].*?)(?:\n\s*\n|\n\s*\d{1,2}\s*[.\-)])").unwrap()
});

/// Run the text-based strategy end to end: primitive text extraction, report
/// type check, two rank-recovery heuristics, descriptions, and a best-effort
/// name guess.
pub fn extract_from_text(
    pdf: &dyn PdfTextSource,
    pdf_bytes: &[u8],
) -> Result<StrengthExtraction, ExtractionError> {
    let text = pdf.extract_text(pdf_bytes)?;

    if text.trim().len() < MIN_TEXT_LENGTH {
        return Err(ExtractionError::DocumentUnreadable(
            "the PDF appears to be empty or contains very little text".into(),
        ));
    }

    parse_report_text(&text)
}

/// Parse already-extracted report text. Deterministic: identical input yields
/// identical output.
pub fn parse_report_text(text: &str) -> Result<StrengthExtraction, ExtractionError> {
    let lower = text.to_lowercase();
    let has_marker = MARKER_PHRASES.iter().any(|m| lower.contains(m));
    let themes_present = THEME_NAMES.iter().filter(|t| text.contains(*t)).count();

    // Refuse to "succeed" on unrelated PDFs.
    if !has_marker && themes_present < MIN_THEMES_FOR_REPORT {
        return Err(ExtractionError::WrongDocumentType);
    }

    let mut strengths: Vec<ExtractedStrength> = Vec::new();

    // Primary strategy: explicit rank markers. First occurrence of a name wins.
    for caps in RANK_MARKER.captures_iter(text) {
        let rank: u32 = match caps[1].parse() {
            Ok(r) => r,
            Err(_) => continue,
        };
        let name = &caps[2];
        if (1..=MAX_THEMES as u32).contains(&rank)
            && is_known_theme(name)
            && !strengths.iter().any(|s| s.name == name)
        {
            strengths.push(ExtractedStrength {
                rank,
                name: name.to_string(),
                description: String::new(),
            });
        }
    }

    // Fallback strategy: order of first appearance. Additive — names already
    // recovered by rank markers are kept and not overwritten.
    if strengths.len() < MIN_RANKED_MATCHES {
        tracing::debug!(
            ranked = strengths.len(),
            "few explicit rank markers, using positional ordering"
        );
        let mut positions: Vec<(usize, &str)> = THEME_NAMES
            .iter()
            .filter_map(|t| text.find(t).map(|i| (i, *t)))
            .collect();
        positions.sort_by_key(|(offset, _)| *offset);

        let mut rank = 1;
        for (_, name) in positions {
            if !strengths.iter().any(|s| s.name == name) {
                strengths.push(ExtractedStrength {
                    rank,
                    name: name.to_string(),
                    description: String::new(),
                });
                rank += 1;
            }
        }
    }

    rerank(&mut strengths);

    for strength in &mut strengths {
        strength.description = extract_description(text, &strength.name);
    }

    if strengths.is_empty() {
        return Err(ExtractionError::NoStrengthsFound);
    }

    strengths.truncate(MAX_THEMES);

    Ok(StrengthExtraction {
        strengths,
        extracted_name: guess_candidate_name(text),
    })
}

/// Capture up to 300 characters of description following the first occurrence
/// of a theme name. Missing description is acceptable.
fn extract_description(text: &str, name: &str) -> String {
    let Some(idx) = text.find(name) else {
        return String::new();
    };
    let start = idx + name.len();
    let mut end = (start + DESCRIPTION_WINDOW).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let window = &text[start..end];

    match DESCRIPTION.captures(window) {
        Some(caps) => {
            let collapsed = caps[1].split_whitespace().collect::<Vec<_>>().join(" ");
            collapsed.chars().take(DESCRIPTION_CAP).collect()
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::extraction::types::{FailingTextSource, StaticTextSource};

    fn names(result: &StrengthExtraction) -> Vec<&str> {
        result.strengths.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn numbered_list_round_trip() {
        let text = "CliftonStrengths\n1. Strategic\n2. Achiever\n3. Empathy\n4. Learner\n5. Focus";
        let result = parse_report_text(text).unwrap();
        assert_eq!(names(&result), vec!["Strategic", "Achiever", "Empathy", "Learner", "Focus"]);
        let ranks: Vec<u32> = result.strengths.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn ranks_are_contiguous_even_with_source_gaps() {
        let text = "Gallup report\n2. Strategic\n5. Achiever\n9. Empathy\n12. Learner\n30. Focus";
        let result = parse_report_text(text).unwrap();
        assert_eq!(
            result.strengths.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(result.strengths[0].name, "Strategic");
        assert_eq!(result.strengths[4].name, "Focus");
    }

    #[test]
    fn duplicate_rank_markers_keep_first_occurrence() {
        let text = "CliftonStrengths\n1. Strategic\n2. Achiever\n3. Empathy\n4. Learner\n5. Focus\n7. Strategic";
        let result = parse_report_text(text).unwrap();
        assert_eq!(names(&result).iter().filter(|n| **n == "Strategic").count(), 1);
        assert_eq!(result.strengths[0].name, "Strategic");
    }

    #[test]
    fn positional_fallback_orders_by_first_occurrence() {
        // No numbered list at all, but a marker phrase and theme names in
        // running prose.
        let text = "Your CliftonStrengths signature theme report.\n\n\
                    Your Empathy helps you sense feelings. Your Strategic mind sorts \
                    through clutter. With Learner you love the journey from ignorance \
                    to competence. Focus keeps you on track. Achiever drives you.";
        let result = parse_report_text(text).unwrap();
        assert_eq!(
            names(&result),
            vec!["Empathy", "Strategic", "Learner", "Focus", "Achiever"]
        );
        assert_eq!(result.strengths[0].rank, 1);
    }

    #[test]
    fn strategies_are_additive_with_marker_findings_first() {
        // Two explicit markers (below the confidence threshold), remaining
        // themes picked up positionally; a marker entry beats a positional
        // entry carrying the same raw rank.
        let text = "CliftonStrengths\n1. Strategic\n2. Achiever\n\n\
                    Empathy and Learner also appear, then Focus.";
        let result = parse_report_text(text).unwrap();
        assert_eq!(
            names(&result),
            vec!["Strategic", "Empathy", "Achiever", "Learner", "Focus"]
        );
        let ranks: Vec<u32> = result.strengths.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn wrong_document_type_without_markers_or_themes() {
        let text = "Quarterly financial summary for the board of directors. Revenue \
                    grew by twelve percent across all regions during the period.";
        let result = parse_report_text(text);
        assert!(matches!(result, Err(ExtractionError::WrongDocumentType)));
    }

    #[test]
    fn three_theme_names_pass_without_marker_phrase() {
        let text = "A document that never names the product but mentions Empathy, \
                    Strategic and Learner in passing, which is enough evidence.";
        let result = parse_report_text(text).unwrap();
        assert!(!result.strengths.is_empty());
    }

    #[test]
    fn descriptions_are_captured_and_capped() {
        let long_tail = "X".repeat(350);
        let text = format!(
            "Gallup CliftonStrengths signature theme report\n\n\
             Empathy\nYou can sense the feelings of the people around you as \
             though they were your own.\n\n\
             Strategic\nThe Strategic theme enables you to sort through the \
             clutter and find the best route forward. {long_tail}\n\n\
             Learner\nYou love the process of learning itself.\n\n\
             Focus\nYou need a clear destination before you start moving.\n\n\
             Achiever\nYour relentless drive is always on."
        );
        let result = parse_report_text(&text).unwrap();
        let empathy = result.strengths.iter().find(|s| s.name == "Empathy").unwrap();
        assert!(empathy.description.starts_with("You can sense"));
        let strategic = result.strengths.iter().find(|s| s.name == "Strategic").unwrap();
        assert!(strategic.description.starts_with("The Strategic theme"));
        assert_eq!(strategic.description.chars().count(), 300);
    }

    #[test]
    fn missing_description_is_empty_not_error() {
        let text = "CliftonStrengths report for the assessment taker\n1. Strategic";
        let result = parse_report_text(text).unwrap();
        assert_eq!(result.strengths.len(), 1);
        assert!(result.strengths[0].description.is_empty());
    }

    #[test]
    fn deterministic_across_runs() {
        let text = "Gallup CliftonStrengths\n1. Strategic\n2. Achiever\n3. Empathy";
        let first = parse_report_text(text).unwrap();
        let second = parse_report_text(text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn all_names_come_from_vocabulary() {
        // "11. Binge" looks like a rank marker but is not a theme.
        let text = "CliftonStrengths\n1. Strategic\n2. Achiever\n3. Empathy\n11. Binge\n12. Learner\n13. Focus";
        let result = parse_report_text(text).unwrap();
        for s in &result.strengths {
            assert!(is_known_theme(&s.name), "{} escaped the vocabulary gate", s.name);
        }
    }

    #[test]
    fn short_text_is_unreadable() {
        let source = StaticTextSource("too short".into());
        let result = extract_from_text(&source, b"unused");
        assert!(matches!(result, Err(ExtractionError::DocumentUnreadable(_))));
    }

    #[test]
    fn primitive_failure_propagates_as_unreadable() {
        let result = extract_from_text(&FailingTextSource, b"unused");
        assert!(matches!(result, Err(ExtractionError::DocumentUnreadable(_))));
    }

    #[test]
    fn result_never_exceeds_34_entries() {
        let mut text = String::from("CliftonStrengths full report\n");
        for (i, name) in THEME_NAMES.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", i + 1, name));
        }
        let result = parse_report_text(&text).unwrap();
        assert_eq!(result.strengths.len(), 34);
        assert_eq!(result.strengths[33].rank, 34);
    }
}

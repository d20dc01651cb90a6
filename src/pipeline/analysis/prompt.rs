//! Prompt assembly for the role-matching analysis.
//!
//! The instructional template is fixed and carries no per-request data; the
//! per-request section carries only the candidate's name, ranked strengths,
//! and chosen track. Keeping the two apart makes the separation testable.

use std::fmt::Write as _;
use std::sync::LazyLock;

use crate::pipeline::extraction::ExtractedStrength;
use crate::reference::themes::{domain_of, Domain, THEME_NAMES};
use crate::reference::tracks::{Track, TRACKS};
use crate::reference::roles::ROLES;

/// Upper bound on the combined prompt, checked before any network call.
pub const MAX_PROMPT_CHARS: usize = 50_000;

/// Fixed instructional template: coach persona, domain taxonomy, the full
/// role catalog, the track-to-role table, and the strict output schema. Built
/// once from the reference tables so the prompt can never drift from them.
pub static SYSTEM_PROMPT: LazyLock<String> = LazyLock::new(build_system_prompt);

const PERSONA: &str = "Role: You are an expert CliftonStrengths Coach and Talent Development Executive \
who specializes in mapping talent DNA to technology consulting careers at Accenture. You combine \
deep knowledge of Gallup's 34 themes with real-world understanding of what each Accenture \
technology role actually demands day-to-day.";

const TASK: &str = r#"YOUR TASK

Analyze this person's strengths against the roles above. Rank ALL roles by fit and return the
top matches. Be exhaustive: every free-text field should be LONG, multi-paragraph, concrete,
and specific to THIS candidate's profile. For every role in topRoleMatches, "dayInTheLife" must
be a vivid second-person narrative of a typical day in that role for this candidate, showing
where their strengths shine and where they will strain.

People CAN move between tracks over time: flag strong fits outside the chosen track in
topRolesOutsideTrack as future growth paths rather than mixing them into topRoleMatches.

Respond ONLY in valid JSON matching this shape:

{
  "strengthDomains": {
    "executing": [],
    "influencing": [],
    "relationshipBuilding": [],
    "strategicThinking": [],
    "dominantDomain": "",
    "secondaryDomain": ""
  },
  "topRoleMatches": [{
    "rank": 1,
    "role": "",
    "fitScore": 0,
    "fitTier": "Exceptional Fit | Strong Fit | Good Fit | Moderate Fit | Developing Fit",
    "withinCurrentTrack": true,
    "matchReason": "",
    "strengthAlignments": [{ "strength": "", "relevance": "" }],
    "dayInTheLife": "",
    "growthTip": ""
  }],
  "topRolesOutsideTrack": [{
    "role": "",
    "fitScore": 0,
    "fitTier": "",
    "currentTrack": "",
    "naturalTrack": "",
    "explanation": ""
  }],
  "teamComplementarity": {
    "yourContribution": "",
    "seekInTeammates": [],
    "idealTeamComposition": ""
  },
  "developmentPlan": [{ "gap": "", "risk": "", "action": "" }],
  "quickSummary": ""
}"#;

fn themes_in(domain: Domain) -> Vec<&'static str> {
    THEME_NAMES
        .iter()
        .copied()
        .filter(|name| domain_of(name) == domain)
        .collect()
}

fn build_system_prompt() -> String {
    let mut prompt = String::with_capacity(16 * 1024);
    prompt.push_str(PERSONA);
    prompt.push_str("\n\n---\n\nREFERENCE: THE 4 GALLUP DOMAINS\n\n");
    for domain in [
        Domain::Executing,
        Domain::Influencing,
        Domain::RelationshipBuilding,
        Domain::StrategicThinking,
    ] {
        let _ = writeln!(prompt, "- {}: {}", domain.as_str(), themes_in(domain).join(", "));
    }

    prompt.push_str("\n---\n\nREFERENCE: THE ACCENTURE TECHNOLOGY ROLES\n\n");
    prompt.push_str(
        "For each role below, use YOUR expertise as a CliftonStrengths Coach to judge which \
         strengths are most critical, which combinations create the strongest fit, and which \
         bottom-ranked strengths would be red flags, based on the day-to-day responsibilities \
         described.\n\n",
    );
    let mut current_domain = None;
    for role in &ROLES {
        if current_domain != Some(role.domain) {
            current_domain = Some(role.domain);
            let _ = writeln!(prompt, "### {}\n", role.domain.as_str());
        }
        let _ = writeln!(prompt, "- **{}** — {}", role.name, role.description);
    }

    prompt.push_str("\n---\n\nREFERENCE: TRACK-TO-ROLE MAPPING\n\n");
    prompt.push_str("Roles most naturally accessible from each graduate track:\n\n");
    for track in &TRACKS {
        let _ = writeln!(prompt, "- {}: {}", track.title, track.accessible_roles.join(", "));
    }

    prompt.push_str("\n---\n\n");
    prompt.push_str(TASK);
    prompt
}

/// The per-request section: who the candidate is, their ranked strengths
/// (with report descriptions where the extractor recovered them), and the
/// track they chose.
pub fn build_user_section(
    name: &str,
    strengths: &[ExtractedStrength],
    track: &Track,
) -> String {
    let mut section = String::with_capacity(2 * 1024);
    let _ = writeln!(section, "Candidate name: {name}");
    section.push_str("\nMy CliftonStrengths (ranked):\n");
    for s in strengths {
        if s.description.is_empty() {
            let _ = writeln!(section, "{}. {}", s.rank, s.name);
        } else {
            let _ = writeln!(section, "{}. {}: {}", s.rank, s.name, s.description);
        }
    }
    let _ = writeln!(section, "\nMy selected track: {}", track.title);
    let _ = writeln!(
        section,
        "Roles accessible from this track: {}",
        track.accessible_roles.join(", ")
    );
    section
}

/// Combine template and per-request section into the final prompt.
pub fn build_analysis_prompt(
    name: &str,
    strengths: &[ExtractedStrength],
    track: &Track,
) -> String {
    format!("{}\n\n---\n\n{}", *SYSTEM_PROMPT, build_user_section(name, strengths, track))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::tracks::{track_for, TrackId};

    fn sample_strengths() -> Vec<ExtractedStrength> {
        vec![
            ExtractedStrength {
                rank: 1,
                name: "Strategic".into(),
                description: "You create alternative ways to proceed.".into(),
            },
            ExtractedStrength {
                rank: 2,
                name: "Achiever".into(),
                description: String::new(),
            },
        ]
    }

    #[test]
    fn template_covers_all_roles_and_tracks() {
        for role in &ROLES {
            assert!(SYSTEM_PROMPT.contains(role.name), "missing role {}", role.name);
        }
        for track in &TRACKS {
            assert!(SYSTEM_PROMPT.contains(track.title), "missing track {}", track.title);
        }
        assert!(SYSTEM_PROMPT.contains("Relationship Building: "));
        assert!(SYSTEM_PROMPT.contains("\"topRoleMatches\""));
    }

    #[test]
    fn template_carries_no_request_data() {
        assert!(!SYSTEM_PROMPT.contains("Candidate name:"));
        assert!(!SYSTEM_PROMPT.contains("My selected track:"));
    }

    #[test]
    fn user_section_lists_strengths_with_optional_descriptions() {
        let track = track_for(TrackId::ModernEngineering);
        let section = build_user_section("Alex Rivera", &sample_strengths(), track);
        assert!(section.contains("Candidate name: Alex Rivera"));
        assert!(section.contains("1. Strategic: You create alternative ways to proceed."));
        assert!(section.contains("2. Achiever\n"));
        assert!(section.contains("My selected track: Modern Engineering"));
        assert!(section.contains("Full Stack Engineer"));
    }

    #[test]
    fn combined_prompt_is_well_under_the_bound() {
        let track = track_for(TrackId::TechDelivery);
        let prompt = build_analysis_prompt("Alex Rivera", &sample_strengths(), track);
        assert!(prompt.len() < MAX_PROMPT_CHARS);
        assert!(prompt.starts_with(PERSONA));
        assert!(prompt.ends_with(&build_user_section(
            "Alex Rivera",
            &sample_strengths(),
            track
        )));
    }
}

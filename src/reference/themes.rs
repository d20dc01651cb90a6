use serde::{Deserialize, Serialize};

/// All 34 official CliftonStrengths theme names. This is a closed vocabulary:
/// any extracted name outside this list is invalid and must be dropped.
pub const THEME_NAMES: [&str; 34] = [
    "Achiever",
    "Activator",
    "Adaptability",
    "Analytical",
    "Arranger",
    "Belief",
    "Command",
    "Communication",
    "Competition",
    "Connectedness",
    "Consistency",
    "Context",
    "Deliberative",
    "Developer",
    "Discipline",
    "Empathy",
    "Focus",
    "Futuristic",
    "Harmony",
    "Ideation",
    "Includer",
    "Individualization",
    "Input",
    "Intellection",
    "Learner",
    "Maximizer",
    "Positivity",
    "Relator",
    "Responsibility",
    "Restorative",
    "Self-Assurance",
    "Significance",
    "Strategic",
    "Woo",
];

/// The four Gallup domains, plus a sentinel for names outside the vocabulary.
/// Callers decide whether `Unknown` is acceptable; lookup itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    Executing,
    Influencing,
    #[serde(rename = "Relationship Building")]
    RelationshipBuilding,
    #[serde(rename = "Strategic Thinking")]
    StrategicThinking,
    Unknown,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Executing => "Executing",
            Domain::Influencing => "Influencing",
            Domain::RelationshipBuilding => "Relationship Building",
            Domain::StrategicThinking => "Strategic Thinking",
            Domain::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const EXECUTING: [&str; 9] = [
    "Achiever",
    "Arranger",
    "Belief",
    "Consistency",
    "Deliberative",
    "Discipline",
    "Focus",
    "Responsibility",
    "Restorative",
];

const INFLUENCING: [&str; 8] = [
    "Activator",
    "Command",
    "Communication",
    "Competition",
    "Maximizer",
    "Self-Assurance",
    "Significance",
    "Woo",
];

const RELATIONSHIP_BUILDING: [&str; 9] = [
    "Adaptability",
    "Connectedness",
    "Developer",
    "Empathy",
    "Harmony",
    "Includer",
    "Individualization",
    "Positivity",
    "Relator",
];

const STRATEGIC_THINKING: [&str; 8] = [
    "Analytical",
    "Context",
    "Futuristic",
    "Ideation",
    "Input",
    "Intellection",
    "Learner",
    "Strategic",
];

/// Map a theme name to its Gallup domain. Total over the vocabulary; returns
/// `Domain::Unknown` for unrecognized input rather than failing.
pub fn domain_of(name: &str) -> Domain {
    if EXECUTING.contains(&name) {
        Domain::Executing
    } else if INFLUENCING.contains(&name) {
        Domain::Influencing
    } else if RELATIONSHIP_BUILDING.contains(&name) {
        Domain::RelationshipBuilding
    } else if STRATEGIC_THINKING.contains(&name) {
        Domain::StrategicThinking
    } else {
        Domain::Unknown
    }
}

/// Whether a name belongs to the 34-theme vocabulary.
pub fn is_known_theme(name: &str) -> bool {
    THEME_NAMES.contains(&name)
}

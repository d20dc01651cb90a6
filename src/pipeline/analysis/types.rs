//! Wire schema for the role-matching analysis.
//!
//! The model is instructed to emit exactly this shape. Only the top-level
//! structure is enforced strictly (see the parser); nested fields default
//! leniently so a slightly sloppy reply still deserializes, and free-form
//! narrative text is carried verbatim.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub strength_domains: StrengthDomains,
    pub top_role_matches: Vec<RoleMatch>,
    #[serde(default)]
    pub top_roles_outside_track: Vec<OutsideTrackRole>,
    pub team_complementarity: TeamComplementarity,
    #[serde(default)]
    pub development_plan: Vec<DevelopmentItem>,
    #[serde(default)]
    pub quick_summary: String,
}

/// The candidate's themes grouped by Gallup domain, plus the model's read on
/// which domains dominate the profile.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StrengthDomains {
    #[serde(default)]
    pub executing: Vec<String>,
    #[serde(default)]
    pub influencing: Vec<String>,
    #[serde(default)]
    pub relationship_building: Vec<String>,
    #[serde(default)]
    pub strategic_thinking: Vec<String>,
    #[serde(default)]
    pub dominant_domain: String,
    #[serde(default)]
    pub secondary_domain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMatch {
    #[serde(default)]
    pub rank: u32,
    pub role: String,
    #[serde(default)]
    pub fit_score: f64,
    #[serde(default)]
    pub fit_tier: String,
    #[serde(default)]
    pub within_current_track: bool,
    #[serde(default)]
    pub match_reason: String,
    #[serde(default)]
    pub strength_alignments: Vec<StrengthAlignment>,
    #[serde(default)]
    pub day_in_the_life: String,
    #[serde(default)]
    pub growth_tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthAlignment {
    #[serde(default)]
    pub strength: String,
    #[serde(default)]
    pub relevance: String,
}

/// A strong fit in a different graduate track, flagged as a future growth
/// path rather than an immediate recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutsideTrackRole {
    pub role: String,
    #[serde(default)]
    pub fit_score: f64,
    #[serde(default)]
    pub fit_tier: String,
    #[serde(default)]
    pub current_track: String,
    #[serde(default)]
    pub natural_track: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamComplementarity {
    #[serde(default)]
    pub your_contribution: String,
    #[serde(default)]
    pub seek_in_teammates: Vec<String>,
    #[serde(default)]
    pub ideal_team_composition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentItem {
    #[serde(default)]
    pub gap: String,
    #[serde(default)]
    pub risk: String,
    #[serde(default)]
    pub action: String,
}

use serde::{Deserialize, Serialize};

/// The three graduate entry tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackId {
    TechTransformation,
    TechDelivery,
    ModernEngineering,
}

impl TrackId {
    /// Parse the wire identifier used by callers ("tech_transformation" etc.).
    pub fn parse(id: &str) -> Option<TrackId> {
        match id {
            "tech_transformation" => Some(TrackId::TechTransformation),
            "tech_delivery" => Some(TrackId::TechDelivery),
            "modern_engineering" => Some(TrackId::ModernEngineering),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackId::TechTransformation => "tech_transformation",
            TrackId::TechDelivery => "tech_delivery",
            TrackId::ModernEngineering => "modern_engineering",
        }
    }

    pub const ALL: [TrackId; 3] = [
        TrackId::TechTransformation,
        TrackId::TechDelivery,
        TrackId::ModernEngineering,
    ];
}

/// One career track and the subset of the role catalog it naturally opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub title: &'static str,
    pub summary: &'static str,
    pub accessible_roles: &'static [&'static str],
}

pub const TRACKS: [Track; 3] = [
    Track {
        id: TrackId::TechTransformation,
        title: "Tech Transformation",
        summary: "Client-facing business transformation through technology. You develop the skills to work directly with clients, translate requirements to delivery teams, and coordinate projects.",
        accessible_roles: &[
            "Program/Project Management",
            "Business Analyst",
            "Delivery Lead",
            "Technology Delivery Lead",
            "Scrum Master",
            "Project Control Services Practitioner",
            "Product Owner",
            "Service Management",
            "Solution Architect",
            "Technology Architect",
        ],
    },
    Track {
        id: TrackId::TechDelivery,
        title: "Tech Delivery",
        summary: "End-to-end technology solution design and delivery. You design and deliver solutions, define new business models, and collaborate on proof of concepts for emerging technologies.",
        accessible_roles: &[
            "Technology Architect",
            "Solution Architect",
            "Quality Engineer (Tester)",
            "Test Automation Engineer",
            "Business Analyst",
            "Program/Project Management",
            "Delivery Lead",
            "Scrum Master",
            "DevOps",
            "Cloud Platform Engineer",
            "Application Automation Engineer",
            "Service Management",
            "Product Owner",
        ],
    },
    Track {
        id: TrackId::ModernEngineering,
        title: "Modern Engineering",
        summary: "Hands-on software engineering and platform building. You use programming skills to design and build client applications and identify vulnerabilities or security flaws.",
        accessible_roles: &[
            "Front End Developer",
            "Web Developer",
            "Application Developer",
            "Full Stack Engineer",
            "Infrastructure Engineer",
            "DevOps",
            "Data Engineer",
            "Data Architect",
            "AI / ML Engineer",
            "Cloud Platform Engineer",
            "Application Automation Engineer",
            "Test Automation Engineer",
            "User Experience Engineer",
            "Technology Architect",
        ],
    },
];

/// Look up the static record for a track.
pub fn track_for(id: TrackId) -> &'static Track {
    match id {
        TrackId::TechTransformation => &TRACKS[0],
        TrackId::TechDelivery => &TRACKS[1],
        TrackId::ModernEngineering => &TRACKS[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::roles::role_by_name;

    #[test]
    fn parse_known_ids() {
        for id in TrackId::ALL {
            assert_eq!(TrackId::parse(id.as_str()), Some(id));
        }
        assert_eq!(TrackId::parse("data_science"), None);
        assert_eq!(TrackId::parse(""), None);
    }

    #[test]
    fn track_for_returns_matching_record() {
        for id in TrackId::ALL {
            assert_eq!(track_for(id).id, id);
        }
    }

    #[test]
    fn accessible_roles_resolve_to_catalog() {
        for track in &TRACKS {
            for name in track.accessible_roles {
                assert!(
                    role_by_name(name).is_some(),
                    "{} references unknown role {name}",
                    track.title
                );
            }
        }
    }

    #[test]
    fn accessible_roles_are_unique_per_track() {
        for track in &TRACKS {
            let mut names: Vec<&str> = track.accessible_roles.to_vec();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), track.accessible_roles.len());
        }
    }
}

use serde::{Deserialize, Serialize};

/// The seven role families used to group the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleDomain {
    #[serde(rename = "Research & Design")]
    ResearchAndDesign,
    #[serde(rename = "Development & Engineering")]
    DevelopmentAndEngineering,
    Data,
    #[serde(rename = "Automation & Cloud")]
    AutomationAndCloud,
    Architecture,
    #[serde(rename = "Quality & Testing")]
    QualityAndTesting,
    #[serde(rename = "Delivery & Management")]
    DeliveryAndManagement,
}

impl RoleDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleDomain::ResearchAndDesign => "Research & Design",
            RoleDomain::DevelopmentAndEngineering => "Development & Engineering",
            RoleDomain::Data => "Data",
            RoleDomain::AutomationAndCloud => "Automation & Cloud",
            RoleDomain::Architecture => "Architecture",
            RoleDomain::QualityAndTesting => "Quality & Testing",
            RoleDomain::DeliveryAndManagement => "Delivery & Management",
        }
    }
}

/// One catalog entry. Read-only reference data: consumed as prompt context and
/// as a lookup for display metadata, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub name: &'static str,
    pub domain: RoleDomain,
    pub description: &'static str,
    /// Idealized theme affinities, drawn from the 34-theme vocabulary.
    pub ideal_strengths: &'static [&'static str],
}

pub const ROLES: [Role; 28] = [
    // Research & Design
    Role {
        name: "Researcher",
        domain: RoleDomain::ResearchAndDesign,
        description: "Conducts user research, interviews, surveys, and usability testing to generate insights that inform product and service design.",
        ideal_strengths: &["Analytical", "Input", "Empathy", "Communication", "Learner"],
    },
    Role {
        name: "Interaction Designer",
        domain: RoleDomain::ResearchAndDesign,
        description: "Designs how users interact with digital products — wireframes, prototypes, interaction flows. Focuses on usability, accessibility, and intuitive navigation.",
        ideal_strengths: &["Ideation", "Empathy", "Deliberative", "Strategic", "Individualization"],
    },
    Role {
        name: "Content Designer",
        domain: RoleDomain::ResearchAndDesign,
        description: "Crafts clear, user-centred content across digital services. Structures information architecture, writes UX copy, and ensures consistency.",
        ideal_strengths: &["Communication", "Empathy", "Discipline", "Analytical", "Consistency"],
    },
    Role {
        name: "User Experience Designer",
        domain: RoleDomain::ResearchAndDesign,
        description: "End-to-end UX — research, personas, journey maps, wireframes, prototypes, usability testing. Bridges user needs and business goals.",
        ideal_strengths: &["Empathy", "Ideation", "Strategic", "Communication", "Input"],
    },
    Role {
        name: "User Experience Engineer",
        domain: RoleDomain::ResearchAndDesign,
        description: "Hybrid role bridging UX design and front-end development. Translates designs into functional prototypes and production code.",
        ideal_strengths: &["Analytical", "Learner", "Adaptability", "Ideation", "Achiever"],
    },
    // Development & Engineering
    Role {
        name: "Front End Developer",
        domain: RoleDomain::DevelopmentAndEngineering,
        description: "Builds the client-side of web applications using HTML, CSS, JavaScript and frameworks (React, Angular, Vue). Focuses on performance, responsiveness, and accessibility.",
        ideal_strengths: &["Achiever", "Learner", "Discipline", "Analytical", "Focus"],
    },
    Role {
        name: "Web Developer",
        domain: RoleDomain::DevelopmentAndEngineering,
        description: "Designs, builds, and maintains websites and web applications. Works across front-end and basic back-end.",
        ideal_strengths: &["Achiever", "Learner", "Responsibility", "Adaptability", "Restorative"],
    },
    Role {
        name: "Application Developer",
        domain: RoleDomain::DevelopmentAndEngineering,
        description: "Designs, codes, tests, and maintains software applications across platforms (web, mobile, desktop).",
        ideal_strengths: &["Analytical", "Achiever", "Learner", "Responsibility", "Restorative"],
    },
    Role {
        name: "Full Stack Engineer",
        domain: RoleDomain::DevelopmentAndEngineering,
        description: "Works across front-end and back-end — APIs, databases, server logic, UI. Owns features end-to-end.",
        ideal_strengths: &["Learner", "Strategic", "Achiever", "Self-Assurance", "Adaptability"],
    },
    Role {
        name: "Infrastructure Engineer",
        domain: RoleDomain::DevelopmentAndEngineering,
        description: "Designs, builds, and manages the underlying IT infrastructure — servers, networks, storage, virtualisation.",
        ideal_strengths: &["Analytical", "Responsibility", "Restorative", "Discipline", "Deliberative"],
    },
    Role {
        name: "DevOps",
        domain: RoleDomain::DevelopmentAndEngineering,
        description: "Bridges development and operations — CI/CD pipelines, infrastructure as code, monitoring, automation. Focuses on reliability, speed, and collaboration.",
        ideal_strengths: &["Analytical", "Arranger", "Adaptability", "Achiever", "Learner"],
    },
    Role {
        name: "AI / ML Engineer",
        domain: RoleDomain::DevelopmentAndEngineering,
        description: "Builds and deploys machine learning models and AI systems. Works with data pipelines, model training, evaluation, and production deployment.",
        ideal_strengths: &["Learner", "Analytical", "Ideation", "Futuristic", "Strategic"],
    },
    // Data
    Role {
        name: "Data Engineer",
        domain: RoleDomain::Data,
        description: "Builds and maintains data pipelines, ETL processes, and data infrastructure. Ensures data is clean, accessible, and reliable.",
        ideal_strengths: &["Analytical", "Discipline", "Responsibility", "Arranger", "Focus"],
    },
    Role {
        name: "Data Architect",
        domain: RoleDomain::Data,
        description: "Designs the overall data strategy, data models, schemas, and governance frameworks. Defines how data flows across systems.",
        ideal_strengths: &["Strategic", "Analytical", "Discipline", "Futuristic", "Arranger"],
    },
    // Automation & Cloud
    Role {
        name: "Application Automation Engineer",
        domain: RoleDomain::AutomationAndCloud,
        description: "Automates business processes and application workflows using RPA, scripting, and automation platforms.",
        ideal_strengths: &["Analytical", "Achiever", "Learner", "Strategic", "Focus"],
    },
    Role {
        name: "Cloud Platform Engineer",
        domain: RoleDomain::AutomationAndCloud,
        description: "Designs, deploys, and manages cloud infrastructure (AWS, Azure, GCP). Handles scalability, security, and cost optimisation.",
        ideal_strengths: &["Learner", "Analytical", "Responsibility", "Adaptability", "Futuristic"],
    },
    // Architecture
    Role {
        name: "Technology Architect",
        domain: RoleDomain::Architecture,
        description: "Defines the overall technical vision and architecture for solutions. Makes high-level design choices, sets technical standards, and ensures alignment with business goals.",
        ideal_strengths: &["Strategic", "Futuristic", "Command", "Analytical", "Communication"],
    },
    Role {
        name: "Solution Architect",
        domain: RoleDomain::Architecture,
        description: "Designs end-to-end technical solutions for specific client problems. Bridges business requirements and technical implementation.",
        ideal_strengths: &["Strategic", "Analytical", "Communication", "Ideation", "Arranger"],
    },
    // Quality & Testing
    Role {
        name: "Quality Engineer (Tester)",
        domain: RoleDomain::QualityAndTesting,
        description: "Plans and executes testing strategies — functional, regression, performance, security. Ensures solutions meet quality standards.",
        ideal_strengths: &["Responsibility", "Analytical", "Discipline", "Restorative", "Deliberative"],
    },
    Role {
        name: "Test Automation Engineer",
        domain: RoleDomain::QualityAndTesting,
        description: "Builds automated testing frameworks and scripts. Reduces manual testing effort and increases coverage and reliability.",
        ideal_strengths: &["Analytical", "Achiever", "Discipline", "Learner", "Focus"],
    },
    // Delivery & Management
    Role {
        name: "Program/Project Management",
        domain: RoleDomain::DeliveryAndManagement,
        description: "Plans, coordinates, and oversees technology projects end-to-end. Manages scope, timelines, budgets, risks, and stakeholder expectations.",
        ideal_strengths: &["Arranger", "Responsibility", "Communication", "Achiever", "Strategic"],
    },
    Role {
        name: "Business Analyst",
        domain: RoleDomain::DeliveryAndManagement,
        description: "Bridges business needs and technical solutions. Gathers requirements, maps processes, writes specifications, and facilitates stakeholder alignment.",
        ideal_strengths: &["Analytical", "Communication", "Empathy", "Strategic", "Input"],
    },
    Role {
        name: "Delivery Lead",
        domain: RoleDomain::DeliveryAndManagement,
        description: "Accountable for end-to-end delivery of technology solutions. Leads teams, removes blockers, manages client relationships, and ensures quality and pace.",
        ideal_strengths: &["Command", "Responsibility", "Arranger", "Communication", "Achiever"],
    },
    Role {
        name: "Technology Delivery Lead",
        domain: RoleDomain::DeliveryAndManagement,
        description: "Similar to Delivery Lead but with deeper technical oversight. Ensures technical decisions are sound while managing delivery.",
        ideal_strengths: &["Command", "Strategic", "Analytical", "Responsibility", "Communication"],
    },
    Role {
        name: "Scrum Master",
        domain: RoleDomain::DeliveryAndManagement,
        description: "Facilitates agile ceremonies, coaches teams on agile practices, removes impediments, and shields the team from distractions.",
        ideal_strengths: &["Empathy", "Harmony", "Developer", "Communication", "Adaptability"],
    },
    Role {
        name: "Project Control Services Practitioner",
        domain: RoleDomain::DeliveryAndManagement,
        description: "Manages project financials, forecasting, reporting, risk tracking, and governance. The analytical backbone of project delivery.",
        ideal_strengths: &["Analytical", "Discipline", "Responsibility", "Consistency", "Focus"],
    },
    Role {
        name: "Service Management",
        domain: RoleDomain::DeliveryAndManagement,
        description: "Manages live services and operations — incident management, service levels, continuous improvement. Ensures systems run smoothly post-deployment.",
        ideal_strengths: &["Responsibility", "Restorative", "Consistency", "Discipline", "Arranger"],
    },
    Role {
        name: "Product Owner",
        domain: RoleDomain::DeliveryAndManagement,
        description: "Defines product vision and backlog priorities. Represents the voice of the user/business to the delivery team. Makes trade-off decisions.",
        ideal_strengths: &["Strategic", "Communication", "Command", "Futuristic", "Maximizer"],
    },
];

/// Find a catalog entry by exact name.
pub fn role_by_name(name: &str) -> Option<&'static Role> {
    ROLES.iter().find(|r| r.name == name)
}

/// Group the catalog by role family, preserving catalog order within each.
pub fn roles_by_domain(domain: RoleDomain) -> Vec<&'static Role> {
    ROLES.iter().filter(|r| r.domain == domain).collect()
}

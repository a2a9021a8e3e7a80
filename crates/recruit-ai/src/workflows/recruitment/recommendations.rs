//! Learning recommendations attached to pre-employment candidates.
//!
//! The catalog is a static two-level mapping: domain, then job title, then advice text. The
//! first domain is the default search space when a title has no exact match.

use serde::Serialize;

pub const NO_RECOMMENDATION: &str = "No recommendation available for this job title.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationEntry {
    pub job_title: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationDomain {
    pub name: String,
    pub entries: Vec<RecommendationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationCatalog {
    domains: Vec<RecommendationDomain>,
}

impl RecommendationCatalog {
    pub fn new(domains: Vec<RecommendationDomain>) -> Self {
        Self { domains }
    }

    pub fn standard() -> Self {
        Self::new(
            STANDARD_CATALOG
                .iter()
                .map(|(name, entries)| RecommendationDomain {
                    name: (*name).to_string(),
                    entries: entries
                        .iter()
                        .map(|(job_title, recommendation)| RecommendationEntry {
                            job_title: (*job_title).to_string(),
                            recommendation: (*recommendation).to_string(),
                        })
                        .collect(),
                })
                .collect(),
        )
    }

    pub fn domains(&self) -> &[RecommendationDomain] {
        &self.domains
    }

    pub fn default_domain(&self) -> Option<&RecommendationDomain> {
        self.domains.first()
    }

    /// Exact title match in any domain, then the closest keyword match in the default domain.
    pub fn recommend(&self, job_title: &str) -> &str {
        let wanted = normalize(job_title);

        if let Some(entry) = self
            .domains
            .iter()
            .find_map(|domain| domain.find_exact(&wanted))
        {
            return &entry.recommendation;
        }

        self.default_domain()
            .and_then(|domain| domain.find_by_keywords(&wanted))
            .map(|entry| entry.recommendation.as_str())
            .unwrap_or(NO_RECOMMENDATION)
    }

    /// Search a single domain; unknown or empty domains fall back to the default one.
    pub fn recommend_in(&self, domain: &str, job_title: &str) -> &str {
        let wanted = normalize(job_title);
        let search_space = self
            .domains
            .iter()
            .find(|candidate| candidate.name.eq_ignore_ascii_case(domain.trim()))
            .filter(|candidate| !candidate.entries.is_empty())
            .or_else(|| self.default_domain());

        search_space
            .and_then(|domain| {
                domain
                    .find_exact(&wanted)
                    .or_else(|| domain.find_by_keywords(&wanted))
            })
            .map(|entry| entry.recommendation.as_str())
            .unwrap_or(NO_RECOMMENDATION)
    }
}

impl Default for RecommendationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl RecommendationDomain {
    fn find_exact(&self, wanted: &str) -> Option<&RecommendationEntry> {
        self.entries
            .iter()
            .find(|entry| normalize(&entry.job_title) == wanted)
    }

    /// The entry whose title words all appear in `wanted`; more words is a closer match.
    fn find_by_keywords(&self, wanted: &str) -> Option<&RecommendationEntry> {
        let wanted_words = words(wanted);
        let mut best: Option<(&RecommendationEntry, usize)> = None;

        for entry in &self.entries {
            let entry_words = words(&entry.job_title);
            if entry_words.is_empty()
                || !entry_words.iter().all(|word| wanted_words.contains(word))
            {
                continue;
            }
            if best.map_or(true, |(_, count)| entry_words.len() > count) {
                best = Some((entry, entry_words.len()));
            }
        }

        best.map(|(entry, _)| entry)
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn words(value: &str) -> Vec<String> {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

type CatalogDomain = (&'static str, &'static [(&'static str, &'static str)]);

const STANDARD_CATALOG: &[CatalogDomain] = &[
    (
        "Tech",
        &[
            (
                "Développeur Backend",
                "Strengthen API design and SQL skills: build a REST service with authentication, migrations, and automated tests, then deploy it behind a reverse proxy.",
            ),
            (
                "Développeur React JS",
                "Deepen React fundamentals (hooks, state management, testing with React Testing Library) and ship a small production-grade single page application.",
            ),
            (
                "Ingénieur DevOps",
                "Practice infrastructure as code and CI/CD: containerize an application, write a deployment pipeline, and add monitoring and alerting.",
            ),
            (
                "Designer UI/UX",
                "Build a portfolio case study covering user research, wireframes, and a tested prototype; learn accessibility guidelines (WCAG).",
            ),
            (
                "Chef de Projet IT",
                "Follow an agile project management course (Scrum or Kanban) and run a short project end to end with a backlog, sprint reviews, and a retrospective.",
            ),
            (
                "Professeur d'Informatique",
                "Prepare a structured programming curriculum with hands-on labs and assessments; a teaching certification in computer science is recommended.",
            ),
            (
                "Développeur",
                "Consolidate programming fundamentals: version control, data structures, testing, and at least one complete project published on a public repository.",
            ),
        ],
    ),
    (
        "Santé",
        &[(
            "Infirmier(ère) Diplômé(e) d'État",
            "Complete a supervised clinical placement and refresh emergency care protocols (first aid and life support certifications).",
        )],
    ),
    (
        "Finance",
        &[(
            "Comptable Senior",
            "Master the local accounting standards and an ERP accounting module; practice month-end closing and financial statement preparation.",
        )],
    ),
    (
        "Marketing",
        &[(
            "Spécialiste en Marketing Digital",
            "Earn an analytics and advertising certification and run a small paid campaign, reporting on acquisition costs and conversion.",
        )],
    ),
    (
        "Ressources Humaines",
        &[(
            "Responsable RH",
            "Study labour law and payroll fundamentals and practice structured interviewing and onboarding process design.",
        )],
    ),
];

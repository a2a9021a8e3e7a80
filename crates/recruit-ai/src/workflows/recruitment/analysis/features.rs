use chrono::NaiveDate;
use serde::Serialize;

use super::super::domain::{Candidate, CandidateId, Diploma, Experience, JobOffer};

pub const UNSPECIFIED_JOB_TITLE: &str = "Not specified";
const PRESENT_SENTINEL: &str = "present";
const DATE_FORMAT: &str = "%Y-%m-%d";
const DAYS_PER_YEAR: i64 = 365;

/// A candidate joined with the history rows fetched for it.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSnapshot {
    pub candidate: Candidate,
    pub experiences: Vec<Experience>,
    pub diplomas: Vec<Diploma>,
}

/// Flat per-candidate summary handed to the classifier and returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub candidate_id: CandidateId,
    pub first_name: String,
    pub last_name: String,
    pub experience_titles: Vec<String>,
    pub years_of_experience: i64,
    /// Title of the first listed experience.
    pub job_title: String,
    pub experiences: Vec<Experience>,
    pub diplomas: Vec<Diploma>,
    pub employment_type_match: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    #[error("candidate {candidate}: invalid {field} '{value}', expected YYYY-MM-DD")]
    InvalidDate {
        candidate: String,
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Build one feature record per snapshot, failing on the first malformed date.
pub fn prepare_features(
    snapshots: &[CandidateSnapshot],
    job_offer: &JobOffer,
    today: NaiveDate,
) -> Result<Vec<FeatureRecord>, FeatureError> {
    snapshots
        .iter()
        .map(|snapshot| prepare_record(snapshot, job_offer, today))
        .collect()
}

pub fn prepare_record(
    snapshot: &CandidateSnapshot,
    job_offer: &JobOffer,
    today: NaiveDate,
) -> Result<FeatureRecord, FeatureError> {
    let candidate = &snapshot.candidate;

    let mut years_of_experience = 0;
    for experience in &snapshot.experiences {
        years_of_experience += experience_years(&candidate.id, experience, today)?;
    }

    let experience_titles: Vec<String> = snapshot
        .experiences
        .iter()
        .map(|experience| experience.job_title.clone())
        .collect();

    let employment_type_match = employment_type_matches(&job_offer.employment_type, &experience_titles);

    let job_title = experience_titles
        .first()
        .cloned()
        .unwrap_or_else(|| UNSPECIFIED_JOB_TITLE.to_string());

    Ok(FeatureRecord {
        candidate_id: candidate.id.clone(),
        first_name: candidate.first_name.clone(),
        last_name: candidate.last_name.clone(),
        experience_titles,
        years_of_experience,
        job_title,
        experiences: snapshot.experiences.clone(),
        diplomas: snapshot.diplomas.clone(),
        employment_type_match,
    })
}

/// Whole years spent in one role, floored. Open-ended roles run until `today`.
pub fn experience_years(
    candidate: &CandidateId,
    experience: &Experience,
    today: NaiveDate,
) -> Result<i64, FeatureError> {
    let start = parse_date(candidate, "start_date", &experience.start_date)?;
    let end = match experience.end_date.as_deref().map(str::trim) {
        None | Some("") => today,
        Some(raw) if raw.eq_ignore_ascii_case(PRESENT_SENTINEL) => today,
        Some(raw) => parse_date(candidate, "end_date", raw)?,
    };

    let days = (end - start).num_days();
    Ok(days.div_euclid(DAYS_PER_YEAR))
}

/// Case-insensitive containment of the offer's employment type in any experience title.
pub fn employment_type_matches(employment_type: &str, job_titles: &[String]) -> bool {
    let needle = employment_type.to_lowercase();
    job_titles
        .iter()
        .any(|title| title.to_lowercase().contains(&needle))
}

fn parse_date(
    candidate: &CandidateId,
    field: &'static str,
    raw: &str,
) -> Result<NaiveDate, FeatureError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|source| {
        FeatureError::InvalidDate {
            candidate: candidate.0.clone(),
            field,
            value: raw.to_string(),
            source,
        }
    })
}

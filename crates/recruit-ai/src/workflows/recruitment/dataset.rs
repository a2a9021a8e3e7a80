//! Seed data for the in-memory repositories: a JSON snapshot of offers, candidates, and
//! applications, optionally enriched with an experience CSV export.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{Application, Candidate, CandidateId, Diploma, Experience, JobOffer};

/// A candidate together with the history rows stored alongside the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub diplomas: Vec<Diploma>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecruitmentDataset {
    #[serde(default)]
    pub job_offers: Vec<JobOffer>,
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    #[serde(default)]
    pub applications: Vec<Application>,
}

#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    UnknownCandidate { candidate_id: String, row: usize },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io(err) => write!(f, "failed to read dataset: {}", err),
            DatasetError::Json(err) => write!(f, "invalid dataset JSON: {}", err),
            DatasetError::Csv(err) => write!(f, "invalid experience CSV data: {}", err),
            DatasetError::UnknownCandidate { candidate_id, row } => write!(
                f,
                "experience row {} references unknown candidate '{}'",
                row, candidate_id
            ),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(err) => Some(err),
            DatasetError::Json(err) => Some(err),
            DatasetError::Csv(err) => Some(err),
            DatasetError::UnknownCandidate { .. } => None,
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl RecruitmentDataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Append experiences from a CSV export to the matching candidates.
    ///
    /// Every row must reference a candidate already present in the dataset; the merge is
    /// all-or-nothing. Returns the number of rows merged.
    pub fn merge_experiences_csv<R: Read>(&mut self, reader: R) -> Result<usize, DatasetError> {
        let rows = parse_experience_rows(reader)?;
        let known: HashSet<&CandidateId> = self
            .candidates
            .iter()
            .map(|profile| &profile.candidate.id)
            .collect();

        for (index, (candidate_id, _)) in rows.iter().enumerate() {
            if !known.contains(candidate_id) {
                return Err(DatasetError::UnknownCandidate {
                    candidate_id: candidate_id.0.clone(),
                    row: index + 1,
                });
            }
        }

        let merged = rows.len();
        for (candidate_id, experience) in rows {
            if let Some(profile) = self
                .candidates
                .iter_mut()
                .find(|profile| profile.candidate.id == candidate_id)
            {
                profile.experiences.push(experience);
            }
        }

        Ok(merged)
    }
}

#[derive(Debug, Deserialize)]
struct ExperienceRow {
    candidate_id: String,
    job_title: String,
    company_name: String,
    start_date: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    end_date: Option<String>,
    #[serde(default)]
    description: String,
}

fn parse_experience_rows<R: Read>(reader: R) -> Result<Vec<(CandidateId, Experience)>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<ExperienceRow>() {
        let row = record?;
        rows.push((
            CandidateId(row.candidate_id),
            Experience {
                job_title: row.job_title,
                company_name: row.company_name,
                start_date: row.start_date,
                end_date: row.end_date,
                description: row.description,
            },
        ));
    }

    Ok(rows)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::recruitment::analysis::{
    AnalysisConfig, AnalysisEngine, CandidateClass, CandidateClassifier, CandidateSnapshot,
    ClassifierError, FeatureVector,
};
use crate::workflows::recruitment::dataset::{CandidateProfile, RecruitmentDataset};
use crate::workflows::recruitment::domain::{
    Application, ApplicationId, ApplicationStatus, Candidate, CandidateId, Diploma, Experience,
    JobOffer, JobOfferId, JobStatus, WorkMode,
};
use crate::workflows::recruitment::repository::{
    ApplicationRepository, CandidateRepository, JobOfferRepository, RepositoryError,
};
use crate::workflows::recruitment::service::CandidateAnalysisService;
use crate::workflows::recruitment::store::InMemoryRecruitmentStore;

pub(super) const OFFER_ID: &str = "offer-backend";

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

pub(super) fn job_offer(salary: f64, employment_type: &str) -> JobOffer {
    JobOffer {
        id: JobOfferId(OFFER_ID.to_string()),
        title: "Développeur Backend".to_string(),
        company_name: "Sonatel".to_string(),
        location: "Dakar".to_string(),
        currency: "FCFA".to_string(),
        salary,
        employment_type: employment_type.to_string(),
        status: JobStatus::Active,
        work_mode: WorkMode::FullTime,
        expiration_date: NaiveDate::from_ymd_opt(2024, 12, 31),
        is_deleted: false,
    }
}

pub(super) fn candidate(id: &str, first_name: &str) -> Candidate {
    Candidate {
        id: CandidateId(id.to_string()),
        first_name: first_name.to_string(),
        last_name: "Ndiaye".to_string(),
        email: format!("{id}@example.com"),
    }
}

pub(super) fn experience(job_title: &str, start_date: &str, end_date: Option<&str>) -> Experience {
    Experience {
        job_title: job_title.to_string(),
        company_name: "Orange".to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.map(str::to_string),
        description: "Built and ran production services".to_string(),
    }
}

pub(super) fn diploma() -> Diploma {
    Diploma {
        degree_name: "Licence Informatique".to_string(),
        institution_name: "UCAD".to_string(),
        start_year: 2016,
        end_year: 2019,
    }
}

pub(super) fn snapshot(id: &str, experiences: Vec<Experience>) -> CandidateSnapshot {
    CandidateSnapshot {
        candidate: candidate(id, id),
        experiences,
        diplomas: vec![diploma()],
    }
}

pub(super) fn profile(id: &str, experiences: Vec<Experience>) -> CandidateProfile {
    CandidateProfile {
        candidate: candidate(id, id),
        experiences,
        diplomas: vec![diploma()],
    }
}

pub(super) fn application(id: &str, candidate_id: Option<&str>) -> Application {
    Application {
        id: ApplicationId(id.to_string()),
        candidate_id: candidate_id.map(|value| CandidateId(value.to_string())),
        job_offer_id: JobOfferId(OFFER_ID.to_string()),
        status: ApplicationStatus::Pending,
        is_deleted: false,
    }
}

/// Four applicants with 0, 1, 3, and 6 years of experience as of `today()`.
pub(super) fn dataset() -> RecruitmentDataset {
    RecruitmentDataset {
        job_offers: vec![job_offer(40_000.0, "CDI")],
        candidates: vec![
            profile("cand-junior", Vec::new()),
            profile(
                "cand-one-year",
                vec![experience("Développeur CDI Backend", "2023-01-01", Some("Present"))],
            ),
            profile(
                "cand-mid",
                vec![experience("Analyste", "2020-01-01", Some("2023-03-01"))],
            ),
            profile(
                "cand-senior",
                vec![
                    experience("Développeur Backend", "2016-01-01", Some("2020-01-01")),
                    experience("Lead CDI", "2020-01-01", Some("2022-06-01")),
                ],
            ),
        ],
        applications: vec![
            application("app-1", Some("cand-junior")),
            application("app-2", Some("cand-one-year")),
            application("app-3", Some("cand-mid")),
            application("app-4", Some("cand-senior")),
        ],
    }
}

pub(super) fn store(dataset: RecruitmentDataset) -> Arc<InMemoryRecruitmentStore> {
    Arc::new(InMemoryRecruitmentStore::from_dataset(dataset))
}

pub(super) fn engine(classifier: impl CandidateClassifier + 'static) -> Arc<AnalysisEngine> {
    Arc::new(AnalysisEngine::new(
        AnalysisConfig::default(),
        Arc::new(classifier),
    ))
}

pub(super) type StoreService = CandidateAnalysisService<
    InMemoryRecruitmentStore,
    InMemoryRecruitmentStore,
    InMemoryRecruitmentStore,
>;

pub(super) fn build_service(
    dataset: RecruitmentDataset,
    classifier: impl CandidateClassifier + 'static,
) -> StoreService {
    let store = store(dataset);
    CandidateAnalysisService::new(store.clone(), store.clone(), store, engine(classifier))
}

/// Returns the same class for every row.
pub(super) struct ConstantClassifier(pub(super) CandidateClass);

impl CandidateClassifier for ConstantClassifier {
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<CandidateClass>, ClassifierError> {
        Ok(vec![self.0; rows.len()])
    }
}

/// Replays a scripted sequence of predictions, one per row.
pub(super) struct ScriptedClassifier(pub(super) Vec<CandidateClass>);

impl CandidateClassifier for ScriptedClassifier {
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<CandidateClass>, ClassifierError> {
        Ok(self.0.iter().copied().take(rows.len()).collect())
    }
}

pub(super) struct UnavailableRepository;

impl JobOfferRepository for UnavailableRepository {
    fn fetch(&self, _id: &JobOfferId) -> Result<Option<JobOffer>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

impl ApplicationRepository for UnavailableRepository {
    fn for_job_offer(&self, _id: &JobOfferId) -> Result<Vec<Application>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

impl CandidateRepository for UnavailableRepository {
    fn fetch(&self, _id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn experiences(&self, _id: &CandidateId) -> Result<Vec<Experience>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn diplomas(&self, _id: &CandidateId) -> Result<Vec<Diploma>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) const FOREST_JSON: &str = r#"{
    "name": "test-forest",
    "trees": [
        { "nodes": [
            { "kind": "split", "feature": 0, "threshold": 2.5, "left": 1, "right": 2 },
            { "kind": "leaf", "distribution": [0.1, 0.1, 0.8] },
            { "kind": "split", "feature": 2, "threshold": 0.5, "left": 3, "right": 4 },
            { "kind": "leaf", "distribution": [0.7, 0.2, 0.1] },
            { "kind": "leaf", "distribution": [0.1, 0.8, 0.1] }
        ] },
        { "nodes": [
            { "kind": "split", "feature": 1, "threshold": 600000, "left": 1, "right": 2 },
            { "kind": "leaf", "distribution": [0.3, 0.4, 0.3] },
            { "kind": "leaf", "distribution": [0.6, 0.3, 0.1] }
        ] }
    ]
}"#;

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

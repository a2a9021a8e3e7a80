//! Candidate screening for job offers.
//!
//! Applications are joined with candidate history into feature records, scored by the
//! pre-trained classifier, and split into accepted, pre-employment, and rejected buckets.
//! Pre-employment candidates receive a learning recommendation for their job title.

pub mod analysis;
pub mod dataset;
pub mod domain;
pub mod recommendations;
pub mod repository;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use analysis::{
    AnalysisConfig, AnalysisEngine, AnalysisError, Bucket, CandidateBuckets, CandidateClass,
    CandidateClassifier, CandidateSnapshot, ClassifierError, DecisionForest, FeatureError,
    FeatureRecord, FeatureVector, ModelError, PreEmploymentCandidate,
};
pub use dataset::{CandidateProfile, DatasetError, RecruitmentDataset};
pub use domain::{
    Application, ApplicationId, ApplicationStatus, Candidate, CandidateId, Diploma, Experience,
    JobOffer, JobOfferId, JobStatus, WorkMode,
};
pub use recommendations::{RecommendationCatalog, NO_RECOMMENDATION};
pub use repository::{
    ApplicationRepository, CandidateRepository, JobOfferRepository, RepositoryError,
};
pub use router::{analysis_router, AnalysisState};
pub use service::{AnalysisServiceError, CandidateAnalysisService};
pub use store::InMemoryRecruitmentStore;

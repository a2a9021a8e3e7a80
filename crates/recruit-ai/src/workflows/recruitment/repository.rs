use super::domain::{Application, Candidate, CandidateId, Diploma, Experience, JobOffer, JobOfferId};

/// Read access to job offers.
pub trait JobOfferRepository: Send + Sync {
    fn fetch(&self, id: &JobOfferId) -> Result<Option<JobOffer>, RepositoryError>;
}

/// Read access to applications; `for_job_offer` returns them in submission order.
pub trait ApplicationRepository: Send + Sync {
    fn for_job_offer(&self, id: &JobOfferId) -> Result<Vec<Application>, RepositoryError>;
}

/// Read access to candidate profiles and their history.
pub trait CandidateRepository: Send + Sync {
    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError>;
    fn experiences(&self, id: &CandidateId) -> Result<Vec<Experience>, RepositoryError>;
    fn diplomas(&self, id: &CandidateId) -> Result<Vec<Diploma>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

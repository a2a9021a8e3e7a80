use std::collections::HashMap;

use super::dataset::{CandidateProfile, RecruitmentDataset};
use super::domain::{
    Application, Candidate, CandidateId, Diploma, Experience, JobOffer, JobOfferId,
};
use super::repository::{
    ApplicationRepository, CandidateRepository, JobOfferRepository, RepositoryError,
};

/// Read-only store backing all three repositories from a loaded dataset.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRecruitmentStore {
    job_offers: HashMap<JobOfferId, JobOffer>,
    applications: Vec<Application>,
    candidates: HashMap<CandidateId, CandidateProfile>,
}

impl InMemoryRecruitmentStore {
    pub fn from_dataset(dataset: RecruitmentDataset) -> Self {
        let job_offers = dataset
            .job_offers
            .into_iter()
            .map(|offer| (offer.id.clone(), offer))
            .collect();
        let candidates = dataset
            .candidates
            .into_iter()
            .map(|profile| (profile.candidate.id.clone(), profile))
            .collect();

        Self {
            job_offers,
            applications: dataset.applications,
            candidates,
        }
    }

    pub fn job_offer_count(&self) -> usize {
        self.job_offers.len()
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }
}

impl From<RecruitmentDataset> for InMemoryRecruitmentStore {
    fn from(dataset: RecruitmentDataset) -> Self {
        Self::from_dataset(dataset)
    }
}

impl JobOfferRepository for InMemoryRecruitmentStore {
    fn fetch(&self, id: &JobOfferId) -> Result<Option<JobOffer>, RepositoryError> {
        Ok(self
            .job_offers
            .get(id)
            .filter(|offer| !offer.is_deleted)
            .cloned())
    }
}

impl ApplicationRepository for InMemoryRecruitmentStore {
    fn for_job_offer(&self, id: &JobOfferId) -> Result<Vec<Application>, RepositoryError> {
        Ok(self
            .applications
            .iter()
            .filter(|application| &application.job_offer_id == id)
            .cloned()
            .collect())
    }
}

impl CandidateRepository for InMemoryRecruitmentStore {
    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Ok(self
            .candidates
            .get(id)
            .map(|profile| profile.candidate.clone()))
    }

    fn experiences(&self, id: &CandidateId) -> Result<Vec<Experience>, RepositoryError> {
        Ok(self
            .candidates
            .get(id)
            .map(|profile| profile.experiences.clone())
            .unwrap_or_default())
    }

    fn diplomas(&self, id: &CandidateId) -> Result<Vec<Diploma>, RepositoryError> {
        Ok(self
            .candidates
            .get(id)
            .map(|profile| profile.diplomas.clone())
            .unwrap_or_default())
    }
}

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::analysis::{AnalysisEngine, AnalysisError, CandidateBuckets, CandidateSnapshot};
use super::domain::{Application, JobOfferId};
use super::repository::{
    ApplicationRepository, CandidateRepository, JobOfferRepository, RepositoryError,
};

/// Service composing the three repositories with the analysis engine.
pub struct CandidateAnalysisService<J, A, C> {
    job_offers: Arc<J>,
    applications: Arc<A>,
    candidates: Arc<C>,
    engine: Arc<AnalysisEngine>,
}

impl<J, A, C> CandidateAnalysisService<J, A, C>
where
    J: JobOfferRepository + 'static,
    A: ApplicationRepository + 'static,
    C: CandidateRepository + 'static,
{
    pub fn new(
        job_offers: Arc<J>,
        applications: Arc<A>,
        candidates: Arc<C>,
        engine: Arc<AnalysisEngine>,
    ) -> Self {
        Self {
            job_offers,
            applications,
            candidates,
            engine,
        }
    }

    pub fn engine(&self) -> &AnalysisEngine {
        &self.engine
    }

    /// Bucket every live applicant of a job offer into accepted, pre-employment, or rejected.
    pub fn candidates_status(
        &self,
        job_offer_id: &JobOfferId,
        today: NaiveDate,
    ) -> Result<CandidateBuckets, AnalysisServiceError> {
        let job_offer = self
            .job_offers
            .fetch(job_offer_id)?
            .ok_or_else(|| AnalysisServiceError::JobOfferNotFound(job_offer_id.clone()))?;

        let applications: Vec<Application> = self
            .applications
            .for_job_offer(job_offer_id)?
            .into_iter()
            .filter(|application| !application.is_deleted)
            .collect();
        if applications.is_empty() {
            return Err(AnalysisServiceError::NoApplications(job_offer_id.clone()));
        }

        let snapshots = self.load_snapshots(&applications)?;
        let buckets = self.engine.analyse(&job_offer, &snapshots, today)?;

        info!(
            job_offer = %job_offer_id.0,
            applications = applications.len(),
            accepted = buckets.accepted.len(),
            pre_employment = buckets.pre_employment.len(),
            rejected = buckets.rejected.len(),
            "candidate analysis completed"
        );

        Ok(buckets)
    }

    fn load_snapshots(
        &self,
        applications: &[Application],
    ) -> Result<Vec<CandidateSnapshot>, AnalysisServiceError> {
        let mut snapshots = Vec::with_capacity(applications.len());

        for application in applications {
            let Some(candidate_id) = &application.candidate_id else {
                continue;
            };
            let Some(candidate) = self.candidates.fetch(candidate_id)? else {
                warn!(
                    application = %application.id.0,
                    candidate = %candidate_id.0,
                    "application references a missing candidate"
                );
                continue;
            };

            snapshots.push(CandidateSnapshot {
                experiences: self.candidates.experiences(candidate_id)?,
                diplomas: self.candidates.diplomas(candidate_id)?,
                candidate,
            });
        }

        Ok(snapshots)
    }
}

/// Error raised by the analysis service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error("job offer {0} not found")]
    JobOfferNotFound(JobOfferId),
    #[error("no applications found for job offer {0}")]
    NoApplications(JobOfferId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl AnalysisServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AnalysisServiceError::JobOfferNotFound(_) | AnalysisServiceError::NoApplications(_)
        )
    }
}

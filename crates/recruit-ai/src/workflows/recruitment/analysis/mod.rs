mod classifier;
mod config;
mod features;
mod policy;
mod vectorize;

pub use classifier::{
    CandidateClass, CandidateClassifier, ClassifierError, DecisionForest, DecisionTree,
    ModelError, TreeNode, CLASS_COUNT,
};
pub use config::AnalysisConfig;
pub use features::{
    employment_type_matches, experience_years, prepare_features, CandidateSnapshot,
    FeatureError, FeatureRecord, UNSPECIFIED_JOB_TITLE,
};
pub use policy::{decide_bucket, partition, Bucket, Partition};
pub use vectorize::{floor_salary, vectorize, FeatureVector, FEATURE_COUNT};

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::domain::JobOffer;
use super::recommendations::RecommendationCatalog;

/// Runs preparation, vectorization, classification, and bucketing for one job offer.
pub struct AnalysisEngine {
    config: AnalysisConfig,
    classifier: Arc<dyn CandidateClassifier>,
    catalog: RecommendationCatalog,
}

impl AnalysisEngine {
    pub fn new(config: AnalysisConfig, classifier: Arc<dyn CandidateClassifier>) -> Self {
        Self {
            config,
            classifier,
            catalog: RecommendationCatalog::standard(),
        }
    }

    pub fn with_catalog(mut self, catalog: RecommendationCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn catalog(&self) -> &RecommendationCatalog {
        &self.catalog
    }

    pub fn analyse(
        &self,
        job_offer: &JobOffer,
        snapshots: &[CandidateSnapshot],
        today: NaiveDate,
    ) -> Result<CandidateBuckets, AnalysisError> {
        let records = prepare_features(snapshots, job_offer, today)?;
        let salary = floor_salary(job_offer.salary, self.config.minimum_salary);
        let vectors = vectorize(&records, salary);
        let predictions = self.classifier.predict(&vectors)?;

        debug!(
            job_offer = %job_offer.id.0,
            candidates = records.len(),
            scoring_salary = salary,
            "candidate features scored"
        );

        let Partition {
            accepted,
            pre_employment,
            rejected,
        } = partition(records, &predictions, &self.config)?;

        let pre_employment = pre_employment
            .into_iter()
            .map(|candidate| PreEmploymentCandidate {
                recommendation: self.catalog.recommend(&candidate.job_title).to_string(),
                candidate,
            })
            .collect();

        Ok(CandidateBuckets {
            accepted,
            pre_employment,
            rejected,
        })
    }
}

/// A pre-employment candidate together with the learning path suggested for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreEmploymentCandidate {
    #[serde(flatten)]
    pub candidate: FeatureRecord,
    pub recommendation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateBuckets {
    #[serde(rename = "accepted_candidates")]
    pub accepted: Vec<FeatureRecord>,
    #[serde(rename = "pre_employment_candidates")]
    pub pre_employment: Vec<PreEmploymentCandidate>,
    #[serde(rename = "rejected_candidates")]
    pub rejected: Vec<FeatureRecord>,
}

impl CandidateBuckets {
    pub fn total(&self) -> usize {
        self.accepted.len() + self.pre_employment.len() + self.rejected.len()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Features(#[from] FeatureError),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

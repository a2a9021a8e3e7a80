use serde::Serialize;

use super::classifier::{CandidateClass, ClassifierError};
use super::config::AnalysisConfig;
use super::features::FeatureRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Accepted,
    PreEmployment,
    Rejected,
}

impl Bucket {
    pub const fn label(self) -> &'static str {
        match self {
            Bucket::Accepted => "accepted",
            Bucket::PreEmployment => "pre-employment",
            Bucket::Rejected => "rejected",
        }
    }
}

/// The experience override wins over whatever the model predicted.
pub fn decide_bucket(
    years_of_experience: i64,
    predicted: CandidateClass,
    config: &AnalysisConfig,
) -> Bucket {
    if years_of_experience == config.pre_employment_override_years {
        return Bucket::PreEmployment;
    }

    match predicted {
        CandidateClass::PreEmployment => Bucket::PreEmployment,
        CandidateClass::Rejected => Bucket::Rejected,
        CandidateClass::Accepted => Bucket::Accepted,
    }
}

/// Disjoint buckets preserving the input order within each.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Partition {
    pub accepted: Vec<FeatureRecord>,
    pub pre_employment: Vec<FeatureRecord>,
    pub rejected: Vec<FeatureRecord>,
}

pub fn partition(
    records: Vec<FeatureRecord>,
    predictions: &[CandidateClass],
    config: &AnalysisConfig,
) -> Result<Partition, ClassifierError> {
    if records.len() != predictions.len() {
        return Err(ClassifierError::PredictionCountMismatch {
            expected: records.len(),
            actual: predictions.len(),
        });
    }

    let mut buckets = Partition::default();
    for (record, predicted) in records.into_iter().zip(predictions) {
        match decide_bucket(record.years_of_experience, *predicted, config) {
            Bucket::Accepted => buckets.accepted.push(record),
            Bucket::PreEmployment => buckets.pre_employment.push(record),
            Bucket::Rejected => buckets.rejected.push(record),
        }
    }

    Ok(buckets)
}

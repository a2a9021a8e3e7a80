use serde::Serialize;

use super::features::FeatureRecord;

pub const FEATURE_COUNT: usize = 3;

/// Classifier input row: `[years_of_experience, salary, employment_type_match]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    pub years_of_experience: i64,
    pub salary: f64,
    pub employment_type_match: bool,
}

impl FeatureVector {
    pub fn to_row(&self) -> [f64; FEATURE_COUNT] {
        [
            self.years_of_experience as f64,
            self.salary,
            if self.employment_type_match { 1.0 } else { 0.0 },
        ]
    }
}

pub fn floor_salary(salary: f64, minimum: f64) -> f64 {
    salary.max(minimum)
}

/// One row per record, in record order. The salary column repeats the offer's floored salary.
pub fn vectorize(records: &[FeatureRecord], floored_salary: f64) -> Vec<FeatureVector> {
    records
        .iter()
        .map(|record| FeatureVector {
            years_of_experience: record.years_of_experience,
            salary: floored_salary,
            employment_type_match: record.employment_type_match,
        })
        .collect()
}

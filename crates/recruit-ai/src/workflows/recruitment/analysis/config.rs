use serde::{Deserialize, Serialize};

/// Business rules layered around the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Salary used for scoring never drops below this amount.
    pub minimum_salary: f64,
    /// Candidates with exactly this many years of experience go to pre-employment.
    pub pre_employment_override_years: i64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            minimum_salary: 50_000.0,
            pre_employment_override_years: 1,
        }
    }
}

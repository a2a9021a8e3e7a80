use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use recruit_ai::error::AppError;
use recruit_ai::workflows::recruitment::{
    AnalysisConfig, AnalysisEngine, CandidateAnalysisService, DecisionForest,
    InMemoryRecruitmentStore, RecruitmentDataset,
};
use std::fs::File;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type StoreAnalysisService = CandidateAnalysisService<
    InMemoryRecruitmentStore,
    InMemoryRecruitmentStore,
    InMemoryRecruitmentStore,
>;

/// Where the analysis inputs come from and how candidates are scored.
#[derive(Debug, Clone)]
pub(crate) struct AnalysisSources<'a> {
    pub(crate) model_path: &'a Path,
    pub(crate) dataset_path: &'a Path,
    pub(crate) experiences_csv: Option<&'a Path>,
    pub(crate) minimum_salary: f64,
}

/// Load the model artifact and dataset, then wire the analysis service over an in-memory store.
pub(crate) fn build_analysis_service(
    sources: &AnalysisSources<'_>,
) -> Result<StoreAnalysisService, AppError> {
    let forest = DecisionForest::load(sources.model_path)?;
    let engine = AnalysisEngine::new(
        AnalysisConfig {
            minimum_salary: sources.minimum_salary,
            ..AnalysisConfig::default()
        },
        Arc::new(forest),
    );

    let store = Arc::new(load_store(sources.dataset_path, sources.experiences_csv)?);
    info!(
        job_offers = store.job_offer_count(),
        candidates = store.candidate_count(),
        dataset = %sources.dataset_path.display(),
        "recruitment dataset loaded"
    );

    Ok(CandidateAnalysisService::new(
        store.clone(),
        store.clone(),
        store,
        Arc::new(engine),
    ))
}

pub(crate) fn load_store(
    dataset_path: &Path,
    experiences_csv: Option<&Path>,
) -> Result<InMemoryRecruitmentStore, AppError> {
    let mut dataset = RecruitmentDataset::from_path(dataset_path)?;
    if let Some(path) = experiences_csv {
        let merged = dataset.merge_experiences_csv(File::open(path)?)?;
        info!(rows = merged, csv = %path.display(), "experience export merged");
    }
    Ok(InMemoryRecruitmentStore::from_dataset(dataset))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

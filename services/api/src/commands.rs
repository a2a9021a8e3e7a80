use crate::infra::{build_analysis_service, AnalysisSources};
use chrono::{Local, NaiveDate};
use clap::Args;
use recruit_ai::config::AppConfig;
use recruit_ai::error::AppError;
use recruit_ai::i18n::{translate, Locale, MessageKey};
use recruit_ai::workflows::recruitment::router::CandidatesStatusResponse;
use recruit_ai::workflows::recruitment::{
    CandidateBuckets, FeatureRecord, JobOfferId, RecommendationCatalog,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyseArgs {
    /// Identifier of the job offer whose applicants are analysed
    #[arg(long)]
    pub(crate) job_offer: String,
    /// Dataset JSON file (defaults to APP_DATASET_PATH)
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Model artifact (defaults to APP_MODEL_PATH)
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
    /// Experience CSV export merged into the dataset before analysis
    #[arg(long)]
    pub(crate) experiences_csv: Option<PathBuf>,
    /// Reference date for experience durations (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the HTTP response payload instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Job title to look up
    #[arg(long)]
    pub(crate) title: String,
    /// Restrict the lookup to one domain (unknown domains fall back to the default)
    #[arg(long)]
    pub(crate) domain: Option<String>,
}

#[derive(Debug, Serialize)]
struct AnalyseReport {
    job_offer: String,
    evaluated_on: NaiveDate,
    #[serde(flatten)]
    status: CandidatesStatusResponse,
}

pub(crate) fn run_analyse(args: AnalyseArgs) -> Result<(), AppError> {
    let AnalyseArgs {
        job_offer,
        dataset,
        model,
        experiences_csv,
        today,
        json,
    } = args;

    let config = AppConfig::load()?;
    let model_path = model.unwrap_or(config.analysis.model_path);
    let dataset_path = dataset.unwrap_or(config.analysis.dataset_path);
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let service = build_analysis_service(&AnalysisSources {
        model_path: &model_path,
        dataset_path: &dataset_path,
        experiences_csv: experiences_csv.as_deref(),
        minimum_salary: config.analysis.minimum_salary,
    })?;
    let buckets = service.candidates_status(&JobOfferId(job_offer.clone()), today)?;
    let message = translate(config.analysis.locale, MessageKey::PredictionCompleted);

    if json {
        let report = AnalyseReport {
            job_offer,
            evaluated_on: today,
            status: CandidatesStatusResponse { buckets, message },
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Analysis payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_buckets(&job_offer, today, &buckets, config.analysis.locale);
    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let catalog = RecommendationCatalog::standard();
    let recommendation = match args.domain.as_deref() {
        Some(domain) => catalog.recommend_in(domain, &args.title),
        None => catalog.recommend(&args.title),
    };

    println!("{}", args.title);
    if let Some(domain) = &args.domain {
        println!("Domain: {domain}");
    }
    println!("  {recommendation}");
    Ok(())
}

fn render_buckets(job_offer: &str, today: NaiveDate, buckets: &CandidateBuckets, locale: Locale) {
    println!("Candidate analysis for job offer {job_offer} (evaluated {today})");
    println!(
        "{} applicants: {} accepted | {} pre-employment | {} rejected",
        buckets.total(),
        buckets.accepted.len(),
        buckets.pre_employment.len(),
        buckets.rejected.len()
    );

    println!("\nAccepted");
    render_records(buckets.accepted.iter());

    println!("\nPre-employment");
    if buckets.pre_employment.is_empty() {
        println!("  (none)");
    }
    for entry in &buckets.pre_employment {
        render_record(&entry.candidate);
        println!("      Recommendation: {}", entry.recommendation);
    }

    println!("\nRejected");
    render_records(buckets.rejected.iter());

    println!("\n{}", translate(locale, MessageKey::PredictionCompleted));
}

fn render_records<'a>(records: impl ExactSizeIterator<Item = &'a FeatureRecord>) {
    if records.len() == 0 {
        println!("  (none)");
        return;
    }
    for record in records {
        render_record(record);
    }
}

fn render_record(record: &FeatureRecord) {
    let matched = if record.employment_type_match {
        "matches contract type"
    } else {
        "no contract match"
    };
    println!(
        "  - {} {} ({}): {} | {} years | {}",
        record.first_name,
        record.last_name,
        record.candidate_id.0,
        record.job_title,
        record.years_of_experience,
        matched
    );
}

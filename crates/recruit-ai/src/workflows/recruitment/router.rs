use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::analysis::CandidateBuckets;
use super::domain::JobOfferId;
use super::repository::{ApplicationRepository, CandidateRepository, JobOfferRepository};
use super::service::{AnalysisServiceError, CandidateAnalysisService};
use crate::i18n::{translate, Locale, MessageKey};

/// Shared handler state: the analysis service and the locale for client messages.
pub struct AnalysisState<J, A, C> {
    pub service: Arc<CandidateAnalysisService<J, A, C>>,
    pub locale: Locale,
}

impl<J, A, C> Clone for AnalysisState<J, A, C> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            locale: self.locale,
        }
    }
}

/// Router builder exposing the candidate analysis endpoints.
pub fn analysis_router<J, A, C>(
    service: Arc<CandidateAnalysisService<J, A, C>>,
    locale: Locale,
) -> Router
where
    J: JobOfferRepository + 'static,
    A: ApplicationRepository + 'static,
    C: CandidateRepository + 'static,
{
    Router::new()
        .route(
            "/analyse/applications/:job_offer_id/candidates_status",
            get(candidates_status_handler::<J, A, C>),
        )
        .route(
            "/analyse/recommendations",
            get(recommendation_handler::<J, A, C>),
        )
        .with_state(AnalysisState { service, locale })
}

#[derive(Debug, Serialize)]
pub struct CandidatesStatusResponse {
    #[serde(flatten)]
    pub buckets: CandidateBuckets,
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub title: String,
    #[serde(default)]
    pub domain: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub job_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub recommendation: String,
}

pub(crate) async fn candidates_status_handler<J, A, C>(
    State(state): State<AnalysisState<J, A, C>>,
    Path(job_offer_id): Path<String>,
) -> Response
where
    J: JobOfferRepository + 'static,
    A: ApplicationRepository + 'static,
    C: CandidateRepository + 'static,
{
    let today = Local::now().date_naive();
    candidates_status_response(&state, &JobOfferId(job_offer_id), today)
}

pub(crate) fn candidates_status_response<J, A, C>(
    state: &AnalysisState<J, A, C>,
    job_offer_id: &JobOfferId,
    today: NaiveDate,
) -> Response
where
    J: JobOfferRepository + 'static,
    A: ApplicationRepository + 'static,
    C: CandidateRepository + 'static,
{
    match state.service.candidates_status(job_offer_id, today) {
        Ok(buckets) => {
            let body = CandidatesStatusResponse {
                buckets,
                message: translate(state.locale, MessageKey::PredictionCompleted),
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(AnalysisServiceError::JobOfferNotFound(_)) => not_found(state.locale, MessageKey::OfferNotFound),
        Err(AnalysisServiceError::NoApplications(_)) => {
            not_found(state.locale, MessageKey::NoApplicationsForOffer)
        }
        Err(other) => {
            error!(job_offer = %job_offer_id, error = %other, "candidate analysis failed");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn recommendation_handler<J, A, C>(
    State(state): State<AnalysisState<J, A, C>>,
    Query(query): Query<RecommendationQuery>,
) -> Response
where
    J: JobOfferRepository + 'static,
    A: ApplicationRepository + 'static,
    C: CandidateRepository + 'static,
{
    let catalog = state.service.engine().catalog();
    let recommendation = match query.domain.as_deref() {
        Some(domain) => catalog.recommend_in(domain, &query.title),
        None => catalog.recommend(&query.title),
    }
    .to_string();

    let body = RecommendationResponse {
        job_title: query.title,
        domain: query.domain,
        recommendation,
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

fn not_found(locale: Locale, key: MessageKey) -> Response {
    let payload = json!({
        "detail": translate(locale, key),
        "code": key.key(),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

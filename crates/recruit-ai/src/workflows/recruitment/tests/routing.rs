use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::common::*;
use crate::i18n::Locale;
use crate::workflows::recruitment::analysis::{CandidateClass, DecisionForest};
use crate::workflows::recruitment::domain::JobOfferId;
use crate::workflows::recruitment::router::{
    analysis_router, candidates_status_response, AnalysisState,
};
use crate::workflows::recruitment::service::CandidateAnalysisService;

fn forest_service() -> Arc<StoreService> {
    let forest = DecisionForest::from_json(FOREST_JSON).expect("forest parses");
    Arc::new(build_service(dataset(), forest))
}

#[tokio::test]
async fn candidates_status_returns_buckets_and_localized_message() {
    let state = AnalysisState {
        service: forest_service(),
        locale: Locale::Fr,
    };

    let response = candidates_status_response(&state, &JobOfferId(OFFER_ID.to_string()), today());
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["message"], "La prédiction est complète");
    assert_eq!(body["accepted_candidates"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["pre_employment_candidates"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["rejected_candidates"].as_array().map(Vec::len), Some(1));

    let one_year = &body["pre_employment_candidates"][1];
    assert_eq!(one_year["candidate_id"], "cand-one-year");
    assert_eq!(one_year["years_of_experience"], 1);
    assert_eq!(one_year["employment_type_match"], true);
    assert!(one_year["recommendation"].is_string());
}

#[tokio::test]
async fn unknown_offer_route_returns_translated_not_found() {
    let app = analysis_router(forest_service(), Locale::Fr);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/analyse/applications/offer-missing/candidates_status")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["detail"], "Offre introuvable");
    assert_eq!(body["code"], "offer-not-found");
}

#[tokio::test]
async fn offer_without_applications_returns_english_not_found() {
    let mut data = dataset();
    data.applications.clear();
    let service = Arc::new(build_service(data, ConstantClassifier(CandidateClass::Accepted)));
    let app = analysis_router(service, Locale::En);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/analyse/applications/{OFFER_ID}/candidates_status"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["detail"], "No applications found for this job offer");
    assert_eq!(body["code"], "no-applications-found-for-this-job-offer");
}

#[tokio::test]
async fn repository_outage_is_an_internal_error() {
    let unavailable = Arc::new(UnavailableRepository);
    let service = Arc::new(CandidateAnalysisService::new(
        unavailable.clone(),
        unavailable.clone(),
        unavailable,
        engine(ConstantClassifier(CandidateClass::Accepted)),
    ));
    let app = analysis_router(service, Locale::Fr);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/analyse/applications/{OFFER_ID}/candidates_status"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("database offline")));
}

#[tokio::test]
async fn recommendation_endpoint_searches_the_requested_domain() {
    let app = analysis_router(forest_service(), Locale::Fr);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/analyse/recommendations?title=Comptable%20Senior&domain=Finance")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["job_title"], "Comptable Senior");
    assert_eq!(body["domain"], "Finance");
    assert!(body["recommendation"]
        .as_str()
        .is_some_and(|advice| advice.contains("month-end closing")));
}

#[tokio::test]
async fn recommendation_endpoint_without_domain_omits_it() {
    let app = analysis_router(forest_service(), Locale::Fr);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/analyse/recommendations?title=Astronaute")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert!(body.get("domain").is_none());
    assert_eq!(
        body["recommendation"],
        crate::workflows::recruitment::NO_RECOMMENDATION
    );
}

#[tokio::test]
async fn malformed_experience_date_is_an_internal_error() {
    let mut data = dataset();
    data.candidates[1].experiences[0].start_date = "not-a-date".to_string();
    let state = AnalysisState {
        service: Arc::new(build_service(data, ConstantClassifier(CandidateClass::Accepted))),
        locale: Locale::Fr,
    };

    let response = candidates_status_response(&state, &JobOfferId(OFFER_ID.to_string()), today());

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("cand-one-year") && message.contains("start_date")));
}

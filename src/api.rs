use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::engine::{anon_hash, ScanEngine};
use crate::error::ScanError;
use crate::features::FeatureVector;
use crate::metrics;
use crate::posting::JobPosting;
use crate::verdict::Verdict;

#[derive(Clone)]
pub struct AppState {
    engine: Arc<ScanEngine>,
}

/// Router serving the scan API plus the static form at `/`.
pub fn create_router(engine: ScanEngine) -> Router {
    let state = AppState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .route("/debug/features", post(debug_features))
        .fallback_service(ServeDir::new("assets"))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn analyze(
    State(state): State<AppState>,
    Json(posting): Json<JobPosting>,
) -> Result<Json<Verdict>, ScanError> {
    metrics::record_request();

    match state.engine.scan(&posting) {
        Ok(verdict) => {
            // Never log raw posting text. Only hashed id + derived numbers.
            let id = anon_hash(&format!(
                "{} {}",
                posting.job_title, posting.job_description
            ));
            info!(
                target: "scan",
                %id,
                tier = verdict.verdict.as_str(),
                confidence = verdict.confidence,
                scam_score = verdict.scam_score,
                "verdict issued"
            );
            metrics::record_verdict(verdict.verdict);
            Ok(Json(verdict))
        }
        Err(err) => {
            match &err {
                ScanError::MissingRequiredField(field) => {
                    metrics::record_rejected("missing_field");
                    warn!(
                        target: "scan",
                        field = field.name(),
                        "scan rejected: incomplete input"
                    );
                }
                ScanError::Predictor(source) => {
                    metrics::record_rejected("predictor_unavailable");
                    error!(target: "scan", error = %source, "scan failed: predictor unavailable");
                }
            }
            Err(err)
        }
    }
}

/// Returns the extracted feature vector without scoring. Debug surface for
/// verifying the heuristics against known postings.
async fn debug_features(
    State(state): State<AppState>,
    Json(posting): Json<JobPosting>,
) -> Result<Json<FeatureVector>, ScanError> {
    let features = state.engine.features(&posting)?;
    Ok(Json(features))
}

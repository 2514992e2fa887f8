use axum::{Json, extract::State};
use tracing::info;

use crate::constants::NO_INPUT_RATING;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{PredictRequest, PredictResponse};
use crate::gateway::state::AppState;
use crate::pipeline::{Classifier, Encoder};

/// `POST /predict`: rates one review text.
///
/// Empty or whitespace-only `text` is a 400; collaborator failures surface
/// as a structured 500 body.
#[tracing::instrument(skip_all)]
pub async fn predict_handler<E, C>(
    State(state): State<AppState<E, C>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, GatewayError>
where
    E: Encoder + Send + Sync + 'static,
    C: Classifier + Send + Sync + 'static,
{
    if request.text.trim().is_empty() {
        return Err(GatewayError::EmptyText);
    }

    let rating = state.pipeline.predict(&request.text)?;

    // The sentinel cannot be produced for non-blank input, but never let it
    // escape as a rating.
    if rating == NO_INPUT_RATING {
        return Err(GatewayError::EmptyText);
    }

    info!(rating, text_len = request.text.len(), "Rated review");

    Ok(Json(PredictResponse { rating }))
}

use serde::{Deserialize, Serialize};

/// Body of `POST /predict`.
#[derive(Deserialize, Debug, Clone)]
pub struct PredictRequest {
    /// Review text to rate.
    pub text: String,
}

/// Successful `POST /predict` response: a one-based rating in `{1..5}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PredictResponse {
    pub rating: u8,
}

//! Prediction endpoint

use axum::{extract::State, http::StatusCode};
use ndarray::Array2;
use tracing::error;

use iris_infer::labels::class_name;
use iris_infer::model::NUM_FEATURES;

use crate::state::SharedState;

/// POST /predict - classify one feature vector
///
/// The body is a JSON array of exactly four numbers. Client mistakes
/// (unparseable body, wrong arity) are 400s; a predicted index outside
/// the label table would mean model and table disagree on cardinality
/// and is reported as a 500.
pub async fn predict(
    State(state): State<SharedState>,
    body: String,
) -> Result<String, (StatusCode, String)> {
    let features: Vec<f64> = serde_json::from_str(&body).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("body must be a JSON array of numbers: {}", e),
        )
    })?;

    if features.len() != NUM_FEATURES {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("expected {} features, got {}", NUM_FEATURES, features.len()),
        ));
    }

    // converts shape from (4,) to (1, 4): the predictor is batch-oriented
    let batch = Array2::from_shape_vec((1, NUM_FEATURES), features).map_err(|e| {
        error!("Failed to shape input batch: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to shape input".to_string(),
        )
    })?;

    let indices = state.classifier.predict(&batch).map_err(|e| {
        error!("Prediction failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "prediction failed".to_string(),
        )
    })?;

    let index = indices[0];
    let label = class_name(index).ok_or_else(|| {
        error!("Model predicted class {} outside the label table", index);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "model and label table disagree on class count".to_string(),
        )
    })?;

    Ok(label.to_string())
}

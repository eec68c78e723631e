//! Model artifact persistence
//!
//! The artifact at `models/iris_trained_model.pkl` is the bincode
//! encoding of an [`IrisClassifier`]. Loading validates the label-table
//! contract so that a model/table mismatch surfaces at startup instead
//! of at request time.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::labels::NUM_CLASSES;
use crate::model::classifier::{IrisClassifier, NUM_FEATURES};
use crate::utils::error::{IrisError, Result};

/// File name of the serialized model artifact
pub const MODEL_FILE_NAME: &str = "iris_trained_model.pkl";

/// Default artifact location relative to the working directory
pub const DEFAULT_MODEL_PATH: &str = "models/iris_trained_model.pkl";

/// Load a classifier from a serialized artifact
///
/// Fails if the file is missing, the bytes do not decode, or the model
/// disagrees with the label table on class count or feature arity.
pub fn load_classifier(path: &Path) -> Result<IrisClassifier> {
    if !path.exists() {
        return Err(IrisError::ArtifactNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let classifier: IrisClassifier = bincode::deserialize(&bytes)
        .map_err(|e| IrisError::Serialization(format!("failed to decode model artifact: {}", e)))?;

    if classifier.n_classes() != NUM_CLASSES {
        return Err(IrisError::Model(format!(
            "model predicts {} classes but the label table has {} entries",
            classifier.n_classes(),
            NUM_CLASSES
        )));
    }
    if classifier.n_features() != NUM_FEATURES {
        return Err(IrisError::Model(format!(
            "model expects {} features per sample, this service sends {}",
            classifier.n_features(),
            NUM_FEATURES
        )));
    }

    info!(
        "Loaded model artifact from {} ({} classes, {} features)",
        path.display(),
        classifier.n_classes(),
        classifier.n_features()
    );
    Ok(classifier)
}

/// Serialize a classifier to an artifact file, creating parent
/// directories as needed
pub fn save_classifier(classifier: &IrisClassifier, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let bytes = bincode::serialize(classifier)?;
    fs::write(path, bytes)?;

    info!("Wrote model artifact to {}", path.display());
    Ok(())
}

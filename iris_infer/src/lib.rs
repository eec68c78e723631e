//! # Iris Inference
//!
//! A Rust library for serving a pre-trained iris flower classifier.
//! Covers the full lifecycle around an already-trained model: fetching
//! the serialized artifact from an S3-compatible object store, loading
//! it into memory, and running single-sample predictions.
//!
//! ## Modules
//!
//! - `labels`: the fixed class-label table and checked index lookup
//! - `model`: the linear classifier and artifact persistence
//! - `fetch`: object-store download of the model artifact
//! - `utils`: error and logging plumbing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use iris_infer::model::load_classifier;
//! use iris_infer::labels::class_name;
//!
//! let classifier = load_classifier("models/iris_trained_model.pkl".as_ref())?;
//! let index = classifier.predict_one(&[5.1, 3.5, 1.4, 0.2])?;
//! println!("{}", class_name(index).unwrap());
//! ```

pub mod fetch;
pub mod labels;
pub mod model;
pub mod utils;

// Re-export commonly used items for convenience
pub use fetch::{download_object, FetchConfig};
pub use labels::{class_name, CLASS_NAMES, NUM_CLASSES};
pub use model::{load_classifier, save_classifier, IrisClassifier, NUM_FEATURES};
pub use utils::error::{IrisError, Result};

//! Iris Inference CLI
//!
//! Entry point for the artifact fetcher and for one-shot local
//! predictions against a downloaded model.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use iris_infer::fetch::{self, FetchConfig, DEFAULT_OBJECT_KEY};
use iris_infer::labels::class_name;
use iris_infer::model::{load_classifier, DEFAULT_MODEL_PATH};
use iris_infer::utils::logging::{init_logging, LogConfig};

/// Iris classifier tooling
#[derive(Parser, Debug)]
#[command(name = "iris_infer")]
#[command(version = "0.1.0")]
#[command(about = "Fetch and exercise the trained iris classifier", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download the model artifact from the configured object store
    Fetch {
        /// Path to the connection configuration file
        #[arg(short, long, default_value = "config.json")]
        config: PathBuf,

        /// Directory the artifact is written into
        #[arg(short, long, default_value = "models")]
        output_dir: PathBuf,

        /// Object key to download
        #[arg(short, long, default_value = DEFAULT_OBJECT_KEY)]
        key: String,
    },

    /// Run the classifier on a single feature vector
    Predict {
        /// Path to the model artifact
        #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
        model: PathBuf,

        /// Feature values: sepal length, sepal width, petal length, petal width
        #[arg(num_args = 4, value_names = ["SEPAL_LEN", "SEPAL_WID", "PETAL_LEN", "PETAL_WID"])]
        features: Vec<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::default()
    };
    let _ = init_logging(&log_config);

    match cli.command {
        Commands::Fetch {
            config,
            output_dir,
            key,
        } => {
            cmd_fetch(&config, &output_dir, &key).await?;
        }

        Commands::Predict { model, features } => {
            cmd_predict(&model, &features)?;
        }
    }

    Ok(())
}

async fn cmd_fetch(config_path: &Path, output_dir: &Path, key: &str) -> Result<()> {
    let config = FetchConfig::from_file(config_path)?;
    info!("Using object-store endpoint {}", config.endpoint_url);

    let dest = fetch::download_object(&config, key, output_dir).await?;
    println!(
        "{} {}",
        "Fetched model artifact to".green(),
        dest.display()
    );
    Ok(())
}

fn cmd_predict(model_path: &Path, features: &[f64]) -> Result<()> {
    let classifier = load_classifier(model_path)?;
    let index = classifier.predict_one(features)?;
    let label = class_name(index).ok_or_else(|| {
        anyhow::anyhow!("model predicted class {} outside the label table", index)
    })?;

    println!("{} {}", "Predicted:".cyan().bold(), label);
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::fmt;

/// Minimum basis-vector or edge length for an observation to be considered
/// non-degenerate.
pub const DEGENERATE_LENGTH_THRESHOLD: f64 = 1e-9;
/// Minimum absolute reference-basis determinant for the deformation
/// gradient solve to proceed. Below this the basis is treated as singular.
pub const SINGULAR_DETERMINANT_THRESHOLD: f64 = 1e-12;

/// Runtime configuration for the application.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    /// Decimal digits used when rendering matrices. Display only; full
    /// precision is kept internally.
    #[serde(default = "default_digits")]
    pub digits: usize,
    /// Scalar correction factor applied to the reference configuration in
    /// the coordinate workflow before any basis is built.
    #[serde(default = "default_scale_factor")]
    pub scale: f64,
    /// Named built-in dataset to analyze instead of CLI coordinates.
    #[serde(default)]
    pub dataset: Option<String>,
    /// Flat coordinate list for the two-configuration workflow.
    #[serde(default)]
    pub coords: Option<Vec<f64>>,
}

fn default_digits() -> usize {
    6
}

fn default_scale_factor() -> f64 {
    1.0
}

pub fn load_config() -> Result<Settings> {
    // Try to find the project directory in different ways
    let root_dir = retrieve_project_root();

    let default_config_file = root_dir.join("config/default.toml");
    let local_config = root_dir.join("config/local.toml");

    // Check if local config exists, if not use default
    let config_file = if local_config.exists() {
        local_config
    } else {
        default_config_file
    };

    let settings: Config = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(Environment::with_prefix("strainpath"))
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Error loading configuration: {}", err);
            std::process::exit(1);
        });

    let mut config: Settings = settings.try_deserialize().unwrap_or_else(|err| {
        eprintln!("Error deserializing configuration: {}", err);
        std::process::exit(1);
    });

    // Parse command-line arguments and override values
    let args = CliArgs::parse();

    if let Some(digits) = args.digits {
        config.digits = digits;
    }
    if let Some(scale) = args.scale {
        config.scale = scale;
    }
    if let Some(dataset) = args.dataset {
        config.dataset = Some(dataset);
    }
    if let Some(coords) = args.coords {
        config.coords = Some(coords);
    }

    validate_config(&config);

    Ok(config)
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the STRAINPATH_ROOT_DIR environment variable is set, use it.
/// 3. If the "config" subdirectory is found in the executable directory or any of its parents, use it.
/// If none of these methods work, the function will panic.
fn retrieve_project_root() -> std::path::PathBuf {
    let root_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        // When running through cargo (e.g. cargo run, cargo test)
        std::path::PathBuf::from(manifest_dir)
    } else if let Ok(path) = env::var("STRAINPATH_ROOT_DIR") {
        // Allow explicit configuration via environment variable
        std::path::PathBuf::from(path)
    } else {
        // Fallback: try to find the nearest directory containing a "config" subdirectory
        // Start from the executable directory and walk upward
        let exe_path = env::current_exe().expect("Failed to get current executable path");
        let mut current_dir = exe_path
            .parent()
            .expect("Failed to get executable directory")
            .to_path_buf();
        let mut found = false;

        while !found && current_dir.parent().is_some() {
            if current_dir.join("config").is_dir() {
                found = true;
            } else {
                current_dir = current_dir.parent().unwrap().to_path_buf();
            }
        }

        if found {
            current_dir
        } else {
            panic!("Could not find project root directory");
        }
    };
    root_dir
}

fn validate_config(config: &Settings) {
    assert!(config.scale > 0.0, "Scale factor must be greater than 0");
    assert!(
        config.digits <= 17,
        "More than 17 display digits adds no precision"
    );
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "strainpath - deformation gradients and Green-Lagrange strain from staged observations"
)]
pub struct CliArgs {
    /// Decimal digits for printed matrices. Full precision is kept internally.
    #[arg(short, long)]
    digits: Option<usize>,

    /// Scalar correction factor applied to the reference configuration
    /// before computing, e.g. to undo a known measurement bias.
    #[arg(short, long)]
    scale: Option<f64>,

    /// Analyze a built-in named dataset ("pathway" or "boxes") instead of
    /// supplying coordinates.
    #[arg(long, group = "source")]
    dataset: Option<String>,

    /// Corner coordinates of the reference then deformed lattice, as x y
    /// pairs in the order top-left, bottom-left, bottom-right. Exactly 12
    /// numbers are required.
    #[arg(long, value_parser, num_args = 1.., value_delimiter = ' ', group = "source")]
    coords: Option<Vec<f64>>,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings:
  - Display digits: {}
  - Reference scale factor: {:.6}
  - Dataset: {:?}
  ",
            self.digits, self.scale, self.dataset,
        )
    }
}

/*
 * Error Module
 *
 * Failures that can occur while loading or validating simulation parameters.
 * The simulation step itself is total and never produces an error.
 */

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("failed to read parameter preset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed parameter preset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("parameter `{field}` must be a finite number")]
    NonFinite { field: &'static str },
}

pub mod info;
pub mod render;

use std::path::PathBuf;

use letterpress::config::{load_options, Options};
use miette::Result;

/// Options from `--config`, or the defaults.
fn base_options(config: Option<PathBuf>) -> Result<Options> {
    match config {
        Some(path) => Ok(load_options(&path)?),
        None => Ok(Options::default()),
    }
}

pub mod config;
pub mod data;
pub mod error;
pub mod render;

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::Options;
use crate::error::{LetterpressError, Result};

pub use crate::config::DataSource;
pub use crate::error::{ErrorKind, LetterpressError as Error};

pub const DEFAULT_INPUT_EXTENSION: &str = ".jinja";
pub const DEFAULT_OUTPUT_EXTENSION: &str = ".html";

/// Files whose change should invalidate a cached render: templates, data
/// scripts and JSON data.
pub const CACHE_PATTERNS: [&str; 3] = ["**/*.jinja", "**/*.rhai", "**/*.json"];

/// Render a template file to text.
///
/// Looks for a companion data file next to the template, merges it with the
/// caller's data and the `environment` global, then renders. The first
/// failure of any stage is returned unchanged.
pub fn render(template: impl AsRef<Path>, options: &Options) -> Result<String> {
    let template = template.as_ref();
    let _span = tracing::debug_span!("render", template = %template.display()).entered();

    let companion = data::locate_companion(template)?;
    let context = data::merge_context(&options.data, companion.as_deref(), options.optimize)?;
    render::render_template(template, &context, options)
}

/// Render with untyped arguments, as handed over by a host build tool.
pub fn render_value(template: &serde_json::Value, options: &serde_json::Value) -> Result<String> {
    let template = template
        .as_str()
        .ok_or_else(|| LetterpressError::config("'filePath' must be a string"))?;
    let options = Options::from_value(options)?;
    render(template, &options)
}

/// Extension of the files this renderer reads.
pub fn input_extension(options: &Options) -> &str {
    options.input.as_deref().unwrap_or(DEFAULT_INPUT_EXTENSION)
}

/// Extension of the files this renderer produces.
pub fn output_extension(options: &Options) -> &str {
    options.output.as_deref().unwrap_or(DEFAULT_OUTPUT_EXTENSION)
}

/// Map a template path to the path of its rendered output.
///
/// `pages/index.jinja` becomes `pages/index.html`. A path that does not end
/// in the input extension gets the output extension appended.
pub fn output_path(template: &Path, options: &Options) -> PathBuf {
    let input = input_extension(options);
    let output = output_extension(options);
    let name = template.to_string_lossy();

    match name.strip_suffix(input) {
        Some(stem) if !stem.is_empty() => PathBuf::from(format!("{stem}{output}")),
        _ => PathBuf::from(format!("{name}{output}")),
    }
}

/// Build a matcher for [`CACHE_PATTERNS`].
pub fn cache_matcher() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in CACHE_PATTERNS {
        let glob = Glob::new(pattern).map_err(|e| LetterpressError::GlobPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| LetterpressError::GlobPattern {
        pattern: "<combined>".into(),
        source: e,
    })
}

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{LetterpressError, Result};

/// Companion suffixes in probe order. The first existing file wins.
pub const COMPANION_SUFFIXES: [&str; 2] = ["data.rhai", "data.json"];

/// Find the data file that sits next to a template, e.g. `page.data.rhai`
/// or `page.data.json` for `page.jinja`.
///
/// A missing companion is `Ok(None)`. Only genuine I/O failures are errors.
pub fn locate_companion(template: &Path) -> Result<Option<PathBuf>> {
    for suffix in COMPANION_SUFFIXES {
        let candidate = template.with_extension(suffix);
        match std::fs::metadata(&candidate) {
            Ok(meta) if meta.is_file() => {
                tracing::debug!(path = %candidate.display(), "found companion data file");
                return Ok(Some(candidate));
            }
            Ok(_) => continue,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(LetterpressError::Resolution {
                    path: candidate,
                    source: e,
                })
            }
        }
    }

    tracing::trace!(template = %template.display(), "no companion data file");
    Ok(None)
}

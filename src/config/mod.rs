pub mod schema;

use std::path::Path;

use crate::error::{LetterpressError, Result};

pub use schema::{DataSource, Options};

/// Load rendering options from a TOML file.
pub fn load_options(path: &Path) -> Result<Options> {
    let content = std::fs::read_to_string(path).map_err(|e| LetterpressError::OptionsRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| LetterpressError::OptionsParse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_load_options_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letterpress.toml");
        std::fs::write(
            &path,
            r#"
prepend = "{% import 'macros.jinja' as m %}"
optimize = true
in = ".j2"

[data]
title = "Home"
"#,
        )
        .unwrap();

        let options = load_options(&path).unwrap();
        assert!(options.optimize);
        assert!(options.autoescape);
        assert_eq!(options.input.as_deref(), Some(".j2"));
        assert_eq!(options.prepend, "{% import 'macros.jinja' as m %}");
        match options.data {
            DataSource::Inline(map) => assert_eq!(map["title"], "Home"),
            other => panic!("expected inline data, got {other:?}"),
        }
    }

    #[test]
    fn test_load_options_data_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letterpress.toml");
        std::fs::write(&path, "data = \"site.json\"\n").unwrap();

        let options = load_options(&path).unwrap();
        assert_eq!(options.data, DataSource::ExternalPath("site.json".into()));
    }

    #[test]
    fn test_load_options_missing_file() {
        let err = load_options(Path::new("/nonexistent/letterpress.toml")).unwrap_err();
        assert!(matches!(err, LetterpressError::OptionsRead { .. }));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_load_options_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letterpress.toml");
        std::fs::write(&path, "optimize = \n").unwrap();

        let err = load_options(&path).unwrap_err();
        assert!(matches!(err, LetterpressError::OptionsParse { .. }));
    }

    #[test]
    fn test_load_options_rejects_bad_data_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letterpress.toml");
        std::fs::write(&path, "data = 42\n").unwrap();

        assert!(load_options(&path).is_err());
    }
}

use std::path::PathBuf;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{LetterpressError, Result};

/// Where caller-supplied data comes from, decided once at the boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DataSource {
    #[default]
    Absent,
    /// Data passed directly by the caller. Highest precedence.
    Inline(Map<String, Value>),
    /// A JSON or Rhai data file, resolved relative to the working directory.
    ExternalPath(PathBuf),
}

impl DataSource {
    /// Classify an untyped `data` option.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(DataSource::Absent),
            Value::String(path) => Ok(DataSource::ExternalPath(PathBuf::from(path))),
            Value::Object(map) => Ok(DataSource::Inline(map.clone())),
            _ => Err(LetterpressError::config(
                "'data' must be undefined, null, a path string or an object",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for DataSource {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
        DataSource::from_value(&value).map_err(serde::de::Error::custom)
    }
}

/// Options for a single render.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Options {
    pub data: DataSource,
    /// Base directory for includes. Defaults to the current working directory.
    pub src: Option<PathBuf>,
    pub prepend: String,
    pub append: String,
    /// Switches the `environment` global from `dev` to `prod`.
    pub optimize: bool,
    pub autoescape: bool,
    /// Input extension override, only consulted by [`crate::input_extension`].
    #[serde(rename = "in")]
    pub input: Option<String>,
    /// Output extension override, only consulted by [`crate::output_extension`].
    #[serde(rename = "out")]
    pub output: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            data: DataSource::Absent,
            src: None,
            prepend: String::new(),
            append: String::new(),
            optimize: false,
            autoescape: true,
            input: None,
            output: None,
        }
    }
}

impl Options {
    /// Build options from an untyped value handed over by a host tool.
    ///
    /// `null` yields the defaults. String fields that hold something other
    /// than a string fall back to their defaults; a malformed `data` field is
    /// rejected.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            _ => {
                return Err(LetterpressError::config(
                    "'opts' must be undefined, null or an object",
                ))
            }
        };

        let string_field = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);
        let defaults = Self::default();

        Ok(Self {
            data: map
                .get("data")
                .map(DataSource::from_value)
                .transpose()?
                .unwrap_or_default(),
            src: string_field("src").map(PathBuf::from),
            prepend: string_field("prepend").unwrap_or_default(),
            append: string_field("append").unwrap_or_default(),
            optimize: map
                .get("optimize")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.optimize),
            autoescape: map
                .get("autoescape")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.autoescape),
            input: string_field("in"),
            output: string_field("out"),
        })
    }

    pub fn with_data(mut self, data: DataSource) -> Self {
        self.data = data;
        self
    }

    pub fn with_src(mut self, src: impl Into<PathBuf>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn with_prepend(mut self, prepend: impl Into<String>) -> Self {
        self.prepend = prepend.into();
        self
    }

    pub fn with_append(mut self, append: impl Into<String>) -> Self {
        self.append = append.into();
        self
    }

    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn with_autoescape(mut self, autoescape: bool) -> Self {
        self.autoescape = autoescape;
        self
    }
}

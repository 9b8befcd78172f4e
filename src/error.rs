#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum LetterpressError {
    #[error("{message}")]
    #[diagnostic(help("Check the arguments passed to letterpress"))]
    Config { message: String },

    #[error("Failed to read options file {path}")]
    OptionsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse options file {path}")]
    #[diagnostic(help("Check the TOML syntax in your options file"))]
    OptionsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to probe for a data file at {path}")]
    Resolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read data file {path}")]
    DataRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse data file {path}")]
    #[diagnostic(help("Check the JSON syntax in your data file"))]
    DataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Data script {path} failed: {message}")]
    #[diagnostic(help("Check the Rhai script for errors"))]
    DataEval { path: PathBuf, message: String },

    #[error("Data file {path} must produce an object, got {found}")]
    #[diagnostic(help("The top level of a data file must be a JSON object or a Rhai object map"))]
    DataType { path: PathBuf, found: String },

    #[error("Failed to read template {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template rendering failed for {name}: {source}")]
    #[diagnostic(help("Check your template syntax"))]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Glob pattern error: {pattern}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse category of a [`LetterpressError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid argument shapes or an unusable options file.
    Configuration,
    /// A genuine I/O failure while probing for a companion data file.
    Resolution,
    /// A data file could not be read, parsed, evaluated or had the wrong shape.
    Load,
    /// The template itself could not be read.
    Read,
    /// The template engine failed to parse or execute the template.
    Render,
}

impl LetterpressError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        LetterpressError::Config {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LetterpressError::Config { .. }
            | LetterpressError::OptionsRead { .. }
            | LetterpressError::OptionsParse { .. }
            | LetterpressError::GlobPattern { .. } => ErrorKind::Configuration,
            LetterpressError::Resolution { .. } => ErrorKind::Resolution,
            LetterpressError::DataRead { .. }
            | LetterpressError::DataParse { .. }
            | LetterpressError::DataEval { .. }
            | LetterpressError::DataType { .. } => ErrorKind::Load,
            LetterpressError::TemplateRead { .. } | LetterpressError::Io { .. } => ErrorKind::Read,
            LetterpressError::Render { .. } => ErrorKind::Render,
        }
    }
}

pub type Result<T> = std::result::Result<T, LetterpressError>;

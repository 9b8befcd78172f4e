use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

use minijinja::{path_loader, AutoEscape, Environment};
use serde_json::{Map, Value};

use super::context::build_context;
use super::filters;
use crate::config::Options;
use crate::error::{LetterpressError, Result};

/// Create a template environment for one render.
///
/// Include names are rooted at `src`, except names starting with `./` or
/// `../`, which resolve against the including template. Those resolve to
/// absolute paths, so `src` and the entry template name should be absolute.
/// Every call gets its own environment, so filters and settings never leak
/// between renders.
pub fn create_environment(src: &Path, autoescape: bool) -> Environment<'static> {
    let mut env = Environment::new();

    let rooted = path_loader(src);
    env.set_loader(move |name: &str| {
        if Path::new(name).is_absolute() {
            read_template_file(Path::new(name))
        } else {
            rooted(name)
        }
    });

    let root = src.to_path_buf();
    env.set_path_join_callback(move |name, parent| {
        if name.starts_with("./") || name.starts_with("../") {
            let parent = root.join(parent);
            let dir = parent.parent().unwrap_or(root.as_path());
            Cow::Owned(join_relative(dir, name).to_string_lossy().into_owned())
        } else {
            Cow::Borrowed(name)
        }
    });

    env.set_keep_trailing_newline(true);
    env.set_formatter(filters::markup_formatter);
    env.add_filter("shy", filters::shy);

    let mode = if autoescape {
        AutoEscape::Html
    } else {
        AutoEscape::None
    };
    env.set_auto_escape_callback(move |_name: &str| mode.clone());

    env
}

/// Resolve `./` and `../` segments of an include name against `dir`.
fn join_relative(dir: &Path, name: &str) -> PathBuf {
    let mut path = dir.to_path_buf();
    for segment in name.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                path.pop();
            }
            other => path.push(other),
        }
    }
    path
}

fn read_template_file(path: &Path) -> std::result::Result<Option<String>, minijinja::Error> {
    match std::fs::read_to_string(path) {
        Ok(source) => Ok(Some(source)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(minijinja::Error::new(
            minijinja::ErrorKind::InvalidOperation,
            format!("could not read template {}", path.display()),
        )
        .with_source(e)),
    }
}

/// Render template source text against a merged context.
pub fn render_source(
    env: &Environment<'_>,
    name: &str,
    source: &str,
    variables: &Map<String, Value>,
) -> Result<String> {
    env.render_named_str(name, source, build_context(variables))
        .map_err(|e| LetterpressError::Render {
            name: name.to_string(),
            source: e,
        })
}

/// Read a template, wrap it in `prepend`/`append` and render it.
pub fn render_template(
    template: &Path,
    variables: &Map<String, Value>,
    options: &Options,
) -> Result<String> {
    let body = std::fs::read_to_string(template).map_err(|e| LetterpressError::TemplateRead {
        path: template.to_path_buf(),
        source: e,
    })?;

    let source = format!("{}{}{}", options.prepend, body, options.append);
    let src = match &options.src {
        Some(src) => absolute(src)?,
        None => current_dir()?,
    };
    let env = create_environment(&src, options.autoescape);
    let name = absolute(template)?.display().to_string();

    tracing::debug!(template = %name, src = %src.display(), "rendering template");
    render_source(&env, &name, &source, variables)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let base = current_dir()?;
    Ok(path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .fold(base, |acc, c| acc.join(c)))
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| LetterpressError::Io {
        context: "getting current directory".into(),
        source: e,
    })
}

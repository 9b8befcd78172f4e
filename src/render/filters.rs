use std::borrow::Cow;
use std::fmt::Write;

use minijinja::{escape_formatter, AutoEscape, Error, Output, State, Value};

/// Soft hyphen entity inserted by the `shy` filter.
pub const SOFT_HYPHEN: &str = "&shy;";

/// Filter output, tagged with whether it still needs escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// Plain text. Escaped on output when autoescaping is on.
    Escaped(String),
    /// Already safe markup, written as is.
    Raw(String),
}

impl Markup {
    /// Classify a rendered value: safe strings are raw, everything else is text.
    pub fn from_value(value: &Value) -> Self {
        if value.is_safe() {
            Markup::Raw(value.to_string())
        } else {
            Markup::Escaped(value.to_string())
        }
    }

    /// The text to emit, escaping plain text when `escape` is set.
    pub fn render(&self, escape: bool) -> Cow<'_, str> {
        match self {
            Markup::Escaped(s) if escape => Cow::Owned(escape_html(s)),
            Markup::Escaped(s) | Markup::Raw(s) => Cow::Borrowed(s),
        }
    }
}

impl From<Markup> for Value {
    fn from(markup: Markup) -> Self {
        match markup {
            Markup::Escaped(s) => Value::from(s),
            Markup::Raw(s) => Value::from_safe_string(s),
        }
    }
}

/// HTML-escape `& < > " '`. Slashes are left alone.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Output formatter for interpolated values.
///
/// Undefined and none values keep the engine's default handling.
pub fn markup_formatter(out: &mut Output, state: &State, value: &Value) -> Result<(), Error> {
    if value.is_undefined() || value.is_none() {
        return escape_formatter(out, state, value);
    }

    let escape = matches!(state.auto_escape(), AutoEscape::Html);
    out.write_str(&Markup::from_value(value).render(escape))
        .map_err(|_| {
            Error::new(
                minijinja::ErrorKind::WriteFailure,
                "failed to write template output",
            )
        })
}

/// Replace every `|` with a soft hyphen. The result is raw markup so the
/// entity survives autoescaping. A missing value becomes an empty string.
pub fn soft_hyphenate(value: Option<&str>) -> Markup {
    Markup::Raw(value.map(|s| s.replace('|', SOFT_HYPHEN)).unwrap_or_default())
}

/// The `shy` filter as registered with the template engine.
pub fn shy(value: Option<String>) -> Value {
    soft_hyphenate(value.as_deref()).into()
}

pub mod context;
pub mod engine;
pub mod filters;

pub use context::build_context;
pub use engine::{create_environment, render_source, render_template};
pub use filters::{soft_hyphenate, Markup, SOFT_HYPHEN};

use std::path::PathBuf;

use console::style;
use letterpress::config::DataSource;
use letterpress::error::LetterpressError;
use miette::Result;

pub struct RenderArgs {
    pub template: PathBuf,
    pub data: Option<String>,
    pub data_file: Option<PathBuf>,
    pub src: Option<PathBuf>,
    pub prepend: Option<String>,
    pub append: Option<String>,
    pub optimize: bool,
    pub no_autoescape: bool,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Interpret `--data`: JSON object text is inline data, anything that is
/// not JSON is a path to a data file.
pub fn parse_data_arg(arg: &str) -> std::result::Result<DataSource, LetterpressError> {
    match serde_json::from_str::<serde_json::Value>(arg) {
        Ok(serde_json::Value::Object(map)) => Ok(DataSource::Inline(map)),
        Ok(_) => Err(LetterpressError::Config {
            message: "--data must be a JSON object or a path".into(),
        }),
        Err(_) => Ok(DataSource::ExternalPath(PathBuf::from(arg))),
    }
}

pub fn run(args: RenderArgs) -> Result<()> {
    let mut options = super::base_options(args.config)?;

    if let Some(data) = &args.data {
        options.data = parse_data_arg(data)?;
    }
    if let Some(path) = args.data_file {
        options.data = DataSource::ExternalPath(path);
    }
    if let Some(src) = args.src {
        options.src = Some(src);
    }
    if let Some(prepend) = args.prepend {
        options.prepend = prepend;
    }
    if let Some(append) = args.append {
        options.append = append;
    }
    if args.optimize {
        options.optimize = true;
    }
    if args.no_autoescape {
        options.autoescape = false;
    }

    let rendered = letterpress::render(&args.template, &options)?;

    match args.output {
        None => print!("{rendered}"),
        Some(out) => {
            let target = if out.is_dir() {
                let name = letterpress::output_path(&args.template, &options);
                out.join(name.file_name().unwrap_or(name.as_os_str()))
            } else {
                out
            };
            std::fs::write(&target, rendered).map_err(|e| LetterpressError::Io {
                context: format!("writing {}", target.display()),
                source: e,
            })?;
            eprintln!(
                "{} Rendered {}",
                style("✓").green().bold(),
                style(target.display()).cyan()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_data_arg_inline_object() {
        match parse_data_arg(r#"{"title": "Home"}"#).unwrap() {
            DataSource::Inline(map) => assert_eq!(map["title"], "Home"),
            other => panic!("expected inline data, got {other:?}"),
        }
    }

    #[rstest]
    #[case("site.json")]
    #[case("data/page.data.rhai")]
    fn test_parse_data_arg_path(#[case] arg: &str) {
        assert_eq!(
            parse_data_arg(arg).unwrap(),
            DataSource::ExternalPath(PathBuf::from(arg))
        );
    }

    #[rstest]
    #[case("[1, 2]")]
    #[case("42")]
    #[case("\"text\"")]
    fn test_parse_data_arg_rejects_non_object_json(#[case] arg: &str) {
        assert!(parse_data_arg(arg).is_err());
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("page.jinja");
        std::fs::write(&template, "{{ title }}|{{ environment }}").unwrap();
        let out = dir.path().join("out.html");

        run(RenderArgs {
            template,
            data: Some(r#"{"title": "<Home>"}"#.into()),
            data_file: None,
            src: Some(dir.path().to_path_buf()),
            prepend: None,
            append: Some("!".into()),
            optimize: true,
            no_autoescape: false,
            config: None,
            output: Some(out.clone()),
        })
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(out).unwrap(),
            "&lt;Home&gt;|prod!"
        );
    }

    #[test]
    fn test_run_into_directory_uses_output_extension() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("page.jinja");
        std::fs::write(&template, "body").unwrap();
        let out_dir = dir.path().join("public");
        std::fs::create_dir(&out_dir).unwrap();

        run(RenderArgs {
            template,
            data: None,
            data_file: None,
            src: None,
            prepend: None,
            append: None,
            optimize: false,
            no_autoescape: false,
            config: None,
            output: Some(out_dir.clone()),
        })
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(out_dir.join("page.html")).unwrap(),
            "body"
        );
    }
}

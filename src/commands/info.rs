use std::path::PathBuf;

use console::style;
use miette::Result;

pub fn run(config: Option<PathBuf>) -> Result<()> {
    let options = super::base_options(config)?;

    println!(
        "{} {}",
        style("input: ").bold(),
        letterpress::input_extension(&options)
    );
    println!(
        "{} {}",
        style("output:").bold(),
        letterpress::output_extension(&options)
    );
    println!("{}", style("cache patterns:").bold());
    for pattern in letterpress::CACHE_PATTERNS {
        println!("  {pattern}");
    }

    Ok(())
}

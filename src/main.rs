//! bindata - embed a directory of files into Rust source.

use anyhow::{Context, Result};
use bindata::{GenConfig, cli::Cli, generate, log, logger};
use clap::{ColorChoice, Parser};

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = GenConfig::load(&cli)?;
    generate(&config).with_context(|| {
        format!(
            "failed to embed `{}` into `{}`",
            config.input.display(),
            config.output.display()
        )
    })?;
    Ok(())
}

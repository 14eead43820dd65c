use anyhow::{bail, Context as _, Result};
use clap::Parser;

use stlitify::cli::{split_package_list, Args};
use stlitify::{convert, extract_imports, Config, STLITE_VERSION};

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.input.exists() {
        bail!("input file not found: {}", args.input.display());
    }
    let python_code = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input file: {}", args.input.display()))?;

    let cfg = Config::load(args.config.as_deref())?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("html"));

    // Explicit -r wins over detection; --add-requirements merges into
    // either; the config overlay (renames + always-add) applies last.
    let mut requirements = match args.requirements.as_deref() {
        Some(raw) => split_package_list(raw),
        None => extract_imports(&python_code),
    };
    if let Some(raw) = args.add_requirements.as_deref() {
        requirements.extend(split_package_list(raw));
    }
    let requirements = cfg.apply_requirements(requirements);

    let stlite_version = args
        .stlite_version
        .clone()
        .or(cfg.stlite_version.clone())
        .unwrap_or_else(|| STLITE_VERSION.to_string());

    if args.verbose {
        eprintln!("input: {}", args.input.display());
        eprintln!("output: {}", output.display());
        eprintln!("requirements: {}", requirements.join(", "));
        eprintln!("stlite version: {stlite_version}");
    }

    let html = convert(
        &python_code,
        args.title.as_deref(),
        Some(&requirements),
        Some(&stlite_version),
    )?;

    std::fs::write(&output, html)
        .with_context(|| format!("failed to write output file: {}", output.display()))?;

    println!(
        "Successfully converted '{}' to '{}'",
        args.input.display(),
        output.display()
    );
    Ok(())
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stlitify", version, about)]
pub struct Args {
    /// Path to the input Streamlit Python file
    pub input: PathBuf,

    /// Path to the output HTML file (default: input path with .html extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Comma-separated pip packages to install (default: auto-detect from imports)
    #[arg(short, long)]
    pub requirements: Option<String>,

    /// Additional packages merged into the requirement set (comma-separated)
    #[arg(long)]
    pub add_requirements: Option<String>,

    /// Title for the HTML page (default: auto-detect from code)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Version of stlite to embed (overrides config.toml)
    #[arg(long)]
    pub stlite_version: Option<String>,

    /// Path to config.toml (overrides the XDG default)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print what was detected and where the output went
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Split a comma-separated package list, dropping empty entries.
pub fn split_package_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

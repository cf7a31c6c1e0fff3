use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::render::Page;
use crate::theme::Theme;
use clap::Parser;
use eyre::{Error, WrapErr};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, info};

mod checks;
mod config;
mod dashboard;
mod display;
mod model;
mod render;
mod stats;
mod theme;

#[derive(Parser)]
#[command(version, about)]
struct Options {
    #[arg(short, long)]
    /// Use FILE instead of built-in page settings
    config: Option<PathBuf>,
    #[arg(short, long)]
    /// Write the page to FILE instead of the standard output
    output: Option<PathBuf>,
    #[arg(short, long, value_enum, ignore_case = true)]
    /// Starting theme (light or dark), overrides the configuration
    theme: Option<Theme>,
    #[arg(short, long)]
    /// Print a plain-text summary of the projects (on the error output when
    /// the page goes to the standard output)
    summary: bool,
    #[arg(short = 'n', long)]
    /// Do not write the page
    dry_run: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    /// Set verbosity level
    verbose: u8,
}

/// Directory the page's relative asset paths resolve against.
fn page_dir(output: &Path) -> &Path {
    output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

fn run(options: &Options, out: &mut impl Write, err: &mut impl Write) -> Result<(), Error> {
    let config = match &options.config {
        Some(file_name) => Config::load(file_name)?,
        None => Config::default(),
    };
    let theme = config.starting_theme(options.theme);
    let dashboard = Dashboard::new(theme);
    let flagged = checks::check_progress_range(&dashboard.projects).len()
        + checks::check_unique_ids(&dashboard.projects).len();
    debug!(%theme, projects = dashboard.projects.len(), flagged, "dashboard ready");
    let mut page_on_stdout = false;
    if !options.dry_run {
        let page = Page::new(&dashboard, &config).to_string();
        match &options.output {
            Some(output) => {
                fs::write(output, &page)
                    .wrap_err_with(|| format!("cannot write page to {}", output.display()))?;
                let missing = checks::check_assets(&config.assets, page_dir(output));
                info!(output = %output.display(), bytes = page.len(), missing_assets = missing.len(), "page written");
            }
            None => {
                out.write_all(page.as_bytes())
                    .wrap_err("cannot write page")?;
                page_on_stdout = true;
            }
        }
    }
    if options.summary {
        // Nothing may follow the document on the standard output.
        let mut summary: &mut dyn Write = if page_on_stdout { err } else { out };
        display::display_details(&mut summary, &dashboard)?;
        display::display_stats(&mut summary, &dashboard.statistics())?;
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    run(&options, &mut io::stdout().lock(), &mut io::stderr())
}

#[cfg(test)]
fn run_with(args: &[&str]) -> (String, String) {
    let options = Options::try_parse_from(["progress-board"].iter().chain(args).copied()).unwrap();
    let (mut out, mut err) = (Vec::new(), Vec::new());
    run(&options, &mut out, &mut err).unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[test]
fn test_summary_stays_out_of_page_on_stdout() {
    let (out, err) = run_with(&["-s"]);
    assert!(out.starts_with("<!DOCTYPE html>"));
    assert!(out.ends_with("</html>\n"));
    assert!(!out.contains("Total de Projetos: 4"));
    assert!(err.contains("DimeX: 90% [Em Andamento]"));
    assert!(err.contains("Progresso Médio: 63%"));
}

#[test]
fn test_summary_on_stdout_with_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("index.html");
    let (out, err) = run_with(&["-s", "-o", output.to_str().unwrap()]);
    assert!(out.starts_with("Sistema de Visitantes - Liberaê (Beta): 100% [Concluído]\n"));
    assert!(err.is_empty());
    let page = fs::read_to_string(&output).unwrap();
    assert!(page.ends_with("</html>\n"));
}

#[test]
fn test_dry_run_summary() {
    let (out, err) = run_with(&["-n", "--summary"]);
    assert!(out.contains("Quase Concluídos: 2\n"));
    assert!(!out.contains("<html"));
    assert!(err.is_empty());
}

#[test]
fn test_theme_option_overrides_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[page]\ntheme = \"dark\"").unwrap();
    let config = file.path().to_str().unwrap();
    let (out, _) = run_with(&["-c", config]);
    assert!(out.contains(r#"class="app dark-theme""#));
    let (out, _) = run_with(&["-c", config, "-t", "LIGHT"]);
    assert!(out.contains(r#"class="app light-theme""#));
    let (out, _) = run_with(&[]);
    assert!(out.contains(r#"class="app light-theme""#));
}

#[test]
fn test_page_dir() {
    assert_eq!(page_dir(Path::new("index.html")), Path::new("."));
    assert_eq!(page_dir(Path::new("site/index.html")), Path::new("site"));
    assert_eq!(page_dir(Path::new("/tmp/index.html")), Path::new("/tmp"));
}

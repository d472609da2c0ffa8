use crate::checks::{check_group_attendance, check_scores_within_scale};
use crate::config::{AssessmentConfig, Config};
use crate::display::{display_json, display_report};
use crate::loaders::{load_group, load_results};
use clap::{ArgAction, Parser, ValueEnum};
use eyre::{Result, WrapErr};
use rranker::{Assessment, Report};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

mod checks;
mod config;
mod display;
mod loaders;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(version, author, about)]
struct Options {
    /// Use FILE instead of rranker.toml
    #[arg(short, long, value_name = "FILE", default_value = "rranker.toml")]
    config: PathBuf,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

fn load_assessment(config: &Config, a: &AssessmentConfig) -> Result<Assessment> {
    let marks = load_results(&config.resolve(&a.results), a.source_scale())?;
    check_scores_within_scale(&a.title, &marks);
    let mut assessment = Assessment::new(&a.title, a.scale, a.precision)?;
    assessment
        .add_results(marks)
        .wrap_err_with(|| format!("cannot add results to {}", a.title))?;
    if let Some(curve) = &a.curve {
        assessment
            .curve(curve)
            .wrap_err_with(|| format!("cannot curve {}", a.title))?;
    }
    info!(
        assessment = %a.title,
        attendees = assessment.results().len(),
        "assessment loaded"
    );
    Ok(assessment)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(Targets::new().with_target("rranker", level))
        .init();
    let config = Config::load(&options.config)?;
    let mut assessments = config
        .assessments
        .iter()
        .map(|a| load_assessment(&config, a))
        .collect::<Result<Vec<_>>>()?;
    let assessment = if assessments.len() == 1 {
        assessments.remove(0)
    } else {
        Assessment::merge(config.title(), &assessments.iter().collect::<Vec<_>>())?
    };
    let groups = config
        .groups
        .iter()
        .map(|g| load_group(&config.resolve(&g.members), &g.name))
        .collect::<Result<Vec<_>>>()?;
    for group in &groups {
        check_group_attendance(&assessment, group);
    }
    let report = Report::build(&assessment, &groups, config.ranking);
    match options.format {
        Format::Text => display_report(&report),
        Format::Json => display_json(&report).wrap_err("cannot serialize report")?,
    }
    Ok(())
}

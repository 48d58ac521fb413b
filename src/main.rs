mod config;
mod generate;
mod input;
mod logging;
mod model;
mod output;
mod report;
mod session;
mod stats;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{error, info};

use crate::config::{ConfigError, GeneratorProfile};
use crate::generate::GenerationRequest;
use crate::model::format::TableFormat;
use crate::output::ExportOptions;
use crate::report::charts::AnalysisKind;
use crate::report::default_base_name;
use crate::session::{Session, SessionError};

#[derive(Debug, Parser)]
#[command(
    name = "kira-gradeqc",
    version,
    about = "Generate, import, analyze and export student grade tables"
)]
struct Cli {
    /// Debug-level logging unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a synthetic grade table with per-subject pass-rate floors.
    Generate(GenerateArgs),
    /// Analyze a grade table and write results, report and chart data.
    Analyze(AnalyzeArgs),
    /// Import a table and write it in another format, or back in place.
    Convert(ConvertArgs),
    /// List the subjects a generation run would use.
    Subjects(SubjectsArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    #[arg(short = 'n', long)]
    count: usize,
    #[arg(long)]
    id_prefix: Option<String>,
    /// Fixed class label; "Random Assignment" picks per student.
    #[arg(long)]
    class: Option<String>,
    /// Comma-separated subject names; defaults to every enabled subject.
    #[arg(long, value_delimiter = ',')]
    subjects: Vec<String>,
    #[arg(long)]
    profile: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long)]
    out: PathBuf,
    /// Append Total Score, Average Score and Rank columns.
    #[arg(long)]
    with_derived: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ResultsFormat {
    Xlsx,
    Csv,
}

impl ResultsFormat {
    fn table_format(self) -> TableFormat {
        match self {
            ResultsFormat::Xlsx => TableFormat::Xlsx,
            ResultsFormat::Csv => TableFormat::Csv,
        }
    }
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    #[arg(short, long)]
    input: PathBuf,
    /// Output directory.
    #[arg(short, long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = ResultsFormat::Xlsx)]
    format: ResultsFormat,
    #[arg(long)]
    no_charts: bool,
}

#[derive(Debug, Args)]
struct ConvertArgs {
    #[arg(short, long)]
    input: PathBuf,
    /// Defaults to rewriting the input file.
    #[arg(short, long)]
    out: Option<PathBuf>,
    #[arg(long)]
    with_derived: bool,
}

#[derive(Debug, Args)]
struct SubjectsArgs {
    #[arg(long)]
    profile: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    if let Err(err) = run(cli.command) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Generate(args) => run_generate(&args),
        Command::Analyze(args) => {
            let outputs = run_analyze(&args)?;
            info!("analysis results: {}", outputs.results.display());
            info!("report: {}", outputs.report.display());
            info!("summary: {}", outputs.summary.display());
            for chart in &outputs.charts {
                info!("chart data: {}", chart.display());
            }
            Ok(())
        }
        Command::Convert(args) => run_convert(&args).map(|_| ()),
        Command::Subjects(args) => {
            print!("{}", render_subjects(&load_profile(args.profile.as_deref())?));
            Ok(())
        }
    }
}

fn load_profile(path: Option<&Path>) -> Result<GeneratorProfile, ConfigError> {
    match path {
        Some(path) => {
            let profile = GeneratorProfile::load(path)?;
            info!("loaded generation profile {}", path.display());
            Ok(profile)
        }
        None => Ok(GeneratorProfile::builtin()),
    }
}

fn build_request(args: &GenerateArgs) -> Result<GenerationRequest, AppError> {
    let profile = load_profile(args.profile.as_deref())?;
    let mut request = GenerationRequest::new(args.count, profile.selected_subjects(&args.subjects)?);
    request.id_prefix = args
        .id_prefix
        .clone()
        .unwrap_or_else(|| profile.id_prefix.clone());
    request.class_assignment = profile.class_assignment(args.class.as_deref());
    Ok(request)
}

fn run_generate(args: &GenerateArgs) -> Result<(), AppError> {
    let request = build_request(args)?;
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    info!(seed, "seeding generator");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut session = Session::new();
    session.generate(&request, &mut rng)?;
    session.export(
        &args.out,
        ExportOptions {
            with_derived: args.with_derived,
        },
    )?;
    Ok(())
}

/// Every file written by one analyze run.
#[derive(Debug)]
struct AnalyzeOutputs {
    results: PathBuf,
    report: PathBuf,
    summary: PathBuf,
    charts: Vec<PathBuf>,
}

fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeOutputs, AppError> {
    let mut session = Session::new();
    session.import(&args.input)?;
    session.analyze()?;

    let now = chrono::Local::now().naive_local();
    let base = default_base_name(&now);
    let results = args
        .out
        .join(format!("{}.{}", base, args.format.table_format().extension()));
    session.export_analysis(&results)?;
    let paths = session.write_report(&args.out, now)?;

    let charts = if args.no_charts {
        Vec::new()
    } else {
        session.render_charts(AnalysisKind::all(), &base)?;
        session.export_charts(&args.out)?
    };

    Ok(AnalyzeOutputs {
        results,
        report: paths.report,
        summary: paths.summary,
        charts,
    })
}

fn run_convert(args: &ConvertArgs) -> Result<PathBuf, AppError> {
    let mut session = Session::new();
    session.import(&args.input)?;
    let options = ExportOptions {
        with_derived: args.with_derived,
    };
    match &args.out {
        Some(out) => {
            session.export(out, options)?;
            Ok(out.clone())
        }
        None => Ok(session.save(options)?),
    }
}

fn render_subjects(profile: &GeneratorProfile) -> String {
    let mut out = String::new();
    for s in &profile.subjects {
        out.push_str(&format!(
            "{}{}\t{}-{}\tpass >= {}\ttarget {:.0}%\n",
            s.name,
            if s.enabled { "" } else { " (disabled)" },
            s.min,
            s.max,
            s.pass_score,
            s.pass_rate
        ));
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;

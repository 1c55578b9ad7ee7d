//! weissbench - compression benchmark reporting Weissman scores
//!
//! Compresses one file or directory with every requested algorithm, measures
//! size and wall-clock time, and scores each result against gzip.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use console::style;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use weissbench_compression::CompressorOptions;
use weissbench_config::{Config, ConfigLoader};
use weissbench_engine::CompressionBenchmark;
use weissbench_export::{export_to_file, ExportFormat};
use weissbench_types::{
    sort_by_score, AlgorithmSelection, Alpha, CancelFlag, Cancellable, CompressionAlgorithm,
    Error,
};

mod display;
mod progress;

use display::{display_algorithms, display_error, display_info, display_results, display_success};
use progress::BenchmarkProgress;

/// Exit code reported when the run is interrupted
const EXIT_INTERRUPTED: u8 = 130;

/// weissbench - compression benchmark reporting Weissman scores
#[derive(Parser, Debug)]
#[command(
    name = "weissbench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compression benchmark reporting Weissman scores",
    long_about = "weissbench compresses a file or directory with several algorithms,\n\
                  measures compressed size and time, and scores every algorithm\n\
                  against gzip with the Weissman score."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Quiet mode - minimal output
    #[arg(short, long)]
    quiet: bool,

    /// Verbose mode - detailed output
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Benchmark a file or directory
    Run(RunArgs),
    /// List supported algorithms
    List,
    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
        /// Write the configuration to a file instead of printing it
        #[arg(long, value_name = "FILE")]
        write: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// File or directory to compress
    path: PathBuf,
    /// Algorithms to run: comma-separated names or `all`
    #[arg(short, long = "algorithm", value_name = "LIST")]
    algorithms: Vec<String>,
    /// Scaling constant for Weissman scores
    #[arg(long, value_parser = parse_alpha)]
    alpha: Option<Alpha>,
    /// Export format (json, yaml, csv, xml, html)
    #[arg(short, long, value_name = "FORMAT")]
    export: Option<ExportFormat>,
    /// Export destination
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Directory for temporary compressed artifacts
    #[arg(long, value_name = "DIR")]
    scratch_dir: Option<PathBuf>,
    /// Overwrite temporary artifacts before deleting them
    #[arg(long)]
    secure_delete: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

/// A run with command line flags applied over the loaded configuration
#[derive(Debug)]
struct RunPlan {
    algorithms: Vec<CompressionAlgorithm>,
    alpha: Alpha,
    options: CompressorOptions,
    export: Option<(ExportFormat, PathBuf)>,
}

fn parse_alpha(value: &str) -> std::result::Result<Alpha, String> {
    let alpha: f64 = value
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", value, e))?;
    Alpha::new(alpha)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&format!("{:#}", error));
            ExitCode::from(exit_code(&error))
        }
    }
}

fn exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<Error>() {
        Some(error) if error.is_cancelled() => EXIT_INTERRUPTED,
        _ => 1,
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load_default()?,
    };

    let json = cli
        .log_format
        .map_or(config.logging.json_format, |format| format == LogFormat::Json);
    init_logging(log_level(&cli, &config), json)?;

    info!("weissbench v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Run(args) => {
            let plan = resolve_run(&args, &config)?;
            run_command(&args.path, plan, cli.quiet).await
        }
        Commands::List => {
            display_algorithms();
            Ok(())
        }
        Commands::Config { default, write } => config_command(&config, default, write.as_deref()),
    }
}

fn log_level<'a>(cli: &Cli, config: &'a Config) -> &'a str {
    if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        config.logging.level.as_str()
    }
}

fn init_logging(level: &str, json: bool) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("Invalid log filter")?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

fn resolve_run(args: &RunArgs, config: &Config) -> Result<RunPlan> {
    let algorithms: Vec<CompressionAlgorithm> = if args.algorithms.is_empty() {
        AlgorithmSelection::new(config.benchmark.algorithms.iter().copied()).into()
    } else {
        AlgorithmSelection::parse_tokens(&args.algorithms)?.into()
    };

    let mut scratch = config.scratch.clone();
    if let Some(dir) = &args.scratch_dir {
        scratch.directory = Some(dir.clone());
    }
    scratch.secure_delete |= args.secure_delete;

    let options = CompressorOptions {
        levels: config.codecs,
        scratch,
        cancel: CancelFlag::new(),
    };

    let output = args.output.clone().or_else(|| config.export.output.clone());
    let format = args.export.or(config.export.format);
    let export = match (format, output) {
        (Some(format), Some(output)) => Some((format, output)),
        (Some(format), None) => bail!("Export format '{}' requires --output", format),
        (None, Some(output)) => {
            let format = output
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(|ext| ext.parse::<ExportFormat>().ok())
                .with_context(|| {
                    format!(
                        "Cannot infer export format from '{}', pass --export",
                        output.display()
                    )
                })?;
            Some((format, output))
        }
        (None, None) => None,
    };

    Ok(RunPlan {
        algorithms,
        alpha: args.alpha.unwrap_or(config.benchmark.alpha),
        options,
        export,
    })
}

async fn run_command(path: &Path, plan: RunPlan, quiet: bool) -> Result<()> {
    let RunPlan {
        algorithms,
        alpha,
        options,
        export,
    } = plan;

    let cancel = options.cancel.clone();
    let benchmark = CompressionBenchmark::new(path)?
        .with_options(options)
        .with_alpha(alpha);

    debug!("Algorithms: {:?}", algorithms);
    info!("Alpha: {}", alpha.get());

    let signal_flag = cancel.clone();
    let signal_task = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, cancelling benchmark");
            signal_flag.cancel();
        }
    });

    let progress = BenchmarkProgress::new(quiet);
    let observer = progress.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        benchmark.run_with_observer(&algorithms, &observer)
    })
    .await;
    signal_task.abort();

    let mut results = match outcome.context("Benchmark task failed")? {
        Ok(results) => results,
        Err(error) => {
            progress.abandon();
            return Err(error.into());
        }
    };

    sort_by_score(&mut results);
    if !quiet {
        display_results(&results);
    }

    if let Some((format, output)) = export {
        export_to_file(format, &results, &output)?;
        if !quiet {
            display_success(&format!(
                "Exported {} results as {} to {}",
                results.len(),
                format,
                output.display()
            ));
        }
    }

    Ok(())
}

fn config_command(config: &Config, default: bool, write: Option<&Path>) -> Result<()> {
    let shown = if default {
        Config::default()
    } else {
        config.clone()
    };

    if let Some(path) = write {
        ConfigLoader::save_to_file(&shown, path)?;
        display_success(&format!("Configuration written to {}", path.display()));
        return Ok(());
    }

    let label = if default { "Default" } else { "Current" };
    println!("{} {} configuration:", style("⚙").blue().bold(), label);
    if !default && ConfigLoader::config_exists().is_none() {
        display_info("No configuration file found, showing defaults with environment overrides");
    }
    print!("{}", ConfigLoader::to_yaml(&shown)?);
    Ok(())
}

//! Command implementation for the plumbing catalog CLI
//!
//! This module contains the execution flow behind the binary: logging setup,
//! layered configuration, input loading, assembly, output, and the closing
//! summary on stderr.

use crate::app::models::Category;
use crate::app::services::catalog_assembler::{CatalogAssembler, Clock, SystemClock};
use crate::app::services::catalog_parser::ParseStats;
use crate::app::services::catalog_writer::{render, write_output};
use crate::app::services::source_loader::{load_sources, read_table_or_stdin};
use crate::cli::args::{Args, Invocation};
use crate::config::CatalogConfig;
use crate::Result;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Statistics for reporting the outcome of a run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Parse statistics per category handled in this run
    pub category_stats: BTreeMap<Category, ParseStats>,
    /// Top-level records emitted across all categories
    pub records_emitted: usize,
    /// Bytes of JSON written
    pub bytes_written: usize,
    /// Output file, or `None` for standard output
    pub output_path: Option<PathBuf>,
    /// Total processing time
    pub processing_time: Duration,
}

impl RunSummary {
    /// Total duplicate identifiers across categories
    pub fn duplicate_count(&self) -> usize {
        self.category_stats
            .values()
            .map(|stats| stats.duplicate_identifiers.len())
            .sum()
    }

    /// Total data rows read across categories
    pub fn rows_read(&self) -> usize {
        self.category_stats.values().map(|stats| stats.rows_read).sum()
    }
}

/// Main command runner using the wall clock
pub async fn run(args: Args) -> Result<RunSummary> {
    run_with_clock(args, SystemClock).await
}

/// Command runner with an injected clock for `lastModified`
pub async fn run_with_clock<C: Clock>(args: Args, clock: C) -> Result<RunSummary> {
    let start_time = Instant::now();

    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    let invocation = args.validate()?;
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let assembler = CatalogAssembler::new(clock).with_duplicate_warnings(config.warn_on_duplicates);

    let mut summary = match invocation {
        Invocation::Catalog(input) => {
            let paths = input.resolve(&config)?;
            let sources = load_sources(&paths).await?;
            let assembly = assembler.assemble(&sources)?;

            let rendered = render(&assembly.document, config.indent_width)?;
            write_output(&rendered, args.output_path()).await?;

            RunSummary {
                records_emitted: Category::ALL
                    .iter()
                    .map(|category| assembly.document.record_count(*category))
                    .sum(),
                category_stats: assembly.stats,
                bytes_written: rendered.len(),
                ..Default::default()
            }
        }
        Invocation::Single { category, path } => {
            info!("Parsing {} only", category);
            let text = read_table_or_stdin(path.as_deref()).await?;
            let (records, stats) = assembler.parse_category(category, &text)?;

            let rendered = render(&records, config.indent_width)?;
            write_output(&rendered, args.output_path()).await?;

            RunSummary {
                records_emitted: records.as_object().map_or(0, |map| map.len()),
                category_stats: BTreeMap::from([(category, stats)]),
                bytes_written: rendered.len(),
                ..Default::default()
            }
        }
    };

    summary.output_path = args.output_path.clone();
    summary.processing_time = start_time.elapsed();

    info!(
        "Completed in {:.3}s: {} records from {} rows",
        summary.processing_time.as_secs_f64(),
        summary.records_emitted,
        summary.rows_read()
    );

    if args.show_summary() {
        print_summary(&summary);
    }

    Ok(summary)
}

/// Set up structured logging on stderr, leaving stdout for the catalog
///
/// `RUST_LOG` overrides the level derived from `-v`/`-q`. A subscriber that is
/// already installed (e.g. by an earlier run in the same process) is kept.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("plumbing_catalog={}", log_level)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    if installed.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &Args) -> Result<CatalogConfig> {
    let mut config = CatalogConfig::load_layered(args.config_file.as_deref())?;

    if let Some(indent) = args.indent {
        config = config.with_indent_width(indent);
    }

    config.validate()?;
    Ok(config)
}

/// Print a short human-readable summary on stderr
fn print_summary(summary: &RunSummary) {
    let destination = summary
        .output_path
        .as_ref()
        .map_or_else(|| "stdout".to_string(), |path| path.display().to_string());

    eprintln!(
        "{} {} records ({} bytes) written to {} in {:.2}s",
        "✓".green().bold(),
        summary.records_emitted.to_string().bright_white().bold(),
        summary.bytes_written,
        destination.bright_cyan(),
        summary.processing_time.as_secs_f64()
    );

    for (category, stats) in &summary.category_stats {
        eprintln!(
            "  {:<14} {} rows, {} records, {} sizes",
            category.to_string().bright_yellow(),
            stats.rows_read,
            stats.records_created - stats.duplicate_identifiers.len(),
            stats.size_variants
        );
    }

    let duplicates = summary.duplicate_count();
    if duplicates > 0 {
        eprintln!(
            "  {} {} duplicate identifier(s) replaced earlier rows",
            "!".yellow().bold(),
            duplicates
        );
    }
}

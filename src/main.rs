use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use carbonmap::cli::{Cli, Commands};
use carbonmap::config::{self, CONFIG_FILE_NAME};
use carbonmap::report::writer::{self, OutputFormat, ReportKind};
use carbonmap::report::ReportEngine;
use carbonmap::server;
use carbonmap::store::{JsonSnapshotStore, SnapshotStore};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            snapshot,
            report,
            format,
            output,
            config,
        } => handle_report(snapshot, report, format, output, config),
        Commands::Serve {
            snapshot,
            bind,
            token,
            config,
        } => handle_serve(snapshot, bind, token, config),
        Commands::Init { force } => {
            config::write_default_config(Path::new(CONFIG_FILE_NAME), force)?;
            eprintln!("wrote {CONFIG_FILE_NAME}");
            Ok(())
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn handle_report(
    snapshot: PathBuf,
    kind: ReportKind,
    format: OutputFormat,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = config::load_config(config_path.as_deref())?;
    let engine = ReportEngine::new(JsonSnapshotStore::new(snapshot), config.engine);

    let mut out: Box<dyn Write> = match output {
        Some(path) => Box::new(
            fs::File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    match (kind, format) {
        (ReportKind::Item, OutputFormat::Terminal) => {
            writer::write_item_table(&mut out, &engine.emissions_rollup()?)?;
        }
        (ReportKind::Item, OutputFormat::Json) => {
            let report = engine.emissions_by_item()?;
            log_warnings(&report.warnings);
            writer::write_json(&mut out, &report.rows)?;
        }
        (ReportKind::Supplier, OutputFormat::Terminal) => {
            writer::write_supplier_table(&mut out, &engine.emissions_rollup()?)?;
        }
        (ReportKind::Supplier, OutputFormat::Json) => {
            let report = engine.emissions_by_supplier()?;
            log_warnings(&report.warnings);
            writer::write_json(&mut out, &report.rows)?;
        }
        (ReportKind::Recommendations, OutputFormat::Terminal) => {
            writer::write_recommendations_table(&mut out, &engine.ai_recommendations()?)?;
        }
        (ReportKind::Recommendations, OutputFormat::Json) => {
            let report = engine.ai_recommendations()?;
            log_warnings(&report.warnings);
            writer::write_json(&mut out, &report.rows)?;
        }
    }
    Ok(())
}

fn log_warnings(warnings: &[carbonmap::extract::IntegrityIssue]) {
    for issue in warnings {
        tracing::warn!(%issue, "degraded report");
    }
}

fn handle_serve(
    snapshot: PathBuf,
    bind: Option<String>,
    token: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = config::load_config(config_path.as_deref())?;
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    if token.is_some() {
        config.server.bearer_token = token;
    }

    let store: Arc<dyn SnapshotStore> = Arc::new(JsonSnapshotStore::new(snapshot));
    server::run(store, config).context("server terminated")
}

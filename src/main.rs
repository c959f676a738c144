//! hidol-content build step entry point.
//!
//! Loads every dataset from `CONTENT_DIR` and writes the JSON page views
//! into `OUTPUT_DIR`.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hidol_content::catalog::ContentCatalog;
use hidol_content::config::{ContentConfig, LogFormat};
use hidol_content::error::ContentError;
use hidol_content::export;

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ContentConfig::from_env().context("loading configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
    }

    tracing::info!(
        content_dir = %config.content_dir.display(),
        output_dir = %config.output_dir.display(),
        strict = config.strict,
        "starting hidol-content"
    );

    let catalog = ContentCatalog::load_dir(&config.content_dir)
        .with_context(|| format!("loading content from {}", config.content_dir.display()))?;

    let written = export::write_page_views(&catalog, &config.output_dir)
        .with_context(|| format!("writing page views to {}", config.output_dir.display()))?;

    let report = catalog.report();
    for dataset in &report.datasets {
        tracing::info!(
            dataset = %dataset.dataset,
            records = dataset.records,
            dropped = dataset.dropped,
            diagnostics = dataset.diagnostics.len(),
            "dataset summary"
        );
    }

    let count = report.diagnostic_count();
    if config.strict && count > 0 {
        let err = ContentError::StrictDiagnostics { count };
        tracing::error!(code = err.error_code(), "{err}");
        return Err(err.into());
    }

    tracing::info!(files = written.len(), "content build finished");
    Ok(())
}

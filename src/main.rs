use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use hubdigest::config::Settings;
use hubdigest::pipeline::{self, Collected, Delivery};
use hubdigest::render::render;
use hubdigest::{logging, ItemSummary};
use hubdigest_adapters::registry::RegistryAdapter;
use hubdigest_adapters::smtp::SmtpMailer;
use hubdigest_adapters::Mailer;

#[derive(Parser, Debug)]
#[command(name = "hubdigest")]
#[command(about = "Email a digest of Hugging Face models and datasets created in the last 24 hours")]
struct Args {
    /// Path to a TOML config file (environment variables override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Registry tag to filter on (e.g. "zh")
    #[arg(short, long)]
    tag: Option<String>,

    /// Number of items requested per category
    #[arg(long)]
    page_size: Option<u32>,

    /// Compute the digest but never send it
    #[arg(long)]
    dry_run: bool,

    /// Write the digest to a file and exit (JSON when the path ends in .json, HTML otherwise)
    #[arg(short, long)]
    export: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(tag) = args.tag {
        settings.tag = tag;
    }
    if let Some(page_size) = args.page_size {
        settings.page_size = page_size;
    }

    let source = RegistryAdapter::builder()
        .endpoint(settings.registry_endpoint.as_str())
        .tag(settings.tag.as_str())
        .page_size(settings.page_size)
        .build()
        .context("Failed to set up registry client")?;

    let now = Utc::now();

    // Handle export mode (no delivery)
    if let Some(export_path) = args.export {
        let collected = pipeline::collect(&source, now).await?;
        return export_to_file(&collected, &settings.tag, now, &export_path);
    }

    let delivery = if args.dry_run {
        info!("Dry run requested, digest will not be sent.");
        None
    } else {
        build_delivery(&settings)?
    };

    pipeline::run(&source, delivery.as_ref(), now, Local::now().date_naive()).await?;
    Ok(())
}

/// Build the SMTP delivery path, or `None` when credentials or recipients
/// are missing.
fn build_delivery(settings: &Settings) -> Result<Option<Delivery>> {
    let Some(config) = settings.delivery() else {
        warn!("Email credentials or recipients not set; running in dry-run mode.");
        return Ok(None);
    };

    let mailer = SmtpMailer::builder()
        .relay(config.smtp_server.as_str())
        .port(config.smtp_port)
        .credentials(config.sender.as_str(), config.password.as_str())
        .build()
        .context("Failed to set up SMTP transport")?;
    let mailer: Arc<dyn Mailer> = Arc::new(mailer);

    Ok(Some(Delivery::new(
        mailer,
        config.recipients,
        config.max_concurrent,
    )))
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    subject: &'a str,
    tag: &'a str,
    generated_at: DateTime<Utc>,
    models: &'a [ItemSummary],
    datasets: &'a [ItemSummary],
}

/// Write the rendered digest (or its data as JSON) to a file.
fn export_to_file(
    collected: &Collected,
    tag: &str,
    now: DateTime<Utc>,
    export_path: &Path,
) -> Result<()> {
    let digest = render(
        &collected.models,
        &collected.datasets,
        Local::now().date_naive(),
    );

    let is_json = export_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let content = if is_json {
        serde_json::to_string_pretty(&ExportDocument {
            subject: &digest.subject,
            tag,
            generated_at: now,
            models: &collected.models,
            datasets: &collected.datasets,
        })?
    } else {
        digest.html
    };

    std::fs::write(export_path, content)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;

    info!("Exported digest to: {}", export_path.display());
    Ok(())
}

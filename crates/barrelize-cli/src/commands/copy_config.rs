//! Implementation of the `barrelize copy-config` command.

use tracing::instrument;

use barrelize_adapters::LocalFilesystem;
use barrelize_core::application::CopyService;

use crate::{
    cli::CopyConfigArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(destination = %args.destination.display()))]
pub fn execute(args: CopyConfigArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let source = args.source.unwrap_or_else(|| config.copy.source.clone());
    let exclusions = config.exclusions();

    let report = CopyService::new(Box::new(LocalFilesystem::new()))
        .copy(&source, &args.destination, &exclusions)
        .with_cli_context(|| "copying configuration")?;

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    for copied in &report.copied {
        output.detail(&format!("Copied {}", copied.display()))?;
    }
    for skipped in &report.skipped {
        output.detail(&format!("Skipped {}", skipped.display()))?;
    }
    output.success(&format!(
        "Copied {} to {} ({} file{})",
        report.source.display(),
        report.destination.display(),
        report.copied_count(),
        if report.copied_count() == 1 { "" } else { "s" },
    ))?;

    Ok(())
}

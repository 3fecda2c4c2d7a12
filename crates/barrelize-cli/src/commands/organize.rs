//! Implementation of the `barrelize organize` command.
//!
//! Responsibility: merge CLI overrides into the configured settings, call
//! the core organize service, and display results. No business logic lives
//! here.

use tracing::instrument;

use barrelize_adapters::LocalFilesystem;
use barrelize_core::{
    application::OrganizeService,
    domain::{OrganizeReport, OrganizeSettings, OrganizedComponent},
};

use crate::{
    cli::OrganizeArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: OrganizeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings = resolve_settings(&args, &config);
    let service = OrganizeService::new(Box::new(LocalFilesystem::new()));

    let report = if args.dry_run {
        service.plan(&settings).with_cli_context(|| "planning")?
    } else {
        // Lines go out as each file lands, so a later failure still leaves
        // an accurate record of what moved.
        let mut write_err = None;
        let report = service
            .organize_with(&settings, |component| {
                if write_err.is_none() && !output.is_json() {
                    write_err = print_component(&output, component, false).err();
                }
            })
            .with_cli_context(|| "organizing")?;
        if let Some(e) = write_err {
            return Err(e.into());
        }
        report
    };

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    if report.dry_run {
        for component in &report.components {
            print_component(&output, component, true)?;
        }
    }
    print_summary(&output, &report)?;

    Ok(())
}

/// Flags win over config; config wins over built-in defaults.
pub(crate) fn resolve_settings(args: &OrganizeArgs, config: &AppConfig) -> OrganizeSettings {
    let mut settings = config.organize_settings();
    if let Some(root) = &args.root {
        settings.root = root.clone();
    }
    if let Some(ext) = &args.extension {
        settings.extension = ext.clone();
    }
    if let Some(ext) = &args.index_extension {
        settings.index_extension = ext.clone();
    }
    settings
}

pub(crate) fn print_component(
    output: &OutputManager,
    component: &OrganizedComponent,
    dry_run: bool,
) -> std::io::Result<()> {
    let line = format!(
        "{} \u{2192} {}",
        component.file_name,
        component.plan.relative_primary()
    );
    if dry_run {
        output.info(&format!("Would move {line}"))?;
    } else {
        output.success(&line)?;
    }
    output.detail(&format!("Exports: {}", component.exports_summary()))
}

pub(crate) fn print_summary(output: &OutputManager, report: &OrganizeReport) -> std::io::Result<()> {
    if report.is_empty() {
        return output.info(&format!(
            "No flat component files to organize in {}",
            report.root.display()
        ));
    }

    let noun = if report.processed == 1 {
        "component"
    } else {
        "components"
    };
    if report.dry_run {
        output.info(&format!(
            "Dry run: {} {noun} would be organized",
            report.processed
        ))
    } else {
        output.success(&format!("Organized {} {noun}", report.processed))
    }
}

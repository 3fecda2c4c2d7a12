//! Implementation of the `barrelize add` command.
//!
//! Runs the configured component generator, then organizes its output in
//! the same process. A failing generator's exit code becomes ours.

use tracing::{info, instrument};

use barrelize_adapters::{LocalFilesystem, SystemCommandRunner};
use barrelize_core::application::{AddOutcome, AddService, OrganizeService};

use crate::{
    cli::{AddArgs, OrganizeArgs},
    commands::organize::{print_component, print_summary, resolve_settings},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(components = ?args.components))]
pub fn execute(args: AddArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    validate_components(&args.components)?;
    let generator = config.generator_settings()?;
    let organize = resolve_settings(
        &OrganizeArgs {
            root: args.root.clone(),
            ..OrganizeArgs::default()
        },
        &config,
    );

    let service = AddService::new(
        Box::new(SystemCommandRunner::new()),
        OrganizeService::new(Box::new(LocalFilesystem::new())),
    );

    if !output.is_json() {
        output.header(&format!("Adding {}...", args.components.join(", ")))?;
    }

    let mut write_err = None;
    let outcome = service
        .add(
            &generator,
            &args.components,
            (!args.skip_organize).then_some(&organize),
            |component| {
                if write_err.is_none() && !output.is_json() {
                    write_err = print_component(&output, component, false).err();
                }
            },
        )
        .with_cli_context(|| "adding components")?;
    if let Some(e) = write_err {
        return Err(e.into());
    }

    match outcome {
        AddOutcome::Organized(report) => {
            if output.is_json() {
                output.json(&report)?;
            } else {
                print_summary(&output, &report)?;
            }
        }
        AddOutcome::GeneratedOnly => {
            info!("Skipping organize step");
            output.info("Generator finished; skipped organizing")?;
        }
    }

    Ok(())
}

/// Component names are passed straight to the generator; reject ones that
/// would be read as flags or are blank.
fn validate_components(components: &[String]) -> CliResult<()> {
    for name in components {
        if name.trim().is_empty() {
            return Err(CliError::InvalidInput {
                message: "component name cannot be empty".into(),
                source: None,
            });
        }
        if name.starts_with('-') {
            return Err(CliError::InvalidInput {
                message: format!("'{name}' looks like a flag, not a component name"),
                source: None,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(validate_components(&["card".into(), "alert-dialog".into()]).is_ok());
    }

    #[test]
    fn rejects_blank_and_flag_like_names() {
        assert!(matches!(
            validate_components(&["  ".into()]),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(matches!(
            validate_components(&["card".into(), "--overwrite".into()]),
            Err(CliError::InvalidInput { .. })
        ));
    }
}

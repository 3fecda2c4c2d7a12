//! Add Service - wraps the third-party component generator.
//!
//! Runs the generator for the requested components and, when it succeeds,
//! reorganizes whatever flat files it produced. A non-zero generator exit
//! stops here with [`ApplicationError::GeneratorFailed`] carrying the code.

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::CommandRunner, services::OrganizeService},
    domain::{GeneratorSettings, OrganizeReport, OrganizeSettings, OrganizedComponent},
    error::BarrelizeResult,
};

/// What happened after the generator succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The generator ran and the UI directory was reorganized.
    Organized(OrganizeReport),
    /// The generator ran; reorganizing was not requested.
    GeneratedOnly,
}

pub struct AddService {
    runner: Box<dyn CommandRunner>,
    organizer: OrganizeService,
}

impl AddService {
    pub fn new(runner: Box<dyn CommandRunner>, organizer: OrganizeService) -> Self {
        Self { runner, organizer }
    }

    /// Generate `components`, then organize with `organize` if given.
    #[instrument(skip_all, fields(components = components.len()))]
    pub fn add<F>(
        &self,
        generator: &GeneratorSettings,
        components: &[String],
        organize: Option<&OrganizeSettings>,
        on_component: F,
    ) -> BarrelizeResult<AddOutcome>
    where
        F: FnMut(&OrganizedComponent),
    {
        let invocation = generator.invocation(components)?;
        info!(command = %invocation, "Running component generator");

        let code = self.runner.run(&invocation)?;
        if code != 0 {
            warn!(command = %invocation, code, "Component generator failed");
            return Err(ApplicationError::GeneratorFailed {
                command: invocation.to_string(),
                code,
            }
            .into());
        }

        match organize {
            Some(settings) => Ok(AddOutcome::Organized(
                self.organizer.organize_with(settings, on_component)?,
            )),
            None => Ok(AddOutcome::GeneratedOnly),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::ports::{DirEntry, MockCommandRunner, MockFilesystem};
    use crate::domain::CommandInvocation;
    use crate::error::BarrelizeError;

    fn settings() -> OrganizeSettings {
        OrganizeSettings {
            root: PathBuf::from("ui"),
            ..OrganizeSettings::default()
        }
    }

    #[test]
    fn generator_failure_propagates_code_and_skips_organize() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|inv: &CommandInvocation| inv.args == ["shadcn", "add", "button"])
            .times(1)
            .returning(|_| Ok(3));

        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().never();
        fs.expect_read_dir().never();

        let service = AddService::new(Box::new(runner), OrganizeService::new(Box::new(fs)));
        let err = service
            .add(
                &GeneratorSettings::default(),
                &["button".into()],
                Some(&settings()),
                |_| {},
            )
            .unwrap_err();

        assert_eq!(err.child_exit_code(), Some(3));
        assert!(matches!(
            err,
            BarrelizeError::Application(ApplicationError::GeneratorFailed { code: 3, .. })
        ));
    }

    #[test]
    fn success_runs_organizer() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(1).returning(|_| Ok(0));

        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_read_dir()
            .returning(|_| Ok(vec![DirEntry::file("card.tsx")]));
        fs.expect_read_to_string()
            .returning(|_| Ok("export { Card, CardHeader }".into()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_rename().returning(|_, _| Ok(()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let service = AddService::new(Box::new(runner), OrganizeService::new(Box::new(fs)));
        let outcome = service
            .add(
                &GeneratorSettings::default(),
                &["card".into()],
                Some(&settings()),
                |_| {},
            )
            .unwrap();

        match outcome {
            AddOutcome::Organized(report) => assert_eq!(report.processed, 1),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn skip_organize_only_generates() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(|_| Ok(0));
        let mut fs = MockFilesystem::new();
        fs.expect_read_dir().never();

        let service = AddService::new(Box::new(runner), OrganizeService::new(Box::new(fs)));
        let outcome = service
            .add(&GeneratorSettings::default(), &["badge".into()], None, |_| {})
            .unwrap();
        assert_eq!(outcome, AddOutcome::GeneratedOnly);
    }

    #[test]
    fn spawn_error_is_returned_as_is() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(|inv| {
            Err(ApplicationError::SpawnFailed {
                command: inv.to_string(),
                reason: "not found".into(),
            }
            .into())
        });
        let fs = MockFilesystem::new();

        let service = AddService::new(Box::new(runner), OrganizeService::new(Box::new(fs)));
        let err = service
            .add(&GeneratorSettings::default(), &["badge".into()], None, |_| {})
            .unwrap_err();
        assert_eq!(err.child_exit_code(), None);
    }
}

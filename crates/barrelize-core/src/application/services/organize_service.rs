//! Organize Service - the component reorganizer.
//!
//! This service turns flat component files into a folder-per-component layout:
//! 1. List the root directory (non-recursive)
//! 2. Skip directories (already organized) and foreign extensions
//! 3. For each remaining file: extract exports, plan paths, move, write barrel
//!
//! Files are processed one at a time. The first failure aborts the batch;
//! files moved before it stay organized and are skipped on the next run.

use tracing::{debug, error, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        BarrelFile, ComponentPlan, OrganizeReport, OrganizeSettings, OrganizedComponent,
        extract_exports,
    },
    error::BarrelizeResult,
};

/// Component reorganizer.
pub struct OrganizeService {
    filesystem: Box<dyn Filesystem>,
}

impl OrganizeService {
    /// Create a new organize service on top of a filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Organize every flat component file under `settings.root`.
    pub fn organize(&self, settings: &OrganizeSettings) -> BarrelizeResult<OrganizeReport> {
        self.organize_with(settings, |_| {})
    }

    /// Like [`Self::organize`], calling `on_component` after each file is done.
    pub fn organize_with<F>(
        &self,
        settings: &OrganizeSettings,
        on_component: F,
    ) -> BarrelizeResult<OrganizeReport>
    where
        F: FnMut(&OrganizedComponent),
    {
        self.run(settings, false, on_component)
    }

    /// Compute what [`Self::organize`] would do without touching the disk.
    pub fn plan(&self, settings: &OrganizeSettings) -> BarrelizeResult<OrganizeReport> {
        self.run(settings, true, |_| {})
    }

    #[instrument(skip_all, fields(root = %settings.root.display(), dry_run = dry_run))]
    fn run<F>(
        &self,
        settings: &OrganizeSettings,
        dry_run: bool,
        mut on_component: F,
    ) -> BarrelizeResult<OrganizeReport>
    where
        F: FnMut(&OrganizedComponent),
    {
        settings.validate()?;

        if !self.filesystem.is_dir(&settings.root) {
            return Err(ApplicationError::DirectoryNotFound {
                path: settings.root.clone(),
            }
            .into());
        }

        let entries = self.filesystem.read_dir(&settings.root)?;
        let mut report = OrganizeReport {
            root: settings.root.clone(),
            dry_run,
            ..OrganizeReport::default()
        };

        for entry in entries {
            if entry.is_dir {
                debug!(entry = %entry.name, "Skipping directory (already organized)");
                continue;
            }
            if !settings.matches(&entry.name) {
                debug!(entry = %entry.name, "Skipping file with other extension");
                continue;
            }

            let component = self
                .organize_file(settings, &entry.name, dry_run)
                .inspect_err(|e| {
                    error!(
                        file = %entry.name,
                        processed = report.processed,
                        error = %e,
                        "Aborting batch"
                    );
                })?;

            info!(
                file = %component.file_name,
                component = %component.plan.name,
                exports = component.exports.len(),
                "Component organized"
            );

            on_component(&component);
            report.processed += 1;
            report.components.push(component);
        }

        Ok(report)
    }

    fn organize_file(
        &self,
        settings: &OrganizeSettings,
        file_name: &str,
        dry_run: bool,
    ) -> BarrelizeResult<OrganizedComponent> {
        let plan = ComponentPlan::for_file(settings, file_name)?;
        let content = self.filesystem.read_to_string(&plan.source)?;
        let exports = extract_exports(&content);

        if !dry_run {
            self.filesystem.create_dir_all(&plan.directory)?;
            self.filesystem.rename(&plan.source, &plan.primary_file)?;

            let barrel = BarrelFile::generate(&plan.name, &exports);
            self.filesystem.write_file(&plan.index_file, barrel.content())?;
        }

        Ok(OrganizedComponent {
            file_name: file_name.to_owned(),
            plan,
            exports,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::application::ports::{DirEntry, MockFilesystem};
    use crate::error::BarrelizeError;

    fn settings() -> OrganizeSettings {
        OrganizeSettings {
            root: PathBuf::from("ui"),
            ..OrganizeSettings::default()
        }
    }

    fn io_failure(path: &Path) -> BarrelizeError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "permission denied".into(),
        }
        .into()
    }

    #[test]
    fn moves_flat_file_and_skips_directories() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_read_dir().times(1).returning(|_| {
            Ok(vec![
                DirEntry::file("button.tsx"),
                DirEntry::dir("Card"),
                DirEntry::file("README.md"),
            ])
        });
        fs.expect_read_to_string()
            .withf(|p: &Path| p == Path::new("ui/button.tsx"))
            .times(1)
            .returning(|_| Ok("export function Button() {}".into()));
        fs.expect_create_dir_all()
            .withf(|p: &Path| p == Path::new("ui/Button"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_rename()
            .withf(|from: &Path, to: &Path| {
                from == Path::new("ui/button.tsx") && to == Path::new("ui/Button/Button.tsx")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p: &Path, content: &str| {
                p == Path::new("ui/Button/index.ts")
                    && content == "export { Button } from \"./Button\";\n"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let report = OrganizeService::new(Box::new(fs))
            .organize(&settings())
            .unwrap();

        assert_eq!(report.processed, 1);
        assert!(!report.dry_run);
        assert_eq!(report.components[0].plan.name, "Button");
    }

    #[test]
    fn nothing_to_do_reports_zero() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_read_dir()
            .returning(|_| Ok(vec![DirEntry::dir("Button"), DirEntry::dir("Card")]));

        let report = OrganizeService::new(Box::new(fs))
            .organize(&settings())
            .unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn missing_root_is_not_found() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);

        let err = OrganizeService::new(Box::new(fs))
            .organize(&settings())
            .unwrap_err();
        assert!(matches!(
            err,
            BarrelizeError::Application(ApplicationError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn dry_run_does_not_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_read_dir()
            .returning(|_| Ok(vec![DirEntry::file("alert-dialog.tsx")]));
        fs.expect_read_to_string()
            .returning(|_| Ok("export { AlertDialog, AlertDialogTrigger }".into()));
        fs.expect_create_dir_all().never();
        fs.expect_rename().never();
        fs.expect_write_file().never();

        let report = OrganizeService::new(Box::new(fs))
            .plan(&settings())
            .unwrap();
        assert!(report.dry_run);
        assert_eq!(report.processed, 1);
        assert_eq!(
            report.components[0].exports_summary(),
            "AlertDialog, AlertDialogTrigger"
        );
    }

    #[test]
    fn first_failure_aborts_the_batch() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_read_dir().returning(|_| {
            Ok(vec![
                DirEntry::file("badge.tsx"),
                DirEntry::file("button.tsx"),
                DirEntry::file("card.tsx"),
            ])
        });
        fs.expect_read_to_string()
            .times(2)
            .returning(|_| Ok(String::new()));
        fs.expect_create_dir_all().times(2).returning(|_| Ok(()));
        fs.expect_rename().times(2).returning(|from, _| {
            if from == Path::new("ui/button.tsx") {
                Err(io_failure(from))
            } else {
                Ok(())
            }
        });
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let mut seen = Vec::new();
        let result = OrganizeService::new(Box::new(fs))
            .organize_with(&settings(), |c| seen.push(c.file_name.clone()));

        assert!(matches!(
            result,
            Err(BarrelizeError::Application(ApplicationError::FilesystemError { .. }))
        ));
        assert_eq!(seen, ["badge.tsx"]);
    }

    #[test]
    fn invalid_settings_fail_before_listing() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().never();
        fs.expect_read_dir().never();

        let bad = OrganizeSettings {
            extension: String::new(),
            ..settings()
        };
        let err = OrganizeService::new(Box::new(fs)).organize(&bad).unwrap_err();
        assert!(matches!(err, BarrelizeError::Domain(_)));
    }
}

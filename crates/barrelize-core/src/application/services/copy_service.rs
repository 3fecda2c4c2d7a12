//! Copy Service - copies a configuration tree to another project.
//!
//! Every file below the source is copied to the same relative path under the
//! destination, except files (or directories) named in the exclusion list.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{CopyReport, ExclusionList},
    error::BarrelizeResult,
};

/// Service for copying configuration trees.
pub struct CopyService {
    filesystem: Box<dyn Filesystem>,
}

impl CopyService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Copy `source` into `destination`, leaving excluded files behind.
    #[instrument(
        skip_all,
        fields(source = %source.display(), destination = %destination.display())
    )]
    pub fn copy(
        &self,
        source: &Path,
        destination: &Path,
        exclusions: &ExclusionList,
    ) -> BarrelizeResult<CopyReport> {
        if !self.filesystem.is_dir(source) {
            return Err(ApplicationError::DirectoryNotFound {
                path: source.to_path_buf(),
            }
            .into());
        }

        let mut report = CopyReport {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            ..CopyReport::default()
        };

        for relative in self.filesystem.walk_files(source)? {
            // An excluded directory name hides everything below it.
            let excluded = relative
                .ancestors()
                .filter(|a| !a.as_os_str().is_empty())
                .any(|a| exclusions.is_excluded(a));
            if excluded {
                info!(path = %relative.display(), "Skipping excluded file");
                report.skipped.push(relative);
                continue;
            }

            let target = destination.join(&relative);
            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.copy_file(&source.join(&relative), &target)?;
            debug!(path = %relative.display(), "Copied");
            report.copied.push(relative);
        }

        info!(
            copied = report.copied_count(),
            skipped = report.skipped.len(),
            "Copy finished"
        );
        Ok(report)
    }
}

//! Results of a single run, serializable for `--output-format json`.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{exports::ExportName, plan::ComponentPlan};

/// One flat file that was (or, in a dry run, would be) organized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizedComponent {
    pub file_name: String,
    pub plan: ComponentPlan,
    pub exports: Vec<ExportName>,
}

impl OrganizedComponent {
    /// Comma separated export list, or `(wildcard export)`.
    pub fn exports_summary(&self) -> String {
        if self.exports.is_empty() {
            "(wildcard export)".into()
        } else {
            self.exports
                .iter()
                .map(ExportName::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizeReport {
    pub root: PathBuf,
    pub dry_run: bool,
    pub processed: usize,
    pub components: Vec<OrganizedComponent>,
}

impl OrganizeReport {
    pub fn is_empty(&self) -> bool {
        self.processed == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CopyReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub copied: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl CopyReport {
    pub fn copied_count(&self) -> usize {
        self.copied.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::OrganizeSettings;

    fn component(exports: &[&str]) -> OrganizedComponent {
        let settings = OrganizeSettings::default();
        OrganizedComponent {
            file_name: "alert-dialog.tsx".into(),
            plan: ComponentPlan::for_file(&settings, "alert-dialog.tsx").unwrap(),
            exports: exports.iter().map(|e| ExportName::from(*e)).collect(),
        }
    }

    #[test]
    fn summary_lists_exports_or_wildcard() {
        assert_eq!(
            component(&["AlertDialog", "AlertDialogTrigger"]).exports_summary(),
            "AlertDialog, AlertDialogTrigger"
        );
        assert_eq!(component(&[]).exports_summary(), "(wildcard export)");
    }

    #[test]
    fn report_serializes_exports_as_strings() {
        let report = OrganizeReport {
            root: "src/shared/ui".into(),
            dry_run: true,
            processed: 1,
            components: vec![component(&["AlertDialog"])],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["processed"], 1);
        assert_eq!(json["components"][0]["plan"]["name"], "AlertDialog");
        assert_eq!(json["components"][0]["exports"][0], "AlertDialog");
    }
}

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{error::DomainError, settings::OrganizeSettings};

/// Convert a hyphen/underscore separated file stem into a component name.
///
/// Only the first character of each word is upper-cased; interior capitals
/// are left alone (`data-Table` -> `DataTable`, `alert_dialog` -> `AlertDialog`).
pub fn to_identifier_case(stem: &str) -> String {
    stem.split(['-', '_'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Where a flat component file ends up once organized.
///
/// `directory` and `primary_file` always share [`ComponentPlan::name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentPlan {
    /// Identifier-cased component name, e.g. `AlertDialog`.
    pub name: String,
    /// The flat file as it exists today: `<root>/alert-dialog.tsx`.
    pub source: PathBuf,
    /// `<root>/AlertDialog`
    pub directory: PathBuf,
    /// `<root>/AlertDialog/AlertDialog.tsx`
    pub primary_file: PathBuf,
    /// `<root>/AlertDialog/index.ts`
    pub index_file: PathBuf,
}

impl ComponentPlan {
    /// Plan the layout for `file_name` (e.g. `alert-dialog.tsx`) under the
    /// configured root.
    pub fn for_file(settings: &OrganizeSettings, file_name: &str) -> Result<Self, DomainError> {
        // `.tsx` alone has an empty stem; `file_stem` would report `.tsx`.
        let stem = file_name
            .strip_suffix(settings.extension.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
            .or_else(|| Path::new(file_name).file_stem().and_then(|s| s.to_str()))
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| DomainError::InvalidFileName {
                name: file_name.into(),
                reason: "file name has no stem".into(),
            })?;

        let name = to_identifier_case(stem);
        if name.is_empty() {
            return Err(DomainError::InvalidFileName {
                name: file_name.into(),
                reason: "stem contains no word characters".into(),
            });
        }

        let directory = settings.root.join(&name);
        let primary_file = directory.join(format!("{name}.{}", settings.extension));
        let index_file = directory.join(format!("index.{}", settings.index_extension));

        Ok(Self {
            source: settings.root.join(file_name),
            name,
            directory,
            primary_file,
            index_file,
        })
    }

    /// Path of the primary file relative to the root, for display.
    pub fn relative_primary(&self) -> String {
        format!(
            "{}/{}",
            self.name,
            self.primary_file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> OrganizeSettings {
        OrganizeSettings {
            root: PathBuf::from("ui"),
            ..OrganizeSettings::default()
        }
    }

    #[test]
    fn hyphenated_name_is_capitalised() {
        assert_eq!(to_identifier_case("alert-dialog"), "AlertDialog");
    }

    #[test]
    fn underscores_split_words_too() {
        assert_eq!(to_identifier_case("input_otp"), "InputOtp");
        assert_eq!(to_identifier_case("drop-down_menu"), "DropDownMenu");
    }

    #[test]
    fn interior_capitals_are_preserved() {
        assert_eq!(to_identifier_case("data-tableHeader"), "DataTableHeader");
        assert_eq!(to_identifier_case("OTPInput"), "OTPInput");
    }

    #[test]
    fn repeated_separators_collapse() {
        assert_eq!(to_identifier_case("a--b"), "AB");
    }

    #[test]
    fn alert_dialog_plan() {
        let plan = ComponentPlan::for_file(&settings(), "alert-dialog.tsx").unwrap();
        assert_eq!(plan.name, "AlertDialog");
        assert_eq!(plan.source, PathBuf::from("ui/alert-dialog.tsx"));
        assert_eq!(plan.directory, PathBuf::from("ui/AlertDialog"));
        assert_eq!(plan.primary_file, PathBuf::from("ui/AlertDialog/AlertDialog.tsx"));
        assert_eq!(plan.index_file, PathBuf::from("ui/AlertDialog/index.ts"));
        assert_eq!(plan.relative_primary(), "AlertDialog/AlertDialog.tsx");
    }

    #[test]
    fn plan_honours_configured_extensions() {
        let settings = OrganizeSettings {
            root: PathBuf::from("src/components"),
            extension: "jsx".into(),
            index_extension: "js".into(),
        };
        let plan = ComponentPlan::for_file(&settings, "card.jsx").unwrap();
        assert_eq!(
            plan.primary_file,
            PathBuf::from("src/components/Card/Card.jsx")
        );
        assert_eq!(plan.index_file, PathBuf::from("src/components/Card/index.js"));
    }

    #[test]
    fn separator_only_stem_is_rejected() {
        assert!(matches!(
            ComponentPlan::for_file(&settings(), "-.tsx"),
            Err(DomainError::InvalidFileName { .. })
        ));
    }

    #[test]
    fn bare_extension_is_rejected() {
        assert!(matches!(
            ComponentPlan::for_file(&settings(), ".tsx"),
            Err(DomainError::InvalidFileName { .. })
        ));
    }

    #[test]
    fn only_the_configured_extension_is_stripped() {
        let plan = ComponentPlan::for_file(&settings(), "button.stories.tsx").unwrap();
        assert_eq!(plan.name, "Button.stories");
    }
}

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Where flat component files live and which extensions to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizeSettings {
    /// Directory scanned (non-recursively) for flat component files.
    pub root: PathBuf,
    /// Extension of component files, without the dot.
    pub extension: String,
    /// Extension of generated barrel files, without the dot.
    pub index_extension: String,
}

impl Default for OrganizeSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("src/shared/ui"),
            extension: "tsx".into(),
            index_extension: "ts".into(),
        }
    }
}

impl OrganizeSettings {
    /// `true` if `file_name` carries the configured component extension.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name
            .strip_suffix(self.extension.as_str())
            .is_some_and(|rest| rest.ends_with('.'))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.root.as_os_str().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "organize.root",
            });
        }
        for (field, ext) in [
            ("extension", &self.extension),
            ("index_extension", &self.index_extension),
        ] {
            if ext.is_empty() {
                return Err(DomainError::InvalidSettings(format!("{field} cannot be empty")));
            }
            if ext.starts_with('.') {
                return Err(DomainError::InvalidSettings(format!(
                    "{field} '{ext}' must not start with '.'"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_shared_ui() {
        let s = OrganizeSettings::default();
        assert_eq!(s.root, PathBuf::from("src/shared/ui"));
        assert_eq!(s.extension, "tsx");
        assert_eq!(s.index_extension, "ts");
        assert!(s.validate().is_ok());
    }

    #[test]
    fn matches_requires_dot_extension() {
        let s = OrganizeSettings::default();
        assert!(s.matches("button.tsx"));
        assert!(s.matches("alert-dialog.tsx"));
        assert!(!s.matches("button.ts"));
        assert!(!s.matches("buttontsx"));
        assert!(!s.matches("README.md"));
    }

    #[test]
    fn dotted_extension_is_invalid() {
        let s = OrganizeSettings {
            extension: ".tsx".into(),
            ..OrganizeSettings::default()
        };
        assert!(matches!(s.validate(), Err(DomainError::InvalidSettings(_))));
    }
}

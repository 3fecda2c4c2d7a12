use crate::domain::exports::ExportName;

/// Generated content of a component's `index` file.
///
/// Always rebuilt from scratch; an existing barrel is overwritten, never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarrelFile {
    content: String,
}

impl BarrelFile {
    /// Re-export `exports` from `./<component>`, or everything when no
    /// export could be detected.
    pub fn generate(component: &str, exports: &[ExportName]) -> Self {
        let content = if exports.is_empty() {
            format!("export * from \"./{component}\";\n")
        } else {
            let names = exports
                .iter()
                .map(ExportName::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            format!("export {{ {names} }} from \"./{component}\";\n")
        };
        Self { content }
    }

    pub fn is_wildcard(&self) -> bool {
        self.content.starts_with("export *")
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_named_export() {
        let barrel = BarrelFile::generate("Button", &[ExportName::from("Button")]);
        assert_eq!(barrel.content(), "export { Button } from \"./Button\";\n");
        assert!(!barrel.is_wildcard());
    }

    #[test]
    fn empty_exports_become_wildcard() {
        let barrel = BarrelFile::generate("Button", &[]);
        assert_eq!(barrel.content(), "export * from \"./Button\";\n");
        assert!(barrel.is_wildcard());
    }

    #[test]
    fn order_and_duplicates_are_kept() {
        let exports: Vec<ExportName> = ["Card", "CardHeader", "Card"].map(ExportName::from).into();
        let barrel = BarrelFile::generate("Card", &exports);
        assert_eq!(
            barrel.content(),
            "export { Card, CardHeader, Card } from \"./Card\";\n"
        );
    }
}

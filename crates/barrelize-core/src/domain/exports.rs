//! Export name extraction from component source text.
//!
//! Two forms are recognised:
//!
//! - `export { Foo, Bar as Baz }` - named export lists (`Baz`, not `Bar`)
//! - `export function Foo` / `export const Foo` / `export class Foo`
//!
//! Everything else (`export default`, `export * from`, `export type`, ...) is
//! ignored. This is plain text matching, not parsing: a match inside a
//! comment or string literal is reported like any other.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

/// `export { ... }` with the braces' content captured.
static NAMED_EXPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s*\{([^}]+)\}").unwrap());

/// `export function|const|class Name`.
static DIRECT_EXPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+(?:function|const|class)\s+([A-Za-z_$][A-Za-z0-9_$]*)").unwrap()
});

/// Separator in `Foo as Bar` specifiers.
static RENAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+as\s+").unwrap());

/// An identifier exported by a component file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExportName(String);

impl ExportName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExportName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Collect exported identifiers from `content`.
///
/// Named export lists are collected first, then direct declarations, each in
/// textual order. Duplicates are kept.
pub fn extract_exports(content: &str) -> Vec<ExportName> {
    let mut exports = Vec::new();

    for caps in NAMED_EXPORT_RE.captures_iter(content) {
        let names = caps[1]
            .split(',')
            .filter_map(|specifier| {
                // "Foo as Bar" exports "Bar"
                let exported = RENAME_RE.split(specifier.trim()).last()?.trim();
                (!exported.is_empty()).then(|| ExportName::new(exported))
            });
        exports.extend(names);
    }

    exports.extend(
        DIRECT_EXPORT_RE
            .captures_iter(content)
            .map(|caps| ExportName::new(&caps[1])),
    );

    exports
}

use std::path::Path;

/// File names left behind when copying a configuration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionList {
    names: Vec<String>,
}

impl ExclusionList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// `true` when `relative` is an excluded name, at any depth.
    ///
    /// Matching is on `/`-separated text: `settings.local.json` excludes
    /// `settings.local.json` and `nested/settings.local.json`, but not
    /// `old-settings.local.json`.
    pub fn is_excluded(&self, relative: &Path) -> bool {
        let rel = relative.to_string_lossy().replace('\\', "/");
        self.names
            .iter()
            .any(|name| rel == *name || rel.ends_with(&format!("/{name}")))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self::new(["settings.local.json"])
    }
}

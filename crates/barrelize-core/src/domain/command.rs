use std::{collections::BTreeMap, fmt};

use crate::domain::error::DomainError;

/// The external component generator, e.g. `bun shadcn add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub program: String,
    /// Arguments placed before the component names.
    pub args: Vec<String>,
    /// Extra environment for the child process.
    pub env: BTreeMap<String, String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            program: "bun".into(),
            args: vec!["shadcn".into(), "add".into()],
            env: BTreeMap::from([("TS_NODE_PROJECT".into(), "tsconfig.app.json".into())]),
        }
    }
}

impl GeneratorSettings {
    /// Build the invocation that adds `components`.
    pub fn invocation(&self, components: &[String]) -> Result<CommandInvocation, DomainError> {
        if self.program.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "generator.program",
            });
        }
        if components.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "components" });
        }

        Ok(CommandInvocation {
            program: self.program.clone(),
            args: self.args.iter().chain(components).cloned().collect(),
            env: self.env.clone(),
        })
    }
}

/// A fully resolved child-process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

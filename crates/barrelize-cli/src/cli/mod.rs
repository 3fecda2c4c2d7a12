//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "barrelize",
    bin_name = "barrelize",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4c1} Folder-per-component layout for generated UI kits",
    long_about = "Barrelize moves flat UI component files (button.tsx) into \
                  their own directories (Button/Button.tsx) and writes an \
                  index barrel re-exporting what each file exports.",
    after_help = "EXAMPLES:\n\
        \x20 barrelize organize\n\
        \x20 barrelize organize --root src/components --dry-run\n\
        \x20 barrelize add card dialog accordion\n\
        \x20 barrelize copy-config ../other-project/.claude\n\
        \x20 barrelize completions bash > /usr/share/bash-completion/completions/barrelize",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Move flat component files into per-component directories.
    #[command(
        visible_alias = "o",
        about = "Organize flat component files",
        after_help = "EXAMPLES:\n\
            \x20 barrelize organize\n\
            \x20 barrelize organize --root src/components --ext jsx --index-ext js\n\
            \x20 barrelize organize --dry-run"
    )]
    Organize(OrganizeArgs),

    /// Run the component generator, then organize its output.
    #[command(
        about = "Add components with the generator and organize them",
        after_help = "EXAMPLES:\n\
            \x20 barrelize add button\n\
            \x20 barrelize add card dialog accordion\n\
            \x20 barrelize add sonner --skip-organize"
    )]
    Add(AddArgs),

    /// Copy the configuration tree to another project.
    #[command(
        about = "Copy the .claude directory elsewhere",
        after_help = "EXAMPLES:\n\
            \x20 barrelize copy-config ../other-project/.claude\n\
            \x20 barrelize copy-config /tmp/backup --source .claude"
    )]
    CopyConfig(CopyConfigArgs),

    /// Initialise a Barrelize configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 barrelize init           # .barrelize.toml in CWD\n\
            \x20 barrelize init --global  # per-user config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 barrelize completions bash > ~/.local/share/bash-completion/completions/barrelize\n\
            \x20 barrelize completions zsh  > ~/.zfunc/_barrelize\n\
            \x20 barrelize completions fish > ~/.config/fish/completions/barrelize.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Barrelize configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 barrelize config get organize.root\n\
            \x20 barrelize config list\n\
            \x20 barrelize config path"
    )]
    Config(ConfigCommands),
}

// ── organize ──────────────────────────────────────────────────────────────────

/// Arguments for `barrelize organize`.
#[derive(Debug, Default, Args)]
pub struct OrganizeArgs {
    /// Directory holding the flat component files.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "UI directory to organize (default: src/shared/ui)"
    )]
    pub root: Option<PathBuf>,

    /// Component file extension.
    #[arg(
        long = "ext",
        value_name = "EXT",
        help = "Component file extension, without the dot (default: tsx)"
    )]
    pub extension: Option<String>,

    /// Barrel file extension.
    #[arg(
        long = "index-ext",
        value_name = "EXT",
        help = "Barrel file extension, without the dot (default: ts)"
    )]
    pub index_extension: Option<String>,

    /// Preview what would be moved without touching any file.
    #[arg(long = "dry-run", help = "Show what would be organized without moving")]
    pub dry_run: bool,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `barrelize add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Components to generate, e.g. `button card`.
    #[arg(value_name = "COMPONENT", required = true, num_args = 1..)]
    pub components: Vec<String>,

    /// Only run the generator.
    #[arg(long = "skip-organize", help = "Do not organize after generating")]
    pub skip_organize: bool,

    /// Directory the generator writes into.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "UI directory to organize afterwards"
    )]
    pub root: Option<PathBuf>,
}

// ── copy-config ───────────────────────────────────────────────────────────────

/// Arguments for `barrelize copy-config`.
#[derive(Debug, Args)]
pub struct CopyConfigArgs {
    /// Destination directory (created if missing).
    #[arg(value_name = "DEST", help = "Destination directory")]
    pub destination: PathBuf,

    /// Directory to copy from.
    #[arg(
        short = 's',
        long = "source",
        value_name = "DIR",
        help = "Directory to copy (default: .claude)"
    )]
    pub source: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `barrelize init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the per-user config location instead of the CWD.
    #[arg(long = "global", help = "Create per-user configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `barrelize completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `barrelize config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `organize.root`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_organize_with_overrides() {
        let cli = Cli::parse_from([
            "barrelize",
            "organize",
            "--root",
            "src/components",
            "--ext",
            "jsx",
            "--dry-run",
        ]);
        match cli.command {
            Commands::Organize(args) => {
                assert_eq!(args.root, Some(PathBuf::from("src/components")));
                assert_eq!(args.extension.as_deref(), Some("jsx"));
                assert!(args.dry_run);
            }
            other => panic!("expected Organize, got {other:?}"),
        }
    }

    #[test]
    fn organize_alias() {
        let cli = Cli::parse_from(["barrelize", "o"]);
        assert!(matches!(cli.command, Commands::Organize(_)));
    }

    #[test]
    fn add_collects_components() {
        let cli = Cli::parse_from(["barrelize", "add", "card", "dialog"]);
        if let Commands::Add(args) = cli.command {
            assert_eq!(args.components, ["card", "dialog"]);
            assert!(!args.skip_organize);
        } else {
            panic!("expected Add command");
        }
    }

    #[test]
    fn add_requires_a_component() {
        assert!(Cli::try_parse_from(["barrelize", "add"]).is_err());
    }

    #[test]
    fn copy_config_requires_destination() {
        assert!(Cli::try_parse_from(["barrelize", "copy-config"]).is_err());
        let cli = Cli::parse_from(["barrelize", "copy-config", "../other/.claude"]);
        assert!(matches!(cli.command, Commands::CopyConfig(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["barrelize", "--quiet", "--verbose", "organize"]);
        assert!(result.is_err());
    }
}

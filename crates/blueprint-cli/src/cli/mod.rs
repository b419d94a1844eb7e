//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text. No business logic lives here: values are passed to the
//! core as raw strings and validated there.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "blueprint",
    bin_name = "blueprint",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Deterministic Spring Boot project skeletons",
    long_about = "Blueprint validates a project description and generates a \
                  Maven-based Spring Boot skeleton, then packages it as a zip.",
    after_help = "EXAMPLES:\n\
        \x20 blueprint new order-service -g com.acme -D web -D data-jpa\n\
        \x20 blueprint new billing --layout hexagonal --enforcement strict --sample-code basic\n\
        \x20 blueprint targets\n\
        \x20 blueprint completions bash > /usr/share/bash-completion/completions/blueprint",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        visible_alias = "n",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 blueprint new order-service\n\
            \x20 blueprint new order-service -g com.acme --java 25 --boot 3.5\n\
            \x20 blueprint new order-service -D web -D org.postgresql:postgresql@runtime\n\
            \x20 blueprint new order-service --dry-run --output-format json"
    )]
    New(NewArgs),

    #[command(about = "List supported Java / Spring Boot combinations")]
    Targets,

    #[command(about = "List the artifacts generated for a project, in order")]
    Artifacts,

    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 blueprint init           # platform config directory\n\
            \x20 blueprint init --local   # .blueprint.toml in the current directory"
    )]
    Init(InitArgs),

    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 blueprint completions bash > ~/.local/share/bash-completion/completions/blueprint\n\
            \x20 blueprint completions zsh  > ~/.zfunc/_blueprint\n\
            \x20 blueprint completions fish > ~/.config/fish/completions/blueprint.fish"
    )]
    Completions(CompletionsArgs),

    #[command(
        about = "Inspect configuration",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 blueprint config get defaults.group_id\n\
            \x20 blueprint config list\n\
            \x20 blueprint config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `blueprint new`. Anything left unset falls back to the
/// `defaults` section of the configuration.
#[derive(Debug, Args)]
pub struct NewArgs {
    #[arg(value_name = "ARTIFACT_ID", help = "Maven artifactId, also the project directory name")]
    pub artifact_id: String,

    #[arg(short = 'g', long = "group", value_name = "GROUP_ID", help = "Maven groupId")]
    pub group_id: Option<String>,

    #[arg(short = 'n', long = "name", help = "Human-readable project name")]
    pub name: Option<String>,

    #[arg(short = 'd', long = "description", help = "Project description")]
    pub description: Option<String>,

    #[arg(
        short = 'p',
        long = "package",
        value_name = "PACKAGE",
        help = "Base Java package (default: derived from group and artifact)"
    )]
    pub package_name: Option<String>,

    #[arg(long = "java", value_name = "VERSION", help = "Java version (21, 25)")]
    pub java_version: Option<String>,

    #[arg(long = "boot", value_name = "VERSION", help = "Spring Boot line (3.4, 3.5)")]
    pub spring_boot_version: Option<String>,

    #[arg(long = "build-tool", value_name = "TOOL", help = "Build tool (maven)")]
    pub build_tool: Option<String>,

    #[arg(long = "language", value_name = "LANGUAGE", help = "Language (java)")]
    pub language: Option<String>,

    #[arg(long = "layout", value_name = "LAYOUT", help = "Package layout (standard, hexagonal)")]
    pub layout: Option<String>,

    #[arg(
        long = "enforcement",
        value_name = "MODE",
        help = "ArchUnit enforcement (none, basic, strict)"
    )]
    pub enforcement_mode: Option<String>,

    #[arg(
        long = "sample-code",
        value_name = "LEVEL",
        help = "Sample code level (none, basic, rich)"
    )]
    pub sample_code_level: Option<String>,

    /// Repeatable. `web`, `data-jpa`, `group:artifact[:version][@scope]`.
    #[arg(
        short = 'D',
        long = "dependency",
        value_name = "SPEC",
        action = clap::ArgAction::Append,
        help = "Add a dependency (repeatable)"
    )]
    pub dependencies: Vec<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,

    #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
    pub yes: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(
        long = "local",
        help = "Create .blueprint.toml in the current directory"
    )]
    pub local: bool,

    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.group_id`.
        key: String,
    },
    /// Print the effective configuration.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

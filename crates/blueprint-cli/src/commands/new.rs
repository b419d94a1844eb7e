//! Implementation of the `blueprint new` command.
//!
//! Responsibility: merge CLI flags over configured defaults into a
//! `ProjectRequest`, call the generation service and display results.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use tracing::{info, instrument};

use blueprint_core::application::GeneratedFileSummary;
use blueprint_core::domain::{DependencyRequest, ProjectRequest};
use blueprint_core::error::BlueprintError;

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::{AppConfig, Defaults},
    error::{CliError, CliResult},
    output::OutputManager,
    wiring,
};

/// What `--dry-run` reports.
#[derive(Debug, Serialize)]
struct DryRunReport {
    project_root: PathBuf,
    files: Vec<GeneratedFileSummary>,
}

/// Execute the `blueprint new` command.
///
/// 1. Build the request from flags and configured defaults
/// 2. `--dry-run`: validate and list the resources, write nothing
/// 3. Confirm unless `--yes`, `--quiet`, JSON output or a non-interactive stdin
/// 4. Generate and archive, then print a summary
#[instrument(skip_all, fields(artifact = %args.artifact_id))]
pub fn execute(
    args: NewArgs,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = build_request(&args, &config.defaults)?;
    let target_dir = resolve_target_dir(args.output.as_deref(), &config);
    let service = wiring::service(&config)?;

    if args.dry_run {
        let preview = service.preview(&request)?;
        let report = DryRunReport {
            project_root: target_dir.join(preview.blueprint.artifact_id().as_str()),
            files: preview.resources.iter().map(GeneratedFileSummary::from).collect(),
        };
        return show_dry_run(&report, &output);
    }

    if !args.yes && !global.quiet && !output.is_json() && stdin_is_interactive() {
        show_configuration(&request, &target_dir, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    let spinner = output.spinner("Generating project...");
    let result = service.generate(&request, &target_dir);
    spinner.finish_and_clear();
    let result = result?;

    info!(
        run_id = %result.run_id,
        files = result.files.len(),
        archive = %result.archive_path.display(),
        "project generated"
    );

    if output.is_json() {
        return output.json(&result);
    }

    // The root is named after the normalized artifact id.
    let artifact = result
        .project_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.success(&format!(
        "Project '{artifact}' created at {}",
        result.project_root.display()
    ))?;
    output.info(&format!("Archive: {}", result.archive_path.display()))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", result.project_root.display()))?;
    output.print("  ./mvnw spring-boot:run")?;
    Ok(())
}

// ── Request construction ──────────────────────────────────────────────────────

fn build_request(args: &NewArgs, defaults: &Defaults) -> CliResult<ProjectRequest> {
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| display_name(&args.artifact_id));
    let description = args
        .description
        .clone()
        .unwrap_or_else(|| format!("{name} Spring Boot service"));
    let group_id = args
        .group_id
        .clone()
        .unwrap_or_else(|| defaults.group_id.clone());

    let pick = |flag: &Option<String>, fallback: &str| {
        Some(flag.clone().unwrap_or_else(|| fallback.to_owned()))
    };

    let mut request = ProjectRequest::new(group_id, args.artifact_id.clone(), name, description);
    request.java_version = pick(&args.java_version, &defaults.java_version);
    request.spring_boot_version = pick(&args.spring_boot_version, &defaults.spring_boot_version);
    request.layout = pick(&args.layout, &defaults.layout);
    request.enforcement_mode = pick(&args.enforcement_mode, &defaults.enforcement_mode);
    request.sample_code_level = pick(&args.sample_code_level, &defaults.sample_code_level);
    request.package_name = args.package_name.clone();
    if let Some(tool) = &args.build_tool {
        request.build_tool = Some(tool.clone());
    }
    if let Some(language) = &args.language {
        request.language = Some(language.clone());
    }

    // Flags replace the configured list rather than adding to it.
    let specs = if args.dependencies.is_empty() {
        &defaults.dependencies
    } else {
        &args.dependencies
    };
    for spec in specs {
        let dependency = DependencyRequest::from_str(spec).map_err(BlueprintError::from)?;
        request = request.with_dependency(dependency);
    }
    Ok(request)
}

fn resolve_target_dir(flag: Option<&Path>, config: &AppConfig) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.output.directory.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// `order-service` → `Order Service`.
fn display_name(artifact_id: &str) -> String {
    artifact_id
        .split(['-', '_', '.'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_dry_run(report: &DryRunReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(report);
    }
    output.info(&format!(
        "Dry run: would create {} ({} entries)",
        report.project_root.display(),
        report.files.len()
    ))?;
    for file in &report.files {
        let line = match file.kind {
            "directory" => format!("  {}/", file.path),
            _ => format!("  {} ({} bytes)", file.path, file.size_bytes),
        };
        output.print(&line)?;
    }
    Ok(())
}

fn show_configuration(
    request: &ProjectRequest,
    target_dir: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    out.header("Configuration")?;
    out.print(&format!("  Group:        {}", field(&request.group_id)))?;
    out.print(&format!("  Artifact:     {}", field(&request.artifact_id)))?;
    out.print(&format!("  Name:         {}", field(&request.name)))?;
    out.print(&format!(
        "  Platform:     Java {} / Spring Boot {}",
        field(&request.java_version),
        field(&request.spring_boot_version)
    ))?;
    out.print(&format!("  Layout:       {}", field(&request.layout)))?;
    out.print(&format!("  Enforcement:  {}", field(&request.enforcement_mode)))?;
    out.print(&format!("  Sample code:  {}", field(&request.sample_code_level)))?;
    out.print(&format!("  Dependencies: {}", request.dependencies.len()))?;
    out.print(&format!("  Location:     {}", target_dir.display()))?;
    out.print("")?;
    Ok(())
}

fn stdin_is_interactive() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stdin())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::Io {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    use crate::error::IntoCli;

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

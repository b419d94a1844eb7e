//! `blueprint artifacts`: the generation profile, in execution order.

use serde::Serialize;

use blueprint_core::domain::capabilities::SUPPORTED_STACK;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    wiring,
};

#[derive(Debug, Serialize)]
struct ArtifactRow {
    kind: &'static str,
    description: &'static str,
}

pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = wiring::service(&config)?;
    let kinds = service
        .executor()
        .kinds_for(SUPPORTED_STACK)
        .map_err(|e| CliError::Core(e.into()))?;

    let rows: Vec<ArtifactRow> = kinds
        .iter()
        .map(|kind| ArtifactRow {
            kind: kind.as_str(),
            description: kind.description(),
        })
        .collect();

    if output.is_json() {
        return output.json(&rows);
    }

    output.header(&format!("Artifacts for {SUPPORTED_STACK}:"))?;
    for (index, row) in rows.iter().enumerate() {
        output.print(&format!(
            "  {:>2}. {:<24} {}",
            index + 1,
            row.kind,
            row.description
        ))?;
    }
    Ok(())
}

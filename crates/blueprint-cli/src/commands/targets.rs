//! `blueprint targets`: supported Java / Spring Boot combinations.

use serde::Serialize;

use blueprint_core::domain::PlatformTarget;
use blueprint_core::domain::capabilities::all_supported_targets;

use crate::{error::CliResult, output::OutputManager};

#[derive(Debug, PartialEq, Eq, Serialize)]
struct TargetRow {
    java: &'static str,
    spring_boot: &'static str,
    release: &'static str,
}

fn rows() -> Vec<TargetRow> {
    all_supported_targets()
        .into_iter()
        .filter_map(|target| match target {
            PlatformTarget::SpringBootJvm(jvm) => Some(TargetRow {
                java: jvm.java.as_str(),
                spring_boot: jvm.spring_boot.as_str(),
                release: jvm.spring_boot.release(),
            }),
            PlatformTarget::Custom { .. } => None,
        })
        .collect()
}

pub fn execute(output: OutputManager) -> CliResult<()> {
    let rows = rows();
    if output.is_json() {
        return output.json(&rows);
    }

    output.header("Supported platform targets:")?;
    for row in &rows {
        output.print(&format!(
            "  Java {:<4} Spring Boot {:<5} ({})",
            row.java, row.spring_boot, row.release
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_supported_pairs() {
        let pairs: Vec<(&str, &str)> = rows().iter().map(|r| (r.java, r.spring_boot)).collect();
        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains(&("21", "3.4")));
        assert!(pairs.contains(&("21", "3.5")));
        assert!(pairs.contains(&("25", "3.5")));
        assert!(!pairs.contains(&("25", "3.4")));
    }
}

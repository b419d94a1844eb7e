//! Tracing subscriber initialisation.
//!
//! Only the CLI installs a subscriber; `blueprint-core` and
//! `blueprint-adapters` only emit spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set. With
//! `--output-format json` log lines are JSON as well.

use std::io::IsTerminal as _;

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

use crate::cli::{GlobalArgs, OutputFormat};

/// Initialise the global tracing subscriber. Logs go to stderr so stdout
/// stays clean for results.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(derive_level(args))));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(args.output_format, use_ansi))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Stderr formatter: JSON lines for `--output-format json`, text otherwise.
fn fmt_layer<S>(format: OutputFormat, use_ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if format == OutputFormat::Json {
        layer.json().with_ansi(false).boxed()
    } else {
        layer.with_ansi(use_ansi).boxed()
    }
}

fn filter_directives(level: &str) -> String {
    format!("blueprint={level},blueprint_core={level},blueprint_adapters={level}")
}

/// Translate the verbosity counter and quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn level_default() {
        assert_eq!(derive_level(&args_with(0, false)), "warn");
    }

    #[test]
    fn level_per_verbosity() {
        assert_eq!(derive_level(&args_with(1, false)), "info");
        assert_eq!(derive_level(&args_with(2, false)), "debug");
        assert_eq!(derive_level(&args_with(3, false)), "trace");
        assert_eq!(derive_level(&args_with(10, false)), "trace");
    }

    // quiet takes precedence over verbose
    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true)), "error");
    }

    #[test]
    fn subscriber_builds_for_every_format() {
        for format in [
            OutputFormat::Json,
            OutputFormat::Human,
            OutputFormat::Plain,
            OutputFormat::Auto,
        ] {
            let subscriber = tracing_subscriber::registry()
                .with(EnvFilter::new(filter_directives("debug")))
                .with(fmt_layer(format, false));
            let _guard = tracing::subscriber::set_default(subscriber);
            tracing::debug!(?format, "subscriber installed");
        }
    }

    #[test]
    fn filter_covers_every_crate() {
        let directives = filter_directives("debug");
        for target in ["blueprint=", "blueprint_core=", "blueprint_adapters="] {
            assert!(directives.contains(target), "missing {target}");
        }
    }
}

//! One module per subcommand. Handlers translate arguments, call the core
//! and render results; no business logic lives here.

pub mod artifacts;
pub mod completions;
pub mod config;
pub mod init;
pub mod new;
pub mod targets;

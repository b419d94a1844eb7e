//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by each command)
//! 2. Environment variables: `BLUEPRINT__<SECTION>__<KEY>`, e.g.
//!    `BLUEPRINT__DEFAULTS__GROUP_ID=org.acme`
//! 3. Config file: `--config <FILE>`, else the platform config directory,
//!    else `.blueprint.toml` in the current directory
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "BLUEPRINT";
const LOCAL_FILE: &str = ".blueprint.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used by `blueprint new` when a flag is not given.
    pub defaults: Defaults,
    pub output: OutputConfig,
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub group_id: String,
    pub java_version: String,
    pub spring_boot_version: String,
    pub layout: String,
    pub enforcement_mode: String,
    pub sample_code_level: String,
    /// Dependency specs added to every project, same syntax as `-D`.
    pub dependencies: Vec<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            group_id: "com.example".into(),
            java_version: "21".into(),
            spring_boot_version: "3.5".into(),
            layout: "standard".into(),
            enforcement_mode: "none".into(),
            sample_code_level: "none".into(),
            dependencies: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
    /// Where `blueprint new` writes when `--output` is not given.
    pub directory: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory overriding the embedded templates.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Layer defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::discover_path(), false),
        };

        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode default configuration")?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::new(&path.to_string_lossy(), FileFormat::Toml).required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("defaults.dependencies")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?
            .try_deserialize()
            .context("Configuration has an unexpected shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs`, falling back to `.blueprint.toml` in
    /// the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "blueprint", "blueprint")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_FILE))
    }

    pub fn local_path() -> PathBuf {
        PathBuf::from(LOCAL_FILE)
    }

    /// A local `.blueprint.toml` takes precedence over the platform file.
    fn discover_path() -> PathBuf {
        let local = Self::local_path();
        if local.is_file() {
            local
        } else {
            Self::config_path()
        }
    }

    /// Render one dotted key, or `None` if the key does not exist.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.group_id" => self.defaults.group_id.clone(),
            "defaults.java_version" => self.defaults.java_version.clone(),
            "defaults.spring_boot_version" => self.defaults.spring_boot_version.clone(),
            "defaults.layout" => self.defaults.layout.clone(),
            "defaults.enforcement_mode" => self.defaults.enforcement_mode.clone(),
            "defaults.sample_code_level" => self.defaults.sample_code_level.clone(),
            "defaults.dependencies" => self.defaults.dependencies.join(","),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "output.directory" => display_opt(self.output.directory.as_deref()),
            "templates.local_path" => display_opt(self.templates.local_path.as_deref()),
            _ => return None,
        };
        Some(value)
    }
}

fn display_opt(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_newest_line() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.group_id, "com.example");
        assert_eq!(cfg.defaults.java_version, "21");
        assert_eq!(cfg.defaults.spring_boot_version, "3.5");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_overrides_defaults_partially() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("blueprint.toml");
        std::fs::write(
            &path,
            "[defaults]\ngroup_id = \"org.acme\"\nlayout = \"hexagonal\"\ndependencies = [\"web\"]\n\n[templates]\nlocal_path = \"/opt/templates\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.group_id, "org.acme");
        assert_eq!(cfg.defaults.layout, "hexagonal");
        assert_eq!(cfg.defaults.dependencies, vec!["web"]);
        assert_eq!(cfg.defaults.java_version, "21");
        assert_eq!(
            cfg.templates.local_path.as_deref(),
            Some(Path::new("/opt/templates"))
        );
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let temp = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&temp.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn malformed_file_is_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "[defaults\ngroup_id = ").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.group_id").as_deref(), Some("com.example"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("templates.local_path").as_deref(), Some(""));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};

const LOCAL_CONFIG: &str = "./rancher-catalog.toml";
const USER_CONFIG: &str = ".rancher-catalog.toml";

/// Represents the complete configuration for rancher-catalog.
///
/// Run-specific inputs (tags, branch, build number, credentials) come from the
/// command line and CI environment. This file only describes the catalog
/// repository layout and how changes are published.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_repo_dir() -> String {
    "rancher-catalog/repo".to_string()
}

fn default_template_dir() -> String {
    "base".to_string()
}

fn default_output_dir() -> String {
    "templates".to_string()
}

fn default_config_template() -> String {
    "config.tmpl".to_string()
}

fn default_docker_compose_template() -> String {
    "docker-compose.tmpl".to_string()
}

fn default_rancher_compose_template() -> String {
    "rancher-compose.tmpl".to_string()
}

fn default_icon_prefix() -> String {
    "catalogIcon".to_string()
}

/// Layout of the catalog repository.
///
/// Template paths are relative to `template_dir`, which is itself relative to
/// the root of the cloned catalog repository.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Clone location, relative to the catalog context directory
    #[serde(default = "default_repo_dir")]
    pub repo_dir: String,

    #[serde(default = "default_template_dir")]
    pub template_dir: String,

    /// Root that branch directories are created under
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_config_template")]
    pub config_template: String,

    #[serde(default = "default_docker_compose_template")]
    pub docker_compose_template: String,

    #[serde(default = "default_rancher_compose_template")]
    pub rancher_compose_template: String,

    /// File name prefix of the catalog icon in `template_dir`
    #[serde(default = "default_icon_prefix")]
    pub icon_prefix: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            repo_dir: default_repo_dir(),
            template_dir: default_template_dir(),
            output_dir: default_output_dir(),
            config_template: default_config_template(),
            docker_compose_template: default_docker_compose_template(),
            rancher_compose_template: default_rancher_compose_template(),
            icon_prefix: default_icon_prefix(),
        }
    }
}

fn default_host() -> String {
    "github.com".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_commit_message() -> String {
    "Update from Drone Build: {build}".to_string()
}

/// Settings for cloning and publishing the catalog repository.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    /// Commit message; `{build}` is replaced with the build number
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            host: default_host(),
            remote: default_remote(),
            commit_message: default_commit_message(),
        }
    }
}

impl GitConfig {
    /// HTTPS clone URL for an `owner/repo` slug
    pub fn clone_url(&self, repo: &str) -> String {
        format!("https://{}/{}.git", self.host, repo)
    }

    pub fn commit_message_for(&self, build_number: u64) -> String {
        self.commit_message
            .replace("{build}", &build_number.to_string())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `rancher-catalog.toml` in current directory
/// 3. `.rancher-catalog.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        read(Path::new(path))?
    } else if Path::new(LOCAL_CONFIG).exists() {
        read(Path::new(LOCAL_CONFIG))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG);
        if config_path.exists() {
            read(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| CatalogError::config(format!("invalid configuration: {}", e)))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| CatalogError::config(format!("cannot read {}: {}", path.display(), e)))
}

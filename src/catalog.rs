//! Materializes catalog entries inside a checked out catalog repository.
//!
//! ```text
//! <template_dir>/
//!   catalogIcon.(png|svg)
//!   config.tmpl
//!   docker-compose.tmpl
//!   rancher-compose.tmpl
//! <output_dir>/
//!   <branch>/
//!     catalogIcon.(png|svg)
//!     config.yml
//!     <build number>/
//!       docker-compose.yml
//!       rancher-compose.yml
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::domain::CatalogPath;
use crate::error::{CatalogError, Result};
use crate::render::{render, TemplateContext};

pub const CONFIG_FILE: &str = "config.yml";
pub const DOCKER_COMPOSE_FILE: &str = "docker-compose.yml";
pub const RANCHER_COMPOSE_FILE: &str = "rancher-compose.yml";

/// Files written for one build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub config: PathBuf,
    pub icon: PathBuf,
    pub docker_compose: PathBuf,
    pub rancher_compose: PathBuf,
}

/// Writes catalog entries below a repository root
pub struct CatalogWriter<'a> {
    root: &'a Path,
    layout: &'a LayoutConfig,
}

struct Templates {
    config: String,
    docker_compose: String,
    rancher_compose: String,
}

impl<'a> CatalogWriter<'a> {
    pub fn new(root: &'a Path, layout: &'a LayoutConfig) -> Self {
        CatalogWriter { root, layout }
    }

    fn template_dir(&self) -> PathBuf {
        self.root.join(&self.layout.template_dir)
    }

    fn output_dir(&self) -> PathBuf {
        self.root.join(&self.layout.output_dir)
    }

    /// Render the templates for one build into the catalog.
    ///
    /// All templates are read before anything is written. The branch level
    /// `config.yml` and icon are refreshed on every build.
    ///
    /// # Returns
    /// * `Ok(CatalogEntry)` - Paths of the written files
    /// * `Err` - If a template or the icon is missing, rendering fails, or a write fails
    pub fn write_entry(&self, path: &CatalogPath, context: &TemplateContext) -> Result<CatalogEntry> {
        let templates = self.load_templates()?;

        let output = self.output_dir();
        let branch_dir = path.branch_dir(&output);
        let build_dir = path.build_path(&output);

        tracing::info!("Creating catalog entries for: {}", path.build_dir);
        fs::create_dir_all(&build_dir)?;

        let icon = self.copy_icon(&branch_dir)?;

        let entry = CatalogEntry {
            config: branch_dir.join(CONFIG_FILE),
            icon,
            docker_compose: build_dir.join(DOCKER_COMPOSE_FILE),
            rancher_compose: build_dir.join(RANCHER_COMPOSE_FILE),
        };

        write_rendered(&entry.config, &self.layout.config_template, &templates.config, context)?;
        write_rendered(
            &entry.docker_compose,
            &self.layout.docker_compose_template,
            &templates.docker_compose,
            context,
        )?;
        write_rendered(
            &entry.rancher_compose,
            &self.layout.rancher_compose_template,
            &templates.rancher_compose,
            context,
        )?;

        Ok(entry)
    }

    fn load_templates(&self) -> Result<Templates> {
        Ok(Templates {
            config: self.read_template(&self.layout.config_template)?,
            docker_compose: self.read_template(&self.layout.docker_compose_template)?,
            rancher_compose: self.read_template(&self.layout.rancher_compose_template)?,
        })
    }

    fn read_template(&self, name: &str) -> Result<String> {
        let path = self.template_dir().join(name);
        tracing::debug!("Parsing template {}", path.display());
        fs::read_to_string(&path).map_err(|e| {
            CatalogError::template(format!("cannot read template {}: {}", path.display(), e))
        })
    }

    /// Copy the first file in the template directory whose name starts with
    /// the icon prefix, keeping its file name.
    fn copy_icon(&self, branch_dir: &Path) -> Result<PathBuf> {
        let template_dir = self.template_dir();
        let mut candidates: Vec<PathBuf> = fs::read_dir(&template_dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.starts_with(&self.layout.icon_prefix))
            })
            .map(|entry| entry.path())
            .collect();
        candidates.sort();

        let source = candidates.into_iter().next().ok_or_else(|| {
            CatalogError::template(format!(
                "icon file not found: {}",
                template_dir.join(&self.layout.icon_prefix).display()
            ))
        })?;

        let target = branch_dir.join(source.file_name().unwrap_or_default());
        tracing::debug!("Copying {} to {}", source.display(), target.display());
        fs::copy(&source, &target)?;

        Ok(target)
    }
}

fn write_rendered(target: &Path, name: &str, source: &str, context: &TemplateContext) -> Result<()> {
    tracing::debug!("Writing file {}", target.display());
    let rendered = render(name, source, context)?;
    fs::write(target, rendered)?;
    Ok(())
}

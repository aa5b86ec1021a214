use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rancher_catalog::cli::{run_catalog_workflow, CatalogWorkflowArgs};
use rancher_catalog::config;
use rancher_catalog::domain::BuildContext;
use rancher_catalog::git::{Credentials, Git2Repository};
use rancher_catalog::ui;

#[derive(clap::Parser)]
#[command(
    name = "rancher-catalog",
    version,
    about = "Build rancher catalog entries for completed builds",
    after_help = "Templates in <template_dir> use Jinja syntax with PascalCase fields: \
{{ Tag }}, {{ Build }}, {{ Project }}, {{ GithubRepo }}, {{ DockerRepo }}, {{ Branch }}. \
Go template syntax such as {{ .Tag }} is rejected."
)]
struct Args {
    #[arg(long, env = "PLUGIN_DRY_RUN", help = "Render the entry but skip commit and push")]
    dry_run: bool,

    #[arg(long, env = "PLUGIN_DEBUG", help = "Debug output")]
    debug: bool,

    #[arg(long, env = "PLUGIN_CONFIG", help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        env = "PLUGIN_CATALOG_CONTEXT",
        default_value = "/",
        help = "Directory the catalog repository is cloned under"
    )]
    catalog_context: PathBuf,

    #[arg(long, env = "PLUGIN_CATALOG_REPO", help = "Catalog repository as owner/repo")]
    catalog_repo: String,

    #[arg(
        long,
        env = "PLUGIN_RELEASE_BRANCH",
        default_value = "",
        help = "Branch published under the project name"
    )]
    release_branch: String,

    #[arg(long, env = "PLUGIN_TAGS", value_delimiter = ',', help = "Candidate image tags")]
    tags: Vec<String>,

    #[arg(long, env = "PLUGIN_TAG", value_delimiter = ',', hide = true)]
    tag: Vec<String>,

    #[arg(
        long,
        env = "PLUGIN_TAG_REGEX",
        default_value = "",
        help = "Regex to pick your tag"
    )]
    tag_regex: String,

    #[arg(long, env = "DRONE_COMMIT_BRANCH", help = "Git commit branch")]
    build_commit_branch: String,

    #[arg(long, env = "DRONE_REPO_NAME", help = "Build repository name")]
    build_repo_name: String,

    #[arg(long, env = "DRONE_BUILD_NUMBER", help = "Build number")]
    build_number: u64,

    #[arg(
        long,
        env = "PLUGIN_DOCKER_REPO",
        default_value = "",
        help = "Docker repository exposed to templates"
    )]
    docker_repo: String,

    #[arg(long, env = "PLUGIN_GITHUB_EMAIL", help = "GitHub email [fallback: GITHUB_EMAIL]")]
    github_email: Option<String>,

    #[arg(
        long,
        env = "PLUGIN_GITHUB_USERNAME",
        help = "GitHub username [fallback: GITHUB_USERNAME]"
    )]
    github_username: Option<String>,

    #[arg(
        long,
        env = "PLUGIN_GITHUB_TOKEN",
        hide_env_values = true,
        help = "GitHub API token [fallback: GITHUB_TOKEN]"
    )]
    github_token: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    if let Ok(env_file) = std::env::var("PLUGIN_ENV_FILE") {
        dotenvy::from_path_override(&env_file)
            .with_context(|| format!("Failed to load env file {}", env_file))?;
    }

    let args = Args::parse();
    init_logging(args.debug);

    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let credentials = Credentials {
        username: required_github("username", args.github_username)?,
        token: required_github("token", args.github_token)?,
        email: required_github("email", args.github_email)?,
    };

    let mut tags = args.tag;
    tags.extend(args.tags);

    let workflow_args = CatalogWorkflowArgs {
        dry_run: args.dry_run,
        catalog_context: args.catalog_context,
        catalog_repo: args.catalog_repo,
        tags,
        tag_regex: args.tag_regex,
        build: BuildContext::new(
            args.build_commit_branch,
            args.build_repo_name,
            args.build_number,
            args.release_branch,
        ),
        docker_repo: args.docker_repo,
        credentials,
    };

    let remote = config.git.remote.clone();
    let result = run_catalog_workflow(&workflow_args, &config, |url, dest| {
        Git2Repository::clone(url, dest, &workflow_args.credentials, &remote)
    })?;

    ui::display_summary(&result);
    Ok(())
}

/// `RUST_LOG` wins; otherwise `debug` with `--debug`, else `info`.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// Resolve a GitHub setting from its flag / `PLUGIN_GITHUB_*` value, then `GITHUB_*`.
fn required_github(field: &str, value: Option<String>) -> Result<String> {
    let fallback_var = format!("GITHUB_{}", field.to_uppercase());
    value
        .filter(|v| !v.is_empty())
        .or_else(|| std::env::var(&fallback_var).ok().filter(|v| !v.is_empty()))
        .with_context(|| {
            format!(
                "Missing required flag --github-{} (or PLUGIN_{} / {})",
                field, fallback_var, fallback_var
            )
        })
}

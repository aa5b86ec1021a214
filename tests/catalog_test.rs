use std::fs;
use std::path::Path;

use rancher_catalog::catalog::CatalogWriter;
use rancher_catalog::config::LayoutConfig;
use rancher_catalog::domain::derive_path;
use rancher_catalog::render::TemplateContext;
use tempfile::TempDir;

fn seed_templates(root: &Path) {
    let base = root.join("base");
    fs::create_dir_all(&base).unwrap();
    fs::write(
        base.join("config.tmpl"),
        "name: {{ Project }}\nversion: {{ Tag }}\n",
    )
    .unwrap();
    fs::write(
        base.join("docker-compose.tmpl"),
        "services:\n  {{ Project }}:\n    image: {{ DockerRepo }}:{{ Tag }}\n",
    )
    .unwrap();
    fs::write(
        base.join("rancher-compose.tmpl"),
        "version: '2'\ncatalog:\n  version: {{ Tag }}-{{ Build }}\n",
    )
    .unwrap();
    fs::write(base.join("catalogIcon.svg"), "<svg/>").unwrap();
}

fn context(tag: &str, build: u64, branch: &str) -> TemplateContext {
    TemplateContext {
        tag: tag.to_string(),
        build,
        project: "my-app".to_string(),
        github_repo: "My_App".to_string(),
        docker_repo: "acme/my-app".to_string(),
        branch: branch.to_string(),
    }
}

#[test]
fn test_write_entry_layout() {
    let dir = TempDir::new().unwrap();
    seed_templates(dir.path());
    let layout = LayoutConfig::default();
    let writer = CatalogWriter::new(dir.path(), &layout);

    let path = derive_path("feature_x", "My_App", 12, "master");
    let entry = writer
        .write_entry(&path, &context("1.0.1", 12, &path.branch_slug))
        .unwrap();

    let branch_dir = dir.path().join("templates/feature-x");
    assert_eq!(entry.config, branch_dir.join("config.yml"));
    assert_eq!(entry.icon, branch_dir.join("catalogIcon.svg"));
    assert_eq!(entry.docker_compose, branch_dir.join("12/docker-compose.yml"));
    assert_eq!(entry.rancher_compose, branch_dir.join("12/rancher-compose.yml"));

    assert_eq!(
        fs::read_to_string(&entry.config).unwrap(),
        "name: my-app\nversion: 1.0.1\n"
    );
    assert_eq!(
        fs::read_to_string(&entry.docker_compose).unwrap(),
        "services:\n  my-app:\n    image: acme/my-app:1.0.1\n"
    );
    assert_eq!(
        fs::read_to_string(&entry.rancher_compose).unwrap(),
        "version: '2'\ncatalog:\n  version: 1.0.1-12\n"
    );
    assert_eq!(fs::read_to_string(&entry.icon).unwrap(), "<svg/>");
}

#[test]
fn test_second_build_adds_directory_and_refreshes_config() {
    let dir = TempDir::new().unwrap();
    seed_templates(dir.path());
    let layout = LayoutConfig::default();
    let writer = CatalogWriter::new(dir.path(), &layout);

    let first = derive_path("develop", "My_App", 1, "master");
    writer
        .write_entry(&first, &context("1.0.0", 1, "develop"))
        .unwrap();
    let second = derive_path("develop", "My_App", 2, "master");
    let entry = writer
        .write_entry(&second, &context("1.1.0", 2, "develop"))
        .unwrap();

    let branch_dir = dir.path().join("templates/develop");
    assert!(branch_dir.join("1/docker-compose.yml").exists());
    assert!(branch_dir.join("2/docker-compose.yml").exists());
    assert!(fs::read_to_string(entry.config).unwrap().contains("1.1.0"));
}

#[test]
fn test_icon_prefix_picks_first_sorted_match() {
    let dir = TempDir::new().unwrap();
    seed_templates(dir.path());
    fs::write(dir.path().join("base/catalogIcon.png"), "png").unwrap();
    let layout = LayoutConfig::default();
    let writer = CatalogWriter::new(dir.path(), &layout);

    let path = derive_path("develop", "app", 3, "");
    let entry = writer
        .write_entry(&path, &context("1.0.0", 3, "develop"))
        .unwrap();

    assert_eq!(
        entry.icon.file_name().and_then(|n| n.to_str()),
        Some("catalogIcon.png")
    );
}

#[test]
fn test_unknown_template_field_fails() {
    let dir = TempDir::new().unwrap();
    seed_templates(dir.path());
    fs::write(dir.path().join("base/config.tmpl"), "name: {{ Projcet }}\n").unwrap();
    let layout = LayoutConfig::default();
    let writer = CatalogWriter::new(dir.path(), &layout);

    let path = derive_path("develop", "app", 3, "");
    let err = writer
        .write_entry(&path, &context("1.0.0", 3, "develop"))
        .unwrap_err();

    assert!(err.to_string().starts_with("Template error"));
}

#[test]
fn test_empty_branch_writes_inside_output_dir() {
    let dir = TempDir::new().unwrap();
    seed_templates(dir.path());
    let layout = LayoutConfig::default();
    let writer = CatalogWriter::new(dir.path(), &layout);

    let path = derive_path("", "My_App", 9, "");
    let entry = writer
        .write_entry(&path, &context("1.0.1", 9, &path.branch_slug))
        .unwrap();

    let output = dir.path().join("templates");
    assert!(entry.docker_compose.starts_with(&output));
    assert!(output.join("9/docker-compose.yml").exists());
    assert!(output.join("9/rancher-compose.yml").exists());
}

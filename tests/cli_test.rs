use assert_cmd::Command;
use predicates::prelude::*;

fn rancher_catalog() -> Command {
    let mut cmd = Command::cargo_bin("rancher-catalog").unwrap();
    cmd.env_clear();
    cmd
}

#[test]
fn test_help() {
    rancher_catalog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rancher catalog entries"))
        .stdout(predicate::str::contains("--tag-regex"))
        .stdout(predicate::str::contains("{{ .Tag }} is rejected"));
}

#[test]
fn test_missing_required_flag() {
    rancher_catalog()
        .args(["--build-number", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--catalog-repo"));
}

#[test]
fn test_no_tags_exits_non_zero() {
    let context = tempfile::TempDir::new().unwrap();

    rancher_catalog()
        .env("PLUGIN_CATALOG_REPO", "acme/rancher-catalog")
        .env("PLUGIN_CATALOG_CONTEXT", context.path())
        .env("DRONE_COMMIT_BRANCH", "master")
        .env("DRONE_REPO_NAME", "my-app")
        .env("DRONE_BUILD_NUMBER", "42")
        .env("GITHUB_USERNAME", "ci-bot")
        .env("GITHUB_TOKEN", "token")
        .env("GITHUB_EMAIL", "ci@example.com")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no valid tags found"));
}

#[test]
fn test_missing_github_token() {
    rancher_catalog()
        .args([
            "--catalog-repo",
            "acme/rancher-catalog",
            "--build-commit-branch",
            "master",
            "--build-repo-name",
            "my-app",
            "--build-number",
            "42",
            "--tags",
            "1.0.0",
            "--github-username",
            "ci-bot",
            "--github-email",
            "ci@example.com",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--github-token"));
}

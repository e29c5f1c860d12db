use super::*;
use predicates::prelude::*;

#[test]
fn help_lists_commands() {
    let ctx = TestContext::new();

    ctx.hubrelay()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("serve")
                .and(predicate::str::contains("search"))
                .and(predicate::str::contains("user"))
                .and(predicate::str::contains("repo")),
        );
}

#[test]
fn config_init_then_show() {
    let ctx = TestContext::new();
    let path = ctx.config_path();

    ctx.hubrelay()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    ctx.temp
        .child("hubrelay.yaml")
        .assert(predicate::str::contains("api_url: https://api.github.com"));

    ctx.hubrelay()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .env("PORT", "8088")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("port: 8088").and(predicate::str::contains("token: not set")),
        );
}

#[test]
fn config_init_refuses_overwrite() {
    let ctx = TestContext::new();
    ctx.write_config("port: 7000\n");

    ctx.hubrelay()
        .arg("--config")
        .arg(ctx.config_path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn missing_config_file_fails_with_help() {
    let ctx = TestContext::new();

    ctx.hubrelay()
        .arg("--config")
        .arg(ctx.temp.child("absent.yaml").path())
        .args(["search", "octocat"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Config file not found")
                .and(predicate::str::contains("help:")),
        );
}

//! Integration tests for the `flart` binary.
//!
//! Every generating test passes the `--skip-*` flags so no Flutter SDK is
//! needed.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const SKIP_TOOLS: [&str; 3] = ["--skip-deps", "--skip-format", "--skip-build"];

/// Flutter project with a pubspec and no config file.
fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pubspec.yaml"),
        "name: demo_app\ndependencies:\n  flutter:\n    sdk: flutter\n",
    )
    .unwrap();
    dir
}

fn flart(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("flart");
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("FLART_PROJECTDIR")
        .env_remove("FLART_MODELS__USEFREEZED")
        .env_remove("FLART_SCREENS__USECUBIT")
        .env_remove("FLART_SCREENS__USEFREEZED");
    cmd
}

fn read(dir: &TempDir, path: &str) -> String {
    fs::read_to_string(dir.path().join(path)).unwrap()
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    flart(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("model"))
        .stdout(predicate::str::contains("screen"))
        .stdout(predicate::str::contains("make:model"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    flart(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── model ─────────────────────────────────────────────────────────────────────

#[test]
fn model_writes_class_test_and_barrel() {
    let dir = project();
    flart(dir.path())
        .args(["model", "UserProfile"])
        .args(SKIP_TOOLS)
        .assert()
        .success()
        .stdout(predicate::str::contains("lib/models/user_profile.dart"));

    assert!(read(&dir, "lib/models/user_profile.dart").contains("class UserProfile extends Equatable"));
    assert!(
        read(&dir, "test/models/user_profile_test.dart")
            .contains("import 'package:demo_app/models/user_profile.dart';")
    );
    assert_eq!(read(&dir, "lib/models/models.dart"), "export 'user_profile.dart';\n");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = project();
    flart(dir.path())
        .args(["make:model", "Order", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("lib/models/order.dart"))
        .stdout(predicate::str::contains("requires equatable"));

    assert!(!dir.path().join("lib").exists());
    assert!(!dir.path().join("test").exists());
}

#[test]
fn declined_overwrite_exits_two_and_keeps_files() {
    let dir = project();
    fs::create_dir_all(dir.path().join("lib/models")).unwrap();
    fs::write(dir.path().join("lib/models/user.dart"), "// hand written\n").unwrap();

    flart(dir.path())
        .args(["model", "User"])
        .args(SKIP_TOOLS)
        .write_stdin("n\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exist"))
        .stderr(predicate::str::contains("cancelled"));

    assert_eq!(read(&dir, "lib/models/user.dart"), "// hand written\n");
    assert!(!dir.path().join("test/models/user_test.dart").exists());
    assert!(!dir.path().join("lib/models/models.dart").exists());
}

#[test]
fn confirmed_overwrite_replaces_files() {
    let dir = project();
    fs::create_dir_all(dir.path().join("lib/models")).unwrap();
    fs::write(dir.path().join("lib/models/user.dart"), "// old\n").unwrap();

    flart(dir.path())
        .args(["model", "User"])
        .args(SKIP_TOOLS)
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("overwrote lib/models/user.dart"));

    assert!(read(&dir, "lib/models/user.dart").contains("class User extends Equatable"));
}

#[test]
fn yes_flag_skips_the_question() {
    let dir = project();
    fs::create_dir_all(dir.path().join("lib/models")).unwrap();
    fs::write(dir.path().join("lib/models/user.dart"), "// old\n").unwrap();

    flart(dir.path())
        .args(["model", "User", "--yes"])
        .args(SKIP_TOOLS)
        .assert()
        .success()
        .stderr(predicate::str::contains("already exist").not());
}

#[test]
fn invalid_name_is_a_user_error() {
    let dir = project();
    flart(dir.path())
        .args(["model", "9lives"])
        .args(SKIP_TOOLS)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid name '9lives'"))
        .stderr(predicate::str::contains("Suggestions:"));
}

// ── screen ────────────────────────────────────────────────────────────────────

#[test]
fn bloc_screen_from_spaced_name() {
    let dir = project();
    flart(dir.path())
        .args(["screen", "home dashboard"])
        .args(SKIP_TOOLS)
        .assert()
        .success();

    for file in ["bloc", "event", "state"] {
        assert!(
            dir.path()
                .join(format!("lib/screens/home_dashboard/bloc/home_dashboard_{file}.dart"))
                .exists()
        );
    }
    assert!(
        read(&dir, "lib/screens/home_dashboard/home_dashboard_screen.dart")
            .contains("class HomeDashboardScreen")
    );
    assert_eq!(
        read(&dir, "lib/screens/home_dashboard/home_dashboard.dart"),
        "export 'home_dashboard_screen.dart';\n"
    );
}

#[test]
fn config_file_selects_cubit() {
    let dir = project();
    fs::write(
        dir.path().join("flart_config.json"),
        r#"{ "projectDir": ".", "screens": { "useCubit": true } }"#,
    )
    .unwrap();

    flart(dir.path())
        .args(["screen", "Settings"])
        .args(SKIP_TOOLS)
        .assert()
        .success();

    assert!(read(&dir, "lib/screens/settings/cubit/settings_cubit.dart").contains("class SettingsCubit"));
    assert!(!dir.path().join("lib/screens/settings/bloc").exists());
}

#[test]
fn state_flag_overrides_config() {
    let dir = project();
    fs::write(
        dir.path().join("flart_config.json"),
        r#"{ "screens": { "useCubit": true } }"#,
    )
    .unwrap();

    flart(dir.path())
        .args(["make:screen", "Checkout", "--state", "bloc"])
        .args(SKIP_TOOLS)
        .assert()
        .success();

    assert!(dir.path().join("lib/screens/checkout/bloc/checkout_event.dart").exists());
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn missing_project_dir_is_a_config_error() {
    let dir = project();
    fs::write(
        dir.path().join("flart_config.json"),
        r#"{ "projectDir": "./does-not-exist" }"#,
    )
    .unwrap();

    flart(dir.path())
        .args(["model", "User"])
        .args(SKIP_TOOLS)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn project_dir_points_elsewhere() {
    let app = project();
    let work = TempDir::new().unwrap();
    let config = work.path().join("custom.json");
    fs::write(
        &config,
        format!(r#"{{ "projectDir": "{}" }}"#, app.path().display()),
    )
    .unwrap();

    flart(work.path())
        .arg("--config")
        .arg(&config)
        .args(["model", "Cart"])
        .args(SKIP_TOOLS)
        .assert()
        .success();

    assert!(app.path().join("lib/models/cart.dart").exists());
    assert!(!work.path().join("lib").exists());
}

#[test]
fn environment_overrides_style() {
    let dir = project();
    flart(dir.path())
        .env("FLART_MODELS__USEFREEZED", "true")
        .args(["model", "Invoice", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("requires dev:build_runner"));
}

#[test]
fn init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    flart(dir.path()).arg("init").assert().success();

    let written = read(&dir, "flart_config.json");
    assert!(written.contains("\"projectDir\": \".\""));
    assert!(written.contains("\"useFreezed\": false"));

    fs::write(dir.path().join("flart_config.json"), "{}").unwrap();
    flart(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    assert_eq!(read(&dir, "flart_config.json"), "{}");
}

#[test]
fn config_get_prints_value() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("flart_config.json"),
        r#"{ "models": { "useFreezed": true } }"#,
    )
    .unwrap();

    flart(dir.path())
        .args(["config", "get", "models.useFreezed"])
        .assert()
        .success()
        .stdout("true\n");

    flart(dir.path())
        .args(["config", "get", "nope"])
        .assert()
        .code(4);
}

// ── misc ──────────────────────────────────────────────────────────────────────

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    flart(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flart"));
}

#[test]
fn no_subcommand_without_terminal_is_rejected() {
    let dir = project();
    flart(dir.path()).write_stdin("").assert().code(2);
}

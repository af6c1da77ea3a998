use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PREFS_TOML: &str = r#"
experience = "novice"
primary_use = "both"
usage_pattern = "casual"
portability = "pocket-size"
budget = 120.0

[priorities]
vapor_potency = 5
vapor_comfort = 5
portability = 5
battery_life = 5
build_quality = 5
ease_of_use = 5
maintenance = 5
value = 5
"#;

/// Write a config that keeps the store inside the temp dir.
fn write_config(dir: &Path) -> std::path::PathBuf {
    let config_path = dir.join("vapormatch.toml");
    let store_path = dir.join("results.json");
    fs::write(
        &config_path,
        format!(
            r#"
[store]
path = "{}"
capacity = 10
"#,
            store_path.display()
        ),
    )
    .expect("config should write");
    config_path
}

fn write_prefs(dir: &Path) -> std::path::PathBuf {
    let prefs_path = dir.join("prefs.toml");
    fs::write(&prefs_path, PREFS_TOML).expect("prefs should write");
    prefs_path
}

fn vapormatch(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vapormatch").expect("binary should compile");
    cmd.env("HOME", dir).current_dir(dir);
    cmd
}

#[test]
fn match_renders_markdown_report() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = write_config(dir.path());
    let prefs = write_prefs(dir.path());

    vapormatch(dir.path())
        .arg("match")
        .arg(&prefs)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Match Report"))
        .stdout(predicate::str::contains("## Top Pick"))
        .stdout(predicate::str::contains("% match"));
}

#[test]
fn match_json_report_contains_match_percent() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = write_config(dir.path());
    let prefs = write_prefs(dir.path());

    vapormatch(dir.path())
        .arg("match")
        .arg(&prefs)
        .arg("--config")
        .arg(&config)
        .arg("--format")
        .arg("json")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"match_percent\""));
}

#[test]
fn match_rejects_invalid_priority_weight() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = write_config(dir.path());
    let prefs_path = dir.path().join("prefs.toml");
    fs::write(
        &prefs_path,
        PREFS_TOML.replace("value = 5", "value = 12"),
    )
    .expect("prefs should write");

    vapormatch(dir.path())
        .arg("match")
        .arg(&prefs_path)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid preferences"));
}

#[test]
fn match_save_then_list_show_delete_roundtrip() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = write_config(dir.path());
    let prefs = write_prefs(dir.path());

    vapormatch(dir.path())
        .arg("match")
        .arg(&prefs)
        .arg("--config")
        .arg(&config)
        .arg("--save")
        .arg("--nickname")
        .arg("weekend setup")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("saved:"));

    let output = vapormatch(dir.path())
        .arg("list")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("weekend setup"))
        .get_output()
        .clone();

    // Pull the id out of the list line: "- <id> [nickname ...]".
    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf-8");
    let id = stdout
        .lines()
        .find(|line| line.starts_with("- "))
        .and_then(|line| line.strip_prefix("- "))
        .and_then(|line| line.split_whitespace().next())
        .expect("list should contain an entry id")
        .to_string();

    vapormatch(dir.path())
        .arg("show")
        .arg(&id)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("nickname: weekend setup"))
        .stdout(predicate::str::contains("# Match Report"));

    vapormatch(dir.path())
        .arg("rename")
        .arg(&id)
        .arg("travel kit")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("renamed:"));

    vapormatch(dir.path())
        .arg("delete")
        .arg(&id)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("deleted:"));

    vapormatch(dir.path())
        .arg("show")
        .arg(&id)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn show_unknown_id_exits_not_found() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = write_config(dir.path());

    vapormatch(dir.path())
        .arg("show")
        .arg("no-such-id")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("saved result not found"));
}

#[test]
fn delete_unknown_id_exits_not_found() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = write_config(dir.path());

    vapormatch(dir.path())
        .arg("delete")
        .arg("no-such-id")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("saved result not found"));
}

#[test]
fn quiz_completes_from_answers_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = write_config(dir.path());
    let answers_path = dir.path().join("answers.toml");
    fs::write(&answers_path, PREFS_TOML).expect("answers should write");

    vapormatch(dir.path())
        .arg("quiz")
        .arg(&answers_path)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Match Report"));
}

#[test]
fn quiz_missing_step_names_the_step() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = write_config(dir.path());
    let answers_path = dir.path().join("answers.toml");
    let without_budget: String = PREFS_TOML
        .lines()
        .filter(|line| !line.starts_with("budget"))
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(&answers_path, without_budget).expect("answers should write");

    vapormatch(dir.path())
        .arg("quiz")
        .arg(&answers_path)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing quiz answer"))
        .stderr(predicate::str::contains("budget"));
}

#[test]
fn external_catalog_is_used_when_configured() {
    let dir = TempDir::new().expect("temp dir should be created");
    let prefs = write_prefs(dir.path());
    let catalog_path = dir.path().join("catalog.json");
    fs::write(
        &catalog_path,
        r#"[
  {
    "id": "solo-unit",
    "name": "Solo Unit",
    "manufacturer": "Testworks",
    "price": 99.0,
    "kind": "portable",
    "ratings": {
      "vapor_potency": 5, "vapor_comfort": 5, "portability": 5,
      "battery_life": 5, "build_quality": 5, "ease_of_use": 5,
      "maintenance": 5, "value": 5
    },
    "beginner_friendly": true,
    "features": ["compact design"]
  }
]"#,
    )
    .expect("catalog should write");

    let config_path = dir.path().join("vapormatch.toml");
    fs::write(
        &config_path,
        format!(
            r#"
[store]
path = "{}"

[catalog]
file = "{}"
"#,
            dir.path().join("results.json").display(),
            catalog_path.display()
        ),
    )
    .expect("config should write");

    vapormatch(dir.path())
        .arg("match")
        .arg(&prefs)
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Solo Unit"));

    vapormatch(dir.path())
        .arg("catalog")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("solo-unit"));
}

#[test]
fn corrupt_store_lists_as_empty() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = write_config(dir.path());
    fs::write(dir.path().join("results.json"), "{ not json").expect("corrupt blob should write");

    vapormatch(dir.path())
        .arg("list")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("no saved results"));
}

#[test]
fn store_capacity_is_respected_across_invocations() {
    let dir = TempDir::new().expect("temp dir should be created");
    let prefs = write_prefs(dir.path());
    let config_path = dir.path().join("vapormatch.toml");
    fs::write(
        &config_path,
        format!(
            r#"
[store]
path = "{}"
capacity = 2
"#,
            dir.path().join("results.json").display()
        ),
    )
    .expect("config should write");

    for nickname in ["one", "two", "three"] {
        vapormatch(dir.path())
            .arg("match")
            .arg(&prefs)
            .arg("--config")
            .arg(&config_path)
            .arg("--save")
            .arg("--nickname")
            .arg(nickname)
            .assert()
            .code(0);
    }

    vapormatch(dir.path())
        .arg("list")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("three"))
        .stdout(predicate::str::contains("two"))
        .stdout(predicate::str::contains("one").not());
}

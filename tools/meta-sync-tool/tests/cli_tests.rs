use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Command with HOME and the XDG config dir pointed inside `home`, so the
/// default config location is under test control.
fn tool(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_meta-sync-tool"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

fn stdout_of(output: Output) -> String {
    assert!(
        output.status.success(),
        "tool failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

fn stderr_of_failure(output: Output) -> String {
    assert!(!output.status.success(), "tool unexpectedly succeeded");
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// describe
// ============================================================================

#[test]
fn describe_prints_description() {
    let dir = TempDir::new().unwrap();
    let delta = write(
        dir.path(),
        "delta.json",
        r#"{"ops":[{"insert":"Hello"},{"insert":"\n"},{"insert":"World"}]}"#,
    );
    let out = stdout_of(tool(dir.path()).arg("describe").arg("--input").arg(&delta).output().unwrap());
    assert_eq!(out, " Hello World\n");
}

#[test]
fn describe_limit_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let delta = write(
        dir.path(),
        "delta.json",
        r#"{"ops":[{"insert":"abcd"},{"insert":"efgh"},{"insert":"ijkl"}]}"#,
    );
    let config = write(dir.path(), "c.toml", "description_limit = 5\n");

    let out = stdout_of(
        tool(dir.path())
            .args(["describe", "--config"])
            .arg(&config)
            .arg("--input")
            .arg(&delta)
            .output()
            .unwrap(),
    );
    assert_eq!(out, " abcd\n");

    let out = stdout_of(
        tool(dir.path())
            .args(["describe", "--limit", "10", "--config"])
            .arg(&config)
            .arg("--input")
            .arg(&delta)
            .output()
            .unwrap(),
    );
    assert_eq!(out, " abcd efgh\n");
}

#[test]
fn describe_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    let delta = write(dir.path(), "broken.json", r#"{"ops": ["#);
    let err = stderr_of_failure(
        tool(dir.path()).arg("describe").arg("--input").arg(&delta).output().unwrap(),
    );
    assert!(err.contains("broken.json"), "{}", err);
}

// ============================================================================
// apply
// ============================================================================

#[test]
fn apply_to_empty_head_uses_url_flag() {
    let dir = TempDir::new().unwrap();
    let fields = write(dir.path(), "fields.json", r#"{"title":"T"}"#);
    let out = stdout_of(
        tool(dir.path())
            .arg("apply")
            .arg("--fields")
            .arg(&fields)
            .args(["--url", "https://example.com/here"])
            .output()
            .unwrap(),
    );
    assert_eq!(
        out,
        "<title>T</title>\n\
         <meta property=\"og:title\" content=\"T\">\n\
         <meta property=\"og:image:alt\" content=\"\">\n\
         <meta property=\"og:url\" content=\"https://example.com/here\">\n"
    );
}

#[test]
fn apply_updates_existing_head() {
    let dir = TempDir::new().unwrap();
    let page = write(
        dir.path(),
        "page.html",
        r#"<html><head><title>Old</title><meta name="description" content="Kept"><link rel="canonical" href="/old"></head><body></body></html>"#,
    );
    let fields = write(dir.path(), "fields.json", r#"{"canonical":"https://example.com/new"}"#);
    let out = stdout_of(
        tool(dir.path())
            .arg("apply")
            .arg("--fields")
            .arg(&fields)
            .arg("--head")
            .arg(&page)
            .output()
            .unwrap(),
    );
    assert!(out.starts_with("<title>Old</title>\n"), "{}", out);
    assert!(out.contains("<meta name=\"description\" content=\"Kept\">"));
    assert!(out.contains("<meta property=\"og:url\" content=\"https://example.com/new\">"));
    assert!(!out.contains("/old"));
    assert_eq!(out.matches("rel=\"canonical\"").count(), 1);
}

#[test]
fn apply_reports_missing_head_file() {
    let dir = TempDir::new().unwrap();
    let fields = write(dir.path(), "fields.json", "{}");
    let err = stderr_of_failure(
        tool(dir.path())
            .arg("apply")
            .arg("--fields")
            .arg(&fields)
            .arg("--head")
            .arg(dir.path().join("absent.html"))
            .output()
            .unwrap(),
    );
    assert!(err.contains("absent.html"), "{}", err);
}

// ============================================================================
// config loading
// ============================================================================

#[test]
fn missing_default_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let fields = write(dir.path(), "fields.json", "{}");
    let out = stdout_of(tool(dir.path()).arg("apply").arg("--fields").arg(&fields).output().unwrap());
    assert!(out.contains("<meta property=\"og:url\" content=\"about:blank\">"), "{}", out);
}

// dirs resolves XDG_CONFIG_HOME only on Linux.
#[cfg(target_os = "linux")]
#[test]
fn default_config_location_is_read() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "config/meta-sync/config.toml",
        "current_url = \"https://from.config/\"\n",
    );
    let fields = write(dir.path(), "fields.json", "{}");
    let out = stdout_of(tool(dir.path()).arg("apply").arg("--fields").arg(&fields).output().unwrap());
    assert!(out.contains("content=\"https://from.config/\""), "{}", out);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let fields = write(dir.path(), "fields.json", "{}");
    let err = stderr_of_failure(
        tool(dir.path())
            .arg("apply")
            .arg("--fields")
            .arg(&fields)
            .arg("--config")
            .arg(dir.path().join("none.toml"))
            .output()
            .unwrap(),
    );
    assert!(err.contains("none.toml"), "{}", err);
}

#[test]
fn partial_config_keeps_defaults_and_url_flag_wins() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "c.toml", "current_url = \"https://a.test/\"\n");
    let fields = write(dir.path(), "fields.json", "{}");
    let delta = write(dir.path(), "delta.json", &format!(r#"{{"ops":[{{"insert":"{}"}},{{"insert":"tail"}}]}}"#, "x".repeat(119)));

    let out = stdout_of(
        tool(dir.path())
            .arg("apply")
            .arg("--fields")
            .arg(&fields)
            .arg("--config")
            .arg(&config)
            .output()
            .unwrap(),
    );
    assert!(out.contains("content=\"https://a.test/\""), "{}", out);

    let out = stdout_of(
        tool(dir.path())
            .arg("apply")
            .arg("--fields")
            .arg(&fields)
            .arg("--config")
            .arg(&config)
            .args(["--url", "https://flag.test/"])
            .output()
            .unwrap(),
    );
    assert!(out.contains("content=\"https://flag.test/\""), "{}", out);

    // description_limit stays at 120: " " + 119 chars reaches it, so "tail" is dropped.
    let out = stdout_of(
        tool(dir.path())
            .arg("describe")
            .arg("--input")
            .arg(&delta)
            .arg("--config")
            .arg(&config)
            .output()
            .unwrap(),
    );
    assert!(!out.contains("tail"), "{}", out);
}

#[test]
fn invalid_config_names_the_file() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "bad.toml", "description_limit = \"x\"\n");
    let fields = write(dir.path(), "fields.json", "{}");
    let err = stderr_of_failure(
        tool(dir.path())
            .arg("apply")
            .arg("--fields")
            .arg(&fields)
            .arg("--config")
            .arg(&config)
            .output()
            .unwrap(),
    );
    assert!(err.contains("bad.toml"), "{}", err);
}

#[test]
fn init_config_writes_loadable_defaults() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("nested/dir/config.toml");
    let out = stdout_of(tool(dir.path()).arg("init-config").arg("--output").arg(&target).output().unwrap());
    assert!(out.contains("config.toml"));

    let text = fs::read_to_string(&target).unwrap();
    assert!(text.contains("current_url = \"about:blank\""), "{}", text);
    assert!(text.contains("description_limit = 120"), "{}", text);

    let fields = write(dir.path(), "fields.json", "{}");
    let out = stdout_of(
        tool(dir.path())
            .arg("apply")
            .arg("--fields")
            .arg(&fields)
            .arg("--config")
            .arg(&target)
            .output()
            .unwrap(),
    );
    assert!(out.contains("content=\"about:blank\""), "{}", out);
}

// dirs resolves XDG_CONFIG_HOME only on Linux.
#[cfg(target_os = "linux")]
#[test]
fn init_config_defaults_to_config_dir() {
    let dir = TempDir::new().unwrap();
    stdout_of(tool(dir.path()).arg("init-config").output().unwrap());
    assert!(dir.path().join("config/meta-sync/config.toml").exists());
}

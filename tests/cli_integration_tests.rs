use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

fn samples_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("samples")
}

/// Run the binary from an empty directory so no project config is picked up
fn styleguide(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_styleguide"))
        .args(args)
        .current_dir(cwd)
        .env_remove("STYLEGUIDE_CONFIG")
        .env_remove("STYLEGUIDE_LOG")
        .output()
        .expect("Failed to execute styleguide")
}

fn with_samples(args: &[&str]) -> Output {
    let cwd = tempdir().unwrap();
    let samples = samples_dir();
    let mut full = vec!["--source", samples.to_str().unwrap()];
    full.extend_from_slice(args);
    styleguide(cwd.path(), &full)
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fixture(units: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    for (rel, content) in units {
        write(dir.path(), rel, content);
    }
    dir
}

#[test]
fn test_cli_help_command() {
    let cwd = tempdir().unwrap();
    let output = styleguide(cwd.path(), &["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("list"));
    assert!(text.contains("show"));
    assert!(text.contains("search"));
    assert!(text.contains("check"));
}

#[test]
fn test_cli_list_samples() {
    let output = with_samples(&["list", "data-access"]);

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("When setting context"));
    assert!(text.contains("Data-access patterns: 4 entries"));
}

#[test]
fn test_cli_list_json_preserves_order() {
    let output = with_samples(&["list", "testing", "--format", "json"]);

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let ids: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "4", "6", "7", "8"]);
}

#[test]
fn test_cli_show_entry() {
    let output = with_samples(&["show", "rails", "3"]);

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.starts_with("data-access/3: data-access #3"));
    assert!(text.contains("## Bad"));
    assert!(text.contains("    class GeoSquareQuery"));
}

#[test]
fn test_cli_show_unknown_entry_exits_1() {
    let output = with_samples(&["show", "testing", "99"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("No entry '99' in category 'testing'"));
}

#[test]
fn test_cli_unknown_category_exits_1() {
    let output = with_samples(&["list", "frontend"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown category 'frontend'"));
}

#[test]
fn test_cli_all_malformed_exits_2() {
    let dir = fixture(&[("ruby/1.rb", "no headings\n"), ("ruby/2.rb", "still none\n")]);
    let output = styleguide(
        dir.path(),
        &["--source", dir.path().to_str().unwrap(), "list", "style"],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No entries could be loaded"));
}

#[test]
fn test_cli_partial_catalog_still_usable() {
    let dir = fixture(&[
        ("rails/2.rb", "## Bad\nwhere(a)\n## Good\nlive\n"),
        ("rails/3.rb", "## Good\nGeoSquareQuery\n"),
        ("rails/4.rb", "nothing recognizable\n"),
    ]);
    let source = dir.path().to_str().unwrap();

    let output = styleguide(
        dir.path(),
        &["--source", source, "list", "data-access", "--format", "json"],
    );
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert!(stderr(&output).contains("Skipping"));

    let output = styleguide(dir.path(), &["--source", source, "check"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Loaded 2 entries, skipped 1 malformed"));

    let output = styleguide(dir.path(), &["--source", source, "check", "--strict"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_search() {
    let output = with_samples(&["search", "bookmark", "--format", "json"]);

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let hits = value.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["category"], "testing");
    assert_eq!(hits[0]["id"], "8");
}

#[test]
fn test_cli_categories() {
    let output = with_samples(&["categories", "--format", "json"]);

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let counts: Vec<(String, u64)> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| {
            (
                v["category"].as_str().unwrap().to_string(),
                v["entries"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        counts,
        vec![
            ("data-access".to_string(), 4),
            ("style".to_string(), 3),
            ("testing".to_string(), 6)
        ]
    );
}

#[test]
fn test_cli_project_config_is_discovered() {
    let dir = fixture(&[
        ("conventions/queries/1.md", "## Good\n```ruby\nRecipe.live\n```\n"),
        ("conventions/queries/2.txt", "## Good\nignored by extension\n"),
    ]);
    write(
        dir.path(),
        "styleguide.yaml",
        "sources: [conventions]\nextensions: [md]\ncategory_dirs:\n  queries: data-access\n",
    );

    let output = styleguide(dir.path(), &["show", "data-access", "1"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("    Recipe.live"));
    assert!(!stdout(&output).contains("```"));

    let output = styleguide(dir.path(), &["show", "data-access", "2"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_bad_config_exits_2() {
    let dir = fixture(&[("styleguide.yaml", "sources: [a\n")]);
    let output = styleguide(dir.path(), &["categories"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output).matches("Failed to load configuration").count(),
        1
    );
}

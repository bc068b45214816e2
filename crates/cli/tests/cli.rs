use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn glosskit() -> Command {
    Command::cargo_bin("glosskit").expect("binary")
}

#[test]
fn parse_prints_sorted_deduplicated_lines() {
    glosskit()
        .args(["parse", "--text", "b=2\na=x/y/x\na b=3"])
        .assert()
        .success()
        .stdout("a=x/y\nb=2\na b=3\n");
}

#[test]
fn parse_reads_stdin_with_dash() {
    glosskit()
        .args(["parse", "-"])
        .write_stdin("k=v=w\n")
        .assert()
        .success()
        .stdout("k=v=w\n");
}

#[test]
fn parse_honors_min_key_len() {
    glosskit()
        .args(["parse", "--text", "a=1\nab=2", "--min-key-len", "2"])
        .assert()
        .success()
        .stdout("ab=2\n");
}

#[test]
fn parse_writes_output_file() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.txt");
    std::fs::write(&input, "b=2\na=1\n").expect("write input");

    glosskit()
        .arg("parse")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(&output).expect("read output"),
        "a=1\nb=2"
    );
}

#[test]
fn parse_json_carries_stats_and_entries() {
    let assert = glosskit()
        .args(["parse", "--text", "a=x/y\nb=z", "--json"])
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("json output");
    assert_eq!(doc["stats"]["entries"], 2);
    assert_eq!(doc["stats"]["meanings"], 3);
    assert_eq!(doc["entries"][0]["key"], "a");
    assert_eq!(doc["entries"][0]["value"], "x/y");
}

#[test]
fn parse_without_input_fails_with_message() {
    glosskit()
        .arg("parse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input supplied"));
}

#[test]
fn merge_defaults_union_main_tokens_first() {
    glosskit()
        .args([
            "merge",
            "--main-text",
            "k=a/b",
            "--secondary-text",
            "k=b¦c",
        ])
        .assert()
        .success()
        .stdout("k=a/b/c\n");
}

#[test]
fn merge_honors_option_and_split_flags() {
    glosskit()
        .args([
            "merge",
            "--main-text",
            "k=a/b",
            "--secondary-text",
            "k=b;c",
            "--secondary-split",
            ";",
            "--option",
            "secondary-main",
        ])
        .assert()
        .success()
        .stdout("k=b/c/a\n");
}

#[test]
fn merge_keeps_keys_from_both_sides() {
    glosskit()
        .args([
            "merge",
            "--main-text",
            "only main=1",
            "--secondary-text",
            "only secondary=2",
        ])
        .assert()
        .success()
        .stdout("only main=1\nonly secondary=2\n");
}

#[test]
fn merge_without_secondary_fails() {
    glosskit()
        .args(["merge", "--main-text", "k=a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("secondary"));
}

#[test]
fn filter_keeps_only_title_case_first_meanings() {
    glosskit()
        .args([
            "filter",
            "--text",
            "hn=Hanoi/capital\nsg=saigon\nnum=Hanoi2",
        ])
        .assert()
        .success()
        .stdout("hn=Hanoi/capital\n");
}

#[test]
fn stats_reports_entry_and_meaning_counts() {
    glosskit()
        .args(["stats", "--text", "a=x/y\nb=z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries:          2"))
        .stdout(predicate::str::contains("Meanings:         3"))
        .stdout(predicate::str::contains("Avg meanings/key: 1.5"));
}

#[test]
fn search_lists_matching_lines() {
    glosskit()
        .args([
            "search",
            "--text",
            "anh=Brother\nem=Sibling",
            "--key",
            "anh",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("line 1: anh=Brother [key]"))
        .stdout(predicate::str::contains("1 match"));
}

#[test]
fn search_by_line_number_returns_that_line() {
    let assert = glosskit()
        .args([
            "search",
            "--text",
            "b=2\na=1",
            "--line",
            "2",
            "--json",
        ])
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("json output");
    // Sorted render puts a=1 first, so line 2 is b=2.
    assert_eq!(doc["matches"][0]["line"], 2);
    assert_eq!(doc["matches"][0]["content"], "b=2");
    assert_eq!(doc["matches"][0]["kinds"][0], "line");
}

#[test]
fn config_file_supplies_defaults_flags_override() {
    let temp = TempDir::new().expect("tempdir");
    let config = temp.path().join("glosskit.toml");
    std::fs::write(&config, "[defaults]\nmin_key_len = 2\n").expect("write config");

    glosskit()
        .arg("--config")
        .arg(&config)
        .args(["parse", "--text", "a=1\nab=2"])
        .assert()
        .success()
        .stdout("ab=2\n");

    glosskit()
        .arg("--config")
        .arg(&config)
        .args(["parse", "--text", "a=1\nab=2", "--min-key-len", "1"])
        .assert()
        .success()
        .stdout("a=1\nab=2\n");
}

#[test]
fn invalid_config_is_an_error() {
    let temp = TempDir::new().expect("tempdir");
    let config = temp.path().join("glosskit.toml");
    std::fs::write(&config, "[defaults]\nsplit = \"//\"\n").expect("write config");

    glosskit()
        .arg("--config")
        .arg(&config)
        .args(["parse", "--text", "a=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single character"));
}

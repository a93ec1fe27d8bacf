//! End-to-end CLI tests against a local word list.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const WORDS: &str = "Generated word list\nCopyright notice\n---\nlisten\nsilent\nEnlist\nbanana\nstop\npots\ntops\n";

// `Command::cargo_bin` is deprecated in newer assert_cmd releases
#[allow(deprecated)]
fn anagram_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("anagram_finder").expect("binary not found");
    cmd.current_dir(dir)
        .env_remove("ANAGRAM_URL")
        .env_remove("ANAGRAM_CACHE")
        .env_remove("RUST_LOG");
    cmd
}

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let words = dir.path().join("words.txt");
    fs::write(&words, WORDS).unwrap();
    (dir, words)
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    anagram_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("anagrams"));
}

#[test]
fn lookup_prints_each_anagram_on_its_own_line() {
    let (dir, words) = setup();

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .arg("LISTEN")
        .assert()
        .success()
        .stdout("silent\nenlist\n");
}

#[test]
fn lookup_subcommand_matches_positional() {
    let (dir, words) = setup();

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .args(["lookup", "spot"])
        .assert()
        .success()
        .stdout("stop\npots\ntops\n");
}

#[test]
fn lookup_without_anagrams_is_not_recognized() {
    let (dir, words) = setup();

    for word in ["banana", "orange"] {
        anagram_cmd(dir.path())
            .arg("--wordlist")
            .arg(&words)
            .arg(word)
            .assert()
            .success()
            .stdout("Word not recognized.\n");
    }
}

#[test]
fn first_lookup_writes_cache_and_second_reuses_it() {
    let (dir, words) = setup();
    let cache = dir.path().join("anagram_map.bin");

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .arg("listen")
        .assert()
        .success();
    assert!(cache.exists());

    // The index now comes from the cache alone
    fs::remove_file(&words).unwrap();
    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .arg("silent")
        .assert()
        .success()
        .stdout("listen\nenlist\n");
}

#[test]
fn corrupt_cache_is_rebuilt() {
    let (dir, words) = setup();
    let cache = dir.path().join("custom.bin");
    fs::write(&cache, b"not an index").unwrap();

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .arg("--cache")
        .arg(&cache)
        .arg("tops")
        .assert()
        .success()
        .stdout("stop\npots\n");
}

#[test]
fn unwritable_cache_does_not_abort_lookup() {
    let (dir, words) = setup();

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .arg("--cache")
        .arg(dir.path().join("missing/dir/cache.bin"))
        .arg("listen")
        .assert()
        .success()
        .stdout("silent\nenlist\n")
        .stderr(predicate::str::contains("could not cache"));
}

#[test]
fn no_header_ingests_every_line() {
    let (dir, words) = setup();

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .args(["--no-header", "--no-cache", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:            10"));

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .args(["--no-header", "--no-cache", "silent"])
        .assert()
        .success()
        .stdout("listen\nenlist\n");
}

#[test]
fn toggling_header_option_rebuilds_shared_cache() {
    let (dir, words) = setup();

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:            7"));

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .args(["--no-header", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:            10"));

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:            7"));
}

#[test]
fn failed_rebuild_keeps_cache() {
    let (dir, words) = setup();
    let cache = dir.path().join("anagram_map.bin");

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .arg("listen")
        .assert()
        .success();
    let artifact = fs::read(&cache).unwrap();

    fs::remove_file(&words).unwrap();
    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .arg("rebuild")
        .assert()
        .failure();

    assert_eq!(fs::read(&cache).unwrap(), artifact);
    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .arg("silent")
        .assert()
        .success()
        .stdout("listen\nenlist\n");
}

#[test]
fn missing_source_without_cache_fails() {
    let dir = TempDir::new().unwrap();

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(dir.path().join("absent.txt"))
        .arg("listen")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load or rebuild"));
}

#[test]
fn stats_reports_largest_class() {
    let (dir, words) = setup();

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .args(["stats", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stop pots tops"));
}

#[test]
fn rebuild_recreates_cache() {
    let (dir, words) = setup();
    let cache = dir.path().join("anagram_map.bin");
    fs::write(&cache, b"stale").unwrap();

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .arg("rebuild")
        .assert()
        .success()
        .stdout(predicate::str::contains("7 words"));

    assert_ne!(fs::read(&cache).unwrap(), b"stale");
}

#[test]
fn interactive_answers_stdin() {
    let (dir, words) = setup();

    anagram_cmd(dir.path())
        .arg("--wordlist")
        .arg(&words)
        .arg("interactive")
        .write_stdin("pots\nbanana\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("stop\ntops\n"))
        .stdout(predicate::str::contains("Word not recognized."));
}

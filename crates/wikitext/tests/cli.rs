// ABOUTME: Integration tests for the wikitext CLI binary.
// ABOUTME: Tests HTML file input, URL fetching, the stdin prompt, file output, and error reporting.

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ARTICLE: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head><meta charset="utf-8"><title>Lyon — Wikipédia</title></head>
<body>
<h1 id="firstHeading"><span class="mw-page-title-main">Lyon</span></h1>
<div id="bodyContent">
<table class="infobox"><tr><td>Rhône</td></tr></table>
<p>Lyon est une commune française , située au confluent du Rhône et de la Saône.</p>
<h2>Voir aussi</h2>
<p>Liens externes.</p>
</div>
</body>
</html>"#;

fn wikitext_cmd() -> Command {
    Command::cargo_bin("wikitext").unwrap()
}

#[test]
fn html_file_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("lyon.html");
    fs::write(&html_path, ARTICLE).unwrap();

    wikitext_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Lyon est une commune française, située au confluent",
        ))
        .stdout(predicate::str::contains("Liens externes").not());
}

#[test]
fn html_file_written_to_title_txt() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("page.html");
    fs::write(&html_path, ARTICLE).unwrap();

    wikitext_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("-o")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("saved"))
        .stdout(predicate::str::contains("Lyon.txt"));

    let written = fs::read_to_string(temp_dir.path().join("Lyon.txt")).unwrap();
    assert_eq!(
        written,
        "Lyon est une commune française, située au confluent du Rhône et de la Saône."
    );
}

#[test]
fn fetches_url_argument() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/wiki/Lyon");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(ARTICLE);
    });
    let temp_dir = TempDir::new().unwrap();

    wikitext_cmd()
        .arg(server.url("/wiki/Lyon"))
        .arg("--output-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    mock.assert();
    assert!(temp_dir.path().join("Lyon.txt").exists());
}

#[test]
fn prompts_for_url_on_stdin() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/wiki/Lyon");
        then.status(200).body(ARTICLE);
    });

    wikitext_cmd()
        .arg("--stdout")
        .write_stdin(format!("{}\n", server.url("/wiki/Lyon")))
        .assert()
        .success()
        .stdout(predicate::str::contains("Article URL:"))
        .stdout(predicate::str::contains("Lyon est une commune"));

    mock.assert();
}

#[test]
fn empty_prompt_fails() {
    wikitext_cmd()
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no URL given"));
}

#[test]
fn http_error_is_reported() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/wiki/Absent");
        then.status(404);
    });

    wikitext_cmd()
        .arg(server.url("/wiki/Absent"))
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP status 404"));
}

#[test]
fn missing_title_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("plain.html");
    fs::write(&html_path, "<html><body><p>Texte</p></body></html>").unwrap();

    wikitext_cmd()
        .arg("--html")
        .arg(&html_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("article title not found"));
}

#[test]
fn json_output_includes_title_and_text() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("lyon.html");
    fs::write(&html_path, ARTICLE).unwrap();

    wikitext_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Lyon\""))
        .stdout(predicate::str::contains("\"file_stem\": \"Lyon\""));
}

#[test]
fn custom_stop_heading_replaces_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("lyon.html");
    fs::write(&html_path, ARTICLE).unwrap();

    wikitext_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--stdout")
        .arg("--stop-heading")
        .arg("Histoire")
        .assert()
        .success()
        .stdout(predicate::str::contains("Voir aussi"))
        .stdout(predicate::str::contains("Liens externes."));
}

#[test]
fn html_and_url_conflict() {
    wikitext_cmd()
        .arg("--html")
        .arg("page.html")
        .arg("https://fr.wikipedia.org/wiki/Lyon")
        .assert()
        .failure();
}

#[test]
fn missing_html_file_is_reported() {
    wikitext_cmd()
        .arg("--html")
        .arg("/nonexistent/page.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

//! Integration tests: run the `codegpt` binary against a mock completion server.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use mockito::{Matcher, Server};
use serde_json::json;

/// Binary with a scrubbed environment rooted in `home`.
fn codegpt(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_codegpt"));
    cmd.env_clear()
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .env("CODEGPT_PROGRESS_MS", "0")
        .current_dir(home)
        .stdin(Stdio::null());
    cmd
}

fn completion(content: &str) -> String {
    json!({
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }]
    })
    .to_string()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn hello_prints_static_message() {
    let home = tempfile::tempdir().unwrap();
    let out = codegpt(home.path()).arg("hello").output().expect("run codegpt");
    assert!(out.status.success());
    assert!(stdout(&out).contains("Hello World from codegpt!"));
}

#[test]
fn help_describes_the_tool() {
    let home = tempfile::tempdir().unwrap();
    let out = codegpt(home.path()).arg("--help").output().expect("run codegpt");
    assert!(out.status.success());
    assert!(stdout(&out).contains("Ask a chat model from your editor and drop the answer at the cursor"));
}

#[test]
fn hello_json_output() {
    let home = tempfile::tempdir().unwrap();
    let out = codegpt(home.path())
        .args(["-o", "json", "hello"])
        .output()
        .expect("run codegpt");
    assert!(out.status.success());
    let line: serde_json::Value = serde_json::from_str(stdout(&out).trim()).unwrap();
    assert_eq!(line["level"], "info");
    assert_eq!(line["message"], "Hello World from codegpt!");
}

#[test]
fn empty_prompt_is_cancelled_without_a_request() {
    let home = tempfile::tempdir().unwrap();
    let mut server = Server::new();
    let mock = server.mock("POST", "/chat/completions").expect(0).create();

    let out = codegpt(home.path())
        .env("CODEGPT_OPENAI_KEY", "sk-test")
        .env("CODEGPT_BASE_URL", server.url())
        .args(["ask", "--prompt", ""])
        .output()
        .expect("run codegpt");

    mock.assert();
    assert!(out.status.success());
    assert!(stdout(&out).contains("You canceled the input."));
}

#[test]
fn closed_stdin_is_cancelled() {
    let home = tempfile::tempdir().unwrap();
    let out = codegpt(home.path())
        .env("CODEGPT_BASE_URL", "http://127.0.0.1:9")
        .arg("code")
        .output()
        .expect("run codegpt");
    assert!(out.status.success());
    assert!(stdout(&out).contains("You canceled the input."));
}

#[test]
fn code_inserts_extracted_block_into_file() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("sort.py");
    std::fs::write(&file, "# sorting\n\nprint(sort([3, 1, 2]))\n").unwrap();

    let mut server = Server::new();
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "messages": [{ "role": "user", "content": "Generate Code for bubble sort in python. No explanation needed" }]
        })))
        .with_status(200)
        .with_body(completion("Here:\n```python\ndef sort(xs):\n    return sorted(xs)\n```\nDone."))
        .create();

    let out = codegpt(home.path())
        .env("CODEGPT_OPENAI_KEY", "sk-test")
        .env("CODEGPT_BASE_URL", server.url())
        .args(["code", "--prompt", "bubble sort", "--file"])
        .arg(&file)
        .args(["--line", "2"])
        .output()
        .expect("run codegpt");

    mock.assert();
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("Inserted 2 line(s)"));
    assert_eq!(
        std::fs::read_to_string(&file).unwrap(),
        "# sorting\ndef sort(xs):\n    return sorted(xs)\nprint(sort([3, 1, 2]))\n"
    );
}

#[test]
fn ask_shows_response_verbatim() {
    let home = tempfile::tempdir().unwrap();
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion("Use `cargo new`.\n```sh\ncargo new app\n```"))
        .create();

    let out = codegpt(home.path())
        .env("CODEGPT_OPENAI_KEY", "sk-test")
        .env("CODEGPT_BASE_URL", server.url())
        .args(["ask", "--prompt", "how do I start a rust project?"])
        .output()
        .expect("run codegpt");

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("Use `cargo new`."));
    assert!(text.contains("```sh\ncargo new app\n```"));
}

#[test]
fn rejected_key_fails_with_error_notice() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("main.rs");
    std::fs::write(&file, "fn main() {}\n").unwrap();

    let mut server = Server::new();
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
        .expect(1)
        .create();

    let out = codegpt(home.path())
        .env("CODEGPT_OPENAI_KEY", "sk-wrong")
        .env("CODEGPT_BASE_URL", server.url())
        .args(["code", "--prompt", "hello world", "--file"])
        .arg(&file)
        .output()
        .expect("run codegpt");

    mock.assert();
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("authentication failed"));
    assert!(!stderr(&out).contains("Try again"));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "fn main() {}\n");
}

#[test]
fn rate_limit_suggests_trying_again() {
    let home = tempfile::tempdir().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body(r#"{"error":{"message":"Rate limit reached"}}"#)
        .expect(1)
        .create();

    let out = codegpt(home.path())
        .env("CODEGPT_OPENAI_KEY", "sk-test")
        .env("CODEGPT_BASE_URL", server.url())
        .args(["ask", "--prompt", "hi"])
        .output()
        .expect("run codegpt");

    mock.assert();
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("rate limited: Rate limit reached"));
    assert!(err.contains("Try again in a moment."));
}

#[test]
fn unreachable_service_suggests_trying_again() {
    let home = tempfile::tempdir().unwrap();
    let out = codegpt(home.path())
        .env("CODEGPT_OPENAI_KEY", "sk-test")
        .env("CODEGPT_BASE_URL", "http://127.0.0.1:9")
        .args(["ask", "--prompt", "hi"])
        .output()
        .expect("run codegpt");

    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("network error"));
    assert!(err.contains("Try again in a moment."));
}

#[test]
fn snippet_without_file_sends_nothing() {
    let home = tempfile::tempdir().unwrap();
    let mut server = Server::new();
    let mock = server.mock("POST", "/chat/completions").expect(0).create();

    let out = codegpt(home.path())
        .env("CODEGPT_OPENAI_KEY", "sk-test")
        .env("CODEGPT_BASE_URL", server.url())
        .args(["snippet", "--prompt", "reverse a string"])
        .output()
        .expect("run codegpt");

    mock.assert();
    assert!(out.status.success());
    assert!(stderr(&out).contains("no active editor"));
}

#[test]
fn config_show_masks_key_from_env_file() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".codegpt");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("env"),
        "CODEGPT_OPENAI_KEY=sk-1234567890abcd\nCODEGPT_MODEL=gpt-4o-mini\n",
    )
    .unwrap();

    let out = codegpt(home.path())
        .args(["-o", "json", "config", "show"])
        .output()
        .expect("run codegpt");

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("sk-...abcd"));
    assert!(!text.contains("sk-1234567890abcd"));
    assert!(text.contains("gpt-4o-mini"));
}

//! Drives the wired session through the shell with the in-memory host.

use clipview::bootstrap::wire;
use clipview::shell;
use cv_core::AppConfig;
use serde_json::{json, Value};

async fn run_script(script: &str) -> Vec<Value> {
    let runtime = wire(&AppConfig::default());
    let mut output = Vec::new();
    shell::run(&runtime, script.as_bytes(), &mut output)
        .await
        .unwrap();
    runtime.handle.shutdown().unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap_or_else(|_| Value::String(line.to_string())))
        .collect()
}

#[tokio::test]
async fn captured_json_is_validated_and_searchable() {
    let views = run_script(
        "capture {\"a\":\"hello\",\"b\":{\"c\":\"world\"}}\nsearch HELLO\nquit\nshow\n",
    )
    .await;

    assert_eq!(views.len(), 2, "input after quit is ignored");
    assert_eq!(views[0]["selected_index"], 0);
    assert_eq!(views[0]["entries"][0]["content_type"], "json");
    assert_eq!(views[0]["validation"]["is_valid"], true);
    assert_eq!(views[0]["toolbar_action"], "format");

    assert_eq!(views[1]["search_query"], "HELLO");
    assert_eq!(views[1]["filtered"], json!({"a": "hello"}));
}

#[tokio::test]
async fn edits_hold_off_captures() {
    let views = run_script("capture first\nedit draft\ncapture second\nsave\ncapture third\n").await;

    assert_eq!(views[1]["editing"], "Editing");
    assert_eq!(views[2]["entries"].as_array().unwrap().len(), 1);
    assert_eq!(views[2]["entries"][0]["content"], "draft");

    assert_eq!(views[3]["editing"], "Idle");
    let entries = views[4]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["content"], "third");
    assert_eq!(views[4]["selected_index"], 1);
}

#[tokio::test]
async fn format_and_minify_swap_the_toolbar_action() {
    let views = run_script("capture [1,{\"k\":null}]\nformat\nminify\n").await;

    assert_eq!(views[1]["entries"][0]["content"], "[\n  1,\n  {\n    \"k\": null\n  }\n]");
    assert_eq!(views[1]["toolbar_action"], "minify");
    assert_eq!(views[2]["entries"][0]["content"], "[1,{\"k\":null}]");
    assert_eq!(views[2]["toolbar_action"], "format");
}

#[tokio::test]
async fn seeding_fills_the_list_newest_first() {
    let views = run_script("seed\nselect 2\nsearch gadget\n").await;

    let entries = views[0]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert!(entries[0]["content"].as_str().unwrap().starts_with("Lorem ipsum"));
    assert_eq!(entries[4]["content_type"], "url");

    // Index 2 is the apiResponse sample.
    assert_eq!(views[1]["validation"]["is_valid"], true);
    let filtered = &views[2]["filtered"]["apiResponse"]["data"];
    assert_eq!(filtered, &json!([{"tags": ["gadget"]}]));
}

#[tokio::test]
async fn delete_and_clear_round_trip_through_the_host() {
    let views = run_script("capture a\ncapture b\ndelete 0\nclear\nrefresh\n").await;

    let entries = views[2]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["content"], "a");
    assert!(views[3]["entries"].as_array().unwrap().is_empty());
    assert_eq!(views[3]["selected_index"], -1);
    assert!(views[4]["entries"].as_array().unwrap().is_empty());
    assert!(views[4]["last_error"].is_null());
}

#[tokio::test]
async fn bad_input_is_reported_without_stopping() {
    let views = run_script("frobnicate\nselect x\nshow\n").await;

    assert_eq!(views[0], Value::String("error: unknown command: frobnicate (try `help`)".into()));
    assert_eq!(views[1], Value::String("error: not an index: x".into()));
    assert_eq!(views[2]["selected_index"], -1);
}

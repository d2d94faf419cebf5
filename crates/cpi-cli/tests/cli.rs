//! CLI tests: offline commands, local validation, and calls against a mock bridge.

mod common;

use common::{run_cli_async, run_cli_failure, run_cli_success};
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Nothing listens here; any test that reaches it fails with a connection error.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:1/cpi";

#[test]
fn ops_lists_whole_catalogue() {
    let stdout = run_cli_success(&["ops"]);
    assert_eq!(stdout.lines().count(), 44);
    assert!(stdout.contains("pepperi.api.accounts.search"));
    assert!(stdout.contains("pepperi.app.transactionScopeItems.update"));
}

#[test]
fn ops_filters_by_scope() {
    let stdout = run_cli_success(&["ops", "--scope", "app", "--json"]);
    let ops: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(ops.len(), 12);
    for op in &ops {
        assert!(op["name"].as_str().unwrap().starts_with("pepperi.app."));
        assert_eq!(op["mutation"], true);
    }
}

#[test]
fn call_without_endpoint_fails() {
    let stderr = run_cli_failure(&["call", "pepperi.api.accounts.get"]);
    assert!(stderr.contains("No bridge endpoint"), "stderr: {}", stderr);
}

#[test]
fn unknown_operation_rejected_locally() {
    let stderr = run_cli_failure(&[
        "--endpoint",
        DEAD_ENDPOINT,
        "call",
        "pepperi.api.widgets.get",
    ]);
    assert!(stderr.contains("not a catalogued operation"), "stderr: {}", stderr);
}

#[test]
fn invalid_params_json_rejected() {
    let stderr = run_cli_failure(&[
        "--endpoint",
        DEAD_ENDPOINT,
        "call",
        "pepperi.api.accounts.get",
        "--params",
        "{not json",
    ]);
    assert!(stderr.contains("--params is not valid JSON"), "stderr: {}", stderr);
}

#[test]
fn ambiguous_key_rejected_locally() {
    let stderr = run_cli_failure(&[
        "--endpoint",
        DEAD_ENDPOINT,
        "call",
        "pepperi.api.accounts.get",
        "--params",
        r#"{"key": {"UUID": "u", "InternalID": 1}, "fields": ["Name"]}"#,
    ]);
    assert!(stderr.contains("invalid input"), "stderr: {}", stderr);
    assert_eq!(
        stderr.matches("invalid parameters for").count(),
        1,
        "stderr: {}",
        stderr
    );
}

#[test]
fn scoped_item_update_points_to_call() {
    let stderr = run_cli_failure(&[
        "--endpoint",
        DEAD_ENDPOINT,
        "update",
        "transactionScopeItems",
        "--objects",
        r#"[{"UUID": "a"}]"#,
    ]);
    assert!(stderr.contains("order-center-update"), "stderr: {}", stderr);
    assert!(stderr.contains("cpi call"), "stderr: {}", stderr);
    assert!(!stderr.contains("connection"), "stderr: {}", stderr);
}

#[test]
fn scoped_item_get_points_to_call() {
    let stderr = run_cli_failure(&[
        "--endpoint",
        DEAD_ENDPOINT,
        "get",
        "transactionScopeItems",
        "--id",
        "1",
        "--fields",
        "ItemName",
    ]);
    assert!(stderr.contains("cpi call"), "stderr: {}", stderr);
}

#[test]
fn unknown_entity_rejected_locally() {
    let stderr = run_cli_failure(&[
        "--endpoint",
        DEAD_ENDPOINT,
        "get",
        "widgets",
        "--id",
        "1",
        "--fields",
        "Name",
    ]);
    assert!(stderr.contains("not a catalogued operation"), "stderr: {}", stderr);
}

#[test]
fn empty_fields_rejected() {
    let stderr = run_cli_failure(&[
        "--endpoint",
        DEAD_ENDPOINT,
        "search",
        "accounts",
        "--fields",
        "",
    ]);
    assert!(stderr.contains("Invalid --fields"), "stderr: {}", stderr);
}

#[test]
fn required_sorting_rejected_locally() {
    let stderr = run_cli_failure(&[
        "--endpoint",
        DEAD_ENDPOINT,
        "--sorting",
        "required",
        "search",
        "accounts",
        "--fields",
        "Name",
    ]);
    assert!(stderr.contains("sort key"), "stderr: {}", stderr);
}

#[test]
fn insecure_endpoint_rejected() {
    let stderr = run_cli_failure(&[
        "--endpoint",
        "http://bridge.example.com",
        "call",
        "pepperi.api.accounts.get",
    ]);
    assert!(stderr.contains("Invalid bridge endpoint"), "stderr: {}", stderr);
}

#[tokio::test(flavor = "multi_thread")]
async fn search_prints_objects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cpi"))
        .and(body_partial_json(json!({
            "function": "pepperi.api.accounts.search",
            "fields": ["Name"],
            "sorting": [{"Field": "Name", "Ascending": false}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "objects": [{"Name": "A"}, {"Name": "B"}],
            "count": 2,
            "page": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = format!("{}/cpi", server.uri());
    let output = run_cli_async(
        [
            "--endpoint", endpoint.as_str(), "search", "accounts", "--fields", "Name", "--sort",
            "Name:desc",
        ]
        .map(String::from)
        .to_vec(),
    )
    .await;

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).unwrap()["Name"].clone())
        .collect();
    assert_eq!(names, [json!("A"), json!("B")]);
}

#[tokio::test(flavor = "multi_thread")]
async fn business_failure_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cpi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": {"code": 7, "message": "x"}
        })))
        .mount(&server)
        .await;

    let endpoint = format!("{}/cpi", server.uri());
    let output = run_cli_async(
        [
            "--endpoint",
            endpoint.as_str(),
            "udt",
            "get",
            "T",
            "--main-key",
            "m",
            "--secondary-key",
            "s",
        ]
        .map(String::from)
        .to_vec(),
    )
    .await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("code 7: x"), "stderr: {}", stderr);
}

#[tokio::test(flavor = "multi_thread")]
async fn mixed_batch_update_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cpi"))
        .and(body_partial_json(json!({
            "function": "pepperi.api.accounts.update",
            "objects": [{"UUID": "a"}, {"UUID": "b"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "result": [
                {"id": "a", "status": "updated"},
                {"id": "b", "status": "failed", "message": "locked"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = format!("{}/cpi", server.uri());
    let output = run_cli_async(
        [
            "--endpoint",
            endpoint.as_str(),
            "update",
            "accounts",
            "--objects",
            r#"[{"UUID": "a"}, {"UUID": "b"}]"#,
        ]
        .map(String::from)
        .to_vec(),
    )
    .await;

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout: {}", stdout);
    assert!(lines[0].contains("a") && lines[0].contains("updated"));
    assert!(lines[1].contains("b") && lines[1].contains("locked"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed: 1"), "stderr: {}", stderr);
}

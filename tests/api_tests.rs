//! End-to-end API tests.
//!
//! Each test serves the real router on an ephemeral port against a temporary
//! SQLite database and drives it over HTTP with the mock LLM client, so no
//! network credentials or external services are needed.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use askql::config::LlmConfig;
use askql::db::{seed_students, Executor, SEED_ROW_COUNT};
use askql::llm::{LlmProvider, MockLlmClient, SqlGenerator};
use askql::server::{router, AppState};

/// A running test server plus handles to its backing database.
struct TestApp {
    base_url: String,
    executor: Executor,
    _dir: tempfile::TempDir,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }
}

/// Serves the router with the given generator on an ephemeral port.
async fn spawn_app(generator: SqlGenerator) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let executor = Executor::new(dir.path().join("api_test.db"));

    let app = router(AppState::new(executor.clone(), generator));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        base_url: format!("http://{addr}"),
        executor,
        _dir: dir,
    }
}

fn mock_generator() -> SqlGenerator {
    SqlGenerator::Enabled(Box::new(MockLlmClient::new()))
}

fn disabled_generator() -> SqlGenerator {
    SqlGenerator::from_config(&LlmConfig {
        provider: LlmProvider::Groq,
        api_key: None,
        model: "llama-3.1-70b-versatile".to_string(),
        timeout_secs: 30,
    })
    .unwrap()
}

#[tokio::test]
async fn test_health_returns_ok() {
    let app = spawn_app(mock_generator()).await;

    let response = reqwest::get(app.url("/health")).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_health_works_without_database_or_model() {
    // No seed, no credential: the probe must still answer.
    let app = spawn_app(disabled_generator()).await;

    let response = reqwest::get(app.url("/health")).await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_students_lists_seeded_rows() {
    let app = spawn_app(mock_generator()).await;
    seed_students(&app.executor).await.unwrap();

    let response = reqwest::get(app.url("/students")).await.unwrap();

    assert_eq!(response.status(), 200);
    let students: Vec<Value> = response.json().await.unwrap();
    assert_eq!(students.len(), SEED_ROW_COUNT);
    assert_eq!(students[0]["name"], "Alice");
    assert_eq!(students[0]["class_name"], "Data Science");
    assert_eq!(students[0]["section"], "A");
    assert_eq!(students[0]["marks"], 85);
}

#[tokio::test]
async fn test_students_without_table_is_server_error() {
    let app = spawn_app(mock_generator()).await;

    let response = reqwest::get(app.url("/students")).await.unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("STUDENT"));
}

#[tokio::test]
async fn test_run_sql_returns_rows() {
    let app = spawn_app(mock_generator()).await;
    seed_students(&app.executor).await.unwrap();

    let response = reqwest::Client::new()
        .post(app.url("/sql"))
        .json(&json!({ "sql": "SELECT NAME, CLASS, SECTION, MARKS FROM STUDENT;" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), SEED_ROW_COUNT);
    for row in rows {
        assert_eq!(row.as_array().unwrap().len(), 4);
    }
}

#[tokio::test]
async fn test_run_sql_scalar_projection() {
    let app = spawn_app(mock_generator()).await;
    seed_students(&app.executor).await.unwrap();

    let response = reqwest::Client::new()
        .post(app.url("/sql"))
        .json(&json!({ "sql": "SELECT COUNT(*) FROM STUDENT;" }))
        .send()
        .await
        .unwrap();

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["rows"], json!([[SEED_ROW_COUNT]]));
}

#[tokio::test]
async fn test_run_sql_malformed_is_client_error() {
    let app = spawn_app(mock_generator()).await;
    seed_students(&app.executor).await.unwrap();

    let response = reqwest::Client::new()
        .post(app.url("/sql"))
        .json(&json!({ "sql": "SELEKT * FROM STUDENT;" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(!body["detail"].as_str().unwrap().is_empty());

    // The process must survive the failure.
    let health = reqwest::get(app.url("/health")).await.unwrap();
    assert_eq!(health.status(), 200);
}

#[tokio::test]
async fn test_nl2sql_returns_normalized_statement() {
    // The mock answers with fenced markdown; the endpoint must return the
    // cleaned, terminated statement.
    let app = spawn_app(mock_generator()).await;

    let response = reqwest::Client::new()
        .post(app.url("/nl2sql"))
        .json(&json!({ "question": "How many students are there?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["sql"], "SELECT COUNT(*) FROM STUDENT;");
}

#[tokio::test]
async fn test_nl2sql_without_credential_is_server_error() {
    let app = spawn_app(disabled_generator()).await;

    let response = reqwest::Client::new()
        .post(app.url("/nl2sql"))
        .json(&json!({ "question": "How many students are there?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("GROQ_API_KEY"));
}

#[tokio::test]
async fn test_direct_sql_still_works_when_model_unconfigured() {
    // A missing credential degrades only the natural-language path.
    let app = spawn_app(disabled_generator()).await;
    seed_students(&app.executor).await.unwrap();

    let response = reqwest::Client::new()
        .post(app.url("/sql"))
        .json(&json!({ "sql": "SELECT COUNT(*) FROM STUDENT;" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let students = reqwest::get(app.url("/students")).await.unwrap();
    assert_eq!(students.status(), 200);
}

#[tokio::test]
async fn test_ask_runs_full_pipeline() {
    let app = spawn_app(mock_generator()).await;
    seed_students(&app.executor).await.unwrap();

    let response = reqwest::Client::new()
        .post(app.url("/ask"))
        .json(&json!({ "question": "How many students are there?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["sql"], "SELECT COUNT(*) FROM STUDENT;");
    assert_eq!(body["rows"], json!([[SEED_ROW_COUNT]]));
}

#[tokio::test]
async fn test_ask_with_bad_generated_sql_is_server_error() {
    // A generated statement that fails to execute is a server-class failure,
    // unlike the caller-supplied /sql path.
    let generator = SqlGenerator::Enabled(Box::new(
        MockLlmClient::new().with_response("broken", "```sql\nSELEKT nonsense\n```"),
    ));
    let app = spawn_app(generator).await;
    seed_students(&app.executor).await.unwrap();

    let response = reqwest::Client::new()
        .post(app.url("/ask"))
        .json(&json!({ "question": "something broken please" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn test_ask_without_credential_is_server_error() {
    let app = spawn_app(disabled_generator()).await;

    let response = reqwest::Client::new()
        .post(app.url("/ask"))
        .json(&json!({ "question": "anything" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn test_nl2sql_with_custom_filter_question() {
    let app = spawn_app(mock_generator()).await;

    let response = reqwest::Client::new()
        .post(app.url("/nl2sql"))
        .json(&json!({ "question": "Tell me all the students studying in Data Science class" }))
        .send()
        .await
        .unwrap();

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["sql"],
        "SELECT * FROM STUDENT WHERE CLASS = 'Data Science';"
    );
}

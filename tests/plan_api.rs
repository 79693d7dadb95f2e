//! Integration tests for the plan-generation API.
//!
//! Each test spins up an Axum server on a random port with a stub model
//! (no real API calls) and exercises the REST contract end to end.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::timeout;

use fitplan::agent::{AgentSpec, PlanModel};
use fitplan::error::AgentError;
use fitplan::orchestrator::Orchestrator;
use fitplan::web::{AppState, plan_routes};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Stub model: replies with canned markdown per agent, or fails everywhere.
struct StubModel {
    fail: bool,
}

#[async_trait]
impl PlanModel for StubModel {
    async fn run(&self, spec: &AgentSpec, _prompt: &str) -> Result<String, AgentError> {
        if self.fail {
            return Err(AgentError::RequestFailed {
                agent: spec.name.to_string(),
                reason: "stub outage".to_string(),
            });
        }
        Ok(match spec.name {
            "dietary_planner" => "## Meal Plan\n- Poha for breakfast".to_string(),
            "fitness_trainer" => "## Workout Plan\n- Squats".to_string(),
            _ => "# Hello Jane\n\n| Day | Focus |\n|---|---|\n| Mon | Legs |".to_string(),
        })
    }
}

/// Start a server backed by `model`, return its port.
async fn start_server(model: StubModel) -> u16 {
    let orchestrator = Arc::new(Orchestrator::new(Arc::new(model), "stub-model"));
    let app = plan_routes(AppState { orchestrator });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

fn jane_payload() -> Value {
    json!({
        "name": "Jane",
        "age": 30,
        "weight": 60.0,
        "height": 165.0,
        "gender": "Female",
        "activity_level": "Moderate",
        "dietary_preference": "Vegetarian",
        "cuisine_preference": "Indian",
        "fitness_goal": "Weight Loss",
        "allergies": "None"
    })
}

#[tokio::test]
async fn index_serves_the_form_page() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(StubModel { fail: false }).await;

        let body = reqwest::get(format!("http://127.0.0.1:{port}/"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert!(body.contains("Generate Health Plan"));
        assert!(body.contains("AI Health &amp; Fitness Plan Generator"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn valid_profile_returns_merged_plan() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(StubModel { fail: false }).await;

        let response = reqwest::Client::new()
            .post(format!("http://127.0.0.1:{port}/api/plan"))
            .json(&jane_payload())
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert!(
            body["plan_markdown"]
                .as_str()
                .unwrap()
                .contains("Hello Jane")
        );
        // Markdown tables come back rendered for the page.
        assert!(body["plan_html"].as_str().unwrap().contains("<table>"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn zero_fields_rejected_with_warning() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(StubModel { fail: false }).await;

        let mut payload = jane_payload();
        payload["age"] = json!(0);
        payload["weight"] = json!(0);

        let response = reqwest::Client::new()
            .post(format!("http://127.0.0.1:{port}/api/plan"))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 422);
        let body: Value = response.json().await.unwrap();
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("age"));
        assert!(error.contains("weight"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn missing_numeric_fields_rejected() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(StubModel { fail: false }).await;

        // No age/weight/height at all: defaults to zero, then rejected.
        let payload = json!({
            "gender": "Other",
            "activity_level": "Low",
            "dietary_preference": "Keto",
            "cuisine_preference": "No Preference",
            "fitness_goal": "Endurance"
        });

        let response = reqwest::Client::new()
            .post(format!("http://127.0.0.1:{port}/api/plan"))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 422);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn model_failure_surfaces_as_bad_gateway() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(StubModel { fail: true }).await;

        let response = reqwest::Client::new()
            .post(format!("http://127.0.0.1:{port}/api/plan"))
            .json(&jane_payload())
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 502);
        let body: Value = response.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("dietary_planner"));
    })
    .await
    .expect("test timed out");
}

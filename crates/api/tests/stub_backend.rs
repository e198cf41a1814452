//! Integration tests driving the typed clients against an in-process stub
//! backend. The stub records method, path, and body for every mutation so
//! each client's wire behavior is asserted over real HTTP.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use console_api::{EndpointClient, ScheduleClient, StoreClient};
use console_core::{Endpoint, Schedule, StoreEntry};

// ============================================================================
// Stub Backend
// ============================================================================

/// One request recorded by the stub
#[derive(Debug, Clone)]
struct Captured {
    method: &'static str,
    path: String,
    body: Value,
}

#[derive(Clone)]
struct StubState {
    log: Arc<Mutex<Vec<Captured>>>,
    endpoints: Arc<Mutex<Value>>,
    jobs: Arc<Mutex<Value>>,
    entries: Arc<Mutex<Value>>,
}

impl StubState {
    fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
            endpoints: Arc::new(Mutex::new(json!([]))),
            jobs: Arc::new(Mutex::new(json!([]))),
            entries: Arc::new(Mutex::new(json!([]))),
        }
    }

    fn record(&self, method: &'static str, path: impl Into<String>, body: Value) {
        self.log.lock().unwrap().push(Captured {
            method,
            path: path.into(),
            body,
        });
    }

    fn captured(&self) -> Vec<Captured> {
        self.log.lock().unwrap().clone()
    }
}

async fn list_endpoints(State(state): State<StubState>) -> Json<Value> {
    Json(state.endpoints.lock().unwrap().clone())
}

async fn create_endpoint(State(state): State<StubState>, Json(body): Json<Value>) -> StatusCode {
    state.record("POST", "/endpoints", body);
    StatusCode::OK
}

async fn update_endpoint(State(state): State<StubState>, Json(body): Json<Value>) -> StatusCode {
    state.record("PUT", "/endpoints", body);
    StatusCode::OK
}

async fn delete_endpoints(State(state): State<StubState>, Json(body): Json<Value>) -> StatusCode {
    state.record("DELETE", "/endpoints", body.clone());
    if let Some(ids) = body.as_array() {
        let mut endpoints = state.endpoints.lock().unwrap();
        if let Some(records) = endpoints.as_array_mut() {
            records.retain(|record| {
                record
                    .get("EndpointId")
                    .map(|id| !ids.contains(id))
                    .unwrap_or(true)
            });
        }
    }
    StatusCode::OK
}

async fn list_jobs(State(state): State<StubState>) -> Json<Value> {
    Json(state.jobs.lock().unwrap().clone())
}

async fn create_job(State(state): State<StubState>, Json(body): Json<Value>) -> StatusCode {
    state.record("POST", "/jobs", body);
    StatusCode::OK
}

async fn patch_job(
    State(state): State<StubState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> StatusCode {
    state.record("PATCH", format!("/jobs/{id}"), body);
    StatusCode::OK
}

async fn delete_job(State(state): State<StubState>, Path(id): Path<String>) -> StatusCode {
    state.record("DELETE", format!("/jobs/{id}"), Value::Null);
    StatusCode::OK
}

async fn list_entries(State(state): State<StubState>) -> Json<Value> {
    Json(state.entries.lock().unwrap().clone())
}

async fn patch_entry(
    State(state): State<StubState>,
    Path(key): Path<String>,
    Json(body): Json<Value>,
) -> StatusCode {
    state.record("PATCH", format!("/entry/{key}"), body);
    StatusCode::OK
}

async fn delete_entry(State(state): State<StubState>, Path(key): Path<String>) -> (StatusCode, String) {
    state.record("DELETE", format!("/entry/{key}"), Value::Null);
    // The real store answers deletes with plain text, not JSON
    (StatusCode::OK, format!("entry {key} deleted"))
}

fn stub_router(state: StubState) -> Router {
    Router::new()
        .route(
            "/endpoints",
            get(list_endpoints)
                .post(create_endpoint)
                .put(update_endpoint)
                .delete(delete_endpoints),
        )
        .route("/jobs", get(list_jobs).post(create_job))
        .route("/jobs/{id}", patch(patch_job).delete(delete_job))
        .route("/entries", get(list_entries))
        .route("/entry/{key}", patch(patch_entry).delete(delete_entry))
        .with_state(state)
}

async fn spawn_router(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn spawn_stub(state: StubState) -> SocketAddr {
    spawn_router(stub_router(state)).await
}

// ============================================================================
// Endpoint Family
// ============================================================================

#[tokio::test]
async fn endpoint_list_decodes_records() {
    let state = StubState::new();
    *state.endpoints.lock().unwrap() = json!([
        {
            "EndpointId": "e1",
            "UserId": "u1",
            "FriendlyName": "Lamp",
            "ManufacturerName": "Acme",
            "Description": "Living room",
            "DisplayCategories": "[\"LIGHT\"]",
            "Capabilities": "[]"
        },
        {
            "EndpointId": "e2",
            "UserId": "u1",
            "FriendlyName": "Door",
            "ManufacturerName": "Acme",
            "Description": "Front door",
            "DisplayCategories": "[\"CONTACT_SENSOR\"]",
            "Capabilities": "[{\"interface\":\"Alexa.ContactSensor\"}]"
        }
    ]);
    let addr = spawn_stub(state).await;
    let client = EndpointClient::new(format!("http://{addr}"));

    let endpoints = client.list().await.unwrap();

    assert_eq!(endpoints.len(), 2);
    assert_eq!(endpoints[0].friendly_name, "Lamp");
    assert_eq!(endpoints[0].display_categories, vec!["LIGHT".to_string()]);
    assert!(endpoints[0].capabilities.is_empty());
    assert_eq!(
        endpoints[1].capabilities[0]["interface"],
        json!("Alexa.ContactSensor")
    );
}

#[tokio::test]
async fn endpoint_list_fails_on_malformed_encoded_field() {
    let state = StubState::new();
    *state.endpoints.lock().unwrap() = json!([
        {
            "EndpointId": "e1",
            "DisplayCategories": "[broken",
            "Capabilities": "[]"
        }
    ]);
    let addr = spawn_stub(state).await;
    let client = EndpointClient::new(format!("http://{addr}"));

    let err = client.list().await.unwrap_err();
    assert!(err.is_decode());
    assert!(err.to_string().contains("DisplayCategories"));
}

#[tokio::test]
async fn endpoint_update_sends_envelope() {
    let state = StubState::new();
    let addr = spawn_stub(state.clone()).await;
    let client = EndpointClient::new(format!("http://{addr}"));

    let endpoint = Endpoint {
        endpoint_id: "e1".to_string(),
        user_id: "u1".to_string(),
        friendly_name: "Lamp".to_string(),
        manufacturer_name: "Acme".to_string(),
        description: "Kitchen".to_string(),
        display_categories: vec!["LIGHT".to_string()],
        capabilities: vec![],
    };
    client.update(&endpoint).await.unwrap();

    let log = state.captured();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method, "PUT");
    assert_eq!(log[0].path, "/endpoints");
    assert_eq!(
        log[0].body,
        json!({
            "event": {
                "endpoint": {
                    "endpointId": "e1",
                    "userId": "u1",
                    "friendlyName": "Lamp",
                    "manufacturerName": "Acme",
                    "description": "Kitchen",
                    "displayCategories": ["LIGHT"],
                    "capabilities": []
                }
            }
        })
    );
}

#[tokio::test]
async fn endpoint_create_posts_exactly_once() {
    let state = StubState::new();
    let addr = spawn_stub(state.clone()).await;
    let client = EndpointClient::new(format!("http://{addr}"));

    let endpoint = Endpoint {
        endpoint_id: "e9".to_string(),
        friendly_name: "New sensor".to_string(),
        ..Default::default()
    };
    client.create(&endpoint).await.unwrap();

    let log = state.captured();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method, "POST");
    assert_eq!(log[0].path, "/endpoints");
    assert_eq!(log[0].body["event"]["endpoint"]["endpointId"], json!("e9"));
}

#[tokio::test]
async fn endpoint_create_with_blank_id_omits_the_key() {
    let state = StubState::new();
    let addr = spawn_stub(state.clone()).await;
    let client = EndpointClient::new(format!("http://{addr}"));

    let draft = Endpoint {
        friendly_name: "New sensor".to_string(),
        ..Default::default()
    };
    client.create(&draft).await.unwrap();

    // Key absence is what tells the backend to generate an identifier
    let log = state.captured();
    assert_eq!(log.len(), 1);
    let posted = &log[0].body["event"]["endpoint"];
    assert!(posted.get("endpointId").is_none());
    assert_eq!(posted["friendlyName"], json!("New sensor"));
}

#[tokio::test]
async fn endpoint_delete_sends_id_array_and_record_is_gone_on_refetch() {
    let state = StubState::new();
    *state.endpoints.lock().unwrap() = json!([
        {
            "EndpointId": "e1",
            "DisplayCategories": "[]",
            "Capabilities": "[]"
        },
        {
            "EndpointId": "e2",
            "DisplayCategories": "[]",
            "Capabilities": "[]"
        }
    ]);
    let addr = spawn_stub(state.clone()).await;
    let client = EndpointClient::new(format!("http://{addr}"));

    client.delete("e1").await.unwrap();

    let log = state.captured();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method, "DELETE");
    assert_eq!(log[0].path, "/endpoints");
    assert_eq!(log[0].body, json!(["e1"]));

    let remaining = client.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].endpoint_id, "e2");
}

// ============================================================================
// Schedule Family
// ============================================================================

#[tokio::test]
async fn schedule_create_forces_trigger_constants() {
    let state = StubState::new();
    let addr = spawn_stub(state.clone()).await;
    let client = ScheduleClient::new(format!("http://{addr}"));

    let schedule = Schedule {
        id: "job-1".to_string(),
        name: "daily".to_string(),
        run_date: "2024-01-01T00:00:00".to_string(),
        args: vec!["x".to_string()],
        func: "user:typed-something".to_string(),
        trigger: "interval".to_string(),
        ..Default::default()
    }
    .with_fixed_trigger();
    client.create(&schedule).await.unwrap();

    let log = state.captured();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method, "POST");
    assert_eq!(log[0].path, "/jobs");
    assert_eq!(log[0].body["func"], json!("scheduler:trigger_event"));
    assert_eq!(log[0].body["trigger"], json!("date"));
    assert_eq!(log[0].body["args"], json!(["x"]));
    assert_eq!(log[0].body["run_date"], json!("2024-01-01T00:00:00"));
}

#[tokio::test]
async fn schedule_update_patches_job_resource() {
    let state = StubState::new();
    let addr = spawn_stub(state.clone()).await;
    let client = ScheduleClient::new(format!("http://{addr}"));

    let schedule = Schedule {
        id: "job-1".to_string(),
        name: "renamed".to_string(),
        ..Default::default()
    }
    .with_fixed_trigger();
    client.update(&schedule).await.unwrap();

    let log = state.captured();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method, "PATCH");
    assert_eq!(log[0].path, "/jobs/job-1");
    assert_eq!(log[0].body["name"], json!("renamed"));
}

#[tokio::test]
async fn schedule_delete_targets_job_path() {
    let state = StubState::new();
    let addr = spawn_stub(state.clone()).await;
    let client = ScheduleClient::new(format!("http://{addr}"));

    client.delete("job-1").await.unwrap();

    let log = state.captured();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method, "DELETE");
    assert_eq!(log[0].path, "/jobs/job-1");
}

#[tokio::test]
async fn schedule_list_preserves_unmodeled_fields() {
    let state = StubState::new();
    *state.jobs.lock().unwrap() = json!([
        {
            "id": "job-1",
            "name": "daily",
            "run_date": "2024-01-01T00:00:00",
            "args": ["x"],
            "func": "scheduler:trigger_event",
            "trigger": "date",
            "misfire_grace_time": 1,
            "next_run_time": "2024-01-01T00:00:00+00:00"
        }
    ]);
    let addr = spawn_stub(state).await;
    let client = ScheduleClient::new(format!("http://{addr}"));

    let jobs = client.list().await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].name, "daily");
    assert_eq!(jobs[0].extra["next_run_time"], json!("2024-01-01T00:00:00+00:00"));
}

// ============================================================================
// Store Family
// ============================================================================

#[tokio::test]
async fn store_list_decodes_lenient_values() {
    let state = StubState::new();
    *state.entries.lock().unwrap() = json!([
        {
            "key": "count",
            "value": 42,
            "created": "2024-01-01T00:00:00+0000",
            "last_changed": "2024-01-02T10:30:00+0000",
            "last_accessed": ""
        },
        {"key": "mode", "value": "armed"}
    ]);
    let addr = spawn_stub(state).await;
    let client = StoreClient::new(format!("http://{addr}"));

    let entries = client.list().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].value, "42");
    assert_eq!(entries[1].value, "armed");
    assert_eq!(entries[1].created, "");
}

#[tokio::test]
async fn store_update_patches_entry_by_key() {
    let state = StubState::new();
    let addr = spawn_stub(state.clone()).await;
    let client = StoreClient::new(format!("http://{addr}"));

    let entry = StoreEntry {
        key: "mode".to_string(),
        value: "armed".to_string(),
        ..Default::default()
    };
    client.update(&entry).await.unwrap();

    let log = state.captured();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method, "PATCH");
    assert_eq!(log[0].path, "/entry/mode");
    assert_eq!(log[0].body["key"], json!("mode"));
    assert_eq!(log[0].body["value"], json!("armed"));
}

#[tokio::test]
async fn store_delete_targets_entry_path() {
    let state = StubState::new();
    let addr = spawn_stub(state.clone()).await;
    let client = StoreClient::new(format!("http://{addr}"));

    client.delete("mode").await.unwrap();

    let log = state.captured();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method, "DELETE");
    assert_eq!(log[0].path, "/entry/mode");
}

// ============================================================================
// Failure Mapping
// ============================================================================

#[tokio::test]
async fn non_success_status_maps_to_api_error() {
    let app = Router::new().route(
        "/endpoints",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream sad") }),
    );
    let addr = spawn_router(app).await;
    let client = EndpointClient::new(format!("http://{addr}"));

    let err = client.list().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), Some(502));
    assert!(err.to_string().contains("upstream sad"));
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // Bind then drop so the port is guaranteed unoccupied
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = StoreClient::new(format!("http://{addr}"));
    let err = client.list().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

use super::*;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use jobwatch_config::Config;
use serde_json::{json, Value};
use tower::ServiceExt;

fn create_test_state() -> Arc<AppState> {
    Arc::new(AppState::from_config(&Config::default()).unwrap())
}

async fn send(
    app: Router,
    method: &str,
    uri: &str,
    credential: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(credential) = credential {
        builder = builder.header("authorization", format!("Bearer {}", credential));
    }
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn login(state: &Arc<AppState>, sso_token: &str) -> String {
    let (status, body) = send(
        create_router(state.clone()),
        "POST",
        "/api/auth/sso-login",
        None,
        Some(json!({ "token": sso_token })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

fn new_job(name: &str) -> Value {
    json!({
        "jobName": name,
        "schedule": "0 */2 * * *",
        "serverName": "prod-server-09",
        "fileLocation": "/data/x",
        "filePattern": "*.csv"
    })
}

#[tokio::test]
async fn test_sso_login_returns_token_and_user() {
    let state = create_test_state();
    let (status, body) = send(
        create_router(state.clone()),
        "POST",
        "/api/auth/sso-login",
        None,
        Some(json!({ "token": "mock-sso-token-admin" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "admin@company.com");
    assert_eq!(body["user"]["name"], "Admin User");
    assert_eq!(body["user"]["hasAccess"], true);
    let token = body["token"].as_str().unwrap();
    assert_eq!(
        state.auth.codec().verify(token).unwrap(),
        "admin@company.com"
    );
}

#[tokio::test]
async fn test_every_trusted_token_logs_in() {
    let state = create_test_state();
    for (sso_token, email) in [
        ("mock-sso-token-admin", "admin@company.com"),
        ("mock-sso-token-user", "user@company.com"),
        ("mock-sso-token-noaccess", "noaccess@company.com"),
    ] {
        let credential = login(&state, sso_token).await;
        assert_eq!(state.auth.codec().verify(&credential).unwrap(), email);
    }
}

#[tokio::test]
async fn test_sso_login_unknown_token_is_unauthorized() {
    let state = create_test_state();
    let (status, body) = send(
        create_router(state),
        "POST",
        "/api/auth/sso-login",
        None,
        Some(json!({ "token": "forged" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().unwrap().contains("Invalid SSO token"));
}

#[tokio::test]
async fn test_sso_login_malformed_body_is_bad_request() {
    let state = create_test_state();
    let (status, body) = send(
        create_router(state),
        "POST",
        "/api/auth/sso-login",
        None,
        Some(json!({ "tok": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_me_returns_identity_without_access_check() {
    let state = create_test_state();
    let credential = login(&state, "mock-sso-token-noaccess").await;
    let (status, body) = send(
        create_router(state),
        "GET",
        "/api/auth/me",
        Some(&credential),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "noaccess@company.com");
    assert_eq!(body["user"]["hasAccess"], false);
}

#[tokio::test]
async fn test_admin_reads_dashboard_stats() {
    let state = create_test_state();
    let credential = login(&state, "mock-sso-token-admin").await;
    let (status, body) = send(
        create_router(state),
        "GET",
        "/api/dashboard/stats",
        Some(&credential),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["running"], 3);
    assert_eq!(body["failed"], 1);
    assert_eq!(body["paused"], 1);
    assert_eq!(body["averageSuccessRate"], 85.7);
    assert!(body["lastSuccessfulRun"].is_string());
}

#[tokio::test]
async fn test_noaccess_is_forbidden_on_every_protected_route() {
    let state = create_test_state();
    let credential = login(&state, "mock-sso-token-noaccess").await;

    let routes = [
        ("GET", "/api/dashboard/stats", None),
        ("GET", "/api/file-sensing/jobs", None),
        ("POST", "/api/file-sensing/jobs", Some(new_job("X"))),
        ("POST", "/api/file-sensing/jobs/1/toggle", None),
        ("GET", "/api/filtering/jobs", None),
        ("POST", "/api/filtering/jobs", Some(new_job("Y"))),
        ("POST", "/api/filtering/jobs/1/toggle", None),
    ];
    for (method, uri, body) in routes {
        let (status, _) = send(
            create_router(state.clone()),
            method,
            uri,
            Some(&credential),
            body,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{} {}", method, uri);
    }

    // nothing was mutated
    assert_eq!(state.jobs.file_sensing().len(), 3);
    assert_eq!(
        state.jobs.file_sensing().get(1).unwrap().status,
        jobwatch_core::JobStatus::Running
    );
}

#[tokio::test]
async fn test_missing_credential_is_unauthorized() {
    let state = create_test_state();
    let (status, body) = send(
        create_router(state),
        "GET",
        "/api/file-sensing/jobs",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().unwrap().contains("Bearer"));
}

#[tokio::test]
async fn test_expired_credential_is_unauthorized() {
    let state = create_test_state();
    let issued = chrono::Utc::now() - chrono::Duration::hours(25);
    let credential = state.auth.codec().issue_at("admin@company.com", issued);
    let (status, _) = send(
        create_router(state),
        "GET",
        "/api/dashboard/stats",
        Some(&credential),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_jobs_in_insertion_order() {
    let state = create_test_state();
    let credential = login(&state, "mock-sso-token-user").await;
    let (status, body) = send(
        create_router(state),
        "GET",
        "/api/file-sensing/jobs",
        Some(&credential),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|job| job["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(body[2]["status"], "paused");
}

#[tokio::test]
async fn test_create_then_toggle_file_sensing_job() {
    let state = create_test_state();
    let credential = login(&state, "mock-sso-token-admin").await;

    let (status, created) = send(
        create_router(state.clone()),
        "POST",
        "/api/file-sensing/jobs",
        Some(&credential),
        Some(new_job("X")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 4);
    assert_eq!(created["status"], "running");
    assert!(created["lastSuccessfulAttempt"].is_null());
    assert!(created["lastSensingAttempt"].is_null());

    let (status, toggled) = send(
        create_router(state.clone()),
        "POST",
        "/api/file-sensing/jobs/3/toggle",
        Some(&credential),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["id"], 3);
    assert_eq!(toggled["status"], "running");

    let (_, listed) = send(
        create_router(state),
        "GET",
        "/api/file-sensing/jobs",
        Some(&credential),
        None,
    )
    .await;
    let jobs = listed.as_array().unwrap();
    assert_eq!(jobs.len(), 4);
    assert_eq!(jobs[3]["jobName"], "X");
}

#[tokio::test]
async fn test_collections_are_independent() {
    let state = create_test_state();
    let credential = login(&state, "mock-sso-token-admin").await;

    let (status, created) = send(
        create_router(state.clone()),
        "POST",
        "/api/filtering/jobs",
        Some(&credential),
        Some(new_job("F")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 3);
    assert_eq!(state.jobs.file_sensing().len(), 3);
    assert_eq!(state.jobs.filtering().len(), 3);
}

#[tokio::test]
async fn test_toggle_unknown_job_is_not_found() {
    let state = create_test_state();
    let credential = login(&state, "mock-sso-token-admin").await;
    let before = state.jobs.filtering().list();

    let (status, body) = send(
        create_router(state.clone()),
        "POST",
        "/api/filtering/jobs/99/toggle",
        Some(&credential),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
    assert_eq!(state.jobs.filtering().list(), before);
}

#[tokio::test]
async fn test_create_with_blank_field_is_bad_request() {
    let state = create_test_state();
    let credential = login(&state, "mock-sso-token-admin").await;
    let mut body = new_job("X");
    body["serverName"] = json!("  ");

    let (status, response) = send(
        create_router(state.clone()),
        "POST",
        "/api/file-sensing/jobs",
        Some(&credential),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().contains("serverName"));
    assert_eq!(state.jobs.file_sensing().len(), 3);
}

#[tokio::test]
async fn test_create_with_missing_field_is_bad_request() {
    let state = create_test_state();
    let credential = login(&state, "mock-sso-token-admin").await;

    let (status, _) = send(
        create_router(state),
        "POST",
        "/api/filtering/jobs",
        Some(&credential),
        Some(json!({ "jobName": "only a name" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_monitoring_routes_are_public() {
    let state = create_test_state();
    let (status, body) = send(create_router(state.clone()), "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["jobs"], 5);

    let (status, body) = send(create_router(state), "GET", "/livez", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");
}

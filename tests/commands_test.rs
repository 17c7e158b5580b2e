//! Integration tests for command handlers

use seo_autopilot::{
    commands::{projects::load_dashboard, CommandContext},
    core::{save_session, Config},
    storage::ProjectStats,
    supabase::{Session, User},
    AutopilotError, UserId, SUPABASE_ANON_KEY_ENV_VAR, SUPABASE_URL_ENV_VAR,
};
use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const PROJECT_ID: &str = "6f1c1f4e-8d4e-4a8e-9a43-0d3b8e2f6c11";

fn session() -> Session {
    Session {
        access_token: "user-token".to_string(),
        refresh_token: "refresh".to_string(),
        token_type: "bearer".to_string(),
        expires_in: Some(3600),
        expires_at: None,
        user: User {
            id: UserId::new(Uuid::nil()),
            email: Some("owner@acme.com".to_string()),
        },
    }
}

#[test]
fn test_config_resolution_from_env() {
    std::env::set_var(SUPABASE_URL_ENV_VAR, "https://demo.supabase.co");
    std::env::set_var(SUPABASE_ANON_KEY_ENV_VAR, "env-key");

    let config = Config::resolve(None, None).unwrap();
    assert_eq!(config.url.as_str(), "https://demo.supabase.co/");
    assert_eq!(config.anon_key, "env-key");

    // Flags win over the environment
    let config = Config::resolve(Some("http://localhost:54321".to_string()), None).unwrap();
    assert_eq!(config.url.as_str(), "http://localhost:54321/");

    std::env::remove_var(SUPABASE_ANON_KEY_ENV_VAR);
    let result = Config::resolve(None, None);
    assert!(matches!(
        result,
        Err(AutopilotError::MissingConfig { .. })
    ));

    std::env::remove_var(SUPABASE_URL_ENV_VAR);
}

#[test]
fn test_context_without_session_requires_login() {
    let dir = TempDir::new().unwrap();
    let config = Config::new("http://localhost:54321", "anon-key").unwrap();
    let ctx = CommandContext::with_session_path(config, dir.path().join("session.json"));

    assert!(ctx.session.is_none());
    assert!(ctx.anon_client().is_ok());
    assert!(matches!(
        ctx.user_client(),
        Err(AutopilotError::NotAuthenticated)
    ));
}

#[test]
fn test_context_picks_up_saved_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("session.json");
    save_session(&path, &session()).unwrap();

    let config = Config::new("http://localhost:54321", "anon-key").unwrap();
    let ctx = CommandContext::with_session_path(config, path);

    let client = ctx.user_client().unwrap();
    assert_eq!(client.access_token(), Some("user-token"));
}

#[tokio::test]
async fn test_load_dashboard_with_counts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .and(query_param("order", "created_at.desc"))
        .and(header("authorization", "Bearer user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": PROJECT_ID,
            "user_id": Uuid::nil(),
            "name": "Acme",
            "website_url": "https://acme.com",
            "status": "active",
            "created_at": "2026-10-18T09:30:00Z"
        }])))
        .mount(&mock_server)
        .await;

    for (table, total) in [("keywords", "1"), ("competitors", "2"), ("serp_changes", "17")] {
        Mock::given(method("HEAD"))
            .and(path(format!("/rest/v1/{}", table)))
            .and(query_param("project_id", format!("eq.{}", PROJECT_ID)))
            .respond_with(
                ResponseTemplate::new(200).insert_header("content-range", format!("*/{}", total)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = Config::new(&mock_server.uri(), "anon-key")
        .and_then(seo_autopilot::supabase::SupabaseClient::new)
        .unwrap()
        .with_session(&session());

    let dashboard = load_dashboard(&client).await.unwrap();

    assert_eq!(dashboard.len(), 1);
    assert_eq!(dashboard[0].project.name, "Acme");
    assert_eq!(dashboard[0].stats.keywords, 1);
    assert_eq!(dashboard[0].stats.competitors, 2);
    assert_eq!(dashboard[0].stats.changes, 17);
}

#[tokio::test]
async fn test_dashboard_keeps_project_when_a_count_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": PROJECT_ID,
            "user_id": Uuid::nil(),
            "name": "Acme",
            "website_url": "https://acme.com",
            "status": "active",
            "created_at": "2026-10-18T09:30:00Z"
        }])))
        .mount(&mock_server)
        .await;

    for table in ["keywords", "competitors"] {
        Mock::given(method("HEAD"))
            .and(path(format!("/rest/v1/{}", table)))
            .respond_with(ResponseTemplate::new(200).insert_header("content-range", "0-0/1"))
            .mount(&mock_server)
            .await;
    }

    Mock::given(method("HEAD"))
        .and(path("/rest/v1/serp_changes"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Config::new(&mock_server.uri(), "anon-key")
        .and_then(seo_autopilot::supabase::SupabaseClient::new)
        .unwrap()
        .with_session(&session());

    let dashboard = load_dashboard(&client).await.unwrap();

    assert_eq!(dashboard.len(), 1);
    assert_eq!(dashboard[0].project.name, "Acme");
    assert_eq!(dashboard[0].stats, ProjectStats::default());
}

//! Claims loader tests against a stubbed backend

use crate::common::{TestBackend, seeded_store};
use portal_access::{ClaimsLoader, MemoryStore, SessionStore, session};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_happy_path_loads_permissions_and_role_names() {
    let backend = TestBackend::start().await;
    backend
        .stub_roles(json!([
            {"id": 1, "name": "HR Manager"},
            {"id": 2, "name": "Employee"},
        ]))
        .await;
    backend
        .stub_permissions(json!(["hr:access", {"code": "attendance:manage"}]))
        .await;

    let store = seeded_store("token-1", &[1]).await;
    let loader = ClaimsLoader::new(&backend.config, store).unwrap();
    let snapshot = loader.refresh().await;

    assert_eq!(snapshot.current_user, "Asha Patel");
    assert!(snapshot.permissions.contains("hr:access"));
    assert!(snapshot.permissions.contains("attendance:manage"));
    assert_eq!(snapshot.role_names, vec!["HR Manager".to_string()]);
    assert!(snapshot.classification().is_hr);
}

#[tokio::test]
async fn test_permissions_failure_fails_closed() {
    // Backend down for both concerns: the loader resolves to the empty,
    // unauthenticated-equivalent snapshot instead of erroring.
    let backend = TestBackend::start().await;
    backend.stub_failure("/api/roles/", 500).await;
    backend.stub_failure("/api/permissions/my", 500).await;

    let store = Arc::new(MemoryStore::new());
    store.set(session::keys::ACCESS_TOKEN, "token-1").await;

    let loader = ClaimsLoader::new(&backend.config, store).unwrap();
    let snapshot = loader.refresh().await;

    assert!(snapshot.permissions.is_empty());
    assert_eq!(snapshot.current_user, "Unknown User");
    assert!(snapshot.role_names.is_empty());
    assert!(snapshot.roles.is_empty());
    assert!(snapshot.classification().is_customer);
}

#[tokio::test]
async fn test_roles_failure_degrades_names_only() {
    let backend = TestBackend::start().await;
    backend.stub_failure("/api/roles/", 503).await;
    backend.stub_permissions(json!(["tasks:access"])).await;

    let store = seeded_store("token-1", &[7]).await;
    let loader = ClaimsLoader::new(&backend.config, store).unwrap();
    let snapshot = loader.refresh().await;

    // Permission codes still load; the unresolvable role id shows raw.
    assert!(snapshot.permissions.contains("tasks:access"));
    assert_eq!(snapshot.role_names, vec!["7".to_string()]);
}

#[tokio::test]
async fn test_no_token_resolves_without_fetching_permissions() {
    let backend = TestBackend::start().await;
    backend.stub_roles(json!([])).await;
    // Deliberately no permissions stub: a request would 404 and any
    // non-empty result would be a bug anyway.

    let store = Arc::new(MemoryStore::new());
    let loader = ClaimsLoader::new(&backend.config, store).unwrap();
    let snapshot = loader.refresh().await;

    assert!(snapshot.permissions.is_empty());
    assert_eq!(snapshot.current_user, "Unknown User");
}

#[tokio::test]
async fn test_initial_snapshot_is_marked_unloaded() {
    // Views show a neutral loading state until the first refresh lands,
    // even though access already resolves to none.
    let backend = TestBackend::start().await;
    backend.stub_roles(json!([])).await;

    let store = Arc::new(MemoryStore::new());
    let loader = ClaimsLoader::new(&backend.config, store).unwrap();
    assert!(!loader.current().loaded);

    let snapshot = loader.refresh().await;
    assert!(snapshot.loaded);
    assert!(loader.current().loaded);
}

#[tokio::test]
async fn test_refresh_is_idempotent() {
    let backend = TestBackend::start().await;
    backend.stub_roles(json!([{"id": 1, "name": "Employee"}])).await;
    backend
        .stub_permissions(json!(["tasks:access", "attendance:read"]))
        .await;

    let store = seeded_store("token-1", &[1]).await;
    let loader = ClaimsLoader::new(&backend.config, store).unwrap();

    let first = loader.refresh().await;
    let second = loader.refresh().await;

    assert_eq!(first.permissions, second.permissions);
    assert_eq!(first.role_names, second.role_names);
    assert_eq!(first.current_user, second.current_user);
}

#[tokio::test]
async fn test_current_user_endpoint_fallback() {
    // No cached user record: the loader asks the backend instead.
    let backend = TestBackend::start().await;
    backend.stub_roles(json!([])).await;
    backend.stub_permissions(json!([])).await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/api/users/me"))
        .respond_with(
            wiremock::ResponseTemplate::new(200)
                .set_body_json(json!({"id": 5, "full_name": "Ravi Shah", "username": "ravi"})),
        )
        .mount(&backend.server)
        .await;

    let store = Arc::new(MemoryStore::new());
    store.set(session::keys::ACCESS_TOKEN, "token-5").await;

    let loader = ClaimsLoader::new(&backend.config, store).unwrap();
    let snapshot = loader.refresh().await;

    assert_eq!(snapshot.current_user, "Ravi Shah");
}

#[tokio::test]
async fn test_legacy_user_key_is_checked() {
    let backend = TestBackend::start().await;
    backend.stub_roles(json!([])).await;
    backend.stub_permissions(json!([])).await;

    let store = Arc::new(MemoryStore::new());
    store.set(session::keys::ACCESS_TOKEN, "token-1").await;
    store
        .set(
            session::keys::CURRENT_USER,
            &json!({"username": "legacy-user"}).to_string(),
        )
        .await;

    let loader = ClaimsLoader::new(&backend.config, store).unwrap();
    let snapshot = loader.refresh().await;

    assert_eq!(snapshot.current_user, "legacy-user");
}

#[tokio::test]
async fn test_watch_reloads_on_token_write() {
    let backend = TestBackend::start().await;
    backend.stub_roles(json!([])).await;
    backend.stub_permissions(json!(["tasks:access"])).await;

    let store = Arc::new(MemoryStore::new());
    let loader = Arc::new(ClaimsLoader::new(&backend.config, store.clone()).unwrap());

    // Unauthenticated before any token exists.
    let initial = loader.refresh().await;
    assert!(initial.permissions.is_empty());

    let mut snapshots = loader.subscribe();
    let handle = loader.clone().watch();

    // Login from another view: the watcher must pick the token up.
    store.set(session::keys::ACCESS_TOKEN, "token-1").await;

    let updated = tokio::time::timeout(Duration::from_secs(5), snapshots.recv())
        .await
        .expect("watcher did not publish a snapshot in time")
        .unwrap();
    assert!(updated.permissions.contains("tasks:access"));

    handle.abort();
}

#[tokio::test]
async fn test_watch_reloads_on_permissions_updated_marker() {
    let backend = TestBackend::start().await;
    backend.stub_roles(json!([])).await;
    backend.stub_permissions(json!(["hr:access"])).await;

    let store = seeded_store("token-1", &[]).await;
    let loader = Arc::new(ClaimsLoader::new(&backend.config, store.clone()).unwrap());

    let mut snapshots = loader.subscribe();
    let handle = loader.clone().watch();

    // An administrator edited roles; only the write event matters.
    store.set(session::keys::PERMISSIONS_UPDATED, "1").await;

    let updated = tokio::time::timeout(Duration::from_secs(5), snapshots.recv())
        .await
        .expect("watcher did not publish a snapshot in time")
        .unwrap();
    assert!(updated.permissions.contains("hr:access"));

    handle.abort();
}

#[tokio::test]
async fn test_unwatched_key_does_not_reload() {
    let backend = TestBackend::start().await;
    backend.stub_roles(json!([])).await;
    backend.stub_permissions(json!([])).await;

    let store = Arc::new(MemoryStore::new());
    let loader = Arc::new(ClaimsLoader::new(&backend.config, store.clone()).unwrap());

    let mut snapshots = loader.subscribe();
    let handle = loader.clone().watch();

    store.set("ui_theme", "dark").await;

    let result = tokio::time::timeout(Duration::from_millis(300), snapshots.recv()).await;
    assert!(result.is_err(), "unwatched key must not trigger a reload");

    handle.abort();
}

#[tokio::test]
async fn test_legacy_permissions_path_fallback() {
    // Primary path is gone; the legacy provider answers instead.
    let backend = TestBackend::start().await;
    backend.stub_roles(json!([])).await;
    backend.stub_failure("/api/permissions/my", 404).await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/api/permissions/mine"))
        .respond_with(
            wiremock::ResponseTemplate::new(200).set_body_json(json!(["orders:access"])),
        )
        .mount(&backend.server)
        .await;

    let mut config = backend.config.clone();
    config
        .api
        .permissions_paths
        .push("/api/permissions/mine".to_string());

    let store = Arc::new(MemoryStore::new());
    store.set(session::keys::ACCESS_TOKEN, "token-1").await;

    let loader = ClaimsLoader::new(&config, store).unwrap();
    let snapshot = loader.refresh().await;

    assert!(snapshot.permissions.contains("orders:access"));
    assert!(snapshot.classification().is_vendor);
}

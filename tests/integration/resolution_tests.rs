//! End-to-end resolution over loaded claims

use crate::common::{TestBackend, seeded_store};
use portal_access::ClaimsLoader;
use portal_access::view::{
    Action, Page, PageContext, ViewVariant, default_menu, resolve, visible_entries,
};
use serde_json::json;

#[tokio::test]
async fn test_hr_user_gets_management_leave_view() {
    let backend = TestBackend::start().await;
    backend.stub_roles(json!([{"id": 1, "name": "HR Manager"}])).await;
    backend
        .stub_permissions(json!(["hr:access", "hr:manage", "attendance:manage"]))
        .await;

    let store = seeded_store("token-1", &[1]).await;
    let loader = ClaimsLoader::new(&backend.config, store).unwrap();
    let snapshot = loader.refresh().await;
    let roles = snapshot.classification();

    let view = resolve(Page::Leave, &roles, &PageContext::default());
    assert_eq!(view.variant, ViewVariant::Management);
    assert!(view.allows(Action::Approve));
}

#[tokio::test]
async fn test_employee_gets_self_service_task_view() {
    let backend = TestBackend::start().await;
    backend.stub_roles(json!([{"id": 2, "name": "employee"}])).await;
    backend.stub_permissions(json!(["tasks:access"])).await;

    let store = seeded_store("token-1", &[2]).await;
    let loader = ClaimsLoader::new(&backend.config, store).unwrap();
    let snapshot = loader.refresh().await;
    let roles = snapshot.classification();

    assert!(roles.is_employee);
    let view = resolve(Page::Tasks, &roles, &PageContext::default());
    assert_eq!(view.variant, ViewVariant::SelfService);
}

#[tokio::test]
async fn test_customer_ticket_rating_follows_ticket_status() {
    // A failed permission fetch classifies the actor as customer.
    let backend = TestBackend::start().await;
    backend.stub_failure("/api/roles/", 500).await;
    backend.stub_failure("/api/permissions/my", 500).await;

    let store = seeded_store("token-1", &[]).await;
    let loader = ClaimsLoader::new(&backend.config, store).unwrap();
    let roles = loader.refresh().await.classification();
    assert!(roles.is_customer);

    let resolved = resolve(Page::Tickets, &roles, &PageContext::for_ticket("resolved"));
    assert!(resolved.allows(Action::Rate));
    assert!(resolved.allows(Action::Escalate));

    let open = resolve(Page::Tickets, &roles, &PageContext::for_ticket("open"));
    assert!(!open.allows(Action::Rate));
}

#[tokio::test]
async fn test_menu_reflects_loaded_permissions() {
    let backend = TestBackend::start().await;
    backend.stub_roles(json!([])).await;
    backend
        .stub_permissions(json!(["tasks:manage", "attendance:read"]))
        .await;

    let store = seeded_store("token-1", &[]).await;
    let loader = ClaimsLoader::new(&backend.config, store).unwrap();
    let snapshot = loader.refresh().await;

    let visible = visible_entries(default_menu(), &snapshot.permissions);
    assert!(visible.iter().any(|e| e.label == "Tasks & Workflow"));
    assert!(!visible.iter().any(|e| e.label == "Customers"));
}

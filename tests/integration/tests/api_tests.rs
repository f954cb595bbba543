//! API integration tests
//!
//! Each test spawns a fresh server over the in-memory store, so tests are
//! hermetic and isolated from each other.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;

async fn raise_ticket(server: &TestServer, title: &str, priority: &str) -> TicketBody {
    let response = server
        .post("/api/v1/tickets", &Actor::operations(), &raise_request(title, priority))
        .await
        .unwrap();
    let receipt: ReceiptBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    receipt.ticket
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_anonymous("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_anonymous("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Ticket creation
// ============================================================================

#[tokio::test]
async fn test_raise_ticket_starts_submitted() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(
            "/api/v1/tickets",
            &Actor::operations(),
            &raise_request("VPN outage", "HIGH"),
        )
        .await
        .unwrap();
    let receipt: ReceiptBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(receipt.ticket.status, "SUBMITTED");
    assert_eq!(receipt.ticket.priority, "HIGH");
    assert_eq!(receipt.ticket.raised_by, "100");
    assert_eq!(receipt.ticket.version, 1);
    assert!(receipt.audit_recorded);
    assert_eq!(receipt.audit_entry.unwrap().action, "TICKET_CREATED");
}

#[tokio::test]
async fn test_raise_requires_operations_role() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(
            "/api/v1/tickets",
            &Actor::auditor(),
            &raise_request("VPN outage", "HIGH"),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "ROLE_NOT_PERMITTED");
}

#[tokio::test]
async fn test_raise_rejects_short_title() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(
            "/api/v1/tickets",
            &Actor::operations(),
            &raise_request("no", "LOW"),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_actor_headers_is_unauthorized() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_anonymous("/api/v1/tickets", &raise_request("VPN outage", "HIGH"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_ACTOR");
}

// ============================================================================
// Workflow happy path
// ============================================================================

#[tokio::test]
async fn test_full_workflow_accept_path() {
    let server = TestServer::start().await.unwrap();
    let ticket = raise_ticket(&server, "VPN outage", "HIGH").await;

    // Leadership forwards with a comment
    let response = server
        .post(
            &format!("/api/v1/tickets/{}/forward", ticket.id),
            &Actor::leadership(),
            &forward_request("escalate"),
        )
        .await
        .unwrap();
    let receipt: ReceiptBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(receipt.ticket.status, "FORWARDED_TO_MANAGEMENT");
    assert_eq!(receipt.ticket.leadership_comment.as_deref(), Some("escalate"));
    let entry = receipt.audit_entry.unwrap();
    assert_eq!(entry.previous_state.as_deref(), Some("SUBMITTED"));
    assert_eq!(entry.new_state, "FORWARDED_TO_MANAGEMENT");

    // Management records the action
    let response = server
        .post(
            &format!("/api/v1/tickets/{}/action", ticket.id),
            &Actor::management(),
            &action_request("replaced the edge router"),
        )
        .await
        .unwrap();
    let receipt: ReceiptBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(receipt.ticket.status, "ACTION_TAKEN");

    // Auditor accepts and the ticket closes
    let response = server
        .post(
            &format!("/api/v1/tickets/{}/decision", ticket.id),
            &Actor::auditor(),
            &decision_request("ACCEPTED"),
        )
        .await
        .unwrap();
    let receipt: ReceiptBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(receipt.ticket.status, "CLOSED");
    assert_eq!(receipt.ticket.auditor_decision.as_deref(), Some("ACCEPTED"));

    // The trail covers creation plus the three transitions, in order
    let response = server
        .get(&format!("/api/v1/tickets/{}/audit", ticket.id), &Actor::admin())
        .await
        .unwrap();
    let trail: Vec<AuditEntryBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let actions: Vec<&str> = trail.iter().map(|e| e.action.as_str()).collect();
    assert_eq!(
        actions,
        vec![
            "TICKET_CREATED",
            "LEADERSHIP_FORWARD",
            "MANAGEMENT_ACTION",
            "AUDITOR_ACCEPTED"
        ]
    );
    assert!(trail.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[tokio::test]
async fn test_reverify_loops_back_to_management() {
    let server = TestServer::start().await.unwrap();
    let ticket = raise_ticket(&server, "VPN outage", "HIGH").await;

    server
        .post(
            &format!("/api/v1/tickets/{}/forward", ticket.id),
            &Actor::leadership(),
            &forward_request("escalate"),
        )
        .await
        .unwrap();
    server
        .post(
            &format!("/api/v1/tickets/{}/action", ticket.id),
            &Actor::management(),
            &action_request("replaced the edge router"),
        )
        .await
        .unwrap();

    // Auditor sends it back
    let response = server
        .post(
            &format!("/api/v1/tickets/{}/decision", ticket.id),
            &Actor::auditor(),
            &decision_request("REVERIFY"),
        )
        .await
        .unwrap();
    let receipt: ReceiptBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(receipt.ticket.status, "REVERIFY");
    assert_eq!(receipt.ticket.auditor_decision.as_deref(), Some("REVERIFY"));

    // Management records a revised action from the loop
    let response = server
        .post(
            &format!("/api/v1/tickets/{}/action", ticket.id),
            &Actor::management(),
            &action_request("reconfigured the firewall policy"),
        )
        .await
        .unwrap();
    let receipt: ReceiptBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(receipt.ticket.status, "ACTION_TAKEN");

    // Auditor rejects; rejection also closes the ticket
    let response = server
        .post(
            &format!("/api/v1/tickets/{}/decision", ticket.id),
            &Actor::auditor(),
            &decision_request("REJECTED"),
        )
        .await
        .unwrap();
    let receipt: ReceiptBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(receipt.ticket.status, "CLOSED");
    assert_eq!(receipt.ticket.auditor_decision.as_deref(), Some("REJECTED"));
}

// ============================================================================
// Workflow rejections
// ============================================================================

#[tokio::test]
async fn test_wrong_role_rejected_without_state_change() {
    let server = TestServer::start().await.unwrap();
    let ticket = raise_ticket(&server, "VPN outage", "HIGH").await;

    // Operations attempts the Management transition
    let response = server
        .post(
            &format!("/api/v1/tickets/{}/action", ticket.id),
            &Actor::operations(),
            &action_request("not my call"),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "ROLE_NOT_PERMITTED");

    // Ticket unchanged, no extra audit entry
    let response = server
        .get(&format!("/api/v1/tickets/{}", ticket.id), &Actor::operations())
        .await
        .unwrap();
    let current: TicketBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(current.status, "SUBMITTED");
    assert_eq!(current.version, 1);

    let response = server
        .get(&format!("/api/v1/tickets/{}/audit", ticket.id), &Actor::admin())
        .await
        .unwrap();
    let trail: Vec<AuditEntryBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(trail.len(), 1);
}

#[tokio::test]
async fn test_stage_skip_is_a_conflict() {
    let server = TestServer::start().await.unwrap();
    let ticket = raise_ticket(&server, "VPN outage", "HIGH").await;

    // Deciding a SUBMITTED ticket skips two stages
    let response = server
        .post(
            &format!("/api/v1/tickets/{}/decision", ticket.id),
            &Actor::auditor(),
            &decision_request("ACCEPTED"),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "STALE_STATE");
}

#[tokio::test]
async fn test_closed_ticket_is_final() {
    let server = TestServer::start().await.unwrap();
    let ticket = raise_ticket(&server, "VPN outage", "HIGH").await;

    for (path, actor, body) in [
        ("forward", Actor::leadership(), forward_request("escalate")),
        ("action", Actor::management(), action_request("replaced the router")),
        ("decision", Actor::auditor(), decision_request("ACCEPTED")),
    ] {
        server
            .post(&format!("/api/v1/tickets/{}/{path}", ticket.id), &actor, &body)
            .await
            .unwrap();
    }

    // A second decision on the closed ticket must conflict
    let response = server
        .post(
            &format!("/api/v1/tickets/{}/decision", ticket.id),
            &Actor::auditor(),
            &decision_request("REJECTED"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_unknown_decision_is_validation_error() {
    let server = TestServer::start().await.unwrap();
    let ticket = raise_ticket(&server, "VPN outage", "HIGH").await;

    let response = server
        .post(
            &format!("/api/v1/tickets/{}/decision", ticket.id),
            &Actor::auditor(),
            &decision_request("MAYBE"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_unknown_ticket_is_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(
            "/api/v1/tickets/999/forward",
            &Actor::leadership(),
            &forward_request("escalate"),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_TICKET");
}

// ============================================================================
// Listing and filtering
// ============================================================================

#[tokio::test]
async fn test_list_filters_by_priority_and_search() {
    let server = TestServer::start().await.unwrap();
    raise_ticket(&server, "VPN outage", "HIGH").await;
    raise_ticket(&server, "Printer jam", "LOW").await;
    raise_ticket(&server, "VPN flapping", "HIGH").await;

    let response = server
        .get("/api/v1/tickets?priority=HIGH", &Actor::leadership())
        .await
        .unwrap();
    let tickets: Vec<TicketBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tickets.len(), 2);

    let response = server
        .get("/api/v1/tickets?q=printer", &Actor::leadership())
        .await
        .unwrap();
    let tickets: Vec<TicketBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].title, "Printer jam");

    let response = server
        .get("/api/v1/tickets?page=2&limit=2", &Actor::leadership())
        .await
        .unwrap();
    let tickets: Vec<TicketBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tickets.len(), 1);
}

#[tokio::test]
async fn test_requery_is_idempotent() {
    let server = TestServer::start().await.unwrap();
    let ticket = raise_ticket(&server, "VPN outage", "HIGH").await;

    let path = format!("/api/v1/tickets/{}", ticket.id);
    let first: TicketBody = assert_json(
        server.get(&path, &Actor::operations()).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let second: TicketBody = assert_json(
        server.get(&path, &Actor::operations()).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert_eq!(first.status, second.status);
    assert_eq!(first.version, second.version);
}

// ============================================================================
// Audit log listing
// ============================================================================

#[tokio::test]
async fn test_global_audit_listing_is_ordered() {
    let server = TestServer::start().await.unwrap();
    let a = raise_ticket(&server, "VPN outage", "HIGH").await;
    let b = raise_ticket(&server, "Printer jam", "LOW").await;

    server
        .post(
            &format!("/api/v1/tickets/{}/forward", a.id),
            &Actor::leadership(),
            &forward_request("escalate"),
        )
        .await
        .unwrap();

    let response = server.get("/api/v1/audit-logs", &Actor::admin()).await.unwrap();
    let entries: Vec<AuditEntryBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(entries.len(), 3);
    assert!(entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    assert!(entries.iter().any(|e| e.entity_id == b.id));
}

#[tokio::test]
async fn test_audit_for_unknown_ticket_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get("/api/v1/tickets/999/audit", &Actor::admin())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Dashboards
// ============================================================================

#[tokio::test]
async fn test_operations_dashboard() {
    let server = TestServer::start().await.unwrap();
    raise_ticket(&server, "VPN outage", "HIGH").await;
    raise_ticket(&server, "Printer jam", "LOW").await;

    let response = server
        .get("/api/v1/dashboards/operations", &Actor::operations())
        .await
        .unwrap();
    let dashboard: DashboardBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(dashboard.role, "OPERATIONS");
    let active = dashboard
        .widgets
        .iter()
        .find(|w| w.id == "op_kpi_active")
        .unwrap();
    assert_eq!(active.kind, "KPI");
    assert_eq!(active.value, serde_json::json!(2));

    let by_priority = dashboard
        .widgets
        .iter()
        .find(|w| w.id == "op_priority_chart")
        .unwrap();
    assert_eq!(by_priority.kind, "BAR_CHART");
    assert_eq!(
        by_priority.value,
        serde_json::json!([
            { "name": "HIGH", "value": 1 },
            { "name": "LOW", "value": 1 }
        ])
    );
}

#[tokio::test]
async fn test_admin_dashboard_renders_roster_widgets() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .get("/api/v1/dashboards/admin", &Actor::admin())
        .await
        .unwrap();
    let dashboard: DashboardBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(dashboard.role, "ADMIN");
    let total = dashboard
        .widgets
        .iter()
        .find(|w| w.id == "admin_total_users")
        .unwrap();
    // Demo roster seeds five accounts
    assert_eq!(total.value, serde_json::json!(5));
}

#[tokio::test]
async fn test_unknown_dashboard_role_is_bad_request() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get("/api/v1/dashboards/wizards", &Actor::admin())
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

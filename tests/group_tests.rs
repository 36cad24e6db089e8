use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use study_dashboard::{
    api::{create_router, AppState},
    Database, GroupService, StudyService, TaskService,
};

async fn create_test_server() -> TestServer {
    let db = Database::new("sqlite::memory:").await.unwrap();
    let app_state = AppState {
        task_service: TaskService::new(db.clone()),
        study_service: StudyService::new(db.clone()),
        group_service: GroupService::new(db),
        default_view: "tasks".to_string(),
    };

    let app = create_router(app_state);
    TestServer::new(app).unwrap()
}

async fn create_group(server: &TestServer, name: &str) -> String {
    let response = server
        .post("/api/groups")
        .json(&json!({
            "name": name,
            "description": "Evening study sessions",
            "owner_id": "user-1",
            "owner_display_name": "Alex"
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_api_create_group_enrolls_owner() {
    let server = create_test_server().await;

    let response = server
        .post("/api/groups")
        .json(&json!({
            "name": "Organic Chemistry",
            "owner_id": "user-1",
            "owner_display_name": "Alex"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["owner_id"], "user-1");
    assert_eq!(body["data"]["member_count"], 1);
    // List/create responses carry the bare aggregate, not the children.
    assert_eq!(body["data"]["members"], Value::Null);
}

#[tokio::test]
async fn test_api_duplicate_group_name_conflicts() {
    let server = create_test_server().await;

    create_group(&server, "Linear Algebra").await;

    let response = server
        .post("/api/groups")
        .json(&json!({
            "name": "Linear Algebra",
            "owner_id": "user-2",
            "owner_display_name": "Sam"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_api_add_member_bumps_count() {
    let server = create_test_server().await;
    let group_id = create_group(&server, "World History").await;

    let response = server
        .post(&format!("/api/groups/{}/members", group_id))
        .json(&json!({ "user_id": "user-2", "display_name": "Sam" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["role"], "member");

    let body: Value = server.get(&format!("/api/groups/{}", group_id)).await.json();
    assert_eq!(body["data"]["member_count"], 2);
}

#[tokio::test]
async fn test_api_get_group_hydrates_children() {
    let server = create_test_server().await;
    let group_id = create_group(&server, "Astronomy Club").await;

    server
        .post(&format!("/api/groups/{}/resources", group_id))
        .json(&json!({
            "title": "Stellar evolution notes",
            "url": "https://example.org/stars.pdf",
            "added_by": "user-1"
        }))
        .await
        .assert_status_ok();

    server
        .post(&format!("/api/groups/{}/messages", group_id))
        .json(&json!({ "sender_id": "user-1", "content": "Meeting moved to 7pm" }))
        .await
        .assert_status_ok();

    server
        .post(&format!("/api/groups/{}/summaries", group_id))
        .json(&json!({ "content": "Covered main-sequence lifetimes." }))
        .await
        .assert_status_ok();

    let body: Value = server.get(&format!("/api/groups/{}", group_id)).await.json();
    let group = &body["data"];
    assert_eq!(group["members"].as_array().unwrap().len(), 1);
    assert_eq!(group["members"][0]["role"], "owner");
    assert_eq!(group["resources"].as_array().unwrap().len(), 1);
    assert_eq!(group["messages"][0]["content"], "Meeting moved to 7pm");
    assert_eq!(group["summaries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_api_messages_are_ordered_and_scoped() {
    let server = create_test_server().await;
    let group_id = create_group(&server, "Exam Prep").await;
    let other_group = create_group(&server, "Book Club").await;

    for content in ["first", "second"] {
        server
            .post(&format!("/api/groups/{}/messages", group_id))
            .json(&json!({ "sender_id": "user-1", "content": content }))
            .await
            .assert_status_ok();
    }
    server
        .post(&format!("/api/groups/{}/messages", other_group))
        .json(&json!({ "sender_id": "user-1", "content": "unrelated" }))
        .await
        .assert_status_ok();

    let body: Value = server
        .get(&format!("/api/groups/{}/messages", group_id))
        .await
        .json();
    let messages = body["data"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["content"], "first");
    assert_eq!(messages[1]["content"], "second");
}

#[tokio::test]
async fn test_api_empty_message_rejected() {
    let server = create_test_server().await;
    let group_id = create_group(&server, "Quiet Group").await;

    let response = server
        .post(&format!("/api/groups/{}/messages", group_id))
        .json(&json!({ "sender_id": "user-1", "content": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_group_children_require_existing_group() {
    let server = create_test_server().await;
    let missing = uuid::Uuid::new_v4();

    server
        .post(&format!("/api/groups/{}/members", missing))
        .json(&json!({ "user_id": "user-2", "display_name": "Sam" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .get(&format!("/api/groups/{}/messages", missing))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_delete_group() {
    let server = create_test_server().await;
    let group_id = create_group(&server, "Short Lived").await;

    server
        .delete(&format!("/api/groups/{}", group_id))
        .await
        .assert_status_ok();
    server
        .get(&format!("/api/groups/{}", group_id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

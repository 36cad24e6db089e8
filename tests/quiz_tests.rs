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

fn sample_quiz() -> Value {
    json!({
        "title": "Cell biology basics",
        "description": "Covers organelles and membranes",
        "topic": "biology",
        "difficulty": "intermediate",
        "user_id": "user-1",
        "duration_minutes": 15,
        "questions": [
            {
                "question": "Which organelle produces ATP?",
                "options": ["Nucleus", "Mitochondria", "Ribosome"],
                "correct_answer": "Mitochondria",
                "explanation": "Mitochondria run cellular respiration.",
                "question_type": "multiple_choice"
            },
            {
                "question": "The plasma membrane is a lipid bilayer.",
                "options": ["True", "False"],
                "correct_answer": "True",
                "explanation": "Phospholipids form two leaflets.",
                "question_type": "true_false"
            }
        ]
    })
}

#[tokio::test]
async fn test_api_create_quiz() {
    let server = create_test_server().await;

    let response = server.post("/api/quizzes").json(&sample_quiz()).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["title"], "Cell biology basics");
    assert_eq!(body["data"]["questions"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["attempts"], json!([]));
    // The persisted shape carries the correct answer as option text.
    assert_eq!(body["data"]["questions"][0]["correct_answer"], "Mitochondria");
}

#[tokio::test]
async fn test_api_create_quiz_rejects_empty_questions() {
    let server = create_test_server().await;

    let mut quiz = sample_quiz();
    quiz["questions"] = json!([]);

    let response = server.post("/api/quizzes").json(&quiz).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_create_quiz_rejects_answer_outside_options() {
    let server = create_test_server().await;

    let mut quiz = sample_quiz();
    quiz["questions"][0]["correct_answer"] = json!("Chloroplast");

    let response = server.post("/api/quizzes").json(&quiz).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_quiz_list_uses_compact_projection() {
    let server = create_test_server().await;

    server
        .post("/api/quizzes")
        .json(&sample_quiz())
        .await
        .assert_status_ok();

    let response = server.get("/api/quizzes").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let quizzes = body["data"].as_array().unwrap();
    assert_eq!(quizzes.len(), 1);

    // The list projection drops ownership and attempts, and the correct
    // answer becomes an index into the (order-preserved) options.
    let quiz = &quizzes[0];
    assert!(quiz.get("user_id").is_none());
    assert!(quiz.get("attempts").is_none());
    let question = &quiz["questions"][0];
    assert_eq!(question["options"], json!(["Nucleus", "Mitochondria", "Ribosome"]));
    assert_eq!(question["correct_answer"], 1);
}

#[tokio::test]
async fn test_api_record_attempt_appends_to_log() {
    let server = create_test_server().await;

    let created: Value = server.post("/api/quizzes").json(&sample_quiz()).await.json();
    let quiz_id = created["data"]["id"].as_str().unwrap().to_string();
    let question_id = created["data"]["questions"][0]["id"].as_str().unwrap().to_string();

    let attempt = json!({
        "user_id": "user-2",
        "score": 50.0,
        "started_at": "2026-08-27T10:00:00Z",
        "completed_at": "2026-08-27T10:09:30Z",
        "answers": [
            { "question_id": question_id, "answer": "Mitochondria", "is_correct": true }
        ]
    });

    let response = server
        .post(&format!("/api/quizzes/{}/attempts", quiz_id))
        .json(&attempt)
        .await;
    response.assert_status_ok();

    // A second attempt by the same user is a new log entry, not an overwrite.
    server
        .post(&format!("/api/quizzes/{}/attempts", quiz_id))
        .json(&attempt)
        .await
        .assert_status_ok();

    let response = server.get(&format!("/api/quizzes/{}", quiz_id)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    let attempts = body["data"]["attempts"].as_array().unwrap();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0]["score"], 50.0);
    assert_eq!(attempts[0]["answers"][0]["is_correct"], true);
}

#[tokio::test]
async fn test_api_record_attempt_unknown_quiz() {
    let server = create_test_server().await;

    let response = server
        .post(&format!("/api/quizzes/{}/attempts", uuid::Uuid::new_v4()))
        .json(&json!({
            "user_id": "user-2",
            "score": 0.0,
            "started_at": "2026-08-27T10:00:00Z",
            "answers": []
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_quiz_analytics_aggregates_stored_values() {
    let server = create_test_server().await;

    // Empty database: zero counters, no average.
    let body: Value = server.get("/api/analytics/quizzes").await.json();
    assert_eq!(body["data"]["total_quizzes"], 0);
    assert_eq!(body["data"]["total_attempts"], 0);
    assert_eq!(body["data"]["average_score"], Value::Null);
    assert_eq!(body["data"]["topics_covered"], json!([]));

    let created: Value = server.post("/api/quizzes").json(&sample_quiz()).await.json();
    let quiz_id = created["data"]["id"].as_str().unwrap().to_string();

    let mut second = sample_quiz();
    second["title"] = json!("Map reading");
    second["topic"] = json!("geography");
    server.post("/api/quizzes").json(&second).await.assert_status_ok();

    for score in [60.0, 80.0] {
        server
            .post(&format!("/api/quizzes/{}/attempts", quiz_id))
            .json(&json!({
                "user_id": "user-2",
                "score": score,
                "started_at": "2026-08-27T10:00:00Z",
                "answers": []
            }))
            .await
            .assert_status_ok();
    }

    let body: Value = server.get("/api/analytics/quizzes").await.json();
    assert_eq!(body["data"]["total_quizzes"], 2);
    assert_eq!(body["data"]["total_attempts"], 2);
    assert_eq!(body["data"]["average_score"], 70.0);
    assert_eq!(body["data"]["topics_covered"], json!(["biology", "geography"]));
}

#[tokio::test]
async fn test_api_delete_quiz() {
    let server = create_test_server().await;

    let created: Value = server.post("/api/quizzes").json(&sample_quiz()).await.json();
    let quiz_id = created["data"]["id"].as_str().unwrap().to_string();

    server
        .delete(&format!("/api/quizzes/{}", quiz_id))
        .await
        .assert_status_ok();
    server
        .get(&format!("/api/quizzes/{}", quiz_id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
    errors::{classify_database_error, ApiError, ErrorContext},
    group_service::GroupService,
    models::*,
    study_service::StudyService,
    task_service::TaskService,
};

// Import logging macros
use crate::{log_api_error, log_api_start, log_api_success, log_api_warn};

#[derive(Clone)]
pub struct AppState {
    pub task_service: TaskService,
    pub study_service: StudyService,
    pub group_service: GroupService,
    /// Sub-view the dashboard root redirects to.
    pub default_view: String,
}

#[derive(Deserialize)]
pub struct TaskListParams {
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<()>>)>;

// Task endpoints

pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<Task> {
    info!(title = %request.title, user_id = %request.user_id, "Creating new task");

    match state.task_service.create_task(request).await {
        Ok(task) => {
            log_api_success!("create_task", task_id = task.id, "task created");
            Ok(Json(ApiResponse::success(task)))
        }
        Err(e) => {
            let context = ErrorContext::new("create_task", "task");
            Err(classify_database_error(&e).to_response_with_context(context))
        }
    }
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> ApiResult<Vec<Task>> {
    log_api_start!("list_tasks");

    let status = match params.status.as_deref() {
        None => None,
        Some(raw) => match TaskStatus::parse(raw) {
            Some(status) => Some(status),
            None => {
                let error = ApiError::BadRequest(format!("Unknown task status '{}'", raw));
                let context = ErrorContext::new("list_tasks", "task");
                return Err(error.to_response_with_context(context));
            }
        },
    };

    match state.task_service.list_tasks(status).await {
        Ok(tasks) => {
            log_api_success!("list_tasks", count = tasks.len(), "tasks listed");
            Ok(Json(ApiResponse::success(tasks)))
        }
        Err(e) => {
            log_api_error!("list_tasks", error = e, "database error listing tasks");
            let context = ErrorContext::new("list_tasks", "task");
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn get_task(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Task> {
    log_api_start!("get_task", task_id = id);

    match state.task_service.get_task(id).await {
        Ok(Some(task)) => Ok(Json(ApiResponse::success(task))),
        Ok(None) => {
            log_api_warn!("get_task", task_id = id, "task not found");
            let error = ApiError::NotFound(format!("Task with ID '{}' not found", id));
            let context = ErrorContext::new("get_task", "task").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            log_api_error!("get_task", task_id = id, error = e, "database error retrieving task");
            let context = ErrorContext::new("get_task", "task").with_id(&id.to_string());
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Task> {
    log_api_start!("update_task", task_id = id);

    match state.task_service.update_task(id, request).await {
        Ok(Some(task)) => {
            log_api_success!("update_task", task_id = id, "task updated");
            Ok(Json(ApiResponse::success(task)))
        }
        Ok(None) => {
            let error = ApiError::NotFound(format!("Task with ID '{}' not found", id));
            let context = ErrorContext::new("update_task", "task").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context = ErrorContext::new("update_task", "task").with_id(&id.to_string());
            Err(classify_database_error(&e).to_response_with_context(context))
        }
    }
}

pub async fn delete_task(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<()> {
    log_api_start!("delete_task", task_id = id);

    match state.task_service.delete_task(id).await {
        Ok(true) => {
            log_api_success!("delete_task", task_id = id, "task deleted");
            Ok(Json(ApiResponse::success(())))
        }
        Ok(false) => {
            let error = ApiError::NotFound(format!("Task with ID '{}' not found", id));
            let context = ErrorContext::new("delete_task", "task").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context = ErrorContext::new("delete_task", "task").with_id(&id.to_string());
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

// Flashcard endpoints

pub async fn create_flashcard(
    State(state): State<AppState>,
    Json(request): Json<CreateFlashcardRequest>,
) -> ApiResult<Flashcard> {
    info!(topic = %request.topic, "Creating new flashcard");

    match state.study_service.create_flashcard(request).await {
        Ok(card) => {
            log_api_success!("create_flashcard", flashcard_id = card.id, "flashcard created");
            Ok(Json(ApiResponse::success(card)))
        }
        Err(e) => {
            let context = ErrorContext::new("create_flashcard", "flashcard");
            Err(classify_database_error(&e).to_response_with_context(context))
        }
    }
}

pub async fn list_flashcards(State(state): State<AppState>) -> ApiResult<Vec<Flashcard>> {
    log_api_start!("list_flashcards");

    match state.study_service.list_flashcards().await {
        Ok(cards) => {
            log_api_success!("list_flashcards", count = cards.len(), "flashcards listed");
            Ok(Json(ApiResponse::success(cards)))
        }
        Err(e) => {
            let context = ErrorContext::new("list_flashcards", "flashcard");
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn get_flashcard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Flashcard> {
    log_api_start!("get_flashcard", flashcard_id = id);

    match state.study_service.get_flashcard(id).await {
        Ok(Some(card)) => Ok(Json(ApiResponse::success(card))),
        Ok(None) => {
            let error = ApiError::NotFound(format!("Flashcard with ID '{}' not found", id));
            let context = ErrorContext::new("get_flashcard", "flashcard").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context = ErrorContext::new("get_flashcard", "flashcard").with_id(&id.to_string());
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn update_flashcard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFlashcardRequest>,
) -> ApiResult<Flashcard> {
    log_api_start!("update_flashcard", flashcard_id = id);

    match state.study_service.update_flashcard(id, request).await {
        Ok(Some(card)) => {
            log_api_success!("update_flashcard", flashcard_id = id, "flashcard updated");
            Ok(Json(ApiResponse::success(card)))
        }
        Ok(None) => {
            let error = ApiError::NotFound(format!("Flashcard with ID '{}' not found", id));
            let context =
                ErrorContext::new("update_flashcard", "flashcard").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context =
                ErrorContext::new("update_flashcard", "flashcard").with_id(&id.to_string());
            Err(classify_database_error(&e).to_response_with_context(context))
        }
    }
}

pub async fn delete_flashcard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    log_api_start!("delete_flashcard", flashcard_id = id);

    match state.study_service.delete_flashcard(id).await {
        Ok(true) => Ok(Json(ApiResponse::success(()))),
        Ok(false) => {
            let error = ApiError::NotFound(format!("Flashcard with ID '{}' not found", id));
            let context =
                ErrorContext::new("delete_flashcard", "flashcard").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context =
                ErrorContext::new("delete_flashcard", "flashcard").with_id(&id.to_string());
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn mark_flashcard_reviewed(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FlashcardReviewedRequest>,
) -> ApiResult<Flashcard> {
    log_api_start!("mark_flashcard_reviewed", flashcard_id = id);

    match state.study_service.mark_flashcard_reviewed(id, request).await {
        Ok(Some(card)) => {
            log_api_success!(
                "mark_flashcard_reviewed",
                flashcard_id = id,
                "review recorded"
            );
            Ok(Json(ApiResponse::success(card)))
        }
        Ok(None) => {
            let error = ApiError::NotFound(format!("Flashcard with ID '{}' not found", id));
            let context =
                ErrorContext::new("mark_flashcard_reviewed", "flashcard").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context =
                ErrorContext::new("mark_flashcard_reviewed", "flashcard").with_id(&id.to_string());
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

// Quiz endpoints

pub async fn create_quiz(
    State(state): State<AppState>,
    Json(request): Json<CreateQuizRequest>,
) -> ApiResult<ScoredQuiz> {
    info!(title = %request.title, topic = %request.topic, "Creating new quiz");

    match state.study_service.create_quiz(request).await {
        Ok(quiz) => {
            log_api_success!("create_quiz", quiz_id = quiz.id, "quiz created");
            Ok(Json(ApiResponse::success(quiz)))
        }
        Err(e) => {
            let context = ErrorContext::new("create_quiz", "quiz");
            Err(classify_database_error(&e).to_response_with_context(context))
        }
    }
}

pub async fn list_quizzes(State(state): State<AppState>) -> ApiResult<Vec<SimpleQuiz>> {
    log_api_start!("list_quizzes");

    match state.study_service.list_quizzes().await {
        Ok(quizzes) => {
            log_api_success!("list_quizzes", count = quizzes.len(), "quizzes listed");
            Ok(Json(ApiResponse::success(quizzes)))
        }
        Err(e) => {
            let context = ErrorContext::new("list_quizzes", "quiz");
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn get_quiz(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<ScoredQuiz> {
    log_api_start!("get_quiz", quiz_id = id);

    match state.study_service.get_quiz(id).await {
        Ok(Some(quiz)) => Ok(Json(ApiResponse::success(quiz))),
        Ok(None) => {
            log_api_warn!("get_quiz", quiz_id = id, "quiz not found");
            let error = ApiError::NotFound(format!("Quiz with ID '{}' not found", id));
            let context = ErrorContext::new("get_quiz", "quiz").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context = ErrorContext::new("get_quiz", "quiz").with_id(&id.to_string());
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn delete_quiz(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<()> {
    log_api_start!("delete_quiz", quiz_id = id);

    match state.study_service.delete_quiz(id).await {
        Ok(true) => Ok(Json(ApiResponse::success(()))),
        Ok(false) => {
            let error = ApiError::NotFound(format!("Quiz with ID '{}' not found", id));
            let context = ErrorContext::new("delete_quiz", "quiz").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context = ErrorContext::new("delete_quiz", "quiz").with_id(&id.to_string());
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn record_attempt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RecordAttemptRequest>,
) -> ApiResult<QuizAttempt> {
    log_api_start!("record_attempt", quiz_id = id);

    match state.study_service.record_attempt(id, request).await {
        Ok(Some(attempt)) => {
            log_api_success!("record_attempt", quiz_id = id, "attempt recorded");
            Ok(Json(ApiResponse::success(attempt)))
        }
        Ok(None) => {
            let error = ApiError::NotFound(format!("Quiz with ID '{}' not found", id));
            let context = ErrorContext::new("record_attempt", "quiz").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context = ErrorContext::new("record_attempt", "quiz").with_id(&id.to_string());
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn quiz_analytics(State(state): State<AppState>) -> ApiResult<QuizAnalytics> {
    log_api_start!("quiz_analytics");

    match state.study_service.quiz_analytics().await {
        Ok(analytics) => Ok(Json(ApiResponse::success(analytics))),
        Err(e) => {
            let context = ErrorContext::new("quiz_analytics", "quiz");
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

// Study group endpoints

pub async fn create_group(
    State(state): State<AppState>,
    Json(request): Json<CreateGroupRequest>,
) -> ApiResult<StudyGroup> {
    info!(name = %request.name, owner_id = %request.owner_id, "Creating study group");

    match state.group_service.create_group(request).await {
        Ok(group) => {
            log_api_success!("create_group", group_id = group.id, "group created");
            Ok(Json(ApiResponse::success(group)))
        }
        Err(e) => {
            let context = ErrorContext::new("create_group", "group");
            Err(classify_database_error(&e).to_response_with_context(context))
        }
    }
}

pub async fn list_groups(State(state): State<AppState>) -> ApiResult<Vec<StudyGroup>> {
    log_api_start!("list_groups");

    match state.group_service.list_groups().await {
        Ok(groups) => {
            log_api_success!("list_groups", count = groups.len(), "groups listed");
            Ok(Json(ApiResponse::success(groups)))
        }
        Err(e) => {
            let context = ErrorContext::new("list_groups", "group");
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn get_group(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<StudyGroup> {
    log_api_start!("get_group", group_id = id);

    match state.group_service.get_group(id).await {
        Ok(Some(group)) => Ok(Json(ApiResponse::success(group))),
        Ok(None) => {
            log_api_warn!("get_group", group_id = id, "group not found");
            let error = ApiError::NotFound(format!("Study group with ID '{}' not found", id));
            let context = ErrorContext::new("get_group", "group").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context = ErrorContext::new("get_group", "group").with_id(&id.to_string());
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn delete_group(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<()> {
    log_api_start!("delete_group", group_id = id);

    match state.group_service.delete_group(id).await {
        Ok(true) => {
            log_api_success!("delete_group", group_id = id, "group deleted");
            Ok(Json(ApiResponse::success(())))
        }
        Ok(false) => {
            let error = ApiError::NotFound(format!("Study group with ID '{}' not found", id));
            let context = ErrorContext::new("delete_group", "group").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context = ErrorContext::new("delete_group", "group").with_id(&id.to_string());
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn add_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddMemberRequest>,
) -> ApiResult<GroupMember> {
    log_api_start!("add_member", group_id = id);

    match state.group_service.add_member(id, request).await {
        Ok(Some(member)) => {
            log_api_success!("add_member", group_id = id, "member added");
            Ok(Json(ApiResponse::success(member)))
        }
        Ok(None) => {
            let error = ApiError::NotFound(format!("Study group with ID '{}' not found", id));
            let context = ErrorContext::new("add_member", "group").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context = ErrorContext::new("add_member", "group").with_id(&id.to_string());
            Err(classify_database_error(&e).to_response_with_context(context))
        }
    }
}

pub async fn add_resource(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddResourceRequest>,
) -> ApiResult<GroupResource> {
    log_api_start!("add_resource", group_id = id);

    match state.group_service.add_resource(id, request).await {
        Ok(Some(resource)) => Ok(Json(ApiResponse::success(resource))),
        Ok(None) => {
            let error = ApiError::NotFound(format!("Study group with ID '{}' not found", id));
            let context = ErrorContext::new("add_resource", "group").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context = ErrorContext::new("add_resource", "group").with_id(&id.to_string());
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn post_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PostMessageRequest>,
) -> ApiResult<GroupMessage> {
    log_api_start!("post_message", group_id = id);

    match state.group_service.post_message(id, request).await {
        Ok(Some(message)) => Ok(Json(ApiResponse::success(message))),
        Ok(None) => {
            let error = ApiError::NotFound(format!("Study group with ID '{}' not found", id));
            let context = ErrorContext::new("post_message", "group").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context = ErrorContext::new("post_message", "group").with_id(&id.to_string());
            Err(classify_database_error(&e).to_response_with_context(context))
        }
    }
}

pub async fn list_group_messages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Vec<GroupMessage>> {
    log_api_start!("list_group_messages", group_id = id);

    match state.group_service.list_messages(id).await {
        Ok(Some(messages)) => Ok(Json(ApiResponse::success(messages))),
        Ok(None) => {
            let error = ApiError::NotFound(format!("Study group with ID '{}' not found", id));
            let context = ErrorContext::new("list_group_messages", "group").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context = ErrorContext::new("list_group_messages", "group").with_id(&id.to_string());
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub async fn add_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddSummaryRequest>,
) -> ApiResult<GroupSummary> {
    log_api_start!("add_summary", group_id = id);

    match state.group_service.add_summary(id, request).await {
        Ok(Some(summary)) => Ok(Json(ApiResponse::success(summary))),
        Ok(None) => {
            let error = ApiError::NotFound(format!("Study group with ID '{}' not found", id));
            let context = ErrorContext::new("add_summary", "group").with_id(&id.to_string());
            Err(error.to_response_with_context(context))
        }
        Err(e) => {
            let context = ErrorContext::new("add_summary", "group").with_id(&id.to_string());
            Err(ApiError::DatabaseError(e).to_response_with_context(context))
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Task routes
        .route("/api/tasks", post(create_task))
        .route("/api/tasks", get(list_tasks))
        .route("/api/tasks/:id", get(get_task))
        .route("/api/tasks/:id", put(update_task))
        .route("/api/tasks/:id", delete(delete_task))
        // Flashcard routes
        .route("/api/flashcards", post(create_flashcard))
        .route("/api/flashcards", get(list_flashcards))
        .route("/api/flashcards/:id", get(get_flashcard))
        .route("/api/flashcards/:id", put(update_flashcard))
        .route("/api/flashcards/:id", delete(delete_flashcard))
        .route("/api/flashcards/:id/reviewed", post(mark_flashcard_reviewed))
        // Quiz routes
        .route("/api/quizzes", post(create_quiz))
        .route("/api/quizzes", get(list_quizzes))
        .route("/api/quizzes/:id", get(get_quiz))
        .route("/api/quizzes/:id", delete(delete_quiz))
        .route("/api/quizzes/:id/attempts", post(record_attempt))
        .route("/api/analytics/quizzes", get(quiz_analytics))
        // Study group routes
        .route("/api/groups", post(create_group))
        .route("/api/groups", get(list_groups))
        .route("/api/groups/:id", get(get_group))
        .route("/api/groups/:id", delete(delete_group))
        .route("/api/groups/:id/members", post(add_member))
        .route("/api/groups/:id/resources", post(add_resource))
        .route("/api/groups/:id/messages", post(post_message))
        .route("/api/groups/:id/messages", get(list_group_messages))
        .route("/api/groups/:id/summaries", post(add_summary))
        .with_state(state)
}

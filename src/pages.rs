//! Server-rendered dashboard pages.
//!
//! Each page handler fetches its records, builds a content fragment and
//! hands it to the layout shell. The dashboard root is guarded by the
//! redirect in `redirect.rs`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tracing::error;

use crate::api::AppState;
use crate::models::{Flashcard, SimpleQuiz, StudyGroup, Task};
use crate::navigation::default_sections;
use crate::redirect::{root_redirect, DASHBOARD_ROOT};
use crate::shell::{escape_html, render_shell};

pub fn create_pages_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::permanent(DASHBOARD_ROOT) }))
        .route("/dashboard", get(dashboard_root))
        .route("/dashboard/", get(dashboard_root))
        .route("/dashboard/tasks", get(tasks_page))
        .route("/dashboard/flashcards", get(flashcards_page))
        .route("/dashboard/quizzes", get(quizzes_page))
        .route("/dashboard/groups", get(groups_page))
        .route("/styles.css", get(serve_css))
        .with_state(state)
}

/// Dashboard root: redirect to the configured default sub-view. If the
/// configured view would loop back to the root the guard yields nothing and
/// a plain landing page is served instead.
async fn dashboard_root(State(state): State<AppState>) -> Response {
    match root_redirect(DASHBOARD_ROOT, &state.default_view) {
        Some(target) => Redirect::temporary(&target).into_response(),
        None => {
            let content = "      <h1>Dashboard</h1>\n      <p>Pick a view from the sidebar.</p>";
            Html(render_shell("Dashboard", "", &default_sections(), content)).into_response()
        }
    }
}

async fn tasks_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let tasks = state.task_service.list_tasks(None).await.map_err(|e| {
        error!(error = %e, "Failed to load tasks page");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let content = render_task_list(&tasks);
    Ok(Html(render_shell(
        "Tasks",
        "/dashboard/tasks",
        &default_sections(),
        &content,
    )))
}

async fn flashcards_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let cards = state.study_service.list_flashcards().await.map_err(|e| {
        error!(error = %e, "Failed to load flashcards page");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let content = render_flashcard_list(&cards);
    Ok(Html(render_shell(
        "Flashcards",
        "/dashboard/flashcards",
        &default_sections(),
        &content,
    )))
}

async fn quizzes_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let quizzes = state.study_service.list_quizzes().await.map_err(|e| {
        error!(error = %e, "Failed to load quizzes page");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let content = render_quiz_list(&quizzes);
    Ok(Html(render_shell(
        "Quizzes",
        "/dashboard/quizzes",
        &default_sections(),
        &content,
    )))
}

async fn groups_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let groups = state.group_service.list_groups().await.map_err(|e| {
        error!(error = %e, "Failed to load groups page");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let content = render_group_list(&groups);
    Ok(Html(render_shell(
        "Study Groups",
        "/dashboard/groups",
        &default_sections(),
        &content,
    )))
}

fn render_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return empty_state("No tasks yet.");
    }

    let mut out = String::from("      <h1>Tasks</h1>\n      <ul class=\"task-list\">\n");
    for task in tasks {
        let due = task
            .due_date
            .map(|d| format!(" <time>{}</time>", d.format("%Y-%m-%d")))
            .unwrap_or_default();
        out.push_str(&format!(
            "        <li data-status=\"{}\" data-priority=\"{}\">{}{}</li>\n",
            task.status.as_str(),
            task.priority.as_str(),
            escape_html(&task.title),
            due
        ));
    }
    out.push_str("      </ul>");
    out
}

fn render_flashcard_list(cards: &[Flashcard]) -> String {
    if cards.is_empty() {
        return empty_state("No flashcards yet.");
    }

    let mut out = String::from("      <h1>Flashcards</h1>\n      <ul class=\"card-list\">\n");
    for card in cards {
        out.push_str(&format!(
            "        <li data-topic=\"{}\" data-reviews=\"{}\">{}</li>\n",
            escape_html(&card.topic),
            card.times_reviewed,
            escape_html(&card.question)
        ));
    }
    out.push_str("      </ul>");
    out
}

fn render_quiz_list(quizzes: &[SimpleQuiz]) -> String {
    if quizzes.is_empty() {
        return empty_state("No quizzes yet.");
    }

    let mut out = String::from("      <h1>Quizzes</h1>\n      <ul class=\"quiz-list\">\n");
    for quiz in quizzes {
        out.push_str(&format!(
            "        <li data-topic=\"{}\">{} ({} questions, {} min)</li>\n",
            escape_html(&quiz.topic),
            escape_html(&quiz.title),
            quiz.questions.len(),
            quiz.duration_minutes
        ));
    }
    out.push_str("      </ul>");
    out
}

fn render_group_list(groups: &[StudyGroup]) -> String {
    if groups.is_empty() {
        return empty_state("No study groups yet.");
    }

    let mut out = String::from("      <h1>Study Groups</h1>\n      <ul class=\"group-list\">\n");
    for group in groups {
        out.push_str(&format!(
            "        <li data-members=\"{}\">{}</li>\n",
            group.member_count,
            escape_html(&group.name)
        ));
    }
    out.push_str("      </ul>");
    out
}

fn empty_state(message: &str) -> String {
    format!("      <p class=\"empty-state\">{}</p>", escape_html(message))
}

const STYLESHEET: &str = r#"
:root { font-family: system-ui, sans-serif; }
.dashboard-frame { display: grid; grid-template-columns: 220px 1fr; grid-template-rows: 48px 1fr; min-height: 100vh; }
.dashboard-header { grid-column: 1 / 3; border-bottom: 1px solid #ddd; display: flex; align-items: center; padding: 0 1rem; }
.dashboard-sidebar { border-right: 1px solid #ddd; padding: 1rem; }
.dashboard-sidebar ul { list-style: none; padding: 0; }
.dashboard-sidebar li.active a { font-weight: 700; }
.dashboard-content { padding: 1.5rem; }
.nav-heading { font-size: 0.75rem; text-transform: uppercase; color: #666; }
.badge { background: #eee; border-radius: 8px; padding: 0 0.4rem; font-size: 0.75rem; }
.empty-state { color: #666; }
"#;

async fn serve_css() -> impl IntoResponse {
    ([("content-type", "text/css")], STYLESHEET)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub topic: String,
    pub difficulty: String, // easy, medium, hard
    pub times_reviewed: i32,
    pub created_at: DateTime<Utc>,
    pub last_reviewed_at: Option<DateTime<Utc>>,
    pub next_review_at: Option<DateTime<Utc>>,
}

/// Compact quiz shape returned by list endpoints. The persisted shape is
/// [`ScoredQuiz`]; this projection drops ownership and attempt history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleQuiz {
    pub id: Uuid,
    pub title: String,
    pub topic: String,
    pub questions: Vec<QuizQuestion>,
    pub created_at: DateTime<Utc>,
    pub duration_minutes: i32,
}

/// Full quiz record with ownership and its append-only attempt log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredQuiz {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub topic: String,
    pub difficulty: String, // beginner, intermediate, advanced
    pub user_id: String,
    pub questions: Vec<ScoredQuizQuestion>,
    pub attempts: Vec<QuizAttempt>,
    pub created_at: DateTime<Utc>,
    pub duration_minutes: i32,
}

/// Question shape used by [`SimpleQuiz`]: the correct answer is an index
/// into `options`. Option order is display-significant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: Uuid,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
    pub explanation: Option<String>,
}

/// Question shape used by [`ScoredQuiz`]: the correct answer is the option
/// text itself, and a type tag may refine how the question is presented.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredQuizQuestion {
    pub id: Uuid,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub question_type: Option<String>, // multiple_choice, true_false, short_answer
}

impl From<&ScoredQuizQuestion> for QuizQuestion {
    fn from(q: &ScoredQuizQuestion) -> Self {
        let correct_answer = q
            .options
            .iter()
            .position(|o| o == &q.correct_answer)
            .map(|i| i as i32)
            .unwrap_or(-1);

        QuizQuestion {
            id: q.id,
            question: q.question.clone(),
            options: q.options.clone(),
            correct_answer,
            explanation: if q.explanation.is_empty() {
                None
            } else {
                Some(q.explanation.clone())
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub user_id: String,
    pub answers: Vec<QuizAnswer>,
    pub score: f64,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question_id: Uuid,
    pub answer: String,
    pub is_correct: bool,
}

/// Derived read-only view over stored quizzes and attempts. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnalytics {
    pub total_quizzes: i64,
    pub total_attempts: i64,
    pub average_score: Option<f64>,
    pub topics_covered: Vec<String>,
}

/// Aggregate root for study-group collaboration. Members, resources,
/// messages and summaries are owned children scoped to one group; the
/// nested collections are populated only when a single group is fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyGroup {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub owner_id: String,
    pub member_count: i32,
    pub created_at: DateTime<Utc>,
    pub members: Option<Vec<GroupMember>>,
    pub resources: Option<Vec<GroupResource>>,
    pub messages: Option<Vec<GroupMessage>>,
    pub summaries: Option<Vec<GroupSummary>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMember {
    pub id: Uuid,
    pub group_id: Uuid,
    pub user_id: String,
    pub display_name: String,
    pub role: String, // owner, member
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResource {
    pub id: Uuid,
    pub group_id: Uuid,
    pub title: String,
    pub url: String,
    pub added_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMessage {
    pub id: Uuid,
    pub group_id: Uuid,
    pub sender_id: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: Uuid,
    pub group_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(TaskStatus::Todo),
            "in-progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(TaskPriority::Low),
            "medium" => Some(TaskPriority::Medium),
            "high" => Some(TaskPriority::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Navigation descriptors consumed by the layout shell. Pure presentation
// data; `icon` names a glyph resolved by the page templates.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarItem {
    pub title: String,
    pub href: String,
    pub icon: String,
    pub badge: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarSection {
    pub heading: Option<String>,
    pub items: Vec<SidebarItem>,
}

// Request shapes

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFlashcardRequest {
    pub question: String,
    pub answer: String,
    pub topic: String,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFlashcardRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub topic: Option<String>,
    pub difficulty: Option<String>,
}

/// Review bookkeeping request. The next-review timestamp is computed by an
/// external scheduler; this service only records it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardReviewedRequest {
    pub next_review: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuizRequest {
    pub title: String,
    pub description: Option<String>,
    pub topic: String,
    pub difficulty: Option<String>,
    pub user_id: String,
    pub questions: Vec<CreateQuizQuestion>,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub question_type: Option<String>,
}

/// Attempts arrive fully graded; correctness and score are computed by the
/// caller and recorded verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAttemptRequest {
    pub user_id: String,
    pub answers: Vec<QuizAnswer>,
    pub score: f64,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
    pub owner_display_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddResourceRequest {
    pub title: String,
    pub url: String,
    pub added_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageRequest {
    pub sender_id: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSummaryRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
}

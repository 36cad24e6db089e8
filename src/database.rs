use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::log_db_operation;
use crate::models::*;

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url).await?;
        let db = Database { pool };
        db.migrate().await?;
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                priority TEXT NOT NULL DEFAULT 'medium',
                status TEXT NOT NULL DEFAULT 'todo',
                due_date TEXT,
                tags TEXT NOT NULL DEFAULT '[]',
                user_id TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS flashcards (
                id TEXT PRIMARY KEY,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                topic TEXT NOT NULL,
                difficulty TEXT NOT NULL DEFAULT 'medium',
                times_reviewed INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                last_reviewed_at TEXT,
                next_review_at TEXT
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS quizzes (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                topic TEXT NOT NULL,
                difficulty TEXT NOT NULL DEFAULT 'beginner',
                user_id TEXT NOT NULL,
                questions TEXT NOT NULL,
                created_at TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL DEFAULT 0
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS quiz_attempts (
                id TEXT PRIMARY KEY,
                quiz_id TEXT NOT NULL,
                user_id TEXT NOT NULL,
                answers TEXT NOT NULL,
                score REAL NOT NULL,
                started_at TEXT NOT NULL,
                completed_at TEXT,
                FOREIGN KEY (quiz_id) REFERENCES quizzes(id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS study_groups (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL DEFAULT '',
                owner_id TEXT NOT NULL,
                member_count INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS group_members (
                id TEXT PRIMARY KEY,
                group_id TEXT NOT NULL,
                user_id TEXT NOT NULL,
                display_name TEXT NOT NULL,
                role TEXT NOT NULL DEFAULT 'member',
                joined_at TEXT NOT NULL,
                UNIQUE (group_id, user_id),
                FOREIGN KEY (group_id) REFERENCES study_groups(id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS group_resources (
                id TEXT PRIMARY KEY,
                group_id TEXT NOT NULL,
                title TEXT NOT NULL,
                url TEXT NOT NULL,
                added_by TEXT NOT NULL,
                created_at TEXT NOT NULL,
                FOREIGN KEY (group_id) REFERENCES study_groups(id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS group_messages (
                id TEXT PRIMARY KEY,
                group_id TEXT NOT NULL,
                sender_id TEXT NOT NULL,
                content TEXT NOT NULL,
                sent_at TEXT NOT NULL,
                FOREIGN KEY (group_id) REFERENCES study_groups(id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS group_summaries (
                id TEXT PRIMARY KEY,
                group_id TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL,
                FOREIGN KEY (group_id) REFERENCES study_groups(id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        log_db_operation!(info, "migration", "database initialized");
        Ok(())
    }

    // Task operations

    pub async fn create_task(&self, task: &Task) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO tasks (id, title, priority, status, due_date, tags, user_id, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(task.id.to_string())
        .bind(&task.title)
        .bind(task.priority.as_str())
        .bind(task.status.as_str())
        .bind(task.due_date.map(|d| d.to_rfc3339()))
        .bind(serde_json::to_string(&task.tags)?)
        .bind(&task.user_id)
        .bind(task.created_at.to_rfc3339())
        .bind(task.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_task(&self, id: Uuid) -> Result<Option<Task>> {
        let row = sqlx::query("SELECT * FROM tasks WHERE id = ?1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_task(&r)).transpose()
    }

    pub async fn list_tasks(&self, status: Option<TaskStatus>) -> Result<Vec<Task>> {
        let rows = match status {
            Some(status) => {
                sqlx::query("SELECT * FROM tasks WHERE status = ?1 ORDER BY created_at DESC")
                    .bind(status.as_str())
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("SELECT * FROM tasks ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        log_db_operation!(debug, "list_tasks", count = rows.len());
        rows.iter().map(row_to_task).collect()
    }

    pub async fn update_task(&self, task: &Task) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?1, priority = ?2, status = ?3, due_date = ?4, tags = ?5, updated_at = ?6
            WHERE id = ?7
            "#,
        )
        .bind(&task.title)
        .bind(task.priority.as_str())
        .bind(task.status.as_str())
        .bind(task.due_date.map(|d| d.to_rfc3339()))
        .bind(serde_json::to_string(&task.tags)?)
        .bind(task.updated_at.to_rfc3339())
        .bind(task.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_task(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // Flashcard operations

    pub async fn create_flashcard(&self, card: &Flashcard) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO flashcards (id, question, answer, topic, difficulty, times_reviewed,
                                    created_at, last_reviewed_at, next_review_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(card.id.to_string())
        .bind(&card.question)
        .bind(&card.answer)
        .bind(&card.topic)
        .bind(&card.difficulty)
        .bind(card.times_reviewed)
        .bind(card.created_at.to_rfc3339())
        .bind(card.last_reviewed_at.map(|d| d.to_rfc3339()))
        .bind(card.next_review_at.map(|d| d.to_rfc3339()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_flashcard(&self, id: Uuid) -> Result<Option<Flashcard>> {
        let row = sqlx::query("SELECT * FROM flashcards WHERE id = ?1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_flashcard(&r)).transpose()
    }

    pub async fn list_flashcards(&self) -> Result<Vec<Flashcard>> {
        let rows = sqlx::query("SELECT * FROM flashcards ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        log_db_operation!(debug, "list_flashcards", count = rows.len());
        rows.iter().map(row_to_flashcard).collect()
    }

    pub async fn update_flashcard(&self, card: &Flashcard) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE flashcards
            SET question = ?1, answer = ?2, topic = ?3, difficulty = ?4,
                times_reviewed = ?5, last_reviewed_at = ?6, next_review_at = ?7
            WHERE id = ?8
            "#,
        )
        .bind(&card.question)
        .bind(&card.answer)
        .bind(&card.topic)
        .bind(&card.difficulty)
        .bind(card.times_reviewed)
        .bind(card.last_reviewed_at.map(|d| d.to_rfc3339()))
        .bind(card.next_review_at.map(|d| d.to_rfc3339()))
        .bind(card.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_flashcard(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM flashcards WHERE id = ?1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // Quiz operations

    pub async fn create_quiz(&self, quiz: &ScoredQuiz) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO quizzes (id, title, description, topic, difficulty, user_id,
                                 questions, created_at, duration_minutes)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(quiz.id.to_string())
        .bind(&quiz.title)
        .bind(&quiz.description)
        .bind(&quiz.topic)
        .bind(&quiz.difficulty)
        .bind(&quiz.user_id)
        .bind(serde_json::to_string(&quiz.questions)?)
        .bind(quiz.created_at.to_rfc3339())
        .bind(quiz.duration_minutes)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fetch a quiz without its attempt log. Attempts are hydrated by the
    /// service layer when the full record is requested.
    pub async fn get_quiz(&self, id: Uuid) -> Result<Option<ScoredQuiz>> {
        let row = sqlx::query("SELECT * FROM quizzes WHERE id = ?1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_quiz(&r)).transpose()
    }

    pub async fn list_quizzes(&self) -> Result<Vec<ScoredQuiz>> {
        let rows = sqlx::query("SELECT * FROM quizzes ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        log_db_operation!(debug, "list_quizzes", count = rows.len());
        rows.iter().map(row_to_quiz).collect()
    }

    pub async fn delete_quiz(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM quizzes WHERE id = ?1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn create_attempt(&self, attempt: &QuizAttempt) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO quiz_attempts (id, quiz_id, user_id, answers, score, started_at, completed_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(attempt.id.to_string())
        .bind(attempt.quiz_id.to_string())
        .bind(&attempt.user_id)
        .bind(serde_json::to_string(&attempt.answers)?)
        .bind(attempt.score)
        .bind(attempt.started_at.to_rfc3339())
        .bind(attempt.completed_at.map(|d| d.to_rfc3339()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_attempts(&self, quiz_id: Uuid) -> Result<Vec<QuizAttempt>> {
        let rows = sqlx::query(
            "SELECT * FROM quiz_attempts WHERE quiz_id = ?1 ORDER BY started_at ASC",
        )
        .bind(quiz_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_attempt).collect()
    }

    /// Aggregate counters over stored quizzes and attempts. Scores are
    /// averaged as recorded; nothing is graded here.
    pub async fn quiz_analytics(&self) -> Result<QuizAnalytics> {
        let total_quizzes: i64 = sqlx::query("SELECT COUNT(*) AS n FROM quizzes")
            .fetch_one(&self.pool)
            .await?
            .get("n");

        let total_attempts: i64 = sqlx::query("SELECT COUNT(*) AS n FROM quiz_attempts")
            .fetch_one(&self.pool)
            .await?
            .get("n");

        let average_score: Option<f64> = sqlx::query("SELECT AVG(score) AS avg FROM quiz_attempts")
            .fetch_one(&self.pool)
            .await?
            .get("avg");

        let topic_rows = sqlx::query("SELECT DISTINCT topic FROM quizzes ORDER BY topic")
            .fetch_all(&self.pool)
            .await?;
        let topics_covered = topic_rows
            .iter()
            .map(|r| r.get::<String, _>("topic"))
            .collect();

        Ok(QuizAnalytics {
            total_quizzes,
            total_attempts,
            average_score,
            topics_covered,
        })
    }

    // Study group operations

    pub async fn create_group(&self, group: &StudyGroup) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO study_groups (id, name, description, owner_id, member_count, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(group.id.to_string())
        .bind(&group.name)
        .bind(&group.description)
        .bind(&group.owner_id)
        .bind(group.member_count)
        .bind(group.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fetch a group row without its child collections.
    pub async fn get_group(&self, id: Uuid) -> Result<Option<StudyGroup>> {
        let row = sqlx::query("SELECT * FROM study_groups WHERE id = ?1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_group(&r)).transpose()
    }

    pub async fn list_groups(&self) -> Result<Vec<StudyGroup>> {
        let rows = sqlx::query("SELECT * FROM study_groups ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        log_db_operation!(debug, "list_groups", count = rows.len());
        rows.iter().map(row_to_group).collect()
    }

    pub async fn delete_group(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM study_groups WHERE id = ?1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn add_member(&self, member: &GroupMember) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO group_members (id, group_id, user_id, display_name, role, joined_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(member.id.to_string())
        .bind(member.group_id.to_string())
        .bind(&member.user_id)
        .bind(&member.display_name)
        .bind(&member.role)
        .bind(member.joined_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        sqlx::query("UPDATE study_groups SET member_count = member_count + 1 WHERE id = ?1")
            .bind(member.group_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn list_members(&self, group_id: Uuid) -> Result<Vec<GroupMember>> {
        let rows = sqlx::query(
            "SELECT * FROM group_members WHERE group_id = ?1 ORDER BY joined_at ASC",
        )
        .bind(group_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_member).collect()
    }

    pub async fn add_resource(&self, resource: &GroupResource) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO group_resources (id, group_id, title, url, added_by, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(resource.id.to_string())
        .bind(resource.group_id.to_string())
        .bind(&resource.title)
        .bind(&resource.url)
        .bind(&resource.added_by)
        .bind(resource.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_resources(&self, group_id: Uuid) -> Result<Vec<GroupResource>> {
        let rows = sqlx::query(
            "SELECT * FROM group_resources WHERE group_id = ?1 ORDER BY created_at ASC",
        )
        .bind(group_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_resource).collect()
    }

    pub async fn add_message(&self, message: &GroupMessage) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO group_messages (id, group_id, sender_id, content, sent_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(message.id.to_string())
        .bind(message.group_id.to_string())
        .bind(&message.sender_id)
        .bind(&message.content)
        .bind(message.sent_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_messages(&self, group_id: Uuid) -> Result<Vec<GroupMessage>> {
        let rows = sqlx::query(
            "SELECT * FROM group_messages WHERE group_id = ?1 ORDER BY sent_at ASC",
        )
        .bind(group_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_message).collect()
    }

    pub async fn add_summary(&self, summary: &GroupSummary) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO group_summaries (id, group_id, content, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(summary.id.to_string())
        .bind(summary.group_id.to_string())
        .bind(&summary.content)
        .bind(summary.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_summaries(&self, group_id: Uuid) -> Result<Vec<GroupSummary>> {
        let rows = sqlx::query(
            "SELECT * FROM group_summaries WHERE group_id = ?1 ORDER BY created_at ASC",
        )
        .bind(group_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_summary).collect()
    }
}

// Row mapping helpers. Timestamps are stored as RFC 3339 TEXT.

fn parse_datetime(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

fn parse_optional_datetime(value: Option<String>) -> Option<DateTime<Utc>> {
    value.and_then(|s| DateTime::parse_from_rfc3339(&s).ok().map(|d| d.with_timezone(&Utc)))
}

fn row_to_task(row: &SqliteRow) -> Result<Task> {
    let priority_str: String = row.get("priority");
    let status_str: String = row.get("status");

    Ok(Task {
        id: Uuid::parse_str(&row.get::<String, _>("id"))?,
        title: row.get("title"),
        priority: TaskPriority::parse(&priority_str)
            .ok_or_else(|| anyhow!("Unknown task priority '{}'", priority_str))?,
        status: TaskStatus::parse(&status_str)
            .ok_or_else(|| anyhow!("Unknown task status '{}'", status_str))?,
        due_date: parse_optional_datetime(row.get("due_date")),
        tags: serde_json::from_str(&row.get::<String, _>("tags")).unwrap_or_default(),
        user_id: row.get("user_id"),
        created_at: parse_datetime(&row.get::<String, _>("created_at"))?,
        updated_at: parse_datetime(&row.get::<String, _>("updated_at"))?,
    })
}

fn row_to_flashcard(row: &SqliteRow) -> Result<Flashcard> {
    Ok(Flashcard {
        id: Uuid::parse_str(&row.get::<String, _>("id"))?,
        question: row.get("question"),
        answer: row.get("answer"),
        topic: row.get("topic"),
        difficulty: row.get("difficulty"),
        times_reviewed: row.get("times_reviewed"),
        created_at: parse_datetime(&row.get::<String, _>("created_at"))?,
        last_reviewed_at: parse_optional_datetime(row.get("last_reviewed_at")),
        next_review_at: parse_optional_datetime(row.get("next_review_at")),
    })
}

fn row_to_quiz(row: &SqliteRow) -> Result<ScoredQuiz> {
    Ok(ScoredQuiz {
        id: Uuid::parse_str(&row.get::<String, _>("id"))?,
        title: row.get("title"),
        description: row.get("description"),
        topic: row.get("topic"),
        difficulty: row.get("difficulty"),
        user_id: row.get("user_id"),
        questions: serde_json::from_str(&row.get::<String, _>("questions"))?,
        attempts: Vec::new(),
        created_at: parse_datetime(&row.get::<String, _>("created_at"))?,
        duration_minutes: row.get("duration_minutes"),
    })
}

fn row_to_attempt(row: &SqliteRow) -> Result<QuizAttempt> {
    Ok(QuizAttempt {
        id: Uuid::parse_str(&row.get::<String, _>("id"))?,
        quiz_id: Uuid::parse_str(&row.get::<String, _>("quiz_id"))?,
        user_id: row.get("user_id"),
        answers: serde_json::from_str(&row.get::<String, _>("answers"))?,
        score: row.get("score"),
        started_at: parse_datetime(&row.get::<String, _>("started_at"))?,
        completed_at: parse_optional_datetime(row.get("completed_at")),
    })
}

fn row_to_group(row: &SqliteRow) -> Result<StudyGroup> {
    Ok(StudyGroup {
        id: Uuid::parse_str(&row.get::<String, _>("id"))?,
        name: row.get("name"),
        description: row.get("description"),
        owner_id: row.get("owner_id"),
        member_count: row.get("member_count"),
        created_at: parse_datetime(&row.get::<String, _>("created_at"))?,
        members: None,
        resources: None,
        messages: None,
        summaries: None,
    })
}

fn row_to_member(row: &SqliteRow) -> Result<GroupMember> {
    Ok(GroupMember {
        id: Uuid::parse_str(&row.get::<String, _>("id"))?,
        group_id: Uuid::parse_str(&row.get::<String, _>("group_id"))?,
        user_id: row.get("user_id"),
        display_name: row.get("display_name"),
        role: row.get("role"),
        joined_at: parse_datetime(&row.get::<String, _>("joined_at"))?,
    })
}

fn row_to_resource(row: &SqliteRow) -> Result<GroupResource> {
    Ok(GroupResource {
        id: Uuid::parse_str(&row.get::<String, _>("id"))?,
        group_id: Uuid::parse_str(&row.get::<String, _>("group_id"))?,
        title: row.get("title"),
        url: row.get("url"),
        added_by: row.get("added_by"),
        created_at: parse_datetime(&row.get::<String, _>("created_at"))?,
    })
}

fn row_to_message(row: &SqliteRow) -> Result<GroupMessage> {
    Ok(GroupMessage {
        id: Uuid::parse_str(&row.get::<String, _>("id"))?,
        group_id: Uuid::parse_str(&row.get::<String, _>("group_id"))?,
        sender_id: row.get("sender_id"),
        content: row.get("content"),
        sent_at: parse_datetime(&row.get::<String, _>("sent_at"))?,
    })
}

fn row_to_summary(row: &SqliteRow) -> Result<GroupSummary> {
    Ok(GroupSummary {
        id: Uuid::parse_str(&row.get::<String, _>("id"))?,
        group_id: Uuid::parse_str(&row.get::<String, _>("group_id"))?,
        content: row.get("content"),
        created_at: parse_datetime(&row.get::<String, _>("created_at"))?,
    })
}

use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

use crate::database::Database;
use crate::models::*;

#[derive(Clone)]
pub struct TaskService {
    db: Database,
}

impl TaskService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create_task(&self, request: CreateTaskRequest) -> Result<Task> {
        if request.title.trim().is_empty() {
            return Err(anyhow::anyhow!("Task title is required"));
        }

        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            title: request.title,
            priority: request.priority.unwrap_or(TaskPriority::Medium),
            status: request.status.unwrap_or(TaskStatus::Todo),
            due_date: request.due_date,
            tags: request.tags.unwrap_or_default(),
            user_id: request.user_id,
            created_at: now,
            updated_at: now,
        };

        self.db.create_task(&task).await?;
        Ok(task)
    }

    pub async fn get_task(&self, id: Uuid) -> Result<Option<Task>> {
        self.db.get_task(id).await
    }

    pub async fn list_tasks(&self, status: Option<TaskStatus>) -> Result<Vec<Task>> {
        self.db.list_tasks(status).await
    }

    /// Apply a partial update. Status transitions are recorded as given;
    /// ordering among todo/in-progress/completed is the caller's concern.
    pub async fn update_task(&self, id: Uuid, request: UpdateTaskRequest) -> Result<Option<Task>> {
        let mut task = match self.db.get_task(id).await? {
            Some(task) => task,
            None => return Ok(None),
        };

        if let Some(title) = request.title {
            if title.trim().is_empty() {
                return Err(anyhow::anyhow!("Task title is required"));
            }
            task.title = title;
        }
        if let Some(priority) = request.priority {
            task.priority = priority;
        }
        if let Some(status) = request.status {
            task.status = status;
        }
        if let Some(due_date) = request.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(tags) = request.tags {
            task.tags = tags;
        }
        task.updated_at = Utc::now();

        self.db.update_task(&task).await?;
        Ok(Some(task))
    }

    pub async fn delete_task(&self, id: Uuid) -> Result<bool> {
        self.db.delete_task(id).await
    }
}

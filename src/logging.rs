// Macros file - tracing macros are imported within the macro definitions

/// Standardized logging macros for consistent field names and message
/// patterns across the application.

// ============================================================================
// API Operation Logging Macros
// ============================================================================

/// Log the start of an API operation with consistent fields
#[macro_export]
macro_rules! log_api_start {
    ($operation:expr, task_id = $task_id:expr) => {
        tracing::debug!(
            operation = $operation,
            task_id = %$task_id,
            "API operation started"
        );
    };
    ($operation:expr, quiz_id = $quiz_id:expr) => {
        tracing::debug!(
            operation = $operation,
            quiz_id = %$quiz_id,
            "API operation started"
        );
    };
    ($operation:expr, group_id = $group_id:expr) => {
        tracing::debug!(
            operation = $operation,
            group_id = %$group_id,
            "API operation started"
        );
    };
    ($operation:expr, flashcard_id = $flashcard_id:expr) => {
        tracing::debug!(
            operation = $operation,
            flashcard_id = %$flashcard_id,
            "API operation started"
        );
    };
    ($operation:expr) => {
        tracing::debug!(
            operation = $operation,
            "API operation started"
        );
    };
}

/// Log successful completion of an API operation
#[macro_export]
macro_rules! log_api_success {
    ($operation:expr, task_id = $task_id:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            task_id = %$task_id,
            "API operation completed: {}", $msg
        );
    };
    ($operation:expr, quiz_id = $quiz_id:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            quiz_id = %$quiz_id,
            "API operation completed: {}", $msg
        );
    };
    ($operation:expr, group_id = $group_id:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            group_id = %$group_id,
            "API operation completed: {}", $msg
        );
    };
    ($operation:expr, flashcard_id = $flashcard_id:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            flashcard_id = %$flashcard_id,
            "API operation completed: {}", $msg
        );
    };
    ($operation:expr, count = $count:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            count = $count,
            "API operation completed: {}", $msg
        );
    };
    ($operation:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            "API operation completed: {}", $msg
        );
    };
}

/// Log API operation errors with consistent structure
#[macro_export]
macro_rules! log_api_error {
    ($operation:expr, task_id = $task_id:expr, error = $error:expr, $msg:expr) => {
        tracing::error!(
            operation = $operation,
            task_id = %$task_id,
            error = %$error,
            "API operation failed: {}", $msg
        );
    };
    ($operation:expr, quiz_id = $quiz_id:expr, error = $error:expr, $msg:expr) => {
        tracing::error!(
            operation = $operation,
            quiz_id = %$quiz_id,
            error = %$error,
            "API operation failed: {}", $msg
        );
    };
    ($operation:expr, group_id = $group_id:expr, error = $error:expr, $msg:expr) => {
        tracing::error!(
            operation = $operation,
            group_id = %$group_id,
            error = %$error,
            "API operation failed: {}", $msg
        );
    };
    ($operation:expr, error = $error:expr, $msg:expr) => {
        tracing::error!(
            operation = $operation,
            error = %$error,
            "API operation failed: {}", $msg
        );
    };
}

/// Log API warnings with context
#[macro_export]
macro_rules! log_api_warn {
    ($operation:expr, task_id = $task_id:expr, $msg:expr) => {
        tracing::warn!(
            operation = $operation,
            task_id = %$task_id,
            "API operation warning: {}", $msg
        );
    };
    ($operation:expr, quiz_id = $quiz_id:expr, $msg:expr) => {
        tracing::warn!(
            operation = $operation,
            quiz_id = %$quiz_id,
            "API operation warning: {}", $msg
        );
    };
    ($operation:expr, group_id = $group_id:expr, $msg:expr) => {
        tracing::warn!(
            operation = $operation,
            group_id = %$group_id,
            "API operation warning: {}", $msg
        );
    };
    ($operation:expr, $msg:expr) => {
        tracing::warn!(
            operation = $operation,
            "API operation warning: {}", $msg
        );
    };
}

// ============================================================================
// Database Operation Logging Macros
// ============================================================================

/// Log database operation performance and results
#[macro_export]
macro_rules! log_db_operation {
    (debug, $operation:expr, count = $count:expr) => {
        tracing::debug!(
            component = "database",
            operation = $operation,
            result_count = $count,
            "Database operation completed"
        );
    };
    (info, $operation:expr, $msg:expr) => {
        tracing::info!(
            component = "database",
            operation = $operation,
            "Database operation: {}", $msg
        );
    };
    (error, $operation:expr, error = $error:expr) => {
        tracing::error!(
            component = "database",
            operation = $operation,
            error = %$error,
            "Database operation failed"
        );
    };
}

// ============================================================================
// Navigation Logging Macros
// ============================================================================

/// Log redirect-guard decisions with the paths involved
#[macro_export]
macro_rules! log_redirect {
    (issued, $from:expr, $to:expr) => {
        tracing::info!(
            component = "redirect_guard",
            from = %$from,
            to = %$to,
            "Root redirect issued"
        );
    };
    (skipped, $path:expr) => {
        tracing::debug!(
            component = "redirect_guard",
            path = %$path,
            "No redirect needed"
        );
    };
}

// ============================================================================
// System Event Logging Macros
// ============================================================================

/// Log system startup and shutdown events
#[macro_export]
macro_rules! log_system_event {
    (startup, component = $component:expr, $msg:expr) => {
        tracing::info!(
            event_type = "startup",
            component = $component,
            "System event: {}",
            $msg
        );
    };
    (config, $msg:expr) => {
        tracing::info!(event_type = "configuration", "System event: {}", $msg);
    };
}

// ============================================================================
// Validation Logging Macros
// ============================================================================

/// Log validation results consistently
#[macro_export]
macro_rules! log_validation {
    (success, $component:expr, $msg:expr) => {
        tracing::debug!(
            event_type = "validation",
            component = $component,
            result = "success",
            "Validation completed: {}", $msg
        );
    };
    (failure, $component:expr, error = $error:expr) => {
        tracing::warn!(
            event_type = "validation",
            component = $component,
            result = "failure",
            error = %$error,
            "Validation failed"
        );
    };
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    #[test]
    fn test_logging_macros_compile() {
        let task_id = Uuid::new_v4();
        let quiz_id = Uuid::new_v4();
        let group_id = Uuid::new_v4();
        let error = anyhow::anyhow!("test error");

        log_api_start!("create_task", task_id = task_id);
        log_api_start!("record_attempt", quiz_id = quiz_id);
        log_api_start!("add_member", group_id = group_id);
        log_api_start!("list_tasks");

        log_api_success!("create_task", task_id = task_id, "task created");
        log_api_success!("list_tasks", count = 5, "tasks listed");

        log_api_error!("get_task", task_id = task_id, error = error, "lookup failed");
        log_api_warn!("get_quiz", quiz_id = quiz_id, "quiz not found");

        log_db_operation!(debug, "list_tasks", count = 3);
        log_db_operation!(info, "migration", "database initialized");

        log_redirect!(issued, "/dashboard", "/dashboard/tasks");
        log_redirect!(skipped, "/dashboard/tasks");

        log_system_event!(startup, component = "server", "server starting");
        log_system_event!(config, "configuration loaded");

        log_validation!(success, "configuration", "configuration valid");
    }
}

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use study_dashboard::{
    api::{create_router, AppState},
    config::{Config, LoggingConfig},
    pages::create_pages_router,
    Database, GroupService, StudyService, TaskService,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;

    let _guard = setup_logging(&config.logging)?;

    info!("Starting Study Dashboard server...");

    // Initialize database
    let db = Database::new(&config.database.url).await?;
    info!("Database initialized successfully");

    // Initialize services
    let task_service = TaskService::new(db.clone());
    let study_service = StudyService::new(db.clone());
    let group_service = GroupService::new(db);

    // Create application state
    let state = AppState {
        task_service,
        study_service,
        group_service,
        default_view: config.dashboard.default_view.clone(),
    };

    // Build the application router
    let app = create_pages_router(state.clone())
        .merge(create_router(state))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()));

    // Start the server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn setup_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::fmt;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true);

    // File output with daily rotation, no ANSI colors
    let (file_layer, guard) = if config.file_enabled {
        std::fs::create_dir_all(&config.log_directory).unwrap_or_else(|e| {
            eprintln!("Warning: Could not create logs directory: {}", e);
        });

        let file_appender =
            tracing_appender::rolling::daily(&config.log_directory, "study-dashboard.log");
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

        let layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(non_blocking_file);

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    if guard.is_some() {
        info!(
            "Logging initialized - writing to {}/study-dashboard.log with daily rotation",
            config.log_directory
        );
    }

    Ok(guard)
}

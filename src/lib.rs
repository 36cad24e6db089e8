pub mod api;
pub mod config;
pub mod database;
pub mod errors;
pub mod group_service;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod redirect;
pub mod shell;
pub mod study_service;
pub mod task_service;

pub use config::Config;
pub use database::Database;
pub use errors::*;
pub use group_service::GroupService;
pub use models::*;
pub use redirect::{root_redirect, DASHBOARD_ROOT};
pub use study_service::StudyService;
pub use task_service::TaskService;

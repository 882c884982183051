// HTTP APIs over per-session stores

pub mod admin;
pub mod assistant;
pub mod export;
pub mod reports;
pub mod sessions;

pub use admin::{create_admin_router, AdminAppState};
pub use assistant::{create_assistant_router, AssistantAppState};
pub use export::{create_export_router, ExportAppState};
pub use reports::{create_reports_router, ReportsAppState};
pub use sessions::{create_session_router, SessionAppState};

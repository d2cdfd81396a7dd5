//! Built-in action handlers.

pub mod app_ops;
pub mod copy_url;
pub mod create_app;
pub mod create_function;
pub mod create_project;
pub mod deploy;
pub mod open_portal;

pub use app_ops::{RestartFunctionAppAction, StartFunctionAppAction, StopFunctionAppAction};
pub use copy_url::CopyFunctionUrlAction;
pub use create_app::CreateFunctionAppAction;
pub use create_function::CreateFunctionAction;
pub use create_project::CreateNewProjectAction;
pub use deploy::DeployAction;
pub use open_portal::OpenInPortalAction;

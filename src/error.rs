use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no workspace folder is open")]
    NoWorkspace,

    /// User dismissed a prompt. Actions abort silently on this variant.
    #[error("operation cancelled")]
    UserCancelled,

    #[error("a folder named '{0}' already exists")]
    FolderExists(String),

    #[error(transparent)]
    Automation(#[from] crate::automation::AutomationError),

    #[error(transparent)]
    Process(#[from] crate::subprocess::ProcessError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Whether this error should abort the current action without surfacing
    /// anything to the user.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Error::UserCancelled)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

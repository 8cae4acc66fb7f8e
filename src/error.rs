use crate::models::job_status::JobStatus;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid status transition for job {id}: {from} -> {to}")]
    InvalidTransition {
        id: String,
        from: JobStatus,
        to: JobStatus,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    pub fn job_not_found(id: &str) -> Self {
        Error::NotFound(format!("Job posting {} not found", id))
    }

    /// Short label the presentation layer shows as the notification title.
    pub fn title(&self) -> &'static str {
        match self {
            Error::Validation(_) => "Missing information",
            Error::NotFound(_) => "Not found",
            Error::InvalidTransition { .. } => "Action not allowed",
            Error::Conflict(_) => "Conflict",
            Error::Config(_) | Error::Json(_) | Error::Anyhow(_) => "Error",
        }
    }
}

use sea_orm::DbErr;
use thiserror::Error;

pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error)]
pub enum HrError {
    /// The store rejected a statement: constraint violation, bad type, lost
    /// connection.
    #[error(transparent)]
    Query(#[from] DbErr),
    #[error("{0}")]
    InvalidInput(String),
    #[error("no {0} to choose from")]
    NoChoices(&'static str),
    /// The prompt stream reached end of input.
    #[error("input closed")]
    PromptClosed,
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] std::io::Error),
    #[error(transparent)]
    Connection(#[from] platform_db::DbError),
}

impl HrError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Errors a handler reports and then hands control back to the menu.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HrError::Query(_) | HrError::InvalidInput(_) | HrError::NoChoices(_)
        )
    }
}

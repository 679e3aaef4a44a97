use crate::session::SessionError;

use super::CommandResult;

#[derive(Debug, thiserror::Error)]
pub enum InterpretError {
    #[error("'{0}' not recognized")]
    NotRecognized(String),
    #[error("command '{0}' is incomplete")]
    Incomplete(String),
    #[error("command '{0}' is ambiguous")]
    Ambiguous(String),
    #[error("failed to open session: {0}")]
    Session(#[from] SessionError),
}

impl From<&InterpretError> for CommandResult {
    fn from(error: &InterpretError) -> Self {
        match error {
            InterpretError::NotRecognized(_) => CommandResult::Invalid,
            InterpretError::Incomplete(_) => CommandResult::Incomplete,
            InterpretError::Ambiguous(_) => CommandResult::Ambiguous,
            InterpretError::Session(_) => CommandResult::ExecutionFailed,
        }
    }
}

use thiserror::Error;

pub const INCOMPLETE_INPUT_MESSAGE: &str = "Please fill in all fields.";
pub const SIGNING_FAILED_MESSAGE: &str = "Failed to sign vote";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit vote, please try again later";

/// Everything that can stop a vote from reaching the server.
///
/// The `Display` output carries diagnostic detail for logs. What the voter
/// sees is [`CastError::user_message`], which never includes the cause.
#[derive(Error, Debug)]
pub enum CastError {
    #[error("Missing or invalid {field}")]
    IncompleteInput { field: &'static str },
    #[error("Invalid private key: {0:#}")]
    InvalidKey(anyhow::Error),
    #[error("Signing failed: {0:#}")]
    Signing(anyhow::Error),
    #[error("Transport failure: {0:#}")]
    Transport(anyhow::Error),
}

impl CastError {
    pub fn user_message(&self) -> &'static str {
        match self {
            CastError::IncompleteInput { .. } => INCOMPLETE_INPUT_MESSAGE,
            // Decode and sign are one step as far as the voter is concerned.
            CastError::InvalidKey(_) | CastError::Signing(_) => SIGNING_FAILED_MESSAGE,
            CastError::Transport(_) => SUBMIT_FAILED_MESSAGE,
        }
    }
}

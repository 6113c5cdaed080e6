use thiserror::Error;

/// The central error type for the katas library.
///
/// Every library operation fails in one way only: an argument that does not
/// satisfy its precondition. The remaining variants belong to the CLI layer.
#[derive(Error, Debug)]
pub enum KataError {
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KataError {
    /// Shorthand for [`KataError::InvalidArgument`].
    pub fn invalid(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        KataError::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, KataError::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, KataError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_INVALID_ARGUMENT: u8 = 3;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(kata_err) = e.downcast_ref::<KataError>() {
        return match kata_err {
            KataError::Config(_) => EXIT_CONFIG_ERROR,
            KataError::InvalidArgument { .. } | KataError::UnknownOperation(_) => {
                EXIT_INVALID_ARGUMENT
            }
            KataError::Other(inner) => get_exit_code(inner),
        };
    }

    // Errors that went through `.context(..)` keep the KataError in the chain
    for cause in e.chain() {
        if let Some(kata_err) = cause.downcast_ref::<KataError>() {
            return match kata_err {
                KataError::Config(_) => EXIT_CONFIG_ERROR,
                KataError::InvalidArgument { .. } | KataError::UnknownOperation(_) => {
                    EXIT_INVALID_ARGUMENT
                }
                KataError::Other(_) => EXIT_ERROR,
            };
        }
    }

    EXIT_ERROR
}

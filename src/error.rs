use thiserror::Error;

/// Errors reported by the solver.
///
/// Every variant is a caller-correctable input error; nothing in the crate
/// retries or recovers from them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaveError {
    /// A construction or stepping argument is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl WaveError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        WaveError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the offending argument.
    pub fn parameter(&self) -> &'static str {
        match self {
            WaveError::InvalidParameter { name, .. } => name,
        }
    }
}

pub type WaveResult<T> = Result<T, WaveError>;

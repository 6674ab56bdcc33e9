use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifierError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// A derivation was requested for a name that is not eligible for it.
    /// Callers are expected to check eligibility first.
    #[error("{identifier} {reason}")]
    InvalidArgument { identifier: String, reason: String },

    #[error("invalid knowledge base entry: {0}")]
    InvalidConfiguration(String),
}

impl ClassifierError {
    pub(crate) fn invalid_argument(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Offending identifier of an `InvalidArgument` error
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { identifier, .. } => Some(identifier.as_str()),
            Self::InvalidConfiguration(_) => None,
        }
    }
}

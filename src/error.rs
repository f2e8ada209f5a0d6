use thiserror::Error;

/// Errors raised while applying a modification to a document.
///
/// There are exactly two kinds. [`ModError::InvalidMod`] is always a caller
/// defect. [`ModError::TargetNotFound`] means the query was well-formed but
/// named a path that does not exist, and may be suppressed by the entry point
/// (see [`crate::ModifyOptions`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModError {
    /// Malformed query or a modification that cannot apply to the addressed node
    #[error("{0}")]
    InvalidMod(String),

    /// A path segment could not be resolved and carried no init hint
    #[error("Target {0} does not exist")]
    TargetNotFound(String),
}

pub type Result<T> = std::result::Result<T, ModError>;

impl ModError {
    /// Stable discriminator name, suitable for surfacing to remote callers.
    pub fn name(&self) -> &'static str {
        match self {
            ModError::InvalidMod(_) => "InvalidModError",
            ModError::TargetNotFound(_) => "ModTargetNotFoundError",
        }
    }

    /// HTTP status for callers that surface these errors directly.
    ///
    /// Both kinds are reported as server-side faults.
    pub fn status(&self) -> u16 {
        500
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ModError::TargetNotFound(_))
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ModError::InvalidMod(msg.into())
    }

    pub(crate) fn not_found(segment: &str) -> Self {
        ModError::TargetNotFound(segment.to_string())
    }
}

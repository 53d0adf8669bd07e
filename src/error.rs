use thiserror::Error;

/// Errors returned by the fallible operations of a [`List`].
///
/// A failing operation never touches the list, so the error can be ignored
/// safely.
///
/// [`List`]: crate::List
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// A position lies outside of `0..=len`.
    #[error("argument `{argument}` of `{operation}` is out of bounds: {position} is not in 0..={len}")]
    OutOfBounds {
        operation: &'static str,
        argument: &'static str,
        position: usize,
        len: usize,
    },
    /// A rotation amount lies outside of `-(len - 1)..=(len - 1)`.
    #[error("argument `rotation` of `rotate` describes a rotation that is not supported: {rotation} (list length {len})")]
    UnsupportedRotation { rotation: isize, len: usize },
}

impl ListError {
    /// The name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            ListError::OutOfBounds { operation, .. } => operation,
            ListError::UnsupportedRotation { .. } => "rotate",
        }
    }

    /// The name of the offending argument.
    pub fn argument(&self) -> &'static str {
        match self {
            ListError::OutOfBounds { argument, .. } => argument,
            ListError::UnsupportedRotation { .. } => "rotation",
        }
    }
}

pub type Result<T, E = ListError> = std::result::Result<T, E>;

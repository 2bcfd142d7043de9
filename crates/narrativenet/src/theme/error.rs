//! Theme preference errors.

use crate::root::RootUnavailable;
use crate::storage::StorageError;

use super::preference::ParsePreferenceError;

/// Error returned by [`ThemePreferenceStore`](super::ThemePreferenceStore).
///
/// None of these are fatal. Reads degrade to the initial default; a failed
/// root application is skipped. Only explicit string input and durable
/// writes surface an error to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A value outside `light`/`dark` was offered or found in the slot.
    #[error("invalid theme preference '{value}'")]
    InvalidPreferenceValue { value: String },
    /// There is no presentation root to apply markers to.
    #[error("presentation root is unavailable")]
    PresentationRootUnavailable,
    /// The persisted slot could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ParsePreferenceError> for ThemeError {
    fn from(err: ParsePreferenceError) -> Self {
        ThemeError::InvalidPreferenceValue { value: err.value }
    }
}

impl From<RootUnavailable> for ThemeError {
    fn from(_: RootUnavailable) -> Self {
        ThemeError::PresentationRootUnavailable
    }
}

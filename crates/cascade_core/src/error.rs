//! Action error types

use thiserror::Error;

/// Boxed error raised by a local effect.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure raised by an action's local effect.
///
/// The propagation machinery never creates one of these itself: it only
/// carries whatever an overridden [`do_action`](crate::Action::do_action)
/// raises. A failure anywhere in the reaction tree aborts the remaining
/// propagation of that [`act`](crate::Action::act) call.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ActionError(BoxedError);

impl ActionError {
    /// Wrap an effect failure.
    ///
    /// Accepts anything convertible into a boxed error, including plain
    /// message strings:
    ///
    /// ```rust
    /// use cascade_core::ActionError;
    ///
    /// let err = ActionError::new("disk full");
    /// assert_eq!(err.to_string(), "disk full");
    /// ```
    pub fn new<E>(err: E) -> Self
    where
        E: Into<BoxedError>,
    {
        Self(err.into())
    }

    /// Consume the wrapper and return the underlying error.
    pub fn into_inner(self) -> BoxedError {
        self.0
    }
}

/// Result type for action operations
pub type Result<T> = std::result::Result<T, ActionError>;

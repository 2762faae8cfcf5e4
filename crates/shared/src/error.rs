use thiserror::Error;

/// User-visible workflow failures. The display strings are shown to the
/// operator verbatim, so they must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Please select an item first.")]
    MissingSelection,
    #[error("Please enter a destination location.")]
    MissingLocation,
    #[error("The destination location is not allowed for this item. Please try again.")]
    LocationNotAllowed,
    #[error("Failed to submit the location. Please try again.")]
    SubmitFailed,
    #[error("A submission is already in progress. Please wait.")]
    SubmitInFlight,
}

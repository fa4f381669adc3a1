use thiserror::Error;

/// Why a completion request was refused. Messages are written for the
/// dashboard user, not the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("An appointment id is required")]
    MissingId,

    #[error("Open slots cannot be completed")]
    OpenSlot,

    #[error("Cancelled appointments cannot be completed")]
    Cancelled,

    #[error("This appointment is already completed")]
    AlreadyCompleted,

    #[error("Appointments can only be completed on their scheduled day")]
    NotToday,

    #[error("Appointment not found")]
    NotFound,

    #[error("The change could not be saved: {0}")]
    Backend(String),
}

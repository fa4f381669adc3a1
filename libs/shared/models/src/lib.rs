pub mod error;
pub mod record;
pub mod status;
pub mod temporal;

pub use error::CompletionError;
pub use record::{
    AppointmentRecord, RawAppointment, SlotKind, DEFAULT_VISIT_MINUTES, OPEN_SLOT_PATIENT_ID,
    OPEN_SLOT_PATIENT_NAME,
};
pub use status::VisitStatus;

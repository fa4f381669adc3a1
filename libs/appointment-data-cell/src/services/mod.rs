pub mod directory;
pub mod source;

pub use directory::AppointmentDirectory;
pub use source::RecordSource;

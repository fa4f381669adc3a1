use serde::{Deserialize, Serialize};
use shared_models::VisitStatus;

/// Optional status constraint forwarded to the backend on fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFilter {
    pub status: Option<VisitStatus>,
}

impl StatusFilter {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn only(status: VisitStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    pub fn is_any(&self) -> bool {
        self.status.is_none()
    }
}

use anyhow::Result;
use async_trait::async_trait;
use shared_models::RawAppointment;

use crate::models::StatusFilter;

/// Backend that owns the appointment store.
///
/// The directory treats it as opaque: rows come back in whatever shape the
/// upstream feed uses, and normalization happens on this side of the seam.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches every appointment row matching `filter`.
    async fn fetch(&self, filter: StatusFilter) -> Result<Vec<RawAppointment>>;

    /// Records a completion upstream.
    async fn mark_completed(&self, id: &str) -> Result<()>;
}

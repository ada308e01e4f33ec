use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::model::{Record, RecordId};

/// The store holding interview records and their notified state.
#[async_trait]
pub trait RecordSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads every record, fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be retrieved at all.
    async fn fetch_records(&self) -> Result<Vec<Record>, Self::Error>;

    /// Marks one record as notified at `at`. After this succeeds the
    /// record must read back with `already_notified == true`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record could not be updated.
    async fn mark_notified(&self, id: &RecordId, at: DateTime<Utc>) -> Result<(), Self::Error>;
}

#[async_trait]
impl<T> RecordSource for Arc<T>
where
    T: RecordSource + ?Sized,
{
    type Error = T::Error;

    async fn fetch_records(&self) -> Result<Vec<Record>, Self::Error> {
        (**self).fetch_records().await
    }

    async fn mark_notified(&self, id: &RecordId, at: DateTime<Utc>) -> Result<(), Self::Error> {
        (**self).mark_notified(id, at).await
    }
}

use std::sync::Arc;

use bson::oid::ObjectId;
use log::{debug, error};
use model::{errors::TrackerError, record::SessionRecord, summary::SummaryAggregate};
use storage::records::SessionRecords;

#[derive(Clone)]
pub struct Records {
    store: Arc<dyn SessionRecords>,
}

impl Records {
    pub fn new(store: Arc<dyn SessionRecords>) -> Self {
        Records { store }
    }

    /// Stores a new session. Store failures are logged and reported as
    /// [`TrackerError::InsertionFailure`]; an `Ok` always carries the new id.
    pub async fn insert(&self, record: &SessionRecord) -> Result<ObjectId, TrackerError> {
        match self.store.insert(record).await {
            Ok(id) => {
                debug!("inserted session record {}", id);
                Ok(id)
            }
            Err(err) => {
                error!("Failed to insert session record: {:#}", err);
                Err(TrackerError::InsertionFailure(err.to_string()))
            }
        }
    }

    pub async fn all(&self) -> Result<Vec<SessionRecord>, TrackerError> {
        self.store.all().await.map_err(TrackerError::from_store)
    }

    /// Totals over the whole store, or [`TrackerError::NoDataAvailable`]
    /// when the store is empty.
    pub async fn summary(&self) -> Result<SummaryAggregate, TrackerError> {
        self.store
            .summary()
            .await
            .map_err(TrackerError::from_store)?
            .ok_or(TrackerError::NoDataAvailable)
    }
}

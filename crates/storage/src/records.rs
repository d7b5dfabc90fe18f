use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use eyre::{eyre, Error};
use futures_util::TryStreamExt as _;
use model::{record::SessionRecord, summary::SummaryAggregate};
use mongodb::Collection;

const COLLECTION: &str = "yoga";

/// Append-only log of taught sessions.
#[async_trait]
pub trait SessionRecords: Send + Sync {
    async fn insert(&self, record: &SessionRecord) -> Result<ObjectId, Error>;

    /// Every record, newest date first.
    async fn all(&self) -> Result<Vec<SessionRecord>, Error>;

    /// `None` when there is nothing to aggregate.
    async fn summary(&self) -> Result<Option<SummaryAggregate>, Error>;
}

/// Single `$group` over a constant key. An empty collection yields no rows.
pub fn summary_pipeline() -> Vec<Document> {
    vec![doc! {
        "$group": {
            "_id": null,
            "total_minutes": { "$sum": "$duration_minutes" },
            "total_pay": { "$sum": "$pay" },
            "sessions": { "$sum": 1 },
            "total_students": { "$sum": "$students" },
        }
    }]
}

pub struct RecordStore {
    store: Collection<SessionRecord>,
}

impl RecordStore {
    pub(crate) fn new(db: &mongodb::Database) -> Self {
        let store = db.collection(COLLECTION);
        RecordStore { store }
    }
}

#[async_trait]
impl SessionRecords for RecordStore {
    async fn insert(&self, record: &SessionRecord) -> Result<ObjectId, Error> {
        let result = self.store.insert_one(record).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| eyre!("Inserted id is not an ObjectId: {}", result.inserted_id))
    }

    async fn all(&self) -> Result<Vec<SessionRecord>, Error> {
        let cursor = self.store.find(doc! {}).sort(doc! { "date": -1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn summary(&self) -> Result<Option<SummaryAggregate>, Error> {
        let mut cursor = self
            .store
            .aggregate(summary_pipeline())
            .with_type::<SummaryAggregate>()
            .await?;
        Ok(cursor.try_next().await?)
    }
}

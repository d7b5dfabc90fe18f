use async_trait::async_trait;
use bson::doc;
use eyre::Error;
use futures_util::TryStreamExt as _;
use model::class_type::ClassType;
use mongodb::Collection;

const COLLECTION: &str = "class_types";

#[async_trait]
pub trait ClassTypeCatalog: Send + Sync {
    async fn labels(&self) -> Result<Vec<String>, Error>;
}

pub struct ClassTypeStore {
    store: Collection<ClassType>,
}

impl ClassTypeStore {
    pub(crate) fn new(db: &mongodb::Database) -> Self {
        let store = db.collection(COLLECTION);
        ClassTypeStore { store }
    }
}

#[async_trait]
impl ClassTypeCatalog for ClassTypeStore {
    async fn labels(&self) -> Result<Vec<String>, Error> {
        let cursor = self
            .store
            .find(doc! {})
            .projection(doc! { "_id": 0, "type": 1 })
            .sort(doc! { "type": 1 })
            .await?;
        let entries: Vec<ClassType> = cursor.try_collect().await?;
        Ok(entries.into_iter().map(|entry| entry.label).collect())
    }
}

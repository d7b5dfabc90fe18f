use std::sync::Arc;

use log::warn;
use storage::class_types::ClassTypeCatalog;

#[derive(Clone)]
pub struct ClassTypes {
    catalog: Arc<dyn ClassTypeCatalog>,
}

impl ClassTypes {
    pub fn new(catalog: Arc<dyn ClassTypeCatalog>) -> Self {
        ClassTypes { catalog }
    }

    /// Labels in ascending order. Duplicates in the catalog are kept.
    /// Never fails: an unreadable catalog yields an empty list.
    pub async fn labels(&self) -> Vec<String> {
        match self.catalog.labels().await {
            Ok(mut labels) => {
                labels.sort();
                labels
            }
            Err(err) => {
                warn!("Failed to load class types: {:#}", err);
                Vec::new()
            }
        }
    }
}

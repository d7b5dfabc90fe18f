use std::sync::Arc;

use service::{class_types::ClassTypes, records::Records};
use storage::{class_types::ClassTypeCatalog, records::SessionRecords, Storage};

pub mod service;

/// Data access for the tracker: session records and the class-type catalog.
#[derive(Clone)]
pub struct Ledger {
    pub records: Records,
    pub class_types: ClassTypes,
}

impl Ledger {
    pub fn new(storage: Storage) -> Self {
        Ledger::with_stores(storage.records, storage.class_types)
    }

    pub fn with_stores(
        records: Arc<dyn SessionRecords>,
        class_types: Arc<dyn ClassTypeCatalog>,
    ) -> Self {
        Ledger {
            records: Records::new(records),
            class_types: ClassTypes::new(class_types),
        }
    }
}

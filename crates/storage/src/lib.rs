pub mod class_types;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod records;
pub mod session;

use std::sync::Arc;

use class_types::ClassTypeStore;
use records::RecordStore;
use session::Db;

#[derive(Clone)]
pub struct Storage {
    pub db: Db,
    pub records: Arc<RecordStore>,
    pub class_types: Arc<ClassTypeStore>,
}

impl Storage {
    pub fn new(db: Db) -> Self {
        let records = RecordStore::new(&db);
        let class_types = ClassTypeStore::new(&db);
        Storage {
            db,
            records: Arc::new(records),
            class_types: Arc::new(class_types),
        }
    }
}

//! In-process stores with the same contracts as the MongoDB ones.

use std::{
    io,
    sync::atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use bson::oid::ObjectId;
use eyre::Error;
use model::{record::SessionRecord, summary::SummaryAggregate};
use parking_lot::Mutex;

use crate::{class_types::ClassTypeCatalog, records::SessionRecords};

/// The driver error a dropped connection produces.
fn connection_refused() -> Error {
    mongodb::error::Error::from(io::Error::new(
        io::ErrorKind::ConnectionRefused,
        "no available servers",
    ))
    .into()
}

#[derive(Default)]
pub struct MemoryRecords {
    records: Mutex<Vec<SessionRecord>>,
    unreachable: AtomicBool,
}

impl MemoryRecords {
    pub fn new() -> Self {
        MemoryRecords::default()
    }

    /// Makes every call fail as if the server dropped the connection.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    fn check(&self) -> Result<(), Error> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(connection_refused());
        }
        Ok(())
    }
}

#[async_trait]
impl SessionRecords for MemoryRecords {
    async fn insert(&self, record: &SessionRecord) -> Result<ObjectId, Error> {
        self.check()?;
        self.records.lock().push(record.clone());
        Ok(record.id)
    }

    async fn all(&self) -> Result<Vec<SessionRecord>, Error> {
        self.check()?;
        let mut records = self.records.lock().clone();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    async fn summary(&self) -> Result<Option<SummaryAggregate>, Error> {
        self.check()?;
        let records = self.records.lock();
        if records.is_empty() {
            return Ok(None);
        }
        let mut agg = SummaryAggregate::default();
        for record in records.iter() {
            agg.total_minutes += record.duration_minutes as u64;
            agg.total_pay += record.pay;
            agg.sessions += 1;
            agg.total_students += record.students as u64;
        }
        Ok(Some(agg))
    }
}

#[derive(Default)]
pub struct MemoryClassTypes {
    labels: Mutex<Vec<String>>,
    unreachable: AtomicBool,
}

impl MemoryClassTypes {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemoryClassTypes {
            labels: Mutex::new(labels.into_iter().map(Into::into).collect()),
            unreachable: AtomicBool::new(false),
        }
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }
}

#[async_trait]
impl ClassTypeCatalog for MemoryClassTypes {
    /// Returned in insertion order, like an unsorted collection scan.
    async fn labels(&self) -> Result<Vec<String>, Error> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(connection_refused());
        }
        Ok(self.labels.lock().clone())
    }
}

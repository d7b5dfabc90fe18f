use std::ops::Deref;

use log::info;
use model::errors::TrackerError;
use mongodb::{options::ClientOptions, Client, Database};

/// Connection handle shared by every store.
///
/// Build it once per process and clone it. Building only parses the URI;
/// the driver connects on first use and pools connections behind the client,
/// so an unreachable server surfaces on each request, not here.
#[derive(Clone)]
pub struct Db {
    _client: Client,
    db: Database,
}

impl Db {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, TrackerError> {
        let options = ClientOptions::parse(uri).await.map_err(|err| {
            TrackerError::Configuration(format!("Invalid MongoDB connection URI: {}", err))
        })?;
        let client = Client::with_options(options).map_err(|err| {
            TrackerError::Configuration(format!("Invalid MongoDB client options: {}", err))
        })?;
        let db = client.database(db_name);
        info!("database handle ready for {}", db_name);
        Ok(Db {
            _client: client,
            db,
        })
    }
}

impl Deref for Db {
    type Target = Database;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}

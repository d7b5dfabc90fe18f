use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use dotenv::dotenv;
use log::info;
use model::errors::TrackerError;

const DEFAULT_DB_NAME: &str = "pam";
const DEFAULT_HOST: &str = "0.0.0.0:3000";
const DEFAULT_MONGO_USER: &str = "rc";

#[derive(Clone, Debug)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone, Debug)]
pub struct EnvInner {
    mongo_url: String,
    db_name: String,
    host: SocketAddr,
}

impl Env {
    pub fn mongo_url(&self) -> &str {
        &self.0.mongo_url
    }

    pub fn db_name(&self) -> &str {
        &self.0.db_name
    }

    pub fn host(&self) -> SocketAddr {
        self.0.host
    }

    /// Reads the process environment. Call [`load_dotenv`] first.
    pub fn load() -> Result<Env, TrackerError> {
        Env::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Env, TrackerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let db_name = var("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
        let mongo_url = match var("MONGO_URL").or_else(|| var("URI")) {
            Some(url) => url,
            None => {
                let password = var("MONGO_PASSWORD").ok_or_else(|| {
                    TrackerError::Configuration(
                        "MONGO_URL (or URI, or MONGO_PASSWORD with MONGO_HOST) is not set"
                            .to_string(),
                    )
                })?;
                let host = var("MONGO_HOST").ok_or_else(|| {
                    TrackerError::Configuration(
                        "MONGO_HOST is required with MONGO_PASSWORD".to_string(),
                    )
                })?;
                let user = var("MONGO_USER").unwrap_or_else(|| DEFAULT_MONGO_USER.to_string());
                format!("mongodb+srv://{}:{}@{}/{}", user, password, host, db_name)
            }
        };
        let host = var("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse::<SocketAddr>()
            .map_err(|err| TrackerError::Configuration(format!("HOST is invalid: {}", err)))?;

        Ok(Env(Arc::new(EnvInner {
            mongo_url,
            db_name,
            host,
        })))
    }
}

/// Result of reading `.env`, kept until the logger is up.
#[derive(Debug)]
pub enum DotenvOutcome {
    Loaded(PathBuf),
    Skipped(String),
}

impl DotenvOutcome {
    pub fn message(&self) -> String {
        match self {
            DotenvOutcome::Loaded(path) => format!("Loaded {}", path.display()),
            DotenvOutcome::Skipped(reason) => format!("Failed to load .env file: {}", reason),
        }
    }

    pub fn log(&self) {
        info!("{}", self.message());
    }
}

impl From<Result<PathBuf, dotenv::Error>> for DotenvOutcome {
    fn from(result: Result<PathBuf, dotenv::Error>) -> Self {
        match result {
            Ok(path) => DotenvOutcome::Loaded(path),
            Err(err) => DotenvOutcome::Skipped(err.to_string()),
        }
    }
}

/// Loads `.env` into the process environment without logging, so it can run
/// before the logger reads `RUST_LOG`.
pub fn load_dotenv() -> DotenvOutcome {
    DotenvOutcome::from(dotenv())
}

use std::env;
use std::path::PathBuf;

use crate::store::{Store, StoreError};

/// Location of the document store file.
///
/// Read from the `STORE_PATH` environment variable; defaults to
/// `data/classtrack.db` under the working directory.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            path: env::var("STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/classtrack.db")),
        }
    }

    pub fn open(&self) -> Result<Store, StoreError> {
        Store::open(&self.path)
    }
}

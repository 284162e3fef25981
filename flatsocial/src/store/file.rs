use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;
use tokio::fs;

use crate::{
    errors::RepoError,
    keys::{collection_path, staging_path},
    store::CollectionStore,
};

/// Collections stored as `<data_dir>/<collection>.json`.
///
/// Writes go to a hidden sibling file that is renamed over the target, so readers see
/// either the old or the new document. Nothing coordinates separate processes.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl CollectionStore for JsonFileStore {
    async fn read_document(&self, collection: &str) -> Result<Option<String>, RepoError> {
        let path = collection_path(&self.data_dir, collection);
        debug!("reading {}", path.display());
        match fs::read_to_string(&path).await {
            Ok(document) => Ok(Some(document)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(RepoError::storage(
                collection,
                format!("failed to read {}: {err}", path.display()),
            )),
        }
    }

    async fn write_document(&self, collection: &str, document: String) -> Result<(), RepoError> {
        let target = collection_path(&self.data_dir, collection);
        let staging = staging_path(&self.data_dir, collection);
        debug!("writing {}", target.display());

        fs::create_dir_all(&self.data_dir).await.map_err(|err| {
            RepoError::storage(
                collection,
                format!("failed to create {}: {err}", self.data_dir.display()),
            )
        })?;
        fs::write(&staging, document).await.map_err(|err| {
            RepoError::storage(collection, format!("failed to write {}: {err}", staging.display()))
        })?;
        fs::rename(&staging, &target).await.map_err(|err| {
            RepoError::storage(collection, format!("failed to replace {}: {err}", target.display()))
        })?;
        Ok(())
    }
}

use crate::domain::PointSet;
use crate::point_loader::factory::{MalformedDataError, from_json};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tracing::{info, instrument, warn};

#[instrument(fields(path = %path.as_ref().display()), skip_all)]
pub async fn load_point_set_from(path: impl AsRef<Path>) -> Result<PointSet, LoaderError> {
    let path = path.as_ref().to_path_buf();
    info!("📁 Loading points...");

    let content = fs::read_to_string(&path).await.map_err(|e| LoaderError::Io {
        source: e,
        path: path.clone(),
    })?;

    let parse_path = path.clone();
    let result = task::spawn_blocking(move || from_json(&content).map_err(|e| LoaderError::Malformed { source: e, path: parse_path })).await?;

    match &result {
        Ok(point_set) => info!("📁 Loading points... OK, loaded '{}' with {} point(s)", point_set.name(), point_set.len()),
        Err(err) => warn!("📁 Loading points... failed, {}", err),
    }
    result
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("malformed point data in '{}': {}", path.display(), source)]
    Malformed { source: MalformedDataError, path: PathBuf },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}

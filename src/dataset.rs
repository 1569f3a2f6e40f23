//! Dataset provider: reads the word table once and hands it to the main loop.

use crate::prelude::*;

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use wordfind_core::Dictionary;

/// Read a flat `{ "word": "definition" }` JSON object from `path`.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|err| Error::DatasetLoad {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    parse_dictionary(&content).map_err(|err| Error::DatasetLoad {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}

pub fn parse_dictionary(content: &str) -> Result<Dictionary> {
    Ok(serde_json::from_str(content)?)
}

/// Load `path` on a background thread and deliver the outcome exactly once
/// through `sender`, wrapped by `wrap`.
pub fn spawn_loader<T, F>(path: PathBuf, sender: Sender<T>, wrap: F) -> JoinHandle<Result<()>>
where
    T: Send + 'static,
    F: FnOnce(Result<Dictionary>) -> T + Send + 'static,
{
    thread::spawn(move || {
        let loaded = load_dictionary(&path);
        if let Ok(dictionary) = &loaded {
            log_debug!("Loaded {} words from {:?}", dictionary.len(), path);
        }
        sender.send(wrap(loaded)).map_err(|err| {
            log_handler_error!("Dataset", err);
            Error::SendError(err.to_string())
        })
    })
}

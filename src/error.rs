#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("SendError {0}")]
    SendError(String),
    #[error("NoSuchItem at ix {0}")]
    NoSuchItem(usize),
    #[error("DatasetLoad {path}: {reason}")]
    DatasetLoad { path: String, reason: String },

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Controller(#[from] wordfind_core::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

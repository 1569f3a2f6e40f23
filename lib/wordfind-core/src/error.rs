#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("dictionary already loaded ({0} entries)")]
    AlreadyLoaded(usize),
}

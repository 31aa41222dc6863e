use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZettelError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Note {0} is already at the top level")]
    AlreadyTopLevel(String),

    #[error("Identifier {0} is already in use")]
    IdInUse(String),

    #[error("Not a valid identifier: \"{0}\"")]
    InvalidId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ZettelError>;

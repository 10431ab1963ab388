use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Navigation controller is already active")]
    AlreadyActive,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error type for the terminal host.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermError {
    #[error("terminal io: {0}")]
    Io(#[from] std::io::Error),
}

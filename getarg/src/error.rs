use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("argument {index} is not valid UTF-8: {lossy}")]
    NotUnicode { index: usize, lossy: String },

    #[error("config line {line}: cannot parse '{text}'")]
    ConfigLine { line: usize, text: String },
}

pub type Result<T> = std::result::Result<T, Error>;

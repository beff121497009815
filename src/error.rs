use thiserror::Error;

#[derive(Error, Debug)]
pub enum TermFreqError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to read {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Accumulator Encoding Error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel Error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TermFreqError>;

impl TermFreqError {
    pub fn file(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        TermFreqError::File {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

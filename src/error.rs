use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CorpusError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("{what} not found at {}", path.display())]
    MissingResource { what: &'static str, path: PathBuf },
    #[error("MBROLA failed on {item} (exit code {code:?}): {output}")]
    Synthesis {
        item: String,
        code: Option<i32>,
        output: String,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Metadata snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Corpus is inconsistent: {0}")]
    Inconsistent(String),
}

impl From<derive_builder::UninitializedFieldError> for CorpusError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        CorpusError::Configuration(format!("missing option `{}`", e.field_name()))
    }
}

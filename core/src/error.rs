//! Buffer access failures.
//!
//! None of these are fatal: the synchronizer logs them and degrades to
//! "no prior annotation" or "skip this tick".

#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("failed to read text buffer: {0}")]
    Read(String),
    #[error("failed to write text buffer: {0}")]
    Write(String),
    #[error("failed to search text buffer: {0}")]
    Locate(#[from] aho_corasick::MatchError),
}

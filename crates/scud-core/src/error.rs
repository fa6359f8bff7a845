//! Error types for scud-core

use thiserror::Error;

/// Result type alias for scud operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the extraction engine
#[derive(Debug, Error)]
pub enum Error {
    /// A pattern set failed to compile. Can only happen at startup, never
    /// per message.
    #[error("pattern compilation failed: {0}")]
    Compile(#[from] aho_corasick::BuildError),

    /// The engine rejected a scan request. Distinct from "no match": the
    /// message could not be scanned at all and no partial span table
    /// should be trusted for it.
    #[error("pattern scan failed: {0}")]
    Scan(#[from] aho_corasick::MatchError),
}

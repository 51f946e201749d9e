use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// A required identifier was missing or empty. Surfaced to the sender;
    /// the directory is left untouched.
    #[error("room id is required")]
    InvalidRequest,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unknown test variant: {0}")]
    UnknownVariant(String),
}

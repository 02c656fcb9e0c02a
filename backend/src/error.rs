#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("unexpected error: [{0}]")]
    Unexpected(String),
    #[error("not found, id is {0}")]
    NotFound(i32),
    #[error("duplicate name, existing id is {0}")]
    Duplicate(i32),
}

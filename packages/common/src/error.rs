use doctree_dom::TreeError;
use thiserror::Error;

/// Common error type that can hold any doctree error
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Generic error: {0}")]
    Generic(String),
}

impl From<String> for CommonError {
    fn from(s: String) -> Self {
        CommonError::Generic(s)
    }
}

impl From<&str> for CommonError {
    fn from(s: &str) -> Self {
        CommonError::Generic(s.to_string())
    }
}

use crate::error::CommonError;

/// Result alias for fallible doctree operations
pub type CommonResult<T> = Result<T, CommonError>;

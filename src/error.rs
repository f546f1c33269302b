use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Nullable holds no value.")]
pub struct NullValueError;

pub type Result<T> = std::result::Result<T, NullValueError>;

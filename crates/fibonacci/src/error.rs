use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FibonacciError {
    #[error("input must be a non-negative integer (got {n})")]
    InvalidArgument { n: i64 },
}

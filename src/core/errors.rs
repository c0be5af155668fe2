use thiserror::Error;

// --- Element-wise ---

#[derive(Error, Debug)]
#[error("Vectors of length {lhs_len} and {rhs_len} cannot be combined element-wise.")]
pub(crate) struct LengthMismatchError {
    pub lhs_len: usize,
    pub rhs_len: usize,
}

// --- Index ---

#[derive(Error, Debug)]
#[error("Index {index} is out of range for vector of length {len}.")]
pub(crate) struct IndexOutOfRangeError {
    pub index: usize,
    pub len: usize,
}

// --- Logarithms ---

#[derive(Error, Debug)]
#[error("Logarithm is undefined for the non-positive element at index {index}.")]
pub(crate) struct LogDomainError {
    pub index: usize,
}

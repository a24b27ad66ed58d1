use crate::Shape;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Index Errors ===
    #[error("index '{index}' out of range({max_size}) in {op}")]
    IndexOutOfRange {
        max_size: usize,
        index: usize,
        op: &'static str,
    },

    #[error("{position} index {index} out of range in {len} len matrix")]
    MatrixIndexOutOfRange {
        len: usize,
        index: usize,
        position: &'static str,
    },

    // === Shape Errors ===
    #[error("unexpected element size in {op}, expected: {expected}, got: {got}")]
    ElementSizeMismatch {
        expected: usize,
        got: usize,
        op: &'static str,
    },

    #[error("shape mismatch in {op}, lhs: {lhs}, rhs: {rhs}")]
    ShapeMismatchBinaryOp {
        lhs: Shape,
        rhs: Shape,
        op: &'static str,
    },

    #[error("rand error because {0}")]
    Rand(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    #[error(transparent)]
    Core(#[from] mellow_core::Error),

    #[error("state variable {0} not found in {1}")]
    StateVariableNotFound(String, &'static str),

    #[error("state variable {0} declared twice")]
    DuplicateStateVariable(String),

    #[error("unit index {index} lies before column offset {offset} in {op}")]
    ColumnIndexUnderflow {
        index: usize,
        offset: usize,
        op: &'static str,
    },
}

pub type TrainResult<T> = std::result::Result<T, TrainError>;

mod shape;
mod dtype;
mod matrix;
mod error;

pub use shape::*;
pub use dtype::*;
pub use matrix::*;
pub use error::*;

pub mod optim;
pub mod schedule;
mod error;

pub use error::*;

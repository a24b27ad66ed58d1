mod state;
mod sgd;
mod momentum;
mod nesterov;
mod adam;
pub use state::*;
pub use sgd::*;
pub use momentum::*;
pub use nesterov::*;
pub use adam::*;

use mellow_core::{FloatDType, Matrix};
use crate::TrainResult;

/// A parameter update rule for one weight matrix.
///
/// Implementors only provide `step` and access to their [`OptimizerState`];
/// structural resizes come for free and cover every declared state variable.
pub trait Optimizer<T: FloatDType> {
    /// Consumes the gradient for step `step` and returns the delta to add to the weights.
    fn step(&mut self, step: usize, grad: &Matrix<T>) -> TrainResult<Matrix<T>>;

    fn state(&self) -> &OptimizerState<T>;

    fn state_mut(&mut self) -> &mut OptimizerState<T>;

    /// Mirrors a unit inserted at node `index` of the tracked layer.
    fn add_unit(&mut self, index: usize) -> TrainResult<()> {
        self.state_mut().add_unit(index)
    }

    /// Mirrors the unit at node `index` being removed from the tracked layer.
    fn del_unit(&mut self, index: usize) -> TrainResult<()> {
        self.state_mut().del_unit(index)
    }
}

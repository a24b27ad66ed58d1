use mellow_core::{FloatDType, Matrix};
use crate::schedule::{Constant, IntoSchedule, Schedule};
use crate::TrainResult;
use super::{Optimizer, OptimizerState};

/// Plain gradient descent, `delta = -lr(i) * g`. Keeps no state.
#[derive(Clone, Debug)]
pub struct Sgd<T: FloatDType, S = Constant<T>> {
    state: OptimizerState<T>,
    pub lr: S,
}

impl<T: FloatDType> Sgd<T> {
    pub fn new(input_count: usize) -> TrainResult<Self> {
        Self::with_lr(input_count, Constant(T::from_f64(0.01)))
    }
}

impl<T: FloatDType, S: Schedule<T>> Sgd<T, S> {
    pub fn with_lr<L>(input_count: usize, lr: L) -> TrainResult<Self>
    where
        L: IntoSchedule<T, Schedule = S>,
    {
        let state = OptimizerState::new(input_count, Vec::<String>::new())?;
        Ok(Self { state, lr: lr.into_schedule() })
    }
}

impl<T: FloatDType, S: Schedule<T>> Optimizer<T> for Sgd<T, S> {
    fn step(&mut self, step: usize, grad: &Matrix<T>) -> TrainResult<Matrix<T>> {
        Ok(grad * -self.lr.rate(step))
    }

    fn state(&self) -> &OptimizerState<T> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut OptimizerState<T> {
        &mut self.state
    }
}

#[cfg(test)]
mod test {
    use mellow_core::Matrix;
    use crate::optim::Optimizer;
    use super::Sgd;

    #[test]
    fn test_step() {
        let mut opt = Sgd::<f64, _>::with_lr(1, 0.5f64).unwrap();
        let grad = Matrix::new(&[[1., -2.], [4., 0.]]).unwrap();
        let delta = opt.step(0, &grad).unwrap();
        assert_eq!(delta.to_vec2(), vec![vec![-0.5, 1.], vec![-2., -0.]]);
    }

    #[test]
    fn test_resize_without_state() {
        let mut opt = Sgd::<f32>::new(3).unwrap();
        assert!(opt.state().is_empty());
        opt.add_unit(4).unwrap();
        opt.del_unit(4).unwrap();
        assert!(opt.add_unit(1).is_err());
    }
}

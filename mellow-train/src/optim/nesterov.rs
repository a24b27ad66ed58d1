use mellow_core::{FloatDType, Matrix};
use crate::schedule::{Constant, Schedule};
use crate::TrainResult;
use super::{MomentumConfig, Optimizer, OptimizerState, VELOCITY};

/// Nesterov accelerated momentum:
///
/// ```text
/// v = decay * v + g
/// delta = -lr(i) * (decay * v + g)
/// ```
#[derive(Clone, Debug)]
pub struct Nesterov<T: FloatDType, S = Constant<T>> {
    state: OptimizerState<T>,
    pub config: MomentumConfig<T, S>,
}

impl<T: FloatDType> Nesterov<T> {
    pub fn new(input_count: usize) -> TrainResult<Self> {
        Self::with_config(input_count, MomentumConfig::default())
    }
}

impl<T: FloatDType, S: Schedule<T>> Nesterov<T, S> {
    pub fn with_config(input_count: usize, config: MomentumConfig<T, S>) -> TrainResult<Self> {
        let state = OptimizerState::new(input_count, [VELOCITY])?;
        Ok(Self { state, config })
    }

    pub fn with_outputs(input_count: usize, output_count: usize, config: MomentumConfig<T, S>) -> TrainResult<Self> {
        let state = OptimizerState::with_outputs(input_count, output_count, [VELOCITY])?;
        Ok(Self { state, config })
    }

    pub fn velocity(&self) -> TrainResult<&Matrix<T>> {
        self.state.get(VELOCITY)
    }
}

impl<T: FloatDType, S: Schedule<T>> Optimizer<T> for Nesterov<T, S> {
    fn step(&mut self, step: usize, grad: &Matrix<T>) -> TrainResult<Matrix<T>> {
        self.state.fit(grad.shape());
        let lr = self.config.lr.rate(step);
        let decay = self.config.decay;

        let velocity = self.state.get_mut(VELOCITY)?;
        *velocity = (&*velocity * decay).add(grad)?;

        let lookahead = (&*velocity * decay).add(grad)?;
        Ok(&lookahead * -lr)
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
    use crate::optim::{Momentum, MomentumConfig, Optimizer};
    use super::Nesterov;

    fn scalar(v: f64) -> Matrix<f64> {
        Matrix::new(&[[v]]).unwrap()
    }

    #[test]
    fn test_step() {
        let config = MomentumConfig::<f64>::default().with_lr(0.1f64);
        let mut opt = Nesterov::with_outputs(0, 1, config).unwrap();

        let delta = opt.step(0, &scalar(2.0)).unwrap();
        assert!(opt.velocity().unwrap().allclose(&scalar(2.0), 1e-9, 1e-12));
        assert!(delta.allclose(&scalar(-0.38), 1e-9, 1e-12));

        let delta = opt.step(1, &scalar(1.0)).unwrap();
        assert!(opt.velocity().unwrap().allclose(&scalar(2.8), 1e-9, 1e-12));
        assert!(delta.allclose(&scalar(-0.352), 1e-9, 1e-12));
    }

    #[test]
    fn test_step_from_unsized_state() {
        let config = MomentumConfig::<f64>::default().with_lr(0.1f64);
        let mut opt = Nesterov::with_config(0, config).unwrap();

        let delta = opt.step(0, &scalar(2.0)).unwrap();
        assert!(delta.allclose(&scalar(-0.38), 1e-9, 1e-12));

        let delta = opt.step(1, &scalar(1.0)).unwrap();
        assert!(opt.velocity().unwrap().allclose(&scalar(2.8), 1e-9, 1e-12));
        assert!(delta.allclose(&scalar(-0.352), 1e-9, 1e-12));
        assert!(!opt.state().is_placeholder());
    }

    #[test]
    fn test_same_velocity_as_momentum() {
        let config = MomentumConfig::<f64>::default().with_lr(0.05f64).with_decay(0.8);
        let mut nesterov = Nesterov::with_outputs(2, 2, config.clone()).unwrap();
        let mut momentum = Momentum::with_outputs(2, 2, config).unwrap();

        for step in 0..5 {
            let grad = Matrix::<f64>::rand(-1., 1., (3, 2)).unwrap();
            let a = nesterov.step(step, &grad).unwrap();
            let b = momentum.step(step, &grad).unwrap();
            assert_eq!(nesterov.velocity().unwrap(), momentum.velocity().unwrap());

            let velocity = momentum.velocity().unwrap();
            assert!(b.allclose(&(velocity * -0.05), 1e-9, 1e-12));
            let expected = &(velocity * 0.8).add(&grad).unwrap() * -0.05;
            assert!(a.allclose(&expected, 1e-9, 1e-12));
        }
    }
}

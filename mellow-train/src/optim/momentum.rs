use mellow_core::{FloatDType, Matrix};
use crate::schedule::{Constant, IntoSchedule, Schedule};
use crate::TrainResult;
use super::{Optimizer, OptimizerState};

pub(crate) const VELOCITY: &str = "velocity";

#[derive(Clone, Debug)]
pub struct MomentumConfig<T: FloatDType, S = Constant<T>> {
    pub lr: S,
    pub decay: T,
}

impl<T: FloatDType> Default for MomentumConfig<T> {
    fn default() -> Self {
        Self {
            lr: Constant(T::from_f64(0.01)),
            decay: T::from_f64(0.9),
        }
    }
}

impl<T: FloatDType, S: Schedule<T>> MomentumConfig<T, S> {
    /// Replaces the learning rate; accepts a number or any `Fn(usize) -> T`.
    pub fn with_lr<L: IntoSchedule<T>>(self, lr: L) -> MomentumConfig<T, L::Schedule> {
        MomentumConfig { lr: lr.into_schedule(), decay: self.decay }
    }

    pub fn with_decay(mut self, decay: T) -> Self {
        self.decay = decay;
        self
    }
}

/// Classic momentum:
///
/// ```text
/// v = decay * v + g
/// delta = -lr(i) * v
/// ```
#[derive(Clone, Debug)]
pub struct Momentum<T: FloatDType, S = Constant<T>> {
    state: OptimizerState<T>,
    pub config: MomentumConfig<T, S>,
}

impl<T: FloatDType> Momentum<T> {
    pub fn new(input_count: usize) -> TrainResult<Self> {
        Self::with_config(input_count, MomentumConfig::default())
    }
}

impl<T: FloatDType, S: Schedule<T>> Momentum<T, S> {
    pub fn with_config(input_count: usize, config: MomentumConfig<T, S>) -> TrainResult<Self> {
        let state = OptimizerState::new(input_count, [VELOCITY])?;
        Ok(Self { state, config })
    }

    /// Starts with a `(input_count + 1, output_count)` zero velocity.
    pub fn with_outputs(input_count: usize, output_count: usize, config: MomentumConfig<T, S>) -> TrainResult<Self> {
        let state = OptimizerState::with_outputs(input_count, output_count, [VELOCITY])?;
        Ok(Self { state, config })
    }

    pub fn velocity(&self) -> TrainResult<&Matrix<T>> {
        self.state.get(VELOCITY)
    }
}

impl<T: FloatDType, S: Schedule<T>> Optimizer<T> for Momentum<T, S> {
    fn step(&mut self, step: usize, grad: &Matrix<T>) -> TrainResult<Matrix<T>> {
        self.state.fit(grad.shape());
        let lr = self.config.lr.rate(step);
        let decay = self.config.decay;

        let velocity = self.state.get_mut(VELOCITY)?;
        *velocity = (&*velocity * decay).add(grad)?;

        Ok(&*velocity * -lr)
    }

    fn state(&self) -> &OptimizerState<T> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut OptimizerState<T> {
        &mut self.state
    }
}

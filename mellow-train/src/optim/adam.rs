use mellow_core::{FloatDType, Matrix};
use crate::schedule::{Constant, IntoSchedule, Schedule};
use crate::TrainResult;
use super::{Optimizer, OptimizerState};

const FIRST_MOMENT: &str = "m";
const SECOND_MOMENT: &str = "v";

#[derive(Clone, Debug)]
pub struct AdamConfig<T: FloatDType, S = Constant<T>> {
    pub lr: S,
    pub beta1: T,
    pub beta2: T,
    pub eps: T,
}

impl<T: FloatDType> Default for AdamConfig<T> {
    fn default() -> Self {
        Self {
            lr: Constant(T::from_f64(0.001)),
            beta1: T::from_f64(0.9),
            beta2: T::from_f64(0.999),
            eps: T::from_f64(1e-8),
        }
    }
}

impl<T: FloatDType, S: Schedule<T>> AdamConfig<T, S> {
    pub fn with_lr<L: IntoSchedule<T>>(self, lr: L) -> AdamConfig<T, L::Schedule> {
        AdamConfig {
            lr: lr.into_schedule(),
            beta1: self.beta1,
            beta2: self.beta2,
            eps: self.eps,
        }
    }

    pub fn with_betas(mut self, beta1: T, beta2: T) -> Self {
        self.beta1 = beta1;
        self.beta2 = beta2;
        self
    }

    pub fn with_eps(mut self, eps: T) -> Self {
        self.eps = eps;
        self
    }
}

/// Adam with bias correction. The step index `i` is zero based, so the
/// correction uses `t = i + 1`.
#[derive(Clone, Debug)]
pub struct Adam<T: FloatDType, S = Constant<T>> {
    state: OptimizerState<T>,
    pub config: AdamConfig<T, S>,
}

impl<T: FloatDType> Adam<T> {
    pub fn new(input_count: usize) -> TrainResult<Self> {
        Self::with_config(input_count, AdamConfig::default())
    }
}

impl<T: FloatDType, S: Schedule<T>> Adam<T, S> {
    pub fn with_config(input_count: usize, config: AdamConfig<T, S>) -> TrainResult<Self> {
        let state = OptimizerState::new(input_count, [FIRST_MOMENT, SECOND_MOMENT])?;
        Ok(Self { state, config })
    }

    pub fn with_outputs(input_count: usize, output_count: usize, config: AdamConfig<T, S>) -> TrainResult<Self> {
        let state = OptimizerState::with_outputs(input_count, output_count, [FIRST_MOMENT, SECOND_MOMENT])?;
        Ok(Self { state, config })
    }

    pub fn first_moment(&self) -> TrainResult<&Matrix<T>> {
        self.state.get(FIRST_MOMENT)
    }

    pub fn second_moment(&self) -> TrainResult<&Matrix<T>> {
        self.state.get(SECOND_MOMENT)
    }
}

impl<T: FloatDType, S: Schedule<T>> Optimizer<T> for Adam<T, S> {
    fn step(&mut self, step: usize, grad: &Matrix<T>) -> TrainResult<Matrix<T>> {
        let lr = self.config.lr.rate(step);
        let beta1 = self.config.beta1;
        let beta2 = self.config.beta2;
        let one = T::one();
        let t = T::from_f64(step as f64 + 1.0);

        self.state.fit(grad.shape());
        let m = (self.first_moment()? * beta1).add(&(grad * (one - beta1)))?;
        let v = (self.second_moment()? * beta2).add(&(&grad.sqr() * (one - beta2)))?;

        let m_hat = &m / (one - beta1.powf(t));
        let v_hat = &v / (one - beta2.powf(t));
        let delta = &m_hat.div(&(&v_hat.sqrt() + self.config.eps))? * -lr;

        *self.state.get_mut(FIRST_MOMENT)? = m;
        *self.state.get_mut(SECOND_MOMENT)? = v;
        Ok(delta)
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
    use super::{Adam, AdamConfig};

    #[test]
    fn test_first_step_is_sign() {
        let config = AdamConfig::<f64>::default().with_lr(0.1f64).with_eps(0.0);
        let mut opt = Adam::with_outputs(1, 2, config).unwrap();
        let grad = Matrix::new(&[[3., -0.5], [1e-3, -7.]]).unwrap();

        // bias-corrected moments on the first step are g and g^2
        let delta = opt.step(0, &grad).unwrap();
        let expected = Matrix::new(&[[-0.1, 0.1], [-0.1, 0.1]]).unwrap();
        assert!(delta.allclose(&expected, 1e-9, 1e-12));

        assert!(opt.first_moment().unwrap().allclose(&(&grad * 0.1), 1e-9, 1e-12));
        assert!(opt.second_moment().unwrap().allclose(&(&grad.sqr() * 0.001), 1e-9, 1e-12));
    }

    #[test]
    fn test_second_step() {
        let config = AdamConfig::<f64>::default()
            .with_lr(0.01f64)
            .with_betas(0.5, 0.5)
            .with_eps(0.0);
        let mut opt = Adam::with_outputs(0, 1, config).unwrap();

        opt.step(0, &Matrix::new(&[[2.]]).unwrap()).unwrap();
        // m = 0.5 * 1 + 0.5 * 4 = 2.5, v = 0.5 * 2 + 0.5 * 16 = 9
        // m_hat = 2.5 / 0.75, v_hat = 9 / 0.75
        let delta = opt.step(1, &Matrix::new(&[[4.]]).unwrap()).unwrap();
        let expected = -0.01 * (2.5 / 0.75) / (9.0f64 / 0.75).sqrt();
        assert!((delta.get(0, 0).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_first_step_without_outputs() {
        let mut opt = Adam::<f64>::new(1).unwrap();
        let grad = Matrix::new(&[[2., -2.], [0.5, -0.5]]).unwrap();

        let delta = opt.step(0, &grad).unwrap();
        let expected = Matrix::new(&[[-0.001, 0.001], [-0.001, 0.001]]).unwrap();
        assert!(delta.allclose(&expected, 1e-6, 1e-9));
        assert_eq!(opt.first_moment().unwrap().dims(), (2, 2));
        assert_eq!(opt.second_moment().unwrap().dims(), (2, 2));
    }

    #[test]
    fn test_step_index_past_i32() {
        let config = AdamConfig::<f64>::default().with_lr(0.1f64).with_eps(0.0);
        let mut opt = Adam::with_outputs(0, 2, config).unwrap();
        let step = i32::MAX as usize + 1;

        // both bias corrections are 1 this far out
        let delta = opt.step(step, &Matrix::new(&[[4., -4.]]).unwrap()).unwrap();
        let expected = -0.1 * 0.4 / 0.016f64.sqrt();
        assert!((delta.get(0, 0).unwrap() - expected).abs() < 1e-9);
        assert!((delta.get(0, 1).unwrap() + expected).abs() < 1e-9);
    }

    #[test]
    fn test_resize_both_moments() {
        let mut opt = Adam::<f64>::new(1).unwrap();
        opt.add_unit(2).unwrap();
        opt.step(0, &Matrix::ones((3, 1))).unwrap();
        opt.add_unit(2).unwrap();

        for moment in [opt.first_moment().unwrap(), opt.second_moment().unwrap()] {
            assert_eq!(moment.dims(), (4, 2));
            assert_eq!(moment.row(2).unwrap(), &[0., 0.]);
            assert_eq!(moment.get(0, 0).unwrap(), 0.);
            assert!(moment.get(0, 1).unwrap() > 0.);
        }
    }
}

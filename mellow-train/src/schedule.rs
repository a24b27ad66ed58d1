//! Learning rate schedules.
//!
//! Anything callable as `Fn(usize) -> T` is a schedule. Plain numbers are
//! adapted into a [`Constant`] schedule by [`init_schedule`].

/// Maps a training step index to a learning rate.
pub trait Schedule<T> {
    fn rate(&self, step: usize) -> T;
}

impl<T, F> Schedule<T> for F
where
    F: Fn(usize) -> T,
{
    fn rate(&self, step: usize) -> T {
        self(step)
    }
}

/// A schedule that ignores the step index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constant<T>(pub T);

impl<T: Copy> Schedule<T> for Constant<T> {
    fn rate(&self, _step: usize) -> T {
        self.0
    }
}

/// Values accepted wherever a learning rate is configured.
pub trait IntoSchedule<T> {
    type Schedule: Schedule<T>;

    fn into_schedule(self) -> Self::Schedule;
}

impl<T, F> IntoSchedule<T> for F
where
    F: Fn(usize) -> T,
{
    type Schedule = F;

    fn into_schedule(self) -> F {
        self
    }
}

impl<T: Copy> IntoSchedule<T> for Constant<T> {
    type Schedule = Self;

    fn into_schedule(self) -> Self {
        self
    }
}

macro_rules! impl_into_schedule_for_float {
    ($($t:ty),*) => {
        $(
            impl IntoSchedule<$t> for $t {
                type Schedule = Constant<$t>;

                fn into_schedule(self) -> Constant<$t> {
                    Constant(self)
                }
            }
        )*
    };
}

impl_into_schedule_for_float!(f32, f64);

/// Declares a learning rate schedule: numbers become [`Constant`], callables pass through unchanged.
///
/// ```rust
/// use mellow_train::schedule::{init_schedule, Schedule};
///
/// let fixed = init_schedule::<f64, _>(0.1);
/// assert_eq!(fixed.rate(0), 0.1);
/// assert_eq!(fixed.rate(100), 0.1);
///
/// let halving = init_schedule::<f64, _>(|step: usize| 1.0 / (1u64 << step) as f64);
/// assert_eq!(halving.rate(3), 0.125);
/// ```
pub fn init_schedule<T, L: IntoSchedule<T>>(lr: L) -> L::Schedule {
    lr.into_schedule()
}

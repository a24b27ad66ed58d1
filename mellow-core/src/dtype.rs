use approx::relative_eq;

/// Element types a [`crate::Matrix`] can hold.
pub trait FloatDType:
    Sized
    + Copy
    + std::cmp::PartialOrd
    + std::cmp::PartialEq
    + std::fmt::Display
    + std::fmt::Debug
    + num_traits::Float
    + rand::distr::uniform::SampleUniform
    + std::iter::Sum
    + std::ops::AddAssign
    + std::ops::SubAssign
    + std::ops::MulAssign
    + std::ops::DivAssign
    + 'static
    + Send
    + Sync
{
    const NAME: &'static str;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;
    fn close(self, other: Self, rtol: f64, atol: f64) -> bool;
}

macro_rules! impl_float_dtype {
    ($($t:ty => $name:literal),*) => {
        $(
            impl FloatDType for $t {
                const NAME: &'static str = $name;

                fn from_f64(v: f64) -> Self {
                    v as $t
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn close(self, other: Self, rtol: f64, atol: f64) -> bool {
                    relative_eq!(self, other, epsilon = atol as $t, max_relative = rtol as $t)
                }
            }
        )*
    };
}

impl_float_dtype!(f32 => "float32", f64 => "float64");

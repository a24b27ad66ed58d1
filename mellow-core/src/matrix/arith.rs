use paste::paste;
use crate::{Error, FloatDType, Result, Shape};
use super::Matrix;

impl<T: FloatDType> Matrix<T> {
    fn same_shape_binary_op(&self, rhs: &Self, op: &'static str) -> Result<Shape> {
        let lhs = self.shape();
        let rhs = rhs.shape();
        if lhs != rhs {
            Err(Error::ShapeMismatchBinaryOp { lhs, rhs, op })
        } else {
            Ok(lhs)
        }
    }

    /// Applies `f` to every element.
    pub fn map<F: FnMut(T) -> T>(&self, f: F) -> Self {
        Self::from_parts(self.data.iter().copied().map(f).collect(), self.shape)
    }

    /// Combines two equally shaped matrices element by element.
    pub fn zip_map<F>(&self, rhs: &Self, mut f: F, op: &'static str) -> Result<Self>
    where
        F: FnMut(T, T) -> T,
    {
        let shape = self.same_shape_binary_op(rhs, op)?;
        let data = self.data.iter()
            .zip(rhs.data.iter())
            .map(|(&l, &r)| f(l, r))
            .collect();
        Ok(Self::from_parts(data, shape))
    }
}

macro_rules! binary_op_impl {
    ($($fn_name:ident => $op:tt),*) => {
        impl<T: FloatDType> Matrix<T> {
            $(
                pub fn $fn_name(&self, rhs: &Self) -> Result<Self> {
                    self.zip_map(rhs, |l, r| l $op r, stringify!($fn_name))
                }

                paste! {
                    pub fn [< $fn_name _scalar >](&self, rhs: T) -> Self {
                        self.map(|v| v $op rhs)
                    }

                    pub fn [< $fn_name _ >](&mut self, rhs: &Self) -> Result<&mut Self> {
                        self.same_shape_binary_op(rhs, stringify!([< $fn_name _ >]))?;
                        for (l, &r) in self.data.iter_mut().zip(rhs.data.iter()) {
                            *l = *l $op r;
                        }
                        Ok(self)
                    }
                }
            )*
        }
    };
}

binary_op_impl!(add => +, sub => -, mul => *, div => /);

macro_rules! scalar_op_trait_impl {
    ($($trait:ident :: $fn_name:ident),*) => {
        $(
            impl<T: FloatDType> std::ops::$trait<T> for &Matrix<T> {
                type Output = Matrix<T>;

                fn $fn_name(self, rhs: T) -> Matrix<T> {
                    paste! { self.[< $fn_name _scalar >](rhs) }
                }
            }
        )*
    };
}

// Operators live on `&Matrix` only; owned receivers resolve to the fallible inherent methods.
scalar_op_trait_impl!(Add::add, Sub::sub, Mul::mul, Div::div);

impl<T: FloatDType> std::ops::Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|v| -v)
    }
}

impl<T: FloatDType> std::ops::Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -&self
    }
}

impl<T: FloatDType> Matrix<T> {
    /// `self * mul + add`, element-wise.
    pub fn affine(&self, mul: T, add: T) -> Self {
        self.map(|v| v * mul + add)
    }

    pub fn sqr(&self) -> Self {
        self.map(|v| v * v)
    }

    pub fn sqrt(&self) -> Self {
        self.map(|v| v.sqrt())
    }

    pub fn sum_all(&self) -> T {
        self.data.iter().copied().sum()
    }

    /// Element-wise approximate equality; shapes must match exactly.
    pub fn allclose(&self, other: &Self, rtol: f64, atol: f64) -> bool {
        self.shape == other.shape
            && self.data.iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| a.close(b, rtol, atol))
    }
}

use rand::distr::{Distribution, Uniform};
use crate::{Error, FloatDType, Result, Shape};
use super::Matrix;

/// Sources a [`Matrix`] can be built from.
pub trait ToMatrix<T: FloatDType> {
    fn shape(&self) -> Result<Shape>;
    fn to_vec(self) -> Vec<T>;
}

impl<T: FloatDType, const R: usize, const C: usize> ToMatrix<T> for [[T; C]; R] {
    fn shape(&self) -> Result<Shape> {
        Ok(Shape::new(R, C))
    }

    fn to_vec(self) -> Vec<T> {
        self.into_iter().flatten().collect()
    }
}

impl<T: FloatDType, const R: usize, const C: usize> ToMatrix<T> for &[[T; C]; R] {
    fn shape(&self) -> Result<Shape> {
        Ok(Shape::new(R, C))
    }

    fn to_vec(self) -> Vec<T> {
        self.iter().flatten().copied().collect()
    }
}

impl<T: FloatDType> ToMatrix<T> for Vec<Vec<T>> {
    fn shape(&self) -> Result<Shape> {
        let rows = self.len();
        let cols = self.first().map(Vec::len).unwrap_or(0);
        for row in self.iter() {
            if row.len() != cols {
                return Err(Error::ElementSizeMismatch { expected: cols, got: row.len(), op: "new" });
            }
        }
        Ok(Shape::new(rows, cols))
    }

    fn to_vec(self) -> Vec<T> {
        self.into_iter().flatten().collect()
    }
}

impl<T: FloatDType> Matrix<T> {
    /// Creates a new `Matrix` from a nested array or nested `Vec`.
    ///
    /// ```rust
    /// use mellow_core::Matrix;
    ///
    /// let a = Matrix::new(&[[1f32, 2.], [3., 4.]]).unwrap();
    /// assert_eq!(a.dims(), (2, 2));
    /// ```
    pub fn new<A: ToMatrix<T>>(array: A) -> Result<Self> {
        let shape = array.shape()?;
        Ok(Self::from_parts(array.to_vec(), shape))
    }

    /// Creates a matrix from row-major `data`.
    ///
    /// ```rust
    /// use mellow_core::Matrix;
    ///
    /// let a = Matrix::from_vec(vec![1f64, 2., 3., 4., 5., 6.], (2, 3)).unwrap();
    /// assert_eq!(a.get(1, 0).unwrap(), 4.);
    /// assert!(Matrix::from_vec(vec![1f64, 2.], (2, 3)).is_err());
    /// ```
    pub fn from_vec<V: Into<Vec<T>>, S: Into<Shape>>(data: V, shape: S) -> Result<Self> {
        let data = data.into();
        let shape = shape.into();
        if data.len() != shape.element_count() {
            return Err(Error::ElementSizeMismatch {
                expected: shape.element_count(),
                got: data.len(),
                op: "from_vec",
            });
        }
        Ok(Self::from_parts(data, shape))
    }

    /// Creates a matrix full with a constant `value`.
    pub fn full<S: Into<Shape>>(shape: S, value: T) -> Self {
        let shape = shape.into();
        Self::from_parts(vec![value; shape.element_count()], shape)
    }

    /// Creates a matrix of zeros with the given shape.
    ///
    /// ```rust
    /// use mellow_core::Matrix;
    ///
    /// let a = Matrix::<f32>::zeros((4, 0));
    /// assert_eq!(a.dims(), (4, 0));
    /// ```
    pub fn zeros<S: Into<Shape>>(shape: S) -> Self {
        Self::full(shape, T::zero())
    }

    pub fn ones<S: Into<Shape>>(shape: S) -> Self {
        Self::full(shape, T::one())
    }

    pub fn zeros_like(&self) -> Self {
        Self::zeros(self.shape())
    }

    /// Creates a matrix with values drawn uniformly from `[min, max)`.
    pub fn rand<S: Into<Shape>>(min: T, max: T, shape: S) -> Result<Self> {
        let shape = shape.into();
        let dist = Uniform::new(min, max).map_err(|e| Error::Rand(e.to_string()))?;
        let mut rng = rand::rng();
        let data = (0..shape.element_count())
            .map(|_| dist.sample(&mut rng))
            .collect();
        Ok(Self::from_parts(data, shape))
    }
}

#[cfg(test)]
mod test {
    use crate::Matrix;

    #[test]
    fn test_new() {
        let a = Matrix::new([[1f64, 2.], [3., 4.], [5., 6.]]).unwrap();
        assert_eq!(a.dims(), (3, 2));
        assert_eq!(a.data(), &[1., 2., 3., 4., 5., 6.]);

        let b = Matrix::new(vec![vec![1f32, 2.], vec![3., 4.]]).unwrap();
        assert_eq!(b.dims(), (2, 2));

        let ragged = Matrix::new(vec![vec![1f32, 2.], vec![3.]]);
        assert!(ragged.is_err());

        let empty = Matrix::<f64>::new(Vec::<Vec<f64>>::new()).unwrap();
        assert_eq!(empty.dims(), (0, 0));
    }

    #[test]
    fn test_full() {
        let a = Matrix::full((2, 2), 7f32);
        assert!(a.data().iter().all(|&v| v == 7.));

        let z = a.zeros_like();
        assert_eq!(z.shape(), a.shape());
        assert!(z.data().iter().all(|&v| v == 0.));

        let o = Matrix::<f64>::ones((1, 3));
        assert_eq!(o.data(), &[1., 1., 1.]);
    }

    #[test]
    fn test_rand() {
        let a = Matrix::<f64>::rand(-1., 1., (5, 4)).unwrap();
        assert_eq!(a.dims(), (5, 4));
        assert!(a.data().iter().all(|&v| (-1. ..1.).contains(&v)));

        assert!(Matrix::<f64>::rand(1., 1., (2, 2)).is_err());
    }
}

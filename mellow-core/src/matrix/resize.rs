use crate::{Error, FloatDType, Result};
use super::Matrix;

impl<T: FloatDType> Matrix<T> {
    /// Returns a copy with an all-zero row inserted before `index`.
    ///
    /// `index == rows` appends; anything larger is an error.
    ///
    /// ```rust
    /// use mellow_core::Matrix;
    ///
    /// let a = Matrix::new(&[[1f32, 2.], [3., 4.]]).unwrap();
    /// let b = a.insert_zero_row(1).unwrap();
    /// assert_eq!(b.to_vec2(), vec![vec![1., 2.], vec![0., 0.], vec![3., 4.]]);
    /// ```
    pub fn insert_zero_row(&self, index: usize) -> Result<Self> {
        let (rows, cols) = self.dims();
        if index > rows {
            return Err(Error::IndexOutOfRange { max_size: rows + 1, index, op: "insert_zero_row" });
        }

        let split = index * cols;
        let mut data = Vec::with_capacity((rows + 1) * cols);
        data.extend_from_slice(&self.data[..split]);
        data.extend(std::iter::repeat(T::zero()).take(cols));
        data.extend_from_slice(&self.data[split..]);
        Ok(Self::from_parts(data, (rows + 1, cols)))
    }

    /// Returns a copy with an all-zero column inserted before `index`.
    ///
    /// ```rust
    /// use mellow_core::Matrix;
    ///
    /// let a = Matrix::<f64>::zeros((2, 0));
    /// let b = a.insert_zero_col(0).unwrap();
    /// assert_eq!(b.dims(), (2, 1));
    /// assert!(a.insert_zero_col(1).is_err());
    /// ```
    pub fn insert_zero_col(&self, index: usize) -> Result<Self> {
        let (rows, cols) = self.dims();
        if index > cols {
            return Err(Error::IndexOutOfRange { max_size: cols + 1, index, op: "insert_zero_col" });
        }

        let mut data = Vec::with_capacity(rows * (cols + 1));
        for row in self.iter_rows() {
            data.extend_from_slice(&row[..index]);
            data.push(T::zero());
            data.extend_from_slice(&row[index..]);
        }
        Ok(Self::from_parts(data, (rows, cols + 1)))
    }

    /// Returns a copy without the row at `index`.
    pub fn remove_row(&self, index: usize) -> Result<Self> {
        let (rows, cols) = self.dims();
        if index >= rows {
            return Err(Error::IndexOutOfRange { max_size: rows, index, op: "remove_row" });
        }

        let mut data = Vec::with_capacity((rows - 1) * cols);
        data.extend_from_slice(&self.data[..index * cols]);
        data.extend_from_slice(&self.data[(index + 1) * cols..]);
        Ok(Self::from_parts(data, (rows - 1, cols)))
    }

    /// Returns a copy without the column at `index`.
    pub fn remove_col(&self, index: usize) -> Result<Self> {
        let (rows, cols) = self.dims();
        if index >= cols {
            return Err(Error::IndexOutOfRange { max_size: cols, index, op: "remove_col" });
        }

        let mut data = Vec::with_capacity(rows * (cols - 1));
        for row in self.iter_rows() {
            data.extend_from_slice(&row[..index]);
            data.extend_from_slice(&row[index + 1..]);
        }
        Ok(Self::from_parts(data, (rows, cols - 1)))
    }
}

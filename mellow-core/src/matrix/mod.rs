mod construct;
mod resize;
mod arith;
mod display;

pub use construct::ToMatrix;
use crate::{Error, FloatDType, Result, Shape};

/// Dense, row-major 2-D matrix.
#[derive(Clone, PartialEq)]
pub struct Matrix<T: FloatDType> {
    data: Vec<T>,
    shape: Shape,
}

impl<T: FloatDType> Matrix<T> {
    pub(crate) fn from_parts<S: Into<Shape>>(data: Vec<T>, shape: S) -> Self {
        let shape = shape.into();
        debug_assert_eq!(data.len(), shape.element_count());
        Self { data, shape }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn dims(&self) -> (usize, usize) {
        self.shape.dims()
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    pub fn element_count(&self) -> usize {
        self.shape.element_count()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Row-major view of all elements.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let (rows, cols) = self.dims();
        if row >= rows {
            return Err(Error::MatrixIndexOutOfRange { len: rows, index: row, position: "row" });
        }
        if col >= cols {
            return Err(Error::MatrixIndexOutOfRange { len: cols, index: col, position: "col" });
        }
        Ok(self.data[row * cols + col])
    }

    pub fn row(&self, row: usize) -> Result<&[T]> {
        let (rows, cols) = self.dims();
        if row >= rows {
            return Err(Error::MatrixIndexOutOfRange { len: rows, index: row, position: "row" });
        }
        Ok(&self.data[row * cols..(row + 1) * cols])
    }

    /// Iterates rows as slices; yields `rows` empty slices when there are no columns.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        let cols = self.cols();
        (0..self.rows()).map(move |r| &self.data[r * cols..(r + 1) * cols])
    }

    pub fn to_vec2(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }
}

#[cfg(test)]
mod test {
    use crate::Matrix;

    #[test]
    fn test_accessors() {
        let m = Matrix::new(&[
            [1f64, 2., 3.],
            [4., 5., 6.],
        ]).unwrap();

        assert_eq!(m.dims(), (2, 3));
        assert_eq!(m.get(1, 2).unwrap(), 6.);
        assert_eq!(m.row(0).unwrap(), &[1., 2., 3.]);
        assert!(m.get(2, 0).is_err());
        assert!(m.get(0, 3).is_err());
        assert!(m.row(2).is_err());
        assert_eq!(m.to_vec2(), vec![vec![1., 2., 3.], vec![4., 5., 6.]]);
    }

    #[test]
    fn test_empty_columns() {
        let m = Matrix::<f32>::zeros((3, 0));
        assert!(m.is_empty());
        assert_eq!(m.iter_rows().count(), 3);
        assert!(m.iter_rows().all(|row| row.is_empty()));
    }
}

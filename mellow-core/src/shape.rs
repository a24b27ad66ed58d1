/// Dimensions of a dense 2-D matrix, rows first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn element_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl From<Shape> for (usize, usize) {
    fn from(shape: Shape) -> Self {
        shape.dims()
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.rows, self.cols)
    }
}

#[cfg(test)]
mod test {
    use super::Shape;

    #[test]
    fn test_shape() {
        let shape: Shape = (3, 0).into();
        assert_eq!(shape.dims(), (3, 0));
        assert_eq!(shape.element_count(), 0);
        assert!(shape.is_empty());
        assert_eq!(shape.to_string(), "[3, 0]");

        let shape = Shape::new(2, 4);
        assert_eq!(shape.rows(), 2);
        assert_eq!(shape.cols(), 4);
        assert!(!shape.is_empty());
    }
}

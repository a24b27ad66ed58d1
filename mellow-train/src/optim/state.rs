use mellow_core::{FloatDType, Matrix, Shape};
use crate::{TrainError, TrainResult};

/// Named state matrices of an optimizer, kept shaped like the weights they track.
///
/// Weights are laid out by node: rows are indexed by source node (bias, inputs,
/// then units) and columns by unit. A unit with node index `i` therefore owns
/// row `i` and column `i - column_offset()`, where the offset is the bias row
/// plus the input rows.
///
/// State built with [`OptimizerState::new`] is a placeholder until it is first
/// resized or first sees a gradient; a gradient gives it its shape as zeros.
#[derive(Clone, Debug)]
pub struct OptimizerState<T: FloatDType> {
    bias_rows: usize,
    vars: Vec<(String, Matrix<T>)>,
    placeholder: bool,
}

impl<T: FloatDType> OptimizerState<T> {
    /// Every variable starts as a `(input_count + 1, 0)` zero placeholder. It grows
    /// with `add_unit`, or takes the shape of the first gradient passed to `fit`.
    pub fn new<I, S>(input_count: usize, names: I) -> TrainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::with_outputs(input_count, 0, names)?;
        state.placeholder = true;
        Ok(state)
    }

    pub fn with_outputs<I, S>(input_count: usize, output_count: usize, names: I) -> TrainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_shape(input_count, (input_count + 1, output_count), names)
    }

    /// Zero state for a layer whose weights already have `shape`.
    pub fn with_shape<I, S, Sh>(input_count: usize, shape: Sh, names: I) -> TrainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        let mut vars: Vec<(String, Matrix<T>)> = vec![];
        for name in names {
            let name = name.into();
            if vars.iter().any(|(n, _)| *n == name) {
                return Err(TrainError::DuplicateStateVariable(name));
            }
            vars.push((name, Matrix::zeros(shape)));
        }

        Ok(Self { bias_rows: input_count + 1, vars, placeholder: false })
    }

    pub fn input_count(&self) -> usize {
        self.bias_rows - 1
    }

    /// Distance between a node index and its column: inputs plus the bias row.
    pub fn column_offset(&self) -> usize {
        self.bias_rows
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.vars.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Matrix<T>)> + '_ {
        self.vars.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Shared shape of all variables, `None` for a stateless rule.
    pub fn shape(&self) -> Option<Shape> {
        self.vars.first().map(|(_, value)| value.shape())
    }

    /// True until the state has been resized or fitted to a gradient.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Replaces a placeholder state with zeros of `shape`; sized state is left alone.
    pub fn fit(&mut self, shape: Shape) {
        if !self.placeholder {
            return;
        }
        for (_, value) in self.vars.iter_mut() {
            *value = Matrix::zeros(shape);
        }
        self.placeholder = false;

        log::trace!("fit placeholder state to {}", shape);
    }

    pub fn get(&self, name: &str) -> TrainResult<&Matrix<T>> {
        self.vars
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
            .ok_or_else(|| TrainError::StateVariableNotFound(name.to_string(), "get"))
    }

    pub fn get_mut(&mut self, name: &str) -> TrainResult<&mut Matrix<T>> {
        self.vars
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
            .ok_or_else(|| TrainError::StateVariableNotFound(name.to_string(), "get_mut"))
    }

    fn column_index(&self, index: usize, op: &'static str) -> TrainResult<usize> {
        index
            .checked_sub(self.bias_rows)
            .ok_or(TrainError::ColumnIndexUnderflow { index, offset: self.bias_rows, op })
    }

    /// Inserts a zero row at `index` and a zero column at `index - column_offset()`
    /// into every variable.
    ///
    /// Either every variable is resized or, on error, none is.
    pub fn add_unit(&mut self, index: usize) -> TrainResult<()> {
        let col = self.column_index(index, "add_unit")?;
        let grown = self.vars
            .iter()
            .map(|(_, value)| value.insert_zero_row(index).and_then(|m| m.insert_zero_col(col)))
            .collect::<mellow_core::Result<Vec<_>>>()?;
        self.replace_all(grown);

        log::trace!("add_unit index={} col={} shape={:?}", index, col, self.shape());
        Ok(())
    }

    /// Removes row `index` and column `index - column_offset()` from every variable.
    ///
    /// Either every variable is resized or, on error, none is.
    pub fn del_unit(&mut self, index: usize) -> TrainResult<()> {
        let col = self.column_index(index, "del_unit")?;
        let shrunk = self.vars
            .iter()
            .map(|(_, value)| value.remove_row(index).and_then(|m| m.remove_col(col)))
            .collect::<mellow_core::Result<Vec<_>>>()?;
        self.replace_all(shrunk);

        log::trace!("del_unit index={} col={} shape={:?}", index, col, self.shape());
        Ok(())
    }

    fn replace_all(&mut self, values: Vec<Matrix<T>>) {
        for ((_, slot), value) in self.vars.iter_mut().zip(values) {
            *slot = value;
        }
        self.placeholder = false;
    }
}

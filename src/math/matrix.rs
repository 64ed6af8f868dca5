/// Row-major `rows × cols` buffer whose shape is fixed at allocation.
///
/// Shape disagreements inside the engine are programming errors and panic;
/// the public `Network` API validates caller-supplied lengths before any
/// matrix operation runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix::filled(rows, cols, 0.0)
    }

    /// Every entry set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![value; cols]; rows],
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix rows must all have the same length"
        );
        Matrix { rows, cols, data }
    }

    /// W·x, one weighted sum per row.
    pub fn mat_vec(&self, x: &[f64]) -> Vec<f64> {
        assert_eq!(self.cols, x.len(), "Matrices are of incorrect sizes");
        self.data
            .iter()
            .map(|row| row.iter().zip(x).map(|(w, v)| w * v).sum())
            .collect()
    }

    /// Wᵀ·v, one weighted sum per column.
    pub fn transpose_vec(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(self.rows, v.len(), "Matrices are of incorrect sizes");
        let mut res = vec![0.0; self.cols];
        for (row, &scale) in self.data.iter().zip(v) {
            for (acc, w) in res.iter_mut().zip(row) {
                *acc += w * scale;
            }
        }
        res
    }

    /// Overwrites every entry with `f(left[r], right[c])`.
    pub fn outer_into<F>(&mut self, left: &[f64], right: &[f64], f: F)
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_eq!(self.rows, left.len(), "Matrices are of incorrect sizes");
        assert_eq!(self.cols, right.len(), "Matrices are of incorrect sizes");
        for (row, &l) in self.data.iter_mut().zip(left) {
            for (entry, &r) in row.iter_mut().zip(right) {
                *entry = f(l, r);
            }
        }
    }

    /// self −= scale · rhs, in place.
    pub fn scaled_sub_assign(&mut self, scale: f64, rhs: &Matrix) {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }
        for (row, rhs_row) in self.data.iter_mut().zip(&rhs.data) {
            for (entry, g) in row.iter_mut().zip(rhs_row) {
                *entry -= scale * g;
            }
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

use rand::prelude::*;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Fills every entry with an independent uniform sample from [-1, 1).
    pub fn random(rows: usize, cols: usize) -> Matrix {
        Matrix::random_with(rows, cols, &mut rand::thread_rng())
    }

    /// Same as `random`, but draws from a caller-supplied generator so
    /// tests can seed a `StdRng` for reproducible weights.
    pub fn random_with<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }
}

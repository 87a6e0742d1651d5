use std::ops::{Index, IndexMut};

use crate::errors::MatrixError;
use crate::matrix::Matrix;

impl Index<[usize; 2]> for Matrix {
    type Output = f32;

    fn index(&self, index: [usize; 2]) -> &Self::Output {
        let [row, col] = index;
        let (rows, cols) = self.data.dim();
        self.data.get((row, col)).unwrap_or_else(|| {
            panic!(
                "{}",
                MatrixError::IndexOutOfBounds {
                    row,
                    col,
                    rows,
                    cols
                }
            )
        })
    }
}

impl IndexMut<[usize; 2]> for Matrix {
    fn index_mut(&mut self, index: [usize; 2]) -> &mut Self::Output {
        let [row, col] = index;
        let (rows, cols) = self.data.dim();
        self.data.get_mut((row, col)).unwrap_or_else(|| {
            panic!(
                "{}",
                MatrixError::IndexOutOfBounds {
                    row,
                    col,
                    rows,
                    cols
                }
            )
        })
    }
}

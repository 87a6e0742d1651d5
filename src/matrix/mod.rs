/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 二维稠密矩阵（行优先，f32），是文本编解码读写的默认载体
 */

use ndarray::Array2;
use rand::distributions::{Distribution, Uniform};

use crate::errors::MatrixError;

mod ops {
    pub mod eq;
    pub mod index;
}

mod dense;
mod property;


pub use dense::DenseMatrix;

/// 定义矩阵的结构体：固定行数、列数的二维`f32`数组。
/// 注：与张量不同，这里只有矩阵（阶数恒为2），行数或列数可以为0（即空矩阵）。
#[derive(Debug, Clone)]
pub struct Matrix {
    data: Array2<f32>,
}

impl Matrix {
    /// 按行优先顺序用`data`创建一个`rows`×`cols`的矩阵。
    /// 注：`data`的长度必须等于`rows * cols`，否则会panic。
    pub fn new(data: &[f32], rows: usize, cols: usize) -> Matrix {
        assert!(
            rows.checked_mul(cols) == Some(data.len()),
            "{}",
            MatrixError::DataLengthMismatch {
                rows,
                cols,
                data_len: data.len(),
            }
        );
        let data = Array2::from_shape_fn((rows, cols), |(r, c)| data[r * cols + c]);
        Matrix { data }
    }

    /// 创建一个全零矩阵
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// 创建一个随机矩阵，其值在[min, max]的闭区间
    pub fn new_random(min: f32, max: f32, rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let uniform = Uniform::from(min..=max);
        Matrix {
            data: Array2::from_shape_fn((rows, cols), |_| uniform.sample(&mut rng)),
        }
    }

    /// 由`ndarray`的二维数组直接构造
    pub fn from_array(data: Array2<f32>) -> Matrix {
        Matrix { data }
    }

    pub fn as_array(&self) -> &Array2<f32> {
        &self.data
    }

    pub fn into_array(self) -> Array2<f32> {
        self.data
    }
}

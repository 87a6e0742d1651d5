/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 矩阵的属性方法（形状、元素读取等），以及重置形状、转置
 */

use super::Matrix;
use ndarray::Array2;

impl Matrix {
    /// 形状恒为`[行数, 列数]`
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn num_rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn num_cols(&self) -> usize {
        self.data.ncols()
    }

    /// 矩阵中所有元素的数量
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 行数或列数为0时即为空矩阵
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 读取单个元素，越界时返回None
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.data.get((row, col)).copied()
    }

    /// 取第`row`行的（克隆）数据
    pub fn row(&self, row: usize) -> Vec<f32> {
        self.data.row(row).to_vec()
    }

    /// 按行优先顺序展开为一维数据
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    /// 重置为`rows`×`cols`的全零矩阵，原有数据不保留
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.data = Array2::zeros((rows, cols));
    }

    /// 返回转置后的新矩阵（行优先存储）
    pub fn transpose(&self) -> Matrix {
        Matrix {
            data: self.data.t().as_standard_layout().into_owned(),
        }
    }
}

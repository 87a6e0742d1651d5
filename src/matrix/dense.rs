use ndarray::Array2;

use super::Matrix;

/// 文本编解码所需的最小矩阵接口。
/// 编解码器只通过本trait读写矩阵，故任何二维`f32`容器实现它后都可直接读写文本文件。
pub trait DenseMatrix {
    fn num_rows(&self) -> usize;

    fn num_cols(&self) -> usize;

    /// 读取`(row, col)`处的元素，越界时可以panic
    fn element(&self, row: usize, col: usize) -> f32;

    /// 写入`(row, col)`处的元素，越界时可以panic
    fn set_element(&mut self, row: usize, col: usize, value: f32);

    /// 重置为`rows`×`cols`的全零矩阵
    fn resize(&mut self, rows: usize, cols: usize);
}

impl DenseMatrix for Matrix {
    fn num_rows(&self) -> usize {
        Matrix::num_rows(self)
    }

    fn num_cols(&self) -> usize {
        Matrix::num_cols(self)
    }

    fn element(&self, row: usize, col: usize) -> f32 {
        self[[row, col]]
    }

    fn set_element(&mut self, row: usize, col: usize, value: f32) {
        self[[row, col]] = value;
    }

    fn resize(&mut self, rows: usize, cols: usize) {
        Matrix::resize(self, rows, cols);
    }
}

impl DenseMatrix for Array2<f32> {
    fn num_rows(&self) -> usize {
        self.nrows()
    }

    fn num_cols(&self) -> usize {
        self.ncols()
    }

    fn element(&self, row: usize, col: usize) -> f32 {
        self[[row, col]]
    }

    fn set_element(&mut self, row: usize, col: usize, value: f32) {
        self[[row, col]] = value;
    }

    fn resize(&mut self, rows: usize, cols: usize) {
        *self = Array2::zeros((rows, cols));
    }
}

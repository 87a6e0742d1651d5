use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatrixError {
    // 构造矩阵用
    #[error("数据长度须等于行数×列数：形状为[{rows}, {cols}]，但数据长度为{data_len}")]
    DataLengthMismatch {
        rows: usize,
        cols: usize,
        data_len: usize,
    },
    // 元素访问
    #[error("索引[{row}, {col}]越界：矩阵形状为[{rows}, {cols}]")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

use std::cmp::PartialEq;

use crate::matrix::Matrix;

//↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的矩阵 == （不）带引用的矩阵↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓
// 形状不同的矩阵一律不相等（哪怕都是空矩阵）
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<'a> PartialEq<&'a Matrix> for Matrix {
    fn eq(&self, other: &&'a Matrix) -> bool {
        self.data == other.data
    }
}

impl<'a> PartialEq<Matrix> for &'a Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.data == other.data
    }
}
//↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的矩阵 == （不）带引用的矩阵↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑

/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 经由临时文件暂存矩阵
 *
 * 临时文件由`tempfile`直接创建，不调用外部`mktemp`。
 * 暂存文件写入后即脱离`tempfile`的自动清理，由调用方（或`load_from_temp_file_and_delete`）删除。
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::{CsvCodec, CsvError};
use crate::matrix::{DenseMatrix, Matrix};

const STAGING_PREFIX: &str = "matrix-";

impl CsvCodec {
    /// 将矩阵写入新建的临时文件，返回该文件路径
    pub fn stage_to_temp_file<M: DenseMatrix + ?Sized>(
        &self,
        matrix: &M,
    ) -> Result<PathBuf, CsvError> {
        self.stage_to_temp_file_with_suffix(matrix, "")
    }

    /// 将矩阵写入新建的、文件名以`suffix`结尾的临时文件。
    /// 返回的就是实际写入的文件路径（含后缀）
    pub fn stage_to_temp_file_with_suffix<M: DenseMatrix + ?Sized>(
        &self,
        matrix: &M,
        suffix: &str,
    ) -> Result<PathBuf, CsvError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(STAGING_PREFIX).suffix(suffix);
        let created = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        let mut temp_file = created.map_err(|source| CsvError::Open {
            path: self.temp_dir.clone().unwrap_or_else(std::env::temp_dir),
            source,
        })?;

        // 写入失败时`temp_file`被丢弃，文件随之删除
        self.write_to(temp_file.as_file_mut(), matrix)?;
        let path = temp_file.into_temp_path().keep().map_err(io::Error::from)?;

        info!("矩阵已暂存至 {:?}", path);
        Ok(path)
    }

    /// 将矩阵写入指定文件，返回该文件路径
    pub fn stage_to_file<M: DenseMatrix + ?Sized>(
        &self,
        matrix: &M,
        path: impl AsRef<Path>,
    ) -> Result<PathBuf, CsvError> {
        let path = path.as_ref();
        self.write(path, matrix)?;
        info!("矩阵已暂存至 {:?}", path);
        Ok(path.to_path_buf())
    }

    /// 读回暂存文件，随后删除该文件。
    ///
    /// 读回的矩阵须为`rows`×`cols`，否则返回`CsvError::ShapeMismatch`；
    /// 读到空文件且给定形状为空矩阵时，按给定形状返回（空文件无法记录列数）。
    /// 无论解析成功与否都会尝试删除文件，删除失败只记警告。
    pub fn load_from_temp_file_and_delete(
        &self,
        path: impl AsRef<Path>,
        rows: usize,
        cols: usize,
    ) -> Result<Matrix, CsvError> {
        let path = path.as_ref();
        let loaded = self.read(path);
        if !matches!(loaded, Err(CsvError::Open { .. })) {
            remove_staged_file(path);
        }
        let matrix = loaded?;

        if matrix.num_rows() == rows && matrix.num_cols() == cols {
            return Ok(matrix);
        }
        // 只有空文件（0 行）不记录形状，此时才按给定的空形状返回
        if matrix.num_rows() == 0 && (rows == 0 || cols == 0) {
            return Ok(Matrix::zeros(rows, cols));
        }
        Err(CsvError::ShapeMismatch {
            expected: [rows, cols],
            found: [matrix.num_rows(), matrix.num_cols()],
        })
    }
}

fn remove_staged_file(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!("删除暂存文件 {:?} 失败: {}", path, e);
    }
}

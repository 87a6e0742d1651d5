//! 矩阵文本编解码模块
//!
//! 在内存中的稠密矩阵与逗号/空格分隔的文本文件之间互转，
//! 并提供经由临时文件暂存矩阵的辅助函数，便于与外部脚本、进程交换中间结果。
//!
//! # 主要组件
//!
//! - [`CsvCodec`]: 编解码器，持有格式配置
//! - [`CsvOptions`]: 分隔符、读取方向、表头、不齐整行等配置
//! - [`CsvError`]: 读写错误类型
//!
//! # 文件格式
//!
//! 每行对应矩阵的一行，各值以分隔符隔开，行以`\n`结束：
//!
//! ```text
//! 0.1,0.7,0.2
//! 0.3,0.3,0.4
//! ```
//!
//! # 使用示例
//!
//! ```ignore
//! use matrix_text_io::csv::{self, CsvCodec, CsvOptions, Orientation};
//!
//! // 暂存到临时文件，交给外部脚本处理后再读回
//! let path = csv::stage_to_temp_file(&probs)?;
//! run_script(&path);
//! let probs = csv::load_from_temp_file_and_delete(&path, rows, cols)?;
//!
//! // 以转置方式读取空格分隔的文件
//! let codec = CsvCodec::new(CsvOptions::space_separated().orientation(Orientation::Transposed));
//! let matrix = codec.read("activations.txt")?;
//! ```

use std::path::{Path, PathBuf};

use crate::matrix::{DenseMatrix, Matrix};

pub mod error;
pub mod options;
mod reader;
mod staging;
mod writer;

#[cfg(test)]
mod tests;

// Re-exports
pub use error::CsvError;
pub use options::{CsvOptions, Delimiter, Orientation, RaggedPolicy};

/// 矩阵文本编解码器
///
/// 读写方法分别在`reader`、`writer`、`staging`中实现。
#[derive(Debug, Clone, Default)]
pub struct CsvCodec {
    options: CsvOptions,
    /// 暂存文件所在目录，None 则使用系统临时目录
    temp_dir: Option<PathBuf>,
}

impl CsvCodec {
    pub fn new(options: CsvOptions) -> Self {
        Self {
            options,
            temp_dir: None,
        }
    }

    /// 设置暂存文件所在目录
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    pub fn options(&self) -> &CsvOptions {
        &self.options
    }
}

/// 将矩阵写入`path`（已存在则覆盖）
pub fn write_matrix<M: DenseMatrix + ?Sized>(
    path: impl AsRef<Path>,
    matrix: &M,
    delimiter: Delimiter,
    trailing_delimiter: bool,
) -> Result<(), CsvError> {
    let options = CsvOptions::default()
        .delimiter(delimiter)
        .trailing_delimiter(trailing_delimiter);
    CsvCodec::new(options).write(path, matrix)
}

/// 从`path`读取矩阵，行列数由文件内容推断
pub fn read_matrix(
    path: impl AsRef<Path>,
    delimiter: Delimiter,
    orientation: Orientation,
) -> Result<Matrix, CsvError> {
    let options = CsvOptions::default()
        .delimiter(delimiter)
        .orientation(orientation);
    CsvCodec::new(options).read(path)
}

/// 将矩阵以默认格式写入新建的临时文件，返回该文件路径（需调用方自行清理）
pub fn stage_to_temp_file<M: DenseMatrix + ?Sized>(matrix: &M) -> Result<PathBuf, CsvError> {
    CsvCodec::default().stage_to_temp_file(matrix)
}

/// 同[`stage_to_temp_file`]，但临时文件名以`suffix`结尾
pub fn stage_to_temp_file_with_suffix<M: DenseMatrix + ?Sized>(
    matrix: &M,
    suffix: &str,
) -> Result<PathBuf, CsvError> {
    CsvCodec::default().stage_to_temp_file_with_suffix(matrix, suffix)
}

/// 将矩阵以默认格式写入指定文件，返回该文件路径
pub fn stage_to_file<M: DenseMatrix + ?Sized>(
    matrix: &M,
    path: impl AsRef<Path>,
) -> Result<PathBuf, CsvError> {
    CsvCodec::default().stage_to_file(matrix, path)
}

/// 读回暂存文件并删除之，读回的矩阵形状须为`rows`×`cols`
pub fn load_from_temp_file_and_delete(
    path: impl AsRef<Path>,
    rows: usize,
    cols: usize,
) -> Result<Matrix, CsvError> {
    CsvCodec::default().load_from_temp_file_and_delete(path, rows, cols)
}

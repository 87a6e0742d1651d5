use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{CsvCodec, CsvError};
use crate::matrix::DenseMatrix;

// 写入文本
impl CsvCodec {
    /// 将矩阵写入`path`：文件不存在则创建，存在则清空后覆盖
    pub fn write<M: DenseMatrix + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        matrix: &M,
    ) -> Result<(), CsvError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| CsvError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_to(BufWriter::new(file), matrix)
    }

    /// 将矩阵写入任意`Write`
    ///
    /// 每行对应矩阵的一行，各值按`f32`默认的十进制文本输出（可无损读回），
    /// 以分隔符隔开，行尾为`\n`。
    /// 列数为0时每行只有`\n`；行数为0时什么也不写。
    pub fn write_to<W: Write, M: DenseMatrix + ?Sized>(
        &self,
        mut writer: W,
        matrix: &M,
    ) -> Result<(), CsvError> {
        let delimiter = self.options.delimiter.as_char();
        let cols = matrix.num_cols();

        let mut line = String::new();
        for row in 0..matrix.num_rows() {
            line.clear();
            for col in 0..cols {
                if col > 0 {
                    line.push(delimiter);
                }
                line.push_str(&matrix.element(row, col).to_string());
            }
            if self.options.trailing_delimiter && cols > 0 {
                line.push(delimiter);
            }
            line.push('\n');
            writer.write_all(line.as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }
}

/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 从分隔文本读取矩阵
 *
 * 分两遍处理：
 * 1. 收集所有数据行，得到行数 M，并由代表行得到字段数 N；
 * 2. 逐字段解析为 f32。
 * 全部解析成功后才重置并填充目标矩阵，失败时目标矩阵保持原样。
 */

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use super::{CsvCodec, CsvError, Orientation, RaggedPolicy};
use crate::matrix::{DenseMatrix, Matrix};

/// 解析后的文本表格，`values`按文件行优先存放
struct TextTable {
    num_lines: usize,
    num_fields: usize,
    values: Vec<f32>,
}

// 读取文本
impl CsvCodec {
    /// 从`path`读取矩阵，形状由文件内容推断：
    /// 不转置时为`[行数, 字段数]`，转置时为`[字段数, 行数]`
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Matrix, CsvError> {
        let mut matrix = Matrix::zeros(0, 0);
        self.read_into(path, &mut matrix)?;
        Ok(matrix)
    }

    /// 从`path`读取到调用方的矩阵中（先重置形状再填充）
    pub fn read_into<M: DenseMatrix + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        matrix: &mut M,
    ) -> Result<(), CsvError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CsvError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_from(BufReader::new(file), matrix)?;
        debug!(
            "从 {:?} 读入 {}×{} 矩阵",
            path,
            matrix.num_rows(),
            matrix.num_cols()
        );
        Ok(())
    }

    /// 从任意`BufRead`读取到调用方的矩阵中
    pub fn read_from<R: BufRead, M: DenseMatrix + ?Sized>(
        &self,
        reader: R,
        matrix: &mut M,
    ) -> Result<(), CsvError> {
        let table = self.parse_table(reader)?;
        self.fill(table, matrix);
        Ok(())
    }

    fn parse_table<R: BufRead>(&self, reader: R) -> Result<TextTable, CsvError> {
        let delimiter = self.options.delimiter.as_char();

        // 第一遍：收集数据行（连同从 1 开始的物理行号），确定字段数
        let mut lines = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if index < self.options.skip_header_lines {
                continue;
            }
            lines.push((index + 1, line));
        }
        // 代表行不存在时字段数为 0，得到零宽矩阵
        let num_fields = lines
            .get(self.options.field_count_line)
            .map_or(0, |(_, line)| split_fields(line, delimiter).len());

        // 第二遍：逐字段解析
        let mut values = Vec::with_capacity(lines.len() * num_fields);
        let mut ragged_lines = 0;
        for (line_number, line) in &lines {
            let fields = split_fields(line, delimiter);
            if fields.len() != num_fields {
                match self.options.ragged {
                    RaggedPolicy::Strict => {
                        return Err(CsvError::RaggedLine {
                            line: *line_number,
                            expected: num_fields,
                            found: fields.len(),
                        });
                    }
                    RaggedPolicy::Lenient => ragged_lines += 1,
                }
            }
            for n in 0..num_fields {
                let value = match fields.get(n) {
                    Some(text) => parse_field(text, *line_number, n + 1)?,
                    None => 0.0,
                };
                values.push(value);
            }
        }
        if ragged_lines > 0 {
            warn!(
                "共 {} 行的字段数不等于 {}，已补零或截断",
                ragged_lines, num_fields
            );
        }

        Ok(TextTable {
            num_lines: lines.len(),
            num_fields,
            values,
        })
    }

    fn fill<M: DenseMatrix + ?Sized>(&self, table: TextTable, matrix: &mut M) {
        let TextTable {
            num_lines,
            num_fields,
            values,
        } = table;

        match self.options.orientation {
            Orientation::Normal => matrix.resize(num_lines, num_fields),
            Orientation::Transposed => matrix.resize(num_fields, num_lines),
        }
        for m in 0..num_lines {
            for n in 0..num_fields {
                let value = values[m * num_fields + n];
                match self.options.orientation {
                    Orientation::Normal => matrix.set_element(m, n, value),
                    Orientation::Transposed => matrix.set_element(n, m, value),
                }
            }
        }
    }
}

/// 切分一行的字段：忽略行尾的`\r`及单个行尾分隔符，空行没有字段
fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let line = line.strip_suffix(delimiter).unwrap_or(line);
    if line.is_empty() {
        return Vec::new();
    }
    line.split(delimiter).collect()
}

fn parse_field(text: &str, line: usize, field: usize) -> Result<f32, CsvError> {
    text.trim().parse::<f32>().map_err(|_| CsvError::Parse {
        line,
        field,
        text: text.to_string(),
    })
}

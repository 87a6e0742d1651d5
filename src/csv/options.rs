/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 文本格式配置：分隔符、行尾分隔符、读取方向、表头与不齐整行的处理策略
 *
 * 既可链式设置，也可从 JSON 配置读入（缺省字段取默认值）：
 * {"delimiter": "space", "orientation": "transposed", "ragged": "lenient"}
 */

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::CsvError;

/// 字段分隔符
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// 逗号（CSV）
    #[default]
    Comma,
    /// 空格
    Space,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Space => ' ',
        }
    }
}

/// 读取方向：文件的行对应矩阵的行（`Normal`）还是矩阵的列（`Transposed`）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Normal,
    Transposed,
}

/// 各行字段数不一致时的处理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaggedPolicy {
    /// 报错（`CsvError::RaggedLine`）
    #[default]
    Strict,
    /// 字段不足的行补零，多出的字段忽略
    Lenient,
}

/// 矩阵文本格式配置
///
/// # 示例
/// ```ignore
/// let options = CsvOptions::default()
///     .delimiter(Delimiter::Space)
///     .orientation(Orientation::Transposed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    pub(crate) delimiter: Delimiter,
    /// 写入时是否在每行最后一个值后也追加分隔符
    pub(crate) trailing_delimiter: bool,
    pub(crate) orientation: Orientation,
    /// 读取时跳过的表头行数
    pub(crate) skip_header_lines: usize,
    /// 用于确定字段数的数据行（跳过表头后从 0 计）
    pub(crate) field_count_line: usize,
    pub(crate) ragged: RaggedPolicy,
}

impl Default for CsvOptions {
    /// 逗号分隔、行尾无分隔符、不转置、无表头、严格校验字段数
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Comma,
            trailing_delimiter: false,
            orientation: Orientation::Normal,
            skip_header_lines: 0,
            field_count_line: 0,
            ragged: RaggedPolicy::Strict,
        }
    }
}

impl CsvOptions {
    /// 空格分隔、行尾带分隔符的格式
    pub fn space_separated() -> Self {
        Self {
            delimiter: Delimiter::Space,
            trailing_delimiter: true,
            ..Self::default()
        }
    }

    /// 设置字段分隔符
    pub fn delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// 设置写入时是否追加行尾分隔符（读取时总是容忍单个行尾分隔符）
    pub fn trailing_delimiter(mut self, trailing_delimiter: bool) -> Self {
        self.trailing_delimiter = trailing_delimiter;
        self
    }

    /// 设置读取方向
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// 设置读取时跳过的表头行数
    pub fn skip_header_lines(mut self, skip_header_lines: usize) -> Self {
        self.skip_header_lines = skip_header_lines;
        self
    }

    /// 设置用于确定字段数的数据行
    pub fn field_count_line(mut self, field_count_line: usize) -> Self {
        self.field_count_line = field_count_line;
        self
    }

    /// 设置不齐整行的处理策略
    pub fn ragged(mut self, ragged: RaggedPolicy) -> Self {
        self.ragged = ragged;
        self
    }

    pub fn get_delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn get_trailing_delimiter(&self) -> bool {
        self.trailing_delimiter
    }

    pub fn get_orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn get_skip_header_lines(&self) -> usize {
        self.skip_header_lines
    }

    pub fn get_field_count_line(&self) -> usize {
        self.field_count_line
    }

    pub fn get_ragged(&self) -> RaggedPolicy {
        self.ragged
    }

    /// 从 JSON 字符串读入配置
    pub fn from_json_str(json: &str) -> Result<Self, CsvError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从 JSON 文件读入配置
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CsvError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CsvError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// 序列化为 JSON 字符串
    pub fn to_json_string(&self) -> Result<String, CsvError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//! 矩阵文本编解码错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 矩阵读写文本文件相关错误
#[derive(Debug, Error)]
pub enum CsvError {
    /// 文件无法打开（读、写均适用）
    #[error("无法打开文件 {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 字段无法解析为浮点数（行号、字段序号均从 1 开始）
    #[error("第 {line} 行第 {field} 个字段无法解析为浮点数: {text:?}")]
    Parse {
        line: usize,
        field: usize,
        text: String,
    },

    /// 严格模式下某行字段数与其余行不一致
    #[error("第 {line} 行字段数不一致: 期望 {expected}, 实际 {found}")]
    RaggedLine {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// 读回的矩阵形状与调用方给定的不符
    #[error("形状不匹配: 期望 {expected:?}, 实际 {found:?}")]
    ShapeMismatch {
        expected: [usize; 2],
        found: [usize; 2],
    },

    /// 配置解析失败
    #[error("配置解析失败: {0}")]
    Config(#[from] serde_json::Error),
}

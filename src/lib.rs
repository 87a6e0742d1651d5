//! # Matrix Text IO
//!
//! 神经网络流水线中的中间矩阵（激活值、概率等）与纯文本（逗号/空格分隔）之间的互转，
//! 以及经由临时文件暂存矩阵的辅助函数，便于和外部脚本、进程交换数据。
//!
//! - [`matrix`]: 二维稠密矩阵及编解码所依赖的矩阵接口
//! - [`csv`]: 文本编解码与暂存
//! - [`errors`]: 矩阵相关错误
//!
//! 日志通过`log`门面输出，由宿主程序决定是否安装日志实现。

pub mod csv;
pub mod errors;
pub mod matrix;

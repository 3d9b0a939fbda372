//! 错误类型定义

use thiserror::Error;

/// 象棋规则与格式错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChessError {
    /// 无效的记谱字符串
    #[error("Invalid notation '{input}': {reason}")]
    InvalidNotation { input: String, reason: String },

    /// 无效的走法（越界或起点无子）
    #[error("Invalid move: from ({from_x}, {from_y}) to ({to_x}, {to_y})")]
    InvalidMove {
        from_x: i8,
        from_y: i8,
        to_x: i8,
        to_y: i8,
    },

    /// 没有棋子
    #[error("No piece at position ({x}, {y})")]
    NoPiece { x: i8, y: i8 },

    /// 无效的布局字符串
    #[error("Invalid layout: {reason}")]
    InvalidLayout { reason: String },
}

/// 核心操作结果类型
pub type Result<T> = std::result::Result<T, ChessError>;

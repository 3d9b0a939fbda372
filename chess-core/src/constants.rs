//! 常量定义

/// 棋盘边长（行数与列数）
pub const BOARD_SIZE: usize = 8;

/// 棋盘格子总数
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 空格的符号
pub const EMPTY_SYMBOL: char = '.';

/// 初始布局，第 0 行（黑方底线）在前
pub const INITIAL_LAYOUT: &str = concat!(
    "rnbqkbnr",
    "pppppppp",
    "........",
    "........",
    "........",
    "........",
    "PPPPPPPP",
    "RNBQKBNR",
);

/// 初始局面的棋子数
pub const INITIAL_PIECE_COUNT: usize = 32;

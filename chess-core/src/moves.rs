//! 走法与走法生成
//!
//! 这里的走法是“伪走法”：任何有子的格子都可以走到相邻的 8 个格子之一，
//! 也可以原地不动。不区分棋子类型和阵营，也不检查终点的内容。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::notation::Notation;
use crate::piece::Position;

/// 走法
///
/// 只描述“把起点上的东西搬到终点”，不记录被吃的棋子。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始位置
    pub from: Position,
    /// 目标位置
    pub to: Position,
}

impl Move {
    /// 创建新走法
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// 从四个坐标创建走法（不检查边界）
    pub fn from_coords(start_x: i8, start_y: i8, end_x: i8, end_y: i8) -> Self {
        Self {
            from: Position::new_unchecked(start_x, start_y),
            to: Position::new_unchecked(end_x, end_y),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Notation::to_algebraic(self) {
            Some(text) => f.write_str(&text),
            None => write!(f, "{} -> {}", self.from, self.to),
        }
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 相邻偏移，按 (dy, dx) 嵌套顺序排列，包含 (0, 0)
    const OFFSETS: [(i8, i8); 9] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 0),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    /// 生成所有伪走法
    ///
    /// 起点按行优先（y 外层，x 内层）遍历，每个起点的偏移按 dy 外层、
    /// dx 内层从 -1 到 1 遍历。顺序决定了搜索时同分走法的取舍，必须稳定。
    pub fn generate(board: &Board) -> Vec<Move> {
        let mut moves = Vec::with_capacity(board.occupied_count() * Self::OFFSETS.len());

        for y in 0..BOARD_SIZE as i8 {
            for x in 0..BOARD_SIZE as i8 {
                let from = Position::new_unchecked(x, y);
                if board.get(from).is_none() {
                    continue;
                }
                Self::generate_square_moves(from, &mut moves);
            }
        }

        moves
    }

    /// 生成单个起点的走法
    fn generate_square_moves(from: Position, moves: &mut Vec<Move>) {
        for (dy, dx) in Self::OFFSETS {
            if let Some(to) = from.offset(dx, dy) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

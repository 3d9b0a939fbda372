//! 棋子定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, EMPTY_SYMBOL};

/// 棋子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    /// 王
    King,
    /// 后
    Queen,
    /// 车
    Rook,
    /// 象
    Bishop,
    /// 马
    Knight,
    /// 兵
    Pawn,
}

impl PieceType {
    /// 获取棋子的基础分值（用于子力评估）
    pub fn value(&self) -> i32 {
        match self {
            PieceType::King => 10000,
            PieceType::Queen => 900,
            PieceType::Rook => 500,
            PieceType::Bishop => 330,
            PieceType::Knight => 320,
            PieceType::Pawn => 100,
        }
    }

    /// 获取符号（白方大写，黑方小写）
    pub fn to_symbol(&self, side: Side) -> char {
        let c = match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Rook => 'r',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Pawn => 'p',
        };
        match side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// 从符号解析
    pub fn from_symbol(c: char) -> Option<(PieceType, Side)> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'k' => PieceType::King,
            'q' => PieceType::Queen,
            'r' => PieceType::Rook,
            'b' => PieceType::Bishop,
            'n' => PieceType::Knight,
            'p' => PieceType::Pawn,
            _ => return None,
        };
        Some((piece_type, side))
    }
}

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 白方（先手，在下方）
    White,
    /// 黑方（后手，在上方）
    Black,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// 棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
}

impl Piece {
    /// 创建新棋子
    pub fn new(piece_type: PieceType, side: Side) -> Self {
        Self { piece_type, side }
    }

    /// 获取符号
    pub fn to_symbol(&self) -> char {
        self.piece_type.to_symbol(self.side)
    }

    /// 从符号解析
    pub fn from_symbol(c: char) -> Option<Piece> {
        PieceType::from_symbol(c).map(|(piece_type, side)| Piece { piece_type, side })
    }

    /// 格子内容的符号，空格为 `.`
    pub fn cell_symbol(cell: Option<Piece>) -> char {
        cell.map_or(EMPTY_SYMBOL, |piece| piece.to_symbol())
    }

    /// 获取棋子分值
    pub fn value(&self) -> i32 {
        self.piece_type.value()
    }
}

/// 棋盘位置
///
/// 坐标使用有符号整数，越界坐标（如 -1、8）可以被表示，由
/// [`Position::is_valid`] 判定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 列 (0-7)，对应 a-h
    pub x: i8,
    /// 行 (0-7)，0 为黑方底线（第 8 横线）
    pub y: i8,
}

impl Position {
    /// 创建新位置
    pub fn new(x: i8, y: i8) -> Option<Self> {
        let pos = Self { x, y };
        pos.is_valid().then_some(pos)
    }

    /// 创建新位置（不检查边界）
    pub const fn new_unchecked(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (0..BOARD_SIZE as i8).contains(&self.x) && (0..BOARD_SIZE as i8).contains(&self.y)
    }

    /// 获取偏移后的位置
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Position> {
        Position::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?)
    }

    /// 转换为数组索引
    ///
    /// # Panics
    ///
    /// 位置越界时 panic。
    pub fn to_index(&self) -> usize {
        assert!(self.is_valid(), "position {} is off the board", self);
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Position {
                x: (index % BOARD_SIZE) as i8,
                y: (index / BOARD_SIZE) as i8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

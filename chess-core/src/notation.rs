//! 坐标记谱法
//!
//! 格式：`<列><横线><列><横线>`，例如 `e2e4`。
//! - 列 `a`-`h` 对应 x = 0-7
//! - 横线 `1`-`8` 对应 y = 8 - 数字，第 8 横线是 y = 0

use crate::constants::BOARD_SIZE;
use crate::error::{ChessError, Result};
use crate::moves::Move;
use crate::piece::Position;

/// 记谱所需的字符数
const NOTATION_LEN: usize = 4;

/// 坐标记谱法
pub struct Notation;

impl Notation {
    /// 解析记谱字符串
    ///
    /// 只做字符到坐标的换算，不检查坐标范围：`i9a1` 之类会得到越界
    /// 坐标，由 `Board::is_valid_move` 拒绝。超过 4 个字符的部分被忽略。
    pub fn parse(input: &str) -> Result<Move> {
        let text = input.trim();
        let bytes = text.as_bytes();

        if bytes.len() < NOTATION_LEN {
            return Err(ChessError::InvalidNotation {
                input: text.to_string(),
                reason: format!("expected {} characters, got {}", NOTATION_LEN, bytes.len()),
            });
        }

        let head = &bytes[..NOTATION_LEN];
        if !head.is_ascii() {
            return Err(ChessError::InvalidNotation {
                input: text.to_string(),
                reason: "non-ASCII character".to_string(),
            });
        }

        Ok(Move::new(
            Self::parse_square(head[0], head[1]),
            Self::parse_square(head[2], head[3]),
        ))
    }

    /// 单个格子的换算，字节必须是 ASCII
    fn parse_square(file: u8, rank: u8) -> Position {
        let x = file as i8 - b'a' as i8;
        let y = BOARD_SIZE as i8 - (rank as i8 - b'0' as i8);
        Position::new_unchecked(x, y)
    }

    /// 转换为记谱字符串，坐标越界时返回 None
    pub fn to_algebraic(mv: &Move) -> Option<String> {
        let from = Self::square_name(mv.from)?;
        let to = Self::square_name(mv.to)?;
        Some(format!("{}{}", from, to))
    }

    /// 格子名称，例如 `e4`
    pub fn square_name(pos: Position) -> Option<String> {
        if !pos.is_valid() {
            return None;
        }
        let file = (b'a' + pos.x as u8) as char;
        let rank = BOARD_SIZE as i8 - pos.y;
        Some(format!("{}{}", file, rank))
    }
}

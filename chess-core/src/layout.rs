//! 棋盘布局字符串
//!
//! 64 个符号按行优先排列，第 0 行（黑方底线）在前：
//! 白方大写 `KQRBNP`，黑方小写 `kqrbnp`，空格为 `.`。
//! 空白和 `/` 只用于分隔，解析时忽略。
//!
//! 示例：
//! `rnbqkbnr/pppppppp/......../......../......../......../PPPPPPPP/RNBQKBNR`

use crate::board::Board;
use crate::constants::{BOARD_SIZE, EMPTY_SYMBOL, SQUARE_COUNT};
use crate::error::{ChessError, Result};
use crate::piece::{Piece, Position};

/// 布局字符串处理
pub struct Layout;

impl Layout {
    /// 解析布局字符串为棋盘
    pub fn parse(layout: &str) -> Result<Board> {
        let symbols: Vec<char> = layout
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if symbols.len() != SQUARE_COUNT {
            return Err(ChessError::InvalidLayout {
                reason: format!("Expected {} squares, got {}", SQUARE_COUNT, symbols.len()),
            });
        }

        let mut board = Board::empty();
        for (index, c) in symbols.into_iter().enumerate() {
            if c == EMPTY_SYMBOL {
                continue;
            }
            let piece = Piece::from_symbol(c).ok_or_else(|| ChessError::InvalidLayout {
                reason: format!("Invalid piece character: {}", c),
            })?;
            if let Some(pos) = Position::from_index(index) {
                board.set(pos, Some(piece));
            }
        }

        Ok(board)
    }

    /// 将棋盘转换为布局字符串（行之间用 `/` 分隔）
    pub fn to_string(board: &Board) -> String {
        let rows: Vec<String> = (0..BOARD_SIZE as i8)
            .map(|y| {
                (0..BOARD_SIZE as i8)
                    .map(|x| Piece::cell_symbol(board.piece_at(x, y)))
                    .collect()
            })
            .collect();
        rows.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INITIAL_LAYOUT;
    use crate::piece::{PieceType, Side};

    #[test]
    fn test_parse_initial() {
        let board = Layout::parse(INITIAL_LAYOUT).unwrap();
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_to_string_initial() {
        assert_eq!(
            Layout::to_string(&Board::initial()),
            "rnbqkbnr/pppppppp/......../......../......../......../PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn test_parse_separators() {
        let board = Layout::parse(
            "....k... ........ ........ ........ ........ ........ ........ ....K...",
        )
        .unwrap();

        assert_eq!(board.occupied_count(), 2);
        assert_eq!(
            board.piece_at(4, 0),
            Some(Piece::new(PieceType::King, Side::Black))
        );
        assert_eq!(
            board.piece_at(4, 7),
            Some(Piece::new(PieceType::King, Side::White))
        );
    }

    #[test]
    fn test_parse_wrong_length() {
        let result = Layout::parse("rnbqkbnr/pppppppp");
        assert!(matches!(result, Err(ChessError::InvalidLayout { .. })));
    }

    #[test]
    fn test_parse_invalid_character() {
        let layout = INITIAL_LAYOUT.replacen('.', "x", 1);
        let result = Layout::parse(&layout);
        assert!(matches!(result, Err(ChessError::InvalidLayout { .. })));
    }
}

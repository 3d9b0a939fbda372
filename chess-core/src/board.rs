//! 棋盘状态
//!
//! 棋盘只有一份，由对局和搜索共同就地修改。搜索通过 `apply_move` /
//! `undo_move` 成对调用（或 [`Board::with_move`]）来探索假想局面，
//! 不为每个节点复制棋盘。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, INITIAL_LAYOUT, SQUARE_COUNT};
use crate::error::{ChessError, Result};
use crate::moves::{Move, MoveGenerator};
use crate::piece::{Piece, Position};

/// 棋盘
///
/// 序列化为 64 个格子的数组，反序列化时校验长度。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Piece>>", into = "Vec<Option<Piece>>")]
pub struct Board {
    /// 8x8 棋盘，索引为 y * 8 + x
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: vec![None; SQUARE_COUNT],
        }
    }

    /// 创建初始棋盘
    pub fn initial() -> Self {
        Self {
            squares: INITIAL_LAYOUT.chars().map(Piece::from_symbol).collect(),
        }
    }

    /// 获取指定位置的棋子，越界返回 None
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if pos.is_valid() {
            self.squares[pos.to_index()]
        } else {
            None
        }
    }

    /// 设置指定位置的棋子，越界时忽略
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.is_valid() {
            self.squares[pos.to_index()] = piece;
        }
    }

    /// 读取 (x, y) 处的格子内容
    ///
    /// # Panics
    ///
    /// 坐标越界时 panic。
    pub fn piece_at(&self, x: i8, y: i8) -> Option<Piece> {
        self.squares[Position::new_unchecked(x, y).to_index()]
    }

    /// 走法是否可以执行：四个坐标都在棋盘内，且起点有子
    ///
    /// 不检查终点是否与起点相同，不检查棋子走法，也不检查轮到哪一方。
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        mv.from.is_valid() && mv.to.is_valid() && self.get(mv.from).is_some()
    }

    /// 执行走法：起点的内容覆盖终点，起点清空
    ///
    /// 调用方需要先用 [`Board::is_valid_move`] 校验，并在调用前保存
    /// 终点原有内容以便悔棋。
    ///
    /// # Panics
    ///
    /// 坐标越界时 panic。
    pub fn apply_move(&mut self, mv: &Move) {
        let from = mv.from.to_index();
        let to = mv.to.to_index();
        self.squares[to] = self.squares[from];
        self.squares[from] = None;
    }

    /// 校验后执行走法，返回终点原有的内容
    pub fn try_apply_move(&mut self, mv: &Move) -> Result<Option<Piece>> {
        if !mv.from.is_valid() || !mv.to.is_valid() {
            return Err(ChessError::InvalidMove {
                from_x: mv.from.x,
                from_y: mv.from.y,
                to_x: mv.to.x,
                to_y: mv.to.y,
            });
        }
        if self.get(mv.from).is_none() {
            return Err(ChessError::NoPiece {
                x: mv.from.x,
                y: mv.from.y,
            });
        }

        let captured = self.get(mv.to);
        self.apply_move(mv);
        Ok(captured)
    }

    /// 撤销走法：终点的内容放回起点，终点恢复为 `captured`
    ///
    /// `captured` 必须是 `apply_move` 之前终点的内容，否则棋盘无法还原。
    ///
    /// # Panics
    ///
    /// 坐标越界时 panic。
    pub fn undo_move(&mut self, mv: &Move, captured: Option<Piece>) {
        let from = mv.from.to_index();
        let to = mv.to.to_index();
        self.squares[from] = self.squares[to];
        self.squares[to] = captured;
    }

    /// 在走法生效期间执行 `f`，返回后撤销走法
    ///
    /// 记录终点内容、执行、调用 `f`、撤销，四步总是成对完成。
    pub fn with_move<T>(&mut self, mv: &Move, f: impl FnOnce(&mut Board) -> T) -> T {
        let captured = self.get(mv.to);
        self.apply_move(mv);
        let result = f(self);
        self.undo_move(mv, captured);
        result
    }

    /// 生成所有伪走法
    pub fn generate_moves(&self) -> Vec<Move> {
        MoveGenerator::generate(self)
    }

    /// 获取所有棋子（按行优先顺序）
    pub fn all_pieces(&self) -> Vec<(Position, Piece)> {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                let piece = (*cell)?;
                Position::from_index(index).map(|pos| (pos, piece))
            })
            .collect()
    }

    /// 有子格子的数量
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|cell| cell.is_some()).count()
    }

    /// 打印棋盘到标准输出
    pub fn print(&self) {
        print!("{}", self);
    }
}

impl TryFrom<Vec<Option<Piece>>> for Board {
    type Error = ChessError;

    fn try_from(squares: Vec<Option<Piece>>) -> Result<Self> {
        if squares.len() != SQUARE_COUNT {
            return Err(ChessError::InvalidLayout {
                reason: format!("Expected {} squares, got {}", SQUARE_COUNT, squares.len()),
            });
        }
        Ok(Self { squares })
    }
}

impl From<Board> for Vec<Option<Piece>> {
    fn from(board: Board) -> Self {
        board.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FILES: &str = "  a b c d e f g h";

        writeln!(f, "{}", FILES)?;
        for y in 0..BOARD_SIZE {
            let rank = BOARD_SIZE - y;
            write!(f, "{} ", rank)?;
            for x in 0..BOARD_SIZE {
                let cell = self.squares[y * BOARD_SIZE + x];
                write!(f, "{} ", Piece::cell_symbol(cell))?;
            }
            writeln!(f, "{}", rank)?;
        }
        writeln!(f, "{}", FILES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{PieceType, Side};

    fn snapshot(board: &Board) -> Vec<Option<Piece>> {
        (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .map(|(x, y)| board.piece_at(x, y))
            .collect()
    }

    #[test]
    fn test_initial_board() {
        let board = Board::initial();

        assert_eq!(
            board.piece_at(4, 7),
            Some(Piece::new(PieceType::King, Side::White))
        );
        assert_eq!(
            board.piece_at(3, 0),
            Some(Piece::new(PieceType::Queen, Side::Black))
        );
        assert_eq!(
            board.piece_at(0, 6),
            Some(Piece::new(PieceType::Pawn, Side::White))
        );
        assert_eq!(board.piece_at(4, 4), None);
        assert_eq!(board.occupied_count(), 32);
        assert_eq!(Board::default(), board);
    }

    #[test]
    fn test_e2e4() {
        let mut board = Board::initial();
        let mv = Move::from_coords(4, 6, 4, 4);

        assert!(board.is_valid_move(&mv));
        board.apply_move(&mv);

        assert_eq!(
            board.piece_at(4, 4),
            Some(Piece::new(PieceType::Pawn, Side::White))
        );
        assert_eq!(board.piece_at(4, 6), None);
        assert_eq!(board.occupied_count(), 32);
    }

    #[test]
    fn test_is_valid_move_bounds() {
        let board = Board::initial();

        assert!(!board.is_valid_move(&Move::from_coords(-1, 6, 4, 4)));
        assert!(!board.is_valid_move(&Move::from_coords(4, -1, 4, 4)));
        assert!(!board.is_valid_move(&Move::from_coords(4, 6, -1, 4)));
        assert!(!board.is_valid_move(&Move::from_coords(4, 6, 4, -1)));
        assert!(!board.is_valid_move(&Move::from_coords(8, 6, 4, 4)));
        assert!(!board.is_valid_move(&Move::from_coords(4, 8, 4, 4)));
        assert!(!board.is_valid_move(&Move::from_coords(4, 6, 8, 4)));
        assert!(!board.is_valid_move(&Move::from_coords(4, 6, 4, 8)));
        assert!(board.is_valid_move(&Move::from_coords(0, 7, 7, 0)));
    }

    #[test]
    fn test_is_valid_move_empty_source() {
        let board = Board::initial();
        assert!(!board.is_valid_move(&Move::from_coords(4, 4, 4, 3)));
    }

    #[test]
    fn test_is_valid_move_is_permissive() {
        let board = Board::initial();

        // 原地不动、吃己方棋子、跨越整个棋盘都视为有效
        assert!(board.is_valid_move(&Move::from_coords(4, 6, 4, 6)));
        assert!(board.is_valid_move(&Move::from_coords(4, 6, 3, 6)));
        assert!(board.is_valid_move(&Move::from_coords(0, 0, 7, 7)));
    }

    #[test]
    fn test_try_apply_move() {
        let mut board = Board::initial();

        let err = board.try_apply_move(&Move::from_coords(4, 6, 4, 8)).unwrap_err();
        assert!(matches!(err, ChessError::InvalidMove { to_y: 8, .. }));

        let err = board.try_apply_move(&Move::from_coords(4, 4, 4, 3)).unwrap_err();
        assert_eq!(err, ChessError::NoPiece { x: 4, y: 4 });
        assert_eq!(board, Board::initial());

        let captured = board.try_apply_move(&Move::from_coords(3, 7, 3, 0)).unwrap();
        assert_eq!(captured, Some(Piece::new(PieceType::Queen, Side::Black)));
        assert_eq!(board.occupied_count(), 31);
    }

    #[test]
    fn test_apply_undo_round_trip() {
        let mut board = Board::initial();
        let before = snapshot(&board);

        for mv in board.generate_moves() {
            let captured = board.piece_at(mv.to.x, mv.to.y);
            board.apply_move(&mv);
            board.undo_move(&mv, captured);
            assert_eq!(snapshot(&board), before, "round trip failed for {}", mv);
        }
    }

    #[test]
    fn test_capture_and_undo() {
        let mut board = Board::initial();
        // 白后直接吃掉黑后
        let mv = Move::from_coords(3, 7, 3, 0);
        let captured = board.piece_at(3, 0);

        board.apply_move(&mv);
        assert_eq!(board.occupied_count(), 31);
        assert_eq!(
            board.piece_at(3, 0),
            Some(Piece::new(PieceType::Queen, Side::White))
        );

        board.undo_move(&mv, captured);
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_same_square_move_round_trip() {
        let mut board = Board::initial();
        let mv = Move::from_coords(0, 0, 0, 0);
        let captured = board.piece_at(0, 0);

        // 原地走法会清空该格，悔棋后恢复
        board.apply_move(&mv);
        assert_eq!(board.piece_at(0, 0), None);

        board.undo_move(&mv, captured);
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_with_move_restores_board() {
        let mut board = Board::initial();
        let mv = Move::from_coords(1, 7, 2, 5);

        let seen = board.with_move(&mv, |b| b.piece_at(2, 5));

        assert_eq!(seen, Some(Piece::new(PieceType::Knight, Side::White)));
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_get_set_out_of_range() {
        let mut board = Board::empty();
        let off = Position::new_unchecked(8, 0);

        board.set(off, Some(Piece::new(PieceType::Pawn, Side::White)));
        assert_eq!(board.get(off), None);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_piece_at_out_of_range_panics() {
        let board = Board::initial();
        board.piece_at(8, 0);
    }

    #[test]
    fn test_display() {
        let board = Board::initial();
        board.print();
        assert_eq!(board, Board::initial());

        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[4], "5 . . . . . . . . 5");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
        assert_eq!(lines[9], "  a b c d e f g h");
    }

    #[test]
    fn test_deserialize_checks_square_count() {
        let err = serde_json::from_str::<Board>("[null]").unwrap_err();
        assert!(err.to_string().contains("Expected 64 squares, got 1"));

        let err = Board::try_from(vec![None; SQUARE_COUNT + 1]).unwrap_err();
        assert!(matches!(err, ChessError::InvalidLayout { .. }));

        let json = serde_json::to_string(&Board::initial()).unwrap();
        let board: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, Board::initial());
        assert_eq!(board.generate_moves().len(), 220);
    }

    #[test]
    fn test_all_pieces_row_major() {
        let board = Board::initial();
        let pieces = board.all_pieces();

        assert_eq!(pieces.len(), 32);
        assert_eq!(pieces[0].0, Position::new_unchecked(0, 0));
        assert_eq!(pieces[8].0, Position::new_unchecked(0, 1));
        assert_eq!(pieces[31].0, Position::new_unchecked(7, 7));
    }
}
